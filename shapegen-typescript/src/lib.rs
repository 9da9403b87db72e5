//! TypeScript declaration renderer for shapegen.
//!
//! Turns an ingested [`ApiModel`](shapegen_graph::ApiModel) into a single
//! TypeScript document: one type per visible declaration, grouped by
//! versioned API package.
//!
//! ```ignore
//! use shapegen_config::Settings;
//! use shapegen_graph::ApiModel;
//! use shapegen_typescript::Renderer;
//!
//! let model = ApiModel::load("declarations.json")?;
//! let settings = Settings::from_file("config.json")?;
//! let output = Renderer::new(&model, &settings).render()?;
//! print!("{}", output.text);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod naming;
mod renderer;

pub mod ast;
pub mod policy;

pub use error::{RenderError, Result};
pub use naming::{is_identifier, property_name};
pub use policy::{ExternalTypes, Policy};
pub use renderer::{Layout, RenderOutput, Renderer};
