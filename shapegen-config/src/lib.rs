//! Generator configuration for shapegen.
//!
//! The configuration document is loaded once, before any graph processing,
//! and is read-only afterwards. [`Config`] mirrors the document one to one;
//! [`Settings`] is the validated form with every pattern compiled.
//!
//! ```ignore
//! let settings = Settings::from_file("config.json")?;
//! assert!(!settings.is_hidden_member("status"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod settings;

pub use config::{Config, DEFAULT_SLICE_TEMPLATE, ExternalPackage};
pub use error::{Error, Result, SourceContext};
pub use parse::{Format, parse_config};
pub use settings::Settings;
