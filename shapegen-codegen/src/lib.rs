//! Shared code generation utilities for shapegen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`template`] - Placeholder templates for wrapping type names
//! - [`output`] - Post-render cleanup of generated text

pub mod builder;
pub mod output;
pub mod template;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use output::tidy;
pub use template::{PlaceholderTemplate, TemplateEngine, TemplateError};
