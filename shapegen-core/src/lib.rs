//! Core utilities for the shapegen type generator.
//!
//! This crate provides the small, dependency-light helpers shared by the
//! rest of the workspace: machine-readable comment tags, struct tag parsing,
//! and output file writing.

mod file;
mod struct_tag;
mod tags;

pub use file::{OutputFile, WriteResult};
pub use struct_tag::StructTag;
pub use tags::{CommentTags, TAG_MARKER, extract_comment_tags, filter_comment_tags};
