//! Declaration graph model for shapegen.
//!
//! This crate turns the raw declaration document produced by the source
//! extractor into an immutable, identity-addressed graph, groups it into
//! versioned API packages and derives the lookups the renderer needs.
//!
//! # Architecture
//!
//! ```text
//! declarations.json → RawUniverse → DeclGraph → VersionedPackage[] → ApiModel
//!                                                   ├── PackageIndex
//!                                                   └── ReferenceIndex
//! ```
//!
//! Everything here is built once per run and read-only afterwards, so an
//! [`ApiModel`] can be shared freely between concurrent render passes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod error;
mod graph;
mod index;
mod model;
mod name;
mod package;
mod raw;

pub use decl::{DeclId, DeclKind, Declaration, EXPORT_TAG, Member};
pub use error::{Error, Result};
pub use graph::DeclGraph;
pub use index::{PackageIndex, ReferenceIndex, UNKNOWN_API_GROUP};
pub use model::ApiModel;
pub use name::QualifiedName;
pub use package::{
    FORCE_INCLUDE_TAG, GROUP_NAME_TAG, VERSION_PATTERN, VersionedPackage, group_packages,
    select_packages,
};
pub use raw::{RawDecl, RawKind, RawMember, RawPackage, RawUniverse};
