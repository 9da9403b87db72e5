use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for graph ingestion (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Ingestion errors. All of them are fatal: they mean the declaration
/// document handed over by the extractor violates its contract.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(shapegen::input::io),
        help("point --api-dir at a declaration document or a directory of them")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse declaration document")]
    #[diagnostic(code(shapegen::input::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("declaration '{name}' is defined more than once")]
    #[diagnostic(code(shapegen::input::duplicate))]
    DuplicateDeclaration { name: String },

    #[error("declaration '{from}' references unknown type '{target}'")]
    #[diagnostic(
        code(shapegen::input::unresolved),
        help("every referenced type must be listed in the document unless it is a builtin")
    )]
    UnresolvedReference { from: String, target: String },

    #[error("declaration '{name}' is defined in terms of itself")]
    #[diagnostic(
        code(shapegen::input::cycle),
        help("alias, constant and wrapper chains must end in a named type: {cycle}")
    )]
    CyclicDeclaration { name: String, cycle: String },

    #[error("{kind} declaration '{name}' has no {field}")]
    #[diagnostic(code(shapegen::input::malformed))]
    MissingField {
        name: String,
        kind: &'static str,
        field: &'static str,
    },

    #[error("package '{package}' lists unknown {what} '{name}'")]
    #[diagnostic(code(shapegen::input::unknown_member))]
    UnknownPackageMember {
        package: String,
        name: String,
        what: &'static str,
    },

    #[error("cannot infer the API version of package {package}")]
    #[diagnostic(
        code(shapegen::input::version),
        help(
            "the package basename '{version}' must match {pattern}; only versioned API packages should be selected"
        )
    )]
    InvalidVersion {
        package: String,
        version: String,
        pattern: &'static str,
    },

    #[error("no API packages found in {location}")]
    #[diagnostic(
        code(shapegen::input::empty),
        help("packages need a '+groupName=' tag and at least one type, or '+gencrdrefdocs:force'")
    )]
    NoPackages { location: String },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_at(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair into a byte span of length one.
pub(crate) fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    (line > 0).then(|| SourceSpan::new(SourceOffset::from_location(src, line, column), 1))
}
