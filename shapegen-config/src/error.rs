use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 1)
        });
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.message().to_string(),
        })
    }

    /// Create an invalid pattern error pointing at the pattern text.
    pub fn invalid_pattern_error(
        &self,
        field: &'static str,
        pattern: &str,
        source: regex::Error,
    ) -> Box<Error> {
        Box::new(Error::InvalidPattern {
            src: self.named_source(),
            span: self.find_text(pattern),
            field,
            pattern: pattern.to_string(),
            source,
        })
    }

    /// Span of the first occurrence of `text` in the source, if present.
    fn find_text(&self, text: &str) -> Option<SourceSpan> {
        if text.is_empty() {
            return None;
        }
        self.src
            .find(text)
            .map(|offset| SourceSpan::from((offset, text.len())))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(shapegen::config::io),
        help("pass the generator configuration with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {message}")]
    #[diagnostic(
        code(shapegen::config::parse),
        help(
            "known keys are hideMemberFields, hideTypePatterns, externalPackages, externalTypes, typeReplacements and sliceTemplate"
        )
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid regular expression in {field}")]
    #[diagnostic(code(shapegen::config::pattern))]
    InvalidPattern {
        #[source_code]
        src: NamedSource<String>,
        #[label("this pattern")]
        span: Option<SourceSpan>,
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_span_lands_on_the_failing_line() {
        let src = "{\n  \"sliceTemplate\": oops\n}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let ctx = SourceContext::new(src, "config.json");

        let Error::Parse { span, .. } = *ctx.json_error(source) else {
            panic!("expected a parse error");
        };
        let offset = span.unwrap().offset();
        let second_line = src.find('\n').unwrap() + 1..src.rfind('\n').unwrap();
        assert!(second_line.contains(&offset), "{offset}");
    }
}
