//! Config parsing from files and strings.

use std::path::Path;

use crate::{Config, Error, Result, Settings, error::SourceContext};

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

impl Settings {
    /// Load and validate the configuration file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string(), Format::from_path(path))
    }
}

/// Parse a config document with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str, format: Format) -> Result<Settings> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = match format {
        Format::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
    };
    Settings::compile(config, &source_ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("config.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("config.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("config")), Format::Json);
    }

    #[test]
    fn test_parse_json() {
        let settings = parse_config(
            r#"{
                "hideMemberFields": ["TypeMeta"],
                "hideTypePatterns": ["ParseError$"],
                "externalPackages": [{ "typeMatchPrefix": "^k8s\\.io/apimachinery" }],
                "externalTypes": { "k8s.io/apimachinery/pkg/apis/meta/v1": { "ObjectMeta": "ObjectMeta" } },
                "typeReplacements": { "int": "number" }
            }"#,
            "config.json",
            Format::Json,
        )
        .unwrap();

        let config = settings.config();
        assert_eq!(config.hidden_member_fields, vec!["TypeMeta"]);
        assert_eq!(config.slice_template, crate::DEFAULT_SLICE_TEMPLATE);
        assert_eq!(config.external_packages.len(), 1);
    }

    #[test]
    fn test_parse_toml() {
        let settings = parse_config(
            r#"
hideMemberFields = ["status"]
sliceTemplate = "Array<{{.type}}>"

[[externalPackages]]
typeMatchPrefix = "^k8s\\.io/"

[typeReplacements]
int64 = "number"
"#,
            "config.toml",
            Format::Toml,
        )
        .unwrap();

        assert!(settings.is_hidden_member("status"));
        assert_eq!(settings.slice_template(), "Array<{{.type}}>");
        assert_eq!(settings.replace_type_name("int64"), "number");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_config(r#"{ "hideFields": [] }"#, "config.json", Format::Json).unwrap_err();
        match *err {
            Error::Parse { span, message, .. } => {
                assert!(message.contains("hideFields"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern_points_at_pattern() {
        let src = r#"{ "hideTypePatterns": ["ok", "(unclosed"] }"#;
        let err = parse_config(src, "config.json", Format::Json).unwrap_err();
        match *err {
            Error::InvalidPattern {
                field,
                pattern,
                span,
                ..
            } => {
                assert_eq!(field, "hideTypePatterns");
                assert_eq!(pattern, "(unclosed");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "(unclosed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
