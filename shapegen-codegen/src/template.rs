//! Placeholder templates used to wrap resolved type names.
//!
//! Only field actions are understood: `{{.type}}` (whitespace inside the
//! braces is allowed, as are `{{-` / `-}}` trim markers). Everything else
//! between delimiters is a parse error.

use thiserror::Error;

/// Anything that can substitute an element name into a template source.
pub trait TemplateEngine {
    fn render(&self, source: &str, element: &str) -> Result<String, TemplateError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {offset}")]
    Unclosed { offset: usize },

    #[error("unsupported action `{action}`")]
    UnsupportedAction { action: String },

    #[error("template references unknown field `.{field}`")]
    UnknownField { field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Field(&'a str),
}

/// Template engine with a single `type` field in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTemplate;

impl PlaceholderTemplate {
    /// Name of the field bound to the element.
    pub const FIELD: &'static str = "type";

    fn parse(source: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find("{{") {
            let inner_start = start + 2;
            let Some(len) = rest[inner_start..].find("}}") else {
                return Err(TemplateError::Unclosed {
                    offset: consumed + start,
                });
            };
            let mut text = &rest[..start];
            let mut action = &rest[inner_start..inner_start + len];
            let mut after = &rest[inner_start + len + 2..];

            if let Some(trimmed) = action.strip_prefix("- ") {
                text = text.trim_end();
                action = trimmed;
            }
            if let Some(trimmed) = action.strip_suffix(" -") {
                after = after.trim_start();
                action = trimmed;
            }

            if !text.is_empty() {
                segments.push(Segment::Text(text));
            }

            let action = action.trim();
            match action.strip_prefix('.') {
                Some(field) if is_field_name(field) => segments.push(Segment::Field(field)),
                _ => {
                    return Err(TemplateError::UnsupportedAction {
                        action: action.to_string(),
                    });
                }
            }

            consumed += rest.len() - after.len();
            rest = after;
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }
        Ok(segments)
    }
}

impl TemplateEngine for PlaceholderTemplate {
    fn render(&self, source: &str, element: &str) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(source.len() + element.len());
        for segment in Self::parse(source)? {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(Self::FIELD) => out.push_str(element),
                Segment::Field(other) => {
                    return Err(TemplateError::UnknownField {
                        field: other.to_string(),
                    });
                }
            }
        }
        Ok(out)
    }
}

fn is_field_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> Result<String, TemplateError> {
        PlaceholderTemplate.render(source, "Widget")
    }

    #[test]
    fn test_default_template() {
        assert_eq!(render("{{.type}}[]").unwrap(), "Widget[]");
    }

    #[test]
    fn test_whitespace_and_repeats() {
        assert_eq!(
            render("Array<{{ .type }}> | {{.type}}").unwrap(),
            "Array<Widget> | Widget"
        );
    }

    #[test]
    fn test_trim_markers() {
        assert_eq!(render("Array< {{- .type -}} >").unwrap(), "Array<Widget>");
    }

    #[test]
    fn test_text_only_and_empty() {
        assert_eq!(render("unknown[]").unwrap(), "unknown[]");
        assert_eq!(render("").unwrap(), "");
    }

    #[test]
    fn test_unclosed_action() {
        assert_eq!(
            render("ok {{.type").unwrap_err(),
            TemplateError::Unclosed { offset: 3 }
        );
        assert_eq!(
            render("{{.type}} {{").unwrap_err(),
            TemplateError::Unclosed { offset: 10 }
        );
    }

    #[test]
    fn test_unsupported_action() {
        assert!(matches!(
            render("{{range .type}}{{end}}").unwrap_err(),
            TemplateError::UnsupportedAction { .. }
        ));
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            render("{{.elem}}[]").unwrap_err(),
            TemplateError::UnknownField {
                field: "elem".to_string()
            }
        );
    }
}
