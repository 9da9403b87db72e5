use regex::RegexSet;

use crate::{Config, Result, error::SourceContext};

/// Validated configuration with every pattern compiled.
///
/// Read-only once built; rendering passes borrow it.
#[derive(Debug, Clone)]
pub struct Settings {
    config: Config,
    hide_types: RegexSet,
    external: RegexSet,
}

impl Settings {
    /// Validate an in-memory [`Config`].
    pub fn new(config: Config) -> Result<Self> {
        Self::compile(config, &SourceContext::new("", "<config>"))
    }

    pub(crate) fn compile(config: Config, source_ctx: &SourceContext) -> Result<Self> {
        let hide_types = compile_set(
            config.hide_type_patterns.iter().map(String::as_str),
            "hideTypePatterns",
            source_ctx,
        )?;
        let external = compile_set(
            config
                .external_packages
                .iter()
                .map(|rule| rule.type_match_prefix.as_str()),
            "externalPackages",
            source_ctx,
        )?;
        Ok(Self {
            config,
            hide_types,
            external,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a qualified name matches any `hideTypePatterns` entry.
    pub fn is_hidden_type(&self, qualified_name: &str) -> bool {
        self.hide_types.is_match(qualified_name)
    }

    /// Whether a serialized field name is listed in `hideMemberFields`.
    pub fn is_hidden_member(&self, field_name: &str) -> bool {
        self.config
            .hidden_member_fields
            .iter()
            .any(|hidden| hidden == field_name)
    }

    /// Whether a resolved name matches an external-package rule.
    pub fn is_external(&self, name: &str) -> bool {
        self.external.is_match(name)
    }

    /// The configured display name for an external type, if any.
    pub fn external_override(&self, package: &str, name: &str) -> Option<&str> {
        self.config
            .external_types
            .get(package)
            .and_then(|types| types.get(name))
            .map(String::as_str)
    }

    /// Apply `typeReplacements` (exact match), returning the input otherwise.
    pub fn replace_type_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.config
            .type_replacements
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn slice_template(&self) -> &str {
        &self.config.slice_template
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: Config::default(),
            hide_types: RegexSet::empty(),
            external: RegexSet::empty(),
        }
    }
}

fn compile_set<'a>(
    patterns: impl IntoIterator<Item = &'a str>,
    field: &'static str,
    source_ctx: &SourceContext,
) -> Result<RegexSet> {
    let patterns: Vec<&str> = patterns.into_iter().collect();
    // Compile one by one first so the error names the offending pattern.
    for pattern in &patterns {
        if let Err(e) = regex::Regex::new(pattern) {
            return Err(source_ctx.invalid_pattern_error(field, pattern, e));
        }
    }
    RegexSet::new(&patterns).map_err(|e| {
        let pattern = patterns.first().copied().unwrap_or_default();
        source_ctx.invalid_pattern_error(field, pattern, e)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;
    use crate::{Error, ExternalPackage};

    fn settings() -> Settings {
        let mut external_types = BTreeMap::new();
        external_types.insert(
            "k8s.io/apimachinery/pkg/apis/meta/v1".to_string(),
            BTreeMap::from([("ObjectMeta".to_string(), "K8sObjectMeta".to_string())]),
        );
        Settings::new(Config {
            hidden_member_fields: vec!["status".to_string()],
            hide_type_patterns: vec!["Internal$".to_string()],
            external_packages: vec![ExternalPackage::new(r"^k8s\.io/")],
            external_types,
            type_replacements: BTreeMap::from([("int".to_string(), "number".to_string())]),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_matchers() {
        let settings = settings();

        assert!(settings.is_hidden_type("example.com/v1.WidgetInternal"));
        assert!(!settings.is_hidden_type("example.com/v1.Widget"));
        assert!(settings.is_hidden_member("status"));
        assert!(!settings.is_hidden_member("Status"));
        assert!(settings.is_external("k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta"));
        assert!(!settings.is_external("example.com/v1.Widget"));
    }

    #[test]
    fn test_external_override() {
        let settings = settings();

        assert_eq!(
            settings.external_override("k8s.io/apimachinery/pkg/apis/meta/v1", "ObjectMeta"),
            Some("K8sObjectMeta")
        );
        assert_eq!(
            settings.external_override("k8s.io/apimachinery/pkg/apis/meta/v1", "Time"),
            None
        );
    }

    #[test]
    fn test_replace_type_name() {
        let settings = settings();

        assert_eq!(settings.replace_type_name("int"), "number");
        assert_eq!(settings.replace_type_name("int64"), "int64");
    }

    #[test]
    fn test_default_has_no_rules() {
        let settings = Settings::default();

        assert!(!settings.is_hidden_type("anything"));
        assert!(!settings.is_external("anything"));
        assert_eq!(settings.slice_template(), "{{.type}}[]");
    }

    #[test]
    fn test_invalid_external_rule() {
        let err = Settings::new(Config {
            external_packages: vec![ExternalPackage::new("[")],
            ..Config::default()
        })
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::InvalidPattern {
                field: "externalPackages",
                ..
            }
        ));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "sliceTemplate": "" }"#).unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.slice_template(), "");

        let err = Settings::from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
