use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Slice template used when the document does not set one.
pub const DEFAULT_SLICE_TEMPLATE: &str = "{{.type}}[]";

/// The configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Serialized field names hidden on every record.
    #[serde(default, rename = "hideMemberFields")]
    pub hidden_member_fields: Vec<String>,

    /// Regexes matched against qualified names; matching declarations are
    /// left out of the output.
    #[serde(default)]
    pub hide_type_patterns: Vec<String>,

    /// Rules recognizing externally defined types.
    #[serde(default)]
    pub external_packages: Vec<ExternalPackage>,

    /// Display-name overrides for external types: package → name → override.
    #[serde(default)]
    pub external_types: BTreeMap<String, BTreeMap<String, String>>,

    /// Name replacements applied after resolution (e.g. `int64` → `number`).
    #[serde(default)]
    pub type_replacements: BTreeMap<String, String>,

    /// Template wrapping a slice element name; `{{.type}}` is the element.
    #[serde(default = "default_slice_template")]
    pub slice_template: String,
}

fn default_slice_template() -> String {
    DEFAULT_SLICE_TEMPLATE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hidden_member_fields: Vec::new(),
            hide_type_patterns: Vec::new(),
            external_packages: Vec::new(),
            external_types: BTreeMap::new(),
            type_replacements: BTreeMap::new(),
            slice_template: default_slice_template(),
        }
    }
}

/// A rule marking matching names as externally defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExternalPackage {
    /// Regex matched against the resolved name of a type.
    pub type_match_prefix: String,
}

impl ExternalPackage {
    pub fn new(type_match_prefix: impl Into<String>) -> Self {
        Self {
            type_match_prefix: type_match_prefix.into(),
        }
    }
}
