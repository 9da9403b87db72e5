//! The serialized declaration document handed over by the source extractor.
//!
//! Declarations reference each other by their qualified key (see
//! [`QualifiedName`]'s `Display`), which keeps the document acyclic on disk
//! while the graph it describes may contain cycles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, QualifiedName, Result};

/// A complete declaration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawUniverse {
    #[serde(default)]
    pub packages: Vec<RawPackage>,
    #[serde(default)]
    pub types: Vec<RawDecl>,
}

/// A source package as seen by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawPackage {
    /// Import path, e.g. `example.com/api/widgets/v1`.
    pub path: String,
    /// Package basename, expected to be an API version such as `v1beta1`.
    pub name: String,
    /// Directory the package was read from.
    #[serde(default)]
    pub source_path: String,
    /// Comment lines of the package clause (carries `+groupName=`).
    #[serde(default)]
    pub comments: Vec<String>,
    /// Package doc comments (carries the force-include tag).
    #[serde(default)]
    pub doc_comments: Vec<String>,
    /// Local names of the named types declared in the package.
    #[serde(default)]
    pub types: Vec<String>,
    /// Local names of the constants declared in the package.
    #[serde(default)]
    pub constants: Vec<String>,
}

/// Declaration kinds the extractor may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawKind {
    Struct,
    Alias,
    Builtin,
    Pointer,
    Slice,
    Map,
    DeclarationOf,
    Interface,
}

impl RawKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawKind::Struct => "Struct",
            RawKind::Alias => "Alias",
            RawKind::Builtin => "Builtin",
            RawKind::Pointer => "Pointer",
            RawKind::Slice => "Slice",
            RawKind::Map => "Map",
            RawKind::DeclarationOf => "DeclarationOf",
            RawKind::Interface => "Interface",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawDecl {
    pub name: QualifiedName,
    pub kind: RawKind,
    #[serde(default)]
    pub members: Vec<RawMember>,
    #[serde(default)]
    pub elem: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub underlying: Option<String>,
    #[serde(default)]
    pub const_value: Option<String>,
    #[serde(default)]
    pub comment_lines: Vec<String>,
    #[serde(default)]
    pub second_closest_comment_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub comment_lines: Vec<String>,
    /// Anonymous (embedded) field.
    #[serde(default)]
    pub embedded: bool,
}

impl RawUniverse {
    /// Parse a document, using `filename` for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Load a document, or every `*.json` document of a directory merged
    /// in file-name order.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Self::from_file(path);
        }

        let entries = std::fs::read_dir(path).map_err(|e| io_error(path, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry_path = entry.map_err(|e| io_error(path, e))?.path();
            if entry_path.extension().is_some_and(|ext| ext == "json") {
                files.push(entry_path);
            }
        }
        files.sort();

        let mut universe = RawUniverse::default();
        for file in files {
            universe.extend(Self::from_file(&file)?);
        }
        Ok(universe)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Append another document's packages and declarations.
    pub fn extend(&mut self, other: RawUniverse) {
        self.packages.extend(other.packages);
        self.types.extend(other.types);
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Box<Error> {
    Box::new(Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const WIDGETS: &str = r#"{
        "packages": [{ "path": "example.com/v1", "name": "v1", "types": ["Widget"] }],
        "types": [{
            "name": { "package": "example.com/v1", "name": "Widget" },
            "kind": "Struct",
            "members": [{ "name": "Name", "type": "string", "tags": "json:\"name\"" }]
        }]
    }"#;

    #[test]
    fn test_parse_document() {
        let universe = RawUniverse::from_str_with_filename(WIDGETS, "widgets.json").unwrap();
        assert_eq!(universe.packages.len(), 1);
        assert_eq!(universe.types[0].kind, RawKind::Struct);
        assert_eq!(universe.types[0].members[0].ty, "string");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let doc = r#"{ "types": [{ "name": { "name": "f" }, "kind": "Func" }] }"#;
        let err = RawUniverse::from_str_with_filename(doc, "bad.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let doc = r#"{ "packages": [], "extra": true }"#;
        assert!(RawUniverse::from_str_with_filename(doc, "bad.json").is_err());
    }

    #[test]
    fn test_from_directory_merges_in_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.json"), WIDGETS).unwrap();
        fs::write(
            temp.path().join("a.json"),
            r#"{ "packages": [{ "path": "example.com/v2", "name": "v2" }] }"#,
        )
        .unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let universe = RawUniverse::from_path(temp.path()).unwrap();

        let paths: Vec<_> = universe.packages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["example.com/v2", "example.com/v1"]);
        assert_eq!(universe.types.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = RawUniverse::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
