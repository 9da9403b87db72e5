use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a declaration: owning package path plus local name.
///
/// Builtins and anonymous wrapper types (`*pkg.T`, `[]pkg.T`) have an empty
/// package; their local name carries the full spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    #[serde(default)]
    pub package: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// A name without an owning package (builtins, wrappers).
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new("", name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}
