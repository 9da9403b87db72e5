use shapegen_core::{StructTag, extract_comment_tags};

use crate::QualifiedName;

/// Tag marking a declaration as an exported root resource.
pub const EXPORT_TAG: &str = "kubebuilder:object:root";

/// Identity of a declaration inside a [`DeclGraph`](crate::DeclGraph).
///
/// Two declarations are "the same type" exactly when their ids are equal;
/// no structural comparison is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(usize);

impl DeclId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// The closed set of declaration shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// A struct with ordered members.
    Record { members: Vec<Member> },
    /// A named type defined in terms of another one.
    Alias { underlying: DeclId },
    /// A builtin scalar such as `string` or `int64`.
    Primitive,
    Pointer { elem: DeclId },
    Slice { elem: DeclId },
    Map { key: DeclId, elem: DeclId },
    /// A constant (or variable) declaration of some type.
    Constant {
        underlying: DeclId,
        value: Option<String>,
    },
    Interface,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Record { .. } => "record",
            DeclKind::Alias { .. } => "alias",
            DeclKind::Primitive => "primitive",
            DeclKind::Pointer { .. } => "pointer",
            DeclKind::Slice { .. } => "slice",
            DeclKind::Map { .. } => "map",
            DeclKind::Constant { .. } => "constant",
            DeclKind::Interface => "interface",
        }
    }

    /// The wrapped element of a pointer, slice or map.
    pub fn elem(&self) -> Option<DeclId> {
        match self {
            DeclKind::Pointer { elem } | DeclKind::Slice { elem } | DeclKind::Map { elem, .. } => {
                Some(*elem)
            }
            _ => None,
        }
    }

    /// The declaration an alias or constant is defined in terms of.
    pub fn underlying(&self) -> Option<DeclId> {
        match self {
            DeclKind::Alias { underlying } | DeclKind::Constant { underlying, .. } => {
                Some(*underlying)
            }
            _ => None,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        self.elem().is_some()
    }
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: QualifiedName,
    pub kind: DeclKind,
    pub comment_lines: Vec<String>,
    pub second_closest_comment_lines: Vec<String>,
}

impl Declaration {
    pub fn new(name: QualifiedName, kind: DeclKind) -> Self {
        Self {
            name,
            kind,
            comment_lines: Vec::new(),
            second_closest_comment_lines: Vec::new(),
        }
    }

    /// Whether the declaration carries `+kubebuilder:object:root=true`,
    /// either directly or in the comment block just above it.
    pub fn is_exported(&self) -> bool {
        [&self.comment_lines, &self.second_closest_comment_lines]
            .into_iter()
            .any(|lines| {
                extract_comment_tags(lines)
                    .values(EXPORT_TAG)
                    .iter()
                    .any(|v| v == "true")
            })
    }

    pub fn members(&self) -> &[Member] {
        match &self.kind {
            DeclKind::Record { members } => members,
            _ => &[],
        }
    }

    /// The literal value of a constant, if one was captured.
    pub fn const_value(&self) -> Option<&str> {
        match &self.kind {
            DeclKind::Constant { value, .. } => value.as_deref(),
            _ => None,
        }
    }
}

/// A field of a record declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: DeclId,
    pub tags: String,
    pub comment_lines: Vec<String>,
    pub embedded: bool,
}

impl Member {
    fn json_tag(&self) -> String {
        StructTag::new(&self.tags).get("json")
    }

    /// The serialized field name: the `json` tag name with its options
    /// stripped, or the member name when the tag does not provide one.
    pub fn field_name(&self) -> String {
        let tag = self.json_tag();
        match tag.split(',').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.name.clone(),
        }
    }

    /// Whether the member's shape is merged into its owner.
    ///
    /// Explicit `,inline` tags and untagged anonymous fields both flatten.
    pub fn is_inline(&self) -> bool {
        let tag = self.json_tag();
        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        parts.any(|opt| opt == "inline") || (self.embedded && name.is_empty())
    }

    /// Whether the member carries the `+optional` tag.
    pub fn is_optional(&self) -> bool {
        extract_comment_tags(&self.comment_lines).contains("optional")
    }

    /// Whether the member is excluded from serialization (`json:"-"`).
    pub fn is_skipped(&self) -> bool {
        self.json_tag() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, tags: &str) -> Member {
        Member {
            name: name.to_string(),
            ty: DeclId::new(0),
            tags: tags.to_string(),
            comment_lines: Vec::new(),
            embedded: false,
        }
    }

    #[test]
    fn test_field_name_strips_options() {
        assert_eq!(member("Size", r#"json:"size,omitempty""#).field_name(), "size");
        assert_eq!(member("Spec", r#"json:"spec,inline""#).field_name(), "spec");
    }

    #[test]
    fn test_field_name_falls_back_to_member_name() {
        assert_eq!(member("TypeMeta", r#"json:",inline""#).field_name(), "TypeMeta");
        assert_eq!(member("Raw", "").field_name(), "Raw");
    }

    #[test]
    fn test_inline_detection() {
        assert!(member("TypeMeta", r#"json:",inline""#).is_inline());
        assert!(member("Base", r#"json:",omitempty,inline""#).is_inline());
        assert!(!member("Name", r#"json:"name""#).is_inline());

        let mut anonymous = member("Base", "");
        anonymous.embedded = true;
        assert!(anonymous.is_inline());
    }

    #[test]
    fn test_optional_tag() {
        let mut m = member("Size", r#"json:"size,omitempty""#);
        assert!(!m.is_optional());
        m.comment_lines = vec!["Size in bytes.".to_string(), "+optional".to_string()];
        assert!(m.is_optional());
    }

    #[test]
    fn test_skipped_member() {
        assert!(member("Cache", r#"json:"-""#).is_skipped());
        assert!(!member("Dash", r#"json:"-,""#).is_skipped());
    }

    #[test]
    fn test_exported_from_either_comment_block() {
        let mut decl = Declaration::new(QualifiedName::new("p", "Widget"), DeclKind::Interface);
        assert!(!decl.is_exported());

        decl.second_closest_comment_lines = vec!["+kubebuilder:object:root=true".to_string()];
        assert!(decl.is_exported());

        decl.second_closest_comment_lines.clear();
        decl.comment_lines = vec!["+kubebuilder:object:root=false".to_string()];
        assert!(!decl.is_exported());
    }

    #[test]
    fn test_kind_accessors() {
        let ptr = DeclKind::Pointer { elem: DeclId::new(3) };
        assert_eq!(ptr.elem(), Some(DeclId::new(3)));
        assert!(ptr.is_wrapper());
        assert_eq!(ptr.underlying(), None);

        let alias = DeclKind::Alias { underlying: DeclId::new(1) };
        assert_eq!(alias.underlying(), Some(DeclId::new(1)));
        assert!(!alias.is_wrapper());
    }
}
