//! TypeScript object type, alias and union builders.

use shapegen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::property_name;

/// A property of a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Vec<String>,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: Vec::new(),
            optional: false,
        }
    }

    pub fn doc<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.doc.clone()));
        }
        let optional = if self.optional { "?" } else { "" };
        fragments.push(CodeFragment::Line(format!(
            "{}{}: {};",
            property_name(&self.name),
            optional,
            self.ty
        )));
        fragments
    }
}

/// Builder for exported object types (`export type Foo = { ... } & Bar;`).
///
/// Intersection operands are appended after the literal in insertion order.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Vec<String>,
    fields: Vec<Field>,
    intersections: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            fields: Vec::new(),
            intersections: Vec::new(),
        }
    }

    pub fn doc<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Intersect the literal with another named type.
    pub fn intersect(mut self, ty: impl Into<String>) -> Self {
        self.intersections.push(ty.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn suffix(&self) -> String {
        self.intersections
            .iter()
            .map(|ty| format!(" & {ty}"))
            .collect()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.doc.clone()));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export type {} = {{}}{};",
                self.name,
                self.suffix()
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export type {} = {{", self.name),
                body: self.fields.iter().flat_map(Field::to_fragments).collect(),
                close: format!("}}{};", self.suffix()),
            });
        }

        fragments
    }
}

/// Builder for exported type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Vec<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn doc<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));

        fragments
    }
}

/// Builder for union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Vec<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The right-hand side: variants joined with ` | `.
    pub fn expression(&self) -> String {
        self.variants.join(" | ")
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name,
            self.expression()
        )));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("Widget")
            .field(Field::new("name", "string"))
            .field(Field::new("size", "number").optional())
            .build();

        insta::assert_snapshot!(t, @r"
        export type Widget = {
          name: string;
          size?: number;
        };
        ");
    }

    #[test]
    fn test_object_type_intersections() {
        let t = ObjectType::new("Derived")
            .field(Field::new("extra", "string"))
            .intersect("Base")
            .intersect("Other")
            .build();

        insta::assert_snapshot!(t, @r"
        export type Derived = {
          extra: string;
        } & Base & Other;
        ");
    }

    #[test]
    fn test_object_type_only_intersections() {
        let t = ObjectType::new("Derived").intersect("Base").build();
        assert_eq!(t, "export type Derived = {} & Base;\n");
    }

    #[test]
    fn test_field_docs_and_quoting() {
        let t = ObjectType::new("Labels")
            .doc(["Labels on a widget."])
            .field(
                Field::new("app.kubernetes.io/name", "string")
                    .doc(["Application name.", "Shown in dashboards."]),
            )
            .build();

        insta::assert_snapshot!(t, @r#"
        /** Labels on a widget. */
        export type Labels = {
          /**
           * Application name.
           * Shown in dashboards.
           */
          "app.kubernetes.io/name": string;
        };
        "#);
    }

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("Color", "string").build();
        assert_eq!(t, "export type Color = string;\n");
    }

    #[test]
    fn test_union() {
        let u = Union::new("Color")
            .doc(["Color of a widget."])
            .variants(["\"blue\"", "\"red\""])
            .build();
        assert_eq!(
            u,
            "/** Color of a widget. */\nexport type Color = \"blue\" | \"red\";\n"
        );
    }

    #[test]
    fn test_union_expression() {
        let u = Union::new("Level").variant("1").variant("2");
        assert!(!u.is_empty());
        assert_eq!(u.expression(), "1 | 2");
        assert!(Union::new("None").is_empty());
    }
}
