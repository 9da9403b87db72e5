//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; only [`CodeBuilder`] turns
//! fragments into text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of a generated declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line at the current indentation.
    Line(String),
    /// A header line, an indented body and a closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// A JSDoc comment; one line renders inline, several as a block.
    JsDoc(Vec<String>),
}

/// Types that describe themselves as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
