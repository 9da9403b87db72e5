//! Indentation-aware text buffer for generated declarations.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated code, tracking the indentation of nested blocks.
///
/// ```
/// use shapegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_jsdoc(&["A widget."])
///     .push_line("export type Widget = {")
///     .push_indent()
///     .push_line("name: string;")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(
///     builder.build(),
///     "/** A widget. */\nexport type Widget = {\n  name: string;\n};\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add text verbatim, without indentation or a trailing newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment.
    ///
    /// A single line renders as `/** text */`; several lines render as a
    /// block with one ` * ` prefixed line each. No lines, no output.
    pub fn push_jsdoc<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        match lines {
            [] => {}
            [single] => {
                self.push_line(&format!("/** {} */", single.as_ref()));
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    match line.as_ref() {
                        "" => self.push_line(" *"),
                        line => self.push_line(&format!(" * {line}")),
                    };
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Emit every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        self.push_fragments(node.to_fragments())
    }

    pub fn push_fragments(&mut self, fragments: Vec<CodeFragment>) -> &mut Self {
        for fragment in fragments {
            self.push_fragment(fragment);
        }
        self
    }

    fn push_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                self.push_fragments(body);
                self.push_dedent().push_line(&close);
            }
            CodeFragment::JsDoc(lines) => {
                self.push_jsdoc(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
