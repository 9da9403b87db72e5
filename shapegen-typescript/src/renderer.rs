//! The render pass: versioned packages in, one TypeScript document out.

use shapegen_codegen::{CodeBuilder, CodeFragment, Renderable, TemplateEngine, tidy};
use shapegen_config::Settings;
use shapegen_core::filter_comment_tags;
use shapegen_graph::{ApiModel, DeclId, DeclKind, QualifiedName};

use crate::{
    Result,
    ast::{Field, ObjectType, TypeAlias, Union},
    policy::{ExternalTypes, Policy},
};

/// Verbatim text placed around the generated declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub header: Option<String>,
    pub footer: Option<String>,
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The tidied document.
    pub text: String,
    /// External types referenced by the output, in discovery order.
    pub external_types: Vec<QualifiedName>,
    /// Number of declarations emitted.
    pub declarations: usize,
}

/// Renders an [`ApiModel`] as TypeScript type declarations.
///
/// Rendering is a pure function of the model and settings: the same inputs
/// always produce byte-identical text.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    policy: Policy<'a>,
    references: bool,
    layout: Layout,
}

impl<'a> Renderer<'a> {
    pub fn new(model: &'a ApiModel, settings: &'a Settings) -> Self {
        Self {
            policy: Policy::new(model, settings),
            references: true,
            layout: Layout::default(),
        }
    }

    /// Omit `@see` cross-links.
    pub fn without_references(mut self) -> Self {
        self.references = false;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_engine(mut self, engine: &'a dyn TemplateEngine) -> Self {
        self.policy = self.policy.with_engine(engine);
        self
    }

    pub fn policy(&self) -> &Policy<'a> {
        &self.policy
    }

    /// Run a full pass. Any policy violation aborts it; nothing partial is
    /// returned.
    pub fn render(&self) -> Result<RenderOutput> {
        let model = self.policy.model();
        let mut builder = CodeBuilder::typescript();
        let mut externals = ExternalTypes::new();
        let mut declarations = 0;

        if let Some(header) = &self.layout.header {
            push_verbatim(&mut builder, header);
        }

        for package in model.packages() {
            builder
                .push_line(&format!("// {}", package.identifier()))
                .push_blank();

            for id in self.policy.visible(package.types()) {
                let Some(fragments) = self.declaration(id, &mut externals)? else {
                    continue;
                };
                builder.push_fragments(fragments).push_blank();
                declarations += 1;
            }
        }

        if let Some(footer) = &self.layout.footer {
            push_verbatim(&mut builder, footer);
        }

        Ok(RenderOutput {
            text: tidy(builder.as_str()),
            external_types: externals.names(model.graph()),
            declarations,
        })
    }

    /// Fragments for one package-level declaration, or `None` for kinds
    /// that have no standalone rendering.
    fn declaration(
        &self,
        id: DeclId,
        externals: &mut ExternalTypes,
    ) -> Result<Option<Vec<CodeFragment>>> {
        let graph = self.policy.model().graph();
        let decl = &graph[id];
        let name = decl.name.name.as_str();
        let doc = self.doc_lines(id);

        let fragments = match &decl.kind {
            DeclKind::Record { members } => {
                let mut object = ObjectType::new(name).doc(doc);
                for member in members {
                    if self.policy.is_hidden_member(member) {
                        continue;
                    }
                    let ty = self.policy.display_name(member.ty, externals)?;
                    if member.is_inline() {
                        object = object.intersect(ty);
                        continue;
                    }
                    let mut field =
                        Field::new(member.field_name(), ty).doc(doc_text(&member.comment_lines));
                    if member.is_optional() {
                        field = field.optional();
                    }
                    object = object.field(field);
                }
                object.to_fragments()
            }
            DeclKind::Alias { underlying } => {
                let variants = self.policy.enum_variants(id, externals)?;
                if variants.is_empty() {
                    let ty = self.policy.display_name(*underlying, externals)?;
                    TypeAlias::new(name, ty).doc(doc).to_fragments()
                } else {
                    Union::new(name).doc(doc).variants(variants).to_fragments()
                }
            }
            DeclKind::Interface => TypeAlias::new(name, "unknown").doc(doc).to_fragments(),
            DeclKind::Primitive
            | DeclKind::Pointer { .. }
            | DeclKind::Slice { .. }
            | DeclKind::Map { .. }
            | DeclKind::Constant { .. } => {
                tracing::debug!(
                    declaration = %decl.name,
                    kind = decl.kind.as_str(),
                    "skipping declaration without a standalone rendering"
                );
                return Ok(None);
            }
        };

        Ok(Some(fragments))
    }

    /// Prose from the comments, then `@group` and `@see` tags.
    fn doc_lines(&self, id: DeclId) -> Vec<String> {
        let model = self.policy.model();
        let decl = &model.graph()[id];
        let mut lines = doc_text(&decl.comment_lines);

        let mut tags = Vec::new();
        if decl.is_exported() {
            tags.push(format!("@group {}", model.api_group(id)));
        }
        if self.references {
            tags.extend(
                self.policy
                    .references(id)
                    .into_iter()
                    .map(|referrer| format!("@see {}", model.graph()[referrer].name.name)),
            );
        }

        if !lines.is_empty() && !tags.is_empty() {
            lines.push(String::new());
        }
        lines.extend(tags);
        lines
    }
}

fn push_verbatim(builder: &mut CodeBuilder, text: &str) {
    builder.push_raw(text);
    if !text.ends_with('\n') {
        builder.push_blank();
    }
    builder.push_blank();
}

/// Comment prose with tag lines removed, comment markers stripped and
/// surrounding blank lines trimmed.
fn doc_text(comment_lines: &[String]) -> Vec<String> {
    let lines: Vec<String> = filter_comment_tags(comment_lines)
        .iter()
        .map(|line| {
            let line = line.trim_end();
            let line = line.trim_start().strip_prefix("//").unwrap_or(line);
            let line = line.strip_prefix(' ').unwrap_or(line);
            line.replace("*/", "*\\/")
        })
        .collect();

    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_text_strips_tags_and_markers() {
        let lines = vec![
            "".to_string(),
            "// Widget is a thing.".to_string(),
            "+kubebuilder:object:root=true".to_string(),
            " It has a size.  ".to_string(),
            "".to_string(),
        ];
        assert_eq!(doc_text(&lines), vec!["Widget is a thing.", "It has a size."]);
    }

    #[test]
    fn test_doc_text_escapes_comment_close() {
        let lines = vec!["Matches a/*/b".to_string()];
        assert_eq!(doc_text(&lines), vec!["Matches a/*\\/b"]);
    }

    #[test]
    fn test_doc_text_only_tags_is_empty() {
        let lines = vec!["+optional".to_string(), "  ".to_string()];
        assert!(doc_text(&lines).is_empty());
    }

    #[test]
    fn test_push_verbatim_terminates_text() {
        let mut builder = CodeBuilder::typescript();
        push_verbatim(&mut builder, "// header");
        assert_eq!(builder.as_str(), "// header\n\n");
    }
}
