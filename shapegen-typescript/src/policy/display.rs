use indexmap::IndexSet;
use shapegen_graph::{DeclGraph, DeclId, DeclKind, QualifiedName};

use super::Policy;
use crate::{RenderError, Result, naming::string_literal};

/// External declarations hit while resolving display names.
///
/// Scoped to one render pass and handed back with its output; there is no
/// process-wide registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalTypes {
    ids: IndexSet<DeclId>,
}

impl ExternalTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit; returns `false` if it was already recorded.
    pub fn record(&mut self, id: DeclId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: DeclId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.ids.iter().copied()
    }

    /// Qualified names in discovery order.
    pub fn names(&self, graph: &DeclGraph) -> Vec<QualifiedName> {
        self.iter().map(|id| graph[id].name.clone()).collect()
    }
}

impl Policy<'_> {
    /// The TypeScript spelling of a reference to `id`.
    ///
    /// Wrappers resolve through their elements, so `[]*T` keeps its array
    /// shape and maps become `Record<K, V>`. Constants render as their
    /// literal value.
    pub fn display_name(&self, id: DeclId, externals: &mut ExternalTypes) -> Result<String> {
        let decl = &self.model.graph()[id];
        match &decl.kind {
            DeclKind::Pointer { elem } => self.display_name(*elem, externals),
            DeclKind::Slice { elem } => {
                let element = self.display_name(*elem, externals)?;
                Ok(self.wrap_slice(element))
            }
            DeclKind::Map { key, elem } => Ok(format!(
                "Record<{}, {}>",
                self.display_name(*key, externals)?,
                self.display_name(*elem, externals)?
            )),
            DeclKind::Constant { value, .. } => match value {
                Some(value) if self.is_string_typed(id) => Ok(string_literal(value)),
                Some(value) => Ok(value.clone()),
                None => Err(Box::new(RenderError::MissingConstValue {
                    name: decl.name.to_string(),
                })),
            },
            DeclKind::Record { .. }
            | DeclKind::Alias { .. }
            | DeclKind::Primitive
            | DeclKind::Interface => Ok(self.named(id, externals)),
        }
    }

    fn named(&self, id: DeclId, externals: &mut ExternalTypes) -> String {
        let name = &self.model.graph()[id].name;
        let mut display = if self.model.is_local(id) {
            name.name.clone()
        } else {
            name.to_string()
        };

        if self.settings.is_external(&display) {
            externals.record(id);
            display = self
                .settings
                .external_override(&name.package, &name.name)
                .unwrap_or(&name.name)
                .to_string();
        }

        self.settings.replace_type_name(&display).to_string()
    }

    fn wrap_slice(&self, element: String) -> String {
        let template = self.settings.slice_template();
        if template.is_empty() {
            return element;
        }
        match self.engine.render(template, &element) {
            Ok(wrapped) => wrapped,
            Err(e) => {
                tracing::debug!(error = %e, template, "slice template failed, using the bare element");
                element
            }
        }
    }

    fn is_string_typed(&self, id: DeclId) -> bool {
        let graph = self.model.graph();
        let base = &graph[graph.final_underlying(id)];
        matches!(base.kind, DeclKind::Primitive)
            && base.name.package.is_empty()
            && base.name.name == "string"
    }
}
