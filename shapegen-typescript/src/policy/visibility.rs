use std::cmp::Ordering;

use shapegen_graph::{DeclId, Member};

use super::Policy;

impl Policy<'_> {
    /// Whether a declaration is left out of the output.
    ///
    /// `hideTypePatterns` wins outright; otherwise unexported declarations
    /// whose local name starts lowercase are hidden.
    pub fn is_hidden(&self, id: DeclId) -> bool {
        let decl = &self.model.graph()[id];
        if self.settings.is_hidden_type(&decl.name.to_string()) {
            return true;
        }
        !decl.is_exported() && decl.name.name.starts_with(char::is_lowercase)
    }

    /// Whether a record member is left out of the output.
    pub fn is_hidden_member(&self, member: &Member) -> bool {
        member.is_skipped() || self.settings.is_hidden_member(&member.field_name())
    }

    /// Exported declarations first, then by qualified name.
    pub fn compare(&self, a: DeclId, b: DeclId) -> Ordering {
        let graph = self.model.graph();
        let (a, b) = (&graph[a], &graph[b]);
        b.is_exported()
            .cmp(&a.is_exported())
            .then_with(|| a.name.to_string().cmp(&b.name.to_string()))
    }

    pub fn sort(&self, ids: &mut [DeclId]) {
        ids.sort_by(|a, b| self.compare(*a, *b));
    }

    /// The non-hidden subset of `ids`, sorted.
    pub fn visible(&self, ids: impl IntoIterator<Item = DeclId>) -> Vec<DeclId> {
        let mut out: Vec<DeclId> = ids.into_iter().filter(|id| !self.is_hidden(*id)).collect();
        self.sort(&mut out);
        out
    }

    /// Visible records holding a member of type `id`, sorted.
    pub fn references(&self, id: DeclId) -> Vec<DeclId> {
        let graph = self.model.graph();
        self.visible(self.model.references().referrers(graph, id))
    }
}
