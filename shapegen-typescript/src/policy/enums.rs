use shapegen_graph::DeclId;

use super::{ExternalTypes, Policy};
use crate::Result;

impl Policy<'_> {
    /// Constants of the package owning `id` whose declared type is exactly
    /// `id`, in sort order.
    pub fn constants_of_type(&self, id: DeclId) -> Vec<DeclId> {
        let Some(package) = self.model.owner_of(id) else {
            return Vec::new();
        };
        let graph = self.model.graph();
        let mut constants: Vec<DeclId> = package
            .constants()
            .filter(|c| graph[*c].kind.underlying() == Some(id))
            .collect();
        self.sort(&mut constants);
        constants
    }

    /// Display names of [`constants_of_type`](Self::constants_of_type).
    ///
    /// Empty when the type has no constants; callers fall back to the
    /// underlying type.
    pub fn enum_variants(&self, id: DeclId, externals: &mut ExternalTypes) -> Result<Vec<String>> {
        self.constants_of_type(id)
            .into_iter()
            .map(|c| self.display_name(c, externals))
            .collect()
    }
}
