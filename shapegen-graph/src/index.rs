//! Lookups derived once from the grouped graph.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::{DeclGraph, DeclId, VersionedPackage};

/// Marker returned when a declaration has no owning package.
pub const UNKNOWN_API_GROUP: &str = "<UNKNOWN_API_GROUP>";

/// Declaration → owning [`VersionedPackage`] (by position in the package list).
///
/// Total for declarations that were grouped; undefined for everything else
/// (builtins, wrappers, types from packages that were not selected).
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    owners: HashMap<DeclId, usize>,
}

impl PackageIndex {
    pub fn build(packages: &[VersionedPackage]) -> Self {
        let mut owners = HashMap::new();
        for (position, pkg) in packages.iter().enumerate() {
            for id in pkg.types().chain(pkg.constants()) {
                owners.insert(id, position);
            }
        }
        Self { owners }
    }

    /// Position of the package owning exactly this declaration.
    pub fn owner(&self, id: DeclId) -> Option<usize> {
        self.owners.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Element declaration → records that hold a member of that type.
///
/// Only direct membership is indexed. Referrers are kept in discovery
/// order without duplicates; callers sort for presentation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    referrers: HashMap<DeclId, IndexSet<DeclId>>,
}

impl ReferenceIndex {
    pub fn build(graph: &DeclGraph, packages: &[VersionedPackage]) -> Self {
        let mut referrers: HashMap<DeclId, IndexSet<DeclId>> = HashMap::new();
        for pkg in packages {
            for owner in pkg.types() {
                for member in graph[owner].members() {
                    referrers
                        .entry(graph.innermost(member.ty))
                        .or_default()
                        .insert(owner);
                }
            }
        }
        Self { referrers }
    }

    /// An index with no entries; rendering treats every list as empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Records referencing `id` (after stripping its wrappers).
    pub fn referrers(&self, graph: &DeclGraph, id: DeclId) -> Vec<DeclId> {
        self.referrers
            .get(&graph.innermost(id))
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
