use std::{borrow::Cow, path::Path};

use crate::{
    DeclGraph, DeclId, Error, PackageIndex, RawUniverse, ReferenceIndex, Result,
    UNKNOWN_API_GROUP, VersionedPackage, group_packages, select_packages,
};

/// The fully ingested API: graph, versioned packages and derived indexes.
///
/// Built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ApiModel {
    graph: DeclGraph,
    packages: Vec<VersionedPackage>,
    owners: PackageIndex,
    references: ReferenceIndex,
}

impl ApiModel {
    /// Load a declaration document (or directory of documents) and ingest it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let universe = RawUniverse::from_path(path)?;
        let model = Self::from_universe(&universe)?;
        if model.packages.is_empty() {
            return Err(Box::new(Error::NoPackages {
                location: path.display().to_string(),
            }));
        }
        Ok(model)
    }

    /// Ingest an already parsed document.
    pub fn from_universe(universe: &RawUniverse) -> Result<Self> {
        let graph = DeclGraph::from_raw(&universe.types)?;
        let selected = select_packages(&universe.packages);
        let packages = group_packages(&graph, &selected)?;
        Ok(Self::from_parts(graph, packages))
    }

    /// Assemble a model from a graph and its grouping.
    pub fn from_parts(graph: DeclGraph, packages: Vec<VersionedPackage>) -> Self {
        let owners = PackageIndex::build(&packages);
        let references = ReferenceIndex::build(&graph, &packages);
        Self {
            graph,
            packages,
            owners,
            references,
        }
    }

    pub fn graph(&self) -> &DeclGraph {
        &self.graph
    }

    pub fn packages(&self) -> &[VersionedPackage] {
        &self.packages
    }

    pub fn references(&self) -> &ReferenceIndex {
        &self.references
    }

    /// The package owning exactly this declaration (no dereferencing).
    pub fn owner_of(&self, id: DeclId) -> Option<&VersionedPackage> {
        self.owners.owner(id).map(|i| &self.packages[i])
    }

    /// Whether the element type of `id` was ingested as part of an API package.
    pub fn is_local(&self, id: DeclId) -> bool {
        self.owner_of(self.graph.innermost(id)).is_some()
    }

    /// `<group>/<version>` of the element type of `id`.
    ///
    /// Unknown owners are not fatal: they resolve to [`UNKNOWN_API_GROUP`]
    /// and log a warning.
    pub fn api_group(&self, id: DeclId) -> Cow<'static, str> {
        let elem = self.graph.innermost(id);
        match self.owner_of(elem) {
            Some(pkg) => Cow::Owned(pkg.identifier()),
            None => {
                tracing::warn!(
                    declaration = %self.graph[elem].name,
                    "cannot read apiVersion from declaration to package map"
                );
                Cow::Borrowed(UNKNOWN_API_GROUP)
            }
        }
    }
}
