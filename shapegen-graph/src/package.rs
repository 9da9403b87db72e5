//! Selection of API packages and grouping by `(group, version)`.

use std::{path::Path, sync::LazyLock};

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use shapegen_core::extract_comment_tags;

use crate::{DeclGraph, DeclId, Error, QualifiedName, RawPackage, Result};

/// Package comment tag naming the API group.
pub const GROUP_NAME_TAG: &str = "groupName";

/// Package doc comment tag forcing a package into the output.
pub const FORCE_INCLUDE_TAG: &str = "gencrdrefdocs:force";

/// Package basenames must look like an API version.
pub const VERSION_PATTERN: &str = r"^v\d+((alpha|beta)\d+)?$";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"));

/// Declarations offered under one `<group>/<version>` identity, possibly
/// contributed by several source packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedPackage {
    group: String,
    version: String,
    source_packages: Vec<String>,
    types: IndexSet<DeclId>,
    constants: IndexSet<DeclId>,
}

impl VersionedPackage {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            source_packages: Vec::new(),
            types: IndexSet::new(),
            constants: IndexSet::new(),
        }
    }

    /// The `<group>/<version>` identity string.
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Import paths of the source packages merged into this one.
    pub fn source_packages(&self) -> &[String] {
        &self.source_packages
    }

    pub fn types(&self) -> impl ExactSizeIterator<Item = DeclId> + '_ {
        self.types.iter().copied()
    }

    pub fn constants(&self) -> impl ExactSizeIterator<Item = DeclId> + '_ {
        self.constants.iter().copied()
    }

    pub fn contains(&self, id: DeclId) -> bool {
        self.types.contains(&id) || self.constants.contains(&id)
    }

    /// Add a declaration; returns false if it was already present.
    pub fn add_type(&mut self, id: DeclId) -> bool {
        self.types.insert(id)
    }

    /// Add a constant; returns false if it was already present.
    pub fn add_constant(&mut self, id: DeclId) -> bool {
        self.constants.insert(id)
    }

    /// Fold another package with the same identity into this one.
    ///
    /// Types and constants merge independently, keeping first-seen order;
    /// a declaration already present is not duplicated.
    pub fn merge(&mut self, other: VersionedPackage) {
        debug_assert_eq!(self.identifier(), other.identifier());
        for path in other.source_packages {
            if !self.source_packages.contains(&path) {
                self.source_packages.push(path);
            }
        }
        self.types.extend(other.types);
        self.constants.extend(other.constants);
    }
}

/// The API group declared by a package's `+groupName=` tag.
fn group_name(pkg: &RawPackage) -> Option<String> {
    extract_comment_tags(&pkg.comments)
        .single(GROUP_NAME_TAG)
        .map(str::to_string)
}

fn is_vendor_package(pkg: &RawPackage) -> bool {
    Path::new(&pkg.source_path)
        .components()
        .any(|c| c.as_os_str() == "vendor")
}

fn is_forced(pkg: &RawPackage) -> bool {
    extract_comment_tags(&pkg.doc_comments).contains(FORCE_INCLUDE_TAG)
}

/// Pick the packages that are API packages, sorted by import path.
pub fn select_packages(packages: &[RawPackage]) -> Vec<&RawPackage> {
    let mut selected: Vec<&RawPackage> = packages
        .iter()
        .filter(|pkg| {
            if is_vendor_package(pkg) {
                tracing::debug!(package = %pkg.path, "package comes from vendor/, ignoring");
                return false;
            }
            let group = group_name(pkg);
            let has_group = group.as_deref().is_some_and(|g| !g.is_empty());
            let keep = (has_group && !pkg.types.is_empty()) || is_forced(pkg);
            tracing::debug!(package = %pkg.path, group = ?group, keep, "considered package");
            keep
        })
        .collect();

    selected.sort_by(|a, b| a.path.cmp(&b.path));
    selected
}

/// Split a package into its `(group, version)` identity.
fn api_version_for(pkg: &RawPackage) -> Result<(String, String)> {
    if !VERSION_RE.is_match(&pkg.name) {
        return Err(Box::new(Error::InvalidVersion {
            package: pkg.path.clone(),
            version: pkg.name.clone(),
            pattern: VERSION_PATTERN,
        }));
    }
    Ok((group_name(pkg).unwrap_or_default(), pkg.name.clone()))
}

/// Group selected packages into versioned packages, sorted by identifier.
///
/// Callers are expected to pass packages in a deterministic order (see
/// [`select_packages`]); within a package, declarations are taken in
/// name order.
pub fn group_packages(graph: &DeclGraph, packages: &[&RawPackage]) -> Result<Vec<VersionedPackage>> {
    let mut grouped: IndexMap<String, VersionedPackage> = IndexMap::new();

    for pkg in packages {
        let (group, version) = api_version_for(pkg)?;
        let mut versioned = VersionedPackage::new(group, version);
        versioned.source_packages.push(pkg.path.clone());

        for id in resolve_local(graph, pkg, &pkg.types, "type")? {
            versioned.add_type(id);
        }
        for id in resolve_local(graph, pkg, &pkg.constants, "constant")? {
            versioned.add_constant(id);
        }

        tracing::info!(package = %pkg.path, api = %versioned.identifier(), "using package");

        match grouped.get_mut(&versioned.identifier()) {
            Some(existing) => existing.merge(versioned),
            None => {
                grouped.insert(versioned.identifier(), versioned);
            }
        }
    }

    grouped.sort_keys();
    Ok(grouped.into_values().collect())
}

fn resolve_local(
    graph: &DeclGraph,
    pkg: &RawPackage,
    names: &[String],
    what: &'static str,
) -> Result<Vec<DeclId>> {
    let mut sorted: Vec<&String> = names.iter().collect();
    sorted.sort();

    sorted
        .into_iter()
        .map(|name| {
            graph
                .lookup_name(&QualifiedName::new(&pkg.path, name))
                .ok_or_else(|| {
                    Box::new(Error::UnknownPackageMember {
                        package: pkg.path.clone(),
                        name: name.clone(),
                        what,
                    })
                })
        })
        .collect()
}
