//! Check operation - load and render in memory without writing anything.

use std::path::Path;

use shapegen_typescript::Result;

use super::Workspace;
use crate::reports::{CheckReport, PackageSummary};

/// Summarise what `generate` would produce for this workspace.
pub fn check(workspace: &Workspace, config_path: &Path) -> Result<CheckReport> {
    let output = workspace.render()?;

    let packages = workspace
        .model
        .packages()
        .iter()
        .map(|package| PackageSummary {
            identifier: package.identifier(),
            source_packages: package.source_packages().to_vec(),
            types: package.types().len(),
            constants: package.constants().len(),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        packages,
        declarations: output.declarations,
        bytes: output.text.len(),
        external_types: output
            .external_types
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}
