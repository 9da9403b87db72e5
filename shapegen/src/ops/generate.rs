//! Generate operation - render the model and write one TypeScript file.

use std::path::Path;

use eyre::{Context, Result};
use shapegen_core::OutputFile;

use super::Workspace;
use crate::reports::GenerateReport;

/// Render every versioned package and write the document to `out_file`.
///
/// The file is only touched once the whole pass has succeeded.
pub fn generate(workspace: &Workspace, out_file: &Path) -> Result<GenerateReport> {
    let output = workspace
        .render()
        .wrap_err("failed to render declarations")?;

    tracing::info!(
        declarations = output.declarations,
        external_types = output.external_types.len(),
        "rendered declarations"
    );

    let result = OutputFile::new(out_file, output.text).write()?;
    tracing::info!(path = %out_file.display(), ?result, "wrote output");

    Ok(GenerateReport {
        out_file: out_file.to_path_buf(),
        result,
        packages: workspace.model.packages().len(),
        declarations: output.declarations,
        external_types: output
            .external_types
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shapegen_config::Settings;
    use shapegen_core::WriteResult;
    use shapegen_graph::{ApiModel, RawUniverse};
    use tempfile::TempDir;

    use super::*;

    fn workspace(const_value: &str) -> Workspace {
        let document = format!(
            r#"{{
                "packages": [
                    {{ "path": "x.io/v1", "name": "v1", "comments": ["+groupName=x.io"], "types": ["Mode"], "constants": ["ModeAuto"] }}
                ],
                "types": [
                    {{ "name": {{ "package": "x.io/v1", "name": "Mode" }}, "kind": "Alias", "underlying": "string" }},
                    {{ "name": {{ "package": "x.io/v1", "name": "ModeAuto" }}, "kind": "DeclarationOf", "underlying": "x.io/v1.Mode"{const_value} }}
                ]
            }}"#
        );
        let universe = RawUniverse::from_str_with_filename(&document, "api.json").unwrap();
        Workspace::new(ApiModel::from_universe(&universe).unwrap(), Settings::default())
    }

    #[test]
    fn test_generate_writes_then_skips() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("nested/types.ts");
        let workspace = workspace(r#", "constValue": "auto""#);

        let first = generate(&workspace, &out).unwrap();
        assert_eq!(first.result, WriteResult::Written);
        assert_eq!(first.packages, 1);
        assert_eq!(first.declarations, 1);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "// x.io/v1\n\nexport type Mode = \"auto\";\n"
        );

        let second = generate(&workspace, &out).unwrap();
        assert_eq!(second.result, WriteResult::Unchanged);
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("types.ts");

        let err = generate(&workspace(""), &out).unwrap_err();
        assert!(format!("{err:?}").contains("non-const declaration"));
        assert!(!out.exists());
    }

    #[test]
    fn test_failed_render_keeps_previous_output() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("types.ts");
        fs::write(&out, "// previous\n").unwrap();

        assert!(generate(&workspace(""), &out).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "// previous\n");
    }
}
