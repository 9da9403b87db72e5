//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One versioned package as seen by the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// `<group>/<version>`.
    pub identifier: String,
    /// Source packages merged into it.
    pub source_packages: Vec<String>,
    pub types: usize,
    pub constants: usize,
}

/// Report data from a dry render.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub packages: Vec<PackageSummary>,
    /// Declarations that would be emitted.
    pub declarations: usize,
    /// Size of the rendered document in bytes.
    pub bytes: usize,
    /// External types referenced by the output.
    pub external_types: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!("{} API package(s)", self.packages.len()));
        for package in &self.packages {
            out.list_item(&format!(
                "{} ({} types, {} constants)",
                package.identifier, package.types, package.constants
            ));
            for source in &package.source_packages {
                out.preformatted(&format!("      {}", source));
            }
        }

        out.newline();
        out.key_value("declarations", &self.declarations.to_string());
        out.key_value("bytes", &self.bytes.to_string());

        if !self.external_types.is_empty() {
            out.newline();
            out.section("External types");
            for name in &self.external_types {
                out.list_item(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::BufferOutput;

    #[test]
    fn test_render_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("config.json"),
            packages: vec![PackageSummary {
                identifier: "example.com/v1".to_string(),
                source_packages: vec!["example.com/widgets/v1".to_string()],
                types: 2,
                constants: 1,
            }],
            declarations: 2,
            bytes: 120,
            external_types: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ config.json is valid",
                "",
                "1 API package(s):",
                "  - example.com/v1 (2 types, 1 constants)",
                "      example.com/widgets/v1",
                "",
                "declarations: 2",
                "bytes: 120",
            ]
        );
    }
}
