//! Generate command report data structures.

use std::path::PathBuf;

use shapegen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the document went.
    pub out_file: PathBuf,
    /// Whether the file changed on disk.
    pub result: WriteResult,
    /// Versioned packages rendered.
    pub packages: usize,
    /// Declarations emitted.
    pub declarations: usize,
    /// External types referenced by the output.
    pub external_types: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let status = match self.result {
            WriteResult::Written => "written",
            WriteResult::Unchanged => "unchanged",
        };
        out.key_value(&self.out_file.display().to_string(), status);
        out.key_value_indented("packages", &self.packages.to_string());
        out.key_value_indented("declarations", &self.declarations.to_string());

        if !self.external_types.is_empty() {
            out.newline();
            out.section("External types");
            for name in &self.external_types {
                out.list_item(name);
            }
        }
    }
}
