use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::RenderArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub render: RenderArgs,

    /// File to write the declarations to
    #[arg(long)]
    pub out_file: PathBuf,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let workspace = self.render.workspace()?;
        let report = ops::generate(&workspace, &self.out_file)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
