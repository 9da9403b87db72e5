use clap::Args;
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (model, settings) = self.input.load();
        let workspace = Workspace::new(model, settings);

        let report = ops::check(&workspace, &self.input.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
