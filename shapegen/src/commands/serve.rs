use clap::Args;
use eyre::Result;

use super::RenderArgs;
use crate::ops;

#[derive(Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Address to listen on, e.g. `:8080` or `127.0.0.1:8080`
    #[arg(long)]
    pub http_addr: String,
}

impl ServeCommand {
    /// Run the serve command
    pub fn run(&self) -> Result<()> {
        ops::serve(self.render.workspace()?, &self.http_addr)
    }
}
