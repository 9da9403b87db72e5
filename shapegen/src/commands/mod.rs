mod check;
mod completions;
mod generate;
mod serve;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use serve::ServeCommand;
use shapegen_config::Settings;
use shapegen_graph::ApiModel;

use crate::ops::{self, Workspace};

/// Extension trait for exiting on config, input or render errors with
/// pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with<E>(e: E) -> !
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(e));
    std::process::exit(1);
}

impl<T> UnwrapOrExit<T> for shapegen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(*e))
    }
}

impl<T> UnwrapOrExit<T> for shapegen_graph::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(*e))
    }
}

impl<T> UnwrapOrExit<T> for shapegen_typescript::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(*e))
    }
}

/// Where the configuration and the declaration document come from.
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Path to the generator config (JSON, or TOML when it ends in .toml)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Declaration document, or a directory of them
    #[arg(long)]
    pub api_dir: PathBuf,
}

impl InputArgs {
    /// Load config and declarations; errors exit with a diagnostic.
    pub fn load(&self) -> (ApiModel, Settings) {
        let settings = Settings::from_file(&self.config).unwrap_or_exit();
        tracing::info!(path = %self.api_dir.display(), "loading declarations");
        let model = ApiModel::load(&self.api_dir).unwrap_or_exit();
        (model, settings)
    }
}

/// Inputs plus the options shared by every rendering command.
#[derive(Args, Debug, Clone)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory holding optional header.ts.tpl and footer.ts.tpl
    #[arg(long, default_value = "template")]
    pub template_dir: PathBuf,

    /// Do not emit @see cross-links between declarations
    #[arg(long)]
    pub no_references: bool,
}

impl RenderArgs {
    pub fn workspace(&self) -> Result<Workspace> {
        let layout = ops::load_layout(&self.template_dir)?;
        let (model, settings) = self.input.load();
        let workspace = Workspace::new(model, settings).with_layout(layout);
        Ok(if self.no_references {
            workspace.without_references()
        } else {
            workspace
        })
    }
}

#[derive(Parser)]
#[command(name = "shapegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from Kubernetes API types")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Serve(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the declarations to a file
    Generate(GenerateCommand),

    /// Serve freshly rendered declarations over HTTP
    Serve(ServeCommand),

    /// Load and render in memory, then report what would be generated
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
