//! Core operations.
//!
//! This module contains the business logic for shapegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod serve;

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, bail};
use shapegen_config::Settings;
use shapegen_graph::ApiModel;
use shapegen_typescript::{Layout, RenderOutput, Renderer};

pub use check::check;
pub use generate::generate;
pub use serve::serve;

pub const HEADER_TEMPLATE: &str = "header.ts.tpl";
pub const FOOTER_TEMPLATE: &str = "footer.ts.tpl";

/// Everything a render pass needs, loaded once at startup.
#[derive(Debug)]
pub struct Workspace {
    pub model: ApiModel,
    pub settings: Settings,
    pub layout: Layout,
    pub references: bool,
}

impl Workspace {
    pub fn new(model: ApiModel, settings: Settings) -> Self {
        Self {
            model,
            settings,
            layout: Layout::default(),
            references: true,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn without_references(mut self) -> Self {
        self.references = false;
        self
    }

    pub fn renderer(&self) -> Renderer<'_> {
        let renderer =
            Renderer::new(&self.model, &self.settings).with_layout(self.layout.clone());
        if self.references {
            renderer
        } else {
            renderer.without_references()
        }
    }

    /// One full pass; nothing partial survives an error.
    pub fn render(&self) -> shapegen_typescript::Result<RenderOutput> {
        self.renderer().render()
    }
}

/// Read the optional header and footer from the template directory.
pub fn load_layout(dir: &Path) -> Result<Layout> {
    let dir = std::path::absolute(dir)
        .wrap_err_with(|| format!("cannot resolve {}", dir.display()))?;
    let meta = fs::metadata(&dir)
        .wrap_err_with(|| format!("cannot read the {} directory", dir.display()))?;
    if !meta.is_dir() {
        bail!("{} path is not a directory", dir.display());
    }

    Ok(Layout {
        header: read_optional(dir.join(HEADER_TEMPLATE))?,
        footer: read_optional(dir.join(FOOTER_TEMPLATE))?,
    })
}

fn read_optional(path: PathBuf) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(&path)
        .map(Some)
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}
