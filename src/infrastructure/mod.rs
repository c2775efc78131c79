// Infrastructure implementations for dot2tikz.

pub mod dot2tex_runner;

pub use dot2tex_runner::Dot2TexRenderer;

use crate::ports::TexExporter;
use anyhow::{Context, Result};
use std::path::Path;

/// Writes TeX documents to the filesystem, creating or truncating the target.
pub struct FileTexExporter;

impl TexExporter for FileTexExporter {
    fn export(&self, tex: &str, path: &Path) -> Result<()> {
        std::fs::write(path, tex)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
