use crate::domain::output_path::resolve_output_path;
use crate::domain::texdoc::format_tex_document;
use crate::ports::{GraphRenderer, TexExporter};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One-shot DOT to TeX conversion pipeline.
pub struct ConvertUsecase<'a> {
    pub renderer: &'a dyn GraphRenderer,
    pub exporter: &'a dyn TexExporter,
}

impl<'a> ConvertUsecase<'a> {
    /// Read the DOT file, render it, rewrite the result into standalone
    /// form, and write it out. Returns the path that was written.
    pub fn run(&self, dot_path: &Path, tex_path: Option<&Path>) -> Result<PathBuf> {
        let tex_path = resolve_output_path(dot_path, tex_path);
        let dot_source = std::fs::read_to_string(dot_path)
            .with_context(|| format!("Failed to read {}", dot_path.display()))?;
        let rendered = self.renderer.render(&dot_source)?;
        let formatted = format_tex_document(&rendered);
        self.exporter.export(&formatted, &tex_path)?;
        Ok(tex_path)
    }
}
