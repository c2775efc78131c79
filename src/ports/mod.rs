use anyhow::Result;
use std::path::Path;

/// Renders a DOT graph description into a TeX document.
pub trait GraphRenderer {
    fn render(&self, dot_source: &str) -> Result<String>;
}

/// Writes a finished TeX document to its destination.
pub trait TexExporter {
    fn export(&self, tex: &str, path: &Path) -> Result<()>;
}
