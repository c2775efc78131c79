/// dot2tex Runner.
///
/// Wraps the external `dot2tex` executable as the graph-rendering
/// collaborator. dot2tex owns the DOT grammar and the TeX generation;
/// this module only feeds it graph text and collects the document.

use std::io::Write;
use std::process::{Command, Stdio};
use anyhow::{Context, Result, bail};
use crate::domain::render_format::RenderFormat;
use crate::ports::GraphRenderer;

/// Executable name of the renderer.
const RENDERER_COMMAND: &str = "dot2tex";
/// Shown when the renderer is missing from PATH.
const INSTALL_INSTRUCTIONS: &str = "Install dot2tex: pip install dot2tex";

/// Renders DOT text by shelling out to dot2tex.
pub struct Dot2TexRenderer {
    format: RenderFormat,
}

impl Dot2TexRenderer {
    pub fn new(format: RenderFormat) -> Self {
        Self { format }
    }
}

impl GraphRenderer for Dot2TexRenderer {
    fn render(&self, dot_source: &str) -> Result<String> {
        check_renderer_available()?;
        run_renderer_command(dot_source, self.format)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Internal Implementation
// ═══════════════════════════════════════════════════════════════════════════

/// Check that the dot2tex executable is available.
fn check_renderer_available() -> Result<()> {
    let check = Command::new(RENDERER_COMMAND)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match check {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            bail!(
                "{} found but returned exit code: {:?}",
                RENDERER_COMMAND,
                status.code()
            );
        }
        Err(_) => {
            bail!(
                "{} not found in PATH. {}",
                RENDERER_COMMAND,
                INSTALL_INSTRUCTIONS
            );
        }
    }
}

/// Run the renderer over the graph text, returning the TeX document.
fn run_renderer_command(dot_source: &str, format: RenderFormat) -> Result<String> {
    let spec = build_command_spec(format);

    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to execute {}", spec.program))?;

    // Taking stdin drops the handle at the end of the statement, which
    // closes the pipe and signals EOF to the renderer.
    child
        .stdin
        .take()
        .context("Failed to open dot2tex stdin")?
        .write_all(dot_source.as_bytes())
        .context("Failed to stream graph text to dot2tex")?;

    let output = child
        .wait_with_output()
        .context("Failed to collect dot2tex output")?;

    if !output.status.success() {
        bail!(
            "dot2tex failed with exit code {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).context("dot2tex produced non-UTF-8 output")
}

// ═══════════════════════════════════════════════════════════════════════════
// Testable Command Builder (for unit tests)
// ═══════════════════════════════════════════════════════════════════════════

/// Describes the renderer invocation for a given output format.
/// This is primarily for testing without actually executing commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererCommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Build the command specification for a given format (testable function).
pub fn build_command_spec(format: RenderFormat) -> RendererCommandSpec {
    RendererCommandSpec {
        program: RENDERER_COMMAND.to_string(),
        args: vec!["--format".to_string(), format.flag_value().to_string()],
    }
}
