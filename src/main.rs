// Command-line entry point for dot2tikz.

use clap::Parser;
use dot2tikz::application::ConvertUsecase;
use dot2tikz::domain::render_format::RenderFormat;
use dot2tikz::infrastructure::{Dot2TexRenderer, FileTexExporter};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(version, about = "Convert a Graphviz DOT file into a standalone TikZ/TeX figure", long_about = None)]
struct Cli {
    /// Input DOT file path
    input: PathBuf,

    /// Output TeX file path (defaults to the input path with a .tex extension)
    output: Option<PathBuf>,

    /// Renderer output format (tikz, pgf, pstricks)
    #[arg(short, long, default_value = "tikz")]
    format: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage/help text; help and version are not
            // errors and exit 0.
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let Some(format) = RenderFormat::from_str(&cli.format) else {
        eprintln!(
            "Error: unknown format '{}' (expected tikz, pgf, or pstricks)",
            cli.format
        );
        process::exit(1);
    };

    if !cli.input.exists() {
        eprintln!("Error: {} does not exist.", cli.input.display());
        process::exit(1);
    }

    let renderer = Dot2TexRenderer::new(format);
    let usecase = ConvertUsecase {
        renderer: &renderer,
        exporter: &FileTexExporter,
    };

    if let Err(e) = usecase.run(&cli.input, cli.output.as_deref()) {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_input_argument() {
        assert!(Cli::try_parse_from(["dot2tikz"]).is_err());
    }

    #[test]
    fn test_rejects_extra_positional_arguments() {
        assert!(Cli::try_parse_from(["dot2tikz", "a.dot", "a.tex", "extra"]).is_err());
    }

    #[test]
    fn test_output_is_optional() {
        let cli = Cli::try_parse_from(["dot2tikz", "a.dot"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.dot"));
        assert!(cli.output.is_none());
        assert_eq!(cli.format, "tikz");
    }

    #[test]
    fn test_accepts_explicit_output() {
        let cli = Cli::try_parse_from(["dot2tikz", "a.dot", "b.tex"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("b.tex")));
    }
}
