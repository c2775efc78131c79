//! TeX Document Post-processing
//!
//! Rewrites the document dot2tex emits into a standalone figure.

/// Document class emitted by dot2tex.
const ARTICLE_CLASS: &str = r"\documentclass{article}";
/// Replacement class that crops the page to the figure, with a small border.
const STANDALONE_CLASS: &str = r"\documentclass[border=5pt]{standalone}";
/// Page-layout command that has no meaning in a standalone document.
const ENLARGE_PAGE: &str = r"\enlargethispage";

/// Rewrite a rendered TeX document into standalone form.
///
/// Every occurrence of the `article` document class is replaced with a
/// bordered `standalone` class, and every line whose stripped form starts
/// with `\enlargethispage` is dropped. Remaining lines keep their original
/// order and are rejoined with `\n`.
pub fn format_tex_document(tex: &str) -> String {
    let tex = tex.replace(ARTICLE_CLASS, STANDALONE_CLASS);
    tex.lines()
        .filter(|line| !line.trim_start().starts_with(ENLARGE_PAGE))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_document_class() {
        let tex = "\\documentclass{article}\n\\begin{document}\n\\end{document}";
        let out = format_tex_document(tex);
        assert!(out.contains("\\documentclass[border=5pt]{standalone}"));
        assert!(!out.contains("\\documentclass{article}"));
    }

    #[test]
    fn test_substitutes_every_occurrence() {
        let tex = "\\documentclass{article}\n% \\documentclass{article}";
        let out = format_tex_document(tex);
        assert_eq!(out.matches("\\documentclass[border=5pt]{standalone}").count(), 2);
    }

    #[test]
    fn test_filters_enlargethispage_lines() {
        let tex = "\\begin{document}\n\\enlargethispage{100cm}\n  \\enlargethispage{100cm}\n\\end{document}";
        let out = format_tex_document(tex);
        assert!(!out.contains("\\enlargethispage"));
        assert_eq!(out, "\\begin{document}\n\\end{document}");
    }

    #[test]
    fn test_keeps_other_lines_in_order() {
        let tex = "first\n\\enlargethispage{1cm}\nsecond\nthird";
        assert_eq!(format_tex_document(tex), "first\nsecond\nthird");
    }

    #[test]
    fn test_line_mentioning_command_mid_line_survives() {
        // Only lines that START with the command (after stripping) are dropped.
        let tex = "% emits \\enlargethispage in page mode";
        assert_eq!(format_tex_document(tex), tex);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(format_tex_document(""), "");
    }

    #[test]
    fn test_is_deterministic() {
        let tex = "\\documentclass{article}\na\n\\enlargethispage{100cm}\nb";
        assert_eq!(format_tex_document(tex), format_tex_document(tex));
    }
}
