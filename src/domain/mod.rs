// Domain logic for dot2tikz: pure text and path rules, no I/O.

pub mod output_path;
pub mod render_format;
pub mod texdoc;
