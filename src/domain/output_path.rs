//! Default output path derivation.

use std::path::{Path, PathBuf};

/// Extension of the generated TeX document.
const TEX_EXTENSION: &str = "tex";

/// Resolve the effective output path for a conversion.
///
/// An explicit output path always wins, unchanged. Otherwise the input
/// path's extension (everything after the final `.`) is replaced with
/// `tex`; an input without an extension gets `.tex` appended.
pub fn resolve_output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(TEX_EXTENSION),
    }
}
