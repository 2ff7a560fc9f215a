//! File-name splitting helpers.

use std::path::Path;

/// Returns the file name without its final extension.
///
/// Names with several dots keep everything before the last one. Empty or
/// whitespace-only input yields an empty string.
///
/// # Example
///
/// ```
/// use wrangle_text::file_stem_only;
///
/// assert_eq!(file_stem_only("report.pdf"), "report");
/// assert_eq!(file_stem_only("file.name.ext"), "file.name");
/// assert_eq!(file_stem_only("/tmp/archive.tar.gz"), "archive.tar");
/// ```
pub fn file_stem_only(name: &str) -> String {
    Path::new(name.trim())
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the final extension without its dot.
///
/// Empty input, or a name with no extension, yields an empty string.
///
/// # Example
///
/// ```
/// use wrangle_text::file_ext_only;
///
/// assert_eq!(file_ext_only("report.pdf"), "pdf");
/// assert_eq!(file_ext_only("Makefile"), "");
/// ```
pub fn file_ext_only(name: &str) -> String {
    Path::new(name.trim())
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
