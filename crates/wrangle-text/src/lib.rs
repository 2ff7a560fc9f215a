//! String, path, and URL normalization helpers.
//!
//! Small pure functions with fixed empty-input behavior: empty in, the
//! documented empty-case value out, never an error.
//!
//! ```rust
//! use wrangle_text::{ensure_trailing_slash, strip_bom, truncate_chars};
//!
//! assert_eq!(strip_bom("\u{feff}data"), "data");
//! assert_eq!(truncate_chars("Lorem ipsum inum", 10, "..."), "Lorem i...");
//! assert_eq!(ensure_trailing_slash("https://a.b.c"), "https://a.b.c/");
//! ```

mod path;
mod string;
mod url;

pub use crate::url::{
    ensure_leading_slash, ensure_trailing_slash, host_only, host_with_scheme,
    host_with_scheme_and_path, strip_trailing_slash,
};
pub use path::{file_ext_only, file_stem_only};
pub use string::{strip_bom, truncate_chars, truncate_width};
