//! Email and phone-number validation and formatting.
//!
//! Pure string-pattern logic: validation never performs DNS lookups or
//! network calls, and absence of a valid result is reported with `false`
//! or `None`, never an error.
//!
//! ```rust
//! use wrangle_contact::{is_valid_email, normalize_ru_phone};
//!
//! assert!(is_valid_email("user@example.com"));
//! assert_eq!(
//!     normalize_ru_phone("8 (912) 345-67-89").as_deref(),
//!     Some("+79123456789")
//! );
//! ```

mod email;
mod phone;

pub use email::is_valid_email;
pub use phone::normalize_ru_phone;
