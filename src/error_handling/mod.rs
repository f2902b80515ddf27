//! Error types and message tables.
//!
//! Every validation rule maps to exactly one [`ValidationErrorKind`] with a
//! fixed human-readable message; execution and setup failures get their own
//! types so callers can tell the three apart.

mod types;

pub use types::{InitializationError, ReqlineError, ValidationErrorKind};
