//! Argument guards: small, stateless precondition checks that hand a value back
//! unchanged or fail fast with a typed [`GuardError`].
//!
//! The checks are available as methods on [`Guard`] (which carries the optional
//! argument name used in messages) and as free functions taking the name
//! explicitly.

pub use self::error::{GuardError, GuardErrorKind, GuardResult};
pub use self::guard::{
    against_directory_not_found, against_empty_collection, against_empty_string,
    against_file_not_found, against_negative, against_none, against_not_iterable,
    against_wrong_kind, against_wrong_type, against_zero, Guard, DEFAULT_DIRECTORY_NAME,
    DEFAULT_FILE_NAME, DEFAULT_NAME,
};
pub use self::content::Emptiable;
pub use self::numeric::Numeric;
pub use self::path::{Candidate, PathCandidate};
pub use self::value::{Value, ValueKind};

// --- MODULE DECLARATIONS ---
mod content;
mod error;
mod guard;
mod numeric;
mod path;
mod value;

// The Python extension surface; see `bindings::python`.
#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}
