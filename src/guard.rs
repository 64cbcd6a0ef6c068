//! The guard checks themselves.
//!
//! Every check inspects one argument and either hands it back untouched or
//! stops with a [`GuardError`] naming the argument. Checks are independent,
//! hold no state, and are meant to be chained inline where the argument is
//! first used:
//!
//! ```
//! use guard_core::Guard;
//!
//! fn average(total: f64, count: u32) -> Result<f64, guard_core::GuardError> {
//!     let count = Guard::named("count").against_zero(count)?;
//!     Ok(total / f64::from(count))
//! }
//!
//! assert!(average(10.0, 0).is_err());
//! ```
use crate::content::Emptiable;
use crate::error::{GuardError, GuardResult};
use crate::numeric::Numeric;
use crate::path::{Candidate, PathCandidate};
use crate::value::{Value, ValueKind};
use std::any::{type_name, Any, TypeId};
use std::path::Path;
use tracing::debug;

/// Placeholder used in messages when no argument name is supplied.
pub const DEFAULT_NAME: &str = "value";
/// Placeholder for [`Guard::against_file_not_found`].
pub const DEFAULT_FILE_NAME: &str = "file_path";
/// Placeholder for [`Guard::against_directory_not_found`].
pub const DEFAULT_DIRECTORY_NAME: &str = "directory";

/// A set of checks bound to an (optional) argument name.
///
/// The name only affects the rendered error message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guard<'a> {
    name: Option<&'a str>,
}

impl<'a> Guard<'a> {
    pub fn named(name: &'a str) -> Self {
        Self { name: Some(name) }
    }

    fn argument(&self, placeholder: &str) -> String {
        self.name.unwrap_or(placeholder).to_owned()
    }

    pub fn against_none<T>(&self, value: Option<T>) -> GuardResult<T> {
        value.ok_or_else(|| reject(GuardError::Absent { argument: self.argument(DEFAULT_NAME) }))
    }

    pub fn against_negative<N: Numeric>(&self, value: N) -> GuardResult<N> {
        if value.is_negative() {
            return Err(reject(GuardError::Negative { argument: self.argument(DEFAULT_NAME) }));
        }
        Ok(value)
    }

    /// Rejects exactly `""`. Whitespace-only text passes.
    pub fn against_empty_string<S: AsRef<str>>(&self, value: S) -> GuardResult<S> {
        if value.as_ref().is_empty() {
            return Err(reject(GuardError::EmptyString { argument: self.argument(DEFAULT_NAME) }));
        }
        Ok(value)
    }

    pub fn against_zero<N: Numeric>(&self, value: N) -> GuardResult<N> {
        if value.is_zero() {
            return Err(reject(GuardError::Zero { argument: self.argument(DEFAULT_NAME) }));
        }
        Ok(value)
    }

    /// Rejects anything that carries no content; see [`Emptiable`] for what
    /// counts as empty.
    pub fn against_empty_collection<C: Emptiable>(&self, value: C) -> GuardResult<C> {
        if value.is_content_empty() {
            return Err(reject(GuardError::EmptyCollection {
                argument: self.argument(DEFAULT_NAME),
            }));
        }
        Ok(value)
    }

    /// Rejects `value` unless its concrete type is `Expected`.
    ///
    /// This is mostly useful inside generic code, where the concrete type is
    /// not pinned down at the call site. A `Box<dyn Any>` is compared as the box
    /// itself; use [`Guard::against_wrong_kind`] for untyped data.
    pub fn against_wrong_type<Expected: Any, T: Any>(&self, value: T) -> GuardResult<T> {
        if TypeId::of::<T>() != TypeId::of::<Expected>() {
            return Err(reject(GuardError::WrongType {
                argument: self.argument(DEFAULT_NAME),
                expected: type_name::<Expected>().to_owned(),
                actual: type_name::<T>().to_owned(),
            }));
        }
        Ok(value)
    }

    /// Same as [`Guard::against_wrong_type`] for an untyped [`Value`].
    pub fn against_wrong_kind(&self, value: Value, expected: ValueKind) -> GuardResult<Value> {
        let actual = value.kind();
        if actual != expected {
            return Err(reject(GuardError::WrongType {
                argument: self.argument(DEFAULT_NAME),
                expected: expected.name().to_owned(),
                actual: actual.name().to_owned(),
            }));
        }
        Ok(value)
    }

    /// Requires `path` to be present, path-like, and to name something that
    /// exists on the filesystem. Any entry counts, directories included; use
    /// [`Guard::against_directory_not_found`] to require a directory.
    pub fn against_file_not_found<P: PathCandidate>(&self, path: P) -> GuardResult<P> {
        let argument = self.argument(DEFAULT_FILE_NAME);
        let found = located(&path, &argument, Path::exists)?;
        if let Some(missing) = found {
            return Err(reject(GuardError::FileNotFound { argument, path: missing }));
        }
        Ok(path)
    }

    /// Requires `path` to be present, path-like, and to name an existing
    /// directory. An existing regular file is rejected.
    pub fn against_directory_not_found<P: PathCandidate>(&self, path: P) -> GuardResult<P> {
        let argument = self.argument(DEFAULT_DIRECTORY_NAME);
        let found = located(&path, &argument, Path::is_dir)?;
        if let Some(missing) = found {
            return Err(reject(GuardError::DirectoryNotFound { argument, path: missing }));
        }
        Ok(path)
    }

    /// Requires a collection of elements. Text and bytes are rejected even
    /// though they are sequences.
    pub fn against_not_iterable<V: Into<Value>>(&self, value: V) -> GuardResult<Value> {
        let value = value.into();
        let kind = value.kind();
        if !kind.is_iterable() {
            return Err(reject(GuardError::NotIterable {
                argument: self.argument(DEFAULT_NAME),
                actual: kind.name().to_owned(),
            }));
        }
        Ok(value)
    }
}

/// Resolves `path` and runs `exists` on it. Returns the path that failed the
/// lookup, or `None` when it was found.
fn located<P: PathCandidate + ?Sized>(
    path: &P,
    argument: &str,
    exists: fn(&Path) -> bool,
) -> GuardResult<Option<std::path::PathBuf>> {
    match path.candidate() {
        Candidate::Absent => Err(reject(GuardError::Absent { argument: argument.to_owned() })),
        Candidate::NotPathLike(actual) => Err(reject(GuardError::NotPathLike {
            argument: argument.to_owned(),
            actual: actual.to_owned(),
        })),
        Candidate::Path(p) if exists(&p) => Ok(None),
        Candidate::Path(p) => Ok(Some(p.into_owned())),
    }
}

pub(crate) fn reject(err: GuardError) -> GuardError {
    debug!(argument = err.argument(), kind = ?err.kind(), "guard rejected argument");
    err
}

// --- Free-function forms ---

pub fn against_none<T>(value: Option<T>, name: &str) -> GuardResult<T> {
    Guard::named(name).against_none(value)
}

pub fn against_negative<N: Numeric>(value: N, name: &str) -> GuardResult<N> {
    Guard::named(name).against_negative(value)
}

pub fn against_empty_string<S: AsRef<str>>(value: S, name: &str) -> GuardResult<S> {
    Guard::named(name).against_empty_string(value)
}

pub fn against_zero<N: Numeric>(value: N, name: &str) -> GuardResult<N> {
    Guard::named(name).against_zero(value)
}

pub fn against_empty_collection<C: Emptiable>(value: C, name: &str) -> GuardResult<C> {
    Guard::named(name).against_empty_collection(value)
}

pub fn against_wrong_type<Expected: Any, T: Any>(value: T, name: &str) -> GuardResult<T> {
    Guard::named(name).against_wrong_type::<Expected, T>(value)
}

pub fn against_wrong_kind(value: Value, expected: ValueKind, name: &str) -> GuardResult<Value> {
    Guard::named(name).against_wrong_kind(value, expected)
}

pub fn against_file_not_found<P: PathCandidate>(path: P, name: &str) -> GuardResult<P> {
    Guard::named(name).against_file_not_found(path)
}

pub fn against_directory_not_found<P: PathCandidate>(path: P, name: &str) -> GuardResult<P> {
    Guard::named(name).against_directory_not_found(path)
}

pub fn against_not_iterable<V: Into<Value>>(value: V, name: &str) -> GuardResult<Value> {
    Guard::named(name).against_not_iterable(value)
}
