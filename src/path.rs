//! Path-like argument handling for the filesystem guards.
use crate::value::Value;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// What a filesystem guard sees when it looks at its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// No value was supplied.
    Absent,
    /// A value that names a filesystem location.
    Path(Cow<'a, Path>),
    /// A value that is present but cannot name a location; carries its type name.
    NotPathLike(&'static str),
}

/// An argument that may or may not be usable as a filesystem path.
///
/// Text, byte sequences and structured path handles are path-like. `Option`
/// and [`Value`] widen the domain so the guard itself can reject absent and
/// non-path arguments.
pub trait PathCandidate {
    fn candidate(&self) -> Candidate<'_>;
}

impl<P: PathCandidate + ?Sized> PathCandidate for &P {
    fn candidate(&self) -> Candidate<'_> {
        (**self).candidate()
    }
}

impl<P: PathCandidate> PathCandidate for Option<P> {
    fn candidate(&self) -> Candidate<'_> {
        match self {
            Some(p) => p.candidate(),
            None => Candidate::Absent,
        }
    }
}

macro_rules! impl_path_candidate_via_as_ref {
    ($($t:ty),*) => {
        $(
            impl PathCandidate for $t {
                fn candidate(&self) -> Candidate<'_> {
                    Candidate::Path(Cow::Borrowed(AsRef::<Path>::as_ref(self)))
                }
            }
        )*
    };
}

impl_path_candidate_via_as_ref!(str, String, OsStr, OsString, Path, PathBuf);

impl PathCandidate for [u8] {
    fn candidate(&self) -> Candidate<'_> {
        Candidate::Path(bytes_to_path(self))
    }
}

impl PathCandidate for Vec<u8> {
    fn candidate(&self) -> Candidate<'_> {
        self.as_slice().candidate()
    }
}

impl PathCandidate for Value {
    fn candidate(&self) -> Candidate<'_> {
        match self {
            Value::Null => Candidate::Absent,
            Value::Text(s) => s.candidate(),
            Value::Bytes(b) => b.candidate(),
            Value::Path(p) => p.candidate(),
            other => Candidate::NotPathLike(other.kind().name()),
        }
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(Path::new(OsStr::from_bytes(bytes)))
}

// Elsewhere paths are not raw bytes; decode lossily and let the lookup decide.
#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => Cow::Borrowed(Path::new(s)),
        Cow::Owned(s) => Cow::Owned(PathBuf::from(s)),
    }
}
