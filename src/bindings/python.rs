// FFI Facade: the `_core` Python module.
// Each guard returns the very object it was given, so Python callers can use
// them inline exactly like the native checks. Failures become the usual
// Python exceptions: ValueError, TypeError, FileNotFoundError.

use crate::error::{GuardError, GuardErrorKind};
use crate::guard::{reject, Guard};
use crate::value::Value;
use pyo3::exceptions::{PyFileNotFoundError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString, PyTuple};
use std::path::PathBuf;

impl From<GuardError> for PyErr {
    fn from(err: GuardError) -> PyErr {
        let msg = err.to_string();
        match err.kind() {
            GuardErrorKind::InvalidArgument => PyValueError::new_err(msg),
            GuardErrorKind::TypeMismatch => PyTypeError::new_err(msg),
            GuardErrorKind::NotFound => PyFileNotFoundError::new_err(msg),
        }
    }
}

fn type_name_of(argument: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(argument.get_type().name()?.to_string())
}

/// Renders an `isinstance` target: a type, or a tuple of types joined by `|`.
fn expected_type_name(expected: &Bound<'_, PyAny>) -> PyResult<String> {
    if expected.is_instance_of::<PyTuple>() {
        let names = expected
            .try_iter()?
            .map(|member| expected_type_name(&member?))
            .collect::<PyResult<Vec<_>>>()?;
        return Ok(names.join(" | "));
    }
    Ok(expected.getattr("__name__")?.to_string())
}

/// Translates a Python path argument (`str`, `bytes`, `os.PathLike`) into a
/// [`Value`] the native filesystem guards understand.
fn path_value(argument: &Bound<'_, PyAny>, argument_name: &str) -> PyResult<Value> {
    if argument.is_none() {
        return Ok(Value::Null);
    }
    if argument.is_instance_of::<PyString>() {
        return Ok(Value::Text(argument.extract()?));
    }
    if argument.is_instance_of::<PyBytes>() {
        return Ok(Value::Bytes(argument.extract()?));
    }
    let path_like = argument.py().import("os")?.getattr("PathLike")?;
    if argument.is_instance(&path_like)? {
        let path: PathBuf = argument.extract()?;
        return Ok(Value::Path(path));
    }
    Err(reject(GuardError::NotPathLike {
        argument: argument_name.to_owned(),
        actual: type_name_of(argument)?,
    })
    .into())
}

/// The `Guard` class: every check is a static method, as in
/// `Guard.against_none(x, "x")`.
#[pyclass(name = "Guard", frozen)]
pub struct PyGuard;

#[pymethods]
impl PyGuard {
    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_none<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        if argument.is_none() {
            return Err(reject(GuardError::Absent { argument: argument_name.to_owned() }).into());
        }
        Ok(argument)
    }

    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_negative<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        if argument.lt(0)? {
            return Err(reject(GuardError::Negative { argument: argument_name.to_owned() }).into());
        }
        Ok(argument)
    }

    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_empty_string<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        if argument.eq("")? {
            return Err(reject(GuardError::EmptyString { argument: argument_name.to_owned() }).into());
        }
        Ok(argument)
    }

    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_zero<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        if argument.eq(0)? {
            return Err(reject(GuardError::Zero { argument: argument_name.to_owned() }).into());
        }
        Ok(argument)
    }

    /// Uses Python truthiness: empty containers, zero, `None` and `False` all fail.
    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_empty_collection<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        if !argument.is_truthy()? {
            return Err(reject(GuardError::EmptyCollection { argument: argument_name.to_owned() }).into());
        }
        Ok(argument)
    }

    /// `expected_type` is anything `isinstance` accepts, tuples of types included.
    #[staticmethod]
    #[pyo3(signature = (argument, expected_type, argument_name = "value"))]
    fn against_wrong_type<'py>(
        argument: Bound<'py, PyAny>,
        expected_type: Bound<'py, PyAny>,
        argument_name: &str,
    ) -> PyResult<Bound<'py, PyAny>> {
        if !argument.is_instance(&expected_type)? {
            return Err(reject(GuardError::WrongType {
                argument: argument_name.to_owned(),
                expected: expected_type_name(&expected_type)?,
                actual: type_name_of(&argument)?,
            })
            .into());
        }
        Ok(argument)
    }

    #[staticmethod]
    #[pyo3(signature = (path, argument_name = "file_path"))]
    fn against_file_not_found<'py>(path: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        let value = path_value(&path, argument_name)?;
        Guard::named(argument_name).against_file_not_found(value)?;
        Ok(path)
    }

    #[staticmethod]
    #[pyo3(signature = (path, argument_name = "directory"))]
    fn against_directory_not_found<'py>(path: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        let value = path_value(&path, argument_name)?;
        Guard::named(argument_name).against_directory_not_found(value)?;
        Ok(path)
    }

    /// Follows `collections.abc.Iterable`, minus `str` and `bytes`.
    #[staticmethod]
    #[pyo3(signature = (argument, argument_name = "value"))]
    fn against_not_iterable<'py>(argument: Bound<'py, PyAny>, argument_name: &str) -> PyResult<Bound<'py, PyAny>> {
        let iterable = argument.py().import("collections.abc")?.getattr("Iterable")?;
        let is_text = argument.is_instance_of::<PyString>() || argument.is_instance_of::<PyBytes>();
        if is_text || !argument.is_instance(&iterable)? {
            return Err(reject(GuardError::NotIterable {
                argument: argument_name.to_owned(),
                actual: type_name_of(&argument)?,
            })
            .into());
        }
        Ok(argument)
    }
}

// --- Module Definition ---
/// Defines the `guard_core._core` Python module.
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuard>()?;
    Ok(())
}

// Needs a linkable interpreter: run with `--features python`, not `extension-module`.
#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::types::PyList;

    fn with_guard<F>(f: F)
    where
        F: for<'py> FnOnce(Python<'py>, &Bound<'py, PyAny>),
    {
        Python::initialize();
        Python::attach(|py| {
            let m = PyModule::new(py, "_core").unwrap();
            _core(py, &m).unwrap();
            let guard = m.getattr("Guard").unwrap();
            f(py, &guard);
        });
    }

    #[test]
    fn test_guard_class_static_methods() {
        with_guard(|py, guard| {
            let err = guard.getattr("against_none").unwrap().call1((py.None(), "x")).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.to_string().contains("'x'"));

            let back = guard.getattr("against_none").unwrap().call1((0,)).unwrap();
            assert_eq!(back.extract::<i32>().unwrap(), 0);
        });
    }

    #[test]
    fn test_exception_types() {
        with_guard(|py, guard| {
            let err = guard.getattr("against_not_iterable").unwrap().call1(("abc",)).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));

            let err = guard
                .getattr("against_file_not_found")
                .unwrap()
                .call1(("/nonexistent/path",))
                .unwrap_err();
            assert!(err.is_instance_of::<PyFileNotFoundError>(py));

            let err = guard.getattr("against_file_not_found").unwrap().call1((123,)).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }

    #[test]
    fn test_file_check_accepts_directory() {
        with_guard(|_py, guard| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().to_str().unwrap();
            let back = guard.getattr("against_file_not_found").unwrap().call1((path,)).unwrap();
            assert_eq!(back.extract::<String>().unwrap(), path);
        });
    }

    #[test]
    fn test_returns_same_object() {
        with_guard(|py, guard| {
            let list = PyList::new(py, [1, 2]).unwrap();
            let back = guard.getattr("against_empty_collection").unwrap().call1((&list,)).unwrap();
            assert_eq!(back.as_ptr(), list.as_ptr());
        });
    }

    #[test]
    fn test_not_iterable_follows_iterable_abc() {
        with_guard(|py, guard| {
            let indexed = PyModule::from_code(
                py,
                c"class Indexed:\n    def __getitem__(self, i):\n        raise IndexError\n",
                c"indexed.py",
                c"indexed",
            )
            .unwrap()
            .getattr("Indexed")
            .unwrap()
            .call0()
            .unwrap();
            let err = guard.getattr("against_not_iterable").unwrap().call1((indexed,)).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));

            let range = py.eval(c"range(3)", None, None).unwrap();
            assert!(guard.getattr("against_not_iterable").unwrap().call1((range,)).is_ok());
        });
    }

    #[test]
    fn test_wrong_type_names_both_types() {
        with_guard(|py, guard| {
            let str_type = py.get_type::<PyString>();
            let err = guard
                .getattr("against_wrong_type")
                .unwrap()
                .call1((5, str_type, "x"))
                .unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("str") && msg.contains("int"), "{msg}");
        });
    }

    #[test]
    fn test_wrong_type_accepts_tuple_of_types() {
        with_guard(|py, guard| {
            let types = PyTuple::new(py, [py.get_type::<PyString>(), py.get_type::<PyBytes>()]).unwrap();
            let check = guard.getattr("against_wrong_type").unwrap();

            assert!(check.call1(("a", &types)).is_ok());
            let err = check.call1((5, &types, "x")).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert!(err.to_string().contains("str | bytes"), "{err}");
        });
    }
}
