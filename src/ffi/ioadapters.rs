// In: src/ffi/ioadapters.rs

use pyo3::prelude::*;

use crate::error::SwingDoorError;
use crate::types::Point;

// --- Adapter for BRIDGING a Python iterator to the Rust sample source trait ---

/// Wraps any Python iterator of `(x, y)` pairs as the fallible sample
/// source the engine consumes.
///
/// The GIL is acquired per pull, so the surrounding compression loop may
/// run inside `py.allow_threads`. `StopIteration` maps to the end of the
/// stream; any other Python exception is forwarded as an error item for the
/// engine to fail on.
pub struct PyPointStream {
    pub obj: PyObject,
}

impl Iterator for PyPointStream {
    type Item = Result<Point<f64>, SwingDoorError>;

    fn next(&mut self) -> Option<Self::Item> {
        Python::with_gil(|py| {
            let result = self.obj.call_method0(py, "__next__");
            match result {
                Ok(item) => match item.extract::<(f64, f64)>(py) {
                    Ok((x, y)) => Some(Ok(Point::new(x, y))),
                    Err(e) => Some(Err(SwingDoorError::FfiError(format!(
                        "stream item is not an (x, y) pair of numbers: {}",
                        e
                    )))),
                },
                Err(e) => {
                    if e.is_instance_of::<pyo3::exceptions::PyStopIteration>(py) {
                        None
                    } else {
                        Some(Err(SwingDoorError::from(e)))
                    }
                }
            }
        })
    }
}
