// In: src/error.rs

//! This module defines the single, unified error type for the entire
//! `swingdoor` library.
//!
//! It uses the `thiserror` crate to provide ergonomic, context-aware error
//! handling. Every fallible operation in the crate returns a
//! `Result<_, SwingDoorError>`, and the FFI layer translates the error into
//! a Python exception at the boundary.

#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// The unified error enum for all fallible operations in the library.
#[derive(Error, Debug)]
pub enum SwingDoorError {
    /// Two samples handed to a slope computation share the same abscissa,
    /// so the corridor boundary through them is undefined. Carries the
    /// offending abscissa, widened to `f64` for reporting.
    #[error("degenerate stretch: equal abscissae at x = {0}")]
    DegenerateStretch(f64),

    /// The configured tolerance cannot define a corridor: it is negative,
    /// NaN, or not finite.
    #[error("invalid deviation {0}: must be a finite, non-negative number")]
    InvalidDeviation(f64),

    /// An error from the Serde JSON library during configuration
    /// (de)serialization.
    #[error("configuration error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// An error during a Python FFI operation, such as a source iterator
    /// raising or yielding something that is not an `(x, y)` pair.
    #[error("FFI operation failed: {0}")]
    FfiError(String),
}

//==================================================================================
// FFI Error Conversions
//==================================================================================
// These glue implementations let `?` move errors across the Python boundary
// in both directions.

#[cfg(feature = "python")]
impl From<PyErr> for SwingDoorError {
    fn from(err: PyErr) -> Self {
        SwingDoorError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<SwingDoorError> for PyErr {
    fn from(err: SwingDoorError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
