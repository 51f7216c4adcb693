//! This file is the root of the `swingdoor_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`stream_pipeline`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (behind the `python` feature).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod kernels;
pub mod stream_pipeline;
pub mod types;

mod error;
#[cfg(feature = "python")]
mod ffi;

pub use error::SwingDoorError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use ffi::python::PyStreamCompressor;
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `swingdoor_core` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn swingdoor_core(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compress_analyze_py, m)?)?;

    // --- Add our classes module ---
    m.add_class::<PyStreamCompressor>()?;

    // --- Expose the custom error type ---
    m.add(
        "SwingDoorError",
        py.get_type::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging at the stream driver's decision points ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
