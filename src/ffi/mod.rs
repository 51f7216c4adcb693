// In: src/ffi/mod.rs

//! This module serves as the public API for the Foreign Function Interface
//! (FFI) layer.
//!
//! It re-exports the Python-facing functions and classes from the `python`
//! submodule, and the source adapters from `ioadapters`. The `#[pymodule]`
//! definition in `lib.rs` is its only consumer.

pub mod ioadapters;
pub mod python;

pub use self::python::{compress_analyze_py, compress_py, enable_verbose_logging_py};
