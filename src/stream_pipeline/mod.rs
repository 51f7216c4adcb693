// In: src/stream_pipeline/mod.rs

//! This module is the streaming decision engine of the library.
//!
//! It composes the pure slope and breach kernels into a single-pass,
//! constant-memory state machine that turns a lazy sequence of samples into
//! the lazy sequence of retained anchors. It defines the highest-level
//! workflow within the pure Rust core; the `bridge` module wraps it into
//! the shapes consumers actually hold.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// The state machine driving corridor tracking, breach resolution and
/// anchor emission.
pub mod compressor;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use self::compressor::StreamCompressor;

#[cfg(test)]
mod compressor_tests;
