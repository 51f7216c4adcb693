// In: src/bridge/stateless_api.rs

//! This module provides the low-level, stateless public API of the library.
//!
//! Each function builds a throwaway configuration carrying only the
//! caller's deviation and delegates to the engine; anchor gaps stay
//! unbounded here. Callers who need the full option set hold a
//! `bridge::Compressor` instead.

use num_traits::Float;

use crate::bridge::compressor::Compressor;
use crate::bridge::stats::CompressionStats;
use crate::config::CompressorConfig;
use crate::error::SwingDoorError;
use crate::stream_pipeline::StreamCompressor;
use crate::types::Point;

/// Lazily compresses any infallible sequence of samples with the given
/// tolerance.
///
/// The returned iterator pulls from `samples` only as its own caller pulls
/// anchors from it, and never buffers more than the live corridor state.
/// Dropping it early simply stops the input consumption.
///
/// # Errors
/// Returns `SwingDoorError::InvalidDeviation` before consuming anything
/// when the tolerance is negative or non-finite.
pub fn compress_iter<T, I>(
    samples: I,
    deviation: f64,
) -> Result<
    StreamCompressor<T, impl Iterator<Item = Result<Point<T>, SwingDoorError>>>,
    SwingDoorError,
>
where
    T: Float,
    I: IntoIterator<Item = Point<T>>,
{
    Compressor::new(CompressorConfig::with_deviation(deviation))?.compress_iter(samples)
}

/// Eagerly compresses a fully materialized slice, returning the retained
/// anchors or the first error.
pub fn compress_slice<T: Float>(
    samples: &[Point<T>],
    deviation: f64,
) -> Result<Vec<Point<T>>, SwingDoorError> {
    compress_iter(samples.iter().copied(), deviation)?.collect()
}

/// Eagerly compresses a slice and reports the size accounting alongside the
/// anchors.
pub fn analyze_slice<T: Float>(
    samples: &[Point<T>],
    deviation: f64,
) -> Result<(Vec<Point<T>>, CompressionStats), SwingDoorError> {
    Compressor::new(CompressorConfig::with_deviation(deviation))?.analyze_slice(samples)
}
