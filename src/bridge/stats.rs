// In: src/bridge/stats.rs

//! Compression accounting reported by the analyze entry points.

use std::fmt;

/// The public-facing struct for compression analysis results, returned by
/// `analyze_slice` and its FFI counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Samples consumed from the input.
    pub input_points: usize,
    /// Anchors produced, synthesized interior anchors included.
    pub output_points: usize,
}

impl CompressionStats {
    /// Output size as a fraction of input size. An empty input reports 1.0,
    /// since nothing was asked to shrink.
    pub fn ratio(&self) -> f64 {
        if self.input_points == 0 {
            return 1.0;
        }
        self.output_points as f64 / self.input_points as f64
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} points (ratio {:.3})",
            self.input_points,
            self.output_points,
            self.ratio()
        )
    }
}
