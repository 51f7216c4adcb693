// In: src/bridge/compressor.rs

//! The stateful, configuration-carrying facade over the streaming engine.
//!
//! A `Compressor` validates its configuration once at construction and can
//! then hand out any number of compression runs over it. It is the route to
//! the full option set; the `stateless_api` helpers cover the common
//! deviation-only case.

use num_traits::Float;

use crate::bridge::stats::CompressionStats;
use crate::config::CompressorConfig;
use crate::error::SwingDoorError;
use crate::stream_pipeline::StreamCompressor;
use crate::types::Point;

#[derive(Debug, Clone)]
pub struct Compressor {
    config: CompressorConfig,
}

impl Compressor {
    /// Creates a compressor facade, rejecting configurations the engine
    /// would refuse.
    ///
    /// # Errors
    /// Returns `SwingDoorError::InvalidDeviation` for a negative or
    /// non-finite tolerance.
    pub fn new(config: CompressorConfig) -> Result<Self, SwingDoorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this facade runs with.
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Lazily compresses a fallible sample source, forwarding source errors
    /// through the output. This is the entry point the FFI adapters use.
    pub fn compress_stream<T, I>(&self, source: I) -> Result<StreamCompressor<T, I>, SwingDoorError>
    where
        T: Float,
        I: Iterator<Item = Result<Point<T>, SwingDoorError>>,
    {
        StreamCompressor::new(source, &self.config)
    }

    /// Lazily compresses any infallible sequence of samples.
    pub fn compress_iter<T, I>(
        &self,
        samples: I,
    ) -> Result<
        StreamCompressor<T, impl Iterator<Item = Result<Point<T>, SwingDoorError>>>,
        SwingDoorError,
    >
    where
        T: Float,
        I: IntoIterator<Item = Point<T>>,
    {
        self.compress_stream(samples.into_iter().map(Ok))
    }

    /// Eagerly compresses a slice, returning the retained anchors or the
    /// first error.
    pub fn compress_slice<T: Float>(
        &self,
        samples: &[Point<T>],
    ) -> Result<Vec<Point<T>>, SwingDoorError> {
        self.compress_iter(samples.iter().copied())?.collect()
    }

    /// Eagerly compresses a slice and reports the size accounting alongside
    /// the anchors.
    pub fn analyze_slice<T: Float>(
        &self,
        samples: &[Point<T>],
    ) -> Result<(Vec<Point<T>>, CompressionStats), SwingDoorError> {
        let anchors = self.compress_slice(samples)?;
        let stats = CompressionStats {
            input_points: samples.len(),
            output_points: anchors.len(),
        };
        log::debug!("analyze: {}", stats);
        Ok((anchors, stats))
    }
}
