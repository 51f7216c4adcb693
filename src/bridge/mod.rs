// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the swingdoor library. It wraps the
// pure `stream_pipeline` engine in the shapes consumers actually hold: plain
// iterators of samples, in-memory slices, and a stateful facade that carries a
// validated configuration across runs. It is the authoritative boundary between
// the outside world and the internal corridor logic.
//
// Data Flow (streaming):
//
//   1. [Stateful Facade (Compressor)]       -> holds a validated CompressorConfig
//         |
//         `-> wraps the caller's samples into `Result` items ->
//
//   2. [Stream Adapter (compress_iter)]     -> builds the engine over the source
//         |
//         `-> returns ->
//
//   3. [Pipeline Engine (StreamCompressor)] -> lazily yields `Result<Point, _>`
//
// The eager helpers (`compress_slice`, `analyze_slice`) drive the same lazy
// engine to completion and stop at the first error.
//
// ====================================================================================
pub mod compressor;
pub mod stateless_api;
pub(crate) mod stats;

// --- High-Level Stateful API ---
pub use self::compressor::Compressor;

// --- Low-Level Stateless API (for FFI and testing) ---
pub use self::stateless_api::{analyze_slice, compress_iter, compress_slice};

// --- Accounting Structs ---
pub use self::stats::CompressionStats;
