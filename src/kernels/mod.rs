// In: src/kernels/mod.rs

//! This module contains the pure, stateless, and performant kernels at the
//! bottom of the compression pipeline.
//!
//! Kernels never hold state between calls and never perform I/O. The
//! `stream_pipeline` module composes them into the streaming decision
//! engine; nothing below this layer knows a stream exists.

pub mod breach;
pub mod slope;

pub use self::breach::{resolve_breach, BreachSide};
pub use self::slope::{slope_bounds, SlopeBounds};
