// In: src/types/mod.rs

//! This module defines the core, strongly-typed data representations used
//! throughout the compression pipeline.

pub mod point;

pub use self::point::{Point, Stretch};
