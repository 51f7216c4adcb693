// In: src/types/point.rs

//! Defines the immutable sample value type and the slope operand pair.
//!
//! A `Point` is what the engine consumes and what it emits: either a raw
//! sample carried through verbatim, or a synthesized anchor. Points are
//! plain `Copy` value objects; an anchor that has been emitted is never
//! revisited or mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sample in a rectangular coordinate system.
///
/// `x` is the strictly increasing axis of the stream (time, depth, byte
/// offset); `y` is the measured value at that position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a point from its coordinates.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

/// The ordered operand pair of one slope computation: the later sample
/// first, then the reference anchor it is measured against.
///
/// The order matters. Boundary slopes run from the reference anchor's
/// pivots toward the later sample, and the sign conventions of the whole
/// corridor test depend on that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch<T> {
    pub later: Point<T>,
    pub reference: Point<T>,
}

impl<T> Stretch<T> {
    pub fn new(later: Point<T>, reference: Point<T>) -> Self {
        Self { later, reference }
    }
}

impl<T: num_traits::Float> Stretch<T> {
    /// Horizontal extent of the stretch. Zero marks a degenerate stretch
    /// whose slope is undefined.
    pub fn run(&self) -> T {
        self.later.x - self.reference.x
    }
}
