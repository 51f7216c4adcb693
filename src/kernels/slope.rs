// In: src/kernels/slope.rs

//! This module contains the pure, stateless kernel computing the pair of
//! boundary slopes that bound a corridor.
//!
//! The reference anchor of a corridor owns two pivots, offset vertically by
//! the tolerance: `(x, y + deviation)` above and `(x, y - deviation)` below.
//! The kernel measures the slope from each pivot toward a later sample. The
//! stream driver keeps a running maximum of the upper slope and a running
//! minimum of the lower slope; the corridor stays open while the maximum
//! does not exceed the minimum.

use num_traits::{Float, ToPrimitive};

use crate::error::SwingDoorError;
use crate::types::Stretch;

/// The two boundary slopes of a corridor, measured from the pivots of its
/// reference anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeBounds<T> {
    /// Slope from the upper pivot. The driver tracks its running maximum.
    pub upper: T,
    /// Slope from the lower pivot. The driver tracks its running minimum.
    pub lower: T,
}

impl<T: Float> SlopeBounds<T> {
    /// True while the corridor these bounds describe can still absorb
    /// samples. Equality keeps the corridor open; only a strict crossing
    /// of the bounds is a breach.
    pub fn is_open(&self) -> bool {
        self.upper <= self.lower
    }
}

/// Computes the boundary slopes for `stretch`, with pivots offset by
/// `deviation`.
///
/// # Errors
/// Returns `SwingDoorError::DegenerateStretch` when both points of the
/// stretch share the same abscissa. The slope is undefined there and must
/// be surfaced to the caller, never coerced to an infinity or a zero.
pub fn slope_bounds<T: Float>(
    stretch: &Stretch<T>,
    deviation: T,
) -> Result<SlopeBounds<T>, SwingDoorError> {
    let run = stretch.run();
    if run == T::zero() {
        return Err(SwingDoorError::DegenerateStretch(
            stretch.later.x.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let upper = (stretch.later.y - (stretch.reference.y + deviation)) / run;
    let lower = (stretch.later.y - (stretch.reference.y - deviation)) / run;
    Ok(SlopeBounds { upper, lower })
}
