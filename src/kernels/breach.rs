// In: src/kernels/breach.rs

//! This module contains the pure, stateless kernel resolving a corridor
//! breach.
//!
//! When a sample pushes the running upper bound strictly above the running
//! lower bound, the corridor has to be re-rooted. The replacement anchor is
//! the midpoint of the two samples bracketing the breach, nudged half a
//! deviation back inside the violated side. The emitted anchor is this
//! interpolated point, not the raw breaching sample, which is why interior
//! anchors in the output generally do not coincide with any input sample.

use num_traits::Float;

use crate::error::SwingDoorError;
use crate::kernels::slope::{slope_bounds, SlopeBounds};
use crate::types::{Point, Stretch};

/// Which boundary of the corridor a sample violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachSide {
    Upper,
    Lower,
}

impl BreachSide {
    /// Lowercase label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            BreachSide::Upper => "upper",
            BreachSide::Lower => "lower",
        }
    }
}

/// Synthesizes the replacement anchor for a breach bracketed by `past` and
/// `current`, together with the bounds of the corridor re-rooted at that
/// anchor, measured toward `current`.
///
/// An upper breach nudges the anchor down by half the deviation, a lower
/// breach nudges it up, leaving the full remaining slack toward the side
/// that was not violated.
///
/// # Errors
/// Propagates `SwingDoorError::DegenerateStretch` when `past` and `current`
/// share an abscissa. The midpoint then coincides with `current` in x and
/// the re-rooted corridor would be undefined.
pub fn resolve_breach<T: Float>(
    past: Point<T>,
    current: Point<T>,
    deviation: T,
    side: BreachSide,
) -> Result<(Point<T>, SlopeBounds<T>), SwingDoorError> {
    let two = T::one() + T::one();
    let half_deviation = deviation / two;

    let mid_x = (past.x + current.x) / two;
    let mid_y = (past.y + current.y) / two;
    let anchor = match side {
        BreachSide::Upper => Point::new(mid_x, mid_y - half_deviation),
        BreachSide::Lower => Point::new(mid_x, mid_y + half_deviation),
    };

    let bounds = slope_bounds(&Stretch::new(current, anchor), deviation)?;
    Ok((anchor, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_breach_nudges_the_midpoint_down() {
        // Breach bracketed by (7, 8) and (8, 9.5) with deviation 1. The
        // anchor sits at the x midpoint, half a deviation under the y
        // midpoint of 8.75.
        let (anchor, bounds) = resolve_breach(
            Point::new(7.0, 8.0),
            Point::new(8.0, 9.5),
            1.0,
            BreachSide::Upper,
        )
        .expect("brackets are well-formed");

        assert_eq!(anchor, Point::new(7.5, 8.25));
        // Re-rooted corridor toward (8, 9.5): pivots at 9.25 and 7.25 over
        // a run of 0.5.
        assert_eq!(bounds.upper, 0.5);
        assert_eq!(bounds.lower, 4.5);
        assert!(bounds.is_open());
    }

    #[test]
    fn test_lower_breach_nudges_the_midpoint_up() {
        let (anchor, bounds) = resolve_breach(
            Point::new(7.0, 8.0),
            Point::new(8.0, 6.0),
            1.0,
            BreachSide::Lower,
        )
        .expect("brackets are well-formed");

        assert_eq!(anchor, Point::new(7.5, 7.5));
        assert_eq!(bounds.upper, -5.0);
        assert_eq!(bounds.lower, -1.0);
        assert!(bounds.is_open());
    }

    #[test]
    fn test_anchor_abscissa_sits_between_the_brackets() {
        let past = Point::new(3.0, 1.0);
        let current = Point::new(9.0, 4.0);
        let (anchor, _) = resolve_breach(past, current, 0.5, BreachSide::Upper)
            .expect("brackets are well-formed");
        assert!(past.x < anchor.x && anchor.x < current.x);
    }

    #[test]
    fn test_fresh_corridor_is_always_open() {
        // The re-rooted bounds start half a deviation away from the anchor
        // on the violated side, so they can never begin crossed.
        for (past_y, current_y, side) in [
            (8.0, 9.5, BreachSide::Upper),
            (8.0, 6.0, BreachSide::Lower),
            (-3.0, 14.0, BreachSide::Upper),
            (2.5, 2.4, BreachSide::Lower),
        ] {
            let (_, bounds) = resolve_breach(
                Point::new(1.0, past_y),
                Point::new(2.0, current_y),
                0.75,
                side,
            )
            .expect("brackets are well-formed");
            assert!(bounds.is_open());
        }
    }

    #[test]
    fn test_breach_between_equal_abscissae_is_degenerate() {
        let result = resolve_breach(
            Point::new(2.0, 1.0),
            Point::new(2.0, 4.0),
            1.0,
            BreachSide::Upper,
        );
        assert!(matches!(
            result,
            Err(SwingDoorError::DegenerateStretch(_))
        ));
    }
}
