// In: src/stream_pipeline/compressor.rs

//! The streaming swinging-door driver.
//!
//! A single pass over the input maintains one live corridor: the widest
//! upper-bound slope and the narrowest lower-bound slope seen since the
//! last emitted anchor. A sample that keeps the corridor open is dropped.
//! A sample that crosses the bounds forces a synthesized anchor and a fresh
//! corridor rooted there. The first raw sample always opens the output, and
//! the last raw sample of any stream holding two or more always closes it.
//!
//! The driver is an `Iterator` adapter: it pulls from its source only when
//! the caller pulls from it, and it holds no buffer beyond the corridor
//! state itself.

use std::num::NonZeroUsize;

use num_traits::Float;

use crate::config::CompressorConfig;
use crate::error::SwingDoorError;
use crate::kernels::breach::{resolve_breach, BreachSide};
use crate::kernels::slope::{slope_bounds, SlopeBounds};
use crate::observability::display_value;
use crate::types::{Point, Stretch};

//==================================================================================
// 1. Driver State
//==================================================================================

/// Where the driver sits between two pulls of the output iterator.
///
/// End of input is not a state of its own: exhaustion is discovered at the
/// moment a pull returns `None`, and each state decides what that means for
/// the sample it is still holding.
#[derive(Debug, Clone, Copy)]
enum State<T> {
    /// No input consumed yet.
    Empty,
    /// `entrance` has been emitted; the corridor rooted at it does not
    /// exist yet because no later sample has been seen.
    Seeded { entrance: Point<T> },
    /// A live corridor. `bounds` carries the running maximum upper slope
    /// and running minimum lower slope measured from `entrance`; `current`
    /// is the most recently consumed sample, not yet emitted.
    Tracking {
        entrance: Point<T>,
        bounds: SlopeBounds<T>,
        current: Point<T>,
    },
    /// Zero tolerance: every sample is forwarded verbatim, no corridor
    /// arithmetic runs at all.
    Bypass,
    /// The source is exhausted or a fatal error went out. All further
    /// pulls return `None`.
    Drained,
}

//==================================================================================
// 2. The Stream Compressor
//==================================================================================

/// Lazy swinging-door compression over any fallible sample source.
///
/// Yields `Ok` anchors in strictly increasing `x` order until the source is
/// exhausted. The first `Err`, whether produced by the corridor arithmetic
/// or forwarded from the source, is yielded once and permanently drains the
/// iterator.
pub struct StreamCompressor<T, I>
where
    T: Float,
    I: Iterator<Item = Result<Point<T>, SwingDoorError>>,
{
    source: I,
    deviation: T,
    max_interval: Option<NonZeroUsize>,
    /// Samples pulled since the last emission, compared against
    /// `max_interval` to force an anchor through a quiet stretch.
    samples_since_anchor: usize,
    /// Total samples pulled from the source, for compression accounting.
    samples_in: usize,
    state: State<T>,
}

impl<T, I> StreamCompressor<T, I>
where
    T: Float,
    I: Iterator<Item = Result<Point<T>, SwingDoorError>>,
{
    /// Builds a compressor over `source`, validating the configuration
    /// before any sample is consumed.
    ///
    /// # Errors
    /// Returns `SwingDoorError::InvalidDeviation` when the configured
    /// tolerance is negative or non-finite, or cannot be represented in the
    /// stream's float type.
    pub fn new(source: I, config: &CompressorConfig) -> Result<Self, SwingDoorError> {
        config.validate()?;
        let deviation = T::from(config.deviation)
            .filter(|d| d.is_finite())
            .ok_or(SwingDoorError::InvalidDeviation(config.deviation))?;

        let state = if config.deviation == 0.0 {
            State::Bypass
        } else {
            State::Empty
        };

        log::debug!(
            "stream compressor ready: deviation={}, max_interval={:?}",
            config.deviation,
            config.max_interval
        );

        Ok(Self {
            source,
            deviation,
            max_interval: config.max_interval,
            samples_since_anchor: 0,
            samples_in: 0,
            state,
        })
    }

    /// Total number of input samples pulled from the source so far.
    pub fn samples_consumed(&self) -> usize {
        self.samples_in
    }

    /// Pulls one sample from the source, keeping the consumption counters
    /// honest. A source error is returned as-is for the caller to fail on.
    fn pull(&mut self) -> Result<Option<Point<T>>, SwingDoorError> {
        match self.source.next() {
            Some(Ok(point)) => {
                self.samples_in += 1;
                self.samples_since_anchor += 1;
                Ok(Some(point))
            }
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }

    /// Records an emission: resets the anchor-gap counter and moves the
    /// machine to `next_state`.
    fn emit(&mut self, anchor: Point<T>, next_state: State<T>) -> Point<T> {
        self.samples_since_anchor = 0;
        self.state = next_state;
        anchor
    }

    /// Drains the machine and hands the fatal error back for yielding.
    fn fail(&mut self, err: SwingDoorError) -> Result<Point<T>, SwingDoorError> {
        self.state = State::Drained;
        Err(err)
    }

    /// True when enough samples went by without an emission that an anchor
    /// must be forced.
    fn gap_exceeded(&self) -> bool {
        self.max_interval
            .map_or(false, |limit| self.samples_since_anchor >= limit.get())
    }
}

impl<T, I> Iterator for StreamCompressor<T, I>
where
    T: Float,
    I: Iterator<Item = Result<Point<T>, SwingDoorError>>,
{
    type Item = Result<Point<T>, SwingDoorError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Drained => return None,

                State::Bypass => {
                    return match self.pull() {
                        Ok(Some(point)) => Some(Ok(point)),
                        Ok(None) => {
                            self.state = State::Drained;
                            None
                        }
                        Err(err) => Some(self.fail(err)),
                    };
                }

                State::Empty => {
                    let entrance = match self.pull() {
                        Ok(Some(point)) => point,
                        Ok(None) => {
                            self.state = State::Drained;
                            return None;
                        }
                        Err(err) => return Some(self.fail(err)),
                    };
                    log::trace!(
                        "entrance anchor ({}, {})",
                        display_value(entrance.x),
                        display_value(entrance.y)
                    );
                    return Some(Ok(self.emit(entrance, State::Seeded { entrance })));
                }

                State::Seeded { entrance } => {
                    let second = match self.pull() {
                        Ok(Some(point)) => point,
                        Ok(None) => {
                            // The entrance already went out; a stream that
                            // dries up before the corridor exists has
                            // nothing left to close.
                            self.state = State::Drained;
                            return None;
                        }
                        Err(err) => return Some(self.fail(err)),
                    };
                    let bounds =
                        match slope_bounds(&Stretch::new(second, entrance), self.deviation) {
                            Ok(bounds) => bounds,
                            Err(err) => return Some(self.fail(err)),
                        };
                    if self.gap_exceeded() {
                        log_metric!("event" = "forced_anchor", "x" = display_value(second.x));
                        return Some(Ok(self.emit(second, State::Seeded { entrance: second })));
                    }
                    self.state = State::Tracking {
                        entrance,
                        bounds,
                        current: second,
                    };
                }

                State::Tracking {
                    entrance,
                    mut bounds,
                    current,
                } => {
                    let past = current;
                    let current = match self.pull() {
                        Ok(Some(point)) => point,
                        Ok(None) => {
                            // The last sample read survives verbatim.
                            log::trace!(
                                "closing anchor ({}, {})",
                                display_value(past.x),
                                display_value(past.y)
                            );
                            return Some(Ok(self.emit(past, State::Drained)));
                        }
                        Err(err) => return Some(self.fail(err)),
                    };

                    let candidate =
                        match slope_bounds(&Stretch::new(current, entrance), self.deviation) {
                            Ok(candidate) => candidate,
                            Err(err) => return Some(self.fail(err)),
                        };

                    let mut breach = None;
                    if candidate.upper > bounds.upper {
                        bounds.upper = candidate.upper;
                        if !bounds.is_open() {
                            breach = Some(BreachSide::Upper);
                        }
                    } else if candidate.lower < bounds.lower {
                        bounds.lower = candidate.lower;
                        if !bounds.is_open() {
                            breach = Some(BreachSide::Lower);
                        }
                    }

                    if let Some(side) = breach {
                        let (anchor, fresh) =
                            match resolve_breach(past, current, self.deviation, side) {
                                Ok(resolved) => resolved,
                                Err(err) => return Some(self.fail(err)),
                            };
                        log::debug!(
                            "corridor breach ({}) resolved at ({}, {})",
                            side.as_str(),
                            display_value(anchor.x),
                            display_value(anchor.y)
                        );
                        log_metric!(
                            "event" = "breach",
                            "side" = side.as_str(),
                            "anchor_x" = display_value(anchor.x)
                        );
                        return Some(Ok(self.emit(
                            anchor,
                            State::Tracking {
                                entrance: anchor,
                                bounds: fresh,
                                current,
                            },
                        )));
                    }

                    if self.gap_exceeded() {
                        log_metric!("event" = "forced_anchor", "x" = display_value(current.x));
                        return Some(Ok(self.emit(current, State::Seeded { entrance: current })));
                    }
                    self.state = State::Tracking {
                        entrance,
                        bounds,
                        current,
                    };
                }
            }
        }
    }
}
