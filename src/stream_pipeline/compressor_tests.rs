// In: src/stream_pipeline/compressor_tests.rs

use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CompressorConfig;
use crate::error::SwingDoorError;
use crate::stream_pipeline::StreamCompressor;
use crate::types::Point;

// Test Helpers

/// Drives a compressor over an in-memory fixture and returns everything it
/// emitted, plus the error that stopped it, if any. Also checks that the
/// iterator stays drained after it terminates.
fn run_compressor(
    samples: &[(f64, f64)],
    config: &CompressorConfig,
) -> (Vec<(f64, f64)>, Option<SwingDoorError>) {
    let source = samples.iter().map(|&(x, y)| Ok(Point::new(x, y)));
    let mut compressor =
        StreamCompressor::new(source, config).expect("test config must be valid");

    let mut emitted = Vec::new();
    let mut failure = None;
    for item in &mut compressor {
        match item {
            Ok(point) => emitted.push((point.x, point.y)),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }
    assert!(
        compressor.next().is_none(),
        "a terminated compressor must stay drained"
    );
    (emitted, failure)
}

fn deviation_of(deviation: f64) -> CompressorConfig {
    CompressorConfig::with_deviation(deviation)
}

/// Reference stream: two rising trends around a dip, ending in a jump that
/// breaks the corridor upward.
const RISING_TAIL: &[(f64, f64)] = &[
    (1.0, 6.0),
    (2.0, 6.5),
    (3.0, 5.5),
    (4.0, 6.5),
    (5.0, 8.0),
    (6.0, 7.5),
    (7.0, 8.0),
    (8.0, 9.5),
];

// Corridor Behavior

#[test]
fn test_upper_breach_synthesizes_one_interior_anchor() {
    let (emitted, failure) = run_compressor(RISING_TAIL, &deviation_of(1.0));
    assert!(failure.is_none());
    assert_eq!(emitted, vec![(1.0, 6.0), (7.5, 8.25), (8.0, 9.5)]);
}

#[test]
fn test_lower_breach_synthesizes_one_interior_anchor() {
    let mut reversal = RISING_TAIL.to_vec();
    reversal[7] = (8.0, 6.0);
    let (emitted, failure) = run_compressor(&reversal, &deviation_of(1.0));
    assert!(failure.is_none());
    assert_eq!(emitted, vec![(1.0, 6.0), (7.5, 7.5), (8.0, 6.0)]);
}

#[test]
fn test_interior_anchor_sits_between_its_brackets() {
    let (emitted, _) = run_compressor(RISING_TAIL, &deviation_of(1.0));
    // The breach happened between x = 7 and x = 8.
    assert!(7.0 < emitted[1].0 && emitted[1].0 < 8.0);
}

#[test]
fn test_straight_line_collapses_to_its_endpoints() {
    let line: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, i as f64)).collect();
    let (emitted, failure) = run_compressor(&line, &deviation_of(0.5));
    assert!(failure.is_none());
    assert_eq!(emitted, vec![(0.0, 0.0), (9.0, 9.0)]);
}

#[test]
fn test_output_never_outgrows_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut y = 0.0;
    let walk: Vec<(f64, f64)> = (0..200)
        .map(|i| {
            y += rng.random_range(-1.0..1.0);
            (i as f64, y)
        })
        .collect();

    let (emitted, failure) = run_compressor(&walk, &deviation_of(0.75));
    assert!(failure.is_none());
    assert!(emitted.len() <= walk.len());
    assert_eq!(emitted.first(), walk.first());
    assert_eq!(emitted.last(), walk.last());
    for pair in emitted.windows(2) {
        assert!(pair[0].0 < pair[1].0, "anchors must advance in x");
    }
}

// Stream Shape Edges

#[test]
fn test_empty_input_produces_empty_output() {
    let (emitted, failure) = run_compressor(&[], &deviation_of(1.0));
    assert!(failure.is_none());
    assert!(emitted.is_empty());
}

#[test]
fn test_single_sample_survives_alone() {
    let (emitted, failure) = run_compressor(&[(1.0, 6.0)], &deviation_of(1.0));
    assert!(failure.is_none());
    assert_eq!(emitted, vec![(1.0, 6.0)]);
}

#[test]
fn test_two_samples_survive_verbatim() {
    let (emitted, failure) = run_compressor(&[(1.0, 6.0), (2.0, 9.0)], &deviation_of(1.0));
    assert!(failure.is_none());
    assert_eq!(emitted, vec![(1.0, 6.0), (2.0, 9.0)]);
}

#[test]
fn test_zero_deviation_is_an_exact_passthrough() {
    let noisy = [(1.0, 6.0), (2.0, 6.5), (3.0, 5.5), (4.0, 6.5), (5.0, 8.0)];
    let (emitted, failure) = run_compressor(&noisy, &deviation_of(0.0));
    assert!(failure.is_none());
    assert_eq!(emitted, noisy.to_vec());
}

#[test]
fn test_zero_deviation_forwards_even_degenerate_abscissae() {
    // Bypass mode runs no slope arithmetic, so duplicated abscissae are
    // not its problem.
    let degenerate = [(1.0, 6.0), (1.0, 6.5)];
    let (emitted, failure) = run_compressor(&degenerate, &deviation_of(0.0));
    assert!(failure.is_none());
    assert_eq!(emitted, degenerate.to_vec());
}

// Failure Paths

#[test]
fn test_duplicate_abscissa_after_the_entrance_is_fatal() {
    let (emitted, failure) = run_compressor(&[(1.0, 6.0), (1.0, 6.5)], &deviation_of(1.0));
    assert_eq!(emitted, vec![(1.0, 6.0)]);
    assert!(matches!(
        failure,
        Some(SwingDoorError::DegenerateStretch(x)) if x == 1.0
    ));
}

#[test]
fn test_duplicate_abscissa_inside_a_breach_is_fatal() {
    // The pair (1, 0) / (1, 10) passes the entrance comparison but leaves
    // the breach resolver nowhere to put the midpoint anchor.
    let (emitted, failure) =
        run_compressor(&[(0.0, 0.0), (1.0, 0.0), (1.0, 10.0)], &deviation_of(1.0));
    assert_eq!(emitted, vec![(0.0, 0.0)]);
    assert!(matches!(
        failure,
        Some(SwingDoorError::DegenerateStretch(_))
    ));
}

#[test]
fn test_source_error_is_forwarded_once_and_drains() {
    let source = vec![
        Ok(Point::new(0.0, 0.0)),
        Ok(Point::new(1.0, 1.0)),
        Err(SwingDoorError::FfiError("source failed".to_string())),
    ];
    let mut compressor = StreamCompressor::new(source.into_iter(), &deviation_of(1.0))
        .expect("test config must be valid");

    assert!(matches!(compressor.next(), Some(Ok(point)) if point == Point::new(0.0, 0.0)));
    assert!(matches!(
        compressor.next(),
        Some(Err(SwingDoorError::FfiError(_)))
    ));
    assert!(compressor.next().is_none());
}

#[test]
fn test_invalid_deviation_is_rejected_before_consuming_input() {
    let source = std::iter::once(Ok(Point::new(0.0, 0.0)));
    let result = StreamCompressor::new(source, &deviation_of(-0.5));
    assert!(matches!(
        result,
        Err(SwingDoorError::InvalidDeviation(d)) if d == -0.5
    ));
}

#[test]
fn test_deviation_beyond_the_stream_float_is_rejected() {
    // 1e300 is a perfectly good f64 tolerance but overflows f32, so an f32
    // stream cannot run under it.
    let source = std::iter::once(Ok(Point::new(0.0f32, 0.0)));
    let result = StreamCompressor::new(source, &deviation_of(1e300));
    assert!(matches!(
        result,
        Err(SwingDoorError::InvalidDeviation(_))
    ));
}

// Laziness

#[test]
fn test_driver_pulls_only_what_each_anchor_needs() {
    let source = RISING_TAIL.iter().map(|&(x, y)| Ok(Point::new(x, y)));
    let mut compressor = StreamCompressor::new(source, &deviation_of(1.0))
        .expect("test config must be valid");

    assert_eq!(compressor.samples_consumed(), 0);
    // The entrance costs exactly one pull.
    assert!(compressor.next().is_some());
    assert_eq!(compressor.samples_consumed(), 1);
    // The interior anchor swallows the rest of the corridor.
    assert!(compressor.next().is_some());
    assert_eq!(compressor.samples_consumed(), 8);
}

// Forced Anchors (max_interval)

#[test]
fn test_forced_anchors_bound_the_gap_on_a_flat_stream() {
    let flat: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, 5.0)).collect();
    let config = CompressorConfig {
        deviation: 1.0,
        max_interval: NonZeroUsize::new(4),
    };
    let (emitted, failure) = run_compressor(&flat, &config);
    assert!(failure.is_none());
    // Raw samples, not synthesized anchors: y stays exactly 5.
    assert_eq!(
        emitted,
        vec![(0.0, 5.0), (4.0, 5.0), (8.0, 5.0), (12.0, 5.0), (16.0, 5.0), (19.0, 5.0)]
    );
}

#[test]
fn test_breach_takes_priority_over_a_forced_anchor() {
    let config = CompressorConfig {
        deviation: 1.0,
        max_interval: NonZeroUsize::new(7),
    };
    let (emitted, failure) = run_compressor(RISING_TAIL, &config);
    assert!(failure.is_none());
    // The breaching sample arrives exactly at the interval bound; the
    // synthesized anchor wins and the output matches the unbounded run.
    assert_eq!(emitted, vec![(1.0, 6.0), (7.5, 8.25), (8.0, 9.5)]);
}

#[test]
fn test_interval_of_one_passes_every_sample_through() {
    let rising: Vec<(f64, f64)> = (0..5).map(|i| (i as f64, i as f64)).collect();
    let config = CompressorConfig {
        deviation: 1.0,
        max_interval: NonZeroUsize::new(1),
    };
    let (emitted, failure) = run_compressor(&rising, &config);
    assert!(failure.is_none());
    assert_eq!(emitted, rising);
}

#[test]
fn test_forced_anchor_at_the_last_sample_is_not_duplicated() {
    let flat: Vec<(f64, f64)> = (0..9).map(|i| (i as f64, 5.0)).collect();
    let config = CompressorConfig {
        deviation: 1.0,
        max_interval: NonZeroUsize::new(4),
    };
    let (emitted, failure) = run_compressor(&flat, &config);
    assert!(failure.is_none());
    // x = 8 is both the forced anchor and the final sample; it must appear
    // exactly once.
    assert_eq!(emitted, vec![(0.0, 5.0), (4.0, 5.0), (8.0, 5.0)]);
}

#[test]
fn test_bypass_ignores_the_interval_bound() {
    let flat: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 5.0)).collect();
    let config = CompressorConfig {
        deviation: 0.0,
        max_interval: NonZeroUsize::new(2),
    };
    let (emitted, failure) = run_compressor(&flat, &config);
    assert!(failure.is_none());
    assert_eq!(emitted, flat);
}
