#![cfg(feature = "dev")]
//! Tests for the temperature-scaled softmax.
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Known distributions at several temperatures
//! 2. **Properties** - Normalization, shift invariance, limits
//! 3. **Edge Cases** - Empty input, large scores, ties

use approx::{assert_abs_diff_eq, assert_relative_eq};

use attnviz::internals::math::softmax::{argmax, softmax, softmax_into};

const LOGITS: [f64; 5] = [0.2, 2.1, 1.2, 0.05, 0.6];

// ============================================================================
// Reference Values
// ============================================================================

/// Test the book/story example at temperature 1.
#[test]
fn test_softmax_reference_t1() {
    let p = softmax(&LOGITS, 1.0);
    let expected = [0.078390, 0.524108, 0.213086, 0.067471, 0.116944];
    for (got, want) in p.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
}

/// Test sharpening at temperature 0.5.
#[test]
fn test_softmax_reference_t05() {
    let p = softmax(&LOGITS, 0.5);
    let expected = [0.017839, 0.797429, 0.131814, 0.013216, 0.039702];
    for (got, want) in p.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
}

/// Test flattening at temperature 2.
#[test]
fn test_softmax_reference_t2() {
    let p = softmax(&LOGITS, 2.0);
    let expected = [0.135436, 0.350197, 0.223296, 0.125650, 0.165422];
    for (got, want) in p.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
}

/// Test that a low temperature is nearly one-hot at the largest logit.
#[test]
fn test_softmax_low_temperature_near_one_hot() {
    let p = softmax(&LOGITS, 0.1);
    assert!(p[1] > 0.9998);
    assert_abs_diff_eq!(p[2], 0.000123, epsilon = 1e-6);
    assert!(p[0] < 1e-8);
    assert_eq!(argmax(&p), Some(1));
}

// ============================================================================
// Properties
// ============================================================================

/// Test normalization and range for a sweep of temperatures.
#[test]
fn test_softmax_sums_to_one() {
    for &t in &[0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 100.0] {
        let p = softmax(&LOGITS, t);
        assert_eq!(p.len(), LOGITS.len());
        assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        assert!(p.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }
}

/// Test that adding a constant to every score changes nothing.
#[test]
fn test_softmax_shift_invariant() {
    let shifted: Vec<f64> = LOGITS.iter().map(|x| x + 42.0).collect();
    let a = softmax(&LOGITS, 0.7);
    let b = softmax(&shifted, 0.7);
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!(*x, *y, max_relative = 1e-12);
    }
}

/// Test that a very high temperature approaches the uniform distribution.
#[test]
fn test_softmax_high_temperature_uniform() {
    let p = softmax(&LOGITS, 1e6);
    for x in p {
        assert_abs_diff_eq!(x, 0.2, epsilon = 1e-6);
    }
}

/// Test that the order of probabilities follows the order of logits.
#[test]
fn test_softmax_preserves_order() {
    let p = softmax(&LOGITS, 1.3);
    assert!(p[1] > p[2] && p[2] > p[4] && p[4] > p[0] && p[0] > p[3]);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test that an empty slice gives an empty result.
#[test]
fn test_softmax_empty() {
    assert!(softmax::<f64>(&[], 1.0).is_empty());
    assert_eq!(argmax::<f64>(&[]), None);
}

/// Test numerical stability for large scores.
#[test]
fn test_softmax_large_scores_stable() {
    let p = softmax(&[1000.0f64, 1001.0, 999.0], 1.0);
    assert!(p.iter().all(|x| x.is_finite()));
    assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_eq!(argmax(&p), Some(1));
}

/// Test that extreme scores and temperatures never produce NaN.
#[test]
fn test_softmax_extreme_scale_stays_finite() {
    let p = softmax(&[1e308f64, 0.0], 0.5);
    assert_eq!(p, vec![1.0, 0.0]);

    let p = softmax(&[1.0f64, 0.0], 1e-320);
    assert_eq!(p, vec![1.0, 0.0]);

    let p = softmax(&[-1e308f64, 1e308, 0.0], 1e-300);
    assert_eq!(p, vec![0.0, 1.0, 0.0]);
    assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

/// Test that equal scores share probability and argmax picks the first.
#[test]
fn test_softmax_ties() {
    let p = softmax(&[0.5f64, 0.5], 1.0);
    assert_relative_eq!(p[0], 0.5);
    assert_relative_eq!(p[1], 0.5);
    assert_eq!(argmax(&[1.0f64, 3.0, 3.0]), Some(1));
}

/// Test that the buffer variant clears and reuses its output.
#[test]
fn test_softmax_into_reuses_buffer() {
    let mut out = vec![9.0f64; 8];
    softmax_into(&[0.0, 0.0, 0.0, 0.0], 1.0, &mut out);
    assert_eq!(out.len(), 4);
    for x in &out {
        assert_relative_eq!(*x, 0.25);
    }

    softmax_into(&[], 1.0, &mut out);
    assert!(out.is_empty());
}

/// Test single-precision support.
#[test]
fn test_softmax_f32() {
    let p = softmax(&[1.0f32, 2.0, 3.0], 1.0);
    assert_abs_diff_eq!(p.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
    assert_eq!(argmax(&p), Some(2));
}
