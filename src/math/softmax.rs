//! Numerically stable softmax with temperature.
//!
//! ## Purpose
//!
//! This module converts a sequence of scores (logits or query·key dot
//! products) into a probability distribution.
//!
//! ## Design notes
//!
//! * **Stabilization**: The maximum raw score is subtracted before dividing
//!   by the temperature (log-sum-exp trick). Every shifted score is at most
//!   zero, so the largest term is exactly `exp(0) = 1` and huge scores or
//!   tiny temperatures can only underflow the other terms to zero.
//! * **Memory**: `softmax_into` writes into a caller-owned buffer so repeated
//!   redraws can reuse one allocation.
//!
//! ## Key concepts
//!
//! * **Temperature**: Divides every score before exponentiation. `T → 0⁺`
//!   sharpens toward one-hot at the argmax, `T → ∞` flattens toward uniform.
//! * **Shift invariance**: Adding a constant to every score leaves the output
//!   unchanged.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Every output is in `[0, 1]` and the outputs sum to 1.
//!
//! ## Non-goals
//!
//! * This module does not validate the temperature or the scores; callers go
//!   through `Validator::validate_temperature` and `Validator::validate_scores`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// Softmax
// ============================================================================

/// Compute `softmax(scores / temperature)` into `out`.
///
/// `out` is cleared first. An empty `scores` slice leaves `out` empty.
/// `temperature` must be positive and finite.
#[inline]
pub fn softmax_into<T: Float>(scores: &[T], temperature: T, out: &mut Vec<T>) {
    debug_assert!(temperature > T::zero(), "temperature must be positive");

    out.clear();
    if scores.is_empty() {
        return;
    }

    let max = scores
        .iter()
        .fold(T::neg_infinity(), |acc, &s| acc.max(s));

    let mut sum = T::zero();
    for &s in scores {
        let e = ((s - max) / temperature).exp();
        sum = sum + e;
        out.push(e);
    }

    for p in out.iter_mut() {
        *p = *p / sum;
    }
}

/// Compute `softmax(scores / temperature)`.
///
/// # Formula
///
/// ```text
/// p_i = exp((s_i - m)/T) / Σ_j exp((s_j - m)/T),   m = max_j s_j
/// ```
#[inline]
pub fn softmax<T: Float>(scores: &[T], temperature: T) -> Vec<T> {
    let mut out = Vec::with_capacity(scores.len());
    softmax_into(scores, temperature, &mut out);
    out
}

/// Index of the first maximum, or `None` for an empty slice.
pub fn argmax<T: Float>(values: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
