//! Dot-product attention over labelled 2D keys.
//!
//! ## Purpose
//!
//! This module scores a query vector against a set of labelled key vectors
//! and turns the scores into attention weights with the shared softmax.
//!
//! ## Design notes
//!
//! * **Scores**: The score of each key is `query · key`, optionally divided by
//!   `√d` for the scaled variant.
//! * **Weights**: Scores go through `math::softmax` so attention and the
//!   softmax widget share one stabilized implementation.
//!
//! ## Key concepts
//!
//! * **Unscaled by default**: The widget illustrates `softmax(Q·Kᵀ)`, so
//!   `AttentionScaling::None` is the default.
//!
//! ## Invariants
//!
//! * `scores.len() == weights.len() == keys.len()`.
//! * Weights sum to 1 for a non-empty key set.
//!
//! ## Non-goals
//!
//! * Value vectors and the weighted output sum.
//! * Multi-head attention.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use num_traits::Float;

use crate::math::softmax::{argmax, softmax};
use crate::primitives::vector::Vector2;

/// Dimension of every query and key vector.
pub const VECTOR_DIM: usize = 2;

// ============================================================================
// Scaling
// ============================================================================

/// How raw dot products are scaled before softmax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttentionScaling {
    /// Use `query · key` as is.
    #[default]
    None,

    /// Divide by `√d` as in scaled dot-product attention.
    SqrtDim,
}

impl AttentionScaling {
    /// Factor every dot product is multiplied by.
    pub fn factor<T: Float>(&self) -> T {
        match self {
            Self::None => T::one(),
            Self::SqrtDim => {
                let d = T::from(VECTOR_DIM).unwrap_or_else(T::one);
                T::one() / d.sqrt()
            }
        }
    }
}

// ============================================================================
// Keys
// ============================================================================

/// A key vector with its display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Key<T> {
    /// Token shown next to the arrow.
    pub label: String,
    /// Key vector in logical coordinates.
    pub vector: Vector2<T>,
}

impl<T: Float> Key<T> {
    /// Create a labelled key.
    pub fn new(label: impl Into<String>, vector: Vector2<T>) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }
}

// ============================================================================
// Weights
// ============================================================================

/// Scores and normalized weights of one query against all keys.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttentionWeights<T> {
    /// Scaled dot products, one per key.
    pub scores: Vec<T>,
    /// Softmax of `scores`, one per key.
    pub weights: Vec<T>,
}

impl<T: Float> AttentionWeights<T> {
    /// Index of the key receiving the most attention.
    pub fn strongest(&self) -> Option<usize> {
        argmax(&self.weights)
    }
}

/// Scaled dot products of `query` against every key.
pub fn attention_scores<T: Float>(
    query: Vector2<T>,
    keys: &[Key<T>],
    scaling: AttentionScaling,
) -> Vec<T> {
    let factor: T = scaling.factor();
    keys.iter().map(|k| query.dot(k.vector) * factor).collect()
}

/// Scores and weights of `query` against every key.
///
/// `temperature` must already be validated as positive and finite.
pub fn attend<T: Float>(
    query: Vector2<T>,
    keys: &[Key<T>],
    scaling: AttentionScaling,
    temperature: T,
) -> AttentionWeights<T> {
    let scores = attention_scores(query, keys, scaling);
    let weights = softmax(&scores, temperature);
    AttentionWeights { scores, weights }
}
