//! LaTeX text for the formula panels next to each widget.
//!
//! ## Purpose
//!
//! This module formats the current numeric state of a widget as LaTeX source
//! for a math typesetter. It is pure string formatting.
//!
//! ## Design notes
//!
//! * **Fixed point**: Coordinates use two decimals, dot products and weights
//!   three, exponentials four, matching the panel layout.
//! * **No delimiters**: Strings carry no `$$` wrappers; the renderer decides
//!   between display and inline math.
//!
//! ## Non-goals
//!
//! * HTML or markup of any kind.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use num_traits::{Float, FloatConst};

use crate::algorithms::attention::{AttentionScaling, Key};
use crate::math::covariance::CovarianceMatrix;
use crate::math::eigen::{EigenDecomposition, SpreadClass};
use crate::math::similarity::CosineSimilarity;
use crate::primitives::vector::Vector2;

#[inline]
fn fx<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Attention
// ============================================================================

/// General attention formula for the selected scaling.
pub fn attention_definition(scaling: AttentionScaling) -> &'static str {
    match scaling {
        AttentionScaling::None => {
            "\\text{Attention}(Q, K) = \\text{softmax}\\left(\\frac{Q \\cdot K^T}{\\sqrt{d_k}}\\right) \\approx \\text{softmax}(Q \\cdot K^T)"
        }
        AttentionScaling::SqrtDim => {
            "\\text{Attention}(Q, K) = \\text{softmax}\\left(\\frac{Q \\cdot K^T}{\\sqrt{d_k}}\\right)"
        }
    }
}

/// Dot products and attention weights of the current query.
pub fn attention_calculation<T: Float>(keys: &[Key<T>], scores: &[T], weights: &[T]) -> String {
    let dots: Vec<String> = keys
        .iter()
        .zip(scores)
        .map(|(k, &s)| format!("Q \\cdot K_{{\\text{{{}}}}} = {:.3}", k.label, fx(s)))
        .collect();
    let alphas: Vec<String> = keys
        .iter()
        .zip(weights)
        .map(|(k, &w)| format!("\\alpha_{{\\text{{{}}}}} = {:.3}", k.label, fx(w)))
        .collect();
    format!(
        "{} \\\\ \\text{{Attention: }} {}",
        dots.join(", \\quad "),
        alphas.join(", \\quad ")
    )
}

/// Expanded dot product for one key.
pub fn dot_product_expansion<T: Float>(query: Vector2<T>, key: &Key<T>) -> String {
    let v = key.vector;
    format!(
        "Q \\cdot K_{{\\text{{{}}}}} = ({:.2})({:.2}) + ({:.2})({:.2}) = {:.3}",
        key.label,
        fx(query.x),
        fx(v.x),
        fx(query.y),
        fx(v.y),
        fx(query.dot(v))
    )
}

// ============================================================================
// Cosine Similarity
// ============================================================================

/// Full cosine-similarity derivation for two vectors.
pub fn cosine_calculation<T: Float>(
    a: Vector2<T>,
    b: Vector2<T>,
    sim: &CosineSimilarity<T>,
) -> String {
    format!(
        "\\cos(\\theta) = \\frac{{({:.2})({:.2}) + ({:.2})({:.2})}}{{\\sqrt{{{:.2}^2 + {:.2}^2}} \\sqrt{{{:.2}^2 + {:.2}^2}}}} = \\frac{{{:.2}}}{{{:.2} \\times {:.2}}} = {:.2}",
        fx(a.x),
        fx(b.x),
        fx(a.y),
        fx(b.y),
        fx(a.x),
        fx(a.y),
        fx(b.x),
        fx(b.y),
        fx(sim.dot_product),
        fx(sim.magnitude_a),
        fx(sim.magnitude_b),
        fx(sim.cosine)
    )
}

// ============================================================================
// PCA
// ============================================================================

/// Characteristic equation `det(Σ - λI) = 0` with numbers filled in.
pub fn characteristic_equation<T: Float>(cov: &CovarianceMatrix<T>) -> String {
    format!(
        "({:.2} - \\lambda)({:.2} - \\lambda) - ({:.2})^2 = 0",
        fx(cov.var_x),
        fx(cov.var_y),
        fx(cov.cov_xy)
    )
}

/// Trace and determinant line.
pub fn trace_determinant<T: Float>(cov: &CovarianceMatrix<T>) -> String {
    format!(
        "\\text{{trace}}(\\Sigma) = {:.3}, \\quad \\det(\\Sigma) = {:.3}",
        fx(cov.trace()),
        fx(cov.determinant())
    )
}

/// Eigenvalues and eigenvectors, one line each.
pub fn eigen_pairs<T: Float + FloatConst>(eigen: &EigenDecomposition<T>) -> String {
    let [l1, l2] = eigen.eigenvalues;
    let [v1, v2] = eigen.eigenvectors;
    format!(
        "\\lambda_1 = {:.4}, \\quad \\lambda_2 = {:.4} \\\\ v_1 = ({:.3}, {:.3}), \\quad v_2 = ({:.3}, {:.3})",
        fx(l1),
        fx(l2),
        fx(v1.x),
        fx(v1.y),
        fx(v2.x),
        fx(v2.y)
    )
}

/// Plain-text reading of the trace and eigenvalue ratio.
pub fn spread_interpretation<T: Float + FloatConst>(eigen: &EigenDecomposition<T>) -> String {
    let ratio = fx(eigen.eigenvalue_ratio());
    let head = format!(
        "Total variance = {:.2}. Eigenvalue ratio {:.1}:1",
        fx(eigen.trace),
        ratio
    );
    let tail = match eigen.spread() {
        SpreadClass::Elongated => {
            "highly correlated data (elongated ellipse). PCA compression will lose little info."
        }
        SpreadClass::Moderate => "moderate correlation (somewhat elongated ellipse).",
        SpreadClass::Round => {
            "data spreads in multiple directions (rounder ellipse). Both PCs carry information."
        }
    };
    format!("{} → {}", head, tail)
}
