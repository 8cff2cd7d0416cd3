//! Snapshot types handed from widgets to renderers.
//!
//! ## Purpose
//!
//! This module defines the immutable values a widget produces after every
//! input event: everything a renderer needs to draw the widget and fill in
//! its text panels.
//!
//! ## Design notes
//!
//! * **Owned values**: Snapshots own their data so a renderer can keep one
//!   while the widget keeps changing.
//! * **Display**: Every snapshot has a plain-text `Display` summary for logs
//!   and terminal output.
//! * **Serialization**: With the `serde` feature every snapshot derives
//!   `Serialize` for consumption by a JavaScript renderer.
//!
//! ## Invariants
//!
//! * Parallel vectors inside a snapshot (labels/weights, keys/scores) have
//!   equal length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use core::fmt::{Display, Formatter, Result};

use num_traits::Float;

use crate::algorithms::attention::Key;
use crate::algorithms::pca::{CovarianceSign, PcaResult};
use crate::math::covariance::CovarianceMatrix;
use crate::math::eigen::{EigenDecomposition, Ellipse};
use crate::math::similarity::{AngleArc, CosineSimilarity};
use crate::primitives::vector::Vector2;

#[inline]
fn fx<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Softmax
// ============================================================================

/// One row of the softmax table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SoftmaxEntry<T> {
    /// Candidate word.
    pub label: String,
    /// Raw logit.
    pub logit: T,
    /// Probability after softmax.
    pub probability: T,
}

/// State of the softmax widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SoftmaxSnapshot<T> {
    /// Sentence prefix being completed.
    pub sentence: String,
    /// Current temperature.
    pub temperature: T,
    /// Rows in display order.
    pub entries: Vec<SoftmaxEntry<T>>,
    /// Row with the highest probability.
    pub top: Option<usize>,
}

impl<T: Float> SoftmaxSnapshot<T> {
    /// Probabilities in display order.
    pub fn probabilities(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.probability).collect()
    }
}

impl<T: Float> Display for SoftmaxSnapshot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "\"{}\" (T = {:.2})", self.sentence, fx(self.temperature))?;
        for (i, e) in self.entries.iter().enumerate() {
            let marker = if Some(i) == self.top { "*" } else { " " };
            writeln!(
                f,
                "{} {:<12} {:>6.2} {:>6.1}%",
                marker,
                e.label,
                fx(e.logit),
                fx(e.probability) * 100.0
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Attention
// ============================================================================

/// State of the attention widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttentionSnapshot<T> {
    /// Current query vector.
    pub query: Vector2<T>,
    /// Fixed keys.
    pub keys: Vec<Key<T>>,
    /// Dot products, one per key.
    pub scores: Vec<T>,
    /// Attention weights, one per key.
    pub weights: Vec<T>,
    /// True while the query is being dragged.
    pub dragging: bool,
    /// LaTeX for the calculation panel.
    pub formula: String,
}

impl<T: Float> Display for AttentionSnapshot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Q = ({:.2}, {:.2})", fx(self.query.x), fx(self.query.y))?;
        for ((k, &s), &w) in self.keys.iter().zip(&self.scores).zip(&self.weights) {
            writeln!(
                f,
                "  {}: Q·K = {:.3}, α = {:.3}",
                k.label,
                fx(s),
                fx(w)
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Cosine Similarity
// ============================================================================

/// State of the cosine-similarity widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CosineSnapshot<T> {
    /// Vector A.
    pub a: Vector2<T>,
    /// Vector B.
    pub b: Vector2<T>,
    /// Derived quantities.
    pub similarity: CosineSimilarity<T>,
    /// Arc between the vectors.
    pub arc: AngleArc<T>,
    /// LaTeX for the calculation panel.
    pub formula: String,
}

impl<T: Float> Display for CosineSnapshot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "cos θ = {:.2}, θ = {:.1}°, A·B = {:.2}",
            fx(self.similarity.cosine),
            fx(self.similarity.angle_deg),
            fx(self.similarity.dot_product)
        )
    }
}

// ============================================================================
// PCA
// ============================================================================

/// Lifecycle of the PCA walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PcaStage {
    /// No points.
    #[default]
    Idle,
    /// Points are being added.
    Collecting,
    /// Mean, covariance and eigen-pairs are available.
    Analyzed,
}

/// Which overlays of the walkthrough are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RevealState {
    /// Step 1: centered cloud.
    pub centering: bool,
    /// Step 2: variance bars.
    pub variance: bool,
    /// Step 3: PC1 arrow.
    pub pc1: bool,
    /// Step 3: PC2 arrow.
    pub pc2: bool,
    /// Step 3: confidence ellipse.
    pub ellipse: bool,
    /// Step 4: projections onto PC1.
    pub projection: bool,
}

/// Formula panel text for an analysed cloud.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PcaFormulas {
    /// `det(Σ - λI) = 0` with numbers.
    pub characteristic: String,
    /// Trace and determinant.
    pub trace_determinant: String,
    /// Eigenvalues and eigenvectors.
    pub eigen_pairs: String,
    /// Reading of the eigenvalue ratio.
    pub interpretation: String,
}

/// State of the PCA widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PcaSnapshot<T> {
    /// Lifecycle stage.
    pub stage: PcaStage,
    /// Walkthrough step being shown (1..=4).
    pub step: Option<usize>,
    /// Points in insertion order.
    pub points: Vec<Vector2<T>>,
    /// Logical `[min, max]` on both axes.
    pub bounds: [T; 2],
    /// True when enough points exist to start the analysis.
    pub can_analyze: bool,
    /// Pipeline output, present once analysed.
    pub analysis: Option<PcaResult<T>>,
    /// Visible overlays.
    pub reveal: RevealState,
    /// Covariance sign label, present once analysed.
    pub covariance_sign: Option<CovarianceSign>,
    /// Two-sigma ellipse, present once analysed.
    pub ellipse: Option<Ellipse<T>>,
    /// PC arrows from the mean, scaled by `1.8·√λ`.
    pub pc_arrows: Option<[Vector2<T>; 2]>,
    /// Formula panel text, present once analysed.
    pub formulas: Option<PcaFormulas>,
}

impl<T: Float + num_traits::FloatConst> Display for PcaSnapshot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "PCA: {:?}, {} points", self.stage, self.points.len())?;
        if let Some(a) = &self.analysis {
            let [p1, p2] = a.variance_explained();
            writeln!(f, "  mean = ({:.3}, {:.3})", fx(a.mean.x), fx(a.mean.y))?;
            writeln!(
                f,
                "  Σ = [[{:.2}, {:.2}], [{:.2}, {:.2}]]",
                fx(a.covariance.var_x),
                fx(a.covariance.cov_xy),
                fx(a.covariance.cov_xy),
                fx(a.covariance.var_y)
            )?;
            writeln!(
                f,
                "  λ1 = {:.4} ({:.1}%), λ2 = {:.4} ({:.1}%)",
                fx(a.eigen.eigenvalues[0]),
                fx(p1),
                fx(a.eigen.eigenvalues[1]),
                fx(p2)
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Covariance Explorer
// ============================================================================

/// Qualitative description of the explorer's distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExplorerShape<T> {
    /// Near-equal variances, no correlation.
    Circular,
    /// No correlation, `var_x > var_y`.
    AxisAlignedWide,
    /// No correlation, `var_y >= var_x`.
    AxisAlignedTall,
    /// Positive correlation `r`.
    PositivelyTilted(T),
    /// Negative correlation `r`.
    NegativelyTilted(T),
}

impl<T: Float> ExplorerShape<T> {
    /// Classify a (clamped) covariance matrix.
    pub fn classify(cov: &CovarianceMatrix<T>) -> Self {
        let r = cov.correlation().unwrap_or_else(T::zero);
        let tenth = T::from(0.1).unwrap_or_else(T::zero);
        let fifth = T::from(0.2).unwrap_or_else(T::zero);
        if r.abs() < tenth {
            if (cov.var_x - cov.var_y).abs() < fifth {
                Self::Circular
            } else if cov.var_x > cov.var_y {
                Self::AxisAlignedWide
            } else {
                Self::AxisAlignedTall
            }
        } else if r > T::zero() {
            Self::PositivelyTilted(r)
        } else {
            Self::NegativelyTilted(r)
        }
    }
}

impl<T: Float> Display for ExplorerShape<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Circular => write!(
                f,
                "Equal variances, no correlation → circular distribution"
            ),
            Self::AxisAlignedWide => write!(
                f,
                "No correlation, but wider horizontally → axis-aligned ellipse"
            ),
            Self::AxisAlignedTall => write!(
                f,
                "No correlation, but wider vertically → axis-aligned ellipse"
            ),
            Self::PositivelyTilted(r) => write!(
                f,
                "Positive correlation (r={:.2}) → tilted upward ↗",
                fx(*r)
            ),
            Self::NegativelyTilted(r) => write!(
                f,
                "Negative correlation (r={:.2}) → tilted downward ↘",
                fx(*r)
            ),
        }
    }
}

/// State of the covariance explorer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExplorerSnapshot<T> {
    /// Matrix after clamping the covariance.
    pub covariance: CovarianceMatrix<T>,
    /// Covariance as set on the slider.
    pub raw_covariance: T,
    /// True when the slider value lies outside the admissible range.
    pub clamped: bool,
    /// Admissible range bound `√(var_x var_y)`.
    pub max_covariance: T,
    /// Eigen-pairs of the clamped matrix.
    pub eigen: EigenDecomposition<T>,
    /// Standard-normal samples shaped by the Cholesky factor.
    pub samples: Vec<Vector2<T>>,
    /// Two-sigma ellipse at the origin.
    pub ellipse: Ellipse<T>,
    /// PC arrows from the origin, scaled by `1.5·√λ`.
    pub pc_arrows: [Vector2<T>; 2],
    /// Shape description.
    pub shape: ExplorerShape<T>,
    /// Percentage of variance along PC1.
    pub pc1_explained: T,
}

impl<T: Float> Display for ExplorerSnapshot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} | PC1 explains {:.0}%",
            self.shape,
            fx(self.pc1_explained)
        )
    }
}
