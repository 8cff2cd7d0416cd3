//! High-level API for the numeric models.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points for computing
//! softmax distributions, attention weights and PCA results without any
//! widget state. Each model is configured through a fluent builder.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; inputs
//!   are validated when the model is applied.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Softmax::new()`, `Attention::new()` or `Pca::new()`.
//! 2. Chain configuration methods (`.temperature()`, `.solver()`, etc.).
//! 3. Call `.build()` to validate and obtain the model.
//!
//! Setting the same parameter twice is reported as
//! `VizError::DuplicateParameter` at build time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::algorithms::attention::attend;
use crate::algorithms::pca::analyze;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::math::softmax::softmax;

// Publicly re-exported types
pub use crate::algorithms::attention::{AttentionScaling, AttentionWeights, Key};
pub use crate::algorithms::pca::{CovarianceSign, PcaResult};
pub use crate::algorithms::sampling::PointCloudShape;
pub use crate::engine::output::{
    AttentionSnapshot, CosineSnapshot, ExplorerShape, ExplorerSnapshot, PcaFormulas, PcaSnapshot,
    PcaStage, RevealState, SoftmaxEntry, SoftmaxSnapshot,
};
pub use crate::math::covariance::CovarianceMatrix;
pub use crate::math::eigen::{EigenDecomposition, EigenSolver, Ellipse, SpreadClass};
pub use crate::math::similarity::{AngleArc, CosineSimilarity, cosine_similarity};
pub use crate::primitives::errors::VizError;
pub use crate::primitives::logits::LabeledLogitSet;
pub use crate::primitives::vector::Vector2;
pub use crate::primitives::viewport::Viewport;
pub use crate::render::{Renderer, Widget};
pub use crate::widgets::attention::{AttentionWidget, AttentionWidgetConfig};
pub use crate::widgets::cosine::{CosineWidget, CosineWidgetConfig, Handle};
pub use crate::widgets::drag::Cursor;
pub use crate::widgets::explorer::{CovarianceExplorer, ExplorerConfig};
pub use crate::widgets::pca::{PcaWidget, PcaWidgetConfig, RevealToggle};
pub use crate::widgets::softmax::{
    BUILTIN_EXAMPLES, SoftmaxExample, SoftmaxWidget, SoftmaxWidgetConfig,
};

// ============================================================================
// Softmax
// ============================================================================

/// Fluent builder for a temperature-scaled softmax.
#[derive(Debug, Clone)]
pub struct SoftmaxBuilder<T> {
    /// Temperature (default: 1.0).
    pub temperature: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SoftmaxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SoftmaxBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            temperature: None,
            duplicate_param: None,
        }
    }

    /// Set the temperature.
    pub fn temperature(mut self, temperature: T) -> Self {
        if self.temperature.is_some() {
            self.duplicate_param = Some("temperature");
        }
        self.temperature = Some(temperature);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<SoftmaxModel<T>, VizError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let temperature = self.temperature.unwrap_or_else(T::one);
        Validator::validate_temperature(temperature)?;

        Ok(SoftmaxModel { temperature })
    }
}

/// Validated softmax with a fixed temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxModel<T> {
    temperature: T,
}

impl<T: Float> SoftmaxModel<T> {
    /// Configured temperature.
    #[inline]
    pub fn temperature(&self) -> T {
        self.temperature
    }

    /// Probabilities for `scores`, in input order.
    ///
    /// An empty input gives an empty output.
    pub fn apply(&self, scores: &[T]) -> Result<Vec<T>, VizError> {
        Validator::validate_scores(scores)?;
        Ok(softmax(scores, self.temperature))
    }
}

// ============================================================================
// Attention
// ============================================================================

/// Fluent builder for dot-product attention.
#[derive(Debug, Clone)]
pub struct AttentionBuilder<T> {
    /// Dot-product scaling (default: None).
    pub scaling: Option<AttentionScaling>,

    /// Softmax temperature (default: 1.0).
    pub temperature: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for AttentionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AttentionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            scaling: None,
            temperature: None,
            duplicate_param: None,
        }
    }

    /// Set the dot-product scaling.
    pub fn scaling(mut self, scaling: AttentionScaling) -> Self {
        if self.scaling.is_some() {
            self.duplicate_param = Some("scaling");
        }
        self.scaling = Some(scaling);
        self
    }

    /// Set the softmax temperature.
    pub fn temperature(mut self, temperature: T) -> Self {
        if self.temperature.is_some() {
            self.duplicate_param = Some("temperature");
        }
        self.temperature = Some(temperature);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<AttentionModel<T>, VizError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let temperature = self.temperature.unwrap_or_else(T::one);
        Validator::validate_temperature(temperature)?;

        Ok(AttentionModel {
            scaling: self.scaling.unwrap_or_default(),
            temperature,
        })
    }
}

/// Validated attention configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttentionModel<T> {
    scaling: AttentionScaling,
    temperature: T,
}

impl<T: Float> AttentionModel<T> {
    /// Configured scaling.
    #[inline]
    pub fn scaling(&self) -> AttentionScaling {
        self.scaling
    }

    /// Configured temperature.
    #[inline]
    pub fn temperature(&self) -> T {
        self.temperature
    }

    /// Scores and weights of `query` against `keys`.
    pub fn attend(
        &self,
        query: Vector2<T>,
        keys: &[Key<T>],
    ) -> Result<AttentionWeights<T>, VizError> {
        if keys.is_empty() {
            return Err(VizError::EmptyInput);
        }
        Validator::validate_point(query, "query")?;
        for key in keys {
            Validator::validate_point(key.vector, "key")?;
        }
        Ok(attend(query, keys, self.scaling, self.temperature))
    }
}

// ============================================================================
// PCA
// ============================================================================

/// Fluent builder for 2-D principal component analysis.
#[derive(Debug, Clone)]
pub struct PcaBuilder {
    /// Eigen solver (default: ClosedForm).
    pub solver: Option<EigenSolver>,

    /// Minimum number of points (default: 2).
    pub min_points: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for PcaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PcaBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            solver: None,
            min_points: None,
            duplicate_param: None,
        }
    }

    /// Set the eigen solver.
    pub fn solver(mut self, solver: EigenSolver) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Set the minimum number of points required by `fit`.
    pub fn min_points(mut self, min_points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(min_points);
        self
    }

    /// Validate the configuration and build the model.
    ///
    /// `min_points` below 2 is raised to 2, the smallest cloud with a sample
    /// covariance.
    pub fn build(self) -> Result<PcaModel, VizError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PcaModel {
            solver: self.solver.unwrap_or_default(),
            min_points: self.min_points.unwrap_or(2).max(2),
        })
    }
}

/// Validated PCA configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcaModel {
    solver: EigenSolver,
    min_points: usize,
}

impl PcaModel {
    /// Configured solver.
    #[inline]
    pub fn solver(&self) -> EigenSolver {
        self.solver
    }

    /// Configured minimum point count.
    #[inline]
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Run the PCA pipeline on `points`.
    pub fn fit<T: FloatLinalg + FloatConst>(
        &self,
        points: &[Vector2<T>],
    ) -> Result<PcaResult<T>, VizError> {
        Validator::validate_min_points(points.len(), self.min_points)?;
        for &p in points {
            Validator::validate_point(p, "point")?;
        }
        Ok(analyze(points, self.solver))
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Entry point for softmax: `Softmax::new().temperature(0.5).build()`.
pub type Softmax<T> = SoftmaxBuilder<T>;

/// Entry point for attention: `Attention::new().scaling(..).build()`.
pub type Attention<T> = AttentionBuilder<T>;

/// Entry point for PCA: `Pca::new().solver(..).build()`.
pub type Pca = PcaBuilder;
