//! Step-by-step PCA walkthrough widget.
//!
//! ## Purpose
//!
//! This module holds the state of the PCA walkthrough. The user builds a
//! point cloud by clicking the canvas or loading an example, starts the
//! analysis, and then steps through four stages (centering, covariance,
//! principal components, projection), toggling each overlay on and off.
//!
//! ## Design notes
//!
//! * **Stages**: `Idle → Collecting → Analyzed`. Any edit of the cloud after
//!   analysis drops back to `Collecting` and hides every overlay.
//! * **Steps**: Opening a step hides that step's overlays so each reveal
//!   starts from a clean canvas.
//!
//! ## Invariants
//!
//! * Every stored point lies within `bounds` on both axes.
//! * `analysis.is_some()` exactly when the stage is `Analyzed`.
//! * `step.is_some()` only when the stage is `Analyzed`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::FloatConst;
use rand::Rng;

use crate::algorithms::pca::{PcaResult, analyze};
use crate::algorithms::sampling::PointCloudShape;
use crate::engine::formula::{
    characteristic_equation, eigen_pairs, spread_interpretation, trace_determinant,
};
use crate::engine::output::{PcaFormulas, PcaSnapshot, PcaStage, RevealState};
use crate::engine::validator::Validator;
use crate::math::eigen::EigenSolver;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;
use crate::primitives::viewport::Viewport;
use crate::render::Widget;

/// Overlay that can be toggled once the cloud is analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RevealToggle {
    /// Step 1: centered cloud.
    Centering,
    /// Step 2: variance bars.
    Variance,
    /// Step 3: PC1 arrow.
    Pc1,
    /// Step 3: PC2 arrow.
    Pc2,
    /// Step 3: confidence ellipse.
    Ellipse,
    /// Step 4: projections onto PC1.
    Projection,
}

/// Geometry and limits of the PCA widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcaWidgetConfig {
    /// Side of the square canvas in pixels.
    pub canvas_size: f64,
    /// Logical `[min, max]` on both axes.
    pub bounds: [f64; 2],
    /// Points needed before analysis.
    pub min_points: usize,
    /// Eigen solver.
    pub solver: EigenSolver,
    /// PC arrow length in units of `√λ`.
    pub arrow_scale: f64,
}

impl Default for PcaWidgetConfig {
    fn default() -> Self {
        Self {
            canvas_size: 320.0,
            bounds: [-4.0, 4.0],
            min_points: 3,
            solver: EigenSolver::ClosedForm,
            arrow_scale: 1.8,
        }
    }
}

/// State of the PCA walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct PcaWidget<T> {
    viewport: Viewport<T>,
    bounds: [T; 2],
    min_points: usize,
    solver: EigenSolver,
    arrow_scale: T,
    points: Vec<Vector2<T>>,
    stage: PcaStage,
    step: Option<usize>,
    analysis: Option<PcaResult<T>>,
    reveal: RevealState,
}

#[inline]
fn c<T: FloatLinalg>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

impl<T: FloatLinalg + FloatConst> Default for PcaWidget<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + FloatConst> PcaWidget<T> {
    /// Empty widget with the default canvas.
    pub fn new() -> Self {
        Self::build(PcaWidgetConfig::default())
    }

    /// Empty widget with custom geometry and limits.
    pub fn with_config(config: PcaWidgetConfig) -> Result<Self, VizError> {
        let [min, max] = config.bounds;
        Validator::validate_positive(c::<T>(config.canvas_size), "canvas_size")?;
        Validator::validate_positive(c::<T>(max - min), "bounds")?;
        Validator::validate_positive(c::<T>(config.arrow_scale), "arrow_scale")?;
        Ok(Self::build(config))
    }

    fn build(config: PcaWidgetConfig) -> Self {
        let [min, max] = config.bounds;
        Self {
            viewport: Viewport::ranged(c(config.canvas_size), c(min), c(max)),
            bounds: [c(min), c(max)],
            min_points: config.min_points,
            solver: config.solver,
            arrow_scale: c(config.arrow_scale),
            points: Vec::new(),
            stage: PcaStage::Idle,
            step: None,
            analysis: None,
            reveal: RevealState::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Lifecycle stage.
    #[inline]
    pub fn stage(&self) -> PcaStage {
        self.stage
    }

    /// Step being shown, once analysed.
    #[inline]
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Pipeline output, once analysed.
    #[inline]
    pub fn analysis(&self) -> Option<&PcaResult<T>> {
        self.analysis.as_ref()
    }

    /// Visible overlays.
    #[inline]
    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// Coordinate mapping of the canvas.
    #[inline]
    pub fn viewport(&self) -> &Viewport<T> {
        &self.viewport
    }

    /// True when enough points exist to start the analysis.
    #[inline]
    pub fn can_analyze(&self) -> bool {
        self.points.len() >= self.min_points
    }

    // ========================================================================
    // Point Cloud Edits
    // ========================================================================

    fn invalidate(&mut self) {
        self.analysis = None;
        self.step = None;
        self.reveal = RevealState::default();
        self.stage = if self.points.is_empty() {
            PcaStage::Idle
        } else {
            PcaStage::Collecting
        };
    }

    /// Add a point given in logical coordinates.
    pub fn add_point(&mut self, p: Vector2<T>) -> Result<(), VizError> {
        Validator::validate_point(p, "point")?;
        Validator::validate_in_bounds(p, self.bounds)?;
        self.points.push(p);
        self.invalidate();
        tracing::trace!(points = self.points.len(), "point added");
        Ok(())
    }

    /// Add the point under a click at `screen` (canvas pixels).
    pub fn click(&mut self, screen: Vector2<T>) -> Result<Vector2<T>, VizError> {
        let p = self.viewport.to_logical(screen);
        self.add_point(p)?;
        Ok(p)
    }

    /// Replace the cloud with `points`; nothing changes if any point is
    /// invalid.
    pub fn load_points(&mut self, points: &[Vector2<T>]) -> Result<(), VizError> {
        for &p in points {
            Validator::validate_point(p, "point")?;
            Validator::validate_in_bounds(p, self.bounds)?;
        }
        self.points.clear();
        self.points.extend_from_slice(points);
        self.invalidate();
        tracing::debug!(points = self.points.len(), "points loaded");
        Ok(())
    }

    /// Replace the cloud with a random example of `shape`.
    ///
    /// Generated points outside the bounds are clamped onto the border.
    pub fn generate<R: Rng + ?Sized>(&mut self, shape: PointCloudShape, rng: &mut R) {
        let [min, max] = self.bounds;
        self.points = shape
            .generate::<T, _>(rng)
            .into_iter()
            .map(|p| Vector2::new(p.x.max(min).min(max), p.y.max(min).min(max)))
            .collect();
        self.invalidate();
        tracing::debug!(?shape, points = self.points.len(), "example generated");
    }

    /// Replace the cloud with a positively or negatively correlated example,
    /// chosen at random.
    pub fn generate_correlated<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PointCloudShape {
        let shape = PointCloudShape::random_correlated(rng);
        self.generate(shape, rng);
        shape
    }

    /// Remove every point and return to `Idle`.
    pub fn reset(&mut self) {
        self.points.clear();
        self.invalidate();
        tracing::debug!("pca reset");
    }

    // ========================================================================
    // Walkthrough
    // ========================================================================

    /// Run the analysis and open step 1.
    pub fn analyze(&mut self) -> Result<&PcaResult<T>, VizError> {
        Validator::validate_min_points(self.points.len(), self.min_points)?;
        let result = analyze(&self.points, self.solver);
        self.stage = PcaStage::Analyzed;
        self.step = Some(1);
        self.reveal = RevealState::default();
        Ok(&*self.analysis.insert(result))
    }

    /// Open step `step` (1..=4), hiding that step's overlays.
    pub fn show_step(&mut self, step: usize) -> Result<(), VizError> {
        Validator::validate_step(step)?;
        if self.stage != PcaStage::Analyzed {
            return Err(VizError::NotAnalyzed);
        }
        match step {
            1 => self.reveal.centering = false,
            2 => self.reveal.variance = false,
            3 => {
                self.reveal.pc1 = false;
                self.reveal.pc2 = false;
                self.reveal.ellipse = false;
            }
            _ => self.reveal.projection = false,
        }
        self.step = Some(step);
        Ok(())
    }

    /// Flip an overlay; returns whether it is now visible.
    pub fn toggle(&mut self, toggle: RevealToggle) -> Result<bool, VizError> {
        if self.stage != PcaStage::Analyzed {
            return Err(VizError::NotAnalyzed);
        }
        let flag = match toggle {
            RevealToggle::Centering => &mut self.reveal.centering,
            RevealToggle::Variance => &mut self.reveal.variance,
            RevealToggle::Pc1 => &mut self.reveal.pc1,
            RevealToggle::Pc2 => &mut self.reveal.pc2,
            RevealToggle::Ellipse => &mut self.reveal.ellipse,
            RevealToggle::Projection => &mut self.reveal.projection,
        };
        *flag = !*flag;
        Ok(*flag)
    }

    /// PC arrows from the origin, each `arrow_scale·√λ` long.
    pub fn pc_arrows(&self) -> Option<[Vector2<T>; 2]> {
        let eigen = &self.analysis.as_ref()?.eigen;
        let [s1, s2] = eigen.std_devs();
        Some([
            eigen.pc1() * (s1 * self.arrow_scale),
            eigen.pc2() * (s2 * self.arrow_scale),
        ])
    }
}

impl<T: FloatLinalg + FloatConst> Widget for PcaWidget<T> {
    type Snapshot = PcaSnapshot<T>;

    fn snapshot(&self) -> PcaSnapshot<T> {
        let analysis = self.analysis.as_ref();
        PcaSnapshot {
            stage: self.stage,
            step: self.step,
            points: self.points.clone(),
            bounds: self.bounds,
            can_analyze: self.can_analyze(),
            analysis: analysis.cloned(),
            reveal: self.reveal,
            covariance_sign: analysis.map(PcaResult::covariance_sign),
            ellipse: analysis.map(PcaResult::confidence_ellipse),
            pc_arrows: self.pc_arrows(),
            formulas: analysis.map(|a| PcaFormulas {
                characteristic: characteristic_equation(&a.covariance),
                trace_determinant: trace_determinant(&a.covariance),
                eigen_pairs: eigen_pairs(&a.eigen),
                interpretation: spread_interpretation(&a.eigen),
            }),
        }
    }
}
