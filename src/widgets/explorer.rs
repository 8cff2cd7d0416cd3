//! Interactive covariance explorer.
//!
//! ## Purpose
//!
//! Three sliders set `var_x`, `var_y` and the covariance of a 2×2 matrix.
//! Every snapshot shows samples drawn from that distribution, its two-sigma
//! ellipse, both principal-component arrows and a description of its shape.
//!
//! ## Key concepts
//!
//! * **Admissible covariance**: `|cov| <= √(var_x var_y)`. The slider may go
//!   further; the value is clamped before any computation and the snapshot
//!   reports that it was.
//! * **Fixed noise**: The standard-normal draws are kept between updates and
//!   only reshaped by the Cholesky factor, so moving a slider deforms the
//!   cloud instead of redrawing it. `resample` draws new noise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::FloatConst;
use rand::Rng;

use crate::algorithms::sampling::standard_normal_pairs;
use crate::engine::output::{ExplorerShape, ExplorerSnapshot};
use crate::engine::validator::Validator;
use crate::math::covariance::{Cholesky, CovarianceMatrix};
use crate::math::eigen::{ELLIPSE_SIGMA, EigenSolver};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;
use crate::primitives::viewport::Viewport;
use crate::render::Widget;

/// Slack allowed before a slider value counts as clamped.
const CLAMP_TOLERANCE: f64 = 0.001;

/// Geometry and initial slider values of the explorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Side of the square canvas in pixels.
    pub canvas_size: f64,
    /// Logical `[min, max]` on both axes.
    pub range: [f64; 2],
    /// Number of samples drawn.
    pub samples: usize,
    /// PC arrow length in units of `√λ`.
    pub arrow_scale: f64,
    /// Initial `var_x`.
    pub var_x: f64,
    /// Initial `var_y`.
    pub var_y: f64,
    /// Initial covariance.
    pub cov_xy: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas_size: 200.0,
            range: [-3.0, 3.0],
            samples: 50,
            arrow_scale: 1.5,
            var_x: 1.0,
            var_y: 1.0,
            cov_xy: 0.0,
        }
    }
}

/// State of the covariance explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceExplorer<T> {
    var_x: T,
    var_y: T,
    cov_xy: T,
    noise: Vec<Vector2<T>>,
    sample_count: usize,
    arrow_scale: T,
    viewport: Viewport<T>,
}

#[inline]
fn c<T: FloatLinalg>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

impl<T: FloatLinalg + FloatConst> CovarianceExplorer<T> {
    /// Explorer with default sliders and fresh noise from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let config = ExplorerConfig::default();
        let noise = standard_normal_pairs(rng, config.samples);
        Self::build(config, noise)
    }

    /// Explorer with custom settings and fresh noise from `rng`.
    pub fn with_config<R: Rng + ?Sized>(
        config: ExplorerConfig,
        rng: &mut R,
    ) -> Result<Self, VizError> {
        Self::validate_config(&config)?;
        let noise = standard_normal_pairs(rng, config.samples);
        Ok(Self::build(config, noise))
    }

    /// Explorer with default sliders over the given standard-normal draws.
    pub fn with_samples(noise: Vec<Vector2<T>>) -> Result<Self, VizError> {
        for &z in &noise {
            Validator::validate_point(z, "sample")?;
        }
        let config = ExplorerConfig {
            samples: noise.len(),
            ..ExplorerConfig::default()
        };
        Ok(Self::build(config, noise))
    }

    fn validate_config(config: &ExplorerConfig) -> Result<(), VizError> {
        let [min, max] = config.range;
        Validator::validate_positive(c::<T>(config.canvas_size), "canvas_size")?;
        Validator::validate_positive(c::<T>(max - min), "range")?;
        Validator::validate_positive(c::<T>(config.arrow_scale), "arrow_scale")?;
        Validator::validate_variance(c::<T>(config.var_x))?;
        Validator::validate_variance(c::<T>(config.var_y))?;
        Validator::validate_scalar(c::<T>(config.cov_xy), "covariance")
    }

    fn build(config: ExplorerConfig, noise: Vec<Vector2<T>>) -> Self {
        let [min, max] = config.range;
        Self {
            var_x: c(config.var_x),
            var_y: c(config.var_y),
            cov_xy: c(config.cov_xy),
            noise,
            sample_count: config.samples,
            arrow_scale: c(config.arrow_scale),
            viewport: Viewport::ranged(c(config.canvas_size), c(min), c(max)),
        }
    }

    /// Current `var_x` slider value.
    #[inline]
    pub fn var_x(&self) -> T {
        self.var_x
    }

    /// Current `var_y` slider value.
    #[inline]
    pub fn var_y(&self) -> T {
        self.var_y
    }

    /// Covariance slider value, before clamping.
    #[inline]
    pub fn raw_covariance(&self) -> T {
        self.cov_xy
    }

    /// Coordinate mapping of the canvas.
    #[inline]
    pub fn viewport(&self) -> &Viewport<T> {
        &self.viewport
    }

    /// Standard-normal draws behind the samples.
    #[inline]
    pub fn noise(&self) -> &[Vector2<T>] {
        &self.noise
    }

    /// Move the `var_x` slider.
    pub fn set_var_x(&mut self, var_x: T) -> Result<(), VizError> {
        Validator::validate_variance(var_x)?;
        self.var_x = var_x;
        Ok(())
    }

    /// Move the `var_y` slider.
    pub fn set_var_y(&mut self, var_y: T) -> Result<(), VizError> {
        Validator::validate_variance(var_y)?;
        self.var_y = var_y;
        Ok(())
    }

    /// Move the covariance slider. Out-of-range values are kept and clamped
    /// when the snapshot is taken.
    pub fn set_covariance(&mut self, cov_xy: T) -> Result<(), VizError> {
        Validator::validate_scalar(cov_xy, "covariance")?;
        self.cov_xy = cov_xy;
        Ok(())
    }

    /// Draw new standard-normal noise.
    pub fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.noise = standard_normal_pairs(rng, self.sample_count);
        tracing::debug!(samples = self.sample_count, "explorer resampled");
    }

    /// Covariance matrix after clamping, and whether clamping was needed.
    pub fn covariance(&self) -> (CovarianceMatrix<T>, bool) {
        let raw = CovarianceMatrix::new(self.var_x, self.var_y, self.cov_xy);
        let max = raw.max_covariance();
        let clamped = self.cov_xy.abs() > max + c(CLAMP_TOLERANCE);
        if clamped {
            tracing::warn!(
                covariance = self.cov_xy.to_f64().unwrap_or(f64::NAN),
                max = max.to_f64().unwrap_or(f64::NAN),
                "covariance slider clamped"
            );
        }
        (raw.clamped(), clamped)
    }
}

impl<T: FloatLinalg + FloatConst> Widget for CovarianceExplorer<T> {
    type Snapshot = ExplorerSnapshot<T>;

    fn snapshot(&self) -> ExplorerSnapshot<T> {
        let (covariance, clamped) = self.covariance();
        let eigen = EigenSolver::ClosedForm.decompose(&covariance);

        // variances are validated positive, so the factor always exists
        let factor = covariance.cholesky().unwrap_or(Cholesky {
            l00: T::one(),
            l10: T::zero(),
            l11: T::one(),
        });
        let samples = self.noise.iter().map(|&z| factor.transform(z)).collect();

        let [s1, s2] = eigen.std_devs();
        let pc_arrows = [
            eigen.pc1() * (s1 * self.arrow_scale),
            eigen.pc2() * (s2 * self.arrow_scale),
        ];

        tracing::debug!(
            lambda1 = eigen.eigenvalues[0].to_f64().unwrap_or(f64::NAN),
            lambda2 = eigen.eigenvalues[1].to_f64().unwrap_or(f64::NAN),
            "explorer recomputed"
        );

        ExplorerSnapshot {
            raw_covariance: self.cov_xy,
            clamped,
            max_covariance: covariance.max_covariance(),
            ellipse: eigen.ellipse(Vector2::zero(), c(ELLIPSE_SIGMA)),
            pc1_explained: eigen.variance_explained()[0],
            shape: ExplorerShape::classify(&covariance),
            samples,
            pc_arrows,
            eigen,
            covariance,
        }
    }
}
