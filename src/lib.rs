//! stroke2series: hand-drawn stroke → graphing-ready Fourier series.
//!
//! Turns an irregular, self-intersecting, variable-density sequence of
//! pointer samples into a clean periodic signal and estimates a truncated
//! real Fourier series that reconstructs it with controllable fidelity.
//!
//! Pipeline:
//! 1. RDP simplification (strip sampling jitter)
//! 2. Chaikin corner-cutting (visual smoothing without overshoot)
//! 3. Arc-length uniform resampling onto `u ∈ [0, 1]`
//! 4. Trapezoidal-quadrature coefficient estimation
//! 5. Lanczos sigma tapering (optional)
//! 6. Series evaluation on the resample grid
//!
//! # Example
//!
//! ```
//! use stroke2series::{analyze, AnalysisConfig};
//! use stroke2series::signals::{values_to_points, TestSignal};
//!
//! let values = TestSignal::Sine.generate(256);
//! let points = values_to_points(&values, 960.0, 520.0);
//! let analysis = analyze(&points, &AnalysisConfig::default())?;
//! // analysis.coefficients drives display; format::export_expression
//! // turns them into a graphing-tool expression.
//! # Ok::<(), stroke2series::AnalyzeError>(())
//! ```

#![forbid(unsafe_code)]

mod config;

pub mod domain;
pub mod error;
pub mod fidelity;
pub mod format;
pub mod fourier;
pub mod render;
pub mod resample;
pub mod signals;
pub mod simplify;
pub mod smooth;
pub mod stroke;

// Re-export kurbo so downstream users share the version StrokePoint::pos
// hands out.
pub use kurbo;

pub use config::{AnalysisConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use domain::DomainRange;
pub use error::AnalyzeError;
pub use fourier::FourierCoefficients;
pub use resample::ResampleResult;
pub use stroke::StrokePoint;

/// Everything one pipeline run produces.
///
/// Each field is freshly allocated; nothing aliases the input stroke, so a
/// caller may keep any part of a previous run while recomputing the next.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub simplified: Vec<StrokePoint>,
    pub smoothed: Vec<StrokePoint>,
    pub resampled: ResampleResult,
    /// Coefficients straight out of the quadrature, before tapering.
    pub raw_coefficients: FourierCoefficients,
    /// Coefficients the series is evaluated with (tapered when enabled,
    /// otherwise identical to `raw_coefficients`).
    pub coefficients: FourierCoefficients,
    /// The series evaluated on the resample grid.
    pub reconstruction: Vec<f64>,
}

/// Full pipeline: raw pointer samples → Fourier reconstruction.
///
/// Pure and synchronous; every call recomputes all stages from the full
/// current point sequence. There is no partial invalidation: any change to
/// the stroke, harmonic count, smoothing passes, or taper flag requires a
/// fresh call, and the previous `Analysis` should be discarded.
pub fn analyze(points: &[StrokePoint], config: &AnalysisConfig) -> Result<Analysis, AnalyzeError> {
    let config = config.normalized();

    let simplified = simplify::simplify(points, config.tolerance);
    if config.verbose {
        eprintln!(
            "  Simplify    {} \u{2192} {} points  (tolerance {})",
            points.len(),
            simplified.len(),
            config.tolerance,
        );
    }

    let smoothed = smooth::smooth(&simplified, config.smoothing_passes);
    if config.verbose {
        eprintln!(
            "  Smooth      {} \u{2192} {} points  ({} passes)",
            simplified.len(),
            smoothed.len(),
            config.smoothing_passes.clamp(1, smooth::MAX_PASSES),
        );
    }

    let resampled = resample::resample(&smoothed, config.samples, config.width, config.height)?;
    if config.verbose {
        eprintln!(
            "  Resample    {} uniform samples over [0,1]",
            resampled.values.len(),
        );
    }

    let raw_coefficients = fourier::compute_coefficients(&resampled.values, config.harmonics);
    let coefficients = if config.taper {
        fourier::apply_lanczos_sigma(&raw_coefficients)
    } else {
        raw_coefficients.clone()
    };
    let reconstruction = fourier::evaluate_series(&coefficients, &resampled.u);
    if config.verbose {
        eprintln!(
            "  Fourier     {} harmonics{}  a0 {:.4}",
            coefficients.order(),
            if config.taper { ", tapered" } else { "" },
            coefficients.a0,
        );
    }

    Ok(Analysis {
        simplified,
        smoothed,
        resampled,
        raw_coefficients,
        coefficients,
        reconstruction,
    })
}
