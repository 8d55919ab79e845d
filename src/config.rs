/// All analysis parameters in one struct.
/// Designed to be adjustable at runtime (for editor sliders) and
/// mapped 1:1 onto CLI flags.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // -- Simplification --
    /// RDP perpendicular-distance tolerance in canvas pixels.
    /// 0 keeps every non-collinear point.
    pub tolerance: f64,

    // -- Smoothing --
    /// Chaikin corner-cutting passes. Values <= 1 disable smoothing;
    /// effective range is 1-6 (each pass roughly doubles the point count).
    pub smoothing_passes: i32,

    // -- Resampling --
    /// Uniform arc-length sample count. Values below 2 are raised to 2.
    /// A negative count is rejected by `analyze` rather than clamped.
    pub samples: i64,
    /// Canvas width in pixels (display x alignment).
    pub width: f64,
    /// Canvas height in pixels (amplitude mapping).
    pub height: f64,

    // -- Fourier --
    /// Harmonic count K, clamped to 1-50.
    pub harmonics: usize,
    /// Apply the Lanczos sigma taper to curb Gibbs ringing.
    pub taper: bool,

    // -- Diagnostics --
    /// Log per-stage progress to stderr.
    pub verbose: bool,
}

/// Canvas dimensions assumed when a caller supplies none.
pub const DEFAULT_CANVAS_WIDTH: f64 = 960.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 520.0;

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.2,
            smoothing_passes: 4,
            samples: 1024,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            harmonics: 12,
            taper: true,
            verbose: false,
        }
    }
}

impl AnalysisConfig {
    /// Repair non-finite float fields instead of rejecting them: a NaN
    /// tolerance or canvas dimension falls back to its default, a negative
    /// tolerance clamps to zero. Integer fields are left for their stages
    /// to clamp (or, for a negative sample count, to reject).
    pub fn normalized(&self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        let mut config = self.clone();
        if !config.tolerance.is_finite() {
            config.tolerance = defaults.tolerance;
        }
        config.tolerance = config.tolerance.max(0.0);
        if !config.width.is_finite() || config.width <= 0.0 {
            config.width = defaults.width;
        }
        if !config.height.is_finite() || config.height <= 0.0 {
            config.height = defaults.height;
        }
        config
    }
}
