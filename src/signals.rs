//! Built-in test signals for exercising the pipeline without a tablet.
//!
//! Each preset generates one period of a reference waveform on the uniform
//! grid `u = i/(samples-1)`, in the same `[-1, 1]` range the resampler
//! produces, so it can be fed straight to the coefficient estimator or
//! lifted back into canvas points for a full pipeline run.

use std::f64::consts::TAU;
use std::str::FromStr;

use crate::config::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::resample::value_to_canvas_y;
use crate::stroke::StrokePoint;

/// Preset reference waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestSignal {
    /// A single 1 Hz sine wave to validate reconstruction.
    Sine,
    /// cos(x) + 0.5·sin(2x); stresses both cosine and sine coefficients.
    Mix,
    /// Odd-harmonic rich triangle wave.
    Triangle,
    /// Idealized square wave in [-1, 1].
    Square,
    /// Linearly increasing sawtooth.
    Sawtooth,
    /// Sine with a DC offset; tests constant plus oscillatory content.
    OffsetSine,
}

impl TestSignal {
    pub const ALL: [TestSignal; 6] = [
        TestSignal::Sine,
        TestSignal::Mix,
        TestSignal::Triangle,
        TestSignal::Square,
        TestSignal::Sawtooth,
        TestSignal::OffsetSine,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TestSignal::Sine => "sine",
            TestSignal::Mix => "mix",
            TestSignal::Triangle => "triangle",
            TestSignal::Square => "square",
            TestSignal::Sawtooth => "saw",
            TestSignal::OffsetSine => "offset-sine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestSignal::Sine => "Pure Sine",
            TestSignal::Mix => "cos(x)+0.5sin(2x)",
            TestSignal::Triangle => "Triangle Wave",
            TestSignal::Square => "Square Wave",
            TestSignal::Sawtooth => "Sawtooth",
            TestSignal::OffsetSine => "Offset Sine",
        }
    }

    /// Generate `samples` values on the uniform grid.
    pub fn generate(&self, samples: usize) -> Vec<f64> {
        let denom = samples.saturating_sub(1).max(1) as f64;
        (0..samples)
            .map(|i| {
                let u = i as f64 / denom;
                match self {
                    TestSignal::Sine => (TAU * u).sin(),
                    TestSignal::Mix => {
                        let x = TAU * u;
                        x.cos() + 0.5 * (2.0 * x).sin()
                    }
                    TestSignal::Triangle => 2.0 * (2.0 * (u - (u + 0.5).floor())).abs() - 1.0,
                    TestSignal::Square => {
                        if u < 0.5 {
                            1.0
                        } else {
                            -1.0
                        }
                    }
                    TestSignal::Sawtooth => 2.0 * u - 1.0,
                    TestSignal::OffsetSine => 0.4 + 0.6 * (TAU * u).sin(),
                }
            })
            .collect()
    }
}

impl FromStr for TestSignal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestSignal::ALL
            .iter()
            .copied()
            .find(|signal| signal.id() == s)
            .ok_or_else(|| {
                let ids: Vec<&str> = TestSignal::ALL.iter().map(|s| s.id()).collect();
                format!("unknown signal '{}' (expected one of: {})", s, ids.join(", "))
            })
    }
}

/// Lift a value array back into canvas stroke points, spreading x evenly
/// across the canvas width. Non-positive or non-finite dimensions fall back
/// to the default canvas.
pub fn values_to_points(values: &[f64], width: f64, height: f64) -> Vec<StrokePoint> {
    let (width, height) = if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0
    {
        (width, height)
    } else {
        (DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    };
    let max_index = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| StrokePoint {
            x: i as f64 / max_index * width,
            y: value_to_canvas_y(value, height),
            t: i as f64,
        })
        .collect()
}
