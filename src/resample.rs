//! Arc-length uniform resampling.
//!
//! Parameterizes the smoothed stroke by normalized arc length so samples
//! track travel distance along the path rather than x-position. This keeps
//! the sampling invariant to drawing speed and well defined for loops and
//! backtracks, which x-sorted interpolation is not.

use serde::Serialize;

use crate::error::AnalyzeError;
use crate::stroke::StrokePoint;

/// A stroke resampled onto the fixed uniform grid `u[i] = i / (samples - 1)`.
///
/// `values` holds the signal amplitudes mapped into `[-1, 1]`; `x` holds the
/// canvas x-coordinate at the same arc-length fraction, used only to align
/// the reconstruction overlay with the original stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampleResult {
    pub u: Vec<f64>,
    pub values: Vec<f64>,
    pub x: Vec<f64>,
}

/// Resample a polyline into `samples` uniform arc-length samples.
///
/// Degenerate inputs are defined, not errors: an empty stroke yields a zero
/// signal with `x` spread across the canvas, a single point yields a
/// constant signal, and a zero-length path falls back to index-based
/// parameterization. The one rejected input is a negative sample count,
/// which indicates a caller bug that clamping would mask.
pub fn resample(
    points: &[StrokePoint],
    samples: i64,
    width: f64,
    height: f64,
) -> Result<ResampleResult, AnalyzeError> {
    if samples < 0 {
        return Err(AnalyzeError::InvalidSampleCount(samples));
    }
    let samples = samples.max(2) as usize;

    let u: Vec<f64> = (0..samples)
        .map(|i| i as f64 / (samples - 1) as f64)
        .collect();

    if points.is_empty() {
        let span = if width > 1.0 { width - 1.0 } else { 1.0 };
        let x = u.iter().map(|&t| t * span).collect();
        return Ok(ResampleResult {
            u,
            values: vec![0.0; samples],
            x,
        });
    }

    if points.len() == 1 {
        let value = canvas_y_to_value(points[0].y, height);
        return Ok(ResampleResult {
            values: vec![value; samples],
            x: vec![points[0].x; samples],
            u,
        });
    }

    // Cumulative arc length, normalized to [0, 1]. When every point
    // coincides the index fraction stands in for the arc fraction.
    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += pair[0].pos().distance(pair[1].pos());
        cumulative.push(total);
    }
    let fractions: Vec<f64> = if total > 0.0 {
        cumulative.iter().map(|&s| s / total).collect()
    } else {
        (0..points.len())
            .map(|i| i as f64 / (points.len() - 1) as f64)
            .collect()
    };

    let mut values = Vec::with_capacity(samples);
    let mut xs = Vec::with_capacity(samples);
    for &query in &u {
        let hi = lower_bound(&fractions, query);
        let (px, py) = if hi == 0 {
            (points[0].x, points[0].y)
        } else {
            let lo = hi - 1;
            let span = fractions[hi] - fractions[lo];
            let local = if span > 0.0 {
                (query - fractions[lo]) / span
            } else {
                0.0
            };
            let p = points[lo].pos().lerp(points[hi].pos(), local);
            (p.x, p.y)
        };
        values.push(canvas_y_to_value(py, height));
        xs.push(px);
    }

    Ok(ResampleResult { u, values, x: xs })
}

/// First index whose fraction is `>= target`; `fractions` is sorted and
/// non-decreasing. Falls back to the last index when the target overshoots.
fn lower_bound(fractions: &[f64], target: f64) -> usize {
    let mut low = 0usize;
    let mut high = fractions.len() - 1;
    let mut answer = fractions.len() - 1;
    while low <= high {
        let mid = (low + high) / 2;
        if fractions[mid] >= target {
            answer = mid;
            if mid == 0 {
                break;
            }
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }
    answer
}

/// Map a canvas y (y grows downward) to a signal amplitude in `[-1, 1]`.
/// A canvas height of 1 or less is treated as a unit span to avoid a zero
/// denominator.
pub fn canvas_y_to_value(y: f64, height: f64) -> f64 {
    let span = if height > 1.0 { height - 1.0 } else { 1.0 };
    (1.0 - 2.0 * y / span).clamp(-1.0, 1.0)
}

/// Inverse of [`canvas_y_to_value`]: map an amplitude back to a canvas y.
pub fn value_to_canvas_y(value: f64, height: f64) -> f64 {
    let span = if height > 1.0 { height - 1.0 } else { 1.0 };
    (1.0 - value.clamp(-1.0, 1.0)) / 2.0 * span
}
