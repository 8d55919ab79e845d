//! Reconstruction quality report.
//!
//! Compares the evaluated series against the resampled source signal:
//! pointwise error bounds, the per-harmonic magnitude spectrum, and the
//! share of signal energy the truncated series carries.

use std::fmt;

use crate::fourier::FourierCoefficients;

/// Summary of how faithfully a coefficient set reproduces its source signal.
#[derive(Debug, Clone)]
pub struct FidelityReport {
    /// Number of sample pairs compared.
    pub samples: usize,
    /// Largest pointwise deviation.
    pub max_error: f64,
    /// Root-mean-square deviation.
    pub rms_error: f64,
    /// Magnitude `sqrt(an² + bn²)` per harmonic, fundamental first.
    pub spectrum: Vec<f64>,
    /// Harmonic with the largest magnitude (1-indexed, 0 when empty).
    pub dominant: usize,
    /// Fraction of reconstruction variance relative to source variance.
    pub energy_ratio: f64,
}

/// Compare a reconstruction against the source signal it came from.
///
/// Mismatched lengths compare the common prefix; empty input produces an
/// all-zero report.
pub fn report(
    values: &[f64],
    reconstruction: &[f64],
    coeffs: &FourierCoefficients,
) -> FidelityReport {
    let samples = values.len().min(reconstruction.len());

    let mut max_error = 0.0f64;
    let mut sq_sum = 0.0;
    for i in 0..samples {
        let err = (reconstruction[i] - values[i]).abs();
        max_error = max_error.max(err);
        sq_sum += err * err;
    }
    let rms_error = if samples > 0 {
        (sq_sum / samples as f64).sqrt()
    } else {
        0.0
    };

    let spectrum: Vec<f64> = (1..=coeffs.order()).map(|k| coeffs.magnitude(k)).collect();
    let dominant = spectrum
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i + 1)
        .unwrap_or(0);

    FidelityReport {
        samples,
        max_error,
        rms_error,
        spectrum,
        dominant,
        energy_ratio: energy_ratio(values, reconstruction, samples),
    }
}

/// Variance of the reconstruction over variance of the source. 1.0 means the
/// series carries all of the signal's energy; tapering pulls it below 1.
fn energy_ratio(values: &[f64], reconstruction: &[f64], samples: usize) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    let var = |xs: &[f64]| {
        let mean = xs[..samples].iter().sum::<f64>() / samples as f64;
        xs[..samples]
            .iter()
            .map(|&x| (x - mean) * (x - mean))
            .sum::<f64>()
            / samples as f64
    };
    let source = var(values);
    if source > 0.0 {
        var(reconstruction) / source
    } else {
        1.0
    }
}

impl fmt::Display for FidelityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Fidelity    max err {:.4}  rms {:.4}  ({} samples)",
            self.max_error, self.rms_error, self.samples,
        )?;
        writeln!(
            f,
            "  Spectrum    {} harmonics, dominant k={}  energy {:.0}%",
            self.spectrum.len(),
            self.dominant,
            self.energy_ratio * 100.0,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::{compute_coefficients, evaluate_series};

    #[test]
    fn perfect_reconstruction_has_near_zero_error() {
        let values: Vec<f64> = (0..256)
            .map(|i| (std::f64::consts::TAU * i as f64 / 255.0).sin())
            .collect();
        let coeffs = compute_coefficients(&values, 5);
        let grid: Vec<f64> = (0..256).map(|i| i as f64 / 255.0).collect();
        let reconstruction = evaluate_series(&coeffs, &grid);
        let r = report(&values, &reconstruction, &coeffs);
        assert!(r.max_error < 0.1, "max err {}", r.max_error);
        assert_eq!(r.dominant, 1);
        assert!(r.energy_ratio > 0.9);
    }

    #[test]
    fn empty_input_produces_a_zero_report() {
        let coeffs = FourierCoefficients {
            a0: 0.0,
            an: Vec::new(),
            bn: Vec::new(),
        };
        let r = report(&[], &[], &coeffs);
        assert_eq!(r.samples, 0);
        assert_eq!(r.max_error, 0.0);
        assert_eq!(r.dominant, 0);
    }
}
