//! Series rendering and graphing-tool export.
//!
//! Two renderings of the same coefficients: a human-readable series in
//! `u`-space and a single-line `y = ...` expression rescaled onto a user
//! domain, directly pasteable into a graphing calculator (implicit
//! multiplication via `*`, `cos(...)`/`sin(...)` calls, plain `.` literals).

use crate::domain::DomainRange;
use crate::fourier::FourierCoefficients;

/// Render `f(u) ≈ a0/2 + Σ an·cos(k·2πu) + Σ bn·sin(k·2πu)`.
///
/// Terms with an exactly-zero coefficient are omitted; the all-zero series
/// renders as `f(u) ≈ 0`.
pub fn series_text(coeffs: &FourierCoefficients) -> String {
    let mut terms = Vec::new();
    if coeffs.a0 != 0.0 {
        terms.push(fmt_coef(coeffs.a0 / 2.0));
    }
    for k in 1..=coeffs.order() {
        let a = coeffs.an.get(k - 1).copied().unwrap_or(0.0);
        if a != 0.0 {
            terms.push(format!("{}·cos({}·2πu)", fmt_coef(a), k));
        }
        let b = coeffs.bn.get(k - 1).copied().unwrap_or(0.0);
        if b != 0.0 {
            terms.push(format!("{}·sin({}·2πu)", fmt_coef(b), k));
        }
    }
    if terms.is_empty() {
        return "f(u) ≈ 0".to_owned();
    }
    format!("f(u) ≈ {}", join_terms(&terms))
}

/// Render the series as a `y = ...` expression on the given domain.
///
/// Substitutes `u = (x-a)/(b-a)`, so every harmonic argument reads
/// `k*2π*(x-a)/(b-a)`. Zero terms are omitted and the all-zero series
/// exports as `y = 0`.
pub fn export_expression(coeffs: &FourierCoefficients, domain: DomainRange) -> String {
    let domain = domain.normalized();
    let phase = format!("2π*(x-{})/({}-{})", domain.a, domain.b, domain.a);

    let mut terms = Vec::new();
    if coeffs.a0 != 0.0 {
        terms.push(fmt_coef(coeffs.a0 / 2.0));
    }
    for k in 1..=coeffs.order() {
        let a = coeffs.an.get(k - 1).copied().unwrap_or(0.0);
        if a != 0.0 {
            terms.push(format!("{}*cos({}*{})", fmt_coef(a), k, phase));
        }
        let b = coeffs.bn.get(k - 1).copied().unwrap_or(0.0);
        if b != 0.0 {
            terms.push(format!("{}*sin({}*{})", fmt_coef(b), k, phase));
        }
    }
    if terms.is_empty() {
        return "y = 0".to_owned();
    }
    format!("y = {}", join_terms(&terms))
}

/// Join terms with ` + `, folding a leading minus into ` - `.
fn join_terms(terms: &[String]) -> String {
    let mut joined = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            joined.push_str(term);
        } else if let Some(rest) = term.strip_prefix('-') {
            joined.push_str(" - ");
            joined.push_str(rest);
        } else {
            joined.push_str(" + ");
            joined.push_str(term);
        }
    }
    joined
}

/// Format a coefficient: at most four fraction digits, trailing zeros
/// dropped, magnitudes below 1e-4 collapsed to `0`.
fn fmt_coef(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 1e4).round() / 1e4;
    if rounded.abs() < 1e-4 {
        return "0".to_owned();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_DOMAIN;

    fn coeffs(a0: f64, an: Vec<f64>, bn: Vec<f64>) -> FourierCoefficients {
        FourierCoefficients { a0, an, bn }
    }

    #[test]
    fn single_cosine_exports_with_domain_substitution() {
        let c = coeffs(0.0, vec![1.0], vec![0.0]);
        assert_eq!(
            export_expression(&c, DEFAULT_DOMAIN),
            "y = 1*cos(1*2π*(x-0)/(4-0))"
        );
    }

    #[test]
    fn zero_series_exports_as_zero() {
        let c = coeffs(0.0, vec![0.0, 0.0], vec![0.0, 0.0]);
        assert_eq!(export_expression(&c, DEFAULT_DOMAIN), "y = 0");
        assert_eq!(series_text(&c), "f(u) ≈ 0");
    }

    #[test]
    fn negative_terms_fold_the_plus_sign() {
        let c = coeffs(1.0, vec![-0.5], vec![0.0]);
        assert_eq!(
            export_expression(&c, DEFAULT_DOMAIN),
            "y = 0.5 - 0.5*cos(1*2π*(x-0)/(4-0))"
        );
    }

    #[test]
    fn series_text_lists_constant_and_harmonics() {
        let c = coeffs(2.0, vec![0.25], vec![0.5]);
        assert_eq!(
            series_text(&c),
            "f(u) ≈ 1 + 0.25·cos(1·2πu) + 0.5·sin(1·2πu)"
        );
    }

    #[test]
    fn coefficients_round_to_four_digits() {
        let c = coeffs(0.0, vec![0.123456], vec![0.0]);
        let text = series_text(&c);
        assert!(text.contains("0.1235"), "{}", text);
    }

    #[test]
    fn sub_epsilon_magnitudes_print_as_zero() {
        assert_eq!(fmt_coef(4.2e-5), "0");
        assert_eq!(fmt_coef(-4.2e-5), "0");
        assert_eq!(fmt_coef(0.0), "0");
    }

    #[test]
    fn nonzero_domain_appears_in_the_phase() {
        let c = coeffs(0.0, vec![0.0], vec![2.0]);
        let domain = DomainRange { a: -1.0, b: 3.0 };
        assert_eq!(
            export_expression(&c, domain),
            "y = 2*sin(1*2π*(x--1)/(3--1))"
        );
    }
}
