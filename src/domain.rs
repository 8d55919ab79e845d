//! Export domain handling.

use serde::{Deserialize, Serialize};

/// The x-range the exported expression is rescaled onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub a: f64,
    pub b: f64,
}

/// Domain used when the caller supplies none (or an unrepairable one).
pub const DEFAULT_DOMAIN: DomainRange = DomainRange { a: 0.0, b: 4.0 };

impl DomainRange {
    /// Repair invalid input instead of rejecting it: non-finite bounds fall
    /// back to the defaults and a degenerate range widens to unit width.
    pub fn normalized(self) -> DomainRange {
        let a = if self.a.is_finite() {
            self.a
        } else {
            DEFAULT_DOMAIN.a
        };
        let mut b = if self.b.is_finite() {
            self.b
        } else {
            DEFAULT_DOMAIN.b
        };
        if b <= a {
            b = a + 1.0;
        }
        DomainRange { a, b }
    }

    pub fn is_valid(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.b > self.a
    }

    pub fn span(&self) -> f64 {
        self.b - self.a
    }

    /// Graphing-tool restriction suffix, e.g. `{0<x<4}`.
    pub fn restriction(&self) -> String {
        format!("{{{}<x<{}}}", self.a, self.b)
    }
}

impl Default for DomainRange {
    fn default() -> Self {
        DEFAULT_DOMAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_bounds_fall_back_to_defaults() {
        let domain = DomainRange {
            a: f64::NAN,
            b: f64::NEG_INFINITY,
        }
        .normalized();
        assert_eq!(domain.a, 0.0);
        assert_eq!(domain.b, 4.0);
    }

    #[test]
    fn degenerate_range_widens_to_unit_width() {
        let domain = DomainRange { a: 3.0, b: 3.0 }.normalized();
        assert_eq!(domain.a, 3.0);
        assert_eq!(domain.b, 4.0);

        let inverted = DomainRange { a: 5.0, b: 2.0 }.normalized();
        assert_eq!(inverted.b, 6.0);
    }

    #[test]
    fn restriction_renders_as_inequality() {
        assert_eq!(DEFAULT_DOMAIN.restriction(), "{0<x<4}");
    }

    #[test]
    fn validity() {
        assert!(DEFAULT_DOMAIN.is_valid());
        assert!(!DomainRange { a: 1.0, b: 1.0 }.is_valid());
        assert!(!DomainRange { a: f64::NAN, b: 4.0 }.is_valid());
    }
}
