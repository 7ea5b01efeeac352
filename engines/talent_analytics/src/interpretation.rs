// Shared interpretation vocabulary
//
// Every module that reports a correlation, regression fit, or ANOVA result
// classifies it through these constants, so "fuerte" or "significativo" in
// one report section means the same numeric band everywhere.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

// ============================================================================
// STRENGTH BANDS (on |r|)
// ============================================================================

// Conventional |r| cut-points
pub const NEGLIGIBLE_MAX: f64 = 0.1;
pub const WEAK_MAX: f64 = 0.3;
pub const MODERATE_MAX: f64 = 0.5;
pub const STRONG_MAX: f64 = 0.7;

/// Qualitative strength of a linear association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Negligible,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Classify |r| into a band
    pub fn from_abs_r(abs_r: f64) -> Self {
        if abs_r < NEGLIGIBLE_MAX {
            Self::Negligible
        } else if abs_r < WEAK_MAX {
            Self::Weak
        } else if abs_r < MODERATE_MAX {
            Self::Moderate
        } else if abs_r < STRONG_MAX {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    /// Machine-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
        }
    }

    /// Display label for report text
    pub fn label_es(&self) -> &'static str {
        match self {
            Self::Negligible => "insignificante",
            Self::Weak => "débil",
            Self::Moderate => "moderada",
            Self::Strong => "fuerte",
            Self::VeryStrong => "muy fuerte",
        }
    }
}

/// Direction of an association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn from_r(r: f64) -> Self {
        if r < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    pub fn label_es(&self) -> &'static str {
        match self {
            Self::Positive => "positiva",
            Self::Negative => "negativa",
        }
    }
}

// ============================================================================
// SIGNIFICANCE BANDS (on p)
// ============================================================================

// Conventional alpha levels shared by ANOVA and regression reporting
pub const ALPHA_HIGH: f64 = 0.01;
pub const ALPHA: f64 = 0.05;

/// Qualitative significance of a test result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    HighlySignificant,
    Significant,
    NotSignificant,
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p < ALPHA_HIGH {
            Self::HighlySignificant
        } else if p < ALPHA {
            Self::Significant
        } else {
            Self::NotSignificant
        }
    }

    pub fn label_es(&self) -> &'static str {
        match self {
            Self::HighlySignificant => "altamente significativo",
            Self::Significant => "significativo",
            Self::NotSignificant => "no significativo",
        }
    }

    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::NotSignificant)
    }
}

/// Upper-tail probability of the F distribution with (df1, df2) degrees of
/// freedom: the p-value feeding the significance bands
///
/// Degenerate inputs (F ≤ 0, non-positive df) map to p = 1; an infinite F
/// (perfect separation) maps to p = 0.
pub fn f_p_value(f: f64, df1: f64, df2: f64) -> f64 {
    if f == f64::INFINITY {
        return 0.0;
    }
    if !f.is_finite() || f <= 0.0 || df1 <= 0.0 || df2 <= 0.0 {
        return 1.0;
    }

    match FisherSnedecor::new(df1, df2) {
        Ok(dist) => (1.0 - dist.cdf(f)).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_bands() {
        assert_eq!(Strength::from_abs_r(0.05), Strength::Negligible);
        assert_eq!(Strength::from_abs_r(0.2), Strength::Weak);
        assert_eq!(Strength::from_abs_r(0.4), Strength::Moderate);
        assert_eq!(Strength::from_abs_r(0.6), Strength::Strong);
        assert_eq!(Strength::from_abs_r(0.9), Strength::VeryStrong);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_r(0.3), Direction::Positive);
        assert_eq!(Direction::from_r(-0.3), Direction::Negative);
    }

    #[test]
    fn test_significance_bands() {
        assert_eq!(Significance::from_p(0.001), Significance::HighlySignificant);
        assert_eq!(Significance::from_p(0.03), Significance::Significant);
        assert_eq!(Significance::from_p(0.2), Significance::NotSignificant);
    }

    #[test]
    fn test_f_p_value_degenerate() {
        assert_eq!(f_p_value(0.0, 2.0, 10.0), 1.0);
        assert_eq!(f_p_value(f64::INFINITY, 2.0, 10.0), 0.0);
        assert_eq!(f_p_value(f64::NAN, 2.0, 10.0), 1.0);
    }

    #[test]
    fn test_f_p_value_monotone() {
        // Larger F → smaller p for fixed degrees of freedom
        let p_small = f_p_value(1.0, 2.0, 20.0);
        let p_large = f_p_value(10.0, 2.0, 20.0);
        assert!(p_large < p_small);
        assert!(p_large < 0.01);
    }
}
