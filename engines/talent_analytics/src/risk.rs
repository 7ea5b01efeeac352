// Weighted multi-factor risk scoring
//
// Turns a list of named, weighted, thresholded factors into a single 0-100
// score and a discrete tier. Weights need not sum to 1; the scorer
// renormalizes by the total.

use serde::Serialize;

// ============================================================================
// SCORE CUT-POINTS
// ============================================================================

// Shared with the caller's UI so level and score never disagree
pub const RISK_MEDIO_MIN: f64 = 25.0;
pub const RISK_ALTO_MIN: f64 = 50.0;
pub const RISK_CRITICO_MIN: f64 = 75.0;

// A factor whose normalized contribution reaches this value raises an alert
pub const ALERT_CONTRIBUTION: f64 = 0.5;

/// Which side of the threshold carries risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDirection {
    LowerIsRisk,
    HigherIsRisk,
}

/// One ingredient of a composite risk score
#[derive(Debug, Clone)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    /// Relative weight in [0, 1]
    pub weight: f64,
    pub threshold: f64,
    pub direction: RiskDirection,
}

/// Discrete risk tier (lowest to highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Bajo,
    Medio,
    Alto,
    Critico,
}

impl RiskLevel {
    /// Bucket a 0-100 score; cut-points are fixed constants
    pub fn from_score(score: f64) -> Self {
        if score >= RISK_CRITICO_MIN {
            Self::Critico
        } else if score >= RISK_ALTO_MIN {
            Self::Alto
        } else if score >= RISK_MEDIO_MIN {
            Self::Medio
        } else {
            Self::Bajo
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bajo => "bajo",
            Self::Medio => "medio",
            Self::Alto => "alto",
            Self::Critico => "critico",
        }
    }
}

/// Per-factor breakdown in the scoring output
#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    pub name: String,
    pub value: f64,
    pub weight: f64,
    /// Normalized contribution in [0, 1] before weighting
    pub contribution: f64,
    pub alert: bool,
}

/// Composite risk score
#[derive(Debug, Clone, Serialize)]
pub struct RiskScore {
    pub total_score: f64,
    pub risk_level: RiskLevel,
    pub contributing_factors: Vec<FactorContribution>,
}

/// How far a factor sits on the risky side of its threshold, in [0, 1]
///
/// At or beyond the safe side of the threshold the contribution is 0; the
/// deficit grows proportionally relative to the threshold magnitude and
/// caps at 1. A zero-magnitude threshold has no meaningful scale and
/// contributes 0.
fn normalized_contribution(factor: &RiskFactor) -> f64 {
    let scale = factor.threshold.abs();
    if scale < 1e-12 {
        return 0.0;
    }

    let deficit = match factor.direction {
        RiskDirection::LowerIsRisk => factor.threshold - factor.value,
        RiskDirection::HigherIsRisk => factor.value - factor.threshold,
    };

    (deficit / scale).clamp(0.0, 1.0)
}

/// Combine named, weighted, thresholded factors into a 0-100 score and tier
pub fn calculate_risk_score(factors: &[RiskFactor]) -> RiskScore {
    let total_weight: f64 = factors.iter().map(|f| f.weight.max(0.0)).sum();

    let mut contributing_factors = Vec::with_capacity(factors.len());
    let mut weighted_sum = 0.0;
    for factor in factors {
        let contribution = normalized_contribution(factor);
        let weight = factor.weight.max(0.0);
        weighted_sum += contribution * weight;

        contributing_factors.push(FactorContribution {
            name: factor.name.clone(),
            value: factor.value,
            weight,
            contribution,
            alert: contribution >= ALERT_CONTRIBUTION,
        });
    }

    let total_score = if total_weight > 0.0 {
        (weighted_sum / total_weight * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    RiskScore {
        total_score,
        risk_level: RiskLevel::from_score(total_score),
        contributing_factors,
    }
}
