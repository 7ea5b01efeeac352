// engines/talent_analytics/src/lib.rs

// Talent Analytics Statistics Engine
//
// Pure, stateless numeric routines that turn raw per-employee scores into
// organizational insights: descriptive summaries, correlation, outlier
// detection, risk scoring, regression, ANOVA, clustering, and the aggregate
// layers built on top of them.
//
// All computations use f64. Sparse or degenerate input degrades to defined
// neutral results (0 for scalar statistics, "not applicable" for group
// analyses) because source cohorts are routinely incomplete.

pub mod anova;
pub mod clustering;
pub mod correlation;
pub mod descriptive;
pub mod insights;
pub mod interpretation;
pub mod outliers;
pub mod predictive;
pub mod regression;
pub mod risk;

use std::fmt;

pub use anova::{one_way_anova, AnovaResult};
pub use clustering::{k_means, KMeansResult, Projection};
pub use correlation::{interpret_correlation, pearson_correlation};
pub use descriptive::{statistical_summary, StatisticalSummary};
pub use outliers::{detect_outliers_iqr, OutlierReport};
pub use predictive::rank_predictive_factors;
pub use regression::{multiple_regression, RegressionResult};
pub use risk::{calculate_risk_score, RiskFactor, RiskLevel, RiskScore};

// ============================================================================
// ERRORS
// ============================================================================

// Precondition failures that are bugs in the calling code, not expected
// data conditions. Expected sparsity never produces these: it degrades to
// neutral values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // Fewer usable observations than the requested model can support
    InsufficientData { required: usize, actual: usize },

    // A regression was requested with no predictors at all
    NoPredictors,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { required, actual } => write!(
                f,
                "insufficient data: {} usable observations, {} required",
                actual, required
            ),
            Self::NoPredictors => write!(f, "regression requested with no predictors"),
        }
    }
}

impl std::error::Error for EngineError {}
