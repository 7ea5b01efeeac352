// Predictive factor ranking
//
// Composition over the correlation module: runs Pearson correlation for
// each candidate predictor against the target outcome and hands back a
// ready-ranked list. No new math here.

use serde::Serialize;

use crate::correlation::{interpret_correlation, pearson_correlation};
use crate::interpretation::Direction;

#[derive(Debug, Clone, Serialize)]
pub struct PredictiveFactor {
    pub name: String,
    pub correlation: f64,
    /// |r| × 100
    pub importance: f64,
    pub direction: Direction,
    pub description: String,
}

/// Rank candidate predictors by importance against the target, descending
pub fn rank_predictive_factors(
    target: &[f64],
    candidates: &[(&str, &[f64])],
) -> Vec<PredictiveFactor> {
    let mut factors: Vec<PredictiveFactor> = candidates
        .iter()
        .map(|(name, series)| {
            let r = pearson_correlation(target, series);
            let reading = interpret_correlation(r);
            PredictiveFactor {
                name: name.to_string(),
                correlation: r,
                importance: r.abs() * 100.0,
                direction: reading.direction,
                description: reading.description,
            }
        })
        .collect();

    factors.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    factors
}
