// Pearson correlation and its qualitative reading

use serde::Serialize;

use crate::descriptive::mean;
use crate::interpretation::{Direction, Strength};

/// Pearson correlation coefficient over index-aligned pairs
///
/// Zero variance on either side is treated as "no detectable linear
/// relationship" and returns 0 instead of propagating NaN.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }

    let x = &x[..n];
    let y = &y[..n];
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx < 1e-12 || syy < 1e-12 {
        return 0.0;
    }

    sxy / (sxx * syy).sqrt()
}

/// Qualitative reading of a correlation coefficient
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationInterpretation {
    pub r: f64,
    pub strength: Strength,
    pub direction: Direction,
    pub description: String,
}

/// Classify r into the shared strength/direction vocabulary
pub fn interpret_correlation(r: f64) -> CorrelationInterpretation {
    let strength = Strength::from_abs_r(r.abs());
    let direction = Direction::from_r(r);

    let description = if strength == Strength::Negligible {
        format!(
            "Correlación insignificante (r = {:.2}): sin relación lineal detectable.",
            r
        )
    } else {
        format!(
            "Correlación {} {} (r = {:.2}).",
            direction.label_es(),
            strength.label_es(),
            r
        )
    };

    CorrelationInterpretation {
        r,
        strength,
        direction,
        description,
    }
}
