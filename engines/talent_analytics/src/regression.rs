// Ordinary least-squares multiple linear regression
//
// Predictor sets here are small (p ≪ n) but can be collinear, e.g. age and
// tenure, so the normal equations are solved by Gaussian elimination with
// partial pivoting and a singularity guard.

use serde::Serialize;

use crate::interpretation::{f_p_value, Significance};
use crate::EngineError;

// Minimum usable rows beyond the predictor count; fewer is a caller bug
const MIN_EXTRA_ROWS: usize = 5;

/// Fit summary for one model
#[derive(Debug, Clone, Serialize)]
pub struct RegressionResult {
    pub intercept: f64,
    /// (predictor name, coefficient), in input order
    pub coefficients: Vec<(String, f64)>,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    pub f_statistic: f64,
    pub p_value: f64,
    pub significance: Significance,
    /// Rows actually used after dropping non-finite values
    pub n_observations: usize,
    pub interpretation: String,
}

/// Fit `target` against the named predictor series
///
/// Rows where the target or any predictor is non-finite are excluded
/// pairwise before fitting (different predictors may have different NaN
/// patterns in source data). Requires at least `p + 5` usable rows or
/// returns `EngineError::InsufficientData`; a singular system degrades to a
/// zeroed fit carrying a "datos insuficientes" note instead of aborting.
pub fn multiple_regression(
    target: &[f64],
    predictors: &[(&str, &[f64])],
) -> Result<RegressionResult, EngineError> {
    let p = predictors.len();
    if p == 0 {
        return Err(EngineError::NoPredictors);
    }

    // Pairwise-complete rows only
    let mut rows: Vec<usize> = Vec::with_capacity(target.len());
    'rows: for i in 0..target.len() {
        if !target[i].is_finite() {
            continue;
        }
        for (_, series) in predictors {
            match series.get(i) {
                Some(v) if v.is_finite() => {}
                _ => continue 'rows,
            }
        }
        rows.push(i);
    }

    let n = rows.len();
    let required = p + MIN_EXTRA_ROWS;
    if n < required {
        return Err(EngineError::InsufficientData {
            required,
            actual: n,
        });
    }

    // Normal equations (XᵀX) β = Xᵀy with an intercept column
    let dim = p + 1;
    let mut xtx = vec![vec![0.0; dim]; dim];
    let mut xty = vec![0.0; dim];
    let mut x_row = vec![0.0; dim];
    for &i in &rows {
        x_row[0] = 1.0;
        for (j, (_, series)) in predictors.iter().enumerate() {
            x_row[j + 1] = series[i];
        }
        let y = target[i];
        for a in 0..dim {
            xty[a] += x_row[a] * y;
            for b in 0..dim {
                xtx[a][b] += x_row[a] * x_row[b];
            }
        }
    }

    let beta = match solve_linear_system(&mut xtx, &mut xty) {
        Some(beta) => beta,
        None => return Ok(singular_fit(predictors, n)),
    };

    // R² from residual vs total sum of squares
    let y_mean = rows.iter().map(|&i| target[i]).sum::<f64>() / n as f64;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for &i in &rows {
        let mut fitted = beta[0];
        for (j, (_, series)) in predictors.iter().enumerate() {
            fitted += beta[j + 1] * series[i];
        }
        let resid = target[i] - fitted;
        ss_res += resid * resid;
        ss_tot += (target[i] - y_mean) * (target[i] - y_mean);
    }
    let r_squared = if ss_tot > 0.0 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let df_model = p as f64;
    let df_resid = (n - p - 1) as f64;
    let adjusted_r_squared = 1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / df_resid;

    let f_statistic = if r_squared < 1.0 {
        (r_squared / df_model) / ((1.0 - r_squared) / df_resid)
    } else {
        f64::INFINITY
    };
    let p_value = f_p_value(f_statistic, df_model, df_resid);
    let significance = Significance::from_p(p_value);

    let interpretation = format!(
        "Modelo con {} predictores sobre {} observaciones: R² = {:.3} ({:.1}% de la varianza explicada), F = {:.2}, resultado {}.",
        p,
        n,
        r_squared,
        r_squared * 100.0,
        f_statistic,
        significance.label_es()
    );

    Ok(RegressionResult {
        intercept: beta[0],
        coefficients: predictors
            .iter()
            .zip(beta[1..].iter())
            .map(|((name, _), b)| (name.to_string(), *b))
            .collect(),
        r_squared,
        adjusted_r_squared,
        f_statistic,
        p_value,
        significance,
        n_observations: n,
        interpretation,
    })
}

// Singular design matrix: degrade to a zeroed fit instead of aborting, so
// the surrounding report can still render with a qualitative note
fn singular_fit(predictors: &[(&str, &[f64])], n: usize) -> RegressionResult {
    RegressionResult {
        intercept: 0.0,
        coefficients: predictors
            .iter()
            .map(|(name, _)| (name.to_string(), 0.0))
            .collect(),
        r_squared: 0.0,
        adjusted_r_squared: 0.0,
        f_statistic: 0.0,
        p_value: 1.0,
        significance: Significance::NotSignificant,
        n_observations: n,
        interpretation: "Modelo no ajustado: matriz de diseño singular (datos insuficientes)."
            .to_string(),
    }
}

/// Solve A x = b by Gaussian elimination with partial pivoting
///
/// Returns None if the matrix is singular. A and b are consumed as scratch
/// space.
fn solve_linear_system(a: &mut [Vec<f64>], b: &mut [f64]) -> Option<Vec<f64>> {
    let dim = b.len();

    // Forward elimination with partial pivoting
    for col in 0..dim {
        // Pivot: largest absolute value in the column
        let mut max_row = col;
        let mut max_val = a[col][col].abs();
        for row in (col + 1)..dim {
            let val = a[row][col].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < 1e-10 {
            return None; // Singular
        }

        if max_row != col {
            a.swap(col, max_row);
            b.swap(col, max_row);
        }

        let pivot = a[col][col];
        for row in (col + 1)..dim {
            let factor = a[row][col] / pivot;
            for j in col..dim {
                a[row][j] -= factor * a[col][j];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; dim];
    for col in (0..dim).rev() {
        let mut sum = b[col];
        for j in (col + 1)..dim {
            sum -= a[col][j] * x[j];
        }
        x[col] = sum / a[col][col];
    }

    Some(x)
}
