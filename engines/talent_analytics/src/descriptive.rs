// Descriptive statistics over employee score series
//
// Everything else in the engine builds on these primitives. All functions
// tolerate empty or degenerate input by returning a defined neutral value
// (0 for the scalar statistics) instead of failing, because source data
// frequently has incomplete cohorts.

use serde::Serialize;

// ============================================================================
// CENTRAL TENDENCY & DISPERSION
// ============================================================================

/// Arithmetic mean; empty series → 0
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; an even-length series averages the two middle order statistics
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population variance (divide by N, not N-1)
///
/// The dataset is the full population of evaluated employees, not a sample,
/// so no Bessel correction is applied.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub fn standard_deviation(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

// ============================================================================
// DISTRIBUTION SHAPE
// ============================================================================

/// Third standardized moment
///
/// Needs at least 3 values and nonzero spread; below that the denominator
/// degenerates and the result is defined as 0.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return 0.0;
    }

    let m = mean(values);
    let sd = standard_deviation(values);
    if sd < 1e-12 {
        return 0.0;
    }

    values.iter().map(|v| ((v - m) / sd).powi(3)).sum::<f64>() / n as f64
}

/// Excess kurtosis (fourth standardized moment minus 3, so normal ≈ 0)
///
/// Needs at least 4 values and nonzero spread; 0 otherwise.
pub fn kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return 0.0;
    }

    let m = mean(values);
    let sd = standard_deviation(values);
    if sd < 1e-12 {
        return 0.0;
    }

    values.iter().map(|v| ((v - m) / sd).powi(4)).sum::<f64>() / n as f64 - 3.0
}

// ============================================================================
// PERCENTILES & RANKS
// ============================================================================

/// Percentile by linear interpolation between order statistics, p ∈ [0, 100]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}

/// Q3 − Q1
pub fn interquartile_range(values: &[f64]) -> f64 {
    percentile(values, 75.0) - percentile(values, 25.0)
}

/// Z-scores (x − mean) / std
///
/// A constant series standardizes to all zeros, never NaN.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = standard_deviation(values);
    if sd < 1e-12 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - m) / sd).collect()
}

/// Percentile rank of every value: the percentage of the series below it,
/// with ties counted as half-ranked (mean-rank convention)
///
/// Used to classify business units into top / average / bottom tertiles.
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    values
        .iter()
        .map(|x| {
            let below = values.iter().filter(|v| **v < *x).count() as f64;
            let ties = values.iter().filter(|v| **v == *x).count() as f64;
            (below + 0.5 * ties) / n as f64 * 100.0
        })
        .collect()
}

// ============================================================================
// AGGREGATE SUMMARY
// ============================================================================

/// Full descriptive summary of one score series
#[derive(Debug, Clone, Serialize)]
pub struct StatisticalSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub interpretation: String,
}

/// Compute every descriptive statistic plus a natural-language reading
pub fn statistical_summary(values: &[f64]) -> StatisticalSummary {
    let n = values.len();
    let m = mean(values);
    let med = median(values);
    let sd = standard_deviation(values);
    let skew = skewness(values);
    let kurt = kurtosis(values);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if n == 0 { (0.0, 0.0) } else { (min, max) };

    let interpretation = if n == 0 {
        "Sin datos: cohorte vacía (datos insuficientes).".to_string()
    } else {
        let shape = if skew.abs() < 0.5 {
            "distribución aproximadamente simétrica"
        } else if skew > 0.0 {
            "distribución con asimetría positiva (cola hacia puntajes altos)"
        } else {
            "distribución con asimetría negativa (cola hacia puntajes bajos)"
        };
        format!(
            "Media {:.2}, mediana {:.2}, desviación estándar {:.2}; {}.",
            m, med, sd, shape
        )
    };

    StatisticalSummary {
        n,
        mean: m,
        median: med,
        std_dev: sd,
        min,
        max,
        q1: percentile(values, 25.0),
        q3: percentile(values, 75.0),
        iqr: interquartile_range(values),
        skewness: skew,
        kurtosis: kurt,
        interpretation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.5]), 42.5);
    }

    #[test]
    fn test_mean_reorder_invariant() {
        let a = vec![3.0, 1.0, 4.0, 1.5, 9.0];
        let b = vec![9.0, 1.5, 4.0, 1.0, 3.0];
        assert!((mean(&a) - mean(&b)).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd() {
        let values = vec![1.0, 3.0, 2.0, 5.0, 4.0];
        assert_eq!(median(&values), 3.0);
    }

    #[test]
    fn test_median_even() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(median(&values), 2.5);
    }

    #[test]
    fn test_std_constant_series() {
        let values = vec![7.0, 7.0, 7.0, 7.0];
        assert_eq!(standard_deviation(&values), 0.0);
    }

    #[test]
    fn test_standardize_constant_is_zeros() {
        let z = standardize(&[5.0, 5.0, 5.0]);
        assert!(z.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_standardize_mean_zero_std_one() {
        let z = standardize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(mean(&z).abs() < 1e-12);
        assert!((standard_deviation(&z) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_interpolation() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        // rank = 0.25 * 3 = 0.75 → 1 + 0.75 * (2 - 1)
        assert!((percentile(&values, 25.0) - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_50_equals_median() {
        let series: [&[f64]; 3] = [
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[10.0, 20.0, 30.0, 40.0],
            &[2.5],
        ];
        for s in series {
            assert!((percentile(s, 50.0) - median(s)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_iqr() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // Q1 = 2, Q3 = 4
        assert!((interquartile_range(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_skewness_symmetric() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(skewness(&values).abs() < 1e-12);
    }

    #[test]
    fn test_shape_guards() {
        assert_eq!(skewness(&[1.0, 2.0]), 0.0);
        assert_eq!(kurtosis(&[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_percentile_ranks_mean_rank() {
        let ranks = percentile_ranks(&[10.0, 20.0, 30.0]);
        assert!((ranks[0] - 100.0 / 6.0).abs() < 1e-9);
        assert!((ranks[1] - 50.0).abs() < 1e-9);
        assert!((ranks[2] - 250.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_ranks_ties() {
        // Two tied values share the mean rank
        let ranks = percentile_ranks(&[10.0, 10.0, 20.0]);
        assert!((ranks[0] - ranks[1]).abs() < 1e-12);
        assert!((ranks[0] - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        let summary = statistical_summary(&[]);
        assert_eq!(summary.n, 0);
        assert_eq!(summary.mean, 0.0);
        assert!(summary.interpretation.contains("datos insuficientes"));
    }

    #[test]
    fn test_summary_values() {
        let summary = statistical_summary(&[60.0, 70.0, 80.0, 90.0]);
        assert_eq!(summary.n, 4);
        assert!((summary.mean - 75.0).abs() < 1e-12);
        assert!((summary.median - 75.0).abs() < 1e-12);
        assert_eq!(summary.min, 60.0);
        assert_eq!(summary.max, 90.0);
    }
}
