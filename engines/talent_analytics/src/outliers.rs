// Tukey IQR outlier detection
//
// Works over arbitrary record types via a numeric extractor so the
// classification stays decoupled from business schema. The engine only
// classifies mild outliers (1.5×IQR fences), not the 3×IQR extreme tier.

use serde::Serialize;

use crate::descriptive::{mean, percentile, standard_deviation};

// Tukey fence multiplier for mild outliers
const IQR_FENCE: f64 = 1.5;

/// Mild Tukey fences derived from the reference series
///
/// Computed once per detection run and reused to classify every point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutlierBounds {
    pub lower_mild: f64,
    pub upper_mild: f64,
}

/// Which fence a flagged record crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierDirection {
    High,
    Low,
}

/// One flagged record
#[derive(Debug, Clone, Serialize)]
pub struct OutlierPoint {
    /// Index into the input slice
    pub index: usize,
    pub value: f64,
    pub direction: OutlierDirection,
    /// Whole-population z-score so callers can rank severity
    pub z_score: f64,
}

/// Detection output: fences, flagged records, aggregate counts
#[derive(Debug, Clone, Serialize)]
pub struct OutlierReport {
    pub bounds: OutlierBounds,
    pub outliers: Vec<OutlierPoint>,
    pub total_records: usize,
    pub high_count: usize,
    pub low_count: usize,
    pub outlier_percentage: f64,
}

/// Classify mild outliers of `extractor(record)` across all records
///
/// If the IQR is zero (no dispersion) nothing is flagged regardless of the
/// raw value spread.
pub fn detect_outliers_iqr<T, F>(records: &[T], extractor: F) -> OutlierReport
where
    F: Fn(&T) -> f64,
{
    let values: Vec<f64> = records.iter().map(&extractor).collect();

    let q1 = percentile(&values, 25.0);
    let q3 = percentile(&values, 75.0);
    let iqr = q3 - q1;
    let bounds = OutlierBounds {
        lower_mild: q1 - IQR_FENCE * iqr,
        upper_mild: q3 + IQR_FENCE * iqr,
    };

    let m = mean(&values);
    let sd = standard_deviation(&values);

    let mut outliers = Vec::new();
    if iqr > 0.0 {
        for (index, &value) in values.iter().enumerate() {
            let direction = if value > bounds.upper_mild {
                OutlierDirection::High
            } else if value < bounds.lower_mild {
                OutlierDirection::Low
            } else {
                continue;
            };

            let z_score = if sd > 0.0 { (value - m) / sd } else { 0.0 };
            outliers.push(OutlierPoint {
                index,
                value,
                direction,
                z_score,
            });
        }
    }

    let high_count = outliers
        .iter()
        .filter(|o| o.direction == OutlierDirection::High)
        .count();
    let low_count = outliers.len() - high_count;
    let outlier_percentage = if records.is_empty() {
        0.0
    } else {
        outliers.len() as f64 / records.len() as f64 * 100.0
    };

    OutlierReport {
        bounds,
        outliers,
        total_records: records.len(),
        high_count,
        low_count,
        outlier_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_high_outlier() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let report = detect_outliers_iqr(&values, |v| *v);

        assert_eq!(report.outliers.len(), 1);
        let flagged = &report.outliers[0];
        assert_eq!(flagged.index, 5);
        assert_eq!(flagged.value, 100.0);
        assert_eq!(flagged.direction, OutlierDirection::High);
        assert!(flagged.z_score > 2.0);
        assert_eq!(report.high_count, 1);
        assert_eq!(report.low_count, 0);
    }

    #[test]
    fn test_clean_series_flags_nothing() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let report = detect_outliers_iqr(&values, |v| *v);
        assert!(report.outliers.is_empty());
        assert_eq!(report.outlier_percentage, 0.0);
    }

    #[test]
    fn test_zero_iqr_flags_nothing() {
        // No dispersion in the quartiles: nothing is flagged even though the
        // raw spread is wild
        let values = vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 500.0];
        let q1 = percentile(&values, 25.0);
        let q3 = percentile(&values, 75.0);
        assert_eq!(q3 - q1, 0.0);

        let report = detect_outliers_iqr(&values, |v| *v);
        assert!(report.outliers.is_empty());
    }

    #[test]
    fn test_extractor_over_records() {
        struct Employee {
            score: f64,
        }
        let records: Vec<Employee> = [70.0, 72.0, 71.0, 69.0, 68.0, 5.0]
            .iter()
            .map(|s| Employee { score: *s })
            .collect();

        let report = detect_outliers_iqr(&records, |e| e.score);
        assert_eq!(report.total_records, 6);
        assert_eq!(report.low_count, 1);
        assert_eq!(report.outliers[0].index, 5);
        assert!((report.outlier_percentage - 100.0 / 6.0).abs() < 1e-9);
    }
}
