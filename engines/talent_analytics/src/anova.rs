// One-way analysis of variance across named groups
//
// Classic between/within sum-of-squares decomposition. Fewer than 2
// non-empty groups is a defined "not applicable" condition, not an error:
// a department with a single evaluated employee is expected data.

use std::cmp::Ordering;

use serde::Serialize;

use crate::descriptive::mean;
use crate::interpretation::{f_p_value, Significance, ALPHA};

/// Per-group summary carried in the ANOVA output
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub n: usize,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnovaResult {
    pub groups: Vec<GroupSummary>,
    pub f_statistic: f64,
    pub p_value: f64,
    pub significance: Significance,
    pub interpretation: String,
}

/// One-way ANOVA over named groups
///
/// F = (SSB/(k−1)) / (SSW/(N−k)); the p-value comes from the F-distribution
/// CDF with (k−1, N−k) degrees of freedom. Groups with n < 2 still
/// contribute to the totals but are flagged as low-confidence in the
/// interpretation text. Returns None when fewer than 2 groups are
/// non-empty or no within-group degrees of freedom remain.
pub fn one_way_anova(groups: &[(&str, &[f64])]) -> Option<AnovaResult> {
    let non_empty: Vec<(&str, &[f64])> = groups
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .copied()
        .collect();

    let k = non_empty.len();
    if k < 2 {
        return None;
    }

    let n_total: usize = non_empty.iter().map(|(_, values)| values.len()).sum();
    if n_total <= k {
        return None; // No within-group degrees of freedom
    }

    let grand_mean =
        non_empty.iter().flat_map(|(_, values)| values.iter()).sum::<f64>() / n_total as f64;

    let summaries: Vec<GroupSummary> = non_empty
        .iter()
        .map(|(name, values)| GroupSummary {
            name: name.to_string(),
            n: values.len(),
            mean: mean(values),
        })
        .collect();

    let ss_between: f64 = summaries
        .iter()
        .map(|g| g.n as f64 * (g.mean - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = non_empty
        .iter()
        .zip(&summaries)
        .map(|((_, values), g)| values.iter().map(|x| (x - g.mean).powi(2)).sum::<f64>())
        .sum();

    let df_between = (k - 1) as f64;
    let df_within = (n_total - k) as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    let f_statistic = if ms_within > 0.0 {
        ms_between / ms_within
    } else if ms_between > 0.0 {
        f64::INFINITY // Perfect separation with no within-group spread
    } else {
        0.0
    };

    let p_value = f_p_value(f_statistic, df_between, df_within);
    let significance = Significance::from_p(p_value);

    let mut interpretation = format!(
        "F({}, {}) = {:.2}, p = {:.4}: resultado {} (α = {}).",
        k - 1,
        n_total - k,
        f_statistic,
        p_value,
        significance.label_es(),
        ALPHA
    );

    if significance.is_significant() {
        // Direction of difference implied by the group means
        let hi = summaries
            .iter()
            .max_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal))?;
        let lo = summaries
            .iter()
            .min_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal))?;
        interpretation.push_str(&format!(
            " El grupo \"{}\" (media {:.2}) supera al grupo \"{}\" (media {:.2}).",
            hi.name, hi.mean, lo.name, lo.mean
        ));
    }

    let small: Vec<&str> = summaries
        .iter()
        .filter(|g| g.n < 2)
        .map(|g| g.name.as_str())
        .collect();
    if !small.is_empty() {
        interpretation.push_str(&format!(
            " Grupos con n < 2 (baja confianza): {}.",
            small.join(", ")
        ));
    }

    Some(AnovaResult {
        groups: summaries,
        f_statistic,
        p_value,
        significance,
        interpretation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_groups_not_significant() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let b = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = one_way_anova(&[("a", &a), ("b", &b)]).expect("applicable");

        assert_eq!(result.f_statistic, 0.0);
        assert!(result.p_value > 0.99);
        assert_eq!(result.significance, Significance::NotSignificant);
    }

    #[test]
    fn test_separated_groups_significant() {
        let low = vec![10.0, 11.0, 12.0, 10.5, 11.5];
        let high = vec![50.0, 51.0, 52.0, 50.5, 51.5];
        let result = one_way_anova(&[("ventas", &low), ("sistemas", &high)]).expect("applicable");

        assert!(result.p_value < 0.01);
        assert_eq!(result.significance, Significance::HighlySignificant);
        assert!(result.interpretation.contains("sistemas"));
        assert!(result.interpretation.contains("ventas"));
    }

    #[test]
    fn test_fewer_than_two_groups_not_applicable() {
        let a = vec![1.0, 2.0, 3.0];
        let empty: Vec<f64> = Vec::new();
        assert!(one_way_anova(&[("a", &a)]).is_none());
        assert!(one_way_anova(&[("a", &a), ("b", &empty)]).is_none());
        assert!(one_way_anova(&[]).is_none());
    }

    #[test]
    fn test_singleton_group_flagged_low_confidence() {
        let a = vec![10.0, 12.0, 11.0, 13.0];
        let b = vec![30.0];
        let result = one_way_anova(&[("a", &a), ("b", &b)]).expect("applicable");

        assert_eq!(result.groups[1].n, 1);
        assert!(result.interpretation.contains("baja confianza"));
        assert!(result.interpretation.contains("b"));
    }

    #[test]
    fn test_group_summaries() {
        let a = vec![10.0, 20.0];
        let b = vec![30.0, 40.0];
        let result = one_way_anova(&[("a", &a), ("b", &b)]).expect("applicable");

        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].name, "a");
        assert!((result.groups[0].mean - 15.0).abs() < 1e-12);
        assert!((result.groups[1].mean - 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_within_spread_perfect_separation() {
        let a = vec![10.0, 10.0];
        let b = vec![20.0, 20.0];
        let result = one_way_anova(&[("a", &a), ("b", &b)]).expect("applicable");

        assert_eq!(result.f_statistic, f64::INFINITY);
        assert_eq!(result.p_value, 0.0);
        assert_eq!(result.significance, Significance::HighlySignificant);
    }
}
