// Report assembly: runs every engine module over the evaluation export and
// collects the results into one serializable document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use talent_analytics::anova::{one_way_anova, AnovaResult};
use talent_analytics::clustering::{k_means, Projection, DEFAULT_MAX_ITERATIONS};
use talent_analytics::descriptive::{statistical_summary, StatisticalSummary};
use talent_analytics::insights::{
    benchmark_units, enps, label_segments, nine_box, EnpsResult, TalentSegment, UnitBenchmark,
};
use talent_analytics::outliers::{detect_outliers_iqr, OutlierReport};
use talent_analytics::predictive::{rank_predictive_factors, PredictiveFactor};
use talent_analytics::regression::{multiple_regression, RegressionResult};
use talent_analytics::risk::{
    calculate_risk_score, RiskDirection, RiskFactor, RiskLevel, RiskScore,
};

// The report pipeline only fits a regression once the cohort is large
// enough for 2-3 predictors
const MIN_REGRESSION_ROWS: usize = 20;

// Talent segmentation granularity
const SEGMENT_COUNT: usize = 4;

/// Employee evaluation record (matches the export from the data layer)
#[derive(Debug, Deserialize)]
pub struct EmployeeRecord {
    pub id: u32,
    #[serde(default)]
    pub department: String,
    /// 0-100 overall evaluation score
    #[serde(default)]
    pub performance: f64,
    /// 0-100 potential assessment
    #[serde(default)]
    pub potential: f64,
    #[serde(default)]
    pub tenure_years: f64,
    #[serde(default)]
    pub training_hours: f64,
    /// 0-10 survey rating
    #[serde(default)]
    pub satisfaction: f64,
    #[serde(default)]
    pub absence_days: f64,
}

/// One employee flagged by the risk scorer
#[derive(Debug, Serialize)]
pub struct EmployeeRisk {
    pub id: u32,
    pub department: String,
    pub risk: RiskScore,
}

/// The full organizational report
#[derive(Debug, Serialize)]
pub struct OrgReport {
    pub total_employees: usize,
    pub performance_summary: StatisticalSummary,
    pub department_anova: Option<AnovaResult>,
    pub predictive_factors: Vec<PredictiveFactor>,
    /// None when the cohort is too small for a stable fit
    pub performance_model: Option<RegressionResult>,
    pub outliers: OutlierReport,
    pub high_risk_employees: Vec<EmployeeRisk>,
    pub segments: Vec<TalentSegment>,
    pub nine_box_distribution: Vec<(String, usize)>,
    pub enps: EnpsResult,
    pub department_benchmark: Vec<UnitBenchmark>,
}

/// Risk factors for one employee, weighted the way the evaluation report
/// presents them
fn risk_factors(record: &EmployeeRecord) -> Vec<RiskFactor> {
    vec![
        RiskFactor {
            name: "performance".to_string(),
            value: record.performance,
            weight: 0.4,
            threshold: 60.0,
            direction: RiskDirection::LowerIsRisk,
        },
        RiskFactor {
            name: "satisfaction".to_string(),
            value: record.satisfaction,
            weight: 0.3,
            threshold: 6.0,
            direction: RiskDirection::LowerIsRisk,
        },
        RiskFactor {
            name: "absence_days".to_string(),
            value: record.absence_days,
            weight: 0.3,
            threshold: 10.0,
            direction: RiskDirection::HigherIsRisk,
        },
    ]
}

pub fn build_report(records: &[EmployeeRecord]) -> OrgReport {
    let performance: Vec<f64> = records.iter().map(|r| r.performance).collect();
    let tenure: Vec<f64> = records.iter().map(|r| r.tenure_years).collect();
    let training: Vec<f64> = records.iter().map(|r| r.training_hours).collect();
    let satisfaction: Vec<f64> = records.iter().map(|r| r.satisfaction).collect();

    // Group performance by department (BTreeMap for stable report order)
    let mut by_department: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_department
            .entry(record.department.as_str())
            .or_default()
            .push(record.performance);
    }
    let groups: Vec<(&str, &[f64])> = by_department
        .iter()
        .map(|(name, values)| (*name, values.as_slice()))
        .collect();

    let department_anova = one_way_anova(&groups);

    let predictive_factors = rank_predictive_factors(
        &performance,
        &[
            ("tenure_years", &tenure),
            ("training_hours", &training),
            ("satisfaction", &satisfaction),
        ],
    );

    // Insufficient rows degrade to "no model" rather than aborting the report
    let performance_model = if records.len() >= MIN_REGRESSION_ROWS {
        multiple_regression(
            &performance,
            &[
                ("tenure_years", &tenure),
                ("training_hours", &training),
                ("satisfaction", &satisfaction),
            ],
        )
        .ok()
    } else {
        None
    };

    let outliers = detect_outliers_iqr(records, |r: &EmployeeRecord| r.performance);

    let mut high_risk_employees: Vec<EmployeeRisk> = records
        .iter()
        .filter_map(|record| {
            let risk = calculate_risk_score(&risk_factors(record));
            (risk.risk_level >= RiskLevel::Alto).then(|| EmployeeRisk {
                id: record.id,
                department: record.department.clone(),
                risk,
            })
        })
        .collect();
    high_risk_employees.sort_by(|a, b| {
        b.risk
            .total_score
            .partial_cmp(&a.risk.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Talent segmentation over performance × potential
    let perf_axis = |r: &EmployeeRecord| r.performance;
    let pot_axis = |r: &EmployeeRecord| r.potential;
    let extractors: [&dyn Projection<EmployeeRecord>; 2] = [&perf_axis, &pot_axis];
    let clusters = k_means(records, SEGMENT_COUNT, &extractors, DEFAULT_MAX_ITERATIONS);
    let segments = label_segments(&clusters);

    // Nine-box cell counts
    let mut grid: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let cell = nine_box(record.performance, record.potential);
        *grid.entry(cell.label.to_string()).or_default() += 1;
    }
    let nine_box_distribution: Vec<(String, usize)> = grid.into_iter().collect();

    let enps_result = enps(&satisfaction);

    // Department benchmark on mean performance
    let department_scores: Vec<(&str, f64)> = by_department
        .iter()
        .map(|(name, values)| {
            let score = values.iter().sum::<f64>() / values.len().max(1) as f64;
            (*name, score)
        })
        .collect();
    let department_benchmark = benchmark_units(&department_scores);

    OrgReport {
        total_employees: records.len(),
        performance_summary: statistical_summary(&performance),
        department_anova,
        predictive_factors,
        performance_model,
        outliers,
        high_risk_employees,
        segments,
        nine_box_distribution,
        enps: enps_result,
        department_benchmark,
    }
}
