// Aggregate organizational insights built on the engine primitives
//
// The computations the report builder consumes directly: talent grid,
// engagement score, unit benchmarking, competency gaps, and labels for the
// clustering output.

use serde::Serialize;

use crate::clustering::KMeansResult;
use crate::descriptive::{mean, percentile_ranks};

// ============================================================================
// NINE-BOX TALENT GRID
// ============================================================================

// Band cut-points on the 0-100 evaluation scale
pub const BAND_LOW_MAX: f64 = 40.0;
pub const BAND_MEDIUM_MAX: f64 = 70.0;

/// Low / medium / high band on a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn from_score(score: f64) -> Self {
        if score < BAND_LOW_MAX {
            Self::Low
        } else if score < BAND_MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// One of the nine performance × potential cells
#[derive(Debug, Clone, Serialize)]
pub struct NineBoxCell {
    pub performance: Band,
    pub potential: Band,
    pub label: &'static str,
}

/// Classify one employee into the 3×3 talent grid
pub fn nine_box(performance: f64, potential: f64) -> NineBoxCell {
    let perf = Band::from_score(performance);
    let pot = Band::from_score(potential);

    let label = match (perf, pot) {
        (Band::High, Band::High) => "Talento Clave",
        (Band::High, Band::Medium) => "Alto Desempeño",
        (Band::High, Band::Low) => "Especialista Consolidado",
        (Band::Medium, Band::High) => "Alto Potencial",
        (Band::Medium, Band::Medium) => "Desempeño Medio",
        (Band::Medium, Band::Low) => "Contribuidor Estable",
        (Band::Low, Band::High) => "Diamante en Bruto",
        (Band::Low, Band::Medium) => "En Desarrollo",
        (Band::Low, Band::Low) => "Riesgo",
    };

    NineBoxCell {
        performance: perf,
        potential: pot,
        label,
    }
}

// ============================================================================
// eNPS
// ============================================================================

/// Employee Net Promoter Score from 0-10 satisfaction ratings
#[derive(Debug, Clone, Serialize)]
pub struct EnpsResult {
    /// %promoters − %detractors, in [-100, 100]
    pub score: f64,
    pub promoters_pct: f64,
    pub passives_pct: f64,
    pub detractors_pct: f64,
    pub n: usize,
}

/// Promoters rate ≥ 9, detractors ≤ 6; an empty cohort scores 0
pub fn enps(ratings: &[f64]) -> EnpsResult {
    let n = ratings.len();
    if n == 0 {
        return EnpsResult {
            score: 0.0,
            promoters_pct: 0.0,
            passives_pct: 0.0,
            detractors_pct: 0.0,
            n: 0,
        };
    }

    let promoters = ratings.iter().filter(|&&r| r >= 9.0).count() as f64;
    let detractors = ratings.iter().filter(|&&r| r <= 6.0).count() as f64;
    let promoters_pct = promoters / n as f64 * 100.0;
    let detractors_pct = detractors / n as f64 * 100.0;

    EnpsResult {
        score: promoters_pct - detractors_pct,
        promoters_pct,
        passives_pct: 100.0 - promoters_pct - detractors_pct,
        detractors_pct,
        n,
    }
}

// ============================================================================
// UNIT BENCHMARKING
// ============================================================================

// Tertile cut-points on the percentile-rank scale
pub const TERTILE_TOP_MIN: f64 = 200.0 / 3.0;
pub const TERTILE_BOTTOM_MAX: f64 = 100.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkTier {
    Top,
    Average,
    Bottom,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitBenchmark {
    pub name: String,
    pub score: f64,
    pub percentile_rank: f64,
    pub tier: BenchmarkTier,
}

/// Classify business units into top / average / bottom tertiles by
/// percentile rank of their score; best unit first
pub fn benchmark_units(units: &[(&str, f64)]) -> Vec<UnitBenchmark> {
    let scores: Vec<f64> = units.iter().map(|(_, score)| *score).collect();
    let ranks = percentile_ranks(&scores);

    let mut out: Vec<UnitBenchmark> = units
        .iter()
        .zip(ranks)
        .map(|((name, score), rank)| {
            let tier = if rank >= TERTILE_TOP_MIN {
                BenchmarkTier::Top
            } else if rank < TERTILE_BOTTOM_MAX {
                BenchmarkTier::Bottom
            } else {
                BenchmarkTier::Average
            };
            UnitBenchmark {
                name: name.to_string(),
                score: *score,
                percentile_rank: rank,
                tier,
            }
        })
        .collect();

    out.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    out
}

// ============================================================================
// TALENT SEGMENTS
// ============================================================================

// Labels for the clustering output, strongest centroid first
const SEGMENT_LABELS: [&str; 4] = [
    "Talento Clave",
    "Alto Desempeño",
    "En Desarrollo",
    "Requiere Atención",
];

#[derive(Debug, Clone, Serialize)]
pub struct TalentSegment {
    pub label: String,
    pub centroid: Vec<f64>,
    pub size: usize,
    pub members: Vec<usize>,
}

/// Attach deterministic labels to clusters in output order
///
/// The clustering output is already sorted strongest-centroid first, so
/// the same input always yields the same labeling.
pub fn label_segments(result: &KMeansResult) -> Vec<TalentSegment> {
    result
        .clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| {
            let label = if result.clusters.len() <= SEGMENT_LABELS.len() {
                SEGMENT_LABELS[i].to_string()
            } else {
                format!("Segmento {}", i + 1)
            };
            TalentSegment {
                label,
                centroid: cluster.centroid.clone(),
                size: cluster.size,
                members: cluster.members.clone(),
            }
        })
        .collect()
}

// ============================================================================
// COMPETENCY GAP ANALYSIS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CompetencyGap {
    pub name: String,
    pub mean_score: f64,
    pub target: f64,
    /// target − mean; positive when the competency falls short
    pub gap: f64,
}

/// Per-competency mean vs. the organizational target, widest gap first
pub fn gap_analysis(competencies: &[(&str, &[f64])], target: f64) -> Vec<CompetencyGap> {
    let mut gaps: Vec<CompetencyGap> = competencies
        .iter()
        .map(|(name, values)| {
            let mean_score = mean(values);
            CompetencyGap {
                name: name.to_string(),
                mean_score,
                target,
                gap: target - mean_score,
            }
        })
        .collect();

    gaps.sort_by(|a, b| b.gap.partial_cmp(&a.gap).unwrap_or(std::cmp::Ordering::Equal));
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::{k_means, Projection, DEFAULT_MAX_ITERATIONS};

    #[test]
    fn test_nine_box_corners() {
        assert_eq!(nine_box(85.0, 90.0).label, "Talento Clave");
        assert_eq!(nine_box(20.0, 15.0).label, "Riesgo");
        assert_eq!(nine_box(50.0, 80.0).label, "Alto Potencial");
        assert_eq!(nine_box(30.0, 50.0).label, "En Desarrollo");
    }

    #[test]
    fn test_band_cut_points() {
        assert_eq!(Band::from_score(39.9), Band::Low);
        assert_eq!(Band::from_score(40.0), Band::Medium);
        assert_eq!(Band::from_score(70.0), Band::High);
    }

    #[test]
    fn test_enps() {
        // 2 promoters, 1 passive, 1 detractor over 4 ratings
        let result = enps(&[9.0, 10.0, 7.5, 4.0]);
        assert!((result.promoters_pct - 50.0).abs() < 1e-9);
        assert!((result.detractors_pct - 25.0).abs() < 1e-9);
        assert!((result.passives_pct - 25.0).abs() < 1e-9);
        assert!((result.score - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_enps_empty() {
        let result = enps(&[]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.n, 0);
    }

    #[test]
    fn test_benchmark_tertiles() {
        let benchmarks = benchmark_units(&[("a", 90.0), ("b", 70.0), ("c", 50.0)]);

        assert_eq!(benchmarks[0].name, "a");
        assert_eq!(benchmarks[0].tier, BenchmarkTier::Top);
        assert_eq!(benchmarks[1].tier, BenchmarkTier::Average);
        assert_eq!(benchmarks[2].tier, BenchmarkTier::Bottom);
    }

    #[test]
    fn test_segment_labels() {
        let points = vec![(90.0, 85.0), (88.0, 90.0), (20.0, 25.0), (22.0, 18.0)];
        let fx: [fn(&(f64, f64)) -> f64; 2] = [|p| p.0, |p| p.1];
        let extractors: [&dyn Projection<(f64, f64)>; 2] = [&fx[0], &fx[1]];
        let result = k_means(&points, 2, &extractors, DEFAULT_MAX_ITERATIONS);

        let segments = label_segments(&result);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Talento Clave");
        assert_eq!(segments[1].label, "Alto Desempeño");
        assert!(segments[0].centroid[0] > segments[1].centroid[0]);
    }

    #[test]
    fn test_gap_analysis_sorted() {
        let comms = vec![60.0, 65.0, 70.0];
        let leadership = vec![40.0, 45.0, 50.0];
        let gaps = gap_analysis(&[("comunicacion", &comms), ("liderazgo", &leadership)], 75.0);

        assert_eq!(gaps[0].name, "liderazgo");
        assert!((gaps[0].gap - 30.0).abs() < 1e-9);
        assert!(gaps[0].gap > gaps[1].gap);
    }
}
