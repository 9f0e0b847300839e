//! Confidence-weighted combination of method-level correlations.

use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;
use crate::correlation::MethodKind;
use crate::correlation::dignity::{DignityCorrelationResult, DignityFinding};
use crate::correlation::pathway::{PathwayCorrelationResult, PathwayFinding};
use crate::correlation::polygenic::{PolygenicCorrelationResult, TraitCorrelation};
use crate::genetics::GeneticProfile;
use crate::stats::{mean, std_population};

pub const DEFAULT_TOP_N: usize = 5;
const ADEQUATE_VARIANTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodWeights {
    pub dignity: f64,
    pub pathway: f64,
    pub polygenic: f64,
}

impl Default for MethodWeights {
    fn default() -> Self {
        Self {
            dignity: 0.4,
            pathway: 0.35,
            polygenic: 0.25,
        }
    }
}

impl MethodWeights {
    pub fn weight(&self, kind: MethodKind) -> f64 {
        match kind {
            MethodKind::Dignity => self.dignity,
            MethodKind::Pathway => self.pathway,
            MethodKind::Polygenic => self.polygenic,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub kind: MethodKind,
    pub correlation: f64,
    pub p_value: Option<f64>,
    pub confidence: Option<f64>,
    pub method_weight: f64,
}

impl MethodSummary {
    /// Method weight scaled by the method's own confidence, never negative.
    pub fn effective_weight(&self) -> f64 {
        let base = self.method_weight.max(0.0);
        match self.confidence {
            Some(c) if c.is_finite() => base * c.max(0.0),
            _ => base,
        }
    }
}

pub fn dignity_summary(r: &DignityCorrelationResult, weights: &MethodWeights) -> MethodSummary {
    MethodSummary {
        kind: MethodKind::Dignity,
        correlation: r.correlation,
        p_value: Some(r.p_value),
        confidence: None,
        method_weight: weights.dignity,
    }
}

pub fn pathway_summary(r: &PathwayCorrelationResult, weights: &MethodWeights) -> MethodSummary {
    MethodSummary {
        kind: MethodKind::Pathway,
        correlation: r.overall_correlation,
        p_value: Some(r.p_value),
        confidence: Some(r.confidence_level),
        method_weight: weights.pathway,
    }
}

pub fn polygenic_summary(
    r: &PolygenicCorrelationResult,
    weights: &MethodWeights,
) -> MethodSummary {
    MethodSummary {
        kind: MethodKind::Polygenic,
        correlation: r.overall_correlation,
        p_value: None,
        confidence: Some(r.confidence),
        method_weight: weights.polygenic,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum FindingDetail {
    Dignity(DignityFinding),
    Pathway(PathwayFinding),
    Polygenic(TraitCorrelation),
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub method: MethodKind,
    pub finding_type: &'static str,
    pub strength: f64,
    pub detail: FindingDetail,
}

impl Finding {
    pub fn label(&self) -> String {
        match &self.detail {
            FindingDetail::Dignity(d) => format!(
                "{} in {} (dignity {}, genetic {:.3})",
                d.planet.title(),
                d.sign,
                d.dignity_score,
                d.genetic_score
            ),
            FindingDetail::Pathway(p) => format!(
                "{} (correlation {:.3}, significance {:.2})",
                p.planet.title(),
                p.correlation,
                p.significance
            ),
            FindingDetail::Polygenic(t) => format!(
                "{} ~ {} (correlation {:.3}, confidence {:.2})",
                t.trait_name,
                t.planet.title(),
                t.correlation,
                t.confidence
            ),
        }
    }
}

/// Individually notable findings from every method, unsorted.
pub fn collect_findings(
    dignity: Option<&DignityCorrelationResult>,
    pathway: Option<&PathwayCorrelationResult>,
    polygenic: Option<&PolygenicCorrelationResult>,
) -> Vec<Finding> {
    let mut out = Vec::new();
    if let Some(d) = dignity {
        for f in &d.significant_correlations {
            out.push(Finding {
                method: MethodKind::Dignity,
                finding_type: MethodKind::Dignity.finding_type(),
                strength: f.strength,
                detail: FindingDetail::Dignity(f.clone()),
            });
        }
    }
    if let Some(p) = pathway {
        for f in &p.strongest_correlations {
            out.push(Finding {
                method: MethodKind::Pathway,
                finding_type: MethodKind::Pathway.finding_type(),
                strength: f.strength,
                detail: FindingDetail::Pathway(f.clone()),
            });
        }
    }
    if let Some(g) = polygenic {
        for t in g.trait_correlations.values() {
            out.push(Finding {
                method: MethodKind::Polygenic,
                finding_type: MethodKind::Polygenic.finding_type(),
                strength: t.strength(),
                detail: FindingDetail::Polygenic(t.clone()),
            });
        }
    }
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaResult {
    pub combined_correlation: f64,
    pub combined_confidence: f64,
    pub total_weight: f64,
    pub top_correlations: Vec<Finding>,
}

pub fn meta_analyze(summaries: &[MethodSummary], findings: Vec<Finding>, top_n: usize) -> MetaResult {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for s in summaries {
        let w = s.effective_weight();
        weighted += s.correlation * w;
        total_weight += w;
    }
    let combined_correlation = if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    };

    let confidences: Vec<f64> = summaries.iter().filter_map(|s| s.confidence).collect();
    let combined_confidence = mean(&confidences);

    let mut top = findings;
    top.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    top.truncate(top_n);

    MetaResult {
        combined_correlation,
        combined_confidence,
        total_weight,
        top_correlations: top,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Consistency {
    pub mean_correlation: f64,
    pub std_correlation: f64,
    pub min_correlation: f64,
    pub max_correlation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataQuality {
    pub genetic_variant_count: usize,
    pub chart_completeness: f64,
    pub adequate_sample: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Significance {
    pub significant_methods: usize,
    pub total_methods: usize,
    pub significance_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub consistency: Consistency,
    pub data_quality: DataQuality,
    pub significance: Significance,
}

pub fn assess_results(
    summaries: &[MethodSummary],
    chart: &BirthChart,
    profile: &GeneticProfile,
    alpha: f64,
) -> Assessment {
    let correlations: Vec<f64> = summaries.iter().map(|s| s.correlation).collect();
    let (min_correlation, max_correlation) = if correlations.is_empty() {
        (0.0, 0.0)
    } else {
        correlations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
                (lo.min(c), hi.max(c))
            })
    };

    let variant_count = profile.annotated_count();
    let significant_methods = summaries
        .iter()
        .filter(|s| s.p_value.unwrap_or(1.0) < alpha)
        .count();
    let total_methods = summaries.len();

    Assessment {
        consistency: Consistency {
            mean_correlation: mean(&correlations),
            std_correlation: std_population(&correlations),
            min_correlation,
            max_correlation,
        },
        data_quality: DataQuality {
            genetic_variant_count: variant_count,
            chart_completeness: chart.completeness(),
            adequate_sample: variant_count >= ADEQUATE_VARIANTS,
        },
        significance: Significance {
            significant_methods,
            total_methods,
            significance_ratio: if total_methods > 0 {
                significant_methods as f64 / total_methods as f64
            } else {
                0.0
            },
        },
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/meta.rs"]
mod tests;
