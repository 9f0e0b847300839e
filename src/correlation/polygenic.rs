use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::{BirthChart, Planet};
use crate::correlation::individual_correlation;
use crate::error::Result;
use crate::genetics::GeneticProfile;
use crate::scoring::dignity::DignityScorer;
use crate::scoring::polygenic::PolygenicEngine;
use crate::stats::mean;
use crate::tables::rulerships::trait_planets;

#[derive(Debug, Clone, Serialize)]
pub struct TraitCorrelation {
    pub trait_name: String,
    pub planet: Planet,
    pub correlation: f64,
    pub prs_score: f64,
    pub prs_percentile: f64,
    pub dignity_score: i32,
    pub confidence: f64,
}

impl TraitCorrelation {
    pub fn strength(&self) -> f64 {
        self.correlation.abs() * self.confidence
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolygenicCorrelationResult {
    pub overall_correlation: f64,
    pub confidence: f64,
    pub trait_correlations: BTreeMap<String, TraitCorrelation>,
}

impl PolygenicCorrelationResult {
    /// Aligned (PRS score, dignity score) sequences in trait order.
    pub fn paired_values(&self) -> (Vec<f64>, Vec<f64>) {
        self.trait_correlations
            .values()
            .map(|t| (t.prs_score, t.dignity_score as f64))
            .unzip()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolygenicCorrelation {
    pub scorer: DignityScorer,
    pub engine: PolygenicEngine,
}

impl PolygenicCorrelation {
    pub fn analyze(
        &self,
        chart: &BirthChart,
        profile: &GeneticProfile,
    ) -> Result<PolygenicCorrelationResult> {
        let prs = self.engine.score_all(profile);
        let dignities = self.scorer.score_all(chart)?;

        let mut trait_correlations = BTreeMap::new();
        for &(trait_name, planet) in trait_planets() {
            let (Some(score), Some(dignity)) = (prs.get(trait_name), dignities.get(&planet))
            else {
                continue;
            };
            let correlation =
                individual_correlation(score.score, 1.0, dignity.total as f64, 5.0);
            trait_correlations.insert(
                trait_name.to_string(),
                TraitCorrelation {
                    trait_name: trait_name.to_string(),
                    planet,
                    correlation,
                    prs_score: score.score,
                    prs_percentile: score.percentile,
                    dignity_score: dignity.total,
                    confidence: score.confidence,
                },
            );
        }

        let correlations: Vec<f64> = trait_correlations.values().map(|t| t.correlation).collect();
        let confidences: Vec<f64> = trait_correlations.values().map(|t| t.confidence).collect();

        Ok(PolygenicCorrelationResult {
            overall_correlation: mean(&correlations),
            confidence: mean(&confidences),
            trait_correlations,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/correlation/polygenic.rs"]
mod tests;
