use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::chart::{BirthChart, Planet, Sign};
use crate::correlation::{finite_or_null, individual_correlation, strength_label};
use crate::error::{AnalysisError, Result};
use crate::genetics::GeneticProfile;
use crate::scoring::dignity::{DignityScore, DignityScorer};
use crate::scoring::polygenic::{PolygenicEngine, PolygenicScore};
use crate::stats::validator::{DEFAULT_RESAMPLES, MIN_PAIRED, bootstrap_spearman};
use crate::stats::{normal_quantile, spearman};
use crate::tables::rulerships::planet_traits;

const DIGNITY_SCALE: f64 = 5.0;
const GENETIC_SCALE: f64 = 1.0;
const SIGNIFICANT_DIGNITY: f64 = 2.0;
const SIGNIFICANT_GENETIC: f64 = 1.0;

#[derive(Debug, Clone, Serialize)]
pub struct DignityFinding {
    pub planet: Planet,
    pub dignity_score: i32,
    pub genetic_score: f64,
    pub strength: f64,
    pub sign: Sign,
}

#[derive(Debug, Clone, Serialize)]
pub struct DignityCorrelationResult {
    pub correlation: f64,
    pub p_value: f64,
    pub confidence_interval: (f64, f64),
    pub sample_size: usize,
    pub method: &'static str,
    pub dignity_scores: BTreeMap<Planet, i32>,
    pub genetic_scores: BTreeMap<Planet, f64>,
    pub significant_correlations: Vec<DignityFinding>,
}

impl DignityCorrelationResult {
    /// Aligned (dignity, genetic) sequences in planet order.
    pub fn paired_values(&self) -> (Vec<f64>, Vec<f64>) {
        self.dignity_scores
            .iter()
            .filter_map(|(planet, &d)| self.genetic_scores.get(planet).map(|&g| (d as f64, g)))
            .unzip()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetaryMapping {
    pub planet: Planet,
    pub dignity_total: i32,
    pub dignity_breakdown: BTreeMap<&'static str, i32>,
    pub genetic_impact: f64,
    pub harmony_score: f64,
    pub sign: Sign,
    pub degree: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone)]
pub struct DignityCorrelation {
    pub scorer: DignityScorer,
    pub engine: PolygenicEngine,
    pub n_bootstrap: usize,
}

impl Default for DignityCorrelation {
    fn default() -> Self {
        Self {
            scorer: DignityScorer::default(),
            engine: PolygenicEngine::default(),
            n_bootstrap: DEFAULT_RESAMPLES,
        }
    }
}

impl DignityCorrelation {
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        chart: &BirthChart,
        profile: &GeneticProfile,
        rng: &mut R,
    ) -> Result<DignityCorrelationResult> {
        let dignities = self.scorer.score_all(chart)?;
        let impact = self.genetic_impact(profile);

        let mut dignity_scores = BTreeMap::new();
        let mut genetic_scores = BTreeMap::new();
        for (planet, d) in &dignities {
            if let Some(&g) = impact.get(planet) {
                dignity_scores.insert(*planet, d.total);
                genetic_scores.insert(*planet, g);
            }
        }

        if dignity_scores.len() < MIN_PAIRED {
            return Err(AnalysisError::InsufficientData {
                needed: MIN_PAIRED,
                got: dignity_scores.len(),
            });
        }

        let x: Vec<f64> = dignity_scores.values().map(|&d| d as f64).collect();
        let y: Vec<f64> = genetic_scores.values().copied().collect();

        let (r, p) = spearman(&x, &y);
        let (correlation, p_value) = finite_or_null("dignity", r, p);
        let confidence_interval = bootstrap_interval(&x, &y, self.n_bootstrap, rng);

        tracing::debug!(
            correlation,
            p_value,
            n = x.len(),
            "dignity-genetic correlation"
        );

        Ok(DignityCorrelationResult {
            correlation,
            p_value,
            confidence_interval,
            sample_size: x.len(),
            method: "Spearman",
            significant_correlations: significant_findings(&dignities, &impact),
            dignity_scores,
            genetic_scores,
        })
    }

    /// Per-planet genetic impact: mean z-score (from percentile) of the planet's
    /// ruled traits, each weighted by its confidence. Planets with no scored
    /// traits get 0.
    pub fn genetic_impact(&self, profile: &GeneticProfile) -> BTreeMap<Planet, f64> {
        let prs = self.engine.score_all(profile);
        planet_traits()
            .iter()
            .map(|&(planet, traits)| (planet, planet_impact(traits, &prs)))
            .collect()
    }

    pub fn planetary_mapping(
        &self,
        chart: &BirthChart,
        profile: &GeneticProfile,
    ) -> Result<BTreeMap<Planet, PlanetaryMapping>> {
        let dignities = self.scorer.score_all(chart)?;
        let impact = self.genetic_impact(profile);

        let mut out = BTreeMap::new();
        for (planet, d) in &dignities {
            let Some(&genetic) = impact.get(planet) else {
                continue;
            };
            let harmony = individual_correlation(
                d.total as f64,
                DIGNITY_SCALE,
                genetic,
                GENETIC_SCALE,
            );
            out.insert(
                *planet,
                PlanetaryMapping {
                    planet: *planet,
                    dignity_total: d.total,
                    dignity_breakdown: d.breakdown().into_iter().collect(),
                    genetic_impact: genetic,
                    harmony_score: harmony,
                    sign: d.sign,
                    degree: d.degree,
                    interpretation: interpret_mapping(*planet, d.total as f64, genetic, harmony),
                },
            );
        }
        Ok(out)
    }
}

fn planet_impact(traits: &[&str], prs: &BTreeMap<String, PolygenicScore>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for &name in traits {
        if let Some(score) = prs.get(name) {
            total += normal_quantile(score.percentile / 100.0) * score.confidence;
            count += 1;
        }
    }
    if count > 0 { total / count as f64 } else { 0.0 }
}

/// 95% interval from sorted bootstrap correlations, indexed at
/// `floor(0.025 m)` and `floor(0.975 m)`. Falls back to (-1, 1).
pub fn bootstrap_interval<R: Rng + ?Sized>(
    x: &[f64],
    y: &[f64],
    rounds: usize,
    rng: &mut R,
) -> (f64, f64) {
    let mut boot = bootstrap_spearman(x, y, x.len(), rounds, rng);
    if boot.is_empty() {
        return (-1.0, 1.0);
    }
    boot.sort_by(f64::total_cmp);
    let m = boot.len();
    let lower = ((0.025 * m as f64) as usize).min(m - 1);
    let upper = ((0.975 * m as f64) as usize).min(m - 1);
    (boot[lower], boot[upper])
}

fn significant_findings(
    dignities: &BTreeMap<Planet, DignityScore>,
    impact: &BTreeMap<Planet, f64>,
) -> Vec<DignityFinding> {
    let mut out: Vec<DignityFinding> = dignities
        .iter()
        .filter_map(|(planet, d)| {
            let genetic = *impact.get(planet)?;
            let dignity = d.total as f64;
            if dignity.abs() > SIGNIFICANT_DIGNITY && genetic.abs() > SIGNIFICANT_GENETIC {
                Some(DignityFinding {
                    planet: *planet,
                    dignity_score: d.total,
                    genetic_score: genetic,
                    strength: (dignity * genetic).abs(),
                    sign: d.sign,
                })
            } else {
                None
            }
        })
        .collect();
    out.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    out
}

fn interpret_mapping(planet: Planet, dignity: f64, genetic: f64, harmony: f64) -> String {
    let dignity_strength = strength_label(dignity, 3.0, 1.0);
    let dignity_nature = if dignity > 0.0 {
        "dignified"
    } else {
        "debilitated"
    };
    let genetic_strength = strength_label(genetic, 1.5, 0.5);
    let genetic_nature = if genetic > 0.0 {
        "elevated"
    } else {
        "suppressed"
    };
    let harmony_nature = if harmony > 0.3 {
        "harmonious"
    } else if harmony < -0.3 {
        "conflicting"
    } else {
        "neutral"
    };
    format!(
        "{} shows {dignity_strength} {dignity_nature} dignity with {genetic_strength} {genetic_nature} genetic expression - {harmony_nature} correlation",
        planet.title()
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/correlation/dignity.rs"]
mod tests;
