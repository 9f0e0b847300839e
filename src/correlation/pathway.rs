use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::{BirthChart, Planet};
use crate::correlation::{finite_or_null, individual_correlation, strength_label};
use crate::error::Result;
use crate::genetics::GeneticProfile;
use crate::scoring::dignity::DignityScorer;
use crate::scoring::pathway::{PlanetPathwayScore, pathway_scores, planetary_pathway_scores};
use crate::stats::validator::MIN_PAIRED;
use crate::stats::{mean, spearman, std_population};
use crate::tables::rulerships::house_strength;

const STRENGTH_SCALE: f64 = 5.0;
const PATHWAY_SCALE: f64 = 0.5;
const FULL_PATHWAY_COUNT: f64 = 3.0;
const FULL_VARIANT_COUNT: f64 = 20.0;
const RULERSHIP_PASS: f64 = 0.4;

#[derive(Debug, Clone, Serialize)]
pub struct PlanetPathwayCorrelation {
    pub correlation: f64,
    pub planet_strength: f64,
    pub pathway_score: f64,
    pub significance: f64,
    pub pathway_details: BTreeMap<String, f64>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathwayFinding {
    pub planet: Planet,
    pub correlation: f64,
    pub significance: f64,
    pub strength: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathwayCorrelationResult {
    pub overall_correlation: f64,
    pub p_value: f64,
    pub sample_size: usize,
    pub individual_correlations: BTreeMap<Planet, PlanetPathwayCorrelation>,
    pub strongest_correlations: Vec<PathwayFinding>,
    pub pathway_scores: BTreeMap<Planet, f64>,
    pub planetary_strengths: BTreeMap<Planet, f64>,
    pub confidence_level: f64,
}

impl PathwayCorrelationResult {
    /// Aligned (planet strength, pathway score) sequences in planet order.
    pub fn paired_values(&self) -> (Vec<f64>, Vec<f64>) {
        self.individual_correlations
            .values()
            .map(|c| (c.planet_strength, c.pathway_score))
            .unzip()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RulershipTest {
    pub planet: Planet,
    pub pathway: String,
    pub planet_strength: f64,
    pub pathway_score: f64,
    pub correlation: f64,
    pub significance: f64,
    pub passed: bool,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default)]
pub struct PathwayCorrelation {
    pub scorer: DignityScorer,
}

impl PathwayCorrelation {
    pub fn analyze(
        &self,
        chart: &BirthChart,
        profile: &GeneticProfile,
    ) -> Result<PathwayCorrelationResult> {
        let strengths = self.planetary_strengths(chart)?;
        let pathways = planetary_pathway_scores(profile);

        let mut individual = BTreeMap::new();
        for (planet, &strength) in &strengths {
            if let Some(info) = pathways.get(planet) {
                individual.insert(*planet, planet_correlation(*planet, strength, info));
            }
        }

        let planet_values: Vec<f64> = individual.values().map(|c| c.planet_strength).collect();
        let pathway_values: Vec<f64> = individual.values().map(|c| c.pathway_score).collect();

        let (overall_correlation, p_value) = if planet_values.len() >= MIN_PAIRED {
            let (r, p) = spearman(&planet_values, &pathway_values);
            finite_or_null("pathway", r, p)
        } else {
            (0.0, 1.0)
        };

        let confidence_level = confidence_level(&individual, profile);

        tracing::debug!(
            overall_correlation,
            p_value,
            confidence_level,
            "planet-pathway correlation"
        );

        Ok(PathwayCorrelationResult {
            overall_correlation,
            p_value,
            sample_size: planet_values.len(),
            strongest_correlations: strongest(&individual),
            pathway_scores: pathways.iter().map(|(p, s)| (*p, s.total_score)).collect(),
            individual_correlations: individual,
            planetary_strengths: strengths,
            confidence_level,
        })
    }

    /// Dignity total plus house placement; aspects contribute nothing yet.
    pub fn planetary_strengths(&self, chart: &BirthChart) -> Result<BTreeMap<Planet, f64>> {
        let dignities = self.scorer.score_all(chart)?;
        let mut out = BTreeMap::new();
        for (planet, d) in dignities {
            let house = chart.position(planet)?.house;
            out.insert(planet, d.total as f64 + house_strength(house) + aspect_strength());
        }
        Ok(out)
    }

    pub fn test_specific_rulership(
        &self,
        chart: &BirthChart,
        profile: &GeneticProfile,
        planet: Planet,
        pathway: &str,
    ) -> Result<RulershipTest> {
        chart.position(planet)?;
        let planet_strength = self
            .planetary_strengths(chart)?
            .get(&planet)
            .copied()
            .unwrap_or(0.0);
        let pathway_score = pathway_scores(profile).get(pathway).copied().unwrap_or(0.0);

        let correlation =
            individual_correlation(planet_strength, STRENGTH_SCALE, pathway_score, PATHWAY_SCALE);
        let significance = if correlation.abs() > 0.3 {
            correlation.abs()
        } else {
            0.0
        };
        let passed = correlation.abs() > RULERSHIP_PASS;

        Ok(RulershipTest {
            planet,
            pathway: pathway.to_string(),
            planet_strength,
            pathway_score,
            correlation,
            significance,
            passed,
            interpretation: format!(
                "{}-{pathway} rulership {} (correlation: {correlation:.3})",
                planet.title(),
                if passed { "confirmed" } else { "not confirmed" }
            ),
        })
    }
}

fn aspect_strength() -> f64 {
    0.0
}

fn planet_correlation(
    planet: Planet,
    strength: f64,
    info: &PlanetPathwayScore,
) -> PlanetPathwayCorrelation {
    let correlation =
        individual_correlation(strength, STRENGTH_SCALE, info.total_score, PATHWAY_SCALE);
    let significance = (info.pathway_count as f64 / FULL_PATHWAY_COUNT).min(1.0);
    PlanetPathwayCorrelation {
        correlation,
        planet_strength: strength,
        pathway_score: info.total_score,
        significance,
        pathway_details: info.pathway_scores.clone(),
        interpretation: interpret(planet, correlation, significance),
    }
}

fn interpret(planet: Planet, correlation: f64, significance: f64) -> String {
    let strength = strength_label(correlation, 0.6, 0.3);
    let direction = if correlation > 0.0 {
        "positive"
    } else {
        "negative"
    };
    let confidence = if significance > 0.7 {
        "high"
    } else if significance > 0.4 {
        "moderate"
    } else {
        "low"
    };
    format!(
        "{} shows {strength} {direction} correlation with biological pathways ({confidence} confidence)",
        planet.title()
    )
}

fn strongest(individual: &BTreeMap<Planet, PlanetPathwayCorrelation>) -> Vec<PathwayFinding> {
    let mut out: Vec<PathwayFinding> = individual
        .iter()
        .map(|(planet, c)| PathwayFinding {
            planet: *planet,
            correlation: c.correlation,
            significance: c.significance,
            strength: c.correlation.abs() * c.significance,
            interpretation: c.interpretation.clone(),
        })
        .collect();
    out.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    out
}

/// Mean of variant coverage, average correlation magnitude and cross-planet
/// consistency, clamped to [0, 1].
fn confidence_level(
    individual: &BTreeMap<Planet, PlanetPathwayCorrelation>,
    profile: &GeneticProfile,
) -> f64 {
    let variant_confidence = (profile.annotated_count() as f64 / FULL_VARIANT_COUNT).min(1.0);
    let correlations: Vec<f64> = individual.values().map(|c| c.correlation).collect();
    let magnitudes: Vec<f64> = correlations.iter().map(|c| c.abs()).collect();
    let avg_strength = mean(&magnitudes);
    let consistency = if correlations.len() > 1 {
        1.0 - std_population(&correlations).min(1.0)
    } else {
        0.5
    };
    ((variant_confidence + avg_strength + consistency) / 3.0).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/correlation/pathway.rs"]
mod tests;
