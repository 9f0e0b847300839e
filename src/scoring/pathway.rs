use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::Planet;
use crate::genetics::GeneticProfile;
use crate::stats::mean;
use crate::tables::rulerships::planet_pathways;

#[derive(Debug, Clone, Serialize)]
pub struct PlanetPathwayScore {
    pub planet: Planet,
    pub total_score: f64,
    pub pathway_count: usize,
    pub pathway_scores: BTreeMap<String, f64>,
}

/// Activity per pathway: mean of `effect_size * numeric_class / 2` over the
/// profile's annotated, callable variants in that pathway.
pub fn pathway_scores(profile: &GeneticProfile) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    for (pathway, variants) in profile.by_pathway() {
        let contributions: Vec<f64> = variants
            .iter()
            .filter_map(|v| {
                let class = v.genotype.numeric_class()?;
                let effect = v.effect_size()?;
                Some(effect * class as f64 / 2.0)
            })
            .collect();
        if contributions.is_empty() {
            continue;
        }
        out.insert(pathway.to_string(), mean(&contributions));
    }
    out
}

/// Aggregates pathway activity under each planet's traditional rulerships.
pub fn planetary_pathway_scores(profile: &GeneticProfile) -> BTreeMap<Planet, PlanetPathwayScore> {
    let scores = pathway_scores(profile);
    let mut out = BTreeMap::new();
    for &(planet, pathways) in planet_pathways() {
        let mut present = BTreeMap::new();
        for &pathway in pathways {
            if let Some(&s) = scores.get(pathway) {
                present.insert(pathway.to_string(), s);
            }
        }
        let values: Vec<f64> = present.values().copied().collect();
        out.insert(
            planet,
            PlanetPathwayScore {
                planet,
                total_score: mean(&values),
                pathway_count: present.len(),
                pathway_scores: present,
            },
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/pathway.rs"]
mod tests;
