use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::genetics::{GeneticProfile, Genotype};
use crate::stats::normal_cdf;
use crate::tables::traits::{TraitDef, builtin_traits};

#[derive(Debug, Clone, Serialize)]
pub struct PolygenicScore {
    pub trait_name: String,
    pub score: f64,
    pub percentile: f64,
    pub risk_category: String,
    pub variant_count: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct PolygenicEngine {
    traits: Vec<TraitDef>,
}

impl Default for PolygenicEngine {
    fn default() -> Self {
        Self {
            traits: builtin_traits(),
        }
    }
}

/// Risk alleles carried for a two-allele call: homozygous counts 2 for a risk
/// weight and 0 for a protective one, heterozygous always counts 1.
pub fn genotype_effect(genotype: &Genotype, weight: f64) -> f64 {
    let Some(homozygous) = genotype.is_homozygous() else {
        return 0.0;
    };
    let risk_alleles = if homozygous {
        if weight > 0.0 { 2.0 } else { 0.0 }
    } else {
        1.0
    };
    weight * risk_alleles
}

impl PolygenicEngine {
    /// Adds or replaces a trait definition.
    pub fn with_trait(mut self, def: TraitDef) -> Self {
        if let Some(existing) = self.traits.iter_mut().find(|t| t.name == def.name) {
            *existing = def;
        } else {
            self.traits.push(def);
        }
        self
    }

    pub fn traits(&self) -> &[TraitDef] {
        &self.traits
    }

    pub fn score(&self, profile: &GeneticProfile, trait_name: &str) -> Result<PolygenicScore> {
        let def = self
            .traits
            .iter()
            .find(|t| t.name == trait_name)
            .ok_or_else(|| AnalysisError::UnknownTrait(trait_name.to_string()))?;
        Ok(score_trait(def, profile))
    }

    pub fn score_all(&self, profile: &GeneticProfile) -> BTreeMap<String, PolygenicScore> {
        self.traits
            .iter()
            .map(|def| (def.name.clone(), score_trait(def, profile)))
            .collect()
    }

    /// Traits ordered by how unfavourable they look: risk traits by percentile,
    /// ability traits by 100 - percentile.
    pub fn top_risk_traits(&self, profile: &GeneticProfile, n: usize) -> Vec<PolygenicScore> {
        let mut ranked: Vec<(f64, PolygenicScore)> = self
            .traits
            .iter()
            .map(|def| {
                let s = score_trait(def, profile);
                let key = if def.is_risk_trait() {
                    s.percentile
                } else {
                    100.0 - s.percentile
                };
                (key, s)
            })
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().take(n).map(|(_, s)| s).collect()
    }
}

fn score_trait(def: &TraitDef, profile: &GeneticProfile) -> PolygenicScore {
    let mut sum = 0.0;
    let mut found = 0usize;
    for w in &def.weights {
        if let Some(genotype) = profile.genotype(w.rsid) {
            sum += genotype_effect(genotype, w.weight);
            found += 1;
        }
    }

    let score = if found > 0 {
        sum / (found as f64).sqrt()
    } else {
        0.0
    };

    let z = if def.population_std > 0.0 {
        (score - def.population_mean) / def.population_std
    } else {
        0.0
    };
    let percentile = (normal_cdf(z) * 100.0).clamp(0.0, 100.0);
    let confidence = if def.weights.is_empty() {
        0.0
    } else {
        (found as f64 / def.weights.len() as f64).min(1.0)
    };

    PolygenicScore {
        trait_name: def.name.clone(),
        score,
        percentile,
        risk_category: def.bands.classify(z).to_string(),
        variant_count: found,
        confidence,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/polygenic.rs"]
mod tests;
