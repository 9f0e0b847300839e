use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::chart::BirthChart;
use crate::error::{AnalysisError, Result};
use crate::genetics::GeneticProfile;

/// One subject: a precomputed chart and raw rsid → genotype calls.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    #[serde(default = "default_sample_id")]
    pub sample_id: String,
    pub chart: BirthChart,
    pub genotypes: BTreeMap<String, String>,
}

fn default_sample_id() -> String {
    "unknown".to_string()
}

impl AnalysisInput {
    pub fn profile(&self) -> GeneticProfile {
        GeneticProfile::from_genotypes(
            &self.sample_id,
            self.genotypes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Chart with house placements filled in from cusps where missing.
    pub fn resolved_chart(&self) -> BirthChart {
        let mut chart = self.chart.clone();
        chart.resolve_houses();
        chart
    }
}

pub fn load_input(path: &Path) -> Result<AnalysisInput> {
    let text = std::fs::read_to_string(path)?;
    let input = parse_input(&text)?;
    tracing::info!(
        path = %path.display(),
        sample = %input.sample_id,
        planets = input.chart.planets.len(),
        genotypes = input.genotypes.len(),
        "loaded analysis input"
    );
    Ok(input)
}

pub fn parse_input(text: &str) -> Result<AnalysisInput> {
    let input: AnalysisInput = serde_json::from_str(text)?;
    for (planet, pos) in &input.chart.planets {
        if !pos.longitude.is_finite() {
            return Err(AnalysisError::InvalidArgument(format!(
                "non-finite longitude for {planet}"
            )));
        }
        if let Some(house) = pos.house
            && !(1..=12).contains(&house)
        {
            return Err(AnalysisError::InvalidArgument(format!(
                "house {house} out of range for {planet}"
            )));
        }
    }
    Ok(input)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
