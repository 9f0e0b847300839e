use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::chart::{BirthChart, Planet};
use crate::config::AnalysisProfile;
use crate::correlation::MethodKind;
use crate::correlation::dignity::{DignityCorrelation, DignityCorrelationResult, PlanetaryMapping};
use crate::correlation::pathway::{PathwayCorrelation, PathwayCorrelationResult};
use crate::correlation::polygenic::{PolygenicCorrelation, PolygenicCorrelationResult};
use crate::error::Result;
use crate::genetics::GeneticProfile;
use crate::scoring::dignity::DignityScorer;
use crate::scoring::polygenic::PolygenicEngine;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MethodResults {
    pub dignity: Option<DignityCorrelationResult>,
    pub pathway: Option<PathwayCorrelationResult>,
    pub polygenic: Option<PolygenicCorrelationResult>,
}

impl MethodResults {
    pub fn completed(&self) -> usize {
        usize::from(self.dignity.is_some())
            + usize::from(self.pathway.is_some())
            + usize::from(self.polygenic.is_some())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedMethod {
    pub method: MethodKind,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Stage2Output {
    pub results: MethodResults,
    pub skipped: Vec<SkippedMethod>,
    pub planetary_mapping: BTreeMap<Planet, PlanetaryMapping>,
}

/// Runs every correlation method. A failing method is recorded as skipped and
/// the remaining methods still run.
pub fn run_stage2<R: Rng + ?Sized>(
    chart: &BirthChart,
    profile: &GeneticProfile,
    settings: &AnalysisProfile,
    rng: &mut R,
) -> Stage2Output {
    let scorer = DignityScorer {
        sect: settings.sect,
    };
    let dignity = DignityCorrelation {
        scorer: scorer.clone(),
        engine: PolygenicEngine::default(),
        n_bootstrap: settings.n_bootstrap,
    };
    let pathway = PathwayCorrelation {
        scorer: scorer.clone(),
    };
    let polygenic = PolygenicCorrelation {
        scorer,
        engine: PolygenicEngine::default(),
    };

    let mut out = Stage2Output::default();
    out.results.dignity = keep(
        MethodKind::Dignity,
        dignity.analyze(chart, profile, rng),
        &mut out.skipped,
    );
    out.results.pathway = keep(
        MethodKind::Pathway,
        pathway.analyze(chart, profile),
        &mut out.skipped,
    );
    out.results.polygenic = keep(
        MethodKind::Polygenic,
        polygenic.analyze(chart, profile),
        &mut out.skipped,
    );

    out.planetary_mapping = match dignity.planetary_mapping(chart, profile) {
        Ok(mapping) => mapping,
        Err(err) => {
            tracing::warn!(error = %err, "planetary mapping unavailable");
            BTreeMap::new()
        }
    };

    tracing::info!(
        completed = out.results.completed(),
        skipped = out.skipped.len(),
        "stage 2: correlation methods finished"
    );
    out
}

fn keep<T>(kind: MethodKind, result: Result<T>, skipped: &mut Vec<SkippedMethod>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(method = kind.name(), error = %err, "correlation method skipped");
            skipped.push(SkippedMethod {
                method: kind,
                reason: err.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_methods.rs"]
mod tests;
