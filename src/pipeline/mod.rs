//! End-to-end analysis of one subject, run as numbered stages.

pub mod stage1_inputs;
pub mod stage2_methods;
pub mod stage3_meta;
pub mod stage4_validation;
pub mod stage5_interpret;
pub mod stage6_report;

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::chart::Planet;
use crate::config::AnalysisProfile;
use crate::correlation::dignity::PlanetaryMapping;
use crate::error::Result;
use crate::input::AnalysisInput;
use crate::meta::{Assessment, MetaResult, MethodSummary};
use crate::pipeline::stage1_inputs::{ChartOverview, GeneticOverview, run_stage1};
use crate::pipeline::stage2_methods::{MethodResults, SkippedMethod, run_stage2};
use crate::pipeline::stage3_meta::run_stage3;
use crate::pipeline::stage4_validation::{ValidationReport, run_stage4};
use crate::pipeline::stage5_interpret::{interpretation, recommendations};

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub seed: u64,
    pub alpha: f64,
    pub n_bootstrap: usize,
    pub n_permutations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub tool: ToolInfo,
    pub sample_id: String,
    pub overall_correlation: f64,
    pub confidence_level: f64,
    pub chart: ChartOverview,
    pub genetics: GeneticOverview,
    pub methods: MethodResults,
    pub skipped_methods: Vec<SkippedMethod>,
    pub method_summaries: Vec<MethodSummary>,
    pub planetary_mapping: BTreeMap<Planet, PlanetaryMapping>,
    pub meta: MetaResult,
    pub assessment: Assessment,
    pub statistical_validation: ValidationReport,
    pub interpretation: String,
    pub recommendations: Vec<String>,
}

pub fn run_analysis(input: &AnalysisInput, settings: &AnalysisProfile) -> Result<AnalysisReport> {
    settings.validate()?;
    let mut rng = StdRng::seed_from_u64(settings.seed);

    tracing::info!(sample = %input.sample_id, seed = settings.seed, "analysis started");

    let stage1 = run_stage1(input, settings)?;
    let stage2 = run_stage2(&stage1.chart, &stage1.profile, settings, &mut rng);
    let stage3 = run_stage3(&stage2.results, &stage1.chart, &stage1.profile, settings);
    let validation = run_stage4(&stage2.results, &settings.validator(), &mut rng);

    let interpretation = interpretation(&stage3.summaries, &stage3.meta);
    let recommendations = recommendations(&stage3.summaries, &stage3.assessment, &stage2.skipped);

    Ok(AnalysisReport {
        tool: ToolInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed: settings.seed,
            alpha: settings.alpha,
            n_bootstrap: settings.n_bootstrap,
            n_permutations: settings.n_permutations,
        },
        sample_id: input.sample_id.clone(),
        overall_correlation: stage3.meta.combined_correlation,
        confidence_level: stage3.meta.combined_confidence,
        chart: stage1.chart_overview,
        genetics: stage1.genetic_overview,
        methods: stage2.results,
        skipped_methods: stage2.skipped,
        method_summaries: stage3.summaries,
        planetary_mapping: stage2.planetary_mapping,
        meta: stage3.meta,
        assessment: stage3.assessment,
        statistical_validation: validation,
        interpretation,
        recommendations,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
