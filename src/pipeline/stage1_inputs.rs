use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::{Aspect, BirthChart, Element, find_aspects};
use crate::config::AnalysisProfile;
use crate::error::Result;
use crate::genetics::GeneticProfile;
use crate::input::AnalysisInput;
use crate::scoring::dignity::{DignityScorer, PlanetStrength};
use crate::scoring::polygenic::{PolygenicEngine, PolygenicScore};

const STRONGEST_PLANETS: usize = 3;
const TOP_RISK_TRAITS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ChartOverview {
    pub planet_count: usize,
    pub completeness: f64,
    pub chart_strength: i32,
    pub strongest_planets: Vec<PlanetStrength>,
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneticOverview {
    pub total_snps: usize,
    pub annotated_variants: usize,
    pub coverage: f64,
    pub element_distribution: BTreeMap<Element, usize>,
    pub significance_distribution: BTreeMap<&'static str, usize>,
    pub top_risk_traits: Vec<PolygenicScore>,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub chart: BirthChart,
    pub profile: GeneticProfile,
    pub chart_overview: ChartOverview,
    pub genetic_overview: GeneticOverview,
}

pub fn run_stage1(input: &AnalysisInput, settings: &AnalysisProfile) -> Result<Stage1Output> {
    let chart = input.resolved_chart();
    let profile = input.profile();

    let scorer = DignityScorer {
        sect: settings.sect,
    };
    let chart_overview = ChartOverview {
        planet_count: chart.planets.len(),
        completeness: chart.completeness(),
        chart_strength: scorer.chart_strength(&chart)?,
        strongest_planets: scorer.strongest_planets(&chart, STRONGEST_PLANETS)?,
        aspects: find_aspects(&chart, settings.aspect_orb),
    };

    let genetic_overview = GeneticOverview {
        total_snps: profile.total_snps_processed,
        annotated_variants: profile.annotated_count(),
        coverage: profile.coverage(),
        element_distribution: profile
            .by_element()
            .into_iter()
            .map(|(element, variants)| (element, variants.len()))
            .collect(),
        significance_distribution: profile.by_significance(),
        top_risk_traits: PolygenicEngine::default().top_risk_traits(&profile, TOP_RISK_TRAITS),
    };

    tracing::info!(
        planets = chart_overview.planet_count,
        aspects = chart_overview.aspects.len(),
        annotated = genetic_overview.annotated_variants,
        "stage 1: inputs prepared"
    );

    Ok(Stage1Output {
        chart,
        profile,
        chart_overview,
        genetic_overview,
    })
}
