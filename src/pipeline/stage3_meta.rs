use crate::chart::BirthChart;
use crate::config::AnalysisProfile;
use crate::genetics::GeneticProfile;
use crate::meta::{
    Assessment, MetaResult, MethodSummary, assess_results, collect_findings, dignity_summary,
    meta_analyze, pathway_summary, polygenic_summary,
};
use crate::pipeline::stage2_methods::MethodResults;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub summaries: Vec<MethodSummary>,
    pub meta: MetaResult,
    pub assessment: Assessment,
}

pub fn method_summaries(results: &MethodResults, settings: &AnalysisProfile) -> Vec<MethodSummary> {
    let weights = &settings.weights;
    let mut out = Vec::with_capacity(3);
    if let Some(d) = &results.dignity {
        out.push(dignity_summary(d, weights));
    }
    if let Some(p) = &results.pathway {
        out.push(pathway_summary(p, weights));
    }
    if let Some(g) = &results.polygenic {
        out.push(polygenic_summary(g, weights));
    }
    out
}

pub fn run_stage3(
    results: &MethodResults,
    chart: &BirthChart,
    profile: &GeneticProfile,
    settings: &AnalysisProfile,
) -> Stage3Output {
    let summaries = method_summaries(results, settings);
    let findings = collect_findings(
        results.dignity.as_ref(),
        results.pathway.as_ref(),
        results.polygenic.as_ref(),
    );
    let meta = meta_analyze(&summaries, findings, settings.top_n);
    let assessment = assess_results(&summaries, chart, profile, settings.alpha);

    tracing::info!(
        combined_correlation = meta.combined_correlation,
        combined_confidence = meta.combined_confidence,
        significant = assessment.significance.significant_methods,
        "stage 3: meta-analysis complete"
    );

    Stage3Output {
        summaries,
        meta,
        assessment,
    }
}
