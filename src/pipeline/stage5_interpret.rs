use std::fmt::Write;

use crate::meta::{Assessment, MetaResult, MethodSummary};
use crate::pipeline::stage2_methods::SkippedMethod;

const TOP_FINDINGS_SHOWN: usize = 3;
const FEW_VARIANTS: usize = 20;

pub fn overall_strength(correlation: f64, confidence: f64) -> &'static str {
    if correlation.abs() > 0.6 && confidence > 0.7 {
        "strong"
    } else if correlation.abs() > 0.3 && confidence > 0.5 {
        "moderate"
    } else {
        "weak"
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn interpretation(summaries: &[MethodSummary], meta: &MetaResult) -> String {
    let corr = meta.combined_correlation;
    let conf = meta.combined_confidence;
    let direction = if corr > 0.0 { "positive" } else { "negative" };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overall finding: {} {direction} correlation detected between chart factors and genetic scores.",
        capitalize(overall_strength(corr, conf))
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Combined correlation: {corr:.3}");
    let _ = writeln!(out, "Confidence level: {:.1}%", conf * 100.0);
    let _ = writeln!(out);
    let _ = writeln!(out, "Method breakdown:");
    for s in summaries {
        let _ = writeln!(out, "- {}: {:.3} correlation", s.kind.title(), s.correlation);
    }

    let top: Vec<_> = meta.top_correlations.iter().take(TOP_FINDINGS_SHOWN).collect();
    if !top.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Top correlations:");
        for (i, finding) in top.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} method: {}",
                i + 1,
                finding.method.title(),
                finding.label()
            );
        }
    }
    out
}

pub fn recommendations(
    summaries: &[MethodSummary],
    assessment: &Assessment,
    skipped: &[SkippedMethod],
) -> Vec<String> {
    let mut out = Vec::new();

    let variant_count = assessment.data_quality.genetic_variant_count;
    if variant_count < FEW_VARIANTS {
        out.push(format!(
            "Consider expanding genetic testing: only {variant_count} variants analyzed, 50+ recommended for higher accuracy."
        ));
    }

    for s in skipped {
        out.push(format!(
            "The {} method could not run ({}); supply a more complete chart or genotype set.",
            s.method.name(),
            s.reason
        ));
    }

    if let Some(best) = summaries
        .iter()
        .max_by(|a, b| a.correlation.abs().total_cmp(&b.correlation.abs()))
    {
        out.push(format!(
            "The {} methodology showed the strongest results; consider focusing further analysis there.",
            best.kind.name()
        ));
    }

    if assessment.significance.significance_ratio < 0.5 {
        out.push(
            "Statistical significance is limited; consider a larger sample or additional data points."
                .to_string(),
        );
    }

    let strongest = summaries
        .iter()
        .map(|s| s.correlation.abs())
        .fold(0.0, f64::max);
    let closing = if strongest > 0.5 {
        "Strong correlations detected; results warrant further investigation and replication."
    } else if strongest > 0.3 {
        "Moderate correlations suggest potential relationships; additional data would strengthen the analysis."
    } else {
        "Weak correlations observed; consider alternative methodologies or different genetic markers."
    };
    out.push(closing.to_string());
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_interpret.rs"]
mod tests;
