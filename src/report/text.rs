use std::fmt::Write;

use crate::pipeline::AnalysisReport;
use crate::report::{format_f64_3, format_p_value, format_percent};

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Astro-Genomic Correlation Report\n");
    out.push_str("================================\n\n");
    let _ = writeln!(out, "Sample: {}", report.sample_id);
    let _ = writeln!(
        out,
        "Tool: {} {} (seed {}, alpha {}, bootstrap {}, permutations {})\n",
        report.tool.name,
        report.tool.version,
        report.tool.seed,
        report.tool.alpha,
        report.tool.n_bootstrap,
        report.tool.n_permutations
    );

    out.push_str("1. Chart overview\n");
    let chart = &report.chart;
    let _ = writeln!(
        out,
        "Planets: {} (completeness {})",
        chart.planet_count,
        format_percent(chart.completeness)
    );
    let _ = writeln!(out, "Total dignity: {}", chart.chart_strength);
    if !chart.strongest_planets.is_empty() {
        let parts: Vec<String> = chart
            .strongest_planets
            .iter()
            .map(|p| format!("{} in {} ({:+})", p.planet.title(), p.sign, p.total_score))
            .collect();
        let _ = writeln!(out, "Strongest planets: {}", parts.join(", "));
    }
    let _ = writeln!(out, "Aspects: {}", chart.aspects.len());
    for a in &chart.aspects {
        let _ = writeln!(
            out,
            "  {} {} {} (orb {:.2})",
            a.first.title(),
            a.kind.name(),
            a.second.title(),
            a.orb
        );
    }
    out.push('\n');

    out.push_str("2. Genetic overview\n");
    let genetics = &report.genetics;
    let _ = writeln!(
        out,
        "SNPs processed: {}, annotated: {} (coverage {})",
        genetics.total_snps,
        genetics.annotated_variants,
        format_percent(genetics.coverage)
    );
    let elements: Vec<String> = genetics
        .element_distribution
        .iter()
        .map(|(e, n)| format!("{}={n}", e.name()))
        .collect();
    let _ = writeln!(out, "Element distribution: {}", elements.join(", "));
    let significance: Vec<String> = genetics
        .significance_distribution
        .iter()
        .map(|(band, n)| format!("{band}={n}"))
        .collect();
    let _ = writeln!(out, "Clinical significance: {}", significance.join(", "));
    for s in &genetics.top_risk_traits {
        let _ = writeln!(
            out,
            "  {}: score {}, percentile {:.1}, {}",
            s.trait_name,
            format_f64_3(s.score),
            s.percentile,
            s.risk_category
        );
    }
    out.push('\n');

    out.push_str("3. Method results\n");
    for s in &report.method_summaries {
        let p = s
            .p_value
            .map(format_p_value)
            .unwrap_or_else(|| "n/a".to_string());
        let confidence = s
            .confidence
            .map(format_percent)
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "{}: r = {}, p = {p}, confidence {confidence}, weight {}",
            s.kind.title(),
            format_f64_3(s.correlation),
            format_f64_3(s.effective_weight())
        );
    }
    for s in &report.skipped_methods {
        let _ = writeln!(out, "{}: skipped ({})", s.method.title(), s.reason);
    }
    out.push('\n');

    out.push_str("4. Meta-analysis\n");
    let _ = writeln!(
        out,
        "Combined correlation: {}",
        format_f64_3(report.meta.combined_correlation)
    );
    let _ = writeln!(
        out,
        "Combined confidence: {}",
        format_percent(report.meta.combined_confidence)
    );
    let a = &report.assessment;
    let _ = writeln!(
        out,
        "Consistency: mean {}, sd {}, range [{}, {}]",
        format_f64_3(a.consistency.mean_correlation),
        format_f64_3(a.consistency.std_correlation),
        format_f64_3(a.consistency.min_correlation),
        format_f64_3(a.consistency.max_correlation)
    );
    let _ = writeln!(
        out,
        "Significant methods: {}/{}",
        a.significance.significant_methods, a.significance.total_methods
    );
    if !a.data_quality.adequate_sample {
        out.push_str("Note: fewer than 10 annotated variants; results are low confidence.\n");
    }
    out.push('\n');

    out.push_str("5. Statistical validation\n");
    if report.statistical_validation.is_empty() {
        out.push_str("No score pairs available.\n");
    }
    for (pair, results) in &report.statistical_validation {
        let _ = writeln!(out, "[{pair}]");
        for r in results {
            let _ = writeln!(out, "  {r}");
        }
    }
    out.push('\n');

    out.push_str("6. Interpretation\n");
    out.push_str(&report.interpretation);
    out.push('\n');

    out.push_str("7. Recommendations\n");
    for (i, rec) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{}. {rec}", i + 1);
    }

    out
}
