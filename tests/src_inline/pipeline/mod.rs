use super::*;
use crate::input::parse_input;

pub(crate) const FULL_REQUEST: &str = r#"{
    "sample_id": "pipeline-subject",
    "chart": {
        "planets": {
            "sun": {"longitude": 125.0, "house": 10},
            "moon": {"longitude": 40.0, "house": 5},
            "mercury": {"longitude": 155.0, "house": 11},
            "venus": {"longitude": 160.0, "house": 12},
            "mars": {"longitude": 215.0, "house": 1},
            "jupiter": {"longitude": 100.0, "house": 8},
            "saturn": {"longitude": 10.0, "house": 3},
            "uranus": {"longitude": 300.0},
            "neptune": {"longitude": 290.0},
            "pluto": {"longitude": 240.0}
        }
    },
    "genotypes": {
        "rs429358": "CT", "rs7412": "CC", "rs1333049": "CG", "rs10757278": "AG",
        "rs1815739": "TT", "rs1800795": "GC", "rs1143634": "CT", "rs361525": "AG",
        "rs6265": "CT", "rs4680": "AG", "rs53576": "AA", "rs1800497": "CT",
        "rs6295": "CG", "rs1006737": "AG", "rs4570625": "GT",
        "rs1801282": "CG", "rs7903146": "CT", "rs1801133": "CT",
        "rs662": "AG", "rs1045642": "CT"
    }
}"#;

fn fast_profile() -> AnalysisProfile {
    AnalysisProfile {
        n_bootstrap: 100,
        n_permutations: 100,
        ..AnalysisProfile::default_v1()
    }
}

#[test]
fn test_run_analysis_full_request() {
    let input = parse_input(FULL_REQUEST).unwrap();
    let report = run_analysis(&input, &fast_profile()).unwrap();

    assert_eq!(report.sample_id, "pipeline-subject");
    assert_eq!(report.tool.seed, 42);
    assert!(report.skipped_methods.is_empty());
    assert_eq!(report.method_summaries.len(), 3);
    assert!(report.methods.dignity.is_some());
    assert!(report.methods.pathway.is_some());
    assert!(report.methods.polygenic.is_some());

    assert!((-1.0..=1.0).contains(&report.overall_correlation));
    assert_eq!(report.overall_correlation, report.meta.combined_correlation);
    assert!(report.meta.top_correlations.len() <= 5);

    assert_eq!(report.chart.planet_count, 10);
    assert_eq!(report.genetics.annotated_variants, 20);
    assert_eq!(
        report.genetics.significance_distribution.values().sum::<usize>(),
        20
    );
    assert_eq!(report.planetary_mapping.len(), 7);

    let keys: Vec<&str> = report
        .statistical_validation
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["dignity", "pathway", "polygenic"]);
    for results in report.statistical_validation.values() {
        for r in results {
            assert!((0.0..=1.0).contains(&r.p_value), "{r}");
        }
    }

    assert!(report.interpretation.contains("Combined correlation"));
    assert!(!report.recommendations.is_empty());
}

#[test]
fn test_run_analysis_is_deterministic() {
    let input = parse_input(FULL_REQUEST).unwrap();
    let a = run_analysis(&input, &fast_profile()).unwrap();
    let b = run_analysis(&input, &fast_profile()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_sparse_chart_skips_dignity_method() {
    let input = parse_input(
        r#"{"sample_id": "sparse",
            "chart": {"planets": {"sun": {"longitude": 125.0}, "moon": {"longitude": 40.0}}},
            "genotypes": {"rs429358": "TT"}}"#,
    )
    .unwrap();
    let report = run_analysis(&input, &fast_profile()).unwrap();
    assert!(report.methods.dignity.is_none());
    assert_eq!(report.skipped_methods.len(), 1);
    assert_eq!(report.skipped_methods[0].method, crate::correlation::MethodKind::Dignity);
    assert_eq!(report.method_summaries.len(), 2);
    assert!(!report.statistical_validation.contains_key("dignity"));
    assert!(
        report
            .recommendations
            .iter()
            .any(|r| r.starts_with("The dignity method could not run"))
    );
}

#[test]
fn test_invalid_profile_is_rejected() {
    let input = parse_input(FULL_REQUEST).unwrap();
    let bad = AnalysisProfile {
        alpha: 0.0,
        ..fast_profile()
    };
    assert!(run_analysis(&input, &bad).is_err());
}
