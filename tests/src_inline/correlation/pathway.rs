use super::*;
use crate::chart::PlanetPosition;
use crate::error::AnalysisError;

fn chart_with_houses() -> BirthChart {
    let mut chart = BirthChart::default();
    for (planet, longitude, house) in [
        (Planet::Sun, 125.0, Some(10)),
        (Planet::Moon, 40.0, Some(5)),
        (Planet::Mercury, 155.0, None),
        (Planet::Venus, 160.0, Some(12)),
        (Planet::Mars, 215.0, Some(1)),
        (Planet::Jupiter, 100.0, Some(8)),
        (Planet::Saturn, 10.0, Some(3)),
    ] {
        chart
            .planets
            .insert(planet, PlanetPosition { longitude, house });
    }
    chart
}

fn pathway_profile() -> GeneticProfile {
    GeneticProfile::from_genotypes(
        "fixture",
        [
            ("rs429358", "TT"),
            ("rs1815739", "CT"),
            ("rs1800795", "GG"),
            ("rs6265", "CT"),
            ("rs6295", "CG"),
            ("rs1801282", "CG"),
            ("rs662", "TT"),
        ],
    )
}

#[test]
fn test_planetary_strengths_add_house() {
    let strengths = PathwayCorrelation::default()
        .planetary_strengths(&chart_with_houses())
        .unwrap();
    assert_eq!(strengths.len(), 7);
    assert_eq!(strengths[&Planet::Sun], 10.0);
    assert_eq!(strengths[&Planet::Moon], 5.0);
    assert_eq!(strengths[&Planet::Mercury], 9.0);
    assert_eq!(strengths[&Planet::Mars], 10.0);
}

#[test]
fn test_analyze_structure() {
    let result = PathwayCorrelation::default()
        .analyze(&chart_with_houses(), &pathway_profile())
        .unwrap();
    assert_eq!(result.sample_size, 7);
    assert_eq!(result.individual_correlations.len(), 7);
    assert_eq!(result.pathway_scores.len(), 7);
    assert!((-1.0..=1.0).contains(&result.overall_correlation));
    assert!((0.0..=1.0).contains(&result.p_value));
    assert!((0.0..=1.0).contains(&result.confidence_level));

    let sun = &result.individual_correlations[&Planet::Sun];
    assert!((sun.pathway_score - 2.5).abs() < 1e-12);
    assert!((sun.significance - 1.0 / 3.0).abs() < 1e-12);

    for w in result.strongest_correlations.windows(2) {
        assert!(w[0].strength >= w[1].strength);
    }
    let (x, y) = result.paired_values();
    assert_eq!(x.len(), y.len());
}

#[test]
fn test_empty_profile_degrades_to_null() {
    let empty = GeneticProfile::from_genotypes("empty", std::iter::empty());
    let result = PathwayCorrelation::default()
        .analyze(&chart_with_houses(), &empty)
        .unwrap();
    assert_eq!(result.overall_correlation, 0.0);
    assert_eq!(result.p_value, 1.0);
}

#[test]
fn test_small_chart_skips_overall_test() {
    let mut chart = BirthChart::default();
    chart.planets.insert(
        Planet::Sun,
        PlanetPosition {
            longitude: 125.0,
            house: None,
        },
    );
    let result = PathwayCorrelation::default()
        .analyze(&chart, &pathway_profile())
        .unwrap();
    assert_eq!(result.sample_size, 1);
    assert_eq!((result.overall_correlation, result.p_value), (0.0, 1.0));
}

#[test]
fn test_specific_rulership_confirmed() {
    let test = PathwayCorrelation::default()
        .test_specific_rulership(
            &chart_with_houses(),
            &pathway_profile(),
            Planet::Sun,
            "cardiovascular",
        )
        .unwrap();
    assert_eq!(test.planet_strength, 10.0);
    assert!((test.pathway_score - 2.5).abs() < 1e-12);
    assert!(test.passed);
    assert_eq!(test.significance, test.correlation.abs());
    assert!(test.interpretation.contains("rulership confirmed"));
}

#[test]
fn test_specific_rulership_unknown_pathway() {
    let test = PathwayCorrelation::default()
        .test_specific_rulership(
            &chart_with_houses(),
            &pathway_profile(),
            Planet::Venus,
            "telepathy",
        )
        .unwrap();
    assert_eq!(test.pathway_score, 0.0);
    assert_eq!(test.correlation.abs(), 0.0);
    assert!(!test.passed);
    assert!(test.interpretation.contains("not confirmed"));
}

#[test]
fn test_specific_rulership_missing_planet() {
    let err = PathwayCorrelation::default()
        .test_specific_rulership(
            &BirthChart::default(),
            &pathway_profile(),
            Planet::Mars,
            "athletic",
        )
        .unwrap_err();
    assert!(matches!(err, AnalysisError::PlanetNotInChart(Planet::Mars)));
}
