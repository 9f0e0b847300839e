use super::*;

fn profile(calls: &[(&str, &str)]) -> GeneticProfile {
    GeneticProfile::from_genotypes("test", calls.iter().copied())
}

#[test]
fn test_pathway_scores_average_contributions() {
    let p = profile(&[
        ("rs1815739", "TT"),
        ("rs1800795", "CG"),
        ("rs361525", "AA"),
    ]);
    let scores = pathway_scores(&p);
    assert!((scores["athletic"] - 1.2).abs() < 1e-12);
    assert!((scores["inflammation"] - 0.225).abs() < 1e-12);
    assert_eq!(scores.len(), 2);
}

#[test]
fn test_no_calls_are_excluded() {
    let p = profile(&[("rs6295", "--"), ("rs1006737", "AG")]);
    let scores = pathway_scores(&p);
    assert!((scores["emotional"] - 0.55).abs() < 1e-12);

    let only_missing = profile(&[("rs6295", "--")]);
    assert!(pathway_scores(&only_missing).is_empty());
}

#[test]
fn test_negative_effect_sizes_pass_through() {
    let p = profile(&[("rs7412", "TT")]);
    assert!((pathway_scores(&p)["cardiovascular"] + 1.8).abs() < 1e-12);
}

#[test]
fn test_planetary_aggregation() {
    let p = profile(&[
        ("rs1815739", "TT"),
        ("rs1800795", "CG"),
        ("rs361525", "AA"),
    ]);
    let planets = planetary_pathway_scores(&p);
    assert_eq!(planets.len(), 7);

    let mars = &planets[&Planet::Mars];
    assert_eq!(mars.pathway_count, 2);
    assert!((mars.total_score - 0.7125).abs() < 1e-12);
    assert!(mars.pathway_scores.contains_key("athletic"));

    let saturn = &planets[&Planet::Saturn];
    assert_eq!(saturn.pathway_count, 0);
    assert_eq!(saturn.total_score, 0.0);
    assert!(saturn.pathway_scores.is_empty());
}
