use super::dignities::{rulership, triplicity_rulers};
use super::rulerships::{house_strength, pathways_for, planet_pathways, planet_traits, trait_planets};
use super::traits::builtin_traits;
use super::variants::{builtin_variants, lookup_variant};
use crate::chart::{Element, Planet, Sign};

#[test]
fn test_variant_table_unique_rsids() {
    let variants = builtin_variants();
    assert_eq!(variants.len(), 22);
    let mut rsids: Vec<&str> = variants.iter().map(|v| v.rsid).collect();
    rsids.sort_unstable();
    rsids.dedup();
    assert_eq!(rsids.len(), variants.len());
}

#[test]
fn test_lookup_variant() {
    let apoe = lookup_variant("rs7412").unwrap();
    assert_eq!(apoe.gene, "APOE");
    assert_eq!(apoe.effect_size, -1.8);
    assert!(lookup_variant("rs0").is_none());
}

#[test]
fn test_rulerships_cover_traditional_planets() {
    for planet in [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ] {
        let rules = rulership(planet).unwrap();
        assert_eq!(rules.planet, planet);
        for sign in rules.domiciles {
            assert!(!rules.detriments.contains(sign));
        }
    }
    assert!(rulership(Planet::Neptune).is_none());
    assert_eq!(rulership(Planet::Sun).unwrap().exaltation, Sign::Aries);
}

#[test]
fn test_triplicity_rulers() {
    assert_eq!(triplicity_rulers(Element::Fire), (Planet::Sun, Planet::Jupiter));
    assert_eq!(triplicity_rulers(Element::Water), (Planet::Mars, Planet::Mars));
}

#[test]
fn test_trait_table_shapes() {
    let traits = builtin_traits();
    assert_eq!(traits.len(), 5);
    for t in &traits {
        assert!(!t.weights.is_empty());
        assert!(t.population_std > 0.0);
    }
    let cardio = traits
        .iter()
        .find(|t| t.name == "cardiovascular_disease")
        .unwrap();
    assert!(cardio.is_risk_trait());
    assert_eq!(cardio.bands.classify(2.0), "High Risk");
    assert_eq!(cardio.bands.classify(0.0), "Average Risk");
    assert_eq!(cardio.bands.classify(-2.0), "Low Risk");
}

#[test]
fn test_descending_bands() {
    let traits = builtin_traits();
    let metabolic = traits
        .iter()
        .find(|t| t.name == "metabolic_efficiency")
        .unwrap();
    assert!(!metabolic.is_risk_trait());
    assert_eq!(metabolic.bands.classify(-1.0), "Highly Efficient");
    assert_eq!(metabolic.bands.classify(-0.2), "Efficient");
    assert_eq!(metabolic.bands.classify(0.5), "Average");
    assert_eq!(metabolic.bands.classify(2.0), "Inefficient");
}

#[test]
fn test_trait_planets_reference_known_traits() {
    let names: Vec<String> = builtin_traits().into_iter().map(|t| t.name).collect();
    for (name, _) in trait_planets() {
        assert!(names.iter().any(|n| n == name), "{name} missing");
    }
    assert_eq!(planet_traits().len(), 7);
}

#[test]
fn test_pathways_for() {
    assert_eq!(pathways_for(Planet::Mars), &["inflammation", "athletic"]);
    assert!(pathways_for(Planet::Pluto).is_empty());
    assert_eq!(planet_pathways().len(), 7);
}

#[test]
fn test_house_strength() {
    assert_eq!(house_strength(Some(10)), 2.0);
    assert_eq!(house_strength(Some(5)), 1.0);
    assert_eq!(house_strength(Some(12)), 0.0);
    assert_eq!(house_strength(None), 0.0);
}
