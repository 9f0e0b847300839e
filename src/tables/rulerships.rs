use crate::chart::Planet;

/// Polygenic traits traditionally ruled by each planet. Several have no
/// weight table and are skipped when scoring.
const PLANET_TRAITS: &[(Planet, &[&str])] = &[
    (Planet::Sun, &["cardiovascular_disease", "vitality"]),
    (Planet::Moon, &["emotional_regulation", "circadian"]),
    (Planet::Mercury, &["cognitive_ability", "nervous_system"]),
    (Planet::Venus, &["metabolic_efficiency", "hormonal"]),
    (Planet::Mars, &["inflammatory_response", "athletic_performance"]),
    (Planet::Jupiter, &["growth", "liver_function"]),
    (Planet::Saturn, &["structural", "aging"]),
];

const PLANET_PATHWAYS: &[(Planet, &[&str])] = &[
    (Planet::Sun, &["cardiovascular"]),
    (Planet::Moon, &["emotional"]),
    (Planet::Mercury, &["neurotransmitter"]),
    (Planet::Venus, &["metabolic"]),
    (Planet::Mars, &["inflammation", "athletic"]),
    (Planet::Jupiter, &["detoxification", "drug_metabolism"]),
    (Planet::Saturn, &["structural"]),
];

const TRAIT_PLANET: &[(&str, Planet)] = &[
    ("cardiovascular_disease", Planet::Sun),
    ("cognitive_ability", Planet::Mercury),
    ("inflammatory_response", Planet::Mars),
    ("metabolic_efficiency", Planet::Venus),
    ("athletic_performance", Planet::Mars),
];

pub fn planet_traits() -> &'static [(Planet, &'static [&'static str])] {
    PLANET_TRAITS
}

pub fn planet_pathways() -> &'static [(Planet, &'static [&'static str])] {
    PLANET_PATHWAYS
}

pub fn pathways_for(planet: Planet) -> &'static [&'static str] {
    PLANET_PATHWAYS
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, pathways)| *pathways)
        .unwrap_or(&[])
}

pub fn trait_planets() -> &'static [(&'static str, Planet)] {
    TRAIT_PLANET
}

/// Angular houses score 2, succedent 1, cadent and unknown 0.
pub fn house_strength(house: Option<u8>) -> f64 {
    match house {
        Some(1 | 4 | 7 | 10) => 2.0,
        Some(2 | 5 | 8 | 11) => 1.0,
        _ => 0.0,
    }
}
