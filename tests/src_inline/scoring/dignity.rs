use super::*;
use crate::chart::PlanetPosition;
use crate::error::AnalysisError;

fn chart(positions: &[(Planet, f64)]) -> BirthChart {
    let mut chart = BirthChart::default();
    for &(planet, longitude) in positions {
        chart.planets.insert(
            planet,
            PlanetPosition {
                longitude,
                house: None,
            },
        );
    }
    chart
}

fn total(scorer: &DignityScorer, planet: Planet, longitude: f64) -> i32 {
    scorer
        .score(&chart(&[(planet, longitude)]), planet)
        .unwrap()
        .total
}

#[test]
fn test_sun_scores_by_sign() {
    let day = DignityScorer::default();
    // Leo: domicile + day fire triplicity
    assert_eq!(total(&day, Planet::Sun, 125.0), 8);
    // Aries: exaltation + day fire triplicity
    assert_eq!(total(&day, Planet::Sun, 10.0), 7);
    assert_eq!(total(&day, Planet::Sun, 305.0), -5);
    assert_eq!(total(&day, Planet::Sun, 190.0), -4);
    assert_eq!(total(&day, Planet::Sun, 70.0), 0);
}

#[test]
fn test_night_sect_moves_triplicity() {
    let night = DignityScorer { sect: Sect::Night };
    assert_eq!(total(&night, Planet::Sun, 125.0), 5);
    assert_eq!(total(&night, Planet::Jupiter, 125.0), 3);
    assert_eq!(total(&DignityScorer::default(), Planet::Jupiter, 125.0), 0);
}

#[test]
fn test_combined_dignities() {
    let day = DignityScorer::default();
    // Mercury in Virgo: domicile + exaltation
    assert_eq!(total(&day, Planet::Mercury, 155.0), 9);
    // Mars in Scorpio: domicile + water triplicity (both sects)
    assert_eq!(total(&day, Planet::Mars, 215.0), 8);
    // Venus in Virgo: fall, day earth triplicity
    assert_eq!(total(&day, Planet::Venus, 160.0), -1);
}

#[test]
fn test_breakdown_sums_to_total() {
    let day = DignityScorer::default();
    let c = chart(&[(Planet::Moon, 40.0)]);
    let score = day.score(&c, Planet::Moon).unwrap();
    assert_eq!(score.sign, Sign::Taurus);
    assert_eq!(score.exaltation, 4);
    assert_eq!(score.term, 0);
    assert_eq!(score.face, 0);
    let sum: i32 = score.breakdown().iter().map(|(_, v)| v).sum();
    assert_eq!(sum, score.total);
    assert!((score.degree - 10.0).abs() < 1e-9);
}

#[test]
fn test_outer_planets_score_zero_and_are_skipped() {
    let day = DignityScorer::default();
    let c = chart(&[(Planet::Sun, 125.0), (Planet::Uranus, 125.0)]);
    assert_eq!(day.score(&c, Planet::Uranus).unwrap().total, 0);
    let all = day.score_all(&c).unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.contains_key(&Planet::Sun));
}

#[test]
fn test_missing_planet_errors() {
    let day = DignityScorer::default();
    assert!(matches!(
        day.score(&BirthChart::default(), Planet::Mars),
        Err(AnalysisError::PlanetNotInChart(Planet::Mars))
    ));
}

#[test]
fn test_chart_strength_and_strongest() {
    let day = DignityScorer::default();
    let c = chart(&[
        (Planet::Sun, 125.0),
        (Planet::Moon, 280.0),
        (Planet::Mars, 215.0),
    ]);
    // Sun 8, Moon in Capricorn -5, Mars 8
    assert_eq!(day.chart_strength(&c).unwrap(), 11);
    let strongest = day.strongest_planets(&c, 2).unwrap();
    assert_eq!(strongest.len(), 2);
    assert!(strongest.iter().all(|p| p.total_score == 8));
    assert!(strongest.iter().all(|p| p.planet != Planet::Moon));
}
