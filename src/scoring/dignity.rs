use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::{BirthChart, Planet, Sign};
use crate::error::Result;
use crate::tables::dignities::{
    DETRIMENT_POINTS, DOMICILE_POINTS, EXALTATION_POINTS, FALL_POINTS, TRIPLICITY_POINTS,
    rulership, triplicity_rulers,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sect {
    Day,
    Night,
}

#[derive(Debug, Clone, Serialize)]
pub struct DignityScore {
    pub planet: Planet,
    pub sign: Sign,
    pub degree: f64,
    pub domicile: i32,
    pub exaltation: i32,
    pub triplicity: i32,
    pub term: i32,
    pub face: i32,
    pub detriment: i32,
    pub fall: i32,
    pub total: i32,
}

impl DignityScore {
    pub fn breakdown(&self) -> [(&'static str, i32); 7] {
        [
            ("domicile", self.domicile),
            ("exaltation", self.exaltation),
            ("triplicity", self.triplicity),
            ("term", self.term),
            ("face", self.face),
            ("detriment", self.detriment),
            ("fall", self.fall),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetStrength {
    pub planet: Planet,
    pub total_score: i32,
    pub sign: Sign,
    pub degree: f64,
}

/// Essential dignity scoring. Terms and faces are not scored.
#[derive(Debug, Clone)]
pub struct DignityScorer {
    pub sect: Sect,
}

impl Default for DignityScorer {
    fn default() -> Self {
        Self { sect: Sect::Day }
    }
}

impl DignityScorer {
    pub fn score(&self, chart: &BirthChart, planet: Planet) -> Result<DignityScore> {
        let pos = chart.position(planet)?;
        let sign = pos.sign();

        let mut out = DignityScore {
            planet,
            sign,
            degree: pos.degree_in_sign(),
            domicile: 0,
            exaltation: 0,
            triplicity: 0,
            term: 0,
            face: 0,
            detriment: 0,
            fall: 0,
            total: 0,
        };

        if let Some(rules) = rulership(planet) {
            if rules.domiciles.contains(&sign) {
                out.domicile = DOMICILE_POINTS;
            }
            if rules.exaltation == sign {
                out.exaltation = EXALTATION_POINTS;
            }
            if rules.detriments.contains(&sign) {
                out.detriment = DETRIMENT_POINTS;
            }
            if rules.fall == sign {
                out.fall = FALL_POINTS;
            }
        }

        let (day, night) = triplicity_rulers(sign.element());
        let ruler = match self.sect {
            Sect::Day => day,
            Sect::Night => night,
        };
        if ruler == planet {
            out.triplicity = TRIPLICITY_POINTS;
        }

        out.total = out.breakdown().iter().map(|(_, v)| v).sum();
        Ok(out)
    }

    /// Scores every traditional planet present in the chart; outer planets are skipped.
    pub fn score_all(&self, chart: &BirthChart) -> Result<BTreeMap<Planet, DignityScore>> {
        let mut out = BTreeMap::new();
        for &planet in chart.planets.keys() {
            if !planet.is_traditional() {
                continue;
            }
            out.insert(planet, self.score(chart, planet)?);
        }
        Ok(out)
    }

    pub fn chart_strength(&self, chart: &BirthChart) -> Result<i32> {
        Ok(self.score_all(chart)?.values().map(|d| d.total).sum())
    }

    pub fn strongest_planets(&self, chart: &BirthChart, n: usize) -> Result<Vec<PlanetStrength>> {
        let mut scored: Vec<DignityScore> = self.score_all(chart)?.into_values().collect();
        scored.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(scored
            .into_iter()
            .take(n)
            .map(|d| PlanetStrength {
                planet: d.planet,
                total_score: d.total,
                sign: d.sign,
                degree: d.degree,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/dignity.rs"]
mod tests;
