use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
            Planet::Pluto => "pluto",
        }
    }

    /// Title-cased name for report text.
    pub fn title(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    /// The seven visible planets carry traditional dignities; the outer three do not.
    pub fn is_traditional(self) -> bool {
        !matches!(self, Planet::Uranus | Planet::Neptune | Planet::Pluto)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name() == lower)
            .ok_or_else(|| AnalysisError::InvalidArgument(format!("unknown planet: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const ZODIAC: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Ecliptic longitude in degrees; values outside [0, 360) are wrapped.
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = normalize_longitude(longitude);
        let idx = ((lon / 30.0).floor() as usize).min(11);
        ZODIAC[idx]
    }

    pub fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn normalize_longitude(longitude: f64) -> f64 {
    let lon = longitude.rem_euclid(360.0);
    if lon >= 360.0 { 0.0 } else { lon }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub longitude: f64,
    #[serde(default)]
    pub house: Option<u8>,
}

impl PlanetPosition {
    pub fn sign(&self) -> Sign {
        Sign::from_longitude(self.longitude)
    }

    pub fn degree_in_sign(&self) -> f64 {
        normalize_longitude(self.longitude) % 30.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BirthChart {
    pub planets: BTreeMap<Planet, PlanetPosition>,
    #[serde(default)]
    pub house_cusps: Option<[f64; 12]>,
}

impl BirthChart {
    /// Fill in missing house placements from the cusps, when cusps are known.
    pub fn resolve_houses(&mut self) {
        let Some(cusps) = self.house_cusps else {
            return;
        };
        for pos in self.planets.values_mut() {
            if pos.house.is_none() {
                pos.house = Some(find_house(pos.longitude, &cusps));
            }
        }
    }

    pub fn position(&self, planet: Planet) -> Result<&PlanetPosition, AnalysisError> {
        self.planets
            .get(&planet)
            .ok_or(AnalysisError::PlanetNotInChart(planet))
    }

    /// Fraction of the ten charted bodies present.
    pub fn completeness(&self) -> f64 {
        self.planets.len() as f64 / ALL_PLANETS.len() as f64
    }
}

/// House containing `longitude` given twelve cusp longitudes. Falls back to the first house.
pub fn find_house(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_longitude(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if start > end {
            lon >= start || lon < end
        } else {
            start <= lon && lon < end
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

const MAJOR_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

pub const DEFAULT_ASPECT_ORB: f64 = 8.0;

#[derive(Debug, Clone, Serialize)]
pub struct Aspect {
    pub first: Planet,
    pub second: Planet,
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

/// Major aspects between every planet pair; the first matching aspect wins.
pub fn find_aspects(chart: &BirthChart, orb: f64) -> Vec<Aspect> {
    let planets: Vec<(&Planet, &PlanetPosition)> = chart.planets.iter().collect();
    let mut out = Vec::new();
    for (i, (first, p1)) in planets.iter().enumerate() {
        for (second, p2) in planets.iter().skip(i + 1) {
            let mut angle =
                (normalize_longitude(p1.longitude) - normalize_longitude(p2.longitude)).abs();
            if angle > 180.0 {
                angle = 360.0 - angle;
            }
            for kind in MAJOR_ASPECTS {
                let deviation = (angle - kind.exact_angle()).abs();
                if deviation <= orb {
                    out.push(Aspect {
                        first: **first,
                        second: **second,
                        kind,
                        angle,
                        orb: deviation,
                    });
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/chart.rs"]
mod tests;
