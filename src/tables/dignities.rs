use crate::chart::{Element, Planet, Sign};

pub const DOMICILE_POINTS: i32 = 5;
pub const EXALTATION_POINTS: i32 = 4;
pub const TRIPLICITY_POINTS: i32 = 3;
pub const DETRIMENT_POINTS: i32 = -5;
pub const FALL_POINTS: i32 = -4;

#[derive(Debug, Clone, Copy)]
pub struct RulershipDef {
    pub planet: Planet,
    pub domiciles: &'static [Sign],
    pub exaltation: Sign,
    pub detriments: &'static [Sign],
    pub fall: Sign,
}

const TRADITIONAL_RULERSHIPS: &[RulershipDef] = &[
    RulershipDef {
        planet: Planet::Sun,
        domiciles: &[Sign::Leo],
        exaltation: Sign::Aries,
        detriments: &[Sign::Aquarius],
        fall: Sign::Libra,
    },
    RulershipDef {
        planet: Planet::Moon,
        domiciles: &[Sign::Cancer],
        exaltation: Sign::Taurus,
        detriments: &[Sign::Capricorn],
        fall: Sign::Scorpio,
    },
    RulershipDef {
        planet: Planet::Mercury,
        domiciles: &[Sign::Gemini, Sign::Virgo],
        exaltation: Sign::Virgo,
        detriments: &[Sign::Sagittarius, Sign::Pisces],
        fall: Sign::Pisces,
    },
    RulershipDef {
        planet: Planet::Venus,
        domiciles: &[Sign::Taurus, Sign::Libra],
        exaltation: Sign::Pisces,
        detriments: &[Sign::Scorpio, Sign::Aries],
        fall: Sign::Virgo,
    },
    RulershipDef {
        planet: Planet::Mars,
        domiciles: &[Sign::Aries, Sign::Scorpio],
        exaltation: Sign::Capricorn,
        detriments: &[Sign::Libra, Sign::Taurus],
        fall: Sign::Cancer,
    },
    RulershipDef {
        planet: Planet::Jupiter,
        domiciles: &[Sign::Sagittarius, Sign::Pisces],
        exaltation: Sign::Cancer,
        detriments: &[Sign::Gemini, Sign::Virgo],
        fall: Sign::Capricorn,
    },
    RulershipDef {
        planet: Planet::Saturn,
        domiciles: &[Sign::Capricorn, Sign::Aquarius],
        exaltation: Sign::Libra,
        detriments: &[Sign::Cancer, Sign::Leo],
        fall: Sign::Aries,
    },
];

pub fn rulership(planet: Planet) -> Option<&'static RulershipDef> {
    TRADITIONAL_RULERSHIPS.iter().find(|r| r.planet == planet)
}

/// Day and night triplicity rulers per element.
pub fn triplicity_rulers(element: Element) -> (Planet, Planet) {
    match element {
        Element::Fire => (Planet::Sun, Planet::Jupiter),
        Element::Earth => (Planet::Venus, Planet::Moon),
        Element::Air => (Planet::Saturn, Planet::Mercury),
        Element::Water => (Planet::Mars, Planet::Mars),
    }
}
