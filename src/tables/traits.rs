#[derive(Debug, Clone, Copy)]
pub struct TraitWeight {
    pub rsid: &'static str,
    pub weight: f64,
}

/// Lower z bound (inclusive) for each category, checked in order; `descending`
/// flips the comparison for traits where a low score is favourable.
#[derive(Debug, Clone)]
pub struct RiskBands {
    pub descending: bool,
    pub bands: Vec<(f64, String)>,
    pub fallback: String,
}

impl RiskBands {
    pub fn classify(&self, z: f64) -> &str {
        for (bound, label) in &self.bands {
            let hit = if self.descending {
                z <= *bound
            } else {
                z >= *bound
            };
            if hit {
                return label;
            }
        }
        &self.fallback
    }
}

#[derive(Debug, Clone)]
pub struct TraitDef {
    pub name: String,
    pub weights: Vec<TraitWeight>,
    pub population_mean: f64,
    pub population_std: f64,
    pub bands: RiskBands,
}

impl TraitDef {
    /// Risk- or disease-type traits rank by high percentile; ability traits rank by low.
    pub fn is_risk_trait(&self) -> bool {
        self.name.contains("risk") || self.name.contains("disease")
    }
}

fn weights(entries: &[(&'static str, f64)]) -> Vec<TraitWeight> {
    entries
        .iter()
        .map(|&(rsid, weight)| TraitWeight { rsid, weight })
        .collect()
}

fn bands(descending: bool, entries: &[(f64, &str)], fallback: &str) -> RiskBands {
    RiskBands {
        descending,
        bands: entries
            .iter()
            .map(|&(bound, label)| (bound, label.to_string()))
            .collect(),
        fallback: fallback.to_string(),
    }
}

pub fn builtin_traits() -> Vec<TraitDef> {
    vec![
        TraitDef {
            name: "cardiovascular_disease".to_string(),
            weights: weights(&[
                ("rs429358", 0.35),
                ("rs7412", -0.28),
                ("rs662", 0.15),
                ("rs1333049", 0.22),
                ("rs1801133", 0.12),
            ]),
            population_mean: 0.0,
            population_std: 1.0,
            bands: bands(
                false,
                &[(1.5, "High Risk"), (0.5, "Moderate Risk"), (-0.5, "Average Risk")],
                "Low Risk",
            ),
        },
        TraitDef {
            name: "cognitive_ability".to_string(),
            weights: weights(&[
                ("rs4680", -0.18),
                ("rs6265", 0.25),
                ("rs25531", 0.15),
                ("rs1800497", -0.12),
            ]),
            population_mean: 0.0,
            population_std: 1.0,
            bands: bands(
                false,
                &[(1.0, "High Ability"), (0.0, "Above Average"), (-1.0, "Average")],
                "Below Average",
            ),
        },
        TraitDef {
            name: "inflammatory_response".to_string(),
            weights: weights(&[
                ("rs1800629", 0.30),
                ("rs1800896", -0.20),
                ("rs1143634", 0.25),
                ("rs16944", 0.18),
            ]),
            population_mean: 0.0,
            population_std: 1.0,
            bands: bands(
                false,
                &[(1.2, "High Inflammation"), (0.0, "Moderate Inflammation")],
                "Low Inflammation",
            ),
        },
        TraitDef {
            name: "metabolic_efficiency".to_string(),
            weights: weights(&[
                ("rs1801133", 0.22),
                ("rs1801282", -0.28),
                ("rs7903146", 0.32),
                ("rs9939609", 0.18),
            ]),
            population_mean: 0.0,
            population_std: 1.0,
            bands: bands(
                true,
                &[(-0.5, "Highly Efficient"), (0.0, "Efficient"), (1.0, "Average")],
                "Inefficient",
            ),
        },
        TraitDef {
            name: "athletic_performance".to_string(),
            weights: weights(&[
                ("rs1815739", 0.45),
                ("rs4994", 0.25),
                ("rs1800012", 0.15),
            ]),
            population_mean: 0.0,
            population_std: 1.0,
            bands: bands(
                false,
                &[(1.8, "Elite Potential"), (1.0, "High Potential"), (0.0, "Above Average")],
                "Average",
            ),
        },
    ]
}
