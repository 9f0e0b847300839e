use crate::chart::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicalSignificance {
    Moderate,
    High,
    VeryHigh,
}

impl ClinicalSignificance {
    pub fn name(self) -> &'static str {
        match self {
            ClinicalSignificance::Moderate => "moderate",
            ClinicalSignificance::High => "high",
            ClinicalSignificance::VeryHigh => "very_high",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VariantDef {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub pathway: &'static str,
    pub element: Element,
    pub effect_size: f64,
    pub significance: ClinicalSignificance,
}

const fn def(
    rsid: &'static str,
    gene: &'static str,
    pathway: &'static str,
    element: Element,
    effect_size: f64,
    significance: ClinicalSignificance,
) -> VariantDef {
    VariantDef {
        rsid,
        gene,
        pathway,
        element,
        effect_size,
        significance,
    }
}

use ClinicalSignificance::{High, Moderate, VeryHigh};
use Element::{Air, Earth, Fire, Water};

const BUILTIN_VARIANTS: &[VariantDef] = &[
    // Fire: inflammation and athletic
    def("rs1800896", "IL10", "inflammation", Fire, 0.5, Moderate),
    def("rs1143634", "IL1B", "inflammation", Fire, 0.7, Moderate),
    def("rs20541", "IL13", "inflammation", Fire, 0.6, Moderate),
    def("rs361525", "TNF", "inflammation", Fire, 0.8, High),
    def("rs1800795", "IL6", "inflammation", Fire, 0.9, High),
    def("rs1815739", "ACTN3", "athletic", Fire, 1.2, High),
    // Earth: metabolic and cardiovascular
    def("rs1801282", "PPARG", "metabolic", Earth, 1.2, High),
    def("rs7903146", "TCF7L2", "metabolic", Earth, 1.5, VeryHigh),
    def("rs1333049", "CDKN2A", "cardiovascular", Earth, 1.1, Moderate),
    def("rs10757278", "CDKN2A", "cardiovascular", Earth, 1.0, Moderate),
    def("rs429358", "APOE", "cardiovascular", Earth, 2.5, VeryHigh),
    def("rs7412", "APOE", "cardiovascular", Earth, -1.8, High),
    // Air: neurotransmitter
    def("rs53576", "OXTR", "neurotransmitter", Air, 0.8, Moderate),
    def("rs6265", "BDNF", "neurotransmitter", Air, 1.0, Moderate),
    def("rs1800497", "DRD2", "neurotransmitter", Air, 0.9, Moderate),
    def("rs4680", "COMT", "neurotransmitter", Air, 0.8, Moderate),
    // Water: emotional
    def("rs6295", "HTR1A", "emotional", Water, 0.7, Moderate),
    def("rs1006737", "CACNA1C", "emotional", Water, 1.1, Moderate),
    def("rs4570625", "TPH2", "emotional", Water, 0.9, Moderate),
    def("rs1801133", "MTHFR", "metabolic", Earth, 1.3, High),
    def("rs662", "PON1", "detoxification", Earth, 0.6, Moderate),
    def("rs1045642", "ABCB1", "drug_metabolism", Earth, 0.7, Moderate),
];

pub fn builtin_variants() -> &'static [VariantDef] {
    BUILTIN_VARIANTS
}

pub fn lookup_variant(rsid: &str) -> Option<&'static VariantDef> {
    BUILTIN_VARIANTS.iter().find(|v| v.rsid == rsid)
}
