use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::Element;
use crate::tables::variants::{ClinicalSignificance, VariantDef, builtin_variants, lookup_variant};

const NO_CALLS: &[&str] = &["--", "II", "DD"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Genotype(String);

impl Genotype {
    pub fn new(call: &str) -> Self {
        Genotype(call.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-allele call, if this genotype has exactly two alleles.
    pub fn alleles(&self) -> Option<(char, char)> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Some((a, b)),
            _ => None,
        }
    }

    pub fn is_homozygous(&self) -> Option<bool> {
        self.alleles().map(|(a, b)| a == b)
    }

    /// 0 for homozygous low alleles (A..G), 2 for other homozygous calls, 1 for heterozygous.
    /// No-calls and indels have no class.
    pub fn numeric_class(&self) -> Option<u8> {
        if NO_CALLS.contains(&self.0.as_str()) {
            return None;
        }
        let (a, b) = self.alleles()?;
        if a == b {
            Some(if a <= 'G' { 0 } else { 2 })
        } else {
            Some(1)
        }
    }

    pub fn category(&self) -> Option<&'static str> {
        self.numeric_class().map(|c| match c {
            0 => "sensitive",
            2 => "extreme",
            _ => "intermediate",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneticVariant {
    pub rsid: String,
    pub genotype: Genotype,
    #[serde(skip)]
    pub annotation: Option<&'static VariantDef>,
}

impl GeneticVariant {
    pub fn gene(&self) -> Option<&'static str> {
        self.annotation.map(|a| a.gene)
    }

    pub fn pathway(&self) -> Option<&'static str> {
        self.annotation.map(|a| a.pathway)
    }

    pub fn element(&self) -> Option<Element> {
        self.annotation.map(|a| a.element)
    }

    pub fn effect_size(&self) -> Option<f64> {
        self.annotation.map(|a| a.effect_size)
    }

    pub fn clinical_significance(&self) -> Option<ClinicalSignificance> {
        self.annotation.map(|a| a.significance)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneticProfile {
    pub sample_id: String,
    pub variants: BTreeMap<String, GeneticVariant>,
    pub total_snps_processed: usize,
}

impl GeneticProfile {
    /// Build a profile from raw rsid → genotype calls, annotating every rsid known
    /// to the variant table. Unknown rsids stay in the profile for polygenic scoring.
    pub fn from_genotypes<'a, I>(sample_id: &str, calls: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut variants = BTreeMap::new();
        let mut total = 0usize;
        for (rsid, call) in calls {
            total += 1;
            let rsid = rsid.trim();
            if rsid.is_empty() {
                continue;
            }
            if variants.contains_key(rsid) {
                tracing::warn!(rsid, "duplicate variant call; keeping first");
                continue;
            }
            variants.insert(
                rsid.to_string(),
                GeneticVariant {
                    rsid: rsid.to_string(),
                    genotype: Genotype::new(call),
                    annotation: lookup_variant(rsid),
                },
            );
        }
        let profile = GeneticProfile {
            sample_id: sample_id.to_string(),
            variants,
            total_snps_processed: total,
        };
        tracing::info!(
            sample = %profile.sample_id,
            total = profile.total_snps_processed,
            annotated = profile.annotated_count(),
            known = builtin_variants().len(),
            "genetic profile assembled"
        );
        profile
    }

    pub fn genotype(&self, rsid: &str) -> Option<&Genotype> {
        self.variants.get(rsid).map(|v| &v.genotype)
    }

    pub fn annotated(&self) -> impl Iterator<Item = &GeneticVariant> {
        self.variants.values().filter(|v| v.annotation.is_some())
    }

    pub fn annotated_count(&self) -> usize {
        self.annotated().count()
    }

    /// Fraction of the variant table covered by this profile.
    pub fn coverage(&self) -> f64 {
        let known = builtin_variants().len();
        if known == 0 {
            return 0.0;
        }
        self.annotated_count() as f64 / known as f64
    }

    pub fn by_element(&self) -> BTreeMap<Element, Vec<&GeneticVariant>> {
        let mut out: BTreeMap<Element, Vec<&GeneticVariant>> = BTreeMap::new();
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            out.insert(element, Vec::new());
        }
        for variant in self.annotated() {
            if let Some(element) = variant.element() {
                out.entry(element).or_default().push(variant);
            }
        }
        out
    }

    /// Annotated variant counts per clinical significance band.
    pub fn by_significance(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for significance in self.annotated().filter_map(GeneticVariant::clinical_significance) {
            *out.entry(significance.name()).or_insert(0) += 1;
        }
        out
    }

    pub fn by_pathway(&self) -> BTreeMap<&'static str, Vec<&GeneticVariant>> {
        let mut out: BTreeMap<&'static str, Vec<&GeneticVariant>> = BTreeMap::new();
        for variant in self.annotated() {
            if let Some(pathway) = variant.pathway() {
                out.entry(pathway).or_default().push(variant);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/genetics.rs"]
mod tests;
