use std::collections::BTreeMap;

use rand::Rng;

use crate::pipeline::stage2_methods::MethodResults;
use crate::stats::validator::{StatisticalValidator, ValidationResult};

pub type ValidationReport = BTreeMap<String, Vec<ValidationResult>>;

/// Named (x, y) score pairs, one per completed method.
pub fn validation_pairs(results: &MethodResults) -> BTreeMap<String, (Vec<f64>, Vec<f64>)> {
    let mut pairs = BTreeMap::new();
    if let Some(d) = &results.dignity {
        pairs.insert("dignity".to_string(), d.paired_values());
    }
    if let Some(p) = &results.pathway {
        pairs.insert("pathway".to_string(), p.paired_values());
    }
    if let Some(g) = &results.polygenic {
        pairs.insert("polygenic".to_string(), g.paired_values());
    }
    pairs
}

pub fn run_stage4<R: Rng + ?Sized>(
    results: &MethodResults,
    validator: &StatisticalValidator,
    rng: &mut R,
) -> ValidationReport {
    let pairs = validation_pairs(results);
    let report = validator.comprehensive_validation(&pairs, rng);

    let passed = report.values().flatten().filter(|r| r.passed).count();
    let total: usize = report.values().map(Vec::len).sum();
    tracing::info!(pairs = pairs.len(), tests = total, passed, "stage 4: validation complete");
    report
}
