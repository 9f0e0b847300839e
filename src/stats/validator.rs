use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{AnalysisError, Result, check_paired};
use crate::stats::{normal_quantile, pearson, percentile_sorted, spearman, spearman_r};

pub const MIN_PAIRED: usize = 3;
pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_RESAMPLES: usize = 1000;
pub const MIN_RESAMPLING_LEN: usize = 5;

pub const VALIDATION_ERROR: &str = "Validation Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
}

impl FromStr for CorrelationMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(CorrelationMethod::Pearson),
            "spearman" => Ok(CorrelationMethod::Spearman),
            other => Err(AnalysisError::InvalidArgument(format!(
                "unknown correlation method: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionMethod {
    Bonferroni,
    Fdr,
}

impl FromStr for CorrectionMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bonferroni" => Ok(CorrectionMethod::Bonferroni),
            "fdr" | "bh" | "benjamini-hochberg" => Ok(CorrectionMethod::Fdr),
            other => Err(AnalysisError::InvalidArgument(format!(
                "unknown correction method: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub test_name: String,
    pub statistic: f64,
    pub p_value: f64,
    pub confidence_interval: (f64, f64),
    pub interpretation: String,
    pub passed: bool,
}

impl ValidationResult {
    fn failed(test_name: &str, statistic: f64, interpretation: String) -> Self {
        ValidationResult {
            test_name: test_name.to_string(),
            statistic,
            p_value: 1.0,
            confidence_interval: (-1.0, 1.0),
            interpretation,
            passed: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.test_name == VALIDATION_ERROR
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: statistic={:.4} p={:.4} ci=[{:.4}, {:.4}] {}",
            self.test_name,
            self.statistic,
            self.p_value,
            self.confidence_interval.0,
            self.confidence_interval.1,
            if self.passed { "PASS" } else { "FAIL" }
        )
    }
}

#[derive(Debug, Clone)]
pub struct StatisticalValidator {
    pub alpha: f64,
    pub n_bootstrap: usize,
    pub n_permutations: usize,
    /// Pairs shorter than this skip the bootstrap and permutation tests.
    pub min_resampling_len: usize,
}

impl Default for StatisticalValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl StatisticalValidator {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            n_bootstrap: DEFAULT_RESAMPLES,
            n_permutations: DEFAULT_RESAMPLES,
            min_resampling_len: MIN_RESAMPLING_LEN,
        }
    }

    pub fn with_resamples(mut self, n_bootstrap: usize, n_permutations: usize) -> Self {
        self.n_bootstrap = n_bootstrap;
        self.n_permutations = n_permutations;
        self
    }

    /// Parametric correlation test with a Fisher-z confidence interval.
    pub fn validate_correlation(
        &self,
        x: &[f64],
        y: &[f64],
        method: CorrelationMethod,
    ) -> Result<ValidationResult> {
        let n = check_paired(x, y, MIN_PAIRED)?;

        let (corr, p_value, test_name) = match method {
            CorrelationMethod::Pearson => {
                let (r, p) = pearson(x, y);
                (r, p, "Pearson Correlation")
            }
            CorrelationMethod::Spearman => {
                let (r, p) = spearman(x, y);
                (r, p, "Spearman Correlation")
            }
        };
        if !corr.is_finite() {
            return Err(AnalysisError::DegenerateInput(format!(
                "{test_name} undefined for constant input"
            )));
        }

        let confidence_interval = fisher_interval(corr, n, self.alpha);

        let passed = p_value < self.alpha;
        let interpretation = if passed {
            format!("Significant correlation detected (p = {p_value:.4})")
        } else {
            format!("No significant correlation (p = {p_value:.4})")
        };

        Ok(ValidationResult {
            test_name: test_name.to_string(),
            statistic: corr,
            p_value,
            confidence_interval,
            interpretation,
            passed,
        })
    }

    pub fn bootstrap_validation<R: Rng + ?Sized>(
        &self,
        x: &[f64],
        y: &[f64],
        n_bootstrap: usize,
        rng: &mut R,
    ) -> Result<ValidationResult> {
        let n = check_paired(x, y, MIN_PAIRED)?;
        let observed = spearman_r(x, y);

        let mut boot = bootstrap_spearman(x, y, n, n_bootstrap, rng);
        if boot.is_empty() {
            return Ok(ValidationResult::failed(
                "Bootstrap Validation",
                observed,
                "Bootstrap validation failed".to_string(),
            ));
        }

        boot.sort_by(f64::total_cmp);
        let lower = percentile_sorted(&boot, 2.5);
        let upper = percentile_sorted(&boot, 97.5);

        let below = boot.iter().filter(|c| c.abs() <= observed.abs()).count();
        let p_value = below as f64 / boot.len() as f64;

        Ok(ValidationResult {
            test_name: "Bootstrap Validation".to_string(),
            statistic: observed,
            p_value,
            confidence_interval: (lower, upper),
            interpretation: format!(
                "Bootstrap validation: {} successful resamples",
                boot.len()
            ),
            passed: lower * upper > 0.0,
        })
    }

    pub fn permutation_test<R: Rng + ?Sized>(
        &self,
        x: &[f64],
        y: &[f64],
        n_permutations: usize,
        rng: &mut R,
    ) -> Result<ValidationResult> {
        check_paired(x, y, MIN_PAIRED)?;
        let observed = spearman_r(x, y);

        let mut shuffled = y.to_vec();
        let mut perm = Vec::with_capacity(n_permutations);
        for _ in 0..n_permutations {
            shuffled.shuffle(rng);
            let r = spearman_r(x, &shuffled);
            if r.is_finite() {
                perm.push(r);
            }
        }

        if perm.is_empty() {
            return Ok(ValidationResult::failed(
                "Permutation Test",
                observed,
                "Permutation test failed".to_string(),
            ));
        }

        let extreme = perm.iter().filter(|c| c.abs() >= observed.abs()).count();
        let p_value = extreme as f64 / perm.len() as f64;

        perm.sort_by(f64::total_cmp);
        let lower = percentile_sorted(&perm, 2.5);
        let upper = percentile_sorted(&perm, 97.5);

        Ok(ValidationResult {
            test_name: "Permutation Test".to_string(),
            statistic: observed,
            p_value,
            confidence_interval: (lower, upper),
            interpretation: format!(
                "Permutation test: {} permutations completed",
                perm.len()
            ),
            passed: p_value < self.alpha,
        })
    }

    /// Runs every applicable test per named pair, then appends FDR-corrected
    /// copies computed over the pooled p-values of all pairs.
    pub fn comprehensive_validation<R: Rng + ?Sized>(
        &self,
        pairs: &BTreeMap<String, (Vec<f64>, Vec<f64>)>,
        rng: &mut R,
    ) -> BTreeMap<String, Vec<ValidationResult>> {
        let mut all: BTreeMap<String, Vec<ValidationResult>> = BTreeMap::new();
        let mut pooled = Vec::new();

        for (name, (x, y)) in pairs {
            match self.validate_pair(x, y, rng) {
                Ok(results) => {
                    pooled.extend(results.iter().map(|r| r.p_value));
                    all.insert(name.clone(), results);
                }
                Err(err) => {
                    tracing::warn!(pair = %name, error = %err, "validation failed for pair");
                    all.insert(
                        name.clone(),
                        vec![ValidationResult {
                            test_name: VALIDATION_ERROR.to_string(),
                            statistic: 0.0,
                            p_value: 1.0,
                            confidence_interval: (-1.0, 1.0),
                            interpretation: format!("Validation failed: {err}"),
                            passed: false,
                        }],
                    );
                }
            }
        }

        if pooled.len() > 1 {
            let corrected = fdr_correction(&pooled);
            let mut idx = 0usize;
            for results in all.values_mut() {
                let originals = std::mem::take(results);
                for result in originals {
                    if result.is_error() {
                        results.push(result);
                        continue;
                    }
                    let p = corrected[idx];
                    idx += 1;
                    let adjusted = ValidationResult {
                        test_name: format!("{} (FDR corrected)", result.test_name),
                        statistic: result.statistic,
                        p_value: p,
                        confidence_interval: result.confidence_interval,
                        interpretation: format!(
                            "{} [FDR corrected p = {p:.4}]",
                            result.interpretation
                        ),
                        passed: p < self.alpha,
                    };
                    results.push(result);
                    results.push(adjusted);
                }
            }
        }

        all
    }

    fn validate_pair<R: Rng + ?Sized>(
        &self,
        x: &[f64],
        y: &[f64],
        rng: &mut R,
    ) -> Result<Vec<ValidationResult>> {
        let mut results = vec![
            self.validate_correlation(x, y, CorrelationMethod::Pearson)?,
            self.validate_correlation(x, y, CorrelationMethod::Spearman)?,
        ];
        if x.len() >= self.min_resampling_len {
            results.push(self.bootstrap_validation(x, y, self.n_bootstrap, rng)?);
            results.push(self.permutation_test(x, y, self.n_permutations, rng)?);
        }
        Ok(results)
    }
}

/// Bonferroni multiplies by the number of tests without capping at 1.
pub fn multiple_testing_correction(p_values: &[f64], method: CorrectionMethod) -> Vec<f64> {
    match method {
        CorrectionMethod::Bonferroni => {
            let n = p_values.len() as f64;
            p_values.iter().map(|p| p * n).collect()
        }
        CorrectionMethod::Fdr => fdr_correction(p_values),
    }
}

/// Benjamini-Hochberg step-up adjustment, returned in input order.
pub fn fdr_correction(p_values: &[f64]) -> Vec<f64> {
    let n = p_values.len();
    if n == 0 {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| p_values[a].total_cmp(&p_values[b]));

    let mut corrected_sorted = vec![0.0; n];
    corrected_sorted[n - 1] = p_values[order[n - 1]];
    for i in (0..n - 1).rev() {
        let scaled = p_values[order[i]] * n as f64 / (i + 1) as f64;
        corrected_sorted[i] = corrected_sorted[i + 1].min(scaled);
    }

    let mut out = vec![0.0; n];
    for (rank, &idx) in order.iter().enumerate() {
        out[idx] = corrected_sorted[rank];
    }
    out
}

fn fisher_interval(r: f64, n: usize, alpha: f64) -> (f64, f64) {
    if n <= 3 {
        return (-1.0, 1.0);
    }
    let z = r.atanh();
    let se = 1.0 / ((n - 3) as f64).sqrt();
    let z_crit = normal_quantile(1.0 - alpha / 2.0);
    let lower = (z - z_crit * se).tanh();
    let upper = (z + z_crit * se).tanh();
    (lower.min(upper), lower.max(upper))
}

/// Spearman correlations over `rounds` index resamples (with replacement);
/// non-finite resamples are dropped.
pub fn bootstrap_spearman<R: Rng + ?Sized>(
    x: &[f64],
    y: &[f64],
    n: usize,
    rounds: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut out = Vec::with_capacity(rounds);
    let mut xb = vec![0.0; n];
    let mut yb = vec![0.0; n];
    for _ in 0..rounds {
        for k in 0..n {
            let idx = rng.gen_range(0..n);
            xb[k] = x[idx];
            yb[k] = y[idx];
        }
        let r = spearman_r(&xb, &yb);
        if r.is_finite() {
            out.push(r);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/validator.rs"]
mod tests;
