use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::DEFAULT_ASPECT_ORB;
use crate::error::{AnalysisError, Result};
use crate::meta::{DEFAULT_TOP_N, MethodWeights};
use crate::scoring::dignity::Sect;
use crate::stats::validator::{
    DEFAULT_ALPHA, DEFAULT_RESAMPLES, MIN_RESAMPLING_LEN, StatisticalValidator,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisProfile {
    pub alpha: f64,
    pub n_bootstrap: usize,
    pub n_permutations: usize,
    pub min_resampling_len: usize,
    pub seed: u64,
    pub top_n: usize,
    pub aspect_orb: f64,
    pub sect: Sect,
    pub weights: MethodWeights,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            n_bootstrap: DEFAULT_RESAMPLES,
            n_permutations: DEFAULT_RESAMPLES,
            min_resampling_len: MIN_RESAMPLING_LEN,
            seed: 42,
            top_n: DEFAULT_TOP_N,
            aspect_orb: DEFAULT_ASPECT_ORB,
            sect: Sect::Day,
            weights: MethodWeights::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let profile: AnalysisProfile = serde_json::from_str(&text)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(AnalysisError::InvalidArgument(format!(
                "alpha must lie in (0, 1), got {}",
                self.alpha
            )));
        }
        let w = &self.weights;
        if [w.dignity, w.pathway, w.polygenic]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(AnalysisError::InvalidArgument(
                "method weights must be finite and non-negative".to_string(),
            ));
        }
        if !(self.aspect_orb >= 0.0) {
            return Err(AnalysisError::InvalidArgument(format!(
                "aspect orb must be non-negative, got {}",
                self.aspect_orb
            )));
        }
        Ok(())
    }

    pub fn validator(&self) -> StatisticalValidator {
        StatisticalValidator {
            alpha: self.alpha,
            n_bootstrap: self.n_bootstrap,
            n_permutations: self.n_permutations,
            min_resampling_len: self.min_resampling_len,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
