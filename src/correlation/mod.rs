//! Method-level correlations between chart strength and genetic scores.

pub mod dignity;
pub mod pathway;
pub mod polygenic;

use serde::Serialize;

/// `tanh(a / scale_a) * tanh(b / scale_b)`: a bounded agreement score between two
/// single observations. It is a strength heuristic, not a correlation estimate.
pub fn individual_correlation(a: f64, scale_a: f64, b: f64, scale_b: f64) -> f64 {
    (a / scale_a).tanh() * (b / scale_b).tanh()
}

/// Replaces an undefined overall coefficient (constant input) with (0, 1).
pub(crate) fn finite_or_null(method: &str, r: f64, p: f64) -> (f64, f64) {
    if r.is_finite() && p.is_finite() {
        (r, p)
    } else {
        tracing::warn!(method, "overall correlation undefined; reporting 0 with p = 1");
        (0.0, 1.0)
    }
}

pub fn strength_label(value: f64, strong: f64, moderate: f64) -> &'static str {
    let v = value.abs();
    if v > strong {
        "strong"
    } else if v > moderate {
        "moderate"
    } else {
        "weak"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Dignity,
    Pathway,
    Polygenic,
}

impl MethodKind {
    pub fn name(self) -> &'static str {
        match self {
            MethodKind::Dignity => "dignity",
            MethodKind::Pathway => "pathway",
            MethodKind::Polygenic => "polygenic",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MethodKind::Dignity => "Dignity",
            MethodKind::Pathway => "Pathway",
            MethodKind::Polygenic => "Polygenic",
        }
    }

    pub fn finding_type(self) -> &'static str {
        match self {
            MethodKind::Dignity => "planet-genetic",
            MethodKind::Pathway => "planet-pathway",
            MethodKind::Polygenic => "trait-planet",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/correlation/mod.rs"]
mod tests;
