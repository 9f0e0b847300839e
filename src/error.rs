use crate::chart::Planet;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("insufficient data: need at least {needed} paired observations, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("unknown trait: {0}")]
    UnknownTrait(String),
    #[error("planet {0} not found in chart")]
    PlanetNotInChart(Planet),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Paired sequences must have equal length and at least `needed` entries.
pub fn check_paired(x: &[f64], y: &[f64], needed: usize) -> Result<usize> {
    if x.len() != y.len() {
        return Err(AnalysisError::InsufficientData {
            needed,
            got: x.len().min(y.len()),
        });
    }
    if x.len() < needed {
        return Err(AnalysisError::InsufficientData {
            needed,
            got: x.len(),
        });
    }
    Ok(x.len())
}
