use crate::error::Result;
use crate::pipeline::AnalysisReport;

pub fn render_summary_json(report: &AnalysisReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
