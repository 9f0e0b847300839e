use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::pipeline::AnalysisReport;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

pub fn write_reports(report: &AnalysisReport, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_summary_json(report)?)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render_report_text(report))?;

    tracing::info!(
        summary = %summary_path.display(),
        report = %report_path.display(),
        "stage 6: reports written"
    );
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
