//! Report rendering.

use crate::pack::PackReport;
use crate::runner::RunReport;
use packcheck_common::{Error, Result};
use packcheck_pack_schema::{Finding, Severity};
use std::fmt::{self, Write};
use std::str::FromStr;

const RULE_WIDTH: usize = 60;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render a full run in the requested format.
pub fn render_run(report: &RunReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => text(|out| write_run_text(out, report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render a single pack in the requested format.
pub fn render_pack(report: &PackReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => text(|out| write_pack_text(out, report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn text(write: impl FnOnce(&mut String) -> fmt::Result) -> Result<String> {
    let mut out = String::new();
    write(&mut out).map_err(|e| Error::Other(e.to_string()))?;
    Ok(out)
}

fn write_run_text(out: &mut String, report: &RunReport) -> fmt::Result {
    writeln!(out, "Pack Validator")?;
    writeln!(out, "Root: {}", report.root.display())?;

    if report.packs.is_empty() {
        return writeln!(out, "\nNo packs found (directories with a manifest)");
    }

    for pack in &report.packs {
        write_pack_text(out, pack)?;
    }

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    if report.passed {
        writeln!(out, "✓ All packs validated successfully!")
    } else {
        writeln!(out, "❌ Some packs have errors - please fix before packaging")
    }
}

fn write_pack_text(out: &mut String, pack: &PackReport) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "Validating pack: {}", pack.name)?;
    writeln!(out, "{}", rule)?;

    if pack.findings.is_empty() {
        return writeln!(out, "✓ No issues found!");
    }

    let sections = [
        (Severity::Error, "❌", "Error(s)"),
        (Severity::Warning, "⚠️ ", "Warning(s)"),
        (Severity::Info, "ℹ️ ", "Info"),
    ];
    for (severity, icon, title) in sections {
        let findings: Vec<&Finding> = pack.findings.with_severity(severity).collect();
        if findings.is_empty() {
            continue;
        }
        writeln!(out, "\n{} {} {}:", icon, findings.len(), title)?;
        for finding in findings {
            writeln!(out, "  {}", finding)?;
        }
    }
    Ok(())
}
