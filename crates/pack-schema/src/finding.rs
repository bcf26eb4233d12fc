//! Findings produced by validators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
///
/// Only [`Severity::Error`] blocks packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Whether a finding of this severity fails the pack.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// A single reported validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Ordered accumulation of findings for one pack or one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.push(Finding::error(message));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(Finding::warning(message));
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.push(Finding::info(message));
    }

    /// Append another result, keeping its order after ours.
    pub fn merge(&mut self, other: ValidationResult) {
        self.findings.extend(other.findings);
    }

    /// True when no finding blocks packaging.
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(|f| f.severity.is_blocking())
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one severity, in the order they were recorded.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| f.severity == severity)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }
}

impl From<Vec<Finding>> for ValidationResult {
    fn from(findings: Vec<Finding>) -> Self {
        Self { findings }
    }
}
