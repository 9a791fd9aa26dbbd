//! Vulnerability scan reports
//!
//! Scanners (OWASP ZAP, Snyk, npm audit, Trivy) run outside this crate. Their
//! findings are normalized into [`Vulnerability`] records so a test can gate
//! on severity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Finding severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScannerKind {
    OwaspZap,
    Snyk,
    NpmAudit,
    Trivy,
}

/// One configured scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScanner {
    pub name: ScannerKind,
    pub enabled: bool,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// Scan settings and the severity gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScanConfig {
    pub scanners: Vec<SecurityScanner>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    pub severity_threshold: Severity,
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cwe: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss: Option<f64>,
    pub recommendation: String,
}

/// Finding counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl VulnerabilitySummary {
    pub fn tally(vulnerabilities: &[Vulnerability]) -> Self {
        vulnerabilities
            .iter()
            .fold(Self::default(), |mut summary, vulnerability| {
                summary.total += 1;
                match vulnerability.severity {
                    Severity::Critical => summary.critical += 1,
                    Severity::High => summary.high += 1,
                    Severity::Medium => summary.medium += 1,
                    Severity::Low => summary.low += 1,
                }
                summary
            })
    }
}

/// Result of one scanner run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScanResult {
    pub scanner: String,
    pub timestamp: DateTime<Utc>,
    pub vulnerabilities: Vec<Vulnerability>,
    pub summary: VulnerabilitySummary,
}

impl SecurityScanResult {
    /// Stamps the current time and tallies the findings
    pub fn new(scanner: impl Into<String>, vulnerabilities: Vec<Vulnerability>) -> Self {
        let summary = VulnerabilitySummary::tally(&vulnerabilities);
        Self {
            scanner: scanner.into(),
            timestamp: Utc::now(),
            vulnerabilities,
            summary,
        }
    }
}

fn pattern_matches(pattern: &str, value: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => value.starts_with(prefix),
        None => value == pattern,
    }
}

impl SecurityScanConfig {
    pub fn enabled_scanners(&self) -> impl Iterator<Item = &SecurityScanner> {
        self.scanners.iter().filter(|scanner| scanner.enabled)
    }

    /// True if any ignore pattern matches the finding's id or package
    ///
    /// A pattern ending in `*` matches by prefix, any other pattern exactly.
    pub fn is_ignored(&self, vulnerability: &Vulnerability) -> bool {
        self.ignore_patterns.iter().any(|pattern| {
            pattern_matches(pattern, &vulnerability.id)
                || vulnerability
                    .affected_package
                    .as_deref()
                    .is_some_and(|package| pattern_matches(pattern, package))
        })
    }

    /// Findings at or above the threshold that are not ignored
    pub fn blocking<'a>(&self, result: &'a SecurityScanResult) -> Vec<&'a Vulnerability> {
        result
            .vulnerabilities
            .iter()
            .filter(|v| v.severity >= self.severity_threshold && !self.is_ignored(v))
            .collect()
    }

    pub fn passes(&self, result: &SecurityScanResult) -> bool {
        self.blocking(result).is_empty()
    }
}
