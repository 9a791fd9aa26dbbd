//! Latency percentiles and performance budget checks
//!
//! Measurements are gathered by external tools (browser audits, load
//! generators, timed API calls). This module only turns raw numbers into
//! pass/fail verdicts against the harness thresholds. A metric passes when it
//! is strictly below its limit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::harness::{LoadTestThresholds, PerformanceThresholds};

/// Picks the `q` percentile from `samples`
///
/// Samples are sorted ascending and the value at index `floor(n * q)` is
/// returned, clamped to the last sample. Returns `None` for no samples.
pub fn percentile(samples: &[Duration], q: f64) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let index = ((sorted.len() as f64) * q.clamp(0.0, 1.0)).floor() as usize;
    sorted.get(index.min(sorted.len() - 1)).copied()
}

/// Mean of `samples`, `None` for no samples
pub fn mean(samples: &[Duration]) -> Option<Duration> {
    let count = u32::try_from(samples.len()).ok().filter(|n| *n > 0)?;
    Some(samples.iter().sum::<Duration>() / count)
}

/// A metric that reached or exceeded its limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdViolation {
    pub metric: &'static str,
    pub observed: f64,
    pub limit: f64,
}

impl fmt::Display for ThresholdViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} (limit {})",
            self.metric, self.observed, self.limit
        )
    }
}

fn check(metric: &'static str, observed: f64, limit: f64) -> Option<ThresholdViolation> {
    (observed >= limit).then_some(ThresholdViolation {
        metric,
        observed,
        limit,
    })
}

/// Page metrics reported by a browser audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub first_contentful_paint_ms: f64,
    pub largest_contentful_paint_ms: f64,
    pub cumulative_layout_shift: f64,
    pub time_to_interactive_ms: f64,
    pub total_blocking_time_ms: f64,
}

impl PerformanceThresholds {
    /// Lists every page metric at or over budget
    pub fn violations(&self, metrics: &PageMetrics) -> Vec<ThresholdViolation> {
        [
            check(
                "first_contentful_paint_ms",
                metrics.first_contentful_paint_ms,
                self.first_contentful_paint_ms,
            ),
            check(
                "largest_contentful_paint_ms",
                metrics.largest_contentful_paint_ms,
                self.largest_contentful_paint_ms,
            ),
            check(
                "cumulative_layout_shift",
                metrics.cumulative_layout_shift,
                self.cumulative_layout_shift,
            ),
            check(
                "time_to_interactive_ms",
                metrics.time_to_interactive_ms,
                self.time_to_interactive_ms,
            ),
            check(
                "total_blocking_time_ms",
                metrics.total_blocking_time_ms,
                self.total_blocking_time_ms,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Summary of a load test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTestReport {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    /// Fraction of failed requests
    pub failed_rate: f64,
}

impl LoadTestReport {
    /// Builds a report from raw request durations and a failure count
    ///
    /// Returns `None` when no requests were recorded.
    pub fn from_samples(samples: &[Duration], failed: usize) -> Option<Self> {
        Some(Self {
            p50: percentile(samples, 0.50)?,
            p95: percentile(samples, 0.95)?,
            p99: percentile(samples, 0.99)?,
            failed_rate: failed as f64 / samples.len() as f64,
        })
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}

impl LoadTestThresholds {
    /// Lists every load metric at or over its limit
    pub fn violations(&self, report: &LoadTestReport) -> Vec<ThresholdViolation> {
        [
            check(
                "http_req_duration_p50_ms",
                millis(report.p50),
                self.http_req_duration_p50_ms,
            ),
            check(
                "http_req_duration_p95_ms",
                millis(report.p95),
                self.http_req_duration_p95_ms,
            ),
            check(
                "http_req_duration_p99_ms",
                millis(report.p99),
                self.http_req_duration_p99_ms,
            ),
            check(
                "http_req_failed_rate",
                report.failed_rate,
                self.http_req_failed_rate,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
