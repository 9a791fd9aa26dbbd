//! Test harness configuration
//!
//! Settings for the unit runner, browser e2e runs, page performance budgets,
//! and load tests. These values describe how the external tools are driven;
//! nothing in this crate launches them.
//!
//! # Sources
//!
//! Lowest to highest precedence:
//!
//! 1. Built-in defaults, adjusted for CI when `CI=true` (headless, 2 retries)
//! 2. Legacy variables: `PLAYWRIGHT_BASE_URL`, `LOAD_TEST_URL`, `API_TEST_URL`
//! 3. `STOREFRONT_TEST_`-prefixed variables, `__` between nested keys,
//!    e.g. `STOREFRONT_TEST_E2E__RETRIES=3`

use config::{Config, Environment, Map};
use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

const ENV_PREFIX: &str = "STOREFRONT_TEST";

/// Where unit tests run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestEnvironment {
    Jsdom,
    Node,
}

/// Coverage percentages a run must reach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageThreshold {
    pub branches: u8,
    pub functions: u8,
    pub lines: u8,
    pub statements: u8,
}

impl Default for CoverageThreshold {
    fn default() -> Self {
        Self {
            branches: 80,
            functions: 80,
            lines: 80,
            statements: 80,
        }
    }
}

/// Unit test runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub test_environment: TestEnvironment,
    pub setup_files: Vec<String>,
    pub setup_files_after_env: Vec<String>,
    pub collect_coverage_from: Vec<String>,
    pub coverage_threshold: CoverageThreshold,
    pub test_timeout_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            test_environment: TestEnvironment::Jsdom,
            setup_files: vec!["./tests/config/vitest.setup.ts".to_string()],
            setup_files_after_env: Vec::new(),
            collect_coverage_from: vec!["src/**/*.{ts,tsx}".to_string()],
            coverage_threshold: CoverageThreshold::default(),
            test_timeout_ms: 10_000,
        }
    }
}

/// When screenshots are captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenshotMode {
    On,
    Off,
    OnlyOnFailure,
}

/// When videos are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoMode {
    On,
    Off,
    RetainOnFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Browser e2e settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct E2eConfig {
    pub base_url: String,
    pub headless: bool,
    pub viewport: Viewport,
    pub timeout_ms: u64,
    pub retries: u32,
    pub screenshot: ScreenshotMode,
    pub video: VideoMode,
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
            headless: false,
            viewport: Viewport {
                width: 1280,
                height: 720,
            },
            timeout_ms: 30_000,
            retries: 0,
            screenshot: ScreenshotMode::OnlyOnFailure,
            video: VideoMode::RetainOnFailure,
        }
    }
}

impl E2eConfig {
    /// CI runs are headless and retry failed tests twice
    pub fn for_ci(mut self) -> Self {
        self.headless = true;
        self.retries = 2;
        self
    }
}

/// Page performance budgets (milliseconds, except CLS)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceThresholds {
    pub first_contentful_paint_ms: f64,
    pub largest_contentful_paint_ms: f64,
    pub cumulative_layout_shift: f64,
    pub time_to_interactive_ms: f64,
    pub total_blocking_time_ms: f64,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            first_contentful_paint_ms: 1500.0,
            largest_contentful_paint_ms: 2500.0,
            cumulative_layout_shift: 0.1,
            time_to_interactive_ms: 3500.0,
            total_blocking_time_ms: 300.0,
        }
    }
}

/// Load test pass criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadTestThresholds {
    pub http_req_duration_p50_ms: f64,
    pub http_req_duration_p95_ms: f64,
    pub http_req_duration_p99_ms: f64,
    /// Fraction of failed requests, 0.01 = 1%
    pub http_req_failed_rate: f64,
}

impl Default for LoadTestThresholds {
    fn default() -> Self {
        Self {
            http_req_duration_p50_ms: 200.0,
            http_req_duration_p95_ms: 1000.0,
            http_req_duration_p99_ms: 2000.0,
            http_req_failed_rate: 0.01,
        }
    }
}

/// Load test settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadTestConfig {
    pub target_url: String,
    pub virtual_users: u32,
    pub duration_secs: u64,
    pub ramp_up_secs: u64,
    pub requests_per_second: u32,
    pub thresholds: LoadTestThresholds,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            target_url: "http://localhost:5173".to_string(),
            virtual_users: 100,
            duration_secs: 120,
            ramp_up_secs: 30,
            requests_per_second: 50,
            thresholds: LoadTestThresholds::default(),
        }
    }
}

/// All harness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub runner: RunnerConfig,
    pub e2e: E2eConfig,
    pub performance: PerformanceThresholds,
    pub load: LoadTestConfig,
    /// Base URL for direct API latency checks
    pub api_base_url: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            e2e: E2eConfig::default(),
            performance: PerformanceThresholds::default(),
            load: LoadTestConfig::default(),
            api_base_url: "http://localhost:3000/api".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from the process environment and any `.env` file
    pub fn from_env() -> Result<Self, FixtureError> {
        dotenvy::dotenv().ok();
        let vars: Map<String, String> = std::env::vars().collect();
        Self::load(&vars)
    }

    /// Loads configuration from an explicit set of variables
    pub fn load(vars: &Map<String, String>) -> Result<Self, FixtureError> {
        let base = Self::with_legacy_vars(vars);

        let config = Config::builder()
            .add_source(Config::try_from(&base)?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn with_legacy_vars(vars: &Map<String, String>) -> Self {
        let mut base = Self::default();

        if vars.get("CI").is_some_and(|v| v == "true") {
            base.e2e = base.e2e.for_ci();
        }
        if let Some(url) = vars.get("PLAYWRIGHT_BASE_URL") {
            base.e2e.base_url = url.clone();
        }
        if let Some(url) = vars.get("LOAD_TEST_URL") {
            base.load.target_url = url.clone();
        }
        if let Some(url) = vars.get("API_TEST_URL") {
            base.api_base_url = url.clone();
        }

        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let config = HarnessConfig::load(&vars(&[])).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_ci_enables_headless_and_retries() {
        let config = HarnessConfig::load(&vars(&[("CI", "true")])).unwrap();
        assert!(config.e2e.headless);
        assert_eq!(config.e2e.retries, 2);
    }

    #[test]
    fn test_ci_must_be_literal_true() {
        let config = HarnessConfig::load(&vars(&[("CI", "1")])).unwrap();
        assert!(!config.e2e.headless);
    }

    #[test]
    fn test_legacy_urls_applied() {
        let config = HarnessConfig::load(&vars(&[
            ("PLAYWRIGHT_BASE_URL", "http://staging:8080"),
            ("API_TEST_URL", "http://staging:3000/api"),
        ]))
        .unwrap();
        assert_eq!(config.e2e.base_url, "http://staging:8080");
        assert_eq!(config.api_base_url, "http://staging:3000/api");
        assert_eq!(config.load.target_url, "http://localhost:5173");
    }

    #[test]
    fn test_prefixed_variable_beats_ci_default() {
        let config = HarnessConfig::load(&vars(&[
            ("CI", "true"),
            ("STOREFRONT_TEST_E2E__RETRIES", "5"),
        ]))
        .unwrap();
        assert_eq!(config.e2e.retries, 5);
        assert!(config.e2e.headless);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let result = HarnessConfig::load(&vars(&[("STOREFRONT_TEST_E2E__RETRIES", "many")]));
        assert!(matches!(result, Err(FixtureError::Config(_))));
    }
}
