//! Runtime configuration for both workflows.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Config file (`--config`, else `founderx.toml` in the working root)
//! 3. Compiled defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the project config file looked up in the working root.
pub const CONFIG_FILE_NAME: &str = "founderx.toml";

/// Default business plan location shared by both workflows.
pub const DEFAULT_BUSINESS_PLAN: &str = "Business_Plan.md";

/// Percentage of the campaign budget given to each platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSplit {
    pub google_search: f64,
    pub facebook: f64,
    pub linkedin: f64,
}

impl Default for BudgetSplit {
    fn default() -> Self {
        Self {
            google_search: 40.0,
            facebook: 35.0,
            linkedin: 25.0,
        }
    }
}

impl BudgetSplit {
    /// Sum of all platform percentages.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.google_search + self.facebook + self.linkedin
    }
}

/// Limits and thresholds for the growth simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Total campaign budget split across platforms.
    pub budget_limit: f64,
    pub budget_split: BudgetSplit,
    /// Final-day signups at or above this validate traction.
    pub signup_threshold: u64,
    /// Final-day revenue at or above this validates traction.
    pub revenue_threshold: f64,
    pub monitoring_days: u32,
    /// Plan document used when a launch names none.
    pub business_plan_path: PathBuf,
    /// Directory receiving `AGAResults_{project_id}.json`.
    pub output_dir: PathBuf,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            budget_limit: 100.0,
            budget_split: BudgetSplit::default(),
            signup_threshold: 50,
            revenue_threshold: 500.0,
            monitoring_days: 7,
            business_plan_path: PathBuf::from(DEFAULT_BUSINESS_PLAN),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SimulatorConfig {
    /// Validate limits.
    ///
    /// This must be called before constructing a `GrowthSimulator`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget_limit.is_nan() || self.budget_limit <= 0.0 {
            return Err(invalid("simulator.budget_limit", "must be greater than 0"));
        }
        let split = self.budget_split;
        if [split.google_search, split.facebook, split.linkedin]
            .iter()
            .any(|pct| *pct < 0.0)
        {
            return Err(invalid("simulator.budget_split", "percentages must not be negative"));
        }
        if (split.total() - 100.0).abs() > 1e-9 {
            return Err(invalid(
                "simulator.budget_split",
                format!("percentages must sum to 100, got {}", split.total()),
            ));
        }
        if self.monitoring_days == 0 {
            return Err(invalid("simulator.monitoring_days", "must be greater than 0"));
        }
        if self.revenue_threshold.is_nan() || self.revenue_threshold < 0.0 {
            return Err(invalid("simulator.revenue_threshold", "must not be negative"));
        }
        Ok(())
    }
}

/// How malformed numbers in the code quality report are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityParseMode {
    /// Malformed numbers fail the run with a `ParseError`.
    #[default]
    Strict,
    /// Malformed numbers are logged and the field keeps its default.
    Lenient,
}

impl std::str::FromStr for QualityParseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(invalid(
                "synthesizer.quality_parse_mode",
                format!("unknown mode '{other}' (expected strict or lenient)"),
            )),
        }
    }
}

/// Input and output locations for the mandate synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    pub business_plan_path: PathBuf,
    pub contribution_log_path: PathBuf,
    pub quality_report_path: PathBuf,
    pub growth_results_path: PathBuf,
    pub prompt_output_path: PathBuf,
    pub data_output_path: PathBuf,
    pub quality_parse_mode: QualityParseMode,
    /// Platforms with fewer signups than this are reported as failed channels.
    pub low_signup_threshold: u64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            business_plan_path: PathBuf::from(DEFAULT_BUSINESS_PLAN),
            contribution_log_path: PathBuf::from("HCL_Report.md"),
            quality_report_path: PathBuf::from("Code_Quality_Report.md"),
            growth_results_path: PathBuf::from("AGAResults.json"),
            prompt_output_path: PathBuf::from("FIR_Mandate_Prompt.txt"),
            data_output_path: PathBuf::from("FIR_Mandate_Data.json"),
            quality_parse_mode: QualityParseMode::default(),
            low_signup_threshold: 15,
        }
    }
}

impl SynthesizerConfig {
    /// Re-base every relative path onto `dir`. Absolute paths are kept.
    #[must_use]
    pub fn rooted_at(mut self, dir: &Path) -> Self {
        for path in [
            &mut self.business_plan_path,
            &mut self.contribution_log_path,
            &mut self.quality_report_path,
            &mut self.growth_results_path,
            &mut self.prompt_output_path,
            &mut self.data_output_path,
        ] {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
        self
    }
}

/// Top-level configuration aggregating both workflows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderConfig {
    pub simulator: SimulatorConfig,
    pub synthesizer: SynthesizerConfig,
}

impl FounderConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `founderx.toml` under
    /// `root` is used when present, otherwise compiled defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(CONFIG_FILE_NAME);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulator.validate()
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}
