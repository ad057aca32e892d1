//! Campaign orchestration and result persistence.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::analyzer::{DocumentAnalyzer, ExistenceGatedAnalyzer};
use crate::config::SimulatorConfig;
use crate::error::{FounderError, FounderResult};
use crate::growth::campaign::{self, AdVariant, CampaignId, CampaignRun};
use crate::growth::traction::{self, TractionReport, TractionThresholds};
use crate::growth::TargetProfile;

/// Caller-supplied options for a launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Defaults to `Business_Plan.md`.
    pub business_plan_path: Option<PathBuf>,
    /// Recorded in the report; nothing is fetched from it.
    pub deployment_url: Option<String>,
}

/// Everything a launch produced, as persisted to `AGAResults_{project_id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub project_id: String,
    pub campaign_id: CampaignId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_url: Option<String>,
    pub target_data: TargetProfile,
    pub ad_copies: Vec<AdVariant>,
    pub campaign_results: CampaignRun,
    pub monitoring_results: TractionReport,
    pub traction_validated: bool,
    pub completion_time: DateTime<Utc>,
}

/// Whether the report reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Failed { path: PathBuf, reason: String },
}

impl SaveOutcome {
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// A finished launch. The report is returned even when saving failed.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOutcome {
    pub report: GrowthReport,
    pub save: SaveOutcome,
}

/// Runs simulated micro-campaigns.
pub struct GrowthSimulator {
    config: SimulatorConfig,
    analyzer: Box<dyn DocumentAnalyzer>,
}

impl std::fmt::Debug for GrowthSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowthSimulator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GrowthSimulator {
    /// Creates a simulator with the existence-gated analyzer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: SimulatorConfig) -> FounderResult<Self> {
        Self::with_analyzer(config, Box::new(ExistenceGatedAnalyzer))
    }

    /// Creates a simulator with a custom document analyzer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn with_analyzer(
        config: SimulatorConfig,
        analyzer: Box<dyn DocumentAnalyzer>,
    ) -> FounderResult<Self> {
        config.validate()?;
        Ok(Self { config, analyzer })
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn thresholds(&self) -> TractionThresholds {
        TractionThresholds {
            signups: self.config.signup_threshold,
            revenue: self.config.revenue_threshold,
        }
    }

    /// Derives the target profile from a plan document.
    pub fn derive_target_profile(&self, path: &Path) -> FounderResult<TargetProfile> {
        self.analyzer.target_profile(path)
    }

    /// Builds the three ad variants with the configured budget split.
    #[must_use]
    pub fn build_ad_variants(&self, profile: &TargetProfile) -> Vec<AdVariant> {
        campaign::build_ad_variants(profile, &self.config)
    }

    /// Executes the variants.
    #[must_use]
    pub fn run_campaign(&self, campaign_id: &CampaignId, variants: &[AdVariant]) -> CampaignRun {
        campaign::run_campaign(campaign_id, variants)
    }

    /// Monitors traction over the configured number of days.
    pub fn monitor_traction(&self, campaign_id: &CampaignId) -> FounderResult<TractionReport> {
        traction::monitor_traction(campaign_id, self.config.monitoring_days, self.thresholds())
    }

    /// Path of the results file for a project.
    #[must_use]
    pub fn results_path(&self, project_id: &str) -> PathBuf {
        self.config
            .output_dir
            .join(format!("AGAResults_{project_id}.json"))
    }

    /// Runs a full campaign and persists the combined report.
    ///
    /// A failed save is logged and reported in [`LaunchOutcome::save`]; it
    /// does not fail the launch.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty project id, or an I/O error if
    /// the plan document exists but cannot be opened.
    pub fn launch_campaign(
        &self,
        project_id: &str,
        options: &LaunchOptions,
    ) -> FounderResult<LaunchOutcome> {
        if project_id.trim().is_empty() {
            return Err(FounderError::validation("project id must not be empty"));
        }

        let campaign_id = CampaignId::generate();
        info!(project_id, campaign_id = %campaign_id, "launching growth campaign");

        let plan_path = options
            .business_plan_path
            .clone()
            .unwrap_or_else(|| self.config.business_plan_path.clone());
        let target_data = self.derive_target_profile(&plan_path)?;
        let ad_copies = self.build_ad_variants(&target_data);
        let campaign_results = self.run_campaign(&campaign_id, &ad_copies);
        let monitoring_results = self.monitor_traction(&campaign_id)?;

        let report = GrowthReport {
            project_id: project_id.to_string(),
            campaign_id,
            deployment_url: options.deployment_url.clone(),
            target_data,
            ad_copies,
            campaign_results,
            traction_validated: monitoring_results.final_status.is_validated(),
            monitoring_results,
            completion_time: Utc::now(),
        };

        let save = self.save_report(&report);
        Ok(LaunchOutcome { report, save })
    }

    /// Writes the report as pretty JSON, logging rather than propagating failures.
    pub fn save_report(&self, report: &GrowthReport) -> SaveOutcome {
        let path = self.results_path(&report.project_id);
        match write_json(&path, report) {
            Ok(()) => {
                info!(path = %path.display(), "results saved");
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to save results");
                SaveOutcome::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> FounderResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| FounderError::io(path, e))
}

/// Launches a campaign with default configuration in the current directory.
///
/// # Errors
///
/// See [`GrowthSimulator::launch_campaign`].
pub fn launch_campaign(project_id: &str, options: &LaunchOptions) -> FounderResult<LaunchOutcome> {
    GrowthSimulator::new(SimulatorConfig::default())?.launch_campaign(project_id, options)
}
