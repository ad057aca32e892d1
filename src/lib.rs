//! # founderx - Asset validation workflows for startup MVPs
//!
//! Two independent, deterministic batch workflows:
//!
//! - **Growth simulator**: writes ad copy for a target profile, simulates a
//!   micro-campaign across three platforms with fixed ratios, monitors a
//!   fabricated traction curve and persists the result as
//!   `AGAResults_{project_id}.json`.
//! - **Mandate synthesizer**: reads the business plan, human contribution
//!   log, code quality report and growth results, then renders a
//!   founder-in-residence mandate (`FIR_Mandate_Prompt.txt`) with its
//!   structured data (`FIR_Mandate_Data.json`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use founderx::{GrowthSimulator, LaunchOptions, MandateSynthesizer, SimulatorConfig, SynthesizerConfig};
//!
//! let simulator = GrowthSimulator::new(SimulatorConfig::default())?;
//! let outcome = simulator.launch_campaign("ACME", &LaunchOptions::default())?;
//! assert!(!outcome.report.traction_validated);
//!
//! let mandate = MandateSynthesizer::new(SynthesizerConfig::default()).run()?;
//! println!("{}", mandate.text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod growth;
pub mod mandate;

pub use analyzer::{DocumentAnalyzer, ExistenceGatedAnalyzer};
pub use config::{
    BudgetSplit, FounderConfig, QualityParseMode, SimulatorConfig, SynthesizerConfig,
};
pub use error::{ConfigError, FounderError, FounderResult, ParseError};
pub use growth::{
    launch_campaign, AdVariant, CampaignId, CampaignRun, DailyMetric, GrowthReport,
    GrowthSimulator, LaunchOptions, LaunchOutcome, Platform, PlatformOutcome, SaveOutcome,
    TargetProfile, TractionReport, TractionThresholds, TractionVerdict,
};
pub use mandate::{
    generate_mandate, render_mandate, BusinessProfile, ContributionLog, CriticalSkill,
    GrowthSummary, MandateData, MandateOutput, MandateSynthesizer, QualityAssessment,
};
