//! Growth simulator.
//!
//! Derives a target profile, writes three ad variants, "executes" them with
//! fixed multipliers, monitors a fabricated traction curve and persists the
//! combined report.

pub mod campaign;
pub mod profile;
pub mod simulator;
pub mod traction;

pub use campaign::{
    build_ad_variants, run_campaign, AdVariant, CampaignId, CampaignRun, Platform,
    PlatformOutcome,
};
pub use profile::TargetProfile;
pub use simulator::{
    launch_campaign, GrowthReport, GrowthSimulator, LaunchOptions, LaunchOutcome, SaveOutcome,
};
pub use traction::{
    monitor_traction, DailyMetric, TractionReport, TractionThresholds, TractionVerdict,
};
