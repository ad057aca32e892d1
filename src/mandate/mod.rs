//! Mandate synthesizer.
//!
//! Reads up to four asset documents, falls back to fixed records for any
//! that are missing, picks missions and a critical skill from fixed decision
//! tables, and renders a founder-in-residence mandate as text plus JSON.

pub mod decision;
pub mod model;
pub mod render;
pub mod sources;
pub mod synthesizer;

pub use decision::{
    build_core_missions, build_critical_skill, build_executive_summary, build_mandate,
    build_narrative,
};
pub use model::{
    BusinessSummary, CriticalSkill, MandateData, MandateInputs, MandateOutput, Narrative,
    SkillPriority,
};
pub use render::{render_mandate, MandateDocument};
pub use sources::{
    load_contribution_log, load_growth_results, load_quality_report, BusinessProfile,
    ContributionLog, GrowthSummary, PlatformSignups, QualityAssessment, QualityStatus,
    TechnicalRisk,
};
pub use synthesizer::{generate_mandate, MandateSynthesizer};
