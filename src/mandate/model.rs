//! Mandate records.
//!
//! `MandateData` is what gets written to `FIR_Mandate_Data.json` and is the
//! only input to the text renderer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mandate::sources::{
    BusinessProfile, ContributionLog, GrowthSummary, QualityAssessment, QualityStatus,
    TechnicalRisk,
};

/// The four loaded input documents.
#[derive(Debug, Clone, PartialEq)]
pub struct MandateInputs {
    pub business: BusinessProfile,
    pub contribution: ContributionLog,
    pub quality: QualityAssessment,
    pub growth: GrowthSummary,
}

impl MandateInputs {
    /// Inputs as if every document were missing.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            business: BusinessProfile::fallback(),
            contribution: ContributionLog::fallback(),
            quality: QualityAssessment::fallback(),
            growth: GrowthSummary::fallback(),
        }
    }
}

/// Flattened facts about the asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub target_market: String,
    pub quality_status: QualityStatus,
    pub ai_debt_score: f64,
    pub traction_validated: bool,
    pub business_model: String,
    pub market_size: String,
    pub competition: Vec<String>,
    pub value_proposition: String,
    pub revenue_projection: String,
    pub technical_risk: TechnicalRisk,
    pub human_cost: f64,
    pub total_signups: u64,
    pub total_revenue: f64,
    pub campaign_success: String,
    pub executive_summary: String,
}

/// Urgency of the critical skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillPriority {
    Immediate,
    Critical,
    High,
    Medium,
}

impl fmt::Display for SkillPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Immediate => "IMMEDIATE",
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        })
    }
}

/// The single most urgently missing leadership competency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalSkill {
    pub skill: String,
    pub description: String,
    pub priority: SkillPriority,
    pub rationale: String,
}

/// Template phrases that depend on the inputs, chosen before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// `VALIDATED` or `PENDING`.
    pub traction_label: String,
    /// `Production Ready` or `Needs Improvement`.
    pub technical_status: String,
    /// `COMPLETE` or `IN PROGRESS`.
    pub validation_status: String,
    /// `100K` or `50K`.
    pub mrr_target: String,
    pub thesis_outlook: String,
    pub thesis_leader: String,
    pub thesis_goal: String,
    pub thesis_pace: String,
}

/// Everything the mandate document says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateData {
    pub business_summary: BusinessSummary,
    pub contribution: ContributionLog,
    pub missions: [String; 3],
    pub critical_skill: CriticalSkill,
    pub narrative: Narrative,
    pub generated_at: DateTime<Utc>,
}

/// Mandate data with its rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct MandateOutput {
    pub data: MandateData,
    pub text: String,
    /// When the mandate was generated; mirrors `data.generated_at`.
    pub generation_time: DateTime<Utc>,
}
