//! Input documents for the mandate.
//!
//! Every loader treats a missing document as a fallback record, never as an
//! error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::config::QualityParseMode;
use crate::error::{FounderError, FounderResult, ParseError};

const CURATOR_PREFIX: &str = "Curator:";
const TIME_SPENT_PREFIX: &str = "Total Time Spent:";
const DEBT_SCORE_PREFIX: &str = "AI Debt Score:";
const REMEDIATION_COST_PREFIX: &str = "Estimated Human Remediation Cost:";

/// Business model string that selects the SaaS-specific branches.
pub const SAAS_MODEL: &str = "SaaS";

/// Reads a document, mapping "not found" to `None`.
fn read_optional(path: &Path) -> FounderResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FounderError::io(path, e)),
    }
}

/// Text following the first occurrence of `prefix`, up to any second one.
fn value_after<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.split(prefix).nth(1).map(str::trim)
}

/// Market and model facts from the business plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub market_size: String,
    pub target_market: String,
    pub competition: Vec<String>,
    pub value_proposition: String,
    pub business_model: String,
    pub revenue_projection: String,
}

impl BusinessProfile {
    /// Profile used whenever a business plan is available.
    #[must_use]
    pub fn from_plan() -> Self {
        Self {
            market_size: "$50B+".to_string(),
            target_market: "Small business owners and entrepreneurs".to_string(),
            competition: vec![
                "Traditional consulting".to_string(),
                "Template services".to_string(),
            ],
            value_proposition: "AI-powered business plan generation".to_string(),
            business_model: "SaaS subscription".to_string(),
            revenue_projection: "$1M ARR in 18 months".to_string(),
        }
    }

    /// Profile used when no business plan exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            market_size: "Large market".to_string(),
            target_market: "Business owners".to_string(),
            competition: vec!["Traditional solutions".to_string()],
            value_proposition: "Innovative solution".to_string(),
            business_model: SAAS_MODEL.to_string(),
            revenue_projection: "$1M ARR".to_string(),
        }
    }

    /// Exact match on `"SaaS"`; `"SaaS subscription"` does not count.
    #[must_use]
    pub fn is_saas(&self) -> bool {
        self.business_model == SAAS_MODEL
    }
}

/// Human contribution log: who curated the asset and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLog {
    pub curator: String,
    pub time_spent: String,
    pub ip_status: String,
    pub human_contribution: String,
}

impl ContributionLog {
    fn scanning_defaults() -> Self {
        Self {
            curator: "Unknown Curator".to_string(),
            time_spent: "2.0".to_string(),
            ip_status: "Defensible".to_string(),
            human_contribution: "Confirmed".to_string(),
        }
    }

    /// Record used when no contribution log exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            curator: "Unknown".to_string(),
            time_spent: "0.0".to_string(),
            ip_status: "Pending".to_string(),
            human_contribution: "Required".to_string(),
        }
    }

    /// Extracts curator and time spent from log text.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut log = Self::scanning_defaults();
        for line in content.lines() {
            if let Some(curator) = value_after(line, CURATOR_PREFIX) {
                log.curator = curator.to_string();
            } else if let Some(time_spent) = value_after(line, TIME_SPENT_PREFIX) {
                log.time_spent = time_spent.to_string();
            }
        }
        log
    }
}

/// Loads the human contribution log.
pub fn load_contribution_log(path: &Path) -> FounderResult<ContributionLog> {
    match read_optional(path)? {
        Some(content) => Ok(ContributionLog::parse(&content)),
        None => {
            warn!(path = %path.display(), "contribution log not found, using defaults");
            Ok(ContributionLog::fallback())
        }
    }
}

/// Qualitative code quality bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityStatus {
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Unknown,
}

impl QualityStatus {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }
}

impl std::fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Unknown => "Unknown",
        })
    }
}

/// Technical risk tier derived from the debt score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechnicalRisk {
    Low,
    Medium,
    High,
    Unknown,
}

impl TechnicalRisk {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for TechnicalRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        })
    }
}

/// Scores from the code quality report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub ai_debt_score: f64,
    pub human_cost: f64,
    pub quality_status: QualityStatus,
    pub technical_risk: TechnicalRisk,
}

impl QualityAssessment {
    /// Assessment for a score and remediation cost.
    #[must_use]
    pub fn from_scores(ai_debt_score: f64, human_cost: f64) -> Self {
        Self {
            ai_debt_score,
            human_cost,
            quality_status: QualityStatus::from_score(ai_debt_score),
            technical_risk: TechnicalRisk::from_score(ai_debt_score),
        }
    }

    /// Assessment used when no quality report exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            ai_debt_score: 0.0,
            human_cost: 0.0,
            quality_status: QualityStatus::Unknown,
            technical_risk: TechnicalRisk::Unknown,
        }
    }

    /// Extracts the debt score and remediation cost from report text.
    ///
    /// Score defaults to 75 and cost to 0 when their lines are absent.
    ///
    /// # Errors
    ///
    /// In strict mode a malformed number is a `ParseError`. In lenient mode
    /// it is logged and the field keeps its previous value.
    pub fn parse(content: &str, mode: QualityParseMode) -> Result<Self, ParseError> {
        let mut score = 75.0;
        let mut cost = 0.0;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            if let Some(rest) = value_after(line, DEBT_SCORE_PREFIX) {
                let text = rest.split('/').next().unwrap_or_default().replace('*', "");
                if let Some(value) = parse_number(DEBT_SCORE_PREFIX, line_no, &text, mode)? {
                    score = value;
                }
            } else if let Some(rest) = value_after(line, REMEDIATION_COST_PREFIX) {
                let text: String = rest
                    .chars()
                    .filter(|c| !matches!(c, '*' | '$' | ','))
                    .collect();
                if let Some(value) = parse_number(REMEDIATION_COST_PREFIX, line_no, &text, mode)? {
                    cost = value;
                }
            }
        }

        Ok(Self::from_scores(score, cost))
    }
}

fn parse_number(
    prefix: &str,
    line: usize,
    text: &str,
    mode: QualityParseMode,
) -> Result<Option<f64>, ParseError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            let field = prefix.trim_end_matches(':').to_string();
            match mode {
                QualityParseMode::Strict => Err(ParseError::InvalidNumber {
                    field,
                    line,
                    text: text.to_string(),
                }),
                QualityParseMode::Lenient => {
                    warn!(field = %field, line, text, "ignoring malformed number in quality report");
                    Ok(None)
                }
            }
        }
    }
}

/// Loads the code quality report.
///
/// # Errors
///
/// Propagates `ParseError` in strict mode and I/O errors other than a
/// missing file.
pub fn load_quality_report(path: &Path, mode: QualityParseMode) -> FounderResult<QualityAssessment> {
    match read_optional(path)? {
        Some(content) => Ok(QualityAssessment::parse(&content, mode)?),
        None => {
            warn!(path = %path.display(), "quality report not found, using defaults");
            Ok(QualityAssessment::fallback())
        }
    }
}

/// Signups attributed to one platform in a growth run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSignups {
    pub platform: String,
    pub signups: u64,
}

/// What the mandate needs from a growth simulator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub traction_validated: bool,
    pub total_signups: u64,
    pub total_revenue: f64,
    pub campaign_success: String,
    /// Per-platform signups in the order the results listed them.
    pub platforms: Vec<PlatformSignups>,
}

impl GrowthSummary {
    /// "No traction" record used when results are missing or unreadable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            traction_validated: false,
            total_signups: 0,
            total_revenue: 0.0,
            campaign_success: "Failed".to_string(),
            platforms: Vec::new(),
        }
    }

    /// Reads a growth results document.
    ///
    /// Totals are read at the top level first, then from `campaign_results`.
    /// Platforms may be an object keyed by platform name or a list of
    /// outcomes carrying a `platform` field.
    #[must_use]
    pub fn from_json(doc: &JsonValue) -> Self {
        let campaign = doc.get("campaign_results");
        let field = |key: &str| {
            doc.get(key)
                .or_else(|| campaign.and_then(|c| c.get(key)))
        };

        Self {
            traction_validated: doc
                .get("traction_validated")
                .and_then(JsonValue::as_bool)
                .unwrap_or(false),
            total_signups: field("total_signups").and_then(as_count).unwrap_or(0),
            total_revenue: field("total_revenue")
                .and_then(JsonValue::as_f64)
                .unwrap_or(0.0),
            campaign_success: doc
                .get("campaign_success")
                .and_then(JsonValue::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            platforms: campaign
                .and_then(|c| c.get("platforms"))
                .map(platform_signups)
                .unwrap_or_default(),
        }
    }

    /// Platforms with fewer than `threshold` signups, in listed order.
    #[must_use]
    pub fn underperforming(&self, threshold: u64) -> Vec<&str> {
        self.platforms
            .iter()
            .filter(|p| p.signups < threshold)
            .map(|p| p.platform.as_str())
            .collect()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_count(value: &JsonValue) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|f| f.max(0.0).trunc() as u64))
}

fn platform_signups(platforms: &JsonValue) -> Vec<PlatformSignups> {
    // An outcome is either an object with a `signups` field or a bare count.
    let signups = |outcome: &JsonValue| {
        outcome
            .get("signups")
            .map_or_else(|| as_count(outcome), as_count)
            .unwrap_or(0)
    };
    match platforms {
        JsonValue::Object(map) => map
            .iter()
            .map(|(name, outcome)| PlatformSignups {
                platform: name.clone(),
                signups: signups(outcome),
            })
            .collect(),
        JsonValue::Array(items) => items
            .iter()
            .filter_map(|outcome| {
                let name = outcome.get("platform")?.as_str()?;
                Some(PlatformSignups {
                    platform: name.to_string(),
                    signups: signups(outcome),
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Loads growth simulator results.
///
/// Missing and unreadable documents both yield [`GrowthSummary::fallback`].
#[must_use]
pub fn load_growth_results(path: &Path) -> GrowthSummary {
    let content = match read_optional(path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            warn!(path = %path.display(), "growth results not found, assuming no traction");
            return GrowthSummary::fallback();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "growth results unreadable, assuming no traction");
            return GrowthSummary::fallback();
        }
    };

    match serde_json::from_str::<JsonValue>(&content) {
        Ok(doc) => GrowthSummary::from_json(&doc),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "growth results are not valid JSON, assuming no traction");
            GrowthSummary::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn saas_match_is_exact() {
        assert!(BusinessProfile::fallback().is_saas());
        assert!(!BusinessProfile::from_plan().is_saas());
    }

    #[test]
    fn contribution_log_extracts_prefixed_values() {
        let log = ContributionLog::parse(
            "# Human Contribution Log\n**Curator:** Ada Lovelace\nTotal Time Spent: 6.5 hours\n",
        );
        assert_eq!(log.curator, "** Ada Lovelace");
        assert_eq!(log.time_spent, "6.5 hours");
        assert_eq!(log.ip_status, "Defensible");
        assert_eq!(log.human_contribution, "Confirmed");
    }

    #[test]
    fn contribution_log_keeps_placeholders_without_prefixes() {
        let log = ContributionLog::parse("nothing relevant here");
        assert_eq!(log.curator, "Unknown Curator");
        assert_eq!(log.time_spent, "2.0");
    }

    #[test]
    fn missing_contribution_log_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let log = load_contribution_log(&dir.path().join("HCL_Report.md")).unwrap();
        assert_eq!(log, ContributionLog::fallback());
    }

    #[test]
    fn quality_score_82_is_good_and_low_risk() {
        let q = QualityAssessment::parse("AI Debt Score: 82/100", QualityParseMode::Strict).unwrap();
        assert_eq!(q.ai_debt_score, 82.0);
        assert_eq!(q.quality_status, QualityStatus::Good);
        assert_eq!(q.technical_risk, TechnicalRisk::Low);
    }

    #[test]
    fn quality_score_55_needs_improvement_and_high_risk() {
        let q = QualityAssessment::parse("AI Debt Score: 55/100", QualityParseMode::Strict).unwrap();
        assert_eq!(q.quality_status, QualityStatus::NeedsImprovement);
        assert_eq!(q.technical_risk, TechnicalRisk::High);
    }

    #[test]
    fn quality_tiers_at_boundaries() {
        assert_eq!(QualityStatus::from_score(75.0), QualityStatus::Good);
        assert_eq!(QualityStatus::from_score(74.9), QualityStatus::NeedsImprovement);
        assert_eq!(TechnicalRisk::from_score(80.0), TechnicalRisk::Low);
        assert_eq!(TechnicalRisk::from_score(60.0), TechnicalRisk::Medium);
        assert_eq!(TechnicalRisk::from_score(59.9), TechnicalRisk::High);
    }

    #[test]
    fn quality_report_strips_markup() {
        let q = QualityAssessment::parse(
            "- **AI Debt Score:** **68**/100\n- Estimated Human Remediation Cost: **$12,500**\n",
            QualityParseMode::Strict,
        )
        .unwrap();
        assert_eq!(q.ai_debt_score, 68.0);
        assert_eq!(q.human_cost, 12500.0);
        assert_eq!(q.technical_risk, TechnicalRisk::Medium);
    }

    #[test]
    fn quality_report_defaults_score_when_line_absent() {
        let q = QualityAssessment::parse("# Report\nAll good.", QualityParseMode::Strict).unwrap();
        assert_eq!(q.ai_debt_score, 75.0);
        assert_eq!(q.human_cost, 0.0);
        assert_eq!(q.quality_status, QualityStatus::Good);
        assert_eq!(q.technical_risk, TechnicalRisk::Medium);
    }

    #[test]
    fn strict_mode_surfaces_malformed_score() {
        let err = QualityAssessment::parse(
            "Intro\nAI Debt Score: high/100",
            QualityParseMode::Strict,
        )
        .unwrap_err();
        let ParseError::InvalidNumber { field, line, text } = err;
        assert_eq!(field, "AI Debt Score");
        assert_eq!(line, 2);
        assert_eq!(text, "high");
    }

    #[test]
    fn lenient_mode_keeps_default_for_malformed_fields() {
        let q = QualityAssessment::parse(
            "AI Debt Score: high/100\nEstimated Human Remediation Cost: TBD",
            QualityParseMode::Lenient,
        )
        .unwrap();
        assert_eq!(q.ai_debt_score, 75.0);
        assert_eq!(q.human_cost, 0.0);
    }

    #[test]
    fn missing_quality_report_uses_unknown_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let q = load_quality_report(&dir.path().join("x.md"), QualityParseMode::Strict).unwrap();
        assert_eq!(q, QualityAssessment::fallback());
        assert_eq!(q.quality_status.to_string(), "Unknown");
    }

    #[test]
    fn growth_summary_reads_object_platforms_and_top_level_totals() {
        let doc = json!({
            "traction_validated": true,
            "total_signups": 120,
            "total_revenue": 640.5,
            "campaign_success": "Strong",
            "campaign_results": {
                "platforms": {
                    "Google Search": {"signups": 40},
                    "Facebook": {"signups": 9}
                }
            }
        });
        let summary = GrowthSummary::from_json(&doc);
        assert!(summary.traction_validated);
        assert_eq!(summary.total_signups, 120);
        assert_eq!(summary.total_revenue, 640.5);
        assert_eq!(summary.campaign_success, "Strong");
        assert_eq!(summary.underperforming(15), vec!["Facebook"]);
    }

    #[test]
    fn growth_summary_falls_back_to_campaign_totals_and_platform_list() {
        let doc = json!({
            "traction_validated": false,
            "campaign_results": {
                "total_signups": 29,
                "total_revenue": 20.0,
                "platforms": [
                    {"platform": "Google Search", "signups": 12},
                    {"platform": "LinkedIn", "signups": 30}
                ]
            }
        });
        let summary = GrowthSummary::from_json(&doc);
        assert_eq!(summary.total_signups, 29);
        assert_eq!(summary.total_revenue, 20.0);
        assert_eq!(summary.campaign_success, "Unknown");
        assert_eq!(summary.underperforming(15), vec!["Google Search"]);
    }

    #[test]
    fn object_platforms_keep_document_order() {
        let doc: JsonValue = serde_json::from_str(
            r#"{
                "campaign_results": {
                    "platforms": {
                        "Google Search": {"signups": 12},
                        "Facebook": {"signups": 10},
                        "LinkedIn": {"signups": 7}
                    }
                }
            }"#,
        )
        .unwrap();
        let summary = GrowthSummary::from_json(&doc);
        assert_eq!(
            summary.underperforming(15),
            vec!["Google Search", "Facebook", "LinkedIn"]
        );
    }

    #[test]
    fn object_platforms_accept_bare_counts() {
        let doc: JsonValue = serde_json::from_str(
            r#"{"campaign_results": {"platforms": {"Google Search": 12, "Facebook": 40, "LinkedIn": 7}}}"#,
        )
        .unwrap();
        let summary = GrowthSummary::from_json(&doc);
        assert_eq!(summary.underperforming(15), vec!["Google Search", "LinkedIn"]);
    }

    #[test]
    fn invalid_growth_json_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AGAResults.json");
        fs::write(&path, "{ truncated").unwrap();
        assert_eq!(load_growth_results(&path), GrowthSummary::fallback());
    }
}
