//! Mandate text rendering.
//!
//! Pure interpolation over [`MandateData`]: every phrase that depends on the
//! inputs was selected while building the data.

use std::fmt;

use crate::mandate::decision::format_score;
use crate::mandate::model::MandateData;

/// Timestamp format used in the document footer.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display adapter that writes the full mandate prompt.
#[derive(Debug, Clone, Copy)]
pub struct MandateDocument<'a>(pub &'a MandateData);

impl fmt::Display for MandateDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;
        let summary = &data.business_summary;
        let skill = &data.critical_skill;
        let narrative = &data.narrative;
        let contribution = &data.contribution;
        let score = format_score(summary.ai_debt_score);

        writeln!(f, "You are a top-tier Venture Capital Partner with 15+ years experience in technology investments. Generate a comprehensive Founder-in-Residence (FIR) mandate for a validated MVP asset.")?;
        writeln!(f)?;
        writeln!(f, "CONTEXT:")?;
        writeln!(f, "- Validated MVP in {} market", summary.target_market)?;
        writeln!(f, "- Technical quality: {} (AI Debt Score: {score}/100)", summary.quality_status)?;
        writeln!(f, "- Market traction: {}", narrative.traction_label)?;
        writeln!(f, "- Business model: {}", summary.business_model)?;
        writeln!(f)?;
        writeln!(f, "REQUIRED OUTPUT FORMAT:")?;
        writeln!(f)?;
        writeln!(f, "# FOUNDER-IN-RESIDENCE MANDATE")?;
        writeln!(f)?;
        writeln!(f, "## Executive Summary")?;
        writeln!(f, "{}", summary.executive_summary)?;
        writeln!(f)?;
        writeln!(f, "## The Opportunity")?;
        writeln!(f, "- Market Size: {}", summary.market_size)?;
        writeln!(f, "- Target Market: {}", summary.target_market)?;
        writeln!(f, "- Value Proposition: {}", summary.value_proposition)?;
        writeln!(f, "- Revenue Potential: {}", summary.revenue_projection)?;
        writeln!(f, "- Competition: {}", summary.competition.join(", "))?;
        writeln!(f)?;
        writeln!(f, "## Technical Assessment")?;
        writeln!(f, "- Code Quality Score: {score}/100")?;
        writeln!(f, "- Technical Risk Level: {}", summary.technical_risk)?;
        writeln!(f, "- Remediation Cost: ${:.0}", summary.human_cost)?;
        writeln!(f, "- Status: {}", narrative.technical_status)?;
        writeln!(f)?;
        writeln!(f, "## Human Contribution")?;
        writeln!(f, "- Curator: {}", contribution.curator)?;
        writeln!(f, "- Time Invested: {}", contribution.time_spent)?;
        writeln!(f, "- IP Status: {}", contribution.ip_status)?;
        writeln!(f, "- Human Contribution: {}", contribution.human_contribution)?;
        writeln!(f)?;
        writeln!(f, "## Market Traction")?;
        writeln!(
            f,
            "- Growth Campaign Results: {} signups, ${:.0} revenue",
            summary.total_signups, summary.total_revenue
        )?;
        writeln!(f, "- Validation Status: {}", narrative.validation_status)?;
        writeln!(f, "- Growth Agent Performance: {}", summary.campaign_success)?;
        writeln!(f)?;
        writeln!(f, "## TOP 3 CORE MISSIONS (Next 6 Months)")?;
        for (i, mission) in data.missions.iter().enumerate() {
            writeln!(f, "{}. {mission}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "## CRITICAL MISSING SKILL: {}", skill.skill)?;
        writeln!(f)?;
        writeln!(f, "**Priority Level:** {}", skill.priority)?;
        writeln!(f)?;
        writeln!(f, "**Description:** {}", skill.description)?;
        writeln!(f)?;
        writeln!(f, "**Why This Skill is Critical:** {}", skill.rationale)?;
        writeln!(f)?;
        writeln!(f, "## FIR Profile Requirements")?;
        writeln!(f)?;
        writeln!(f, "### Essential Qualifications:")?;
        writeln!(f, "- Previous startup experience scaling to $1M+ ARR")?;
        writeln!(f, "- Expertise in {}", skill.skill.to_lowercase())?;
        writeln!(f, "- Strong network in {} sector", summary.target_market.to_lowercase())?;
        writeln!(f, "- Track record of building high-performing teams")?;
        writeln!(f)?;
        writeln!(f, "### Compensation & Equity:")?;
        writeln!(f, "- Competitive salary + significant equity package")?;
        writeln!(f, "- Performance-based incentives tied to ARR milestones")?;
        writeln!(f, "- Opportunity to become co-founder based on performance")?;
        writeln!(f)?;
        writeln!(f, "### Success Metrics (6-Month Goals):")?;
        writeln!(f, "- Achieve all 3 Core Missions")?;
        writeln!(f, "- Reach ${} MRR", narrative.mrr_target)?;
        writeln!(f, "- Build core team of 5-7 people")?;
        writeln!(f, "- Establish enterprise sales process (if applicable)")?;
        writeln!(f)?;
        writeln!(f, "## Investment Thesis")?;
        writeln!(
            f,
            "This asset represents a {} opportunity requiring a {} leader to {} and achieve {} scaling to the $1M ARR milestone within 12-18 months.",
            narrative.thesis_outlook,
            narrative.thesis_leader,
            narrative.thesis_goal,
            narrative.thesis_pace
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "*Mandate generated by FounderX Asset Validation System*")?;
        write!(f, "*Date: {}*", data.generated_at.format(DATE_FORMAT))
    }
}

/// Renders the mandate prompt text.
#[must_use]
pub fn render_mandate(data: &MandateData) -> String {
    MandateDocument(data).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::mandate::decision::build_mandate;
    use crate::mandate::model::MandateInputs;

    fn fallback_data() -> MandateData {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        build_mandate(&MandateInputs::fallback(), 15, at)
    }

    #[test]
    fn renders_sections_in_order() {
        let text = render_mandate(&fallback_data());
        let sections = [
            "CONTEXT:",
            "# FOUNDER-IN-RESIDENCE MANDATE",
            "## Executive Summary",
            "## The Opportunity",
            "## Technical Assessment",
            "## Human Contribution",
            "## Market Traction",
            "## TOP 3 CORE MISSIONS (Next 6 Months)",
            "## CRITICAL MISSING SKILL:",
            "## FIR Profile Requirements",
            "## Investment Thesis",
        ];
        let mut last = 0;
        for section in sections {
            let pos = text.find(section).unwrap_or_else(|| panic!("missing {section}"));
            assert!(pos >= last, "{section} out of order");
            last = pos;
        }
    }

    #[test]
    fn renders_fallback_values() {
        let text = render_mandate(&fallback_data());
        assert!(text.contains("- Technical quality: Unknown (AI Debt Score: 0.0/100)"));
        assert!(text.contains("- Market traction: PENDING"));
        assert!(text.contains("- Remediation Cost: $0"));
        assert!(text.contains("- Growth Campaign Results: 0 signups, $0 revenue"));
        assert!(text.contains("- Growth Agent Performance: Failed"));
        assert!(text.contains("\n1. TECHNICAL FOUNDATION:"));
        assert!(text.contains("\n3. SAAS OPTIMIZATION:"));
        assert!(text.contains("**Priority Level:** IMMEDIATE"));
        assert!(text.contains("- Expertise in senior software architecture leadership"));
        assert!(text.contains("- Strong network in business owners sector"));
        assert!(text.contains("- Reach $50K MRR"));
        assert!(text.contains("This asset represents a promising opportunity"));
    }

    #[test]
    fn footer_carries_generation_time() {
        let text = render_mandate(&fallback_data());
        assert!(text.ends_with("*Date: 2026-03-14 09:26:53*"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let data = fallback_data();
        assert_eq!(render_mandate(&data), render_mandate(&data));
    }
}
