//! Decision tables that turn the loaded inputs into mandate content.
//!
//! Everything here is a pure function of the inputs (plus the generation
//! timestamp in [`build_mandate`]).

use chrono::{DateTime, Utc};

use crate::mandate::model::{
    BusinessSummary, CriticalSkill, MandateData, MandateInputs, Narrative, SkillPriority,
};
use crate::mandate::sources::{BusinessProfile, GrowthSummary, QualityAssessment};

/// Scores below this call for fixing the foundation first.
pub const CRITICAL_DEBT_SCORE: f64 = 60.0;
/// Scores at or above this are production ready.
pub const PRODUCTION_READY_SCORE: f64 = 80.0;
/// Scores below this call for technical rather than scaling leadership.
pub const TECHNICAL_LEADERSHIP_SCORE: f64 = 70.0;
/// Remediation below this amount counts as minimal debt.
pub const MINIMAL_DEBT_COST: f64 = 1000.0;

/// Formats a score with at least one decimal place, e.g. `82.0`, `67.5`.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// Four-paragraph executive summary.
#[must_use]
pub fn build_executive_summary(
    business: &BusinessProfile,
    quality: &QualityAssessment,
    growth: &GrowthSummary,
) -> String {
    let score = quality.ai_debt_score;
    let validated = growth.traction_validated;

    let quality_word = if score >= PRODUCTION_READY_SCORE {
        "excellent"
    } else if score >= CRITICAL_DEBT_SCORE {
        "good"
    } else {
        "acceptable"
    };
    let debt_word = if quality.human_cost < MINIMAL_DEBT_COST {
        "minimal"
    } else {
        "manageable"
    };
    let (validation_word, campaign_phrase, traction_phrase) = if validated {
        ("complete", "successfully demonstrating", "capitalizing on proven traction")
    } else {
        ("ongoing", "attempting to establish", "fixing growth channels")
    };
    let (leadership, challenge) = if score < TECHNICAL_LEADERSHIP_SCORE {
        ("technical leadership", "technical debt management")
    } else {
        ("scaling expertise", "rapid scaling")
    };
    let expertise = if business.target_market.contains("B2B") {
        "enterprise sales"
    } else {
        "growth marketing"
    };

    format!(
        "This validated MVP represents a {model} opportunity in the {market} market, estimated at {size}.\n\n\
         The technical foundation shows {quality_word} code quality (AI Debt Score: {score}/100), with {debt_word} technical debt requiring ${cost:.0} in remediation costs.\n\n\
         Market validation is {validation_word}, with the autonomous growth campaign {campaign_phrase} product-market fit through {signups} signups and ${revenue:.0} in early revenue.\n\n\
         The ideal Founder-in-Residence must combine {leadership} with deep {expertise} experience to navigate the challenges of {challenge} while {traction_phrase}.",
        model = business.business_model,
        market = business.target_market,
        size = business.market_size,
        score = format_score(score),
        cost = quality.human_cost,
        signups = growth.total_signups,
        revenue = growth.total_revenue,
    )
}

/// The three core missions for the next six months, in fixed order:
/// technical, growth, business model.
#[must_use]
pub fn build_core_missions(
    business: &BusinessProfile,
    quality: &QualityAssessment,
    growth: &GrowthSummary,
    low_signup_threshold: u64,
) -> [String; 3] {
    let score = quality.ai_debt_score;

    let technical = if score < CRITICAL_DEBT_SCORE {
        "TECHNICAL FOUNDATION: Immediately address critical technical debt and security vulnerabilities to establish production-ready infrastructure. Target: Achieve 80+ AI Debt Score within 90 days to enable secure scaling.".to_string()
    } else if score < PRODUCTION_READY_SCORE {
        "TECHNICAL OPTIMIZATION: Optimize codebase architecture and implement automated testing infrastructure while maintaining current functionality. Target: Reach enterprise-grade reliability standards.".to_string()
    } else {
        "SCALING ARCHITECTURE: Transition from MVP to scalable platform architecture capable of handling 10x growth. Focus on microservices, caching, and performance optimization.".to_string()
    };

    let growth_mission = if growth.traction_validated {
        format!(
            "GROWTH SCALING: Capitalize on validated traction channels identified by the autonomous growth agent. Implement systematic replication of successful acquisition methods while optimizing conversion funnels. Target: Scale from current ${:.0} to $100K MRR within 6 months.",
            growth.total_revenue
        )
    } else {
        let failed = growth.underperforming(low_signup_threshold);
        if failed.is_empty() {
            "GROWTH CHANNEL OPTIMIZATION: Analyze autonomous growth agent results to identify and optimize the most promising customer acquisition channels. Increase campaign budget and refine targeting based on conversion data.".to_string()
        } else {
            format!(
                "CHANNEL REDISCOVERY: Pivot away from failed growth channels ({}) and identify 2-3 new customer acquisition channels through direct outreach, partnerships, or content marketing. Focus on channels with higher conversion potential for the {}.",
                failed.join(", "),
                business.target_market
            )
        }
    };

    let model = if business.is_saas() {
        "SAAS OPTIMIZATION: Implement comprehensive subscription management, onboarding automation, and retention systems. Establish customer success processes and implement usage-based pricing optimization. Target: Achieve 95%+ retention and $1M ARR run rate within 6 months.".to_string()
    } else {
        "REVENUE OPTIMIZATION: Develop and implement secondary revenue streams while optimizing the primary business model. Focus on enterprise sales processes, partnership development, and product-market fit refinement for sustainable growth.".to_string()
    };

    [technical, growth_mission, model]
}

/// Picks the single critical skill. First matching row wins:
/// weak code, then missing traction, then SaaS model, then partnerships.
#[must_use]
pub fn build_critical_skill(
    business: &BusinessProfile,
    quality: &QualityAssessment,
    growth: &GrowthSummary,
) -> CriticalSkill {
    if quality.ai_debt_score < CRITICAL_DEBT_SCORE {
        CriticalSkill {
            skill: "Senior Software Architecture Leadership".to_string(),
            description: "Critical need for a technical co-founder with 10+ years experience in scalable system design, security implementation, and development team leadership. Must have prior experience taking technical debt-heavy codebases to production scale.".to_string(),
            priority: SkillPriority::Immediate,
            rationale: "Technical debt poses existential risk to scaling plans".to_string(),
        }
    } else if !growth.traction_validated {
        CriticalSkill {
            skill: "Growth Marketing & Customer Acquisition Leadership".to_string(),
            description: "Essential expertise in data-driven customer acquisition, conversion optimization, and multi-channel growth strategies. Must have proven track record of scaling SaaS/technology products from $0 to $1M+ ARR.".to_string(),
            priority: SkillPriority::Critical,
            rationale: "Product-market fit validation is essential for investor confidence".to_string(),
        }
    } else if business.is_saas() {
        CriticalSkill {
            skill: "Enterprise Sales & Customer Success Leadership".to_string(),
            description: "Deep experience in B2B SaaS sales processes, enterprise customer onboarding, and customer success management. Must have network and experience closing deals with Fortune 500 companies and managing complex enterprise relationships.".to_string(),
            priority: SkillPriority::High,
            rationale: "Enterprise sales expertise needed to scale beyond early adopters".to_string(),
        }
    } else {
        CriticalSkill {
            skill: "Strategic Business Development & Partnerships".to_string(),
            description: "Proven ability to identify, negotiate, and execute strategic partnerships that drive significant revenue growth. Must have experience in market expansion, competitive positioning, and investor relations.".to_string(),
            priority: SkillPriority::Medium,
            rationale: "Strategic partnerships essential for sustainable competitive advantage".to_string(),
        }
    }
}

/// Selects every conditional template phrase.
#[must_use]
pub fn build_narrative(quality: &QualityAssessment, growth: &GrowthSummary) -> Narrative {
    let validated = growth.traction_validated;
    let pick = |yes: &str, no: &str| (if validated { yes } else { no }).to_string();
    let technical_status = if quality.ai_debt_score >= PRODUCTION_READY_SCORE {
        "Production Ready"
    } else {
        "Needs Improvement"
    };

    Narrative {
        traction_label: pick("VALIDATED", "PENDING"),
        technical_status: technical_status.to_string(),
        validation_status: pick("COMPLETE", "IN PROGRESS"),
        mrr_target: pick("100K", "50K"),
        thesis_outlook: pick("proven", "promising"),
        thesis_leader: pick("scaling", "foundational"),
        thesis_goal: pick("accelerate growth", "establish market fit"),
        thesis_pace: pick("rapid", "sustainable"),
    }
}

/// Assembles the complete mandate from the loaded inputs.
#[must_use]
pub fn build_mandate(
    inputs: &MandateInputs,
    low_signup_threshold: u64,
    generated_at: DateTime<Utc>,
) -> MandateData {
    let MandateInputs {
        business,
        contribution,
        quality,
        growth,
    } = inputs;

    let business_summary = BusinessSummary {
        target_market: business.target_market.clone(),
        quality_status: quality.quality_status,
        ai_debt_score: quality.ai_debt_score,
        traction_validated: growth.traction_validated,
        business_model: business.business_model.clone(),
        market_size: business.market_size.clone(),
        competition: business.competition.clone(),
        value_proposition: business.value_proposition.clone(),
        revenue_projection: business.revenue_projection.clone(),
        technical_risk: quality.technical_risk,
        human_cost: quality.human_cost,
        total_signups: growth.total_signups,
        total_revenue: growth.total_revenue,
        campaign_success: growth.campaign_success.clone(),
        executive_summary: build_executive_summary(business, quality, growth),
    };

    MandateData {
        business_summary,
        contribution: contribution.clone(),
        missions: build_core_missions(business, quality, growth, low_signup_threshold),
        critical_skill: build_critical_skill(business, quality, growth),
        narrative: build_narrative(quality, growth),
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mandate::sources::PlatformSignups;

    fn growth(validated: bool, platforms: &[(&str, u64)]) -> GrowthSummary {
        GrowthSummary {
            traction_validated: validated,
            total_signups: platforms.iter().map(|(_, s)| s).sum(),
            total_revenue: 4200.0,
            campaign_success: "Unknown".to_string(),
            platforms: platforms
                .iter()
                .map(|(name, signups)| PlatformSignups {
                    platform: (*name).to_string(),
                    signups: *signups,
                })
                .collect(),
        }
    }

    fn quality(score: f64) -> QualityAssessment {
        QualityAssessment::from_scores(score, 0.0)
    }

    #[test]
    fn format_score_keeps_one_decimal() {
        assert_eq!(format_score(82.0), "82.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(67.5), "67.5");
    }

    #[test]
    fn technical_mission_follows_score_bands() {
        let business = BusinessProfile::fallback();
        let g = growth(false, &[]);
        let prefix = |score| {
            build_core_missions(&business, &quality(score), &g, 15)[0]
                .split(':')
                .next()
                .unwrap()
                .to_string()
        };
        assert_eq!(prefix(59.9), "TECHNICAL FOUNDATION");
        assert_eq!(prefix(60.0), "TECHNICAL OPTIMIZATION");
        assert_eq!(prefix(79.9), "TECHNICAL OPTIMIZATION");
        assert_eq!(prefix(80.0), "SCALING ARCHITECTURE");
    }

    #[test]
    fn low_score_unvalidated_saas_missions() {
        let business = BusinessProfile::fallback();
        let missions = build_core_missions(
            &business,
            &quality(50.0),
            &growth(false, &[("Google Search", 20), ("Facebook", 9)]),
            15,
        );
        assert!(missions[0].starts_with("TECHNICAL FOUNDATION:"));
        assert!(missions[1].starts_with("CHANNEL REDISCOVERY:"));
        assert!(missions[1].contains("(Facebook)"));
        assert!(!missions[1].contains("Google Search"));
        assert!(missions[1].contains("for the Business owners."));
        assert!(missions[2].starts_with("SAAS OPTIMIZATION:"));
    }

    #[test]
    fn failed_channels_are_listed_in_order() {
        let missions = build_core_missions(
            &BusinessProfile::from_plan(),
            &quality(70.0),
            &growth(false, &[("Google Search", 12), ("Facebook", 10), ("LinkedIn", 7)]),
            15,
        );
        assert!(missions[1].contains("(Google Search, Facebook, LinkedIn)"));
        assert!(missions[2].starts_with("REVENUE OPTIMIZATION:"));
    }

    #[test]
    fn growth_mission_without_failed_channels_optimizes() {
        let missions = build_core_missions(
            &BusinessProfile::fallback(),
            &quality(90.0),
            &growth(false, &[("LinkedIn", 40)]),
            15,
        );
        assert!(missions[1].starts_with("GROWTH CHANNEL OPTIMIZATION:"));
    }

    #[test]
    fn validated_growth_mission_quotes_revenue() {
        let missions = build_core_missions(
            &BusinessProfile::fallback(),
            &quality(90.0),
            &growth(true, &[("LinkedIn", 2)]),
            15,
        );
        assert!(missions[1].starts_with("GROWTH SCALING:"));
        assert!(missions[1].contains("from current $4200 to $100K MRR"));
    }

    #[test]
    fn critical_skill_decision_order() {
        let saas = BusinessProfile::fallback();
        let other = BusinessProfile::from_plan();

        let skill = build_critical_skill(&saas, &quality(40.0), &growth(true, &[]));
        assert_eq!(skill.skill, "Senior Software Architecture Leadership");
        assert_eq!(skill.priority, SkillPriority::Immediate);

        let skill = build_critical_skill(&saas, &quality(60.0), &growth(false, &[]));
        assert_eq!(skill.skill, "Growth Marketing & Customer Acquisition Leadership");
        assert_eq!(skill.priority, SkillPriority::Critical);

        let skill = build_critical_skill(&saas, &quality(60.0), &growth(true, &[]));
        assert_eq!(skill.skill, "Enterprise Sales & Customer Success Leadership");
        assert_eq!(skill.priority, SkillPriority::High);

        let skill = build_critical_skill(&other, &quality(60.0), &growth(true, &[]));
        assert_eq!(skill.skill, "Strategic Business Development & Partnerships");
        assert_eq!(skill.priority, SkillPriority::Medium);
    }

    #[test]
    fn executive_summary_phrases() {
        let business = BusinessProfile {
            target_market: "B2B logistics teams".to_string(),
            ..BusinessProfile::from_plan()
        };
        let q = QualityAssessment::from_scores(65.0, 2500.0);
        let summary = build_executive_summary(&business, &q, &growth(false, &[("X", 3)]));
        assert!(summary.contains("represents a SaaS subscription opportunity"));
        assert!(summary.contains("shows good code quality (AI Debt Score: 65.0/100)"));
        assert!(summary.contains("with manageable technical debt requiring $2500"));
        assert!(summary.contains("Market validation is ongoing"));
        assert!(summary.contains("through 3 signups and $4200 in early revenue"));
        assert!(summary.contains("combine technical leadership with deep enterprise sales"));
        assert!(summary.ends_with("while fixing growth channels."));
        assert_eq!(summary.split("\n\n").count(), 4);
    }

    #[test]
    fn narrative_tracks_traction_and_score() {
        let pending = build_narrative(&quality(85.0), &growth(false, &[]));
        assert_eq!(pending.traction_label, "PENDING");
        assert_eq!(pending.technical_status, "Production Ready");
        assert_eq!(pending.mrr_target, "50K");
        assert_eq!(pending.thesis_goal, "establish market fit");

        let proven = build_narrative(&quality(79.0), &growth(true, &[]));
        assert_eq!(proven.traction_label, "VALIDATED");
        assert_eq!(proven.technical_status, "Needs Improvement");
        assert_eq!(proven.validation_status, "COMPLETE");
        assert_eq!(proven.thesis_pace, "rapid");
    }

    #[test]
    fn fallback_inputs_pick_architecture_leadership() {
        let data = build_mandate(&MandateInputs::fallback(), 15, Utc::now());
        assert_eq!(
            data.critical_skill.skill,
            "Senior Software Architecture Leadership"
        );
        assert_eq!(data.business_summary.ai_debt_score, 0.0);
        assert!(!data.business_summary.traction_validated);
        assert_eq!(data.business_summary.campaign_success, "Failed");
        assert!(data.missions[1].starts_with("GROWTH CHANNEL OPTIMIZATION:"));
    }
}
