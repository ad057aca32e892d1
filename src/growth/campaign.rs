//! Ad copy generation and simulated campaign execution.
//!
//! Execution is a closed-form transform of each variant's budget. Nothing is
//! sent to an ad platform.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulatorConfig;
use crate::growth::TargetProfile;

/// Share of the allocated budget actually spent.
pub const SPEND_RATE: f64 = 0.85;
pub const IMPRESSIONS_PER_UNIT: f64 = 100.0;
pub const CLICKS_PER_UNIT: f64 = 5.0;
pub const SIGNUPS_PER_UNIT: f64 = 0.3;
pub const REVENUE_PER_UNIT: f64 = 0.2;
/// Click-through rate reported for every platform, in percent.
pub const FIXED_CTR: f64 = 5.0;
/// Conversion rate reported for every platform, in percent.
pub const FIXED_CONVERSION_RATE: f64 = 6.0;

/// Short identifier for one simulated campaign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Number of characters in a generated id.
    pub const LEN: usize = 8;

    /// Generates a random 8-character id from a v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        let mut token = uuid::Uuid::new_v4().simple().to_string();
        token.truncate(Self::LEN);
        Self(token)
    }

    /// Wraps an existing id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ad platforms a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Google Search")]
    GoogleSearch,
    Facebook,
    LinkedIn,
}

impl Platform {
    /// All platforms, in launch order.
    pub const ALL: [Platform; 3] = [Self::GoogleSearch, Self::Facebook, Self::LinkedIn];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GoogleSearch => "Google Search",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One piece of ad copy with its budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdVariant {
    pub platform: Platform,
    pub headline: String,
    pub description: String,
    pub cta: String,
    pub budget_allocation: f64,
}

/// Builds the three ad variants for a profile.
///
/// Budgets are the configured split of `config.budget_limit`.
#[must_use]
pub fn build_ad_variants(profile: &TargetProfile, config: &SimulatorConfig) -> Vec<AdVariant> {
    let split = config.budget_split;
    let share = |pct: f64| config.budget_limit * pct / 100.0;

    vec![
        AdVariant {
            platform: Platform::GoogleSearch,
            headline: format!("Transform Your {} with AI", profile.target_market),
            description: format!("{}. Save 40+ hours of work.", profile.value_proposition),
            cta: "Start Free Trial".to_string(),
            budget_allocation: share(split.google_search),
        },
        AdVariant {
            platform: Platform::Facebook,
            headline: format!("Stop Struggling with {}", profile.primary_pain_point()),
            description: format!("Join 1000+ {} who found success.", profile.primary_segment()),
            cta: "Learn More".to_string(),
            budget_allocation: share(split.facebook),
        },
        AdVariant {
            platform: Platform::LinkedIn,
            headline: format!(
                "Professional {} for {}",
                profile.value_proposition, profile.target_market
            ),
            description: "Get investor-ready documents in 24 hours. Trusted by 500+ businesses."
                .to_string(),
            cta: "Get Started".to_string(),
            budget_allocation: share(split.linkedin),
        },
    ]
}

/// Simulated performance of one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformOutcome {
    pub platform: Platform,
    pub budget_spent: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub signups: u64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

impl PlatformOutcome {
    /// Derives the outcome from an allocated budget.
    ///
    /// Counts are truncated toward zero.
    #[must_use]
    pub fn from_budget(platform: Platform, budget: f64) -> Self {
        Self {
            platform,
            budget_spent: budget * SPEND_RATE,
            impressions: whole(budget * IMPRESSIONS_PER_UNIT),
            clicks: whole(budget * CLICKS_PER_UNIT),
            signups: whole(budget * SIGNUPS_PER_UNIT),
            revenue: budget * REVENUE_PER_UNIT,
            ctr: FIXED_CTR,
            conversion_rate: FIXED_CONVERSION_RATE,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u64 {
    value.max(0.0).trunc() as u64
}

/// Result of executing every variant of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRun {
    pub campaign_id: CampaignId,
    pub start_time: DateTime<Utc>,
    /// Outcomes in variant order, serialized as a map keyed by platform name.
    #[serde(with = "platform_map")]
    pub platforms: Vec<PlatformOutcome>,
    pub total_spent: f64,
    pub total_signups: u64,
    pub total_revenue: f64,
}

impl CampaignRun {
    /// Looks up the outcome for a platform.
    #[must_use]
    pub fn outcome(&self, platform: Platform) -> Option<&PlatformOutcome> {
        self.platforms.iter().find(|o| o.platform == platform)
    }
}

/// `Vec<PlatformOutcome>` as a `{ "<platform name>": outcome }` map that
/// keeps entry order.
mod platform_map {
    use std::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::PlatformOutcome;

    pub fn serialize<S: Serializer>(
        outcomes: &[PlatformOutcome],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(outcomes.len()))?;
        for outcome in outcomes {
            map.serialize_entry(outcome.platform.name(), outcome)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<PlatformOutcome>, D::Error> {
        struct OutcomeMapVisitor;

        impl<'de> Visitor<'de> for OutcomeMapVisitor {
            type Value = Vec<PlatformOutcome>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of platform name to outcome")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut outcomes = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, outcome)) = access.next_entry::<String, PlatformOutcome>()? {
                    if name != outcome.platform.name() {
                        return Err(de::Error::custom(format!(
                            "outcome keyed '{name}' belongs to {}",
                            outcome.platform
                        )));
                    }
                    outcomes.push(outcome);
                }
                Ok(outcomes)
            }
        }

        deserializer.deserialize_map(OutcomeMapVisitor)
    }
}

/// Executes a campaign by applying the fixed multipliers to each budget.
#[must_use]
pub fn run_campaign(campaign_id: &CampaignId, variants: &[AdVariant]) -> CampaignRun {
    info!(campaign_id = %campaign_id, "executing campaign");

    let mut run = CampaignRun {
        campaign_id: campaign_id.clone(),
        start_time: Utc::now(),
        platforms: Vec::with_capacity(variants.len()),
        total_spent: 0.0,
        total_signups: 0,
        total_revenue: 0.0,
    };

    for variant in variants {
        info!(
            platform = %variant.platform,
            budget = variant.budget_allocation,
            "budget allocated"
        );
        let outcome = PlatformOutcome::from_budget(variant.platform, variant.budget_allocation);
        info!(
            platform = %variant.platform,
            spent = outcome.budget_spent,
            signups = outcome.signups,
            "platform complete"
        );

        run.total_spent += outcome.budget_spent;
        run.total_signups += outcome.signups;
        run.total_revenue += outcome.revenue;
        run.platforms.push(outcome);
    }

    run
}
