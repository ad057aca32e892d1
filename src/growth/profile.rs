//! Target market profile consumed by ad copy generation.

use serde::{Deserialize, Serialize};

/// Who the campaign targets and what it promises them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub target_market: String,
    pub value_proposition: String,
    pub key_benefits: Vec<String>,
    pub customer_segments: Vec<String>,
    pub pain_points: Vec<String>,
}

impl TargetProfile {
    /// Profile used whenever a business plan is available.
    #[must_use]
    pub fn from_plan() -> Self {
        Self {
            target_market: "Small business owners and entrepreneurs".to_string(),
            value_proposition: "AI-powered business plan generation and validation".to_string(),
            key_benefits: strings(&[
                "Save 40+ hours of research and planning",
                "Professional investor-ready documents",
                "Market validation and competitive analysis",
            ]),
            customer_segments: strings(&[
                "Solo entrepreneurs",
                "Small business owners",
                "Startup founders",
            ]),
            pain_points: strings(&[
                "Time-consuming business planning",
                "Lack of market research expertise",
                "Difficulty attracting investors",
            ]),
        }
    }

    /// Profile used when no business plan exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            target_market: "General business audience".to_string(),
            value_proposition: "Innovative business solution".to_string(),
            key_benefits: strings(&["Efficiency", "Quality", "Results"]),
            customer_segments: strings(&["Business owners"]),
            pain_points: strings(&["Time", "Cost", "Complexity"]),
        }
    }

    /// First listed pain point, or a generic one.
    #[must_use]
    pub fn primary_pain_point(&self) -> &str {
        self.pain_points.first().map_or("busywork", String::as_str)
    }

    /// First listed customer segment, or a generic one.
    #[must_use]
    pub fn primary_segment(&self) -> &str {
        self.customer_segments.first().map_or("customers", String::as_str)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
