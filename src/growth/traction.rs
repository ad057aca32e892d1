//! Traction monitoring.
//!
//! Daily metrics are a linear function of the day index, not of the
//! campaign's actual performance.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FounderError, FounderResult};
use crate::growth::CampaignId;

/// One simulated day of campaign metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub day: u32,
    pub signups: u64,
    pub revenue: f64,
    pub traffic: u64,
}

impl DailyMetric {
    /// Metrics for a 1-based day index.
    #[must_use]
    pub fn for_day(day: u32) -> Self {
        let d = u64::from(day);
        Self {
            day,
            signups: 8 + 2 * d,
            revenue: 25.0 + 5.0 * f64::from(day),
            traffic: 150 + 20 * d,
        }
    }
}

/// Final-day levels that validate traction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TractionThresholds {
    pub signups: u64,
    pub revenue: f64,
}

/// Whether the monitored campaign proved traction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TractionVerdict {
    #[serde(rename = "traction_validated")]
    Validated,
    #[serde(rename = "traction_failed")]
    Failed,
}

impl TractionVerdict {
    /// Validated iff either final-day threshold is met.
    #[must_use]
    pub fn evaluate(last: &DailyMetric, thresholds: TractionThresholds) -> Self {
        if last.signups >= thresholds.signups || last.revenue >= thresholds.revenue {
            Self::Validated
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn is_validated(self) -> bool {
        matches!(self, Self::Validated)
    }
}

impl fmt::Display for TractionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validated => write!(f, "traction_validated"),
            Self::Failed => write!(f, "traction_failed"),
        }
    }
}

/// Monitoring window with its daily metrics and verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractionReport {
    pub campaign_id: CampaignId,
    pub monitoring_period: String,
    pub daily_metrics: Vec<DailyMetric>,
    pub final_status: TractionVerdict,
}

impl TractionReport {
    /// Metrics of the last monitored day.
    #[must_use]
    pub fn last_day(&self) -> Option<&DailyMetric> {
        self.daily_metrics.last()
    }
}

/// Generates `days` daily metrics and judges the last one.
///
/// # Errors
///
/// Returns a validation error if `days` is zero.
pub fn monitor_traction(
    campaign_id: &CampaignId,
    days: u32,
    thresholds: TractionThresholds,
) -> FounderResult<TractionReport> {
    if days == 0 {
        return Err(FounderError::validation(
            "monitoring period must be at least one day",
        ));
    }

    info!(campaign_id = %campaign_id, days, "monitoring traction");

    let daily_metrics: Vec<DailyMetric> = (1..=days).map(DailyMetric::for_day).collect();
    for metric in &daily_metrics {
        debug!(
            day = metric.day,
            signups = metric.signups,
            revenue = metric.revenue,
            traffic = metric.traffic,
            "daily metrics"
        );
    }

    let last = daily_metrics[daily_metrics.len() - 1];
    let final_status = TractionVerdict::evaluate(&last, thresholds);
    if final_status.is_validated() {
        info!(signups = last.signups, revenue = last.revenue, "traction validated");
    } else {
        info!(signups = last.signups, revenue = last.revenue, "traction not validated");
    }

    Ok(TractionReport {
        campaign_id: campaign_id.clone(),
        monitoring_period: format!("{days} days"),
        daily_metrics,
        final_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: TractionThresholds = TractionThresholds {
        signups: 50,
        revenue: 500.0,
    };

    #[test]
    fn seven_day_window_follows_linear_formulas() {
        let report = monitor_traction(&CampaignId::new("c0ffee00"), 7, DEFAULT).unwrap();
        assert_eq!(report.daily_metrics.len(), 7);
        for (i, metric) in report.daily_metrics.iter().enumerate() {
            let day = i as u64 + 1;
            assert_eq!(u64::from(metric.day), day);
            assert_eq!(metric.signups, 8 + 2 * day);
            assert_eq!(metric.revenue, 25.0 + 5.0 * day as f64);
            assert_eq!(metric.traffic, 150 + 20 * day);
        }
        assert_eq!(report.monitoring_period, "7 days");
    }

    #[test]
    fn default_run_always_fails() {
        let report = monitor_traction(&CampaignId::new("c0ffee00"), 7, DEFAULT).unwrap();
        let last = report.last_day().unwrap();
        assert_eq!(last.signups, 22);
        assert_eq!(last.revenue, 60.0);
        assert_eq!(report.final_status, TractionVerdict::Failed);
    }

    #[test]
    fn either_threshold_validates() {
        let by_signups = DailyMetric {
            day: 1,
            signups: 50,
            revenue: 0.0,
            traffic: 0,
        };
        let by_revenue = DailyMetric {
            day: 1,
            signups: 0,
            revenue: 500.0,
            traffic: 0,
        };
        let neither = DailyMetric {
            day: 1,
            signups: 49,
            revenue: 499.99,
            traffic: 0,
        };
        assert_eq!(TractionVerdict::evaluate(&by_signups, DEFAULT), TractionVerdict::Validated);
        assert_eq!(TractionVerdict::evaluate(&by_revenue, DEFAULT), TractionVerdict::Validated);
        assert_eq!(TractionVerdict::evaluate(&neither, DEFAULT), TractionVerdict::Failed);
    }

    #[test]
    fn lower_thresholds_validate_default_run() {
        let lenient = TractionThresholds {
            signups: 20,
            revenue: 500.0,
        };
        let report = monitor_traction(&CampaignId::new("c0ffee00"), 7, lenient).unwrap();
        assert!(report.final_status.is_validated());
    }

    #[test]
    fn zero_days_is_rejected() {
        let err = monitor_traction(&CampaignId::new("c0ffee00"), 0, DEFAULT).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn verdict_serializes_as_status_string() {
        assert_eq!(
            serde_json::to_string(&TractionVerdict::Failed).unwrap(),
            "\"traction_failed\""
        );
        assert_eq!(TractionVerdict::Validated.to_string(), "traction_validated");
    }
}
