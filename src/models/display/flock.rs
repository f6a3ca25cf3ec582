//! Flock display models

use serde::Serialize;
use tabled::Tabled;

use canarytools::{FlockOverview, FlockSummary};

/// One row of the flock overview (`flocks summaries`, `stats`)
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FlockOverviewDisplay {
    #[tabled(rename = "FLOCK ID")]
    pub flock_id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ONLINE")]
    pub online_devices: i64,

    #[tabled(rename = "OFFLINE")]
    pub offline_devices: i64,

    #[tabled(rename = "TOKENS ON")]
    pub enabled_tokens: i64,

    #[tabled(rename = "TOKENS OFF")]
    pub disabled_tokens: i64,
}

impl From<FlockOverview> for FlockOverviewDisplay {
    fn from(overview: FlockOverview) -> Self {
        Self {
            flock_id: overview.flock_id,
            name: overview.name,
            online_devices: overview.online_devices,
            offline_devices: overview.offline_devices,
            enabled_tokens: overview.enabled_tokens,
            disabled_tokens: overview.disabled_tokens,
        }
    }
}

/// Metric/value row for a single flock summary
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FlockMetricDisplay {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FlockMetricDisplay {
    fn row(metric: &str, value: impl ToString) -> Self {
        Self {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }

    /// Counters first, then one row per top token kind
    pub fn rows(summary: &FlockSummary) -> Vec<Self> {
        let mut rows = vec![
            Self::row("Incidents", summary.incident_count),
            Self::row("Total tokens", summary.total_tokens),
            Self::row("Triggered tokens", summary.triggered_tokens),
            Self::row("Disabled tokens", summary.disabled_tokens),
            Self::row("Token kinds", summary.different_token_num),
        ];
        rows.extend(
            summary
                .top_tokens
                .iter()
                .map(|t| Self::row(&format!("Top token: {}", t.kind), t.count)),
        );
        rows
    }
}
