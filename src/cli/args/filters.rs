//! Argument groups for incident and flock commands

use clap::Args;

use canarytools::client::models::DEFAULT_FLOCK_ID;
use canarytools::{IncidentActionQuery, IncidentsQuery, Result};

/// Incident listing filters
#[derive(Debug, Clone, Args)]
pub struct IncidentFilterArgs {
    /// Maximum incidents to return
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Only incidents updated after this update id
    #[arg(long)]
    pub since: Option<i64>,

    /// Maximum events per incident
    #[arg(long, default_value_t = 1)]
    pub event_limit: u32,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Only incidents from this device
    #[arg(long = "node")]
    pub node_id: Option<String>,

    /// Only incidents in this flock
    #[arg(long = "flock")]
    pub flock_id: Option<String>,

    /// Timezone for timestamps, e.g. UTC
    #[arg(long)]
    pub tz: Option<String>,
}

impl IncidentFilterArgs {
    pub fn to_query(&self) -> IncidentsQuery {
        let mut query = IncidentsQuery::new()
            .limit(self.limit)
            .event_limit(self.event_limit);
        if let Some(since) = self.since {
            query = query.incidents_since(since);
        }
        if let Some(cursor) = &self.cursor {
            query = query.cursor(cursor.as_str());
        }
        if let Some(node) = &self.node_id {
            query = query.node_id(node.as_str());
        }
        if let Some(flock) = &self.flock_id {
            query = query.flock_id(flock.as_str());
        }
        if let Some(tz) = &self.tz {
            query = query.tz(tz.as_str());
        }
        query
    }
}

/// Identifies one incident
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct IncidentIdArgs {
    /// Incident id, e.g. incident:httplogin:...
    #[arg(long)]
    pub id: Option<String>,

    /// Incident hash id
    #[arg(long)]
    pub hash: Option<String>,
}

impl IncidentIdArgs {
    pub fn to_query(&self) -> Result<IncidentActionQuery> {
        IncidentActionQuery::new(self.id.clone(), self.hash.clone())
    }
}

/// Selects a flock, defaulting to the console's default flock
#[derive(Debug, Clone, Args)]
pub struct FlockArgs {
    #[arg(long = "flock", default_value = DEFAULT_FLOCK_ID)]
    pub flock_id: String,
}
