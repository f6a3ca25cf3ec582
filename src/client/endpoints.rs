//! Console API endpoint table
//!
//! Maps `(verb, logical name)` to the path fragment appended after
//! `/api/{version}`. Executors only ever look up names registered here; a
//! miss is a bug in the executor, so [`EndpointTable::path`] panics.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain every hosted console lives under
pub const CONSOLE_DOMAIN: &str = "canary.tools";

/// API version segment used by default
pub const API_VERSION: &str = "v1";

/// HTTP verb used by a console endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    /// Lowercase name, as used in the endpoint table
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Delete => "delete",
        }
    }

    /// The matching reqwest method
    pub fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URL of a hosted console, e.g. `https://1234abcd.canary.tools`
pub fn console_base_url(console_hash: &str) -> String {
    format!("https://{}.{}", console_hash, CONSOLE_DOMAIN)
}

/// Every endpoint the executors use.
// REF: https://docs.canary.tools/
const ENDPOINTS: &[(Verb, &str, &str)] = &[
    // Console settings
    (Verb::Get, "settings", "/settings"),
    (Verb::Post, "settings_api_disable", "/settings/api/disable"),
    (Verb::Post, "settings_api_enable", "/settings/api/enable"),
    (Verb::Get, "settings_api_auth_token_download", "/token/download"),
    // Incident actions
    (Verb::Post, "incident_acknowledge", "/incident/acknowledge"),
    (Verb::Delete, "incident_delete", "/incident/delete"),
    (Verb::Get, "incident_fetch", "/incident/fetch"),
    (Verb::Post, "incident_unacknowledge", "/incident/unacknowledge"),
    // Incident queries
    (Verb::Get, "incident_acknowledged", "/incidents/acknowledged"),
    (Verb::Get, "incident_unacknowledged", "/incidents/unacknowledged"),
    (Verb::Get, "incident_all", "/incidents/all"),
    // Devices
    (Verb::Get, "devices_all", "/devices/all"),
    (Verb::Get, "devices_live", "/devices/live"),
    (Verb::Get, "devices_dead", "/devices/dead"),
    (Verb::Get, "devices_filter", "/devices/filter"),
    (Verb::Get, "device_info", "/device/info"),
    (Verb::Get, "device_ips", "/device/ips"),
    // Flocks
    (Verb::Get, "flock_list", "/flock/list"),
    (Verb::Get, "flock_settings", "/flock/settings"),
    (Verb::Get, "flock_summary", "/flock/summary"),
    (Verb::Get, "flock_users", "/flock/users"),
    (Verb::Get, "flocks_filter", "/flocks/filter"),
    (Verb::Get, "flocks_list", "/flocks/list"),
    (Verb::Get, "flocks_summary", "/flocks/summary"),
    // Flock notes
    (Verb::Get, "flock_note", "/flock/note"),
    (Verb::Post, "flock_note", "/flock/note/add"),
    (Verb::Delete, "flock_note", "/flock/note/delete"),
];

/// Lookup table from `(verb, logical name)` to path fragment.
///
/// Built once and shared read-only between executors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    entries: HashMap<(Verb, String), String>,
}

impl EndpointTable {
    /// An empty table, for callers assembling their own
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register or replace an endpoint.
    pub fn insert(&mut self, verb: Verb, name: impl Into<String>, path: impl Into<String>) {
        self.entries.insert((verb, name.into()), path.into());
    }

    /// Look up an endpoint, returning `None` if it is not registered.
    pub fn get(&self, verb: Verb, name: &str) -> Option<&str> {
        self.entries
            .get(&(verb, name.to_string()))
            .map(String::as_str)
    }

    /// Path fragment for a registered endpoint.
    ///
    /// # Panics
    /// Panics when `(verb, name)` is not registered. Executors reference only
    /// registered names, so a miss means the executor itself is wrong.
    pub fn path(&self, verb: Verb, name: &str) -> &str {
        match self.get(verb, name) {
            Some(path) => path,
            None => panic!("no console endpoint registered for ({}, {})", verb, name),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (verb, name, path) in ENDPOINTS {
            table.insert(*verb, *name, *path);
        }
        table
    }
}
