//! Console settings executor

use std::sync::Arc;

use crate::client::endpoints::Verb;
use crate::client::models::Settings;
use crate::client::request::{Executor, ExecutorConfig};
use crate::client::response::ApiResponse;
use crate::client::transport::Transport;
use crate::error::Result;

/// Read-only access to console-wide settings
pub struct ConsoleSettings {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl ConsoleSettings {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Fetch the console settings.
    pub fn fetch(&self) -> Result<ApiResponse<Settings>> {
        let request = self.build_request(Verb::Get, "settings");
        self.send(request)
    }
}

impl Executor for ConsoleSettings {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::models::AuthToken;
    use crate::error::Error;

    const TOKEN: &str = "0123456789abcdef0123456789abcdef";

    fn settings(mock: &MockTransport) -> ConsoleSettings {
        let config = ExecutorConfig::new(AuthToken::new(TOKEN).unwrap(), "https://c.canary.tools");
        ConsoleSettings::new(config, Arc::new(mock.clone()))
    }

    #[test]
    fn test_fetch_settings() {
        let mock = MockTransport::new().with_json(format!(
            r#"{{
                "auth_token": "{TOKEN}",
                "auth_token_enabled": true,
                "canarytokens_user_domains_enable": false,
                "canarytokens_webroot_enable": false,
                "console_domain": "c.canary.tools",
                "console_settings_change_enable": true,
                "device_settings_change_enable": true,
                "email_notification_enable": true,
                "generic_incident_webhooks": [],
                "globally_enforce_2fa": false,
                "hipchat_integration_urls": []
            }}"#
        ));

        let result = settings(&mock).fetch().unwrap().success().unwrap();
        assert_eq!(result.auth_token.expose(), TOKEN);

        let request = mock.last_request();
        assert_eq!(request.verb, Verb::Get);
        assert_eq!(request.url, "https://c.canary.tools/api/v1/settings");
        assert_eq!(request.params.len(), 1);
    }

    #[test]
    fn test_fetch_settings_schema_drift() {
        let mock = MockTransport::new().with_json(r#"{"auth_token_enabled": true}"#);
        let result = settings(&mock).fetch();
        assert!(matches!(result, Err(Error::Schema { .. })));
    }

    #[test]
    fn test_fetch_settings_failure() {
        let mock = MockTransport::new().with_status(401, "bad token");
        let failure = settings(&mock).fetch().unwrap().failure().unwrap();
        assert!(failure.is_auth_failure());
        assert_eq!(failure.endpoint, "https://c.canary.tools/api/v1/settings");
    }
}
