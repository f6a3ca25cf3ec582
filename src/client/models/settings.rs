//! Console settings models

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::auth::AuthToken;
use crate::error::Result;

/// Generic `{"result": ...}` acknowledgement returned by action endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkstResult {
    /// Usually `"success"`
    pub result: String,
}

impl ThinkstResult {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

/// Console-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The API token the console reports; validated like any other token
    pub auth_token: AuthToken,
    pub auth_token_enabled: bool,
    pub canarytokens_user_domains_enable: bool,
    pub canarytokens_webroot_enable: bool,
    pub console_domain: String,
    pub console_settings_change_enable: bool,
    pub device_settings_change_enable: bool,
    pub email_notification_enable: bool,
    pub generic_incident_webhooks: Vec<String>,
    pub globally_enforce_2fa: bool,
    pub hipchat_integration_urls: Vec<String>,
}

/// The downloadable API token file.
///
/// The console serves this as a file rather than JSON, so it is kept as
/// raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFile {
    pub auth_token_file_as_bytes: Vec<u8>,

    /// Where the file was written, once [`AuthFile::write_to`] has been called
    pub auth_token_file: Option<PathBuf>,
}

impl AuthFile {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            auth_token_file_as_bytes: bytes,
            auth_token_file: None,
        }
    }

    /// Write the token file to `path`, creating parent directories.
    pub fn write_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.auth_token_file_as_bytes)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        self.auth_token_file = Some(path.to_path_buf());
        Ok(())
    }
}
