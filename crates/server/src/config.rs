//! Configuration for the labeler service.

use std::env;

/// Webhook service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// GitHub token for API calls.
    pub github_token: Option<String>,
    /// Webhook signing secret; verification is skipped when unset.
    pub webhook_secret: Option<String>,
    /// Path of the rule file inside target repositories.
    pub config_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env::var("LABELER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|s| !s.is_empty()),
            webhook_secret: env::var("GITHUB_WEBHOOK_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
            config_path: env::var("LABELER_CONFIG_PATH")
                .unwrap_or_else(|_| scm::client::DEFAULT_CONFIG_PATH.to_string()),
        }
    }
}
