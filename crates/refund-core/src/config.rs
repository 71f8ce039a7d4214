use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::groups::{default_groups, parse_compact, GroupDirectory};
use crate::types::Group;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_CONFIG_FILE: &str = "refund.toml";
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com";
pub const DEFAULT_SLACK_TIMEOUT_SECS: u64 = 10;

/// Env var holding the Slack bot token (kept un-prefixed for compatibility
/// with existing deployments).
pub const TOKEN_ENV: &str = "SLACK_BOT_TOKEN";
/// Env var holding the compact group list, see [`parse_compact`].
pub const SUBGROUPS_ENV: &str = "REFUND_SUBGROUPS";
/// Env var naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "REFUND_CONFIG";

/// Top-level config (refund.toml + REFUND_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default = "default_groups")]
    pub groups: Vec<Group>,
}

impl Default for RefundConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            slack: SlackConfig::default(),
            groups: default_groups(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token (`xoxb-...`). Usually supplied through `SLACK_BOT_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
    /// Base URL of the Slack Web API. Overridden in tests.
    #[serde(default = "default_slack_api_base")]
    pub api_base: String,
    /// Per-request timeout for `chat.postMessage`.
    #[serde(default = "default_slack_timeout")]
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base: default_slack_api_base(),
            timeout_secs: default_slack_timeout(),
        }
    }
}

impl SlackConfig {
    /// The configured token, treating an empty or blank value as absent.
    pub fn token(&self) -> Option<&str> {
        self.bot_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_slack_api_base() -> String {
    DEFAULT_SLACK_API_BASE.to_string()
}
fn default_slack_timeout() -> u64 {
    DEFAULT_SLACK_TIMEOUT_SECS
}

impl RefundConfig {
    /// Load config with env overrides.
    ///
    /// Layers, later wins:
    ///   1. built-in defaults
    ///   2. TOML file: explicit path > REFUND_CONFIG > ./refund.toml (optional)
    ///   3. REFUND_* env vars, `__` separating nested keys
    ///      (e.g. REFUND_GATEWAY__PORT=8080)
    ///   4. SLACK_BOT_TOKEN
    ///   5. REFUND_SUBGROUPS replaces the group list when set and non-blank
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let mut config: RefundConfig = Self::figment(&path)
            .extract()
            .map_err(|e| crate::error::RefundError::Config(e.to_string()))?;

        if let Ok(compact) = std::env::var(SUBGROUPS_ENV) {
            if !compact.trim().is_empty() {
                config.groups = parse_compact(&compact);
                info!(count = config.groups.len(), "subgroups loaded from {}", SUBGROUPS_ENV);
            }
        }

        Ok(config)
    }

    fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(RefundConfig::default()))
            .merge(Toml::file(path))
            .merge(
                Env::prefixed("REFUND_")
                    .ignore(&["CONFIG", "SUBGROUPS"])
                    .split("__"),
            )
            .merge(
                Env::raw()
                    .only(&[TOKEN_ENV])
                    .map(|_| "slack.bot_token".into()),
            )
    }

    pub fn directory(&self) -> GroupDirectory {
        GroupDirectory::new(self.groups.clone())
    }

    /// Deployment problems worth logging at startup. Empty when the service
    /// can deliver requests.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.slack.token().is_none() {
            problems.push(format!("{} is not configured", TOKEN_ENV));
        }
        if self.groups.is_empty() {
            problems.push("No subgroups configured".to_string());
        }
        problems
    }
}
