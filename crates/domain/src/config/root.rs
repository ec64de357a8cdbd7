use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::provider::ProviderConfig;
use super::resolver::{ProbeErrorPolicy, ResolverConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "./ferrous-acme-dns.toml",
    "/etc/ferrous-acme-dns/config.toml",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; each one wins over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_token: Option<String>,
    pub account_id: Option<String>,
    pub sandbox: bool,
    pub base_url: Option<String>,
    pub log_level: Option<String>,
    pub on_probe_error: Option<ProbeErrorPolicy>,
}

impl Config {
    /// Load from `config_path`, or from the first default location that
    /// exists, then apply CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(p) => Some(p),
            None => DEFAULT_CONFIG_PATHS
                .iter()
                .copied()
                .find(|p| Path::new(p).exists()),
        };

        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::FileRead {
                    path: p.to_string(),
                    source,
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(token) = overrides.api_token {
            self.provider.api_token = Some(token);
        }
        if let Some(account) = overrides.account_id {
            self.provider.account_id = Some(account);
        }
        if overrides.sandbox {
            self.provider.sandbox = true;
        }
        if let Some(url) = overrides.base_url {
            self.provider.base_url = Some(url);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(policy) = overrides.on_probe_error {
            self.resolver.on_probe_error = policy;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.provider.api_token.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(ConfigError::Validation(
                    "provider.api_token is required".to_string(),
                ))
            }
            Some(_) => {}
        }

        if let Some(account) = &self.provider.account_id {
            if account.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "provider.account_id cannot be empty when set".to_string(),
                ));
            }
        }

        if let Some(url) = &self.provider.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(
                    "provider.base_url must start with http:// or https://".to_string(),
                ));
            }
        }

        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "provider.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.provider.ttl == 0 {
            return Err(ConfigError::Validation(
                "provider.ttl must be greater than zero".to_string(),
            ));
        }

        if !LOG_LEVELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(self.logging.level.trim()))
        {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
