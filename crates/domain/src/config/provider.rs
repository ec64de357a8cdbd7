use serde::{Deserialize, Serialize};

pub const PRODUCTION_API_BASE: &str = "https://api.dnsimple.com/v2";
pub const SANDBOX_API_BASE: &str = "https://api.sandbox.dnsimple.com/v2";

/// Provider API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Account or user API token
    #[serde(default)]
    pub api_token: Option<String>,

    /// Account id; looked up with `whoami` when absent
    #[serde(default)]
    pub account_id: Option<String>,

    /// Use the sandbox environment (default: false)
    #[serde(default)]
    pub sandbox: bool,

    /// Explicit API base URL, takes precedence over `sandbox`
    #[serde(default)]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TTL for created TXT records (default: 60)
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl ProviderConfig {
    pub fn api_base(&self) -> &str {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/'),
            None if self.sandbox => SANDBOX_API_BASE,
            None => PRODUCTION_API_BASE,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            account_id: None,
            sandbox: false,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            ttl: default_ttl(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_ttl() -> u32 {
    60
}
