//! Configuration module for Ferrous ACME DNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `provider`: Provider API endpoint, credentials and record defaults
//! - `resolver`: Zone resolution policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use provider::{ProviderConfig, PRODUCTION_API_BASE, SANDBOX_API_BASE};
pub use resolver::{ProbeErrorPolicy, ResolverConfig};
pub use root::{CliOverrides, Config};
