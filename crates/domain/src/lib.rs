//! Ferrous ACME DNS Domain Layer
pub mod account;
pub mod config;
pub mod errors;
pub mod record_name;
pub mod txt_record;
pub mod zone;

pub use account::{AccountId, ApiToken};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use record_name::RecordName;
pub use txt_record::TxtRecord;
pub use zone::{ZoneName, ZoneProbe};
