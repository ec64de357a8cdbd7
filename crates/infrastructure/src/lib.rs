//! Ferrous ACME DNS Infrastructure Layer
pub mod provider;

pub use provider::DnsimpleClient;
