use async_trait::async_trait;
use ferrous_acme_dns_domain::{AccountId, DomainError};

#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Account the configured credential belongs to.
    ///
    /// # Errors
    ///
    /// * `DomainError::AccountUnavailable` - The credential is a user token
    ///   not bound to a single account
    /// * `DomainError::Unauthorized` - The credential was rejected
    async fn whoami(&self) -> Result<AccountId, DomainError>;
}
