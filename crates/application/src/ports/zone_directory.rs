use async_trait::async_trait;
use ferrous_acme_dns_domain::{AccountId, DomainError, ZoneName, ZoneProbe};

/// Answers "does a zone with this name exist in this account".
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    /// Probes a single zone name.
    ///
    /// # Returns
    ///
    /// * `Ok(ZoneProbe::Exists)` - The account hosts this zone
    /// * `Ok(ZoneProbe::NotFound)` - The provider has no such zone for the account
    /// * `Err(DomainError)` - The probe itself failed (auth, transport, provider error)
    async fn zone_exists(
        &self,
        account: &AccountId,
        zone: &ZoneName,
    ) -> Result<ZoneProbe, DomainError>;
}
