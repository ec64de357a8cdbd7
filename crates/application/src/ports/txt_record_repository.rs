use async_trait::async_trait;
use ferrous_acme_dns_domain::{AccountId, DomainError, TxtRecord, ZoneName};

/// TXT record access within a single zone.
///
/// `name` is always relative to `zone` (empty for the apex).
#[async_trait]
pub trait TxtRecordRepository: Send + Sync {
    /// Lists TXT records with exactly this relative name.
    async fn list_txt(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        name: &str,
    ) -> Result<Vec<TxtRecord>, DomainError>;

    async fn create_txt(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        name: &str,
        content: &str,
        ttl: u32,
    ) -> Result<TxtRecord, DomainError>;

    async fn delete(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        record_id: i64,
    ) -> Result<(), DomainError>;
}
