use ferrous_acme_dns_domain::{AccountId, DomainError, RecordName, ZoneName};
use std::sync::Arc;
use tracing::instrument;

use super::{AccountSession, ZoneResolver};

/// Where a record lives on the provider side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLocation {
    pub account: AccountId,
    pub zone: ZoneName,
    /// Record name relative to `zone`; empty for the apex.
    pub relative_name: String,
}

pub struct RecordLocator {
    session: Arc<AccountSession>,
    resolver: Arc<ZoneResolver>,
}

impl RecordLocator {
    pub fn new(session: Arc<AccountSession>, resolver: Arc<ZoneResolver>) -> Self {
        Self { session, resolver }
    }

    #[instrument(skip(self))]
    pub async fn locate(&self, record: &RecordName) -> Result<RecordLocation, DomainError> {
        let account = self.session.account().await?;
        let zone = self.resolver.resolve(record, &account).await?;
        let relative_name = record.relative_to(&zone)?;

        Ok(RecordLocation {
            account,
            zone,
            relative_name,
        })
    }
}
