use ferrous_acme_dns_domain::{DomainError, RecordName};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::{RecordLocation, RecordLocator};

pub struct ResolveZoneUseCase {
    locator: Arc<RecordLocator>,
}

impl ResolveZoneUseCase {
    pub fn new(locator: Arc<RecordLocator>) -> Self {
        Self { locator }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, record: &RecordName) -> Result<RecordLocation, DomainError> {
        let location = self.locator.locate(record).await?;

        info!(
            record = %record,
            zone = %location.zone,
            relative_name = %location.relative_name,
            "Zone resolved"
        );

        Ok(location)
    }
}
