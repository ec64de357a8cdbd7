use ferrous_acme_dns_domain::{DomainError, RecordName};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::validate_txt_value;
use crate::ports::TxtRecordRepository;
use crate::services::RecordLocator;

pub struct RemoveTxtRecordUseCase {
    locator: Arc<RecordLocator>,
    records: Arc<dyn TxtRecordRepository>,
}

impl RemoveTxtRecordUseCase {
    pub fn new(locator: Arc<RecordLocator>, records: Arc<dyn TxtRecordRepository>) -> Self {
        Self { locator, records }
    }

    /// Deletes every TXT record at `record` holding `value`.
    /// Returns how many were removed; zero is not an error.
    #[instrument(skip(self))]
    pub async fn execute(&self, record: &RecordName, value: &str) -> Result<usize, DomainError> {
        validate_txt_value(value)?;

        let location = self.locator.locate(record).await?;
        let matching: Vec<_> = self
            .records
            .list_txt(&location.account, &location.zone, &location.relative_name)
            .await?
            .into_iter()
            .filter(|r| r.matches_content(value))
            .collect();

        if matching.is_empty() {
            debug!(
                record = %record,
                zone = %location.zone,
                "TXT record not found, nothing to do"
            );
            return Ok(0);
        }

        for txt in &matching {
            self.records
                .delete(&location.account, &location.zone, txt.id)
                .await?;

            info!(
                record = %record,
                zone = %location.zone,
                record_id = txt.id,
                "TXT record deleted"
            );
        }

        Ok(matching.len())
    }
}
