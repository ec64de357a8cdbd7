use ferrous_acme_dns_domain::{DomainError, RecordName, TxtRecord};
use std::sync::Arc;
use tracing::{info, instrument};

use super::validate_txt_value;
use crate::ports::TxtRecordRepository;
use crate::services::RecordLocator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTxtOutcome {
    Created(TxtRecord),
    AlreadyPresent(TxtRecord),
}

impl AddTxtOutcome {
    pub fn record(&self) -> &TxtRecord {
        match self {
            AddTxtOutcome::Created(r) | AddTxtOutcome::AlreadyPresent(r) => r,
        }
    }
}

pub struct AddTxtRecordUseCase {
    locator: Arc<RecordLocator>,
    records: Arc<dyn TxtRecordRepository>,
    ttl: u32,
}

impl AddTxtRecordUseCase {
    pub fn new(
        locator: Arc<RecordLocator>,
        records: Arc<dyn TxtRecordRepository>,
        ttl: u32,
    ) -> Self {
        Self {
            locator,
            records,
            ttl,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        record: &RecordName,
        value: &str,
    ) -> Result<AddTxtOutcome, DomainError> {
        validate_txt_value(value)?;

        let location = self.locator.locate(record).await?;
        let existing = self
            .records
            .list_txt(&location.account, &location.zone, &location.relative_name)
            .await?;

        if let Some(found) = existing.into_iter().find(|r| r.matches_content(value)) {
            info!(
                record = %record,
                zone = %location.zone,
                record_id = found.id,
                "TXT record already present, nothing to do"
            );
            return Ok(AddTxtOutcome::AlreadyPresent(found));
        }

        let created = self
            .records
            .create_txt(
                &location.account,
                &location.zone,
                &location.relative_name,
                value,
                self.ttl,
            )
            .await?;

        info!(
            record = %record,
            zone = %location.zone,
            record_id = created.id,
            ttl = created.ttl,
            "TXT record created"
        );

        Ok(AddTxtOutcome::Created(created))
    }
}
