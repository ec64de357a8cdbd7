use ferrous_acme_dns_domain::config::ProbeErrorPolicy;
use ferrous_acme_dns_domain::{AccountId, DomainError, RecordName, ZoneName, ZoneProbe};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use super::ZoneCache;
use crate::ports::ZoneDirectory;

/// Finds the zone that owns a record name.
///
/// Candidates are the record's label suffixes, probed most specific first,
/// so a delegated sub-zone wins over the apex when both are hosted. The
/// first hit is cached; misses are not.
pub struct ZoneResolver {
    directory: Arc<dyn ZoneDirectory>,
    cache: Arc<ZoneCache>,
    on_probe_error: ProbeErrorPolicy,
}

impl ZoneResolver {
    pub fn new(directory: Arc<dyn ZoneDirectory>, cache: Arc<ZoneCache>) -> Self {
        Self {
            directory,
            cache,
            on_probe_error: ProbeErrorPolicy::default(),
        }
    }

    pub fn with_probe_error_policy(mut self, policy: ProbeErrorPolicy) -> Self {
        self.on_probe_error = policy;
        self
    }

    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        record: &RecordName,
        account: &AccountId,
    ) -> Result<ZoneName, DomainError> {
        if let Some(zone) = self.cache.get(record) {
            debug!(zone = %zone, "Zone cache hit");
            return Ok(zone);
        }

        for candidate in record.zone_candidates() {
            match self.directory.zone_exists(account, &candidate).await {
                Ok(ZoneProbe::Exists) => {
                    debug!(zone = %candidate, "Owning zone found");
                    self.cache.insert(record.clone(), candidate.clone());
                    return Ok(candidate);
                }
                Ok(ZoneProbe::NotFound) => {
                    debug!(candidate = %candidate, "Zone not hosted");
                }
                Err(e) => match self.on_probe_error {
                    ProbeErrorPolicy::TreatAsAbsent => {
                        warn!(
                            candidate = %candidate,
                            error = %e,
                            "Zone probe failed, treating candidate as absent"
                        );
                    }
                    ProbeErrorPolicy::Abort => {
                        error!(candidate = %candidate, error = %e, "Zone probe failed");
                        return Err(e);
                    }
                },
            }
        }

        Err(DomainError::ZoneNotFound(record.to_string()))
    }
}
