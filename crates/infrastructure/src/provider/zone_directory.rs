use async_trait::async_trait;
use ferrous_acme_dns_application::ports::ZoneDirectory;
use ferrous_acme_dns_domain::{AccountId, DomainError, ZoneName, ZoneProbe};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use super::DnsimpleClient;

#[async_trait]
impl ZoneDirectory for DnsimpleClient {
    #[instrument(skip(self))]
    async fn zone_exists(
        &self,
        account: &AccountId,
        zone: &ZoneName,
    ) -> Result<ZoneProbe, DomainError> {
        let request = self.request(Method::GET, &[account.as_str(), "zones", zone.as_str()]);
        let response = self.send(request).await?;
        let status = response.status();

        if status.is_success() {
            debug!(zone = %zone, "Zone exists");
            return Ok(ZoneProbe::Exists);
        }

        if status == StatusCode::NOT_FOUND {
            return Ok(ZoneProbe::NotFound);
        }

        Err(self.error_from(response).await)
    }
}
