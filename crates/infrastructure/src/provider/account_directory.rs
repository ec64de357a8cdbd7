use async_trait::async_trait;
use ferrous_acme_dns_application::ports::AccountDirectory;
use ferrous_acme_dns_domain::{AccountId, DomainError};
use reqwest::Method;
use tracing::{debug, instrument};

use super::types::WhoamiData;
use super::DnsimpleClient;

#[async_trait]
impl AccountDirectory for DnsimpleClient {
    #[instrument(skip(self))]
    async fn whoami(&self) -> Result<AccountId, DomainError> {
        let response = self.send(self.request(Method::GET, &["whoami"])).await?;
        if !response.status().is_success() {
            return Err(self.error_from(response).await);
        }

        let data: WhoamiData = self.read_data(response).await?;
        let account = data.account.ok_or_else(|| {
            DomainError::AccountUnavailable(
                "whoami returned no account; use an account token or set account_id".to_string(),
            )
        })?;

        debug!(account_id = account.id, "whoami succeeded");
        Ok(AccountId::new(account.id.to_string()))
    }
}
