use async_trait::async_trait;
use ferrous_acme_dns_application::ports::TxtRecordRepository;
use ferrous_acme_dns_domain::{AccountId, DomainError, TxtRecord, ZoneName};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use super::types::{CreateRecordRequest, ZoneRecordData};
use super::DnsimpleClient;

fn records_path<'a>(account: &'a AccountId, zone: &'a ZoneName) -> [&'a str; 4] {
    [account.as_str(), "zones", zone.as_str(), "records"]
}

#[async_trait]
impl TxtRecordRepository for DnsimpleClient {
    #[instrument(skip(self))]
    async fn list_txt(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        name: &str,
    ) -> Result<Vec<TxtRecord>, DomainError> {
        let request = self
            .request(Method::GET, &records_path(account, zone))
            .query(&[("name", name), ("type", "TXT")]);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(self.error_from(response).await);
        }

        // First page only
        let data: Vec<ZoneRecordData> = self.read_data(response).await?;
        let records: Vec<TxtRecord> = data
            .into_iter()
            .filter(|r| r.is_txt() && r.name == name)
            .map(ZoneRecordData::into_txt_record)
            .collect();

        debug!(zone = %zone, name = %name, count = records.len(), "TXT records listed");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn create_txt(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        name: &str,
        content: &str,
        ttl: u32,
    ) -> Result<TxtRecord, DomainError> {
        let body = CreateRecordRequest {
            name,
            record_type: "TXT",
            content,
            ttl,
        };
        let request = self.request(Method::POST, &records_path(account, zone)).json(&body);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(self.error_from(response).await);
        }

        let data: ZoneRecordData = self.read_data(response).await?;
        Ok(data.into_txt_record())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        account: &AccountId,
        zone: &ZoneName,
        record_id: i64,
    ) -> Result<(), DomainError> {
        let record_id = record_id.to_string();
        let [account, zones, zone, records] = records_path(account, zone);
        let request = self.request(Method::DELETE, &[account, zones, zone, records, record_id.as_str()]);
        let response = self.send(request).await?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            _ => Err(self.error_from(response).await),
        }
    }
}
