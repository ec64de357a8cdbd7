use ferrous_acme_dns_domain::TxtRecord;
use serde::{Deserialize, Serialize};

/// Every successful response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WhoamiData {
    pub account: Option<AccountData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountData {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneRecordData {
    pub id: i64,
    pub zone_id: String,
    #[serde(default)]
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
}

impl ZoneRecordData {
    pub fn is_txt(&self) -> bool {
        self.record_type.eq_ignore_ascii_case("TXT")
    }

    pub fn into_txt_record(self) -> TxtRecord {
        TxtRecord::new(self.id, &self.zone_id, &self.name, &self.content, self.ttl)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateRecordRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub content: &'a str,
    pub ttl: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
