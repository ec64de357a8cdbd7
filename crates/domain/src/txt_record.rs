use std::sync::Arc;

/// TXT record as stored by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub id: i64,
    pub zone_id: Arc<str>,
    /// Name relative to the zone; empty for the apex.
    pub name: Arc<str>,
    pub content: Arc<str>,
    pub ttl: u32,
}

impl TxtRecord {
    pub fn new(id: i64, zone_id: &str, name: &str, content: &str, ttl: u32) -> Self {
        Self {
            id,
            zone_id: Arc::from(zone_id),
            name: Arc::from(name),
            content: Arc::from(content),
            ttl,
        }
    }

    /// Providers may hand TXT content back wrapped in one layer of quotes.
    pub fn matches_content(&self, value: &str) -> bool {
        unquote(&self.content) == unquote(value)
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
