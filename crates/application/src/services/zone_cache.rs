use dashmap::DashMap;
use ferrous_acme_dns_domain::{RecordName, ZoneName};

/// Record name to owning zone, filled by successful zone scans.
///
/// Entries are never evicted: zone topology is assumed stable for the
/// lifetime of the cache. Failed scans are never stored.
#[derive(Debug, Default)]
pub struct ZoneCache {
    entries: DashMap<RecordName, ZoneName>,
}

impl ZoneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, record: &RecordName) -> Option<ZoneName> {
        self.entries.get(record).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, record: RecordName, zone: ZoneName) {
        self.entries.insert(record, zone);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
