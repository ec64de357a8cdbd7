use async_trait::async_trait;
use ferrous_acme_dns_application::ports::{AccountDirectory, TxtRecordRepository, ZoneDirectory};
use ferrous_acme_dns_domain::{AccountId, DomainError, TxtRecord, ZoneName, ZoneProbe};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock ZoneDirectory
// ============================================================================

/// Zone directory that records every probe it receives.
#[derive(Clone, Default)]
pub struct MockZoneDirectory {
    hosted: Arc<RwLock<HashSet<String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    probes: Arc<RwLock<Vec<String>>>,
}

impl MockZoneDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_zones(zones: &[&str]) -> Self {
        let directory = Self::new();
        for zone in zones {
            directory.add_zone(zone).await;
        }
        directory
    }

    pub async fn add_zone(&self, zone: &str) {
        self.hosted.write().await.insert(zone.to_string());
    }

    /// Probes for `zone` fail with a transport error.
    pub async fn fail_zone(&self, zone: &str) {
        self.failing.write().await.insert(zone.to_string());
    }

    pub async fn probes(&self) -> Vec<String> {
        self.probes.read().await.clone()
    }

    pub async fn probe_count(&self) -> usize {
        self.probes.read().await.len()
    }
}

#[async_trait]
impl ZoneDirectory for MockZoneDirectory {
    async fn zone_exists(
        &self,
        _account: &AccountId,
        zone: &ZoneName,
    ) -> Result<ZoneProbe, DomainError> {
        self.probes.write().await.push(zone.to_string());

        if self.failing.read().await.contains(zone.as_str()) {
            return Err(DomainError::Transport(format!(
                "Mock probe failure for {}",
                zone
            )));
        }

        if self.hosted.read().await.contains(zone.as_str()) {
            Ok(ZoneProbe::Exists)
        } else {
            Ok(ZoneProbe::NotFound)
        }
    }
}

// ============================================================================
// Mock AccountDirectory
// ============================================================================

#[derive(Clone)]
pub struct MockAccountDirectory {
    account: Option<AccountId>,
    calls: Arc<AtomicUsize>,
}

impl MockAccountDirectory {
    pub fn new(account: &str) -> Self {
        Self {
            account: Some(AccountId::new(account)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Behaves like a user token with no account attached.
    pub fn without_account() -> Self {
        Self {
            account: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountDirectory for MockAccountDirectory {
    async fn whoami(&self) -> Result<AccountId, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.account
            .clone()
            .ok_or_else(|| DomainError::AccountUnavailable("Mock user token".to_string()))
    }
}

// ============================================================================
// Mock TxtRecordRepository
// ============================================================================

#[derive(Clone)]
pub struct StoredTxt {
    pub zone: String,
    pub record: TxtRecord,
}

#[derive(Clone)]
pub struct MockTxtRecordRepository {
    records: Arc<RwLock<Vec<StoredTxt>>>,
    next_id: Arc<AtomicI64>,
    creates: Arc<AtomicUsize>,
    deletes: Arc<RwLock<Vec<i64>>>,
}

impl MockTxtRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            creates: Arc::new(AtomicUsize::new(0)),
            deletes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn seed(&self, zone: &str, name: &str, content: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.push(StoredTxt {
            zone: zone.to_string(),
            record: TxtRecord::new(id, zone, name, content, 60),
        });
        id
    }

    pub async fn records_in(&self, zone: &str) -> Vec<TxtRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|s| s.zone == zone)
            .map(|s| s.record.clone())
            .collect()
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub async fn deleted_ids(&self) -> Vec<i64> {
        self.deletes.read().await.clone()
    }
}

impl Default for MockTxtRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TxtRecordRepository for MockTxtRecordRepository {
    async fn list_txt(
        &self,
        _account: &AccountId,
        zone: &ZoneName,
        name: &str,
    ) -> Result<Vec<TxtRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|s| s.zone == zone.as_str() && s.record.name.as_ref() == name)
            .map(|s| s.record.clone())
            .collect())
    }

    async fn create_txt(
        &self,
        _account: &AccountId,
        zone: &ZoneName,
        name: &str,
        content: &str,
        ttl: u32,
    ) -> Result<TxtRecord, DomainError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = TxtRecord::new(id, zone.as_str(), name, content, ttl);
        self.records.write().await.push(StoredTxt {
            zone: zone.to_string(),
            record: record.clone(),
        });
        Ok(record)
    }

    async fn delete(
        &self,
        _account: &AccountId,
        _zone: &ZoneName,
        record_id: i64,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|s| s.record.id != record_id);
        if records.len() == before {
            return Err(DomainError::Provider {
                status: 404,
                message: format!("Record {} not found", record_id),
            });
        }
        self.deletes.write().await.push(record_id);
        Ok(())
    }
}
