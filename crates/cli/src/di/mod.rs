use ferrous_acme_dns_application::services::{
    AccountSession, RecordLocator, ZoneCache, ZoneResolver,
};
use ferrous_acme_dns_application::use_cases::{
    AddTxtRecordUseCase, RemoveTxtRecordUseCase, ResolveZoneUseCase,
};
use ferrous_acme_dns_domain::{AccountId, Config};
use ferrous_acme_dns_infrastructure::DnsimpleClient;
use std::sync::Arc;

/// Everything one CLI invocation needs, sharing a single zone cache and
/// account session.
pub struct Services {
    pub session: Arc<AccountSession>,
    pub add_txt: AddTxtRecordUseCase,
    pub remove_txt: RemoveTxtRecordUseCase,
    pub resolve_zone: ResolveZoneUseCase,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(DnsimpleClient::from_config(&config.provider)?);

        let session = Arc::new(match &config.provider.account_id {
            Some(id) => AccountSession::with_account(client.clone(), AccountId::new(id)),
            None => AccountSession::new(client.clone()),
        });

        let resolver = Arc::new(
            ZoneResolver::new(client.clone(), Arc::new(ZoneCache::new()))
                .with_probe_error_policy(config.resolver.on_probe_error),
        );
        let locator = Arc::new(RecordLocator::new(session.clone(), resolver));

        Ok(Self {
            session,
            add_txt: AddTxtRecordUseCase::new(
                locator.clone(),
                client.clone(),
                config.provider.ttl,
            ),
            remove_txt: RemoveTxtRecordUseCase::new(locator.clone(), client),
            resolve_zone: ResolveZoneUseCase::new(locator),
        })
    }
}
