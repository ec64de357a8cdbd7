mod account_session;
mod record_locator;
mod zone_cache;
mod zone_resolver;

pub use account_session::AccountSession;
pub use record_locator::{RecordLocation, RecordLocator};
pub use zone_cache::ZoneCache;
pub use zone_resolver::ZoneResolver;
