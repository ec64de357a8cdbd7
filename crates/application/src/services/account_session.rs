use ferrous_acme_dns_domain::{AccountId, DomainError};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use crate::ports::AccountDirectory;

/// Account context shared by every call of one session.
///
/// A configured account id is used as is; otherwise `whoami` is called once
/// and its answer kept for the rest of the session.
pub struct AccountSession {
    directory: Arc<dyn AccountDirectory>,
    account: OnceCell<AccountId>,
}

impl AccountSession {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self {
            directory,
            account: OnceCell::new(),
        }
    }

    pub fn with_account(directory: Arc<dyn AccountDirectory>, account: AccountId) -> Self {
        Self {
            directory,
            account: OnceCell::new_with(Some(account)),
        }
    }

    pub async fn account(&self) -> Result<AccountId, DomainError> {
        self.account
            .get_or_try_init(|| async {
                let account = self.directory.whoami().await?;
                info!(account = %account, "Account resolved from credential");
                Ok::<_, DomainError>(account)
            })
            .await
            .cloned()
    }
}
