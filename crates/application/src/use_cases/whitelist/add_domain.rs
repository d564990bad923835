use mailgate_domain::{
    whitelist::{normalize_domain, WhitelistEntry},
    DomainError,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::WhitelistRepository;

pub struct AddDomainUseCase {
    repository: Arc<dyn WhitelistRepository>,
}

impl AddDomainUseCase {
    pub fn new(repository: Arc<dyn WhitelistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, owner_id: i64, domain: &str) -> Result<WhitelistEntry, DomainError> {
        let domain = normalize_domain(domain);
        WhitelistEntry::validate_domain(&domain).map_err(DomainError::InvalidDomainName)?;

        let entry = self.repository.add(owner_id, &domain).await?;

        info!(domain = %entry.domain, owner_id, "Domain added to whitelist");

        Ok(entry)
    }
}
