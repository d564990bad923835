use mailgate_domain::{whitelist::normalize_domain, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::WhitelistRepository;

pub struct RemoveDomainUseCase {
    repository: Arc<dyn WhitelistRepository>,
}

impl RemoveDomainUseCase {
    pub fn new(repository: Arc<dyn WhitelistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<bool, DomainError> {
        let domain = normalize_domain(domain);
        let removed = self.repository.remove(&domain).await?;

        if removed {
            info!(domain = %domain, "Domain removed from whitelist");
        }

        Ok(removed)
    }
}
