use crate::ports::WhitelistRepository;
use mailgate_domain::{whitelist::WhitelistEntry, DomainError};
use std::sync::Arc;

pub struct GetWhitelistUseCase {
    repository: Arc<dyn WhitelistRepository>,
}

impl GetWhitelistUseCase {
    pub fn new(repository: Arc<dyn WhitelistRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<WhitelistEntry>, DomainError> {
        self.repository.get_all().await
    }
}
