#![allow(dead_code)]

use async_trait::async_trait;
use mailgate_application::ports::WhitelistRepository;
use mailgate_domain::{
    whitelist::{normalize_domain, WhitelistEntry},
    DomainError,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockWhitelistRepository {
    entries: Arc<RwLock<HashMap<String, WhitelistEntry>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockWhitelistRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_domains(domains: Vec<&str>) -> Self {
        let repo = Self::new();
        {
            let entries = repo.entries.clone();
            let mut map = entries.try_write().unwrap();
            for domain in domains {
                let domain = normalize_domain(domain);
                map.insert(
                    domain.clone(),
                    WhitelistEntry {
                        domain,
                        owner_id: 1,
                        created_at: Some("2026-01-15 09:30:00".to_string()),
                    },
                );
            }
        }
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockWhitelistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhitelistRepository for MockWhitelistRepository {
    async fn add(&self, owner_id: i64, domain: &str) -> Result<WhitelistEntry, DomainError> {
        self.check_failure().await?;
        let domain = normalize_domain(domain);
        let mut entries = self.entries.write().await;
        if entries.contains_key(&domain) {
            return Err(DomainError::DuplicateDomain(domain));
        }
        let entry = WhitelistEntry {
            domain: domain.clone(),
            owner_id,
            created_at: Some("2026-01-15 09:30:00".to_string()),
        };
        entries.insert(domain, entry.clone());
        Ok(entry)
    }

    async fn get_all(&self) -> Result<Vec<WhitelistEntry>, DomainError> {
        self.check_failure().await?;
        Ok(self.entries.read().await.values().cloned().collect())
    }

    async fn remove(&self, domain: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let domain = normalize_domain(domain);
        Ok(self.entries.write().await.remove(&domain).is_some())
    }

    async fn contains(&self, domain: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let domain = normalize_domain(domain);
        Ok(self.entries.read().await.contains_key(&domain))
    }
}
