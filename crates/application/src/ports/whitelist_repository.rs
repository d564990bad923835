use async_trait::async_trait;
use mailgate_domain::{whitelist::WhitelistEntry, DomainError};

/// Durable set of approved email domains. Implementations normalize the
/// domain to lowercase before every read or write, and must enforce
/// uniqueness atomically on insert — never check-then-act.
#[async_trait]
pub trait WhitelistRepository: Send + Sync {
    /// Inserts a new entry stamped by the store. Fails with
    /// `DomainError::DuplicateDomain` when the normalized domain exists.
    async fn add(&self, owner_id: i64, domain: &str) -> Result<WhitelistEntry, DomainError>;

    /// All current entries, in unspecified order.
    async fn get_all(&self) -> Result<Vec<WhitelistEntry>, DomainError>;

    /// Deletes and reports whether a matching entry existed. Removing an
    /// absent domain is not an error.
    async fn remove(&self, domain: &str) -> Result<bool, DomainError>;

    /// Membership test. Must reflect the latest committed state — this is
    /// the single read path of the registration decision.
    async fn contains(&self, domain: &str) -> Result<bool, DomainError>;
}
