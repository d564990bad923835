use serde::{Deserialize, Serialize};

/// One approved email domain plus audit metadata. The domain is the primary
/// key and is always stored lowercase; entries are immutable once created
/// except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub domain: String,
    pub owner_id: i64,
    pub created_at: Option<String>,
}

impl WhitelistEntry {
    pub fn new(domain: String, owner_id: i64) -> Self {
        Self {
            domain,
            owner_id,
            created_at: None,
        }
    }

    /// Shallow well-formedness check for admin-submitted domains. Not full
    /// domain-name validation.
    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > 253 {
            return Err("Domain cannot exceed 253 characters".to_string());
        }
        if !domain.contains('.') {
            return Err(format!("Domain '{}' must contain at least one dot", domain));
        }
        Ok(())
    }
}

/// Lowercase a domain before any read or write. The store never holds two
/// entries that normalize to the same string.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().to_lowercase()
}
