use chrono::NaiveDateTime;
use mailgate_domain::WhitelistEntry;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct AddDomainRequest {
    pub domain: String,
    /// Identifier of the acting administrator; audit metadata only.
    #[serde(default)]
    pub owner_id: i64,
}

#[derive(Serialize, Debug, Clone)]
pub struct WhitelistEntryResponse {
    pub domain: String,
    pub owner_id: i64,
    pub created_at: String,
}

impl WhitelistEntryResponse {
    pub fn from_entry(entry: WhitelistEntry) -> Self {
        Self {
            created_at: format_created_at(entry.created_at.as_deref()),
            domain: entry.domain,
            owner_id: entry.owner_id,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct RemoveDomainResponse {
    pub removed: bool,
}

/// SQLite hands back `YYYY-MM-DD HH:MM:SS`; the management view wants minute
/// precision, with "unknown" for entries missing a timestamp.
fn format_created_at(raw: Option<&str>) -> String {
    raw.and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
