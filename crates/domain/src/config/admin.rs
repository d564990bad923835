use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Shared secret required on the whitelist management routes. When unset
    /// the management surface is open — local development only.
    #[serde(default)]
    pub api_key: Option<String>,
}
