use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct RegistrationCheckRequest {
    // Missing field is treated as an empty email, which the gate rejects
    // with its own reason rather than a deserialization error.
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize, Debug)]
pub struct RegistrationCheckResponse {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
