mod registration;
mod whitelist;

pub use registration::{RegistrationCheckRequest, RegistrationCheckResponse};
pub use whitelist::{AddDomainRequest, RemoveDomainResponse, WhitelistEntryResponse};
