pub mod registration;
pub mod whitelist;

// Re-export use cases
pub use registration::EvaluateRegistrationUseCase;
pub use whitelist::{AddDomainUseCase, GetWhitelistUseCase, RemoveDomainUseCase};
