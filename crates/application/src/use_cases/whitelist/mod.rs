mod add_domain;
mod get_whitelist;
mod remove_domain;

pub use add_domain::AddDomainUseCase;
pub use get_whitelist::GetWhitelistUseCase;
pub use remove_domain::RemoveDomainUseCase;
