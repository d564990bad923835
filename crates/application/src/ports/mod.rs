mod whitelist_repository;

pub use whitelist_repository::WhitelistRepository;
