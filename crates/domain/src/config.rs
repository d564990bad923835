pub mod admin;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use admin::AdminConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
