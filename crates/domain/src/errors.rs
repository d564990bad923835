use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Email address is required")]
    EmailRequired,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Domain already whitelisted: {0}")]
    DuplicateDomain(String),

    #[error("Domain not whitelisted: {0}")]
    DomainNotWhitelisted(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
