pub mod health;
pub mod registration;
pub mod whitelist;

pub use health::health_check;
pub use registration::check_registration;
pub use whitelist::{add_domain, delete_domain, get_whitelist};
