use mailgate_infrastructure::repositories::SqliteWhitelistRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub whitelist: Arc<SqliteWhitelistRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            whitelist: Arc::new(SqliteWhitelistRepository::new(pool)),
        }
    }
}
