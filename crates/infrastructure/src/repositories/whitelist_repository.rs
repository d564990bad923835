use async_trait::async_trait;
use mailgate_application::ports::WhitelistRepository;
use mailgate_domain::{
    whitelist::{normalize_domain, WhitelistEntry},
    DomainError,
};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// SQLite-backed allow-list store. Queries hit the database directly — no
/// in-memory mirror, so admin changes are visible on the very next
/// registration attempt.
pub struct SqliteWhitelistRepository {
    pool: SqlitePool,
}

impl SqliteWhitelistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_insert_error(domain: &str, e: sqlx::Error) -> DomainError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::DuplicateDomain(domain.to_string())
            }
            _ => DomainError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl WhitelistRepository for SqliteWhitelistRepository {
    async fn add(&self, owner_id: i64, domain: &str) -> Result<WhitelistEntry, DomainError> {
        let domain = normalize_domain(domain);

        // Single INSERT; the PRIMARY KEY constraint arbitrates concurrent
        // adds for the same domain.
        sqlx::query("INSERT INTO whitelist_domains (domain, owner_id) VALUES (?, ?)")
            .bind(&domain)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_insert_error(&domain, e))?;

        let row = sqlx::query(
            "SELECT domain, owner_id, datetime(created_at) AS created_at
             FROM whitelist_domains WHERE domain = ?",
        )
        .bind(&domain)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        debug!(domain = %domain, owner_id, "Domain inserted into whitelist");

        Ok(WhitelistEntry {
            domain: row.get("domain"),
            owner_id: row.get("owner_id"),
            created_at: row.get("created_at"),
        })
    }

    async fn get_all(&self) -> Result<Vec<WhitelistEntry>, DomainError> {
        let rows = sqlx::query(
            "SELECT domain, owner_id, datetime(created_at) AS created_at
             FROM whitelist_domains ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| WhitelistEntry {
                domain: row.get("domain"),
                owner_id: row.get("owner_id"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    async fn remove(&self, domain: &str) -> Result<bool, DomainError> {
        let domain = normalize_domain(domain);

        let result = sqlx::query("DELETE FROM whitelist_domains WHERE domain = ?")
            .bind(&domain)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        debug!(domain = %domain, removed = result.rows_affected() > 0, "Whitelist delete executed");

        Ok(result.rows_affected() > 0)
    }

    async fn contains(&self, domain: &str) -> Result<bool, DomainError> {
        let domain = normalize_domain(domain);

        let row = sqlx::query("SELECT 1 FROM whitelist_domains WHERE domain = ? LIMIT 1")
            .bind(&domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }
}
