use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Idle and lifetime limit for the in-memory SQLite connection.
pub const MEMORY_CONN_KEEPALIVE: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Build a pool from `[database]` settings.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to exactly one connection whose idle and lifetime limits are
/// [`MEMORY_CONN_KEEPALIVE`].
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.sqlx_logging(cfg.sqlx_logging);
    if cfg.is_sqlite() && cfg.url.contains(":memory:") {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONN_KEEPALIVE)
            .max_lifetime(MEMORY_CONN_KEEPALIVE);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Statement;

    #[test]
    fn memory_connection_outlives_regular_pool_limits() {
        let defaults = DatabaseConfig::default();
        assert!(MEMORY_CONN_KEEPALIVE > Duration::from_secs(defaults.max_lifetime_secs));
        assert!(MEMORY_CONN_KEEPALIVE > Duration::from_secs(defaults.idle_timeout_secs));
    }

    #[tokio::test]
    async fn memory_database_keeps_state_between_checkouts() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let db = connect_with_config(&cfg).await?;
        let backend = db.get_database_backend();
        db.execute(Statement::from_string(backend, "CREATE TABLE marker (id INTEGER)")).await?;
        db.execute(Statement::from_string(backend, "INSERT INTO marker (id) VALUES (7)")).await?;
        let row = db.query_one(Statement::from_string(backend, "SELECT id FROM marker")).await?;
        assert_eq!(row.map(|r| r.try_get::<i32>("", "id")).transpose()?, Some(7));
        Ok(())
    }
}
