use ferrous_records_domain::config::DatabaseConfig;
use ferrous_records_domain::DomainError;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::sqlite::SqliteSynchronous;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

static MIGRATIONS: Migrator = sqlx::migrate!("./migrations");

const MEMORY_PATH: &str = ":memory:";

/// Opens the record store described by `cfg`.
///
/// `:memory:` gives a private in-memory database held by a single
/// connection that is never recycled, so its contents live as long as the pool.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = cfg.path == MEMORY_PATH;

    let options = if in_memory {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        SqliteConnectOptions::from_str(&cfg.url())?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
    }
    .foreign_keys(true)
    .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let mut pool_options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs));

    pool_options = if in_memory {
        pool_options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(cfg.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    info!(
        path = %cfg.path,
        max_connections = if in_memory { 1 } else { cfg.max_connections },
        "SQLite pool created"
    );

    Ok(pool)
}

/// Applies the embedded schema migrations. Safe to call on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATIONS.run(pool).await.map_err(|e| {
        error!(error = %e, "Failed to apply database migrations");
        e
    })?;
    info!(count = MIGRATIONS.iter().count(), "Database migrations applied");
    Ok(())
}

/// Logs `e` under `context` and classifies it for callers.
///
/// Failures to reach the store at all become [`DomainError::StoreUnavailable`];
/// everything else is a [`DomainError::DatabaseError`].
pub fn map_sqlx_error(e: sqlx::Error, context: &str) -> DomainError {
    error!(error = %e, "{}", context);
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::StoreUnavailable(e.to_string())
        }
        sqlx::Error::Database(ref db) if is_busy(db.code().as_deref()) => {
            DomainError::StoreUnavailable(e.to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

/// SQLITE_BUSY and SQLITE_LOCKED, including their extended codes.
fn is_busy(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .is_some_and(|c| matches!(c & 0xff, 5 | 6))
}
