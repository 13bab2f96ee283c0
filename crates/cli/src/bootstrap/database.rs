use ferrous_records_domain::config::DatabaseConfig;
use ferrous_records_infrastructure::database::{create_pool, run_migrations};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.path);

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to open database: {}", e);
        anyhow::anyhow!(e)
    })?;

    run_migrations(&pool).await.map_err(|e| {
        error!("Failed to migrate database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
