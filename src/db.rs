use sqlx::{Connection, PgConnection};

use crate::config::StoreConfig;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Open a fresh connection. Callers own it for one request and close it.
pub async fn connect(store: &StoreConfig) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect_with(&store.connect_options()).await
}

/// Close a per-request connection; a failed close only gets logged.
pub async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        log::warn!("Failed to close store connection: {}", e);
    }
}

pub async fn run_migrations(store: &StoreConfig) -> Result<(), sqlx::Error> {
    let mut conn = connect(store).await?;
    sqlx::raw_sql(MIGRATIONS).execute(&mut conn).await?;
    release(conn).await;
    log::info!("Database schema bootstrap complete");
    Ok(())
}
