pub mod conn;
pub mod pool;
pub mod tables;

pub use conn::DbConn;
pub use pool::create_pool;

use sqlx::SqlitePool;

use crate::error::Result;

/// Database handle type (the pool is internally reference counted)
pub type Db = SqlitePool;

/// Open the pool and bring the catalog schema up to date
///
/// The order ledger is not part of the migration set; it is created by the
/// first checkout.
pub async fn open_database(database_url: &str, max_connections: u32) -> Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    let pool = create_pool(database_url, max_connections).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    Ok(pool)
}
