//! phonebook-server: HTTP phonebook record service
//!
//! Serves five contact operations over a relational `contacts` table.
//!
//! ## Architecture
//! ```text
//! [HTTP clients] -> [axum router] -> [ContactStore]
//!                        |                 |
//!                        v                 v
//!                  [PageCursor]     [SQLite/Postgres]
//! ```
//!
//! ## Configuration
//! - PHONEBOOK_CONFIG: path to a YAML config file
//! - PHONEBOOK__SERVER__PORT, PHONEBOOK__SERVER__PAGE_SIZE, ...
//! - PHONEBOOK__STORAGE__TYPE: "sqlite" or "postgres" (default: sqlite)
//! - PHONEBOOK_LOG: tracing filter (default: info)

use std::sync::Arc;

use tracing::{error, info};

use phonebook::config::{Config, StorageType};
use phonebook::contacts::cursor::PageCursor;
use phonebook::contacts::rest;
use phonebook::contacts::store::ContactStore;
use phonebook::utils::bootstrap::{init_tracing, parse_config_path};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        storage = ?config.storage.storage_type,
        page_size = config.server.page_size,
        "starting phonebook-server"
    );

    let store: Arc<dyn ContactStore> = match config.storage.storage_type {
        #[cfg(feature = "sqlite")]
        StorageType::Sqlite => {
            use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
            use std::time::Duration;

            let opts = SqliteConnectOptions::new()
                .filename(&config.storage.sqlite.path)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(30))
                .create_if_missing(true);

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await?;

            Arc::new(phonebook::storage::sqlite::SqliteContactStore::new(pool))
        }
        #[cfg(feature = "postgres")]
        StorageType::Postgres => {
            let pool = sqlx::PgPool::connect(&config.storage.postgres.uri).await?;
            Arc::new(phonebook::storage::postgres::PostgresContactStore::new(
                pool,
            ))
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(format!("storage type {:?} not enabled in this build", other).into());
        }
    };

    store
        .init_schema()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> {
            format!("failed to init contacts schema: {}", e).into()
        })?;

    let cursor = Arc::new(PageCursor::new());

    rest::serve(
        store,
        cursor,
        config.server.page_size,
        &config.server.host,
        config.server.port,
    )
    .await
    .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    Ok(())
}
