use crate::errors::{StoreError, StoreResult};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::fs;
use std::path::Path;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// How long a statement waits on another process's file lock before failing
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Open a connection to the backing file, creating the file if it is absent
pub fn get_conn(db_path: &Path) -> StoreResult<SqliteConnection> {
    let url = db_path.to_string_lossy();
    let mut conn = SqliteConnection::establish(&url)?;
    conn.batch_execute(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))?;

    Ok(conn)
}

/// Make sure the directory holding the backing file exists
pub fn ensure_parent_dir(db_path: &Path) -> StoreResult<()> {
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// Apply pending migrations; a schema that is already current is left untouched
pub fn run_migrations(conn: &mut SqliteConnection) -> StoreResult<()> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!("Database migration failed: {}", e);
        StoreError::MigrationFailed(e.to_string())
    })?;

    if applied.is_empty() {
        tracing::debug!("No pending migrations to apply");
    } else {
        for version in &applied {
            tracing::info!("Applied migration {}", version);
        }
    }

    Ok(())
}
