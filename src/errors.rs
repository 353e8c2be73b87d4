//! Error types for the SQLite-backed store.
//!
//! Every `Store` operation either commits fully or returns one of these.
//! Nothing here is recovered internally; callers decide what to show the user.

use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Storage location unavailable: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the backing file is held by another writer past the busy timeout.
    pub fn is_locked(&self) -> bool {
        match self {
            StoreError::QueryFailed(DieselError::DatabaseError(_, info)) => {
                info.message().contains("locked")
            }
            _ => false,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
