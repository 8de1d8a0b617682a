//! SQLite file that backs the key-value board medium.
//!
//! # Responsibility
//! - Open the board database and bring its `kv_entries` table up to date.
//!
//! # Invariants
//! - The schema revision lives in `PRAGMA user_version`.
//! - A connection is handed out only after every known migration has run,
//!   so `SqliteStore` never sees a half-built table.
//! - A database written by a newer build is refused rather than downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or migrating the board database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file carries a kv schema revision this build does not know.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "board database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "board database uses kv schema v{found}; this build only understands up to v{supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
