//! Ordered schema steps for the `kv_entries` board medium.
//!
//! Each step runs once, inside the same transaction that bumps
//! `PRAGMA user_version` to its revision.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// One schema revision of the key-value table.
#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    revision: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    revision: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Newest kv schema revision this build can create.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.revision)
}

/// Runs every step newer than the database's current revision.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.revision > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.revision)?;
        info!(
            "event=kv_schema_step module=db status=applied revision={} name={}",
            step.revision, step.name
        );
    }
    tx.commit()?;
    Ok(())
}
