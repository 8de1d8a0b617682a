//! Core of the kanban board editor.
//!
//! This crate is the single source of truth for board invariants: the
//! domain model, pure transitions, the session reducer/store, and the
//! persistence adapter that normalizes stored data. Rendering and the
//! physical storage medium live outside.

pub mod db;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod ops;
pub mod repo;
pub mod selectors;
pub mod shared;
pub mod state;
pub mod storage;

pub use dnd::{drag_preview, parse_drag_id, resolve_drag_end, DragTarget};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{demo_board, Board, Card, Comment, InvariantViolation, List, DEMO_BOARD_TITLE};
pub use repo::{
    normalize_board, parse_stored_board, BoardRepository, KvBoardRepository, RepoError,
    RepoResult, StorageKeys, CURRENT_STORAGE_KEY, LEGACY_STORAGE_KEY,
};
pub use shared::{format_relative_time, new_id, now_ms, truncate_text, Id, TimestampMs};
pub use state::{reduce, BoardAction, BoardState, BoardStatus, BoardStore, SubscriptionId};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
