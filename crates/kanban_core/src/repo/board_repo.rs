//! Board repository over a key-value medium.
//!
//! # Responsibility
//! - Load the board through the current -> legacy -> demo fallback chain.
//! - Persist the board as one JSON document under the current key.
//!
//! # Invariants
//! - Malformed stored data never surfaces as an error; only medium
//!   failures do.
//! - A board found only under the legacy key is written back under the
//!   current key before it is returned.
//! - An unavailable medium loads as `None` and ignores writes.

use super::normalize::parse_stored_board;
use crate::model::{demo_board, Board};
use crate::storage::{KeyValueStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the current document format.
pub const CURRENT_STORAGE_KEY: &str = "trello_board_v2";
/// Storage key written by earlier releases.
pub const LEGACY_STORAGE_KEY: &str = "trello_board";

pub type RepoResult<T> = Result<T, RepoError>;

/// Board persistence failure.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize board: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Keys addressing the stored board document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub current: String,
    pub legacy: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            current: CURRENT_STORAGE_KEY.to_string(),
            legacy: LEGACY_STORAGE_KEY.to_string(),
        }
    }
}

/// Persistence contract the store drives.
pub trait BoardRepository {
    /// Returns the stored board, a migrated legacy board, or the demo board.
    /// `None` only when no storage medium is present.
    fn load(&self) -> RepoResult<Option<Board>>;
    fn save(&self, board: &Board) -> RepoResult<()>;
    /// Removes the current-version document.
    fn clear(&self) -> RepoResult<()>;
}

/// `BoardRepository` storing JSON documents in a [`KeyValueStore`].
pub struct KvBoardRepository<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> KvBoardRepository<S> {
    /// Creates a repository using the default storage keys.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    fn read_board(&self, key: &str) -> RepoResult<Option<Board>> {
        let Some(text) = self.store.get(key)? else {
            return Ok(None);
        };
        let board = parse_stored_board(&text);
        if board.is_none() {
            warn!("event=board_load module=repo status=discarded key={key} bytes={}", text.len());
        }
        Ok(board)
    }
}

impl<S: KeyValueStore> BoardRepository for KvBoardRepository<S> {
    fn load(&self) -> RepoResult<Option<Board>> {
        if !self.store.is_available() {
            warn!("event=board_load module=repo status=unavailable");
            return Ok(None);
        }

        if let Some(board) = self.read_board(&self.keys.current)? {
            info!(
                "event=board_load module=repo status=ok source=current board_id={} lists={} cards={}",
                board.id,
                board.lists.len(),
                board.card_count()
            );
            return Ok(Some(board));
        }

        if let Some(board) = self.read_board(&self.keys.legacy)? {
            info!(
                "event=board_migrate module=repo status=start board_id={} from={} to={}",
                board.id, self.keys.legacy, self.keys.current
            );
            if let Err(err) = self.save(&board) {
                error!("event=board_migrate module=repo status=error board_id={} error={err}", board.id);
                return Err(err);
            }
            info!("event=board_migrate module=repo status=ok board_id={}", board.id);
            return Ok(Some(board));
        }

        info!("event=board_load module=repo status=ok source=demo");
        Ok(Some(demo_board()))
    }

    fn save(&self, board: &Board) -> RepoResult<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let document = serde_json::to_string(board)?;
        self.store.set(&self.keys.current, &document)?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        self.store.remove(&self.keys.current)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardRepository, KvBoardRepository, StorageKeys};
    use crate::model::Board;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn custom_keys_are_honored() {
        let keys = StorageKeys {
            current: "cur".to_string(),
            legacy: "old".to_string(),
        };
        let store = MemoryStore::new();
        let repo = KvBoardRepository::with_keys(&store, keys);

        repo.save(&Board::new("B")).unwrap();
        assert!(store.get("cur").unwrap().is_some());
        assert!(store.get("trello_board_v2").unwrap().is_none());
    }

    #[test]
    fn clear_removes_only_current_key() {
        let store = MemoryStore::new().with_entry("trello_board", "{}");
        let repo = KvBoardRepository::new(&store);
        repo.save(&Board::new("B")).unwrap();

        repo.clear().unwrap();
        assert!(store.get("trello_board_v2").unwrap().is_none());
        assert!(store.get("trello_board").unwrap().is_some());
    }

    #[test]
    fn unavailable_medium_loads_nothing_and_ignores_writes() {
        let repo = KvBoardRepository::new(MemoryStore::unavailable());

        assert!(repo.load().unwrap().is_none());
        repo.save(&Board::new("B")).unwrap();
        repo.clear().unwrap();
        assert!(repo.store().is_empty());
    }
}
