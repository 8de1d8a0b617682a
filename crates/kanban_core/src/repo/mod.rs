//! Board persistence: normalization of stored data and the repository
//! contract the store drives.
//!
//! # Invariants
//! - The repository returns either a fully valid board or no board, never a
//!   partially valid one.
//! - Only storage-medium failures surface as `RepoError`.

pub mod board_repo;
pub mod normalize;

pub use board_repo::{
    BoardRepository, KvBoardRepository, RepoError, RepoResult, StorageKeys, CURRENT_STORAGE_KEY,
    LEGACY_STORAGE_KEY,
};
pub use normalize::{normalize_board, normalize_board_at, parse_stored_board, Discarded};
