//! Board aggregate domain model.
//!
//! # Responsibility
//! - Define the Board/List/Card/Comment value records and their factories.
//! - Provide the structural invariant check used by tests and the store.
//!
//! # Invariants
//! - `Board` is the sole unit of persistence; children are owned by value.
//! - Back-references (`List::board_id`, `Card::list_id`) always match the
//!   owning parent after any domain operation.
//! - `order` fields are dense zero-based ranks within each sibling collection.

pub mod board;
pub mod demo;
pub mod invariants;

pub use board::{Board, Card, Comment, List};
pub use demo::{demo_board, DEMO_BOARD_TITLE};
pub use invariants::InvariantViolation;
