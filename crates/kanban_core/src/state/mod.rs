//! Board session state machine.
//!
//! # Responsibility
//! - Map the closed set of user actions onto domain operations.
//! - Track view-only state: load status, error message, card selection.
//! - Wrap the reducer in an observable store that triggers persistence.
//!
//! # Invariants
//! - Content actions are accepted only in `Ready`; otherwise ignored.
//! - `selected_card_id` never names a card that is gone from the board.

pub mod action;
pub mod reducer;
pub mod store;

pub use action::BoardAction;
pub use reducer::reduce;
pub use store::{BoardStore, SubscriptionId};

use crate::model::Board;
use crate::shared::Id;

/// Load lifecycle of the session's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStatus {
    /// Initial; no board available yet.
    #[default]
    Booting,
    /// Board loaded and editable.
    Ready,
    /// Load failed. Terminal for the session.
    Error,
}

/// Complete session state consumed by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    pub status: BoardStatus,
    pub board: Option<Board>,
    /// Card focused in the comments view.
    pub selected_card_id: Option<Id>,
    /// Set only in `BoardStatus::Error`.
    pub error_message: Option<String>,
}

impl BoardState {
    /// Returns the board only when it is loaded and editable.
    pub fn ready_board(&self) -> Option<&Board> {
        match self.status {
            BoardStatus::Ready => self.board.as_ref(),
            BoardStatus::Booting | BoardStatus::Error => None,
        }
    }
}
