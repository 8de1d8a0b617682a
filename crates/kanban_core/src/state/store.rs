//! Observable wrapper around the reducer.
//!
//! # Responsibility
//! - Hold the single current `BoardState` and apply actions one at a time.
//! - Run the init effect (repository load) and the save effect.
//! - Notify subscribers after every state change.
//!
//! # Invariants
//! - The store is the sole writer; each dispatch runs to completion before
//!   the next one starts.
//! - A save is issued whenever the state is `Ready` with a board whose
//!   `(id, updated_at_ms)` has not been persisted yet, in state order.
//! - Every `InitSuccess` forgets the last persisted stamp, so a freshly
//!   loaded board is always written once.
//! - Save failures are logged and never change the state.

use super::{reduce, BoardAction, BoardState, BoardStatus};
use crate::model::Board;
use crate::repo::BoardRepository;
use crate::shared::{Id, TimestampMs};
use log::{debug, error, info, warn};

/// Handle returned by [`BoardStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BoardState)>;

/// Message used when the medium is absent at boot.
pub const LOAD_UNAVAILABLE_MESSAGE: &str = "Failed to load board";

/// Cheap identity of a board revision.
type BoardStamp = (Id, TimestampMs);

/// Single-session board store.
pub struct BoardStore<R: BoardRepository> {
    repo: R,
    state: BoardState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    persisted: Option<BoardStamp>,
}

impl<R: BoardRepository> BoardStore<R> {
    /// Creates a store in `Booting` without touching the repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: BoardState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
            persisted: None,
        }
    }

    /// Creates a store and runs the init effect.
    pub fn boot(repo: R) -> Self {
        let mut store = Self::new(repo);
        store.init();
        store
    }

    /// Loads the board and dispatches `InitSuccess` or `InitError`.
    pub fn init(&mut self) -> &BoardState {
        let action = match self.repo.load() {
            Ok(Some(board)) => {
                if let Err(violation) = board.check_invariants() {
                    warn!(
                        "event=store_init module=state status=non_canonical board_id={} violation={violation}",
                        board.id
                    );
                }
                BoardAction::InitSuccess(board)
            }
            Ok(None) => BoardAction::InitError(LOAD_UNAVAILABLE_MESSAGE.to_string()),
            Err(err) => {
                error!("event=store_init module=state status=error error={err}");
                BoardAction::InitError(err.to_string())
            }
        };
        self.dispatch(action)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Applies `action`, persists the result when needed, then notifies
    /// subscribers if anything changed.
    pub fn dispatch(&mut self, action: BoardAction) -> &BoardState {
        let name = action.name();
        if matches!(action, BoardAction::InitSuccess(_)) {
            self.persisted = None;
        }
        let before = Snapshot::of(&self.state);
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);

        self.persist_if_needed();

        if Snapshot::of(&self.state) != before {
            debug!(
                "event=dispatch module=state status=ok action={name} listeners={}",
                self.listeners.len()
            );
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        &self.state
    }

    /// Registers `listener`; it runs after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&BoardState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(current, _)| *current != id);
        self.listeners.len() != before
    }

    fn persist_if_needed(&mut self) {
        let Some(board) = self.state.ready_board() else {
            return;
        };
        let stamp = stamp_of(board);
        if self.persisted.as_ref() == Some(&stamp) {
            return;
        }

        match self.repo.save(board) {
            Ok(()) => {
                info!(
                    "event=board_save module=state status=ok board_id={} updated_at_ms={}",
                    stamp.0, stamp.1
                );
                self.persisted = Some(stamp);
            }
            Err(err) => error!(
                "event=board_save module=state status=error board_id={} error={err}",
                stamp.0
            ),
        }
    }
}

fn stamp_of(board: &Board) -> BoardStamp {
    (board.id.clone(), board.updated_at_ms)
}

/// Change detection without cloning whole boards.
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    status: BoardStatus,
    board: Option<BoardStamp>,
    selected_card_id: Option<Id>,
    error_message: Option<String>,
}

impl Snapshot {
    fn of(state: &BoardState) -> Self {
        Self {
            status: state.status,
            board: state.board.as_ref().map(stamp_of),
            selected_card_id: state.selected_card_id.clone(),
            error_message: state.error_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardStore, LOAD_UNAVAILABLE_MESSAGE};
    use crate::repo::{BoardRepository, KvBoardRepository};
    use crate::state::{BoardAction, BoardStatus};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn boot_with_unavailable_medium_enters_error() {
        let store = BoardStore::boot(KvBoardRepository::new(MemoryStore::unavailable()));
        assert_eq!(store.state().status, BoardStatus::Error);
        assert_eq!(
            store.state().error_message.as_deref(),
            Some(LOAD_UNAVAILABLE_MESSAGE)
        );
    }

    #[test]
    fn listeners_fire_on_change_only() {
        let mut store = BoardStore::boot(KvBoardRepository::new(MemoryStore::new()));
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(BoardAction::ListAdd { title: None });
        store.dispatch(BoardAction::ListDelete {
            list_id: "missing".into(),
        });
        assert_eq!(*calls.borrow(), 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(BoardAction::ListAdd { title: None });
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn save_failure_keeps_state() {
        let medium = MemoryStore::new();
        let mut store = BoardStore::boot(KvBoardRepository::new(&medium));
        medium.set_fail_writes(true);

        let state = store.dispatch(BoardAction::BoardTitleSet {
            title: "Renamed".into(),
        });
        assert_eq!(state.status, BoardStatus::Ready);
        assert_eq!(state.board.as_ref().unwrap().title, "Renamed");

        medium.set_fail_writes(false);
        let persisted = store.repository().load().unwrap().unwrap();
        assert_eq!(persisted.title, "Demo Board");
    }
}
