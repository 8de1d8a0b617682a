//! Pure board transitions.
//!
//! # Responsibility
//! - Compute a new `Board` from an old `Board` plus parameters.
//! - Keep sibling `order` ranks dense and back-references exact.
//!
//! # Invariants
//! - Every operation takes the board by value and returns the replacement;
//!   callers that need the previous snapshot keep a clone.
//! - Stale ids, permutation mismatches and out-of-range source indices are
//!   no-ops: the input board comes back untouched, `updated_at_ms` included.
//! - Every operation that changes content refreshes `updated_at_ms` to a
//!   value strictly greater than before.

pub mod cards;
pub mod comments;
pub mod lists;

pub use cards::{
    add_card, delete_card, move_card_between_lists, move_card_within_list, rename_card,
    reorder_cards,
};
pub use comments::{add_comment, delete_comment};
pub use lists::{add_list, delete_list, rename_list, reorder_lists};

use crate::model::{Board, Card, List};
use crate::shared::{now_ms, Id, TimestampMs};
use std::collections::HashMap;

/// Default title for lists added without one.
pub const DEFAULT_LIST_TITLE: &str = "New List";
/// Default title for cards added without one.
pub const DEFAULT_CARD_TITLE: &str = "New Card";

/// Replaces the board title.
pub fn set_board_title(mut board: Board, title: impl Into<String>) -> Board {
    board.title = title.into();
    touch(&mut board);
    board
}

/// Brings a board that came from outside the operations into canonical
/// shape.
///
/// Lists and cards are stable-sorted by `order` and renumbered from zero,
/// back-references are taken from the parent, and board timestamps are
/// pulled back to at most `now` so later [`touch`] calls keep advancing.
pub fn canonicalize(mut board: Board, now: TimestampMs) -> Board {
    board.lists.sort_by_key(|list| list.order);
    renumber_lists(&mut board.lists);
    for list in &mut board.lists {
        list.board_id.clone_from(&board.id);
        list.cards.sort_by_key(|card| card.order);
        renumber_cards(&mut list.cards);
        for card in &mut list.cards {
            card.list_id.clone_from(&list.id);
        }
    }
    board.created_at_ms = board.created_at_ms.min(now);
    board.updated_at_ms = board.updated_at_ms.clamp(board.created_at_ms, now);
    board
}

/// Refreshes `updated_at_ms`.
///
/// Wall-clock time can repeat within one millisecond or step backwards, so
/// the stamp is bumped to at least `previous + 1`.
pub(crate) fn touch(board: &mut Board) {
    let floor = board
        .updated_at_ms
        .max(board.created_at_ms)
        .saturating_add(1);
    board.updated_at_ms = now_ms().max(floor);
}

pub(crate) fn renumber_lists(lists: &mut [List]) {
    for (index, list) in lists.iter_mut().enumerate() {
        list.order = index as i64;
    }
}

pub(crate) fn renumber_cards(cards: &mut [Card]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.order = index as i64;
    }
}

/// Splice move: removes `from` then inserts at `to` in the shortened
/// sequence, clamping `to` to the end.
///
/// Returns `false` (leaving `items` untouched) when `from` is out of range
/// or equals `to`.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, moved);
    true
}

/// Resolves `ordered_ids` into positions within `items`.
///
/// Unknown ids are skipped. Returns `None` unless the remaining ids name
/// every item exactly once.
pub(crate) fn resolve_permutation<T>(
    items: &[T],
    ordered_ids: &[Id],
    id_of: impl Fn(&T) -> &str,
) -> Option<Vec<usize>> {
    let positions: HashMap<&str, usize> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (id_of(item), index))
        .collect();

    let mut seen = vec![false; items.len()];
    let mut permutation = Vec::with_capacity(items.len());
    for id in ordered_ids {
        let Some(&index) = positions.get(id.as_str()) else {
            continue;
        };
        if std::mem::replace(&mut seen[index], true) {
            return None;
        }
        permutation.push(index);
    }

    (permutation.len() == items.len()).then_some(permutation)
}

/// Rebuilds `items` in `permutation` order. `permutation` must come from
/// [`resolve_permutation`] over the same items.
pub(crate) fn apply_permutation<T>(items: Vec<T>, permutation: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    permutation
        .iter()
        .filter_map(|&index| slots[index].take())
        .collect()
}
