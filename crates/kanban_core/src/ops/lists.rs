//! List-level transitions.

use super::{apply_permutation, renumber_lists, resolve_permutation, touch};
use crate::model::{Board, List};
use crate::shared::Id;
use log::debug;

/// Appends a new empty list at the end of the board.
pub fn add_list(mut board: Board, title: impl Into<String>) -> Board {
    let list = List::new(board.id.clone(), title, board.lists.len() as i64);
    board.lists.push(list);
    touch(&mut board);
    board
}

/// Renames list `list_id`. No-op when the list does not exist.
pub fn rename_list(mut board: Board, list_id: &str, title: impl Into<String>) -> Board {
    let Some(index) = board.list_index(list_id) else {
        debug!("event=list_rename module=ops status=noop reason=list_not_found list_id={list_id}");
        return board;
    };
    board.lists[index].title = title.into();
    touch(&mut board);
    board
}

/// Deletes list `list_id` together with its cards and their comments.
pub fn delete_list(mut board: Board, list_id: &str) -> Board {
    let Some(index) = board.list_index(list_id) else {
        debug!("event=list_delete module=ops status=noop reason=list_not_found list_id={list_id}");
        return board;
    };
    let removed = board.lists.remove(index);
    renumber_lists(&mut board.lists);
    touch(&mut board);
    debug!(
        "event=list_delete module=ops status=ok list_id={list_id} cards_removed={}",
        removed.cards.len()
    );
    board
}

/// Lays lists out in `ordered_list_ids` order.
///
/// Unknown ids are ignored; unless the remaining ids cover every list
/// exactly once, the board is returned unchanged.
pub fn reorder_lists(mut board: Board, ordered_list_ids: &[Id]) -> Board {
    let Some(permutation) =
        resolve_permutation(&board.lists, ordered_list_ids, |list| list.id.as_str())
    else {
        debug!(
            "event=lists_reorder module=ops status=noop reason=permutation_mismatch expected={} given={}",
            board.lists.len(),
            ordered_list_ids.len()
        );
        return board;
    };
    let lists = std::mem::take(&mut board.lists);
    board.lists = apply_permutation(lists, &permutation);
    renumber_lists(&mut board.lists);
    touch(&mut board);
    board
}
