//! Pure `(state, action) -> state` transition function.

use super::{BoardAction, BoardState, BoardStatus};
use crate::model::Board;
use crate::ops::{self, DEFAULT_CARD_TITLE, DEFAULT_LIST_TITLE};
use crate::shared::now_ms;
use log::debug;

/// Applies one action to the session state.
///
/// Init actions are accepted in any status; selection actions too. A loaded
/// board is canonicalized before it becomes current. Content actions are
/// ignored unless the state is `Ready` with a board, and each delegates to
/// exactly one domain operation.
pub fn reduce(mut state: BoardState, action: BoardAction) -> BoardState {
    match action {
        BoardAction::InitSuccess(board) => BoardState {
            status: BoardStatus::Ready,
            board: Some(ops::canonicalize(board, now_ms())),
            selected_card_id: None,
            error_message: None,
        },
        BoardAction::InitError(message) => BoardState {
            status: BoardStatus::Error,
            board: None,
            selected_card_id: None,
            error_message: Some(message),
        },
        BoardAction::CardSelect { card_id } => {
            state.selected_card_id = Some(card_id);
            state
        }
        BoardAction::CardDeselect => {
            state.selected_card_id = None;
            state
        }
        edit => apply_edit(state, edit),
    }
}

fn apply_edit(mut state: BoardState, action: BoardAction) -> BoardState {
    let board = match (state.status, state.board.take()) {
        (BoardStatus::Ready, Some(board)) => board,
        (status, board) => {
            debug!(
                "event=action_ignored module=state status=noop action={} board_status={status:?}",
                action.name()
            );
            state.board = board;
            return state;
        }
    };

    let next = match action {
        BoardAction::BoardTitleSet { title } => ops::set_board_title(board, title),
        BoardAction::ListAdd { title } => ops::add_list(
            board,
            title.unwrap_or_else(|| DEFAULT_LIST_TITLE.to_string()),
        ),
        BoardAction::ListTitleSet { list_id, title } => ops::rename_list(board, &list_id, title),
        BoardAction::ListDelete { list_id } => {
            let next = ops::delete_list(board, &list_id);
            clear_selection_if_gone(&mut state.selected_card_id, &next);
            next
        }
        BoardAction::ListsReorder { ordered_list_ids } => {
            ops::reorder_lists(board, &ordered_list_ids)
        }
        BoardAction::CardAdd { list_id, title } => ops::add_card(
            board,
            &list_id,
            title.unwrap_or_else(|| DEFAULT_CARD_TITLE.to_string()),
        ),
        BoardAction::CardTitleSet { card_id, title } => ops::rename_card(board, &card_id, title),
        BoardAction::CardDelete { card_id } => {
            if state.selected_card_id.as_deref() == Some(card_id.as_str()) {
                state.selected_card_id = None;
            }
            ops::delete_card(board, &card_id)
        }
        BoardAction::CardsReorder {
            list_id,
            ordered_card_ids,
        } => ops::reorder_cards(board, &list_id, &ordered_card_ids),
        BoardAction::CardMoveWithin {
            list_id,
            from_index,
            to_index,
        } => ops::move_card_within_list(board, &list_id, from_index, to_index),
        BoardAction::CardMoveBetween {
            card_id,
            from_list_id,
            to_list_id,
            to_index,
        } => ops::move_card_between_lists(board, &card_id, &from_list_id, &to_list_id, to_index),
        BoardAction::CommentAdd {
            card_id,
            text,
            author,
        } => ops::add_comment(board, &card_id, text, author),
        BoardAction::CommentDelete {
            card_id,
            comment_id,
        } => ops::delete_comment(board, &card_id, &comment_id),
        BoardAction::InitSuccess(_)
        | BoardAction::InitError(_)
        | BoardAction::CardSelect { .. }
        | BoardAction::CardDeselect => board,
    };

    state.board = Some(next);
    state
}

fn clear_selection_if_gone(selected: &mut Option<String>, board: &Board) {
    if selected.as_deref().is_some_and(|id| !board.contains_card(id)) {
        *selected = None;
    }
}
