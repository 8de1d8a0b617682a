//! Comment transitions. Comments are kept in insertion order and carry no
//! `order` rank, so nothing here renumbers.

use super::touch;
use crate::model::{Board, Comment};
use log::debug;

/// Appends a new comment to card `card_id`. `text` and `author` are stored
/// verbatim.
pub fn add_comment(
    mut board: Board,
    card_id: &str,
    text: impl Into<String>,
    author: impl Into<String>,
) -> Board {
    let Some((list_index, card_index)) = board.card_position(card_id) else {
        debug!("event=comment_add module=ops status=noop reason=card_not_found card_id={card_id}");
        return board;
    };
    board.lists[list_index].cards[card_index]
        .comments
        .push(Comment::new(text, author));
    touch(&mut board);
    board
}

/// Removes comment `comment_id` from card `card_id`.
pub fn delete_comment(mut board: Board, card_id: &str, comment_id: &str) -> Board {
    let Some((list_index, card_index)) = board.card_position(card_id) else {
        debug!("event=comment_delete module=ops status=noop reason=card_not_found card_id={card_id}");
        return board;
    };
    let comments = &mut board.lists[list_index].cards[card_index].comments;
    let Some(index) = comments.iter().position(|comment| comment.id == comment_id) else {
        debug!(
            "event=comment_delete module=ops status=noop reason=comment_not_found card_id={card_id} comment_id={comment_id}"
        );
        return board;
    };
    comments.remove(index);
    touch(&mut board);
    board
}

#[cfg(test)]
mod tests {
    use super::{add_comment, delete_comment};
    use crate::model::{Board, List};

    fn fixture() -> (Board, String) {
        let mut board = Board::new("B");
        board.lists = vec![List::new(board.id.clone(), "L", 0).with_card("task")];
        let card_id = board.lists[0].cards[0].id.clone();
        (board, card_id)
    }

    #[test]
    fn add_comment_appends_in_insertion_order() {
        let (board, card_id) = fixture();
        let board = add_comment(board, &card_id, "first", "Ann");
        let board = add_comment(board, &card_id, "second", "Bob");

        let comments = &board.lists[0].cards[0].comments;
        assert_eq!(comments[0].text, "first");
        assert_eq!(comments[1].author, "Bob");
        assert_eq!(board.lists[0].cards[0].order, 0);
    }

    #[test]
    fn delete_comment_removes_only_target() {
        let (board, card_id) = fixture();
        let board = add_comment(board, &card_id, "keep", "Ann");
        let board = add_comment(board, &card_id, "drop", "Ann");
        let drop_id = board.lists[0].cards[0].comments[1].id.clone();

        let board = delete_comment(board, &card_id, &drop_id);
        let comments = &board.lists[0].cards[0].comments;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "keep");
    }

    #[test]
    fn comment_ops_on_missing_targets_are_noops() {
        let (board, card_id) = fixture();
        let before = board.clone();

        let board = add_comment(board, "missing", "text", "Ann");
        let board = delete_comment(board, &card_id, "missing");
        assert_eq!(board, before);
    }
}
