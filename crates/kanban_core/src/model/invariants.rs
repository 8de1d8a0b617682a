//! Structural invariant checks for the board aggregate.

use super::board::Board;
use crate::shared::Id;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First structural invariant found broken on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A list's `board_id` does not match the containing board.
    ListBoardMismatch { list_id: Id },
    /// A card's `list_id` does not match the containing list.
    CardListMismatch { card_id: Id, list_id: Id },
    /// `lists[index].order != index`.
    ListOrderGap { list_id: Id, index: usize, order: i64 },
    /// `cards[index].order != index` inside one list.
    CardOrderGap { card_id: Id, index: usize, order: i64 },
    DuplicateListId(Id),
    DuplicateCardId(Id),
    /// Comment ids must be unique within one card.
    DuplicateCommentId { card_id: Id, comment_id: Id },
    /// `updated_at_ms < created_at_ms`.
    TimestampsReversed,
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListBoardMismatch { list_id } => {
                write!(f, "list {list_id} references a different board")
            }
            Self::CardListMismatch { card_id, list_id } => {
                write!(f, "card {card_id} is stored in list {list_id} but references another list")
            }
            Self::ListOrderGap { list_id, index, order } => {
                write!(f, "list {list_id} at index {index} has order {order}")
            }
            Self::CardOrderGap { card_id, index, order } => {
                write!(f, "card {card_id} at index {index} has order {order}")
            }
            Self::DuplicateListId(id) => write!(f, "duplicate list id: {id}"),
            Self::DuplicateCardId(id) => write!(f, "duplicate card id: {id}"),
            Self::DuplicateCommentId { card_id, comment_id } => {
                write!(f, "duplicate comment id {comment_id} on card {card_id}")
            }
            Self::TimestampsReversed => write!(f, "updatedAtMs is earlier than createdAtMs"),
        }
    }
}

impl Error for InvariantViolation {}

impl Board {
    /// Verifies back-references, dense ordering, id uniqueness and timestamp
    /// ordering. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.updated_at_ms < self.created_at_ms {
            return Err(InvariantViolation::TimestampsReversed);
        }

        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for (list_index, list) in self.lists.iter().enumerate() {
            if list.board_id != self.id {
                return Err(InvariantViolation::ListBoardMismatch {
                    list_id: list.id.clone(),
                });
            }
            if list.order != list_index as i64 {
                return Err(InvariantViolation::ListOrderGap {
                    list_id: list.id.clone(),
                    index: list_index,
                    order: list.order,
                });
            }
            if !list_ids.insert(list.id.as_str()) {
                return Err(InvariantViolation::DuplicateListId(list.id.clone()));
            }

            for (card_index, card) in list.cards.iter().enumerate() {
                if card.list_id != list.id {
                    return Err(InvariantViolation::CardListMismatch {
                        card_id: card.id.clone(),
                        list_id: list.id.clone(),
                    });
                }
                if card.order != card_index as i64 {
                    return Err(InvariantViolation::CardOrderGap {
                        card_id: card.id.clone(),
                        index: card_index,
                        order: card.order,
                    });
                }
                if !card_ids.insert(card.id.as_str()) {
                    return Err(InvariantViolation::DuplicateCardId(card.id.clone()));
                }

                let mut comment_ids = HashSet::new();
                for comment in &card.comments {
                    if !comment_ids.insert(comment.id.as_str()) {
                        return Err(InvariantViolation::DuplicateCommentId {
                            card_id: card.id.clone(),
                            comment_id: comment.id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InvariantViolation;
    use crate::model::{Board, List};

    #[test]
    fn fresh_board_is_valid() {
        Board::new("Empty").check_invariants().unwrap();
    }

    #[test]
    fn detects_sparse_card_order() {
        let mut board = Board::new("B");
        let mut list = List::new(board.id.clone(), "L", 0).with_card("a");
        list.cards[0].order = 4;
        board.lists.push(list);

        let err = board.check_invariants().unwrap_err();
        assert!(matches!(err, InvariantViolation::CardOrderGap { order: 4, .. }));
    }

    #[test]
    fn detects_stale_list_back_reference() {
        let mut board = Board::new("B");
        let mut list = List::new(board.id.clone(), "L", 0).with_card("a");
        list.cards[0].list_id = "elsewhere".to_string();
        board.lists.push(list);

        assert!(matches!(
            board.check_invariants().unwrap_err(),
            InvariantViolation::CardListMismatch { .. }
        ));
    }
}
