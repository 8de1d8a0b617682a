//! Drag-and-drop gesture resolution.
//!
//! # Responsibility
//! - Decode prefixed drag handle ids (`list:`, `card:`, `list-drop:`).
//! - Turn one completed gesture into at most one `BoardAction`.
//!
//! # Invariants
//! - Indices are computed against the `order`-sorted view, the same view
//!   the user dragged over.
//! - Same-list card drags resolve to `CardMoveWithin`; cross-list drags to
//!   `CardMoveBetween`. The two paths are never merged.

use crate::model::{Board, Card};
use crate::selectors::{find_card, find_list, find_list_containing_card, sorted_cards, sorted_lists};
use crate::shared::Id;
use crate::state::BoardAction;

const LIST_PREFIX: &str = "list:";
const CARD_PREFIX: &str = "card:";
const LIST_DROP_PREFIX: &str = "list-drop:";

/// Decoded drag handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    /// A list header being dragged or hovered.
    List(Id),
    Card(Id),
    /// The empty drop zone at the bottom of a list.
    ListDrop(Id),
}

impl DragTarget {
    /// Encodes this target as a drag handle id.
    pub fn handle(&self) -> String {
        match self {
            Self::List(id) => format!("{LIST_PREFIX}{id}"),
            Self::Card(id) => format!("{CARD_PREFIX}{id}"),
            Self::ListDrop(id) => format!("{LIST_DROP_PREFIX}{id}"),
        }
    }
}

/// Decodes a drag handle id; `None` for foreign handles.
pub fn parse_drag_id(raw: &str) -> Option<DragTarget> {
    if let Some(id) = raw.strip_prefix(LIST_DROP_PREFIX) {
        return Some(DragTarget::ListDrop(id.to_string()));
    }
    if let Some(id) = raw.strip_prefix(LIST_PREFIX) {
        return Some(DragTarget::List(id.to_string()));
    }
    raw.strip_prefix(CARD_PREFIX)
        .map(|id| DragTarget::Card(id.to_string()))
}

/// Card shown in the drag overlay while `active` is being dragged.
pub fn drag_preview<'a>(board: &'a Board, active: &str) -> Option<&'a Card> {
    match parse_drag_id(active)? {
        DragTarget::Card(card_id) => find_card(board, &card_id),
        DragTarget::List(_) | DragTarget::ListDrop(_) => None,
    }
}

/// Resolves a finished drag of `active` released over `over`.
pub fn resolve_drag_end(board: &Board, active: &str, over: Option<&str>) -> Option<BoardAction> {
    let active = parse_drag_id(active)?;
    let over = parse_drag_id(over?)?;

    match (active, over) {
        (DragTarget::List(active_id), DragTarget::List(over_id)) => {
            resolve_list_drag(board, &active_id, &over_id)
        }
        (DragTarget::Card(card_id), over) => resolve_card_drag(board, &card_id, over),
        _ => None,
    }
}

fn resolve_list_drag(board: &Board, active_id: &str, over_id: &str) -> Option<BoardAction> {
    let mut ordered: Vec<Id> = sorted_lists(board)
        .into_iter()
        .map(|list| list.id.clone())
        .collect();
    let from = ordered.iter().position(|id| id == active_id)?;
    let to = ordered.iter().position(|id| id == over_id)?;
    if from == to {
        return None;
    }
    let moved = ordered.remove(from);
    ordered.insert(to, moved);
    Some(BoardAction::ListsReorder {
        ordered_list_ids: ordered,
    })
}

fn resolve_card_drag(board: &Board, card_id: &str, over: DragTarget) -> Option<BoardAction> {
    let from_list = find_list_containing_card(board, card_id)?;

    let (to_list, to_index) = match over {
        DragTarget::List(list_id) | DragTarget::ListDrop(list_id) => {
            let list = find_list(board, &list_id)?;
            (list, list.cards.len())
        }
        DragTarget::Card(over_card_id) => {
            let list = find_list_containing_card(board, &over_card_id)?;
            let sorted = sorted_cards(list);
            let index = sorted
                .iter()
                .position(|card| card.id == over_card_id)
                .unwrap_or(sorted.len());
            (list, index)
        }
    };

    if from_list.id == to_list.id {
        let from_index = sorted_cards(from_list)
            .iter()
            .position(|card| card.id == card_id)?;
        if from_index == to_index {
            return None;
        }
        return Some(BoardAction::CardMoveWithin {
            list_id: from_list.id.clone(),
            from_index,
            to_index,
        });
    }

    Some(BoardAction::CardMoveBetween {
        card_id: card_id.to_string(),
        from_list_id: from_list.id.clone(),
        to_list_id: to_list.id.clone(),
        to_index,
    })
}

#[cfg(test)]
mod tests {
    use super::{drag_preview, parse_drag_id, resolve_drag_end, DragTarget};
    use crate::model::demo_board;
    use crate::state::BoardAction;

    #[test]
    fn parse_drag_id_recognizes_all_prefixes() {
        assert_eq!(parse_drag_id("list:a"), Some(DragTarget::List("a".into())));
        assert_eq!(parse_drag_id("card:b"), Some(DragTarget::Card("b".into())));
        assert_eq!(
            parse_drag_id("list-drop:c"),
            Some(DragTarget::ListDrop("c".into()))
        );
        assert_eq!(parse_drag_id("column:d"), None);

        let handle = DragTarget::ListDrop("x".into()).handle();
        assert_eq!(parse_drag_id(&handle), Some(DragTarget::ListDrop("x".into())));
    }

    #[test]
    fn list_over_list_reorders() {
        let board = demo_board();
        let ids: Vec<_> = board.lists.iter().map(|list| list.id.clone()).collect();
        let action = resolve_drag_end(
            &board,
            &format!("list:{}", ids[0]),
            Some(&format!("list:{}", ids[2])),
        );

        assert_eq!(
            action,
            Some(BoardAction::ListsReorder {
                ordered_list_ids: vec![ids[1].clone(), ids[2].clone(), ids[0].clone()],
            })
        );
    }

    #[test]
    fn card_over_card_in_same_list_moves_within() {
        let board = demo_board();
        let list = &board.lists[0];
        let action = resolve_drag_end(
            &board,
            &format!("card:{}", list.cards[0].id),
            Some(&format!("card:{}", list.cards[2].id)),
        );

        assert_eq!(
            action,
            Some(BoardAction::CardMoveWithin {
                list_id: list.id.clone(),
                from_index: 0,
                to_index: 2,
            })
        );
    }

    #[test]
    fn card_over_other_list_drop_zone_appends() {
        let board = demo_board();
        let card = &board.lists[0].cards[1];
        let target = &board.lists[2];
        let action = resolve_drag_end(
            &board,
            &format!("card:{}", card.id),
            Some(&format!("list-drop:{}", target.id)),
        );

        assert_eq!(
            action,
            Some(BoardAction::CardMoveBetween {
                card_id: card.id.clone(),
                from_list_id: board.lists[0].id.clone(),
                to_list_id: target.id.clone(),
                to_index: target.cards.len(),
            })
        );
    }

    #[test]
    fn drops_onto_self_or_nothing_resolve_to_none() {
        let board = demo_board();
        let card = format!("card:{}", board.lists[0].cards[0].id);

        assert_eq!(resolve_drag_end(&board, &card, Some(&card)), None);
        assert_eq!(resolve_drag_end(&board, &card, None), None);
        assert_eq!(resolve_drag_end(&board, "card:ghost", Some(&card)), None);
    }

    #[test]
    fn drag_preview_returns_dragged_card() {
        let board = demo_board();
        let card = &board.lists[1].cards[0];
        let preview = drag_preview(&board, &format!("card:{}", card.id)).unwrap();
        assert_eq!(preview.id, card.id);
        assert!(drag_preview(&board, &format!("list:{}", board.lists[0].id)).is_none());
    }
}
