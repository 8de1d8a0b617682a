//! Read-only derived views consumed by rendering.
//!
//! Sorting is stable: entities with equal `order` keep their relative array
//! position, which drag index math relies on.

use crate::model::{Board, Card, List};
use crate::state::BoardState;

/// Lists sorted by `order` ascending (stable).
pub fn sorted_lists(board: &Board) -> Vec<&List> {
    let mut lists: Vec<&List> = board.lists.iter().collect();
    lists.sort_by_key(|list| list.order);
    lists
}

/// Cards of `list` sorted by `order` ascending (stable).
pub fn sorted_cards(list: &List) -> Vec<&Card> {
    let mut cards: Vec<&Card> = list.cards.iter().collect();
    cards.sort_by_key(|card| card.order);
    cards
}

pub fn find_list<'a>(board: &'a Board, list_id: &str) -> Option<&'a List> {
    board.lists.iter().find(|list| list.id == list_id)
}

/// Finds a card by id across all lists.
pub fn find_card<'a>(board: &'a Board, card_id: &str) -> Option<&'a Card> {
    board
        .lists
        .iter()
        .find_map(|list| list.cards.iter().find(|card| card.id == card_id))
}

/// Finds the list currently holding `card_id`.
pub fn find_list_containing_card<'a>(board: &'a Board, card_id: &str) -> Option<&'a List> {
    board
        .lists
        .iter()
        .find(|list| list.cards.iter().any(|card| card.id == card_id))
}

/// The card open in the comments view, if the board is ready and the card
/// still exists.
pub fn selected_card(state: &BoardState) -> Option<&Card> {
    let board = state.ready_board()?;
    find_card(board, state.selected_card_id.as_deref()?)
}
