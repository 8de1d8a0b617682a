//! Card-level transitions, including drag-and-drop moves.

use super::{apply_permutation, move_item, renumber_cards, resolve_permutation, touch};
use crate::model::{Board, Card};
use crate::shared::Id;
use log::debug;

/// Appends a new card at the end of list `list_id`. No-op when the list
/// does not exist.
pub fn add_card(mut board: Board, list_id: &str, title: impl Into<String>) -> Board {
    let Some(index) = board.list_index(list_id) else {
        debug!("event=card_add module=ops status=noop reason=list_not_found list_id={list_id}");
        return board;
    };
    let list = &mut board.lists[index];
    let card = Card::new(list.id.clone(), title, list.cards.len() as i64);
    list.cards.push(card);
    touch(&mut board);
    board
}

/// Renames card `card_id` wherever it lives.
pub fn rename_card(mut board: Board, card_id: &str, title: impl Into<String>) -> Board {
    let Some((list_index, card_index)) = board.card_position(card_id) else {
        debug!("event=card_rename module=ops status=noop reason=card_not_found card_id={card_id}");
        return board;
    };
    board.lists[list_index].cards[card_index].title = title.into();
    touch(&mut board);
    board
}

/// Deletes card `card_id` and its comments, renumbering its former siblings.
pub fn delete_card(mut board: Board, card_id: &str) -> Board {
    let Some((list_index, card_index)) = board.card_position(card_id) else {
        debug!("event=card_delete module=ops status=noop reason=card_not_found card_id={card_id}");
        return board;
    };
    let cards = &mut board.lists[list_index].cards;
    cards.remove(card_index);
    renumber_cards(cards);
    touch(&mut board);
    board
}

/// Lays the cards of `list_id` out in `ordered_card_ids` order.
///
/// Unknown ids are ignored; unless the remaining ids cover every card of
/// the list exactly once, the board is returned unchanged.
pub fn reorder_cards(mut board: Board, list_id: &str, ordered_card_ids: &[Id]) -> Board {
    let Some(list_index) = board.list_index(list_id) else {
        debug!("event=cards_reorder module=ops status=noop reason=list_not_found list_id={list_id}");
        return board;
    };
    let list = &mut board.lists[list_index];
    let Some(permutation) =
        resolve_permutation(&list.cards, ordered_card_ids, |card| card.id.as_str())
    else {
        debug!(
            "event=cards_reorder module=ops status=noop reason=permutation_mismatch list_id={list_id} expected={} given={}",
            list.cards.len(),
            ordered_card_ids.len()
        );
        return board;
    };
    let cards = std::mem::take(&mut list.cards);
    list.cards = apply_permutation(cards, &permutation);
    renumber_cards(&mut list.cards);
    touch(&mut board);
    board
}

/// Moves the card at `from_index` to `to_index` inside one list.
///
/// `to_index` is read against the list with the card already removed and
/// clamped to its end. No-op when the indices are equal, `from_index` is out
/// of range, or the list does not exist.
pub fn move_card_within_list(
    mut board: Board,
    list_id: &str,
    from_index: usize,
    to_index: usize,
) -> Board {
    let Some(list_index) = board.list_index(list_id) else {
        debug!("event=card_move_within module=ops status=noop reason=list_not_found list_id={list_id}");
        return board;
    };
    let cards = &mut board.lists[list_index].cards;
    if !move_item(cards, from_index, to_index) {
        debug!(
            "event=card_move_within module=ops status=noop reason=index_rejected list_id={list_id} from={from_index} to={to_index}"
        );
        return board;
    }
    renumber_cards(cards);
    touch(&mut board);
    board
}

/// Moves card `card_id` from `from_list_id` into `to_list_id` at `to_index`
/// (clamped to `[0, destination length]`).
///
/// Same-list moves are a no-op here; they belong to
/// [`move_card_within_list`]. Also a no-op when the card is not in the
/// declared source list or the destination list does not exist. Comments
/// and every other card field travel with the card.
pub fn move_card_between_lists(
    mut board: Board,
    card_id: &str,
    from_list_id: &str,
    to_list_id: &str,
    to_index: usize,
) -> Board {
    if from_list_id == to_list_id {
        debug!("event=card_move_between module=ops status=noop reason=same_list card_id={card_id}");
        return board;
    }
    let (Some(from), Some(to)) = (board.list_index(from_list_id), board.list_index(to_list_id))
    else {
        debug!(
            "event=card_move_between module=ops status=noop reason=list_not_found from={from_list_id} to={to_list_id}"
        );
        return board;
    };
    let Some(card_index) = board.lists[from].card_index(card_id) else {
        debug!(
            "event=card_move_between module=ops status=noop reason=card_not_in_source card_id={card_id} from={from_list_id}"
        );
        return board;
    };

    let source = &mut board.lists[from].cards;
    let mut card = source.remove(card_index);
    renumber_cards(source);

    let destination = &mut board.lists[to];
    card.list_id = destination.id.clone();
    let at = to_index.min(destination.cards.len());
    destination.cards.insert(at, card);
    renumber_cards(&mut destination.cards);

    touch(&mut board);
    board
}
