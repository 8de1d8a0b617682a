use kanban_core::ops::{
    add_card, add_comment, add_list, delete_card, delete_list, move_card_between_lists,
    move_card_within_list, rename_card, reorder_cards, reorder_lists,
};
use kanban_core::selectors::{find_card, sorted_cards};
use kanban_core::{demo_board, Board};

fn card_ids(board: &Board, list_index: usize) -> Vec<(String, i64)> {
    sorted_cards(&board.lists[list_index])
        .into_iter()
        .map(|card| (card.id.clone(), card.order))
        .collect()
}

#[test]
fn reorder_cards_with_mismatched_ids_returns_equal_board() {
    let board = demo_board();
    let list_id = board.lists[0].id.clone();
    let before = board.clone();

    let mut ids: Vec<String> = board.lists[0].cards.iter().map(|c| c.id.clone()).collect();
    ids.pop();
    ids.push("not-a-card".to_string());

    let after = reorder_cards(board, &list_id, &ids);
    assert_eq!(after, before);
}

#[test]
fn reorder_cards_with_duplicated_id_is_rejected() {
    let board = demo_board();
    let list_id = board.lists[1].id.clone();
    let before = board.clone();
    let first = board.lists[1].cards[0].id.clone();

    let after = reorder_cards(board, &list_id, &[first.clone(), first]);
    assert_eq!(after, before);
}

#[test]
fn reorder_lists_ignores_unknown_ids_when_rest_is_complete() {
    let board = demo_board();
    let mut ids: Vec<String> = board.lists.iter().rev().map(|l| l.id.clone()).collect();
    ids.insert(1, "ghost".to_string());

    let after = reorder_lists(board, &ids);
    let titles: Vec<_> = after.lists.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Done", "In Progress", "To Do"]);
    after.check_invariants().unwrap();
}

#[test]
fn deleting_list_cascades_to_cards_and_comments() {
    let board = demo_board();
    let doomed = board.lists[1].clone();
    let before_cards = board.card_count();

    let after = delete_list(board, &doomed.id);

    assert_eq!(after.card_count(), before_cards - doomed.cards.len());
    for card in &doomed.cards {
        assert!(find_card(&after, &card.id).is_none());
    }
    let comment_ids: Vec<_> = after
        .lists
        .iter()
        .flat_map(|l| &l.cards)
        .flat_map(|c| &c.comments)
        .map(|m| m.id.clone())
        .collect();
    for comment in doomed.cards.iter().flat_map(|c| &c.comments) {
        assert!(!comment_ids.contains(&comment.id));
    }
    after.check_invariants().unwrap();
}

#[test]
fn deleting_card_discards_its_comments() {
    let board = demo_board();
    let card = board.lists[0].cards[0].clone();
    assert!(!card.comments.is_empty());

    let after = delete_card(board, &card.id);
    assert!(find_card(&after, &card.id).is_none());
    assert!(after
        .lists
        .iter()
        .flat_map(|l| &l.cards)
        .flat_map(|c| &c.comments)
        .all(|m| m.id != card.comments[0].id));
}

#[test]
fn moving_card_away_and_back_restores_both_lists() {
    let board = demo_board();
    let (from, to) = (board.lists[1].id.clone(), board.lists[2].id.clone());
    let card = board.lists[1].cards[0].clone();
    let source_before = card_ids(&board, 1);
    let target_before = card_ids(&board, 2);

    let moved = move_card_between_lists(board, &card.id, &from, &to, 1);
    assert_eq!(moved.lists[2].cards[1].id, card.id);
    moved.check_invariants().unwrap();

    let restored = move_card_between_lists(moved, &card.id, &to, &from, 0);
    assert_eq!(card_ids(&restored, 1), source_before);
    assert_eq!(card_ids(&restored, 2), target_before);

    let back = find_card(&restored, &card.id).unwrap();
    assert_eq!(back.comments, card.comments);
    assert_eq!(back.list_id, from);
}

#[test]
fn every_mutation_advances_updated_at() {
    let board = demo_board();
    let list_id = board.lists[0].id.clone();
    let card_id = board.lists[0].cards[0].id.clone();
    let mut last = board.updated_at_ms;

    let steps: Vec<Box<dyn Fn(Board) -> Board>> = vec![
        Box::new(|b: Board| add_list(b, "Later")),
        Box::new(|b: Board| add_card(b, &list_id, "Another")),
        Box::new(|b: Board| rename_card(b, &card_id, "Renamed")),
        Box::new(|b: Board| add_comment(b, &card_id, "note", "Ann")),
        Box::new(|b: Board| move_card_within_list(b, &list_id, 0, 3)),
    ];

    let mut board = board;
    for step in steps {
        board = step(board);
        assert!(board.updated_at_ms > last);
        assert!(board.updated_at_ms >= board.created_at_ms);
        last = board.updated_at_ms;
    }
    board.check_invariants().unwrap();
}

#[test]
fn noops_keep_updated_at() {
    let board = demo_board();
    let stamp = board.updated_at_ms;
    let list_id = board.lists[0].id.clone();

    let board = rename_card(board, "ghost", "x");
    let board = move_card_within_list(board, &list_id, 9, 0);
    let board = delete_list(board, "ghost");
    assert_eq!(board.updated_at_ms, stamp);
}
