//! Seeded demo board shown when nothing usable is stored.

use super::board::{Board, Comment, List};
use crate::shared::{now_ms, TimestampMs};

/// Title of the seeded demo board.
pub const DEMO_BOARD_TITLE: &str = "Demo Board";

const HOUR_MS: TimestampMs = 3_600_000;
const DAY_MS: TimestampMs = 86_400_000;

/// Builds the demo board: `To Do`, `In Progress` and `Done` with sample
/// cards and back-dated comments.
pub fn demo_board() -> Board {
    let mut board = Board::new(DEMO_BOARD_TITLE);
    let now = now_ms();

    let mut todo = List::new(board.id.clone(), "To Do", 0)
        .with_card("Design new landing page")
        .with_card("Setup development environment")
        .with_card("Write documentation");
    todo.cards[0]
        .comments
        .push(aged_comment("Should include hero section and features", "John", now - HOUR_MS));

    let mut in_progress = List::new(board.id.clone(), "In Progress", 1)
        .with_card("Implement user authentication")
        .with_card("Database schema design");
    in_progress.cards[0].comments.extend([
        aged_comment("Using JWT tokens", "Sarah", now - 2 * HOUR_MS),
        aged_comment("Password reset flow needs testing", "Mike", now - HOUR_MS),
    ]);

    let mut done = List::new(board.id.clone(), "Done", 2)
        .with_card("Project kickoff meeting")
        .with_card("Gather requirements");
    done.cards[1]
        .comments
        .push(aged_comment("All stakeholders signed off", "Admin", now - DAY_MS));

    board.lists = vec![todo, in_progress, done];
    board.updated_at_ms = board.updated_at_ms.max(now);
    board
}

fn aged_comment(text: &str, author: &str, created_at_ms: TimestampMs) -> Comment {
    Comment {
        created_at_ms,
        ..Comment::new(text, author)
    }
}
