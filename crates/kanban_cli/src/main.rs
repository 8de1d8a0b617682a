//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a file-backed board store, boot it, and print the board.
//! - Optionally run a short scripted edit to verify the save path.

use clap::Parser;
use kanban_core::db::open_db;
use kanban_core::selectors::{sorted_cards, sorted_lists};
use kanban_core::{
    default_log_level, format_relative_time, init_logging, now_ms, truncate_text, BoardAction,
    BoardStatus, BoardStore, KvBoardRepository, SqliteStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_DB_FILE_NAME: &str = "kanban.sqlite3";
const DEFAULT_AUTHOR: &str = "Anonymous";
const TITLE_PREVIEW_CHARS: usize = 48;

#[derive(Debug, Parser)]
#[command(name = "kanban", version, about = "Inspect and smoke-test a stored kanban board")]
struct Cli {
    /// SQLite database holding the board.
    #[arg(default_value = DEFAULT_DB_FILE_NAME)]
    db_path: PathBuf,

    /// Absolute directory for rolling log files; logging stays off without it.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with `--log-dir`.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Append a probe card with one comment to the first list before printing.
    #[arg(long)]
    touch: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&cli.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open {}: {err}", cli.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let medium = match SqliteStore::try_new(&conn) {
        Ok(medium) => medium,
        Err(err) => {
            eprintln!("storage not ready: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = BoardStore::boot(KvBoardRepository::new(medium));
    if store.state().status != BoardStatus::Ready {
        let message = store.state().error_message.as_deref().unwrap_or("unknown");
        eprintln!("board unavailable: {message}");
        return ExitCode::FAILURE;
    }

    if cli.touch {
        run_probe_edit(&mut store);
    }

    print_board(store.state());
    ExitCode::SUCCESS
}

fn run_probe_edit<R: kanban_core::BoardRepository>(store: &mut BoardStore<R>) {
    let has_lists = store
        .state()
        .board
        .as_ref()
        .is_some_and(|board| !board.lists.is_empty());
    if !has_lists {
        store.dispatch(BoardAction::ListAdd { title: None });
    }

    let Some(list_id) = store
        .state()
        .board
        .as_ref()
        .and_then(|board| sorted_lists(board).first().map(|list| list.id.clone()))
    else {
        return;
    };

    store.dispatch(BoardAction::CardAdd {
        list_id: list_id.clone(),
        title: Some("Smoke probe".to_string()),
    });
    let card_id = store
        .state()
        .board
        .as_ref()
        .and_then(|board| board.lists.iter().find(|list| list.id == list_id))
        .and_then(|list| list.cards.last().map(|card| card.id.clone()));
    if let Some(card_id) = card_id {
        store.dispatch(BoardAction::CommentAdd {
            card_id,
            text: "written by kanban --touch".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        });
    }
}

fn print_board(state: &kanban_core::BoardState) {
    let Some(board) = state.ready_board() else {
        return;
    };
    let now = now_ms();
    println!(
        "{} (updated {})",
        board.title,
        format_relative_time(board.updated_at_ms, now)
    );
    for list in sorted_lists(board) {
        println!("  [{}] {} ({} cards)", list.order, list.title, list.cards.len());
        for card in sorted_cards(list) {
            println!(
                "    {}. {} ({} comments)",
                card.order,
                truncate_text(&card.title, TITLE_PREVIEW_CHARS),
                card.comments.len()
            );
        }
    }
}
