//! Untrusted stored data -> well-formed `Board`.
//!
//! # Responsibility
//! - Parse decoded JSON of unknown shape bottom-up:
//!   Comment -> Card -> List -> Board.
//! - Repair denormalized back-references from the containing parent.
//!
//! # Invariants
//! - A child missing a required string field is discarded together with
//!   everything nested under it; its parent survives.
//! - Missing or non-numeric `order` becomes `0`. Dense ordering is restored
//!   by `ops::canonicalize` when the board reaches the reducer.
//! - Unparseable timestamps become "now"; they never discard an entity.
//!   Empty or blank strings count as unparseable, so they read as "now"
//!   rather than the epoch.
//! - Nothing here fails: the result is a valid board or `None`.

use crate::model::{Board, Card, Comment, List};
use crate::shared::{now_ms, TimestampMs};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde_json::{Map, Number, Value};

type Object = Map<String, Value>;

/// Entities dropped while normalizing one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discarded {
    pub lists: usize,
    pub cards: usize,
    pub comments: usize,
}

impl Discarded {
    pub fn is_empty(&self) -> bool {
        self.lists == 0 && self.cards == 0 && self.comments == 0
    }
}

/// Decodes stored text and normalizes it. Invalid JSON yields `None`, the
/// same as an absent value.
pub fn parse_stored_board(text: &str) -> Option<Board> {
    match serde_json::from_str::<Value>(text) {
        Ok(raw) => normalize_board(&raw),
        Err(err) => {
            warn!(
                "event=board_normalize module=repo status=error reason=invalid_json line={} column={}",
                err.line(),
                err.column()
            );
            None
        }
    }
}

/// Normalizes decoded data into a board, using the current time for any
/// unusable timestamp.
pub fn normalize_board(raw: &Value) -> Option<Board> {
    let mut discarded = Discarded::default();
    let board = normalize_board_at(raw, now_ms(), &mut discarded)?;
    if !discarded.is_empty() {
        warn!(
            "event=board_normalize module=repo status=partial board_id={} lists_dropped={} cards_dropped={} comments_dropped={}",
            board.id, discarded.lists, discarded.cards, discarded.comments
        );
    }
    Some(board)
}

/// Normalization with an explicit clock, recording what was dropped.
pub fn normalize_board_at(
    raw: &Value,
    now: TimestampMs,
    discarded: &mut Discarded,
) -> Option<Board> {
    let object = raw.as_object()?;
    let id = required_string(object, "id")?;
    let title = required_string(object, "title")?;

    let mut lists = Vec::new();
    for raw_list in children(object, "lists") {
        match normalize_list(raw_list, &id, now, discarded) {
            Some(list) => lists.push(list),
            None => discarded.lists += 1,
        }
    }

    Some(Board {
        id,
        title,
        lists,
        created_at_ms: to_millis(field_with_alias(object, "createdAtMs", "createdAt"), now),
        updated_at_ms: to_millis(field_with_alias(object, "updatedAtMs", "updatedAt"), now),
    })
}

fn normalize_list(
    raw: &Value,
    board_id: &str,
    now: TimestampMs,
    discarded: &mut Discarded,
) -> Option<List> {
    let object = raw.as_object()?;
    let id = required_string(object, "id")?;
    let title = required_string(object, "title")?;
    // Required for validity even though the parent id wins below.
    required_string(object, "boardId")?;

    let mut cards = Vec::new();
    for raw_card in children(object, "cards") {
        match normalize_card(raw_card, &id, now, discarded) {
            Some(card) => cards.push(card),
            None => discarded.cards += 1,
        }
    }

    Some(List {
        order: order_of(object.get("order")),
        board_id: board_id.to_string(),
        id,
        title,
        cards,
    })
}

fn normalize_card(
    raw: &Value,
    list_id: &str,
    now: TimestampMs,
    discarded: &mut Discarded,
) -> Option<Card> {
    let object = raw.as_object()?;
    let id = required_string(object, "id")?;
    let title = required_string(object, "title")?;
    let stored_list_id = required_string(object, "listId")?;
    if stored_list_id != list_id {
        debug!("event=card_normalize module=repo status=repaired card_id={id} field=listId");
    }

    let mut comments = Vec::new();
    for raw_comment in children(object, "comments") {
        match normalize_comment(raw_comment, now) {
            Some(comment) => comments.push(comment),
            None => discarded.comments += 1,
        }
    }

    Some(Card {
        order: order_of(object.get("order")),
        list_id: list_id.to_string(),
        id,
        title,
        comments,
    })
}

fn normalize_comment(raw: &Value, now: TimestampMs) -> Option<Comment> {
    let object = raw.as_object()?;
    Some(Comment {
        id: required_string(object, "id")?,
        text: required_string(object, "text")?,
        author: required_string(object, "author")?,
        created_at_ms: to_millis(field_with_alias(object, "createdAtMs", "createdAt"), now),
    })
}

fn required_string(object: &Object, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_string)
}

/// Array elements under `key`; anything that is not an array reads as empty.
fn children<'a>(object: &'a Object, key: &str) -> impl Iterator<Item = &'a Value> {
    object
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// Reads `key`, falling back to the legacy `alias` when `key` is absent or null.
fn field_with_alias<'a>(object: &'a Object, key: &str, alias: &str) -> Option<&'a Value> {
    object
        .get(key)
        .filter(|value| !value.is_null())
        .or_else(|| object.get(alias))
}

fn order_of(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number_to_i64(number).unwrap_or(0),
        _ => 0,
    }
}

/// Integral value of a JSON number; fractions truncate toward zero.
fn number_to_i64(number: &Number) -> Option<i64> {
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|value| value as i64))
}

/// Epoch milliseconds from a number, a numeric string, or a date string;
/// `now` for anything else.
pub(crate) fn to_millis(value: Option<&Value>, now: TimestampMs) -> TimestampMs {
    match value {
        Some(Value::Number(number)) => number_to_i64(number).unwrap_or(now),
        Some(Value::String(text)) => parse_timestamp_text(text).unwrap_or(now),
        _ => now,
    }
}

fn parse_timestamp_text(text: &str) -> Option<TimestampMs> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(millis) = trimmed.parse::<i64>() {
        return Some(millis);
    }
    if let Ok(millis) = trimmed.parse::<f64>() {
        if millis.is_finite() {
            return Some(millis as i64);
        }
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(at.timestamp_millis());
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(at.timestamp_millis());
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc().timestamp_millis())
}
