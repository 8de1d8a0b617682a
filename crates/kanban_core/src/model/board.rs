//! Board entity definitions and factories.
//!
//! Field names serialize in camelCase so the stored JSON document keeps the
//! shape every previous release wrote (`listId`, `createdAtMs`, ...).

use crate::shared::{new_id, now_ms, Id, TimestampMs};
use serde::{Deserialize, Serialize};

/// Timestamped note attached to exactly one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id,
    pub text: String,
    pub author: String,
    pub created_at_ms: TimestampMs,
}

impl Comment {
    /// Creates a comment stamped with the current time.
    ///
    /// `text` and `author` are stored verbatim; trimming and empty-input
    /// checks belong to the input surface, not the core.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            author: author.into(),
            created_at_ms: now_ms(),
        }
    }
}

/// Task unit inside a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Id,
    pub title: String,
    /// Denormalized id of the owning list.
    pub list_id: Id,
    /// Insertion order; comments carry no `order` rank.
    pub comments: Vec<Comment>,
    pub order: i64,
}

impl Card {
    /// Creates an empty card at rank `order` inside `list_id`.
    pub fn new(list_id: impl Into<Id>, title: impl Into<String>, order: i64) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            list_id: list_id.into(),
            comments: Vec::new(),
            order,
        }
    }

    /// Appends `comment`, preserving insertion order.
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }
}

/// Ordered column of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: Id,
    pub title: String,
    /// Denormalized id of the owning board.
    pub board_id: Id,
    pub cards: Vec<Card>,
    pub order: i64,
}

impl List {
    /// Creates an empty list at rank `order` inside `board_id`.
    pub fn new(board_id: impl Into<Id>, title: impl Into<String>, order: i64) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            board_id: board_id.into(),
            cards: Vec::new(),
            order,
        }
    }

    /// Appends a fresh card titled `title` at the end of this list.
    pub fn with_card(mut self, title: impl Into<String>) -> Self {
        let card = Card::new(self.id.clone(), title, self.cards.len() as i64);
        self.cards.push(card);
        self
    }

    /// Returns the position of card `card_id` in `cards`.
    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }
}

/// Root aggregate and unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: Id,
    pub title: String,
    pub lists: Vec<List>,
    pub created_at_ms: TimestampMs,
    pub updated_at_ms: TimestampMs,
}

impl Board {
    /// Creates an empty board; both timestamps start at the current time.
    pub fn new(title: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: new_id(),
            title: title.into(),
            lists: Vec::new(),
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Returns the position of list `list_id` in `lists`.
    pub fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// Returns `(list_index, card_index)` of card `card_id`, if present.
    pub fn card_position(&self, card_id: &str) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(list_index, list)| {
            list.card_index(card_id)
                .map(|card_index| (list_index, card_index))
        })
    }

    /// Returns whether any list contains card `card_id`.
    pub fn contains_card(&self, card_id: &str) -> bool {
        self.card_position(card_id).is_some()
    }

    /// Total number of cards across all lists.
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }
}
