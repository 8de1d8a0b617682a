//! Closed action surface accepted by the reducer.

use crate::model::Board;
use crate::shared::Id;

/// Every input the reducer understands. No other shapes exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    InitSuccess(Board),
    InitError(String),
    BoardTitleSet {
        title: String,
    },
    /// `None` falls back to the default list title.
    ListAdd {
        title: Option<String>,
    },
    ListTitleSet {
        list_id: Id,
        title: String,
    },
    ListDelete {
        list_id: Id,
    },
    ListsReorder {
        ordered_list_ids: Vec<Id>,
    },
    /// `None` falls back to the default card title.
    CardAdd {
        list_id: Id,
        title: Option<String>,
    },
    CardTitleSet {
        card_id: Id,
        title: String,
    },
    CardDelete {
        card_id: Id,
    },
    CardsReorder {
        list_id: Id,
        ordered_card_ids: Vec<Id>,
    },
    CardMoveWithin {
        list_id: Id,
        from_index: usize,
        to_index: usize,
    },
    CardMoveBetween {
        card_id: Id,
        from_list_id: Id,
        to_list_id: Id,
        to_index: usize,
    },
    CommentAdd {
        card_id: Id,
        text: String,
        author: String,
    },
    CommentDelete {
        card_id: Id,
        comment_id: Id,
    },
    CardSelect {
        card_id: Id,
    },
    CardDeselect,
}

impl BoardAction {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitSuccess(_) => "init_success",
            Self::InitError(_) => "init_error",
            Self::BoardTitleSet { .. } => "board_title_set",
            Self::ListAdd { .. } => "list_add",
            Self::ListTitleSet { .. } => "list_title_set",
            Self::ListDelete { .. } => "list_delete",
            Self::ListsReorder { .. } => "lists_reorder",
            Self::CardAdd { .. } => "card_add",
            Self::CardTitleSet { .. } => "card_title_set",
            Self::CardDelete { .. } => "card_delete",
            Self::CardsReorder { .. } => "cards_reorder",
            Self::CardMoveWithin { .. } => "card_move_within",
            Self::CardMoveBetween { .. } => "card_move_between",
            Self::CommentAdd { .. } => "comment_add",
            Self::CommentDelete { .. } => "comment_delete",
            Self::CardSelect { .. } => "card_select",
            Self::CardDeselect => "card_deselect",
        }
    }

    /// Whether the action edits board content (and so requires `Ready`).
    pub fn is_content_edit(&self) -> bool {
        !matches!(
            self,
            Self::InitSuccess(_) | Self::InitError(_) | Self::CardSelect { .. } | Self::CardDeselect
        )
    }
}
