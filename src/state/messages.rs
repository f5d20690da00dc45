//! Rendered message list and pagination state.
//!
//! DESIGN
//! ======
//! Rows and pagination are replaced wholesale from the last successful fetch;
//! the only in-place mutation is a row's maintain checkbox, which the toggle
//! flow flips optimistically and reverts on failure.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{Message, Pagination, ToggleMaintainRequest};
use crate::util::query::page_link;

/// Row identity sent back to the server when the maintain flag changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaintainBinding {
    pub timestamp: String,
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
}

impl MaintainBinding {
    pub fn request(&self, to_maintain: bool) -> ToggleMaintainRequest {
        ToggleMaintainRequest {
            timestamp: self.timestamp.clone(),
            channel_id: self.channel_id.clone(),
            user_id: self.user_id.clone(),
            message: self.message.clone(),
            to_maintain,
        }
    }
}

/// One rendered message row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRow {
    /// `data-message-id`; the message id, or a time-derived fallback.
    pub key: String,
    pub user_name: String,
    pub channel_name: String,
    pub binding: MaintainBinding,
    pub to_maintain: bool,
}

impl MessageRow {
    /// Build a row, falling back to `now_ms` when the message has no id.
    pub fn from_message(message: &Message, now_ms: u64) -> Self {
        Self {
            key: message.id.clone().unwrap_or_else(|| now_ms.to_string()),
            user_name: message.user_name.clone(),
            channel_name: message.channel_name.clone(),
            binding: MaintainBinding {
                timestamp: message.timestamp.clone(),
                channel_id: message.channel_id.clone(),
                user_id: message.user_id.clone(),
                message: message.message.clone(),
            },
            to_maintain: message.to_maintain,
        }
    }
}

/// Pagination controls: optional previous/next hrefs around a page label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub previous: Option<String>,
    pub label: String,
    pub next: Option<String>,
}

impl PaginationView {
    /// Build controls for `pagination`, keeping the filters in `search`.
    ///
    /// Returns `None` when there is at most one page.
    pub fn build(pagination: Pagination, search: &str) -> Option<Self> {
        let Pagination { page, total_pages } = pagination;
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            previous: (page > 1).then(|| page_link(search, page - 1)),
            label: format!("Pagina {page} di {total_pages}"),
            next: (page < total_pages).then(|| page_link(search, page + 1)),
        })
    }
}

/// Client-side copy of what the list and pagination containers show.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub rows: Vec<MessageRow>,
    pub pagination: Option<PaginationView>,
    /// Bumped on every list replacement; zero until the first fetched page
    /// replaces the server-rendered list.
    pub generation: u64,
}

impl MessagesState {
    pub fn replace_rows(&mut self, rows: Vec<MessageRow>) {
        self.rows = rows;
        self.generation += 1;
    }

    pub fn is_rendered(&self) -> bool {
        self.generation > 0
    }

    /// Update one row's checkbox if `generation` is still the rendered list.
    ///
    /// Returns `false` for a replaced list or an unknown index.
    pub fn set_maintain(&mut self, generation: u64, index: usize, checked: bool) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.rows.get_mut(index) {
            Some(row) => {
                row.to_maintain = checked;
                true
            }
            None => false,
        }
    }
}

/// Rendering surface the message list controller writes to.
pub trait MessagesView {
    /// Replace the whole list; toggle handlers are bound per rendered row.
    fn show_rows(&self, rows: Vec<MessageRow>);
    fn show_pagination(&self, pagination: PaginationView);
    /// Set a row's checkbox; ignored once the list rendered at `generation`
    /// has been replaced.
    fn set_maintain(&self, generation: u64, index: usize, checked: bool);
}

impl MessagesView for RwSignal<MessagesState> {
    fn show_rows(&self, rows: Vec<MessageRow>) {
        self.update(|s| s.replace_rows(rows));
    }

    fn show_pagination(&self, pagination: PaginationView) {
        self.update(|s| s.pagination = Some(pagination));
    }

    fn set_maintain(&self, generation: u64, index: usize, checked: bool) {
        self.update(|s| {
            s.set_maintain(generation, index, checked);
        });
    }
}
