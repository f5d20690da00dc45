//! Message list controller: fetch, render, and maintain-toggle round trips.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only component that talks to the API. It writes the
//! results through [`MessagesView`] and reports outcomes through [`Notifier`],
//! so the browser wiring and the tests plug in different implementations.
//!
//! ERROR HANDLING
//! ==============
//! Failures never propagate: each one becomes an error toast at the call site.
//! There is no retry and no request fencing, so a slow response may overwrite
//! a newer one.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::MessagesApi;
use crate::net::types::{ApiError, Message, Pagination};
use crate::state::messages::{MaintainBinding, MessageRow, MessagesView, PaginationView};
use crate::state::toasts::{Notifier, ToastKind};
use crate::util::clock::now_ms;
use crate::util::location::PageEnvironment;
use crate::util::query::{Filters, filter_query};

pub const LOAD_REJECTED_TOAST: &str = "Error loading messages";
pub const LOAD_CONNECTION_TOAST: &str = "Connection error";
pub const TOGGLE_OK_TOAST: &str = "Stato messaggio aggiornato!";
pub const TOGGLE_REJECTED_TOAST: &str = "Errore nell'aggiornamento";
pub const TOGGLE_CONNECTION_TOAST: &str = "Errore di connessione";

/// A checkbox change emitted by a rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaintainToggle {
    /// List generation the row belonged to when the box changed.
    pub generation: u64,
    pub index: usize,
    pub binding: MaintainBinding,
    pub checked: bool,
}

#[derive(Clone, Debug)]
pub struct MessageListController<A, V, N, E> {
    api: A,
    view: V,
    notifier: N,
    env: E,
}

impl<A, V, N, E> MessageListController<A, V, N, E>
where
    A: MessagesApi,
    V: MessagesView,
    N: Notifier,
    E: PageEnvironment,
{
    pub fn new(api: A, view: V, notifier: N, env: E) -> Self {
        Self { api, view, notifier, env }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch one filtered page and render it, or toast the failure.
    pub async fn load_page(&self, channel_id: Option<&str>, page: u32, filters: &Filters) {
        let query = filter_query(channel_id, page, filters);
        log::debug!("loading messages: {query}");

        match self.api.fetch_messages(&query).await {
            Ok(page) => {
                self.render(&page.messages);
                match page.pagination {
                    Some(pagination) => self.render_pagination(pagination),
                    None => {
                        log::warn!("message list response carried no pagination");
                        self.notifier.notify(LOAD_CONNECTION_TOAST, ToastKind::Error);
                    }
                }
            }
            Err(err) => {
                log::warn!("message list load failed: {err}");
                let text = if err.is_connection_failure() { LOAD_CONNECTION_TOAST } else { LOAD_REJECTED_TOAST };
                self.notifier.notify(text, ToastKind::Error);
            }
        }
    }

    /// Replace the list with one row per message, in input order.
    pub fn render(&self, messages: &[Message]) {
        let now = now_ms();
        let rows = messages.iter().map(|m| MessageRow::from_message(m, now)).collect();
        self.view.show_rows(rows);
    }

    /// Show pagination controls; a single page leaves the current controls alone.
    pub fn render_pagination(&self, pagination: Pagination) {
        if let Some(controls) = PaginationView::build(pagination, &self.env.search()) {
            self.view.show_pagination(controls);
        }
    }

    /// Send a row's new maintain state; revert the checkbox on any failure.
    ///
    /// The revert is dropped when the list was re-rendered in the meantime.
    ///
    /// The URL token is the current time, not the message id; the server
    /// identifies the row from the body.
    pub async fn toggle_maintain(&self, toggle: MaintainToggle) {
        let token = now_ms().to_string();
        let request = toggle.binding.request(toggle.checked);

        match self.api.toggle_maintain(&token, &request).await {
            Ok(()) => self.notifier.notify(TOGGLE_OK_TOAST, ToastKind::Success),
            Err(err) => {
                log::warn!("maintain toggle failed for row {}: {err}", toggle.index);
                self.notifier.notify(&toggle_failure_text(&err), ToastKind::Error);
                self.view.set_maintain(toggle.generation, toggle.index, !toggle.checked);
            }
        }
    }
}

fn toggle_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(Some(detail)) => format!("{TOGGLE_REJECTED_TOAST}: {detail}"),
        ApiError::Rejected(None) => TOGGLE_REJECTED_TOAST.to_owned(),
        ApiError::Transport(_) | ApiError::Decode(_) => TOGGLE_CONNECTION_TOAST.to_owned(),
    }
}
