//! Toast notification state.
//!
//! DESIGN
//! ======
//! Toasts are queued here and removed by id once their display timer fires,
//! so a late timer for an already-dismissed toast is harmless.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a toast; maps to the `toast <kind>` CSS class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Parse a kind name coming from page scripts; unknown names are `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Currently visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, message: &str, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.to_owned(), kind });
        id
    }

    /// Remove the toast with `id`. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}
