//! Leptos islands mounted into the server-rendered messages page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components only read and write the shared signals; network calls go
//! through the controller via callbacks.

pub mod message_list;
pub mod pagination_bar;
pub mod toast_stack;
