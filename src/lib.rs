//! # message-admin
//!
//! Leptos + WASM client for the message-admin pages: the filtered message
//! list with its maintain toggles, toasts, pagination, and the small page
//! helpers (date inputs, submit spinners, keyboard shortcuts, auto-refresh).
//!
//! Everything except the `hydrate`-gated browser wiring builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;
