//! Networking modules for the message-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema.

pub mod api;
pub mod types;
