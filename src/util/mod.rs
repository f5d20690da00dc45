//! Browser glue and pure helpers shared by the controller and the islands.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its decision logic free of `web-sys` so it runs in native
//! tests; the DOM wiring sits behind the `hydrate` feature next to it.

pub mod auto_refresh;
pub mod clock;
pub mod date_input;
pub mod filters;
pub mod form_loading;
pub mod location;
pub mod query;
pub mod shortcuts;
pub mod timers;
