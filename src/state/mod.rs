//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data held in `RwSignal`s by the app; the view and
//! notifier traits the controller writes through live next to the state they
//! mutate.

pub mod messages;
pub mod toasts;
