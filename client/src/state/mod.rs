//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The dashboard has one piece of state: the session controller from the
//! `sentiment` crate, provided as an `RwSignal` context by `app::App`.

pub mod session;
