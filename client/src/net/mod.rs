//! Networking for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` plugs the browser's `fetch` into the `sentiment` crate's transport
//! seam and exposes the single batch-analysis call the page needs.

pub mod api;
