//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns the analyze orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
