//! Session context for the dashboard.
//!
//! Components read and mutate the controller only through
//! `RwSignal<SessionController>` obtained with `expect_context`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use sentiment::SessionController;

/// Text the input box starts with, so a first visit can hit Analyze at once.
pub const SAMPLE_FEEDBACK: &str = "Love the new search.\n\
The app is slow after the last update.\n\
This feature is okay, nothing special.\n\
Great UX overall.\n\
Confusing settings page.";

/// Controller for a fresh tab: idle, pre-filled with [`SAMPLE_FEEDBACK`].
#[must_use]
pub fn initial_session() -> SessionController {
    SessionController::with_input(SAMPLE_FEEDBACK)
}
