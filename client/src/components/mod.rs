//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `RwSignal<SessionController>` from context.
//! Only the input card writes to it; the chart and results panel are pure
//! readers of the current `AnalysisResult`.

pub mod feedback_input;
pub mod results_panel;
pub mod sentiment_chart;
