//! Dashboard page: input card, distribution chart, and results.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It turns an Analyze click into one
//! begin/await/complete cycle on the session controller; the chart and
//! results card appear only while the controller holds a successful result.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use sentiment::{ANALYZE_BATCH_PATH, AnalysisError, AnalysisResult, FeedbackBatch, SessionController};

use crate::components::feedback_input::FeedbackInput;
use crate::components::results_panel::ResultsPanel;
use crate::components::sentiment_chart::SentimentChart;

const SUBTITLE: &str =
    "Paste a batch of feedback lines. Click Analyze. Get per-line sentiment + an overall mood snapshot.";

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionController>>();
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));

    let on_analyze = Callback::new(move |()| {
        let Some(batch) = session.try_update(SessionController::begin_analysis).flatten() else {
            return;
        };
        run_analysis(session, batch);
    });

    view! {
        <div class="page">
            <header class="header">
                <div>
                    <div class="title">"Feedback Insight Dashboard"</div>
                    <div class="subtitle">{SUBTITLE}</div>
                </div>
            </header>

            <div class="grid">
                <FeedbackInput on_analyze=on_analyze/>
                {move || result.get().map(|r| view! { <SentimentChart stats=r.stats/> })}
                {move || result.get().map(|r| view! { <ResultsPanel result=r/> })}
            </div>

            <footer class="footer">
                "Backend: " <span class="mono">{ANALYZE_BATCH_PATH}</span>
                " • Proxy target configurable via " <span class="mono">"API_PROXY_TARGET"</span>
            </footer>
        </div>
    }
}

/// Resolve the outstanding request on `controller`.
fn apply_outcome(controller: &mut SessionController, outcome: Result<AnalysisResult, AnalysisError>) {
    #[cfg(feature = "hydrate")]
    if let Err(e) = &outcome {
        log::warn!("analyze failed: {e}");
    }
    controller.complete_analysis(outcome);
}

#[cfg(feature = "hydrate")]
fn run_analysis(session: RwSignal<SessionController>, batch: FeedbackBatch) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::analyze_batch(&batch).await;
        session.update(|s| apply_outcome(s, outcome));
    });
}

#[cfg(not(feature = "hydrate"))]
fn run_analysis(session: RwSignal<SessionController>, batch: FeedbackBatch) {
    let _ = batch;
    session.update(|s| apply_outcome(s, Err(crate::net::api::not_available())));
}
