//! Input card: the feedback textarea, line counter, and Analyze button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits flow straight into the session controller, which re-derives the
//! batch on every keystroke. The button's enabled state and caption come from
//! the controller so the loading guard lives in one place.

use leptos::ev;
use leptos::prelude::*;
use sentiment::SessionController;
use sentiment::present::analyze_button_caption;

/// Input card. `on_analyze` fires when the button is clicked.
#[component]
pub fn FeedbackInput(on_analyze: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionController>>();

    let raw = move || session.with(|s| s.raw_input().to_owned());
    let line_count = move || session.with(SessionController::line_count);
    let disabled = move || !session.with(SessionController::can_analyze);
    let caption = move || analyze_button_caption(session.with(SessionController::is_loading));
    let error = move || session.with(|s| s.error_message().map(str::to_owned));

    let on_input = move |event: ev::Event| {
        let value = event_target_value(&event);
        session.update(|s| s.set_input(value));
    };

    view! {
        <div class="card">
            <div class="cardTitle">"Input"</div>
            <textarea
                class="textarea"
                rows="10"
                placeholder="Paste one feedback comment per line…"
                prop:value=raw
                on:input=on_input
            ></textarea>
            <div class="row">
                <div class="muted">"Lines detected: " <b>{line_count}</b></div>
                <button class="button" disabled=disabled on:click=move |_| on_analyze.run(())>
                    {caption}
                </button>
            </div>
            {move || error().map(|message| view! { <div class="error">{message}</div> })}
        </div>
    }
}
