//! Mood distribution card: a stacked bar plus legend.

use leptos::prelude::*;
use sentiment::AggregateStats;
use sentiment::present::{bar_width, distribution};

/// Stacked positive/neutral/negative bar for `stats`.
#[component]
pub fn SentimentChart(stats: AggregateStats) -> impl IntoView {
    let segments = distribution(&stats);

    let bar = segments
        .iter()
        .map(|seg| {
            let class = seg.segment_class;
            let width = bar_width(seg.value);
            let title = format!("{}: {}", seg.label, seg.text);
            view! { <div class=class style:width=width title=title></div> }
        })
        .collect_view();

    let legend = segments
        .into_iter()
        .map(|seg| {
            view! {
                <div class="legendItem">
                    <span class=seg.dot_class></span>
                    <span>{seg.label}</span>
                    <span class="mono">{seg.text}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <div class="cardTitle">"Mood distribution"</div>
            <div class="stackedBar">{bar}</div>
            <div class="legend">{legend}</div>
        </div>
    }
}
