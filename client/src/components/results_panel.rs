//! Results card: KPI tiles and the per-line table.
//!
//! Rows are rendered in submission order; row `i` is the backend's verdict
//! for line `i` of the batch.

use leptos::prelude::*;
use sentiment::AnalysisResult;
use sentiment::present::{kpis, result_rows};

#[component]
pub fn ResultsPanel(result: AnalysisResult) -> impl IntoView {
    let tiles = kpis(&result.stats)
        .into_iter()
        .map(|kpi| {
            let value_class = if kpi.mono { "kpiValue mono" } else { "kpiValue" };
            view! {
                <div class="kpi">
                    <div class="kpiLabel">{kpi.label}</div>
                    <div class=value_class>{kpi.value}</div>
                </div>
            }
        })
        .collect_view();

    let rows = result_rows(&result)
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="cellText">{row.text}</td>
                    <td>
                        <span class=row.pill_class>{row.label}</span>
                    </td>
                    <td class="mono">{row.score}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card cardFull">
            <div class="cardTitle">"Results"</div>
            <div class="kpis">{tiles}</div>
            <div class="tableWrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th style="width: 64%">"Comment"</th>
                            <th style="width: 18%">"Sentiment"</th>
                            <th style="width: 18%">"Score"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
