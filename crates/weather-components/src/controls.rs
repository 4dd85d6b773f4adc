//! One trigger button per chart type

use leptos::prelude::*;
use weather_charts::ChartKind;
use weather_state::use_app_state;

#[component]
pub fn ChartControls() -> impl IntoView {
    let state = use_app_state();
    let selection = state.chart.selection;

    view! {
        <nav class="chart-controls">
            {ChartKind::ALL
                .into_iter()
                .map(|kind| {
                    let state = state.clone();
                    let loading = state.clone();
                    view! {
                        <button
                            class=move || {
                                if selection.get().is_showing(kind) { "chart-btn active" } else { "chart-btn" }
                            }
                            disabled=move || loading.is_loading()
                            on:click=move |_| {
                                tracing::debug!("Chart selected: {}", kind);
                                state.show_chart(kind);
                            }
                        >
                            {kind.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
