//! Main explorer layout component

use leptos::prelude::*;
use weather_charts::{colors, SceneView};
use weather_state::use_app_state;

use crate::{ChartControls, ChartTooltip, WeatherTable, CHART_CONTAINER_ID};

#[component]
pub fn Explorer() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="explorer">
            <header class="explorer-header">
                <h1 class="explorer-title">"Weather Chart Explorer"</h1>
                <ChartControls />
            </header>

            <main class="explorer-main">
                <section class="panel">
                    <ChartPanel />
                    <ChartTooltip tooltip=state.chart.tooltip />
                </section>

                <section class="panel">
                    <div class="panel-header">
                        <span class="panel-title">"Daily Weather"</span>
                    </div>
                    <WeatherTable table=state.table />
                </section>
            </main>

            <footer class="explorer-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
pub fn ChartPanel() -> impl IntoView {
    let state = use_app_state();
    let chart = state.chart;

    view! {
        <div id=CHART_CONTAINER_ID class="chart-container">
            <SceneView surface=chart.surface tooltip=chart.tooltip />
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let status = state.status;
    let error = state.error;

    view! {
        <div class="status-bar">
            <div class="sb-status">
                <span class="sb-label">"Data:"</span>
                <span class=move || format!("sb-value {}", status.get().css_class())>
                    {move || status.get().label()}
                </span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error" role="alert" style=format!("color: {}", colors::ERROR)>
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>"v0.1.0"</span>
            </div>
        </div>
    }
}
