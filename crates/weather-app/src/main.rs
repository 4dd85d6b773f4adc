//! Weather Chart Explorer - browser entry point

use leptos::prelude::*;
use weather_components::Explorer;
use weather_fetch::{spawn_load, ForecastConfig};
use weather_state::{provide_app_state, INITIAL_CHART};

#[component]
fn App() -> impl IntoView {
    let state = provide_app_state();

    // Empty axes until the feed arrives
    state.show_chart(INITIAL_CHART);
    spawn_load(state, ForecastConfig::default());

    view! { <Explorer /> }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Weather Chart Explorer v{}", env!("CARGO_PKG_VERSION"));
    mount_to_body(App);
}
