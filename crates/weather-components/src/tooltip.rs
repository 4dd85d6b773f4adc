//! The single shared tooltip element

use leptos::prelude::*;
use weather_charts::Tooltip;

use crate::TOOLTIP_ID;

#[component]
pub fn ChartTooltip(#[prop(into)] tooltip: Signal<Tooltip>) -> impl IntoView {
    view! {
        <div
            id=TOOLTIP_ID
            class="tooltip"
            style=move || format!("display: {};", tooltip.with(Tooltip::display))
        >
            {move || {
                tooltip.with(|t| t.content()).map(|content| {
                    content
                        .lines
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="tooltip-line">
                                    <strong>{label}</strong>
                                    " "
                                    {value}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
