//! Weather table

use leptos::prelude::*;
use weather_charts::TableModel;
use weather_core::colors;

use crate::TABLE_CONTAINER_ID;

const CELL_PADDING: &str = "8px";

#[component]
pub fn WeatherTable(#[prop(into)] table: Signal<TableModel>) -> impl IntoView {
    let header_style = format!(
        "border: 1px solid {}; padding: {}; background-color: {}; color: {};",
        colors::TABLE_HEADER_BORDER,
        CELL_PADDING,
        colors::TABLE_HEADER,
        colors::TABLE_HEADER_TEXT,
    );
    let cell_style = format!("border: 1px solid {}; padding: {};", colors::TABLE_CELL_BORDER, CELL_PADDING);

    view! {
        <div id=TABLE_CONTAINER_ID>
            {move || {
                let model = table.get();
                let header_style = header_style.clone();
                let cell_style = cell_style.clone();
                view! {
                    <table style="width: 100%; border-collapse: collapse;">
                        <tr>
                            {model
                                .headers
                                .into_iter()
                                .map(|h| view! { <th style=header_style.clone()>{h}</th> })
                                .collect_view()}
                        </tr>
                        {model
                            .rows
                            .into_iter()
                            .map(|row| {
                                let cell_style = cell_style.clone();
                                view! {
                                    <tr>
                                        {row
                                            .into_iter()
                                            .map(|cell| view! { <td style=cell_style.clone()>{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </table>
                }
            }}
        </div>
    }
}
