//! Local stand-in for the hourly weather feed

mod mock;

use axum::{extract::Query, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock::{generate_feed, FeedQuery};
use weather_core::ForecastResponse;

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

async fn feed(Query(query): Query<FeedQuery>) -> Json<ForecastResponse> {
    tracing::info!(
        "Feed request: lat={:?} lon={:?} hourly={:?} {:?}..{:?}",
        query.latitude,
        query.longitude,
        query.hourly,
        query.start_date,
        query.end_date
    );
    Json(generate_feed(&query))
}

async fn health() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mock=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new()
        .route("/v1/archive", get(feed))
        .route("/v1/forecast", get(feed))
        .route("/health", get(health))
        .layer(CorsLayer::permissive());

    let addr = std::env::var("WEATHER_MOCK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Mock weather feed listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
