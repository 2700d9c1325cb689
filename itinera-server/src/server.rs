use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    activity_handler, chat_handler, day_handler, itinerary_handler, maps_key_handler,
};
use crate::state::AppState;

/// Build the application router.
///
/// Unmatched paths serve the prebuilt front-end bundle when it exists
/// so client-side routes resolve to the SPA entry file; without a
/// bundle they get a JSON 404.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/maps-key", get(maps_key_handler))
        .route("/api/itinerary", get(itinerary_handler))
        .route("/api/day/:day_number", get(day_handler))
        .route("/api/activity/:activity_id", get(activity_handler))
        .route("/api/chat", post(chat_handler));

    let static_dir = Path::new(&state.config.server.static_dir);
    let index = static_dir.join("index.html");
    let router = if index.exists() {
        api.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!(
            "Front-end build directory not found at {}; the UI will not be served",
            state.config.server.static_dir
        );
        api.fallback(frontend_missing)
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn frontend_missing() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Frontend not found." })),
    )
}

/// Bind and serve until the process is stopped
pub async fn run_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
