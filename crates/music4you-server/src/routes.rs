use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::State,
    http::Method,
    response::{Html, Json},
    routing::get,
    Router,
};
use music4you_web::render_document;
use serde::Serialize;
use tower_http::{
    cors::{self, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{AllowedOrigins, ServerConfig};

#[derive(Clone)]
struct AppState {
    page: Arc<str>,
}

/// Builds the application router. The page is rendered once here and shared
/// by every request.
pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        page: render_document().into(),
    };
    tracing::debug!("Rendered page shell ({} bytes)", state.page.len());

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    match origins {
        AllowedOrigins::Any => CorsLayer::permissive(),
        AllowedOrigins::List(list) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(list.iter().cloned()))
            .allow_methods([Method::GET, Method::HEAD])
            .allow_headers(cors::Any),
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    time: u64,
}

async fn health() -> Json<HealthResponse> {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    Json(HealthResponse { status: "ok", time })
}
