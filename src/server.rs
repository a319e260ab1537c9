use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, routing::post, Json, Router};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{ApiGenerateRequest, ApiGenerateResponse};
use content_engine::{ContentEngine, SystemRandom};

#[derive(Clone)]
struct AppState {
    engine: Arc<ContentEngine>,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(engine: ContentEngine, host: String, port: u16) -> Result<(), String> {
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "content engine listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        format!("failed to bind server: {}", err)
    })?, app)
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiGenerateRequest>,
) -> Result<Json<ApiGenerateResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let seed = request.seed;
    let (brief, warnings) = request
        .into_brief()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let mut rng = match seed {
        Some(seed) => SystemRandom::seeded(seed),
        None => SystemRandom::new(),
    };
    let content = state
        .engine
        .generate(&brief, &mut rng)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    info!(
        request_id = %request_id,
        platform = brief.platform.key(),
        intent = content.analysis.intent.key(),
        viral_score = content.viral_score,
        "generated content"
    );

    Ok(Json(ApiGenerateResponse {
        request_id,
        content,
        warnings,
    }))
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
