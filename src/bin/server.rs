use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_filter_engine::error::FilterEngineError;
use smart_filter_engine::routing::RemoteClassifier;
use smart_filter_engine::{
    Category, Coordinator, CoordinatorReply, EngineConfig, FilterCriteria, FilterEngine, Listing,
    SearchResponse,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<FilterEngine>,
    coordinator: Option<Arc<Coordinator>>,
}

#[derive(Debug, Deserialize)]
struct RouteRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    provider: String,
    routing: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_filter_server=debug,smart_filter_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => EngineConfig::from_file(path)?,
        Err(_) => EngineConfig::default(),
    }
    .with_env_overrides()?;

    tracing::info!("🚀 Starting Smart Filter Server");
    tracing::info!("📦 Data source: {:?}", config.data);

    let engine = Arc::new(FilterEngine::from_config(&config).await?);

    let coordinator = match &config.classifier_url {
        Some(url) => match RemoteClassifier::new(url.clone()).await {
            Ok(classifier) => {
                tracing::info!("✅ Intent classifier at {}", url);
                Some(Arc::new(Coordinator::new(engine.clone(), Arc::new(classifier))))
            }
            Err(e) => {
                tracing::warn!("⚠️ Classifier unavailable, /v1/route disabled: {}", e);
                None
            }
        },
        None => None,
    };

    let state = AppState { engine, coordinator };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/listings/:category", get(listings_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/route", post(route_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = config.server.bind_addr();
    tracing::info!("🔌 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: smart_filter_engine::VERSION.to_string(),
        provider: state.engine.provider_name().to_string(),
        routing: state.coordinator.is_some(),
    })
}

async fn listings_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let category: Category = category.parse()?;
    Ok(Json(state.engine.listings(category).await?))
}

async fn search_handler(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<SearchResponse>, AppError> {
    tracing::debug!("Search request: {:?}", criteria);

    let response = state.engine.search(&criteria).await?;
    Ok(Json(response))
}

async fn route_handler(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<CoordinatorReply>, AppError> {
    let coordinator = state.coordinator.as_ref().ok_or_else(|| {
        FilterEngineError::Config("no intent classifier configured".to_string())
    })?;

    Ok(Json(coordinator.handle(&req.message).await?))
}

// Error handling
struct AppError(FilterEngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            FilterEngineError::UnknownCategory(category) => {
                (StatusCode::NOT_FOUND, format!("Unknown category: {}", category))
            }
            FilterEngineError::Config(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
            FilterEngineError::Classifier(message) => (StatusCode::BAD_GATEWAY, message),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<FilterEngineError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
