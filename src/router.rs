use crate::handlers::{
    health::health_check,
    submissions::{submit_feedback, submit_onboarding, submit_waitlist},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    http::{StatusCode, Uri},
    response::Json,
    routing::{get, post},
};
use common::ErrorResponse;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.settings.server.request_timeout_secs);
    let static_dir = state.settings.server.static_dir.clone();

    let api = Router::new()
        .route("/waitlist", post(submit_waitlist))
        .route("/feedback", post(submit_feedback))
        .route("/onboarding", post(submit_onboarding))
        .fallback(api_not_found);

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Form submissions
        .nest("/api/v1", api)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Client-side routes all resolve to index.html
    let router = match static_dir {
        Some(dir) => {
            info!("Serving frontend from {}", dir.display());
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn api_not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No API route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No API route for {}", uri.path()),
            code: "NOT_FOUND".to_string(),
            success: false,
        }),
    )
}
