use actix_web::{web, HttpResponse};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{HealthResponse, SwipeQueueResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/swipe-queue", web::get().to(get_swipe_queue));
}

/// Health check endpoint
///
/// GET /api/health
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Next batch of swipe candidates for the authenticated user
///
/// GET /api/swipe-queue
async fn get_swipe_queue(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let profiles = state.queue.generate(user.0).await?;

    tracing::info!("serving {} swipe candidates to user {}", profiles.len(), user.0);

    Ok(HttpResponse::Ok().json(SwipeQueueResponse {
        success: true,
        profiles,
    }))
}
