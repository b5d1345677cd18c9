use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{InteractionRequest, LikeResponse, ProfilesResponse, StatusResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user-interactions")
            .route("/like", web::post().to(like))
            .route("/dislike", web::post().to(dislike))
            .route("/block", web::post().to(block))
            .route("/unblock", web::delete().to(unblock))
            .route("/matches", web::get().to(matches))
            .route("/liked-me", web::get().to(liked_me)),
    );
}

/// Like a user; reports whether this completed a mutual match
///
/// POST /api/user-interactions/like
async fn like(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<InteractionRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let is_match = state.engine.like(user.0, req.target_user_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        success: true,
        is_match,
    }))
}

/// Dislike a user
///
/// POST /api/user-interactions/dislike
async fn dislike(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<InteractionRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state.engine.dislike(user.0, req.target_user_id).await?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        success: true,
        message: "User disliked".to_string(),
    }))
}

/// Block a user
///
/// POST /api/user-interactions/block
async fn block(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<InteractionRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state.engine.block(user.0, req.target_user_id).await?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        success: true,
        message: "User blocked".to_string(),
    }))
}

/// Remove a block; succeeds even when no block exists
///
/// DELETE /api/user-interactions/unblock
async fn unblock(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<InteractionRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state.engine.unblock(user.0, req.target_user_id).await?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        success: true,
        message: "User unblocked".to_string(),
    }))
}

/// Profiles the caller is mutually matched with
///
/// GET /api/user-interactions/matches
async fn matches(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let profiles = state.store.matched_profiles(user.0).await?;

    Ok(HttpResponse::Ok().json(ProfilesResponse {
        success: true,
        profiles,
    }))
}

/// Profiles that have liked the caller
///
/// GET /api/user-interactions/liked-me
async fn liked_me(state: web::Data<AppState>, user: AuthUser) -> Result<HttpResponse, ApiError> {
    let profiles = state.store.liked_by_profiles(user.0).await?;

    Ok(HttpResponse::Ok().json(ProfilesResponse {
        success: true,
        profiles,
    }))
}
