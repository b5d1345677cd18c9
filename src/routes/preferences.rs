use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{PreferencesResponse, UpdatePreferencesRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user-preferences")
            .route("", web::get().to(get_preferences))
            .route("", web::put().to(update_preferences)),
    );
}

/// Preferences of the authenticated user
///
/// GET /api/user-preferences
async fn get_preferences(
    state: web::Data<AppState>,
    user: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let preferences = state
        .store
        .get_preferences(user.0)
        .await?
        .ok_or_else(|| ApiError::NotFound("Preferences not set".to_string()))?;

    Ok(HttpResponse::Ok().json(PreferencesResponse {
        success: true,
        preferences,
    }))
}

/// Partial preference update; the row is created on first write
///
/// PUT /api/user-preferences
async fn update_preferences(
    state: web::Data<AppState>,
    user: AuthUser,
    req: web::Json<UpdatePreferencesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    req.check_age_bounds()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    // The stored row also participates in the cross-field rule: merging a
    // new bound against an existing opposite bound must stay consistent.
    if let Some(existing) = state.store.get_preferences(user.0).await? {
        let min = req.min_age.or(existing.min_age);
        let max = req.max_age.or(existing.max_age);
        if let (Some(min), Some(max)) = (min, max) {
            if max <= min {
                return Err(ApiError::Validation(
                    "Maximum age must be greater than minimum age".to_string(),
                ));
            }
        }
    }

    let preferences = state.store.upsert_preferences(user.0, &req).await?;

    tracing::info!("preferences updated for user {}", user.0);

    Ok(HttpResponse::Ok().json(PreferencesResponse {
        success: true,
        preferences,
    }))
}
