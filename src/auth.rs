use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::AppState;

/// Claims issued by the auth service. `sub` is the numeric user id; the
/// core trusts it as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub exp: usize,
}

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i32);

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(ApiError::Unauthorized)?;

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let user_id = decode_token(token, &state.jwt_key)?;
    Ok(AuthUser(user_id))
}

/// Verify an HS256 bearer token and return the user id it carries.
pub fn decode_token(token: &str, key: &DecodingKey) -> Result<i32, ApiError> {
    let data = decode::<Claims>(token, key, &Validation::new(Algorithm::HS256))
        .map_err(|_| ApiError::Unauthorized)?;
    Ok(data.claims.sub)
}
