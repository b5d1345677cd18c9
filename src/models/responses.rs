use serde::{Deserialize, Serialize};

use crate::models::domain::{CandidateProfile, UserPreference};

/// Response for the swipe queue endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeQueueResponse {
    pub success: bool,
    pub profiles: Vec<CandidateProfile>,
}

/// Response for the like endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

/// Generic success/failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// Response listing matched or liking profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub success: bool,
    pub profiles: Vec<CandidateProfile>,
}

/// Response for preference reads and writes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesResponse {
    pub success: bool,
    pub preferences: UserPreference,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
