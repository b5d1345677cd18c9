// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Gender, InteractionKind, RelationshipType, User, UserInteraction,
    UserPreference, UserRole, UserStatus,
};
pub use requests::{InteractionRequest, UpdatePreferencesRequest};
pub use responses::{
    ErrorResponse, HealthResponse, LikeResponse, PreferencesResponse, ProfilesResponse,
    StatusResponse, SwipeQueueResponse,
};
