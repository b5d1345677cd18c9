use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Only plain users are served as swipe candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Moderator,
    Admin,
}

/// Account status. Only active users may be candidates or initiate interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Banned,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "relationship_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationshipType {
    Casual,
    Serious,
    Friendship,
    Undecided,
}

/// Directional interaction kind for an ordered (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interaction_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum InteractionKind {
    Like,
    Dislike,
    Block,
}

/// Full user record as stored. Never serialized to clients directly;
/// candidate responses go through [`CandidateProfile`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub role: UserRole,
    pub status: UserStatus,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub last_active_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Profile-safe subset of a user, as surfaced in swipe queues and match lists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CandidateProfile {
    #[serde(rename = "userId")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    #[serde(rename = "lastActiveAt")]
    pub last_active_at: Option<DateTime<Utc>>,
}

/// Per-user dating preferences, one row per user, created lazily on first write.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserPreference {
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "minAge")]
    pub min_age: Option<i32>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<i32>,
    #[serde(rename = "distanceRadius")]
    pub distance_radius: Option<i32>,
    #[serde(rename = "relationshipType")]
    pub relationship_type: Option<RelationshipType>,
}

/// One directional interaction row. At most one per ordered pair;
/// `is_matched` is meaningful only while `kind` is `Like`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserInteraction {
    #[serde(rename = "sourceUserId")]
    pub source_user_id: i32,
    #[serde(rename = "targetUserId")]
    pub target_user_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(rename = "isMatched")]
    pub is_matched: bool,
    #[serde(rename = "viewedAt")]
    pub viewed_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
