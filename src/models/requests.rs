use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::RelationshipType;

/// Body for like/dislike/block/unblock requests. The source user comes
/// from the bearer token, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InteractionRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: i32,
}

/// Partial preference update. Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePreferencesRequest {
    #[validate(range(min = 18, message = "Minimum age must be at least 18"))]
    #[serde(default, alias = "min_age", rename = "minAge")]
    pub min_age: Option<i32>,
    #[validate(range(
        min = 18,
        max = 100,
        message = "Maximum age must be between 18 and 100"
    ))]
    #[serde(default, alias = "max_age", rename = "maxAge")]
    pub max_age: Option<i32>,
    #[validate(range(
        min = 0,
        max = 1000,
        message = "Distance radius must be between 0 and 1000"
    ))]
    #[serde(default, alias = "distance_radius", rename = "distanceRadius")]
    pub distance_radius: Option<i32>,
    #[serde(default, alias = "relationship_type", rename = "relationshipType")]
    pub relationship_type: Option<RelationshipType>,
}

impl UpdatePreferencesRequest {
    /// Cross-field rule the derive cannot express: when both bounds are
    /// present, the maximum must exceed the minimum.
    pub fn check_age_bounds(&self) -> Result<(), &'static str> {
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if max <= min {
                return Err("Maximum age must be greater than minimum age");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_request_rejects_zero_id() {
        let req = InteractionRequest { target_user_id: 0 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_preferences_reject_underage_min() {
        let req = UpdatePreferencesRequest {
            min_age: Some(17),
            max_age: None,
            distance_radius: None,
            relationship_type: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_preferences_reject_inverted_bounds() {
        let req = UpdatePreferencesRequest {
            min_age: Some(30),
            max_age: Some(25),
            distance_radius: None,
            relationship_type: None,
        };
        assert!(req.validate().is_ok());
        assert!(req.check_age_bounds().is_err());
    }

    #[test]
    fn test_preferences_equal_bounds_rejected() {
        let req = UpdatePreferencesRequest {
            min_age: Some(25),
            max_age: Some(25),
            distance_radius: None,
            relationship_type: None,
        };
        assert!(req.check_age_bounds().is_err());
    }

    #[test]
    fn test_preferences_single_bound_ok() {
        let req = UpdatePreferencesRequest {
            min_age: None,
            max_age: Some(40),
            distance_radius: Some(100),
            relationship_type: Some(RelationshipType::Serious),
        };
        assert!(req.validate().is_ok());
        assert!(req.check_age_bounds().is_ok());
    }

    #[test]
    fn test_interaction_request_camel_case_body() {
        let req: InteractionRequest = serde_json::from_str(r#"{"targetUserId": 42}"#).unwrap();
        assert_eq!(req.target_user_id, 42);
    }

    #[test]
    fn test_interaction_request_rejects_string_id() {
        // Ids must be numbers, not numeric strings
        let result = serde_json::from_str::<InteractionRequest>(r#"{"targetUserId": "42"}"#);
        assert!(result.is_err());
    }
}
