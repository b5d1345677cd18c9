//! Amora Match - swipe queue and interaction service for the Amora dating app
//!
//! This library provides the candidate eligibility filter, the swipe-queue
//! generator and the like/dislike/block interaction engine, including
//! mutual-match detection.

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    age_in_years, build_exclusions, BirthDateWindow, InteractionEngine, InteractionError,
    SwipeQueueGenerator,
};
pub use self::models::{CandidateProfile, InteractionKind, User, UserInteraction, UserPreference};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_library_exports() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(age_in_years(birth, today), 24);
    }
}
