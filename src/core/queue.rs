use std::sync::Arc;

use chrono::Utc;

use crate::core::eligibility::BirthDateWindow;
use crate::models::CandidateProfile;
use crate::services::{PostgresClient, StoreError};

/// Produces the next batch of swipe candidates for a user.
///
/// Each call re-derives the candidate set from current interaction state, so
/// repeated calls before any new interaction may return the same profiles.
/// Read-only: this component never writes.
#[derive(Clone)]
pub struct SwipeQueueGenerator {
    store: Arc<PostgresClient>,
    batch_size: i64,
}

impl SwipeQueueGenerator {
    pub fn new(store: Arc<PostgresClient>, batch_size: i64) -> Self {
        Self { store, batch_size }
    }

    /// Generate candidates for `user_id`.
    ///
    /// A missing user, missing preferences or a profile without a birth date
    /// all yield an empty batch rather than an error: there is nothing to
    /// serve until the profile is complete.
    pub async fn generate(&self, user_id: i32) -> Result<Vec<CandidateProfile>, StoreError> {
        let Some(user) = self.store.get_user(user_id).await? else {
            return Ok(Vec::new());
        };
        let Some(prefs) = self.store.get_preferences(user_id).await? else {
            return Ok(Vec::new());
        };
        let Some(birth_date) = user.birth_date else {
            return Ok(Vec::new());
        };

        let interacted = self.store.interacted_target_ids(user_id).await?;
        let queued = self.store.queued_target_ids(user_id).await?;
        let excluded = build_exclusions(user_id, &interacted, &queued);

        let window = BirthDateWindow::resolve(
            birth_date,
            prefs.min_age,
            prefs.max_age,
            Utc::now().date_naive(),
        );

        tracing::debug!(
            "swipe queue for user {}: birth dates {}..{}, {} excluded ids",
            user_id,
            window.min_birth_date,
            window.max_birth_date,
            excluded.len()
        );

        self.store
            .find_candidates(&excluded, &window, self.batch_size)
            .await
    }
}

/// Ids that must never be surfaced to `user_id` again: the user themselves,
/// everyone they already interacted with, and everyone already queued.
pub fn build_exclusions(user_id: i32, interacted: &[i32], queued: &[i32]) -> Vec<i32> {
    let mut ids = Vec::with_capacity(1 + interacted.len() + queued.len());
    ids.push(user_id);
    ids.extend_from_slice(interacted);
    for id in queued {
        if !ids.contains(id) {
            ids.push(*id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusions_contain_self() {
        let ids = build_exclusions(1, &[], &[]);
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_exclusions_union_of_sources() {
        let ids = build_exclusions(1, &[2, 3], &[4, 5]);
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exclusions_deduplicate_queued_overlap() {
        let ids = build_exclusions(1, &[2, 3], &[3, 4]);
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
