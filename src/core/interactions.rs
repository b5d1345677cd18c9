use std::sync::Arc;

use thiserror::Error;

use crate::models::{InteractionKind, UserStatus};
use crate::services::{PostgresClient, StoreError};

/// Why an interaction was refused or failed. Validation variants are
/// client faults detected before any write; `Store` wraps data-layer
/// failures and propagates untouched.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Users cannot interact with themselves")]
    SelfInteraction,
    #[error("Target user not found")]
    TargetNotFound,
    #[error("User not found or not active")]
    SourceNotEligible,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Source and target must be distinct users.
pub fn check_distinct(source_user_id: i32, target_user_id: i32) -> Result<(), InteractionError> {
    if source_user_id == target_user_id {
        return Err(InteractionError::SelfInteraction);
    }
    Ok(())
}

/// Transitions the interaction state between two users and maintains the
/// mutual-match invariant: whenever both directions of a pair are LIKE,
/// both rows carry `is_matched = true`, and a dislike or block from either
/// side clears the flag on both rows.
#[derive(Clone)]
pub struct InteractionEngine {
    store: Arc<PostgresClient>,
}

impl InteractionEngine {
    pub fn new(store: Arc<PostgresClient>) -> Self {
        Self { store }
    }

    /// Shared preconditions for every transition, checked before any write:
    /// distinct users, target exists, source exists and is active.
    async fn validate_pair(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<(), InteractionError> {
        check_distinct(source_user_id, target_user_id)?;

        if self.store.get_user(target_user_id).await?.is_none() {
            return Err(InteractionError::TargetNotFound);
        }

        match self.store.get_user(source_user_id).await? {
            Some(user) if user.status == UserStatus::Active => Ok(()),
            _ => Err(InteractionError::SourceNotEligible),
        }
    }

    /// Record a like and detect a mutual match. Returns whether the like
    /// completed a match. Re-liking is idempotent and reports the same
    /// boolean as long as the reverse row has not changed.
    pub async fn like(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<bool, InteractionError> {
        self.validate_pair(source_user_id, target_user_id).await?;
        let is_match = self.store.like_user(source_user_id, target_user_id).await?;
        if is_match {
            tracing::info!("users {} and {} matched", source_user_id, target_user_id);
        }
        Ok(is_match)
    }

    pub async fn dislike(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<(), InteractionError> {
        self.validate_pair(source_user_id, target_user_id).await?;
        self.store
            .set_interaction(source_user_id, target_user_id, InteractionKind::Dislike)
            .await?;
        Ok(())
    }

    pub async fn block(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<(), InteractionError> {
        self.validate_pair(source_user_id, target_user_id).await?;
        self.store
            .set_interaction(source_user_id, target_user_id, InteractionKind::Block)
            .await?;
        Ok(())
    }

    /// Remove a block. Succeeds as a no-op when no BLOCK row exists; a
    /// LIKE or DISLIKE row for the pair is never touched.
    pub async fn unblock(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<(), InteractionError> {
        self.validate_pair(source_user_id, target_user_id).await?;
        let removed = self
            .store
            .unblock_user(source_user_id, target_user_id)
            .await?;
        if removed == 0 {
            tracing::debug!(
                "unblock {} -> {}: no block row, nothing to do",
                source_user_id,
                target_user_id
            );
        }
        Ok(())
    }
}
