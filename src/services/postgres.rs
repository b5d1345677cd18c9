use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::core::eligibility::BirthDateWindow;
use crate::models::{
    CandidateProfile, InteractionKind, UpdatePreferencesRequest, User, UserInteraction,
    UserPreference,
};

/// Errors that can occur when talking to PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Pooled PostgreSQL client owning every query in the service.
///
/// Constructed once at startup and shared by reference; the swipe-queue
/// generator only reads through it, the interaction engine is the sole
/// writer of interaction rows.
pub struct PostgresClient {
    pool: PgPool,
}

/// Advisory-lock key for the unordered pair {a, b}. Taking this lock at the
/// start of every pair-mutating transaction serializes concurrent mutual
/// likes (and dislikes/blocks) on the same two users, so neither side can
/// observe the other's row mid-flight.
fn pair_lock_key(a: i32, b: i32) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    ((lo as i64) << 32) | (hi as i64 & 0xffff_ffff)
}

impl PostgresClient {
    /// Create a new client from a connection string and run migrations.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new client from settings values.
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Shared connection pool, for callers that need ad-hoc queries
    /// (integration tests, operational tooling).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, birth_date, role, status, gender, bio,
                   location_lat, location_lng, last_active_at, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_preferences(
        &self,
        user_id: i32,
    ) -> Result<Option<UserPreference>, StoreError> {
        let prefs = sqlx::query_as::<_, UserPreference>(
            r#"
            SELECT user_id, min_age, max_age, distance_radius, relationship_type
            FROM user_preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(prefs)
    }

    /// Upsert preferences for a user. The row is created lazily on first
    /// write; absent fields in the update keep their stored value.
    pub async fn upsert_preferences(
        &self,
        user_id: i32,
        update: &UpdatePreferencesRequest,
    ) -> Result<UserPreference, StoreError> {
        let prefs = sqlx::query_as::<_, UserPreference>(
            r#"
            INSERT INTO user_preferences
                (user_id, min_age, max_age, distance_radius, relationship_type)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                min_age = COALESCE($2, user_preferences.min_age),
                max_age = COALESCE($3, user_preferences.max_age),
                distance_radius = COALESCE($4, user_preferences.distance_radius),
                relationship_type = COALESCE($5, user_preferences.relationship_type),
                updated_at = NOW()
            RETURNING user_id, min_age, max_age, distance_radius, relationship_type
            "#,
        )
        .bind(user_id)
        .bind(update.min_age)
        .bind(update.max_age)
        .bind(update.distance_radius)
        .bind(update.relationship_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(prefs)
    }

    /// Ids of every user the given user has an interaction row toward,
    /// regardless of type.
    pub async fn interacted_target_ids(&self, user_id: i32) -> Result<Vec<i32>, StoreError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT target_user_id FROM user_interactions WHERE source_user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Ids already present in the user's swipe queue.
    pub async fn queued_target_ids(&self, user_id: i32) -> Result<Vec<i32>, StoreError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT target_user_id FROM swipe_queue WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Eligible candidates: active plain users born inside the window and
    /// not in the exclusion set. Stable storage order, capped at `limit`.
    pub async fn find_candidates(
        &self,
        excluded_ids: &[i32],
        window: &BirthDateWindow,
        limit: i64,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let profiles = sqlx::query_as::<_, CandidateProfile>(
            r#"
            SELECT id, name, birth_date, gender, bio, last_active_at
            FROM users
            WHERE NOT (id = ANY($1))
              AND role = 'USER'
              AND status = 'ACTIVE'
              AND birth_date BETWEEN $2 AND $3
            ORDER BY id
            LIMIT $4
            "#,
        )
        .bind(excluded_ids)
        .bind(window.min_birth_date)
        .bind(window.max_birth_date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    pub async fn get_interaction(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<Option<UserInteraction>, StoreError> {
        let row = sqlx::query_as::<_, UserInteraction>(
            r#"
            SELECT source_user_id, target_user_id, type, is_matched,
                   viewed_at, created_at, updated_at
            FROM user_interactions
            WHERE source_user_id = $1 AND target_user_id = $2
            "#,
        )
        .bind(source_user_id)
        .bind(target_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Upsert the forward row to LIKE and flag both rows matched when the
    /// reverse row is also LIKE. The whole sequence runs in one transaction
    /// holding the pair's advisory lock, so two concurrent mutual likes
    /// cannot both read "no match yet": either both rows end up flagged or
    /// the like simply records with no match.
    pub async fn like_user(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(pair_lock_key(source_user_id, target_user_id))
            .execute(&mut *tx)
            .await?;

        // Re-liking overwrites the type but leaves is_matched untouched
        sqlx::query(
            r#"
            INSERT INTO user_interactions (source_user_id, target_user_id, type)
            VALUES ($1, $2, 'LIKE')
            ON CONFLICT (source_user_id, target_user_id)
            DO UPDATE SET type = 'LIKE', updated_at = NOW()
            "#,
        )
        .bind(source_user_id)
        .bind(target_user_id)
        .execute(&mut *tx)
        .await?;

        let reverse_kind = sqlx::query_scalar::<_, InteractionKind>(
            "SELECT type FROM user_interactions WHERE source_user_id = $1 AND target_user_id = $2",
        )
        .bind(target_user_id)
        .bind(source_user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let is_match = reverse_kind == Some(InteractionKind::Like);
        if is_match {
            sqlx::query(
                r#"
                UPDATE user_interactions
                SET is_matched = TRUE, updated_at = NOW()
                WHERE (source_user_id = $1 AND target_user_id = $2)
                   OR (source_user_id = $2 AND target_user_id = $1)
                "#,
            )
            .bind(source_user_id)
            .bind(target_user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(is_match)
    }

    /// Upsert the forward row to DISLIKE or BLOCK and clear the match flag
    /// on both directions, in one transaction under the pair lock. A prior
    /// match is dissolved for both users, never just one.
    pub async fn set_interaction(
        &self,
        source_user_id: i32,
        target_user_id: i32,
        kind: InteractionKind,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(pair_lock_key(source_user_id, target_user_id))
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO user_interactions (source_user_id, target_user_id, type, is_matched)
            VALUES ($1, $2, $3, FALSE)
            ON CONFLICT (source_user_id, target_user_id)
            DO UPDATE SET type = EXCLUDED.type, is_matched = FALSE, updated_at = NOW()
            "#,
        )
        .bind(source_user_id)
        .bind(target_user_id)
        .bind(kind)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE user_interactions
            SET is_matched = FALSE, updated_at = NOW()
            WHERE source_user_id = $1 AND target_user_id = $2 AND is_matched
            "#,
        )
        .bind(target_user_id)
        .bind(source_user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Delete the BLOCK row for the pair, if any. The type filter means a
    /// LIKE or DISLIKE row for the same pair survives an unblock, and a
    /// missing row is simply zero rows affected.
    pub async fn unblock_user(
        &self,
        source_user_id: i32,
        target_user_id: i32,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_interactions
            WHERE source_user_id = $1 AND target_user_id = $2 AND type = 'BLOCK'
            "#,
        )
        .bind(source_user_id)
        .bind(target_user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Profiles the user is mutually matched with.
    pub async fn matched_profiles(
        &self,
        user_id: i32,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let profiles = sqlx::query_as::<_, CandidateProfile>(
            r#"
            SELECT u.id, u.name, u.birth_date, u.gender, u.bio, u.last_active_at
            FROM user_interactions i
            JOIN users u ON u.id = i.target_user_id
            WHERE i.source_user_id = $1 AND i.is_matched
            ORDER BY i.updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Profiles that have liked the user and are not yet matched from the
    /// user's side.
    pub async fn liked_by_profiles(
        &self,
        user_id: i32,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let profiles = sqlx::query_as::<_, CandidateProfile>(
            r#"
            SELECT u.id, u.name, u.birth_date, u.gender, u.bio, u.last_active_at
            FROM user_interactions i
            JOIN users u ON u.id = i.source_user_id
            WHERE i.target_user_id = $1 AND i.type = 'LIKE'
            ORDER BY i.updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_lock_key_symmetric() {
        assert_eq!(pair_lock_key(3, 9), pair_lock_key(9, 3));
    }

    #[test]
    fn test_pair_lock_key_distinct_pairs_differ() {
        assert_ne!(pair_lock_key(1, 2), pair_lock_key(1, 3));
        assert_ne!(pair_lock_key(1, 2), pair_lock_key(2, 3));
    }
}
