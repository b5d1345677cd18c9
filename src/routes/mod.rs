// Route exports
pub mod interactions;
pub mod preferences;
pub mod swipe_queue;

use std::sync::Arc;

use actix_web::web;
use jsonwebtoken::DecodingKey;

use crate::core::{InteractionEngine, SwipeQueueGenerator};
use crate::services::PostgresClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresClient>,
    pub queue: SwipeQueueGenerator,
    pub engine: InteractionEngine,
    pub jwt_key: DecodingKey,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(swipe_queue::configure)
            .configure(interactions::configure)
            .configure(preferences::configure),
    );
}
