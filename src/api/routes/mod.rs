//! API routes module

pub mod chat;

use std::sync::{Arc, RwLock};

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Liveness check
async fn home() -> Json<Value> {
    Json(json!({"message": "Study Bot AI with memory is running"}))
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home))
        // Chat routes
        .nest("/chat", chat::router())
}
