//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::Utc;

use super::public;
use crate::api::state::AppState;
use crate::chat::{
    ChatTurn, HISTORY_LIMIT, build_transcript,
    db::{find_recent_turns, insert_chat_turn},
};
use crate::groq;

type SharedState = Arc<RwLock<AppState>>;

/// Run the next turn for a user: replay their recent history into the
/// prompt, ask the LLM for a reply, and persist the new turn.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatResponse>, crate::api::public::ApiError> {
    let (db, config) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (shared_state.db.clone(), shared_state.config.clone())
    };

    let recent_turns = find_recent_turns(&db, &payload.user_id, HISTORY_LIMIT).await?;
    let transcript = build_transcript(&config.system_message, &recent_turns, &payload.message);

    let bot_reply = groq::chat(
        &transcript,
        &config.groq_api_hostname,
        &config.groq_api_key,
        &config.groq_model,
    )
    .await?;

    let turn = ChatTurn {
        user_id: payload.user_id,
        user_message: payload.message,
        bot_reply,
        timestamp: Utc::now(),
    };
    insert_chat_turn(&db, &turn).await?;

    Ok(axum::Json(public::ChatResponse {
        user_id: turn.user_id,
        user_message: turn.user_message,
        bot_reply: turn.bot_reply,
    }))
}

/// Get the stored turns that would seed a user's next prompt, oldest
/// first. Unknown users get an empty history.
async fn chat_history(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<axum::Json<public::ChatHistoryResponse>, crate::api::public::ApiError> {
    let db = state
        .read()
        .expect("Unable to read shared state")
        .db
        .clone();

    let mut turns = find_recent_turns(&db, &user_id, HISTORY_LIMIT).await?;
    turns.reverse();

    Ok(axum::Json(public::ChatHistoryResponse { turns }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{user_id}", get(chat_history))
}
