//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::ChatTurn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub user_id: String,
    pub user_message: String,
    pub bot_reply: String,
}

#[derive(Serialize)]
pub struct ChatHistoryResponse {
    pub turns: Vec<ChatTurn>,
}
