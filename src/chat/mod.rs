//! Conversation history and prompt assembly for the study bot

pub mod db;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::groq::{Message, Role};

/// Number of stored turns replayed into each prompt.
pub const HISTORY_LIMIT: usize = 10;

/// One user message and the corresponding assistant reply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user_id: String,
    pub user_message: String,
    pub bot_reply: String,
    pub timestamp: DateTime<Utc>,
}

/// Assemble the ordered prompt for the next completion. Takes the
/// stored turns newest first, as returned by
/// [`db::find_recent_turns`], and replays them oldest first after the
/// system message. The new user message goes last.
pub fn build_transcript(
    system_message: &str,
    recent_turns: &[ChatTurn],
    user_message: &str,
) -> Vec<Message> {
    let mut transcript = vec![Message::new(Role::System, system_message)];

    for turn in recent_turns.iter().rev() {
        transcript.push(Message::new(Role::User, &turn.user_message));
        transcript.push(Message::new(Role::Assistant, &turn.bot_reply));
    }

    transcript.push(Message::new(Role::User, user_message));
    transcript
}
