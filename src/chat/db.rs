//! Database queries for chat turns
use anyhow::{Error, Result};
use tokio_rusqlite::{Connection, params};

use super::ChatTurn;

pub async fn insert_chat_turn(db: &Connection, turn: &ChatTurn) -> Result<usize, Error> {
    let turn = turn.to_owned();
    let result = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "INSERT INTO chat_turn (user_id, user_message, bot_reply, timestamp)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let result = stmt.execute(params![
                turn.user_id,
                turn.user_message,
                turn.bot_reply,
                turn.timestamp
            ])?;
            Ok(result)
        })
        .await?;

    Ok(result)
}

/// The most recent turns for a user, newest first. The insert id
/// breaks ties between turns written within the same timestamp.
pub async fn find_recent_turns(
    db: &Connection,
    user_id: &str,
    limit: usize,
) -> Result<Vec<ChatTurn>, Error> {
    let user_id = user_id.to_owned();
    let turns = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT user_id, user_message, bot_reply, timestamp
                FROM chat_turn
                WHERE user_id = ?1
                ORDER BY timestamp DESC, id DESC
                LIMIT ?2
                ",
            )?;
            let turns = stmt
                .query_map(params![user_id, limit], |row| {
                    Ok(ChatTurn {
                        user_id: row.get(0)?,
                        user_message: row.get(1)?,
                        bot_reply: row.get(2)?,
                        timestamp: row.get(3)?,
                    })
                })?
                .filter_map(Result::ok)
                .collect::<Vec<_>>();
            Ok(turns)
        })
        .await?;

    Ok(turns)
}
