//! SQLite connection handling and schema setup

use anyhow::Result;
use tokio_rusqlite::Connection;

/// Open an async connection to the sqlite database at `db_path`.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let db = Connection::open(db_path).await?;
    Ok(db)
}

/// Create the schema if it doesn't already exist. Safe to run on
/// every startup.
pub fn initialize_db(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS chat_turn (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            user_message TEXT NOT NULL,
            bot_reply TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_chat_turn_user_timestamp
            ON chat_turn (user_id, timestamp);
        ",
    )?;
    Ok(())
}
