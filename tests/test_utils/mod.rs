//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tokio_rusqlite::Connection;

use studybot::api::AppState;
use studybot::api::app;
use studybot::core::AppConfig;
use studybot::core::db::{async_db, initialize_db};

/// Creates a test application router backed by a fresh database in a
/// temporary directory, with the LLM API pointed at
/// `llm_api_hostname` (usually a mockito server). Also returns the
/// database handle so tests can seed and inspect turns.
pub async fn test_app_with_db(llm_api_hostname: &str) -> (Router, Connection) {
    let dir = tempfile::tempdir()
        .expect("Failed to create temp dir")
        .keep();
    let db_path = dir.join("studybot.db");

    let db = async_db(db_path.to_str().unwrap())
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .expect("Failed to initialize db");

    let app_config = AppConfig {
        db_path: db_path.display().to_string(),
        groq_api_hostname: llm_api_hostname.to_string(),
        groq_api_key: String::from("test-api-key"),
        groq_model: String::from("llama-3.1-8b-instant"),
        system_message: String::from("You are a helpful study assistant."),
    };
    let app_state = AppState::new(db.clone(), app_config);
    let app = app(Arc::new(RwLock::new(app_state)));

    (app, db)
}

#[allow(dead_code)]
pub async fn test_app(llm_api_hostname: &str) -> Router {
    test_app_with_db(llm_api_hostname).await.0
}

/// Collects a response body into a string
#[allow(dead_code)]
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf8")
}
