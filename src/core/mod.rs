mod config;
pub mod db;
pub use config::{AppConfig, SYSTEM_PROMPT};
