use std::env;

/// Persona used as the first message of every prompt unless
/// overridden with `STUDYBOT_SYSTEM_MESSAGE`.
pub const SYSTEM_PROMPT: &str = "\
You are StudyBot, an AI assistant designed to help students learn.

Your responsibilities:
- Help with academic subjects like mathematics, science, history, programming, and general education.
- Provide accurate and clear explanations.
- Explain concepts step-by-step when needed.
- Use simple language that students can understand.
- Encourage learning and curiosity.

If a user asks something unrelated to studying, politely guide them back to educational topics.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub groq_api_hostname: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub system_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let db_path =
            env::var("STUDYBOT_DB_PATH").unwrap_or_else(|_| "./studybot.db".to_string());
        let groq_api_hostname = env::var("STUDYBOT_LLM_HOST")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());
        let groq_api_key =
            env::var("GROQ_API_KEY").unwrap_or_else(|_| "thiswontworkforgroq".to_string());
        let groq_model =
            env::var("STUDYBOT_LLM_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".to_string());
        let system_message =
            env::var("STUDYBOT_SYSTEM_MESSAGE").unwrap_or_else(|_| SYSTEM_PROMPT.to_string());

        Self {
            db_path,
            groq_api_hostname,
            groq_api_key,
            groq_model,
            system_message,
        }
    }
}
