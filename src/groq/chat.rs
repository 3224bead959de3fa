use anyhow::{Error, Result, bail};

use crate::groq::{Message, completion};

/// Runs the next turn in chat by passing the transcript to the LLM
/// for the next response.
pub async fn chat(
    history: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let resp = completion(history, api_hostname, api_key, model).await?;

    match resp["choices"][0]["message"]["content"].as_str() {
        Some(msg) => Ok(msg.to_string()),
        None => bail!("No message received. Resp:\n\n{}", resp),
    }
}
