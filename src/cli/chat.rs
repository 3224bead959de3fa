use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::AppConfig;
use crate::groq::{Message, Role, chat};

/// Interactive chat session. History lives in memory for the
/// lifetime of the process, unlike the API which replays turns from
/// the database.
pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");
    let config = AppConfig::default();

    let mut history = vec![Message::new(Role::System, &config.system_message)];

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                history.push(Message::new(Role::User, line.as_str()));
                let reply = chat(
                    &history,
                    &config.groq_api_hostname,
                    &config.groq_api_key,
                    &config.groq_model,
                )
                .await?;
                println!("{}", reply);
                history.push(Message::new(Role::Assistant, &reply));
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
