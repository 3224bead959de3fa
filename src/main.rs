use anyhow::Result;
use studybot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
