use std::sync::Arc;

use futures::StreamExt;

use mentor_bot::channels::{Channel, CliChannel, OutgoingResponse};
use mentor_bot::config::BotConfig;
use mentor_bot::mentor::Mentor;
use mentor_bot::oracle::OllamaOracle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BotConfig::from_env();

    eprintln!("🤖 Mentor Bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Guide: {}", config.guide_path.display());
    eprintln!("   Progress: {}", config.progress_path.display());
    eprintln!("   Type a message and press Enter. Ctrl-D to exit.\n");

    let oracle = Arc::new(OllamaOracle::new(&config.model, config.oracle_timeout));
    let mentor = Mentor::new(config, oracle);

    let channel = CliChannel::new();
    println!("{}\n", mentor.welcome().await);

    // One message fully handled before the next is read: classify, mutate
    // and persist if needed, render, respond.
    let mut messages = channel.start().await?;
    while let Some(msg) = messages.next().await {
        let reply = mentor.handle(&msg.content).await;
        if let Err(e) = channel.respond(&msg, OutgoingResponse::text(reply)).await {
            tracing::error!("Failed to send response: {e}");
        }
    }

    Ok(())
}
