//! Rehacchi — conversational front desk for the library reference
//! database and Japanese Wikipedia.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod repl;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = rehacchi_core::BotConfig::from_env();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--repl" | "repl" => {
                let mode = if args.iter().any(|a| a == "--voice") {
                    repl::ReplMode::Voice
                } else {
                    repl::ReplMode::Text
                };
                let pipeline = rehacchi_runtime::TalkPipeline::new(&config)
                    .map_err(|e| anyhow::anyhow!("Failed to build pipeline: {}", e))?;
                repl::run(&pipeline, mode).await?;
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Rehacchi — reference-desk chat bot");
                println!();
                println!("Usage: rehacchi [command]");
                println!();
                println!("Commands:");
                println!("  (none)           Start the server");
                println!("  repl [--voice]   Talk to the bot on the console");
                println!("  help             Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'rehacchi help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let port = config.port;
    let pipeline = rehacchi_runtime::TalkPipeline::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to build pipeline: {}", e))?;
    let state = Arc::new(AppState::new(config, pipeline));

    if state.notifier.is_enabled() {
        info!("Slack notifier posting to {}", state.config.slack.channel);
    } else {
        info!("Slack notifier disabled (no API token), links stay in the reply only");
    }

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Rehacchi server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
