//! chat-relay - Headless Relay Daemon
//!
//! Accepts `POST /api/chat` with `{message, modelType, password?}`, forwards the message
//! to DeepSeek, Gemini or ChatGPT as a single-turn chat completion, and answers with
//! `{reply}` or `{error}`.
//!
//! Access via: http://localhost:3000/api/chat

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;
mod config;
mod router;
mod server_utils;
#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => commands::serve(&cli.relay).await,
        Some(Commands::Routes) => commands::print_routes(&cli.relay),
        Some(Commands::Ask(args)) => commands::ask(args, &cli.relay).await,
    }
}
