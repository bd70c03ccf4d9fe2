use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use tracing::info;

use chat_relay_client::{ChatRequest, ClientConfig, RelayClient};
use chat_relay_core::common::build_http_client;
use chat_relay_core::{HttpTransport, RelayState, RouteTable, CHAT_PATH};
use chat_relay_types::RelayConfig;

use crate::cli::{AskArgs, RelayArgs};
use crate::{config, router, server_utils};

pub async fn serve(args: &RelayArgs) -> Result<()> {
    let config = config::load(args)?;
    info!("🚀 chat-relay {} starting in {} mode", env!("CARGO_PKG_VERSION"), config.mode);

    let http_client = build_http_client(config.request_timeout).map_err(anyhow::Error::msg)?;
    let state = RelayState::new(&config, Arc::new(HttpTransport::new(http_client)));

    for route in state.routes.iter() {
        if route.api_url != route.provider.default_api_url() {
            info!("🔧 {} endpoint overridden via {}", route.provider, route.provider.api_url_env());
        }
        info!("🔀 {} -> {} ({})", route.provider, route.api_url, route.model_name);
    }

    let app = router::build_router(state, &config.cors_origins);
    let listener = server_utils::create_listener(args.socket_addr()).await?;

    info!("🌐 Relay listening on http://{}{}", listener.local_addr()?, CHAT_PATH);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("✅ Server stopped");
    Ok(())
}

pub fn print_routes(args: &RelayArgs) -> Result<()> {
    let config = args.to_relay_config();
    println!("{}", render_routes(&config));

    if let Err(e) = config.validate_for_startup() {
        println!("\n{} {}", "⚠".yellow(), e.to_string().yellow());
    }
    Ok(())
}

fn render_routes(config: &RelayConfig) -> String {
    let routes = RouteTable::from_config(&config.providers);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["modelType", "Model", "URL", "Key"]);

    for route in routes.iter() {
        let key = if route.has_api_key() {
            Cell::new("set").fg(Color::Green)
        } else {
            Cell::new(format!("missing ({})", route.provider.api_key_env())).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(route.provider.as_str()),
            Cell::new(route.model_name),
            Cell::new(&route.api_url),
            key,
        ]);
    }

    format!("Mode: {}\n{table}", config.mode)
}

pub async fn ask(args: AskArgs, relay: &RelayArgs) -> Result<()> {
    let base_url = args.url.unwrap_or_else(|| format!("http://{}", relay.socket_addr()));
    let client = RelayClient::new(ClientConfig {
        base_url,
        timeout_secs: relay.request_timeout.saturating_add(10),
    })?;

    let mut request = ChatRequest::new(args.message, args.model);
    request.password = args.password;

    let reply = client.chat(request).await?;
    println!("{}", reply.reply);
    Ok(())
}
