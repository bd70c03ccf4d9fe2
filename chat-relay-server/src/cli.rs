use std::net::{IpAddr, SocketAddr};

use clap::{ArgAction, Args, Parser, Subcommand};

use chat_relay_types::RelayMode;

#[derive(Parser)]
#[command(
    name = "chat-relay",
    about = "chat-relay - one POST endpoint in front of DeepSeek, Gemini and ChatGPT",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub relay: RelayArgs,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the relay (default if no command specified)")]
    Serve,

    #[command(about = "Show the resolved provider routes")]
    Routes,

    #[command(about = "Send one message to a running relay and print the reply")]
    Ask(AskArgs),
}

/// Relay settings; every flag falls back to its environment variable.
#[derive(Args, Clone)]
pub struct RelayArgs {
    #[arg(short, long, env = "CHAT_RELAY_PORT", default_value = "3000", global = true)]
    pub port: u16,

    #[arg(long, env = "CHAT_RELAY_BIND", default_value = "127.0.0.1", global = true)]
    pub bind: IpAddr,

    #[arg(
        long,
        env = "CHAT_RELAY_MODE",
        default_value = "gated",
        global = true,
        help = "gated: password required, unknown models rejected; open: no password, unknown models use deepseek"
    )]
    pub mode: RelayMode,

    #[arg(long, env = "ACCESS_PASSWORD", hide_env_values = true, global = true)]
    pub access_password: Option<String>,

    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true, global = true)]
    pub deepseek_api_key: Option<String>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "DEEPSEEK_API_URL", global = true)]
    pub deepseek_api_url: Option<String>,

    #[arg(long, env = "GEMINI_API_URL", global = true)]
    pub gemini_api_url: Option<String>,

    #[arg(long, env = "OPENAI_API_URL", global = true)]
    pub openai_api_url: Option<String>,

    #[arg(
        long,
        env = "CHAT_RELAY_REQUEST_TIMEOUT",
        default_value = "120",
        global = true,
        help = "Outbound request timeout in seconds (5-3600)"
    )]
    pub request_timeout: u64,

    #[arg(
        long,
        env = "CHAT_RELAY_EXPOSE_UPSTREAM_ERRORS",
        default_value_t = true,
        action = ArgAction::Set,
        global = true,
        help = "Return raw upstream error bodies; false returns a sanitized category"
    )]
    pub expose_upstream_errors: bool,

    #[arg(
        long,
        env = "CHAT_RELAY_CORS_ORIGINS",
        value_delimiter = ',',
        global = true,
        help = "Allowed browser origins, comma-separated (empty allows any)"
    )]
    pub cors_origins: Vec<String>,
}

impl RelayArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[derive(Args)]
pub struct AskArgs {
    #[arg(help = "Message to send")]
    pub message: String,

    #[arg(short, long, default_value = "deepseek", help = "deepseek, gemini or chatgpt")]
    pub model: String,

    #[arg(long, env = "ACCESS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "CHAT_RELAY_URL", help = "Relay base URL (default: http://<bind>:<port>)")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "chat-relay",
            "--mode",
            "open",
            "--port",
            "8080",
            "--expose-upstream-errors",
            "false",
            "--cors-origins",
            "https://a.example,https://b.example",
            "routes",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Routes)));
        assert_eq!(cli.relay.mode, RelayMode::Open);
        assert_eq!(cli.relay.port, 8080);
        assert!(!cli.relay.expose_upstream_errors);
        assert_eq!(cli.relay.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_ask_args() {
        let cli = Cli::try_parse_from(["chat-relay", "ask", "hello", "-m", "gemini", "--password", "pw"])
            .unwrap();
        match cli.command {
            Some(Commands::Ask(args)) => {
                assert_eq!(args.message, "hello");
                assert_eq!(args.model, "gemini");
                assert_eq!(args.password.as_deref(), Some("pw"));
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["chat-relay", "--mode", "strict"]).is_err());
    }
}
