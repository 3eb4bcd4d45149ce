//! Whistler Weather MCP Server: entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use whistler_weather::ForecastPipeline;
use whistler_weather_mcp::config::{
    resolve_response_mode, resolve_timeout, ResponseMode, DEFAULT_TIMEOUT_SECS,
};
use whistler_weather_mcp::prompts::PromptRegistry;
use whistler_weather_mcp::protocol::ProtocolHandler;
use whistler_weather_mcp::resources::ResourceRegistry;
use whistler_weather_mcp::service::WeatherService;
use whistler_weather_mcp::tools::ToolRegistry;
use whistler_weather_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "whistler-weather-mcp",
    about = "MCP server for Whistler Blackcomb snow and weather conditions",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Tool output shape. Falls back to WHISTLER_RESPONSE_MODE, then structured.
    #[arg(long, global = true, value_enum)]
    response_mode: Option<ResponseMode>,

    /// Upstream request timeout in seconds (0 for no explicit timeout).
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "sse")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = "127.0.0.1:3100")]
        addr: String,
    },

    /// Fetch the report once and print the tool output.
    Fetch,

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   whistler-weather-mcp completions bash > ~/.local/share/bash-completion/completions/whistler-weather-mcp
    ///   whistler-weather-mcp completions zsh > ~/.zfunc/_whistler-weather-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

impl Cli {
    fn service(&self) -> Arc<WeatherService> {
        let mode = resolve_response_mode(self.response_mode);
        let pipeline = ForecastPipeline::whistler(resolve_timeout(self.timeout_secs));
        tracing::info!("Upstream: {} ({mode} responses)", pipeline.url());
        Arc::new(WeatherService::new(pipeline, mode))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let default_command = Commands::Serve;
    match cli.command.as_ref().unwrap_or(&default_command) {
        Commands::Serve => {
            let handler = ProtocolHandler::new(cli.service());
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        #[cfg(feature = "sse")]
        Commands::ServeHttp { addr } => {
            use whistler_weather_mcp::transport::SseTransport;

            let handler = ProtocolHandler::new(cli.service());
            let transport = SseTransport::new(handler);
            transport.run(addr).await?;
        }

        Commands::Fetch => {
            let result = cli.service().weather().await;
            for content in &result.content {
                println!("{}", content.as_text());
            }
            if result.is_error == Some(true) {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let capabilities = whistler_weather_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "resources": ResourceRegistry::list_resources().iter().map(|r| r.uri.clone()).collect::<Vec<_>>(),
                "prompts": PromptRegistry::list_prompts().iter().map(|p| p.name.clone()).collect::<Vec<_>>(),
                "upstream": whistler_weather::WHISTLER_WEATHER_URL,
                "response_mode": resolve_response_mode(cli.response_mode).to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                *shell,
                &mut cmd,
                "whistler-weather-mcp",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
