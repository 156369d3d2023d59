use std::io::Write;
use std::path::PathBuf;

use aiadmin::api::{AiChatQuery, AiServiceApi, McpApi, RequestClient};
use aiadmin::config::Config;
use aiadmin::enums::page_switching_animation_options;
use aiadmin::store::{install_ai_store, ProviderStore};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aiadmin", version, about = "AI service admin console client")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the access token
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List AI providers known to the backend
    Providers,
    /// Check the AI service health endpoint
    Health,
    /// Send a message to the assistant and stream the reply
    Chat {
        /// Message text
        message: String,
    },
    /// Show the page switching animation options
    Animations,
}

#[tokio::main]
async fn main() {
    aiadmin::logging::init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Providers => {
            let store = install_ai_store(ProviderStore::from_config(&config)?);
            store.fetch_providers().await;
            println!("{}", serde_json::to_string_pretty(&store.providers())?);
        }
        Command::Health => {
            let api = AiServiceApi::new(RequestClient::new(&config.api)?);
            let health = api.health().await.context("health check failed")?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Command::Chat { message } => {
            let api = McpApi::new(RequestClient::new(&config.api)?);
            let mut stdout = std::io::stdout();
            api.chat_streaming(&AiChatQuery::new(message), |chunk| {
                let _ = stdout.write_all(chunk.as_bytes());
                let _ = stdout.flush();
            })
            .await
            .context("chat request failed")?;
            println!();
        }
        Command::Animations => {
            let current = config.ui.page_animation.value();
            for option in page_switching_animation_options() {
                let marker = if option.value == current { "*" } else { " " };
                println!("{} {:<18} {}", marker, option.value, option.label);
            }
        }
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.api.token = Some(token.clone());
    }
    config.validate()?;
    Ok(config)
}
