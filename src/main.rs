use clap::{Parser, Subcommand};
use std::sync::Arc;

use aurora_relay::application::errors::{BotError, ConfigError};
use aurora_relay::application::messaging::CommandDispatcher;
use aurora_relay::application::services::CommandService;
use aurora_relay::infrastructure::adapters::console::ConsoleAdapter;
use aurora_relay::infrastructure::adapters::discord::DiscordAdapter;
use aurora_relay::infrastructure::auroras::AurorasClient;
use aurora_relay::infrastructure::config::{AdapterChoice, Config};

#[derive(Parser)]
#[command(name = "aurora-relay")]
#[command(about = "Relays Auroras.live space-weather data to Discord", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Discord bot token (overrides config and DISCORD_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Version => {
            println!("aurora-relay v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    let config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env()
}

fn build_dispatcher(config: &Config) -> Result<CommandDispatcher, BotError> {
    let api = AurorasClient::new(&config.api)
        .map_err(|e| BotError::Config(ConfigError::InvalidValue(e.to_string())))?;
    tracing::info!("Using space-weather API at {}", api.base_url());

    let commands = CommandService::new(Arc::new(api), config.bot.prefix.clone());
    Ok(CommandDispatcher::new(config.bot.prefix.clone(), commands))
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path);
    config.validate()?;
    let adapter = config.select_adapter(token_override)?;

    tracing::info!("Starting {} (prefix `{}`)", config.bot.name, config.bot.prefix);

    let dispatcher = build_dispatcher(&config)?;
    let rt = tokio::runtime::Runtime::new().map_err(|e| BotError::Internal(e.to_string()))?;

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| BotError::Internal("failed to install rustls ring provider".to_string()))?;

    match adapter {
        AdapterChoice::Discord(token) => {
            rt.block_on(DiscordAdapter::new(token, config.bot.name.clone()).run(dispatcher))
        }
        AdapterChoice::Console => {
            tracing::warn!("No Discord token configured, running console bot (dev mode)");
            rt.block_on(ConsoleAdapter::new(config.bot.name.clone()).run(dispatcher))
        }
    }
}

fn init_config(config_path: &str) -> Result<(), BotError> {
    if std::path::Path::new(config_path).exists() {
        return Err(ConfigError::InvalidValue(format!("{} already exists", config_path)).into());
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(config_path, yaml).map_err(ConfigError::from)?;
    println!("Wrote default config to {}", config_path);
    Ok(())
}
