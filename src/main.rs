use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use reviews_admin::config::Config;

#[derive(Parser)]
#[command(name = "reviews-admin")]
#[command(about = "Product reviews admin - auto publish and email notification settings")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.reviews-admin/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// GraphQL endpoint (overrides config and REVIEWS_ADMIN_ENDPOINT)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the settings window
    Gui,

    /// Fetch and print the current settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more settings
    Update {
        /// Publish spam-checked reviews automatically
        #[arg(long)]
        auto_publish: Option<bool>,

        /// Send an email for each new review
        #[arg(long)]
        email_notifications: Option<bool>,

        /// Address that receives review notifications
        #[arg(long)]
        email: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Config is only needed by commands that talk to the endpoint
    let config_path = cli.config;
    let endpoint = cli.endpoint;
    let load_config = || -> Result<Config> {
        let mut config = Config::resolve(config_path.as_deref())?;
        config.apply_overrides(endpoint.clone(), None);
        Ok(config)
    };

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path.as_deref(), force).await?;
        }
        Some(Commands::Show { json }) => {
            cli::show::show_command(&load_config()?, json).await?;
        }
        Some(Commands::Update {
            auto_publish,
            email_notifications,
            email,
        }) => {
            let changes = cli::update::SettingsChanges {
                auto_publish,
                email_notifications,
                email,
            };
            cli::update::update_command(&load_config()?, changes).await?;
        }
        Some(Commands::Gui) | None => {
            // Default: open the settings window
            reviews_admin::gui::run_gui(load_config()?)?;
        }
    }

    Ok(())
}
