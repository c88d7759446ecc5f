use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use userdir::commands::{add_user, browse, delete_user, edit_user, list_users, EditOptions};
use userdir::core::load_config;
use userdir::models::FormData;

/// userdir - browse and edit a user directory served by a REST API
#[derive(Parser)]
#[command(name = "userdir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to userdir.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the users collection URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive directory view (default)
    Browse,

    /// Fetch and print all users
    List,

    /// Create a user
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Update a user; fields not given keep their current value
    Edit {
        /// User id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User id
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Could not determine the current directory")?;
    let config = load_config(&working_dir, cli.config.as_deref(), cli.url, cli.timeout)
        .context("Could not load configuration")?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse(&config).await?,
        Commands::List => list_users(&config).await?,
        Commands::Add { name, email, phone } => {
            add_user(&config, FormData { name, email, phone }).await?
        }
        Commands::Edit {
            id,
            name,
            email,
            phone,
        } => edit_user(&config, &id, EditOptions { name, email, phone }).await?,
        Commands::Delete { id, yes } => delete_user(&config, &id, yes).await?,
    }

    Ok(())
}
