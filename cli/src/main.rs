//! items: command-line shell over the items API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use item_core::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use item_core::{ClientConfig, ItemApi, ItemPayload};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "items")]
#[command(about = "List, create, update and delete items")]
#[command(version)]
struct Cli {
    /// Backend origin, e.g. http://localhost:8081
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    List,
    /// Show one item
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Create an item
    Create {
        title: String,
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Replace an item's title and description
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        title: String,
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Delete an item
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

fn payload(title: String, description: Option<String>) -> ItemPayload {
    ItemPayload { title, description }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url)?;
    debug!(base_url = config.base_url(), "using backend");
    let api = ItemApi::new(config)?;

    match cli.command {
        Commands::List => {
            let items = api.list().await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Get { id } => {
            let item = api.get(id).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Commands::Create { title, description } => {
            let item = api.create(&payload(title, description)).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Commands::Update {
            id,
            title,
            description,
        } => {
            let item = api
                .update(id, &payload(title, description))
                .await
                .with_context(|| format!("item {id}"))?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Commands::Delete { id } => {
            api.delete(id).await.with_context(|| format!("item {id}"))?;
            eprintln!("deleted item {id}");
        }
    }

    Ok(())
}
