use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use playerindex::config::Config;
use playerindex::profile::identifier::{dashed, parse_identifier};
use playerindex::profile::{lookup_identifiers, ProfileClient, ProfileResolver};

/// Player index: resolve Minecraft player names to UUIDs.
///
/// Every lookup goes straight to the Mojang profile API; nothing is cached.
#[derive(Parser)]
#[command(name = "playerindex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP lookup service
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 4567)
        #[arg(long, default_value = "4567")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Resolve player names to UUIDs
    Lookup {
        /// One or more player names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Fetch a single profile (with properties) by UUID
    Profile {
        /// UUID, dashed or undashed
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("playerindex=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let client = ProfileClient::from_config(&config)?;
            tracing::info!(
                profiles_url = %config.profiles_url,
                session_url = %config.session_url,
                timeout_secs = config.timeout.as_secs(),
                batch_size = config.batch_size,
                "Starting player index"
            );
            playerindex::web::run_server(std::sync::Arc::new(client), port, &bind).await?;
        }

        Commands::Lookup { names } => {
            let client = ProfileClient::from_config(&config)?;
            let ids = lookup_identifiers(&client, &names).await?;

            if ids.is_empty() {
                println!("{}", "No matching players.".dimmed());
                return Ok(());
            }

            let mut ids: Vec<String> = ids.iter().map(dashed).collect();
            ids.sort();
            for id in ids {
                println!("{id}");
            }
        }

        Commands::Profile { id } => {
            let id = parse_identifier(&id)?;
            let client = ProfileClient::from_config(&config)?;

            match client.fetch_by_id(&id).await? {
                Some(profile) => {
                    println!("{}", profile.name().bold());
                    println!("  id: {}", dashed(&profile.id()));
                    match profile.properties() {
                        Some(props) => println!("  properties: {}", props.len()),
                        None => println!("  properties: {}", "not returned".dimmed()),
                    }
                }
                None => println!("{} no profile for {}", "Not found:".yellow(), dashed(&id)),
            }
        }
    }

    Ok(())
}
