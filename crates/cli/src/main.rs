//! Catalog CLI - Schema export, seed inspection, and one-off operations.
//!
//! # Usage
//!
//! ```bash
//! # Print the schema as SDL
//! catalog-cli schema
//!
//! # Print the built-in seed document as JSON
//! catalog-cli seed --format json
//!
//! # Validate and normalize a seed file
//! catalog-cli seed --seed-file catalog.yaml
//!
//! # Run one operation against a freshly seeded store
//! catalog-cli query '{ categories { name } }'
//! catalog-cli query 'query($id: ID!) { product(id: $id) { name } }' \
//!     --variables '{"id": "404daf2a-9b97-4b99-b9af-614d07f818d7"}'
//! ```
//!
//! # Commands
//!
//! - `schema` - Print SDL
//! - `seed` - Print a seed document
//! - `query` - Execute a GraphQL operation

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Catalog API CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GraphQL schema as SDL
    Schema,
    /// Print a seed document (the built-in catalog unless a file is given)
    Seed {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SeedFormat::Yaml)]
        format: SeedFormat,

        /// Seed file to validate and re-emit
        #[arg(long, env = "CATALOG_SEED_FILE")]
        seed_file: Option<PathBuf>,
    },
    /// Execute one GraphQL operation against a freshly seeded store
    Query {
        /// GraphQL document
        document: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,

        /// Seed file to load instead of the built-in catalog
        #[arg(long, env = "CATALOG_SEED_FILE")]
        seed_file: Option<PathBuf>,
    },
}

/// Seed document output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedFormat {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Schema => commands::schema::print()?,
        Commands::Seed { format, seed_file } => {
            commands::seed::print(format, seed_file.as_deref())?;
        }
        Commands::Query {
            document,
            variables,
            seed_file,
        } => {
            commands::query::run(&document, variables.as_deref(), seed_file.as_deref()).await?;
        }
    }
    Ok(())
}
