//! # Knowledge Recall CLI (`recall`)
//!
//! ```bash
//! recall --config ./config/recall.toml <command>
//! ```
//!
//! | Command | Description |
//! |---------|-------------|
//! | `recall init` | Create the SQLite database and schema |
//! | `recall import <file>` | Load records from a JSON array |
//! | `recall search "<query>"` | Rank stored pages against a query |
//! | `recall related <id>` | Records related to a stored record |
//! | `recall get <id>` | Print a stored record in full |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use knowledge_recall::models::ContentKind;
use knowledge_recall::{config, get, import, migrate, related, search};

/// Knowledge Recall: search the pages you have captured.
#[derive(Parser)]
#[command(
    name = "recall",
    about = "Knowledge Recall: rank locally captured pages against a free-text query",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/recall.toml")]
    config: PathBuf,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Idempotent: running it multiple times is safe.
    Init,

    /// Import records from a JSON file.
    ///
    /// The file must contain an array of objects with `title`, `content`,
    /// `url`, and optionally `summary` and `kind` (`page` or `video`).
    Import {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// Search stored pages.
    ///
    /// Scores each page by case-insensitive substring matches in its
    /// title (+3), content (+1), and summary (+2).
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<i64>,

        /// Show which signals matched for each result.
        #[arg(long)]
        explain: bool,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Find records related to a stored record.
    Related {
        /// Record ID.
        id: i64,

        /// Record kind: `page` or `video`.
        #[arg(long, default_value = "page")]
        kind: String,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<i64>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Retrieve a record by its ID.
    Get {
        /// Record ID.
        id: i64,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "knowledge_recall=debug"
    } else {
        "knowledge_recall=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Import { path } => {
            import::run_import(&cfg, &path).await?;
        }
        Commands::Search {
            query,
            limit,
            explain,
            json,
        } => {
            search::run_search(&cfg, &query, limit, explain, json).await?;
        }
        Commands::Related {
            id,
            kind,
            limit,
            json,
        } => {
            let kind: ContentKind = kind.parse()?;
            related::run_related(&cfg, id, kind, limit, json).await?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, id, json).await?;
        }
    }

    Ok(())
}
