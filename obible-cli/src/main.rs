//! obible CLI - terminal client for the offline Bible API

mod commands;
mod components;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use obible_core::{HttpClient, Locale};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse the --lang argument
fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse().map_err(|e: obible_core::ConfigError| e.to_string())
}

/// Parse and validate the --limit argument (must be at least 1)
fn parse_limit(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("limit must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "obible")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL (defaults to $OBIBLE_API_BASE_URL or http://localhost:5000)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Interface language (de, en)
    #[arg(long, global = true, default_value = "de", value_parser = parse_locale)]
    lang: Locale,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available translations
    Translations {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the books of a translation
    Books {
        /// Translation code, e.g. LUT
        translation: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the verses of a chapter
    Read {
        /// Translation code, e.g. LUT
        translation: String,

        /// Book id, e.g. GEN
        book: String,

        /// Chapter number (out-of-range values open chapter 1)
        chapter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a translation
    Search {
        /// Translation code, e.g. LUT
        translation: String,

        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively
    Shell {
        /// Start location, e.g. /LUT/GEN/1
        #[arg(default_value = "/")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for rendered output
    let filter = if cli.verbose {
        "obible_cli=debug,obible_core=debug"
    } else {
        "obible_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = HttpClient::from_env(cli.api_url.as_deref())
        .context("Invalid client configuration")?;
    let locale = cli.lang;

    match cli.command {
        Commands::Translations { json } => commands::translations(&api, json, locale).await,

        Commands::Books { translation, json } => {
            commands::books(&api, &translation, json, locale).await
        }

        Commands::Read {
            translation,
            book,
            chapter,
            json,
        } => commands::read(api, &translation, &book, chapter.as_deref(), json, locale).await,

        Commands::Search {
            translation,
            query,
            limit,
            json,
        } => commands::search(&api, &translation, &query, limit, json, locale).await,

        Commands::Shell { path } => commands::shell(api, &path, locale).await,
    }
}
