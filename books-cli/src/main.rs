//! Books CLI - smoke-test client for the Books API

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::ApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "books")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the Books API
    #[arg(
        long,
        global = true,
        env = "BOOKS_BASE_URL",
        default_value = "http://localhost:5000"
    )]
    base_url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books
    List,

    /// Show a single book
    Get {
        /// Book id
        id: i64,
    },

    /// Add a new book
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Author name
        #[arg(long)]
        author: String,

        /// Publication year (left out of the request when omitted)
        #[arg(long)]
        year: Option<i64>,
    },

    /// Update the given fields of a book
    Update {
        /// Book id
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        year: Option<i64>,
    },

    /// Delete a book
    Delete {
        /// Book id
        id: i64,
    },

    /// Check service health
    Health,

    /// Run the add / verify / delete persistence check
    Smoke {
        /// Title for the test book (defaults to a timestamped one)
        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "books_cli=debug"
    } else {
        "books_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ApiClient::new(&cli.base_url);

    match cli.command {
        Commands::List => commands::list(&client).await,

        Commands::Get { id } => commands::get(&client, id).await,

        Commands::Add {
            title,
            author,
            year,
        } => commands::add(&client, title, author, year).await,

        Commands::Update {
            id,
            title,
            author,
            year,
        } => commands::update(&client, id, title, author, year).await,

        Commands::Delete { id } => commands::delete(&client, id).await,

        Commands::Health => commands::health(&client).await,

        Commands::Smoke { title } => commands::smoke(&client, title).await,
    }
}
