//! CLI administration tool for shorter-url.
//!
//! Creates and inspects short links and performs database checks directly
//! against PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- link create https://wp.pl
//!
//! # Show the mapping behind a short code
//! cargo run --bin admin -- link show aBcDe
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): public origin used to print short URLs
//! - `SHORT_CODE_LENGTH`, `CODE_MAX_ATTEMPTS` (optional): same as the server

use shorter_url::application::services::LinkService;
use shorter_url::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use shorter_url::error::AppError;
use shorter_url::infrastructure::persistence::PgLinkRepository;
use shorter_url::utils::code_generator::{DEFAULT_CODE_LENGTH, RandomCodeGenerator};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorter-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL, or show the existing short link for it
    Create {
        /// Long URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the long URL behind a short code
    Show {
        /// Short code, e.g. "aBcDe"
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn build_service(pool: &PgPool) -> LinkService {
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let code_length = std::env::var("SHORT_CODE_LENGTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CODE_LENGTH);
    let max_attempts = std::env::var("CODE_MAX_ATTEMPTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    LinkService::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        Arc::new(RandomCodeGenerator::new(code_length)),
        base_url,
        max_attempts,
    )
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = build_service(pool);

    match action {
        LinkAction::Create { url, yes } => create_link(&service, url, yes).await?,
        LinkAction::Show { code } => show_link(&service, &code).await?,
    }

    Ok(())
}

/// Shortens a URL with interactive prompts.
///
/// Shortening is idempotent: a URL that already has a short link is reported
/// as existing and keeps its code.
async fn create_link(service: &LinkService, url: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!("  URL: {}", long_url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Shorten this URL?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let shortened = service.shorten(&long_url).await.map_err(describe)?;
    let link = shortened.link();
    let short_url = service.short_url(&link.short_code);

    if shortened.is_created() {
        println!("{}", "✅ Short link created".green().bold());
    } else {
        println!("{}", "ℹ️  Short link already exists".yellow().bold());
    }
    println!();
    println!("  Code:      {}", link.short_code.bright_yellow().bold());
    println!("  Short URL: {}", short_url.bright_white());
    println!();

    Ok(())
}

/// Prints the mapping stored for `code`.
async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    let link = match service.find_by_code(code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "❌ No link for code".red(), code.bright_white());
            return Ok(());
        }
        Err(e) => return Err(describe(e)),
    };

    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();
    println!("  Code:      {}", link.short_code.bright_yellow().bold());
    println!("  Long URL:  {}", link.long_url.cyan());
    println!(
        "  Short URL: {}",
        service.short_url(&link.short_code).bright_white()
    );
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

fn describe(e: AppError) -> anyhow::Error {
    let details = e.to_error_info().details;
    if details.is_null() {
        anyhow::anyhow!("{}", e)
    } else {
        anyhow::anyhow!("{} ({})", e, details)
    }
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = build_service(pool);
    let links_count = service.count().await.map_err(describe)?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
