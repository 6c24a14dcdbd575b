//! CLI administration tool for snaplink.
//!
//! Works directly on the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Create a link (prompts for the URL when --url is omitted)
//! cargo run --bin admin -- links create --url https://example.com --code promo
//!
//! # Show one link
//! cargo run --bin admin -- links show promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, default `sqlite://shortlinks.db`

use snaplink::application::services::LinkService;
use snaplink::config;
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::{self, MIGRATOR, SqliteLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing snaplink.
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
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Create a new short link
    Create {
        /// Target URL (prompted for if omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Custom short code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a single link
    Show {
        /// Short code to look up
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

type Service = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;

    persistence::migrate(&pool)
        .await
        .context("Failed to migrate database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Create { url, code } => create_link(&service, url, code).await?,
        LinkAction::Show { code } => show_link(&service, &code).await?,
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// Short Links
///
///   Code            Created           Target
///   ──────────────────────────────────────────────────────────────
///   promo           2025-06-01 10:30  https://example.com/summer
///   Xk2_a9Q         2025-05-30 14:20  https://rust-lang.org
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "Short Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<15} {:<17} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<15} {:<17} {}",
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link, prompting for the target URL when it was not given.
async fn create_link(service: &Service, url: Option<String>, code: Option<String>) -> Result<()> {
    println!("{}", "Create Short Link".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Target URL").interact_text()?,
    };

    match service.create_short_link(long_url, code).await {
        Ok(link) => {
            println!("{}", "Link created".green().bold());
            println!("  Code:   {}", link.code.bright_yellow().bold());
            println!("  Target: {}", link.long_url.cyan());
            println!();
            Ok(())
        }
        Err(AppError::Conflict { .. }) => {
            println!("{}", "That code is already in use".red().bold());
            anyhow::bail!("code conflict")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create link: {}", e)),
    }
}

/// Prints a single link or a not-found notice.
async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link = service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match link {
        Some(link) => {
            println!("  Code:    {}", link.code.cyan());
            println!("  Target:  {}", link.long_url);
            println!(
                "  Created: {}",
                link.created_at.to_rfc3339().bright_black()
            );
        }
        None => println!("{}", format!("  No link with code '{}'", code).yellow()),
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            let schema_version = MIGRATOR
                .iter()
                .map(|m| m.version)
                .max()
                .unwrap_or_default();

            println!("  SQLite:         {}", version.bright_white());
            println!("  Schema version: {}", schema_version.to_string().bright_white());
            println!(
                "  Links:          {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
