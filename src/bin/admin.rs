//! CLI administration tool for domainly.
//!
//! Provides commands for inspecting the prompt log, checking the database,
//! and running a suggestion from the terminal without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show the 20 newest prompt log entries
//! cargo run --bin admin -- logs recent -n 20
//!
//! # Count stored entries
//! cargo run --bin admin -- logs count
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Ask for suggestions (prompts for the idea when omitted)
//! cargo run --bin admin -- suggest "marketplace for vintage synths"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`domainly::config`]. Suggestions run from the CLI
//! are not written to the prompt log.

use domainly::api::dto::suggest::IdeaRequest;
use domainly::application::services::{PromptLogService, SuggestionService};
use domainly::config::{self, Config};
use domainly::infrastructure::gateways::build_gateways;
use domainly::infrastructure::persistence::PgPromptLogRepository;
use domainly::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing domainly.
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
    /// Inspect the prompt log
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Run a suggestion for an idea
    Suggest {
        /// Idea description (prompted for when omitted)
        idea: Option<String>,
    },
}

/// Prompt log subcommands.
#[derive(Subcommand)]
enum LogsAction {
    /// Show the newest entries
    Recent {
        /// Number of entries to show (max 100)
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: i64,
    },

    /// Count all entries
    Count,
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
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Logs { action } => {
            let pool = connect_pool(&config).await?;
            handle_logs_action(action, pool).await?
        }
        Commands::Db { action } => {
            let pool = connect_pool(&config).await?;
            handle_db_action(action, &pool).await?
        }
        Commands::Suggest { idea } => handle_suggest(&config, idea).await?,
    }

    Ok(())
}

/// Dispatches prompt log commands.
async fn handle_logs_action(action: LogsAction, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgPromptLogRepository::new(Arc::new(pool)));
    let service = PromptLogService::new(repo, true);

    match action {
        LogsAction::Recent { limit } => list_recent(&service, limit).await?,
        LogsAction::Count => {
            let count = service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count entries: {}", e))?;
            println!(
                "  Prompt log entries: {}",
                count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

/// Lists the newest prompt log entries.
///
/// # Output Format
///
/// ```text
/// 📋 Recent prompts
///
///   ID  Created           IP               Found  Idea
///   ──────────────────────────────────────────────────────────────────
///   42  2025-06-01 10:30  203.0.113.7      10     coffee subscriptions
/// ```
async fn list_recent(service: &PromptLogService<PgPromptLogRepository>, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent prompts".bright_blue().bold());
    println!();

    let entries = service
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list entries: {}", e))?;

    if entries.is_empty() {
        println!("{}", "  No prompts logged yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<17} {:<16} {:<6} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "IP".bright_white().bold(),
        "Found".bright_white().bold(),
        "Idea".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in &entries {
        let found = if entry.suggestions.is_empty() {
            "0".red()
        } else {
            entry.suggestions.len().to_string().green()
        };

        println!(
            "  {:<5} {:<17} {:<16} {:<6} {}",
            entry.id.to_string().bright_black(),
            entry
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            entry.ip.as_deref().unwrap_or("-").cyan(),
            found,
            truncate(&entry.idea, 40)
        );
    }

    println!();
    println!(
        "  Shown: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Runs the suggestion loop for one idea and prints the result.
async fn handle_suggest(config: &Config, idea: Option<String>) -> Result<()> {
    println!("{}", "💡 Domain suggestions".bright_blue().bold());
    println!();

    let idea = match idea {
        Some(i) => i,
        None => Input::new()
            .with_prompt("Describe the idea")
            .interact_text()?,
    };

    let request = IdeaRequest { idea };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid idea: {}", e))?;

    let (source, oracle) = build_gateways(config)?;
    let service = SuggestionService::new(source, oracle, config.suggestion_policy());

    let outcome = service
        .suggest(request.trimmed_idea())
        .await
        .map_err(|e| anyhow::anyhow!("Suggestion failed: {}", e))?;

    if outcome.domains.is_empty() {
        println!("{}", "  No available domains found".yellow());
    } else {
        for domain in &outcome.domains {
            println!("  {}", domain.bright_green());
        }
    }

    println!();
    println!(
        "  Rounds: {}  Candidates checked: {}",
        outcome.rounds.to_string().bright_white(),
        outcome.candidates_seen.to_string().bright_white()
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

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
