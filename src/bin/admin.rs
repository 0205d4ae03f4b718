//! CLI administration tool for warehouse-api.
//!
//! Mints and inspects session tokens and performs database checks without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for an owner
//! cargo run --bin admin -- token issue --email ops@example.com
//!
//! # Issue a token for an arbitrary principal
//! cargo run --bin admin -- token issue --payload '{"email":"ops@example.com","role":"picker"}'
//!
//! # Decode and verify a token
//! cargo run --bin admin -- token verify eyJhbGciOi...
//!
//! # Document counts per collection
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `ACCESS_TOKEN_SECRET` (token commands): signing secret shared with the server
//! - `DATABASE_URL` (stats/db commands): PostgreSQL connection string

use warehouse_api::application::services::{AuthService, TOKEN_TTL_HOURS};
use warehouse_api::domain::entities::{Collection, SUBJECT_FIELD};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use serde_json::{Map, Value};
use sqlx::PgPool;

/// CLI tool for managing warehouse-api.
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
    /// Issue and inspect session tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show document counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a new session token
    Issue {
        /// Owner email embedded as the token subject
        #[arg(short, long, conflicts_with = "payload")]
        email: Option<String>,

        /// Full principal as a JSON object
        #[arg(short, long)]
        payload: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify a token and print its claims
    Verify {
        /// Token to verify
        token: String,
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

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn auth_service() -> Result<AuthService> {
    let secret =
        std::env::var("ACCESS_TOKEN_SECRET").context("ACCESS_TOKEN_SECRET must be set")?;
    anyhow::ensure!(!secret.is_empty(), "ACCESS_TOKEN_SECRET must not be empty");
    Ok(AuthService::new(&secret))
}

/// Dispatches token commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    let service = auth_service()?;

    match action {
        TokenAction::Issue {
            email,
            payload,
            yes,
        } => issue_token(&service, email, payload, yes),
        TokenAction::Verify { token } => verify_token(&service, &token),
    }
}

/// Builds the principal from `--payload`, `--email`, or an interactive prompt.
fn resolve_principal(email: Option<String>, payload: Option<String>) -> Result<Map<String, Value>> {
    if let Some(raw) = payload {
        let value: Value = serde_json::from_str(&raw).context("--payload is not valid JSON")?;
        let Value::Object(principal) = value else {
            anyhow::bail!("--payload must be a JSON object");
        };
        return Ok(principal);
    }

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Owner email").interact_text()?,
    };

    let mut principal = Map::new();
    principal.insert(SUBJECT_FIELD.to_string(), Value::String(email));
    Ok(principal)
}

/// Issues a token after showing the principal that will be signed.
fn issue_token(
    service: &AuthService,
    email: Option<String>,
    payload: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Session Token".bright_blue().bold());
    println!();

    let principal = resolve_principal(email, payload)?;

    println!("{}", "Principal:".bright_white().bold());
    println!(
        "  {}",
        serde_json::to_string_pretty(&principal)?.replace('\n', "\n  ").cyan()
    );
    println!("  Valid for: {} hours", TOKEN_TTL_HOURS.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Sign this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token = service
        .issue(principal)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!();
    println!("{}", "✅ Token issued".green().bold());
    println!();
    println!("  {}", token.bright_yellow());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"author: Bearer {}\" \"http://localhost:5000/items?email=...\"",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Verifies a token and prints its claims.
fn verify_token(service: &AuthService, token: &str) -> Result<()> {
    match service.verify(token) {
        Ok(claims) => {
            println!("{}", "✅ Token is valid".green().bold());
            println!();
            println!(
                "  Subject: {}",
                claims.subject().unwrap_or("<none>").cyan()
            );
            println!("  Issued:  {}", format_timestamp(claims.iat).bright_black());
            println!("  Expires: {}", format_timestamp(claims.exp).bright_black());
            println!();
            println!("{}", serde_json::to_string_pretty(&claims.principal)?);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ Token rejected:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Displays document counts per collection.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for collection in Collection::ALL {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .fetch_one(pool)
            .await?;

        println!(
            "  {:<10} {}",
            format!("{collection}:"),
            count.to_string().bright_green().bold()
        );
    }
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
