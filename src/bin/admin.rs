//! CLI administration tool for tax-service.
//!
//! Provides commands for managing deduction configuration, running one-off
//! calculations, and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the current deductions
//! cargo run --bin admin -- config show
//!
//! # Change the personal deduction
//! cargo run --bin admin -- config set-personal 70000
//!
//! # Change the k-receipt maximum without confirmation
//! cargo run --bin admin -- config set-k-receipt 80000 -y
//!
//! # Calculate tax against the stored configuration
//! cargo run --bin admin -- calc --income 500000 --wht 25000 --donation 200000
//!
//! # Calculate without a database, using the seed configuration
//! cargo run --bin admin -- calc --income 500000 --offline
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required except for `calc --offline`): PostgreSQL connection string

use tax_service::application::services::{DeductionService, TaxService};
use tax_service::domain::entities::{AllowanceKind, DeductionSettings, RawAllowance, TaxRequest};
use tax_service::domain::repositories::DeductionRepository;
use tax_service::infrastructure::persistence::{
    InMemoryDeductionRepository, PgDeductionRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use std::sync::Arc;

/// Personal deduction used by `calc --offline`; matches the migration seed.
const SEED_PERSONAL_DEDUCTION: Decimal = dec!(60000);
/// K-receipt maximum used by `calc --offline`; matches the migration seed.
const SEED_K_RECEIPT_MAX: Decimal = dec!(50000);

/// CLI tool for managing tax-service.
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
    /// Manage deduction configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Calculate tax for one filing
    Calc {
        /// Total annual income
        #[arg(long)]
        income: Decimal,

        /// Withholding tax already paid
        #[arg(long, default_value = "0")]
        wht: Decimal,

        /// Donation allowance
        #[arg(long)]
        donation: Option<Decimal>,

        /// K-receipt allowance
        #[arg(long = "k-receipt")]
        k_receipt: Option<Decimal>,

        /// Use the seed configuration instead of the database
        #[arg(long)]
        offline: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Deduction configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Show the stored deductions
    Show,

    /// Set the personal deduction
    SetPersonal {
        /// New amount (0 to 100000)
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Set the k-receipt maximum
    SetKReceipt {
        /// New amount (0 to 100000)
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and configuration row
    Check,
}

/// Which deduction parameter a `config set-*` command changes.
#[derive(Clone, Copy)]
enum Parameter {
    Personal,
    KReceipt,
}

impl Parameter {
    fn label(self) -> &'static str {
        match self {
            Parameter::Personal => "Personal deduction",
            Parameter::KReceipt => "K-receipt maximum",
        }
    }

    fn current(self, settings: &DeductionSettings) -> Decimal {
        match self {
            Parameter::Personal => settings.config.personal_deduction,
            Parameter::KReceipt => settings.config.k_receipt_max,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => {
            let pool = connect().await?;
            handle_config_action(action, &pool).await?;
        }
        Commands::Calc {
            income,
            wht,
            donation,
            k_receipt,
            offline,
        } => {
            let request = build_request(income, wht, donation, k_receipt);
            let repository: Arc<dyn DeductionRepository> = if offline {
                Arc::new(InMemoryDeductionRepository::new(
                    SEED_PERSONAL_DEDUCTION,
                    SEED_K_RECEIPT_MAX,
                ))
            } else {
                let pool = connect().await?;
                Arc::new(PgDeductionRepository::new(Arc::new(pool)))
            };
            calculate(repository, request).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches deduction configuration commands.
async fn handle_config_action(action: ConfigAction, pool: &PgPool) -> Result<()> {
    let repo: Arc<dyn DeductionRepository> =
        Arc::new(PgDeductionRepository::new(Arc::new(pool.clone())));
    let service = DeductionService::new(repo);

    match action {
        ConfigAction::Show => show_config(&service).await?,
        ConfigAction::SetPersonal { amount, yes } => {
            set_parameter(&service, Parameter::Personal, amount, yes).await?
        }
        ConfigAction::SetKReceipt { amount, yes } => {
            set_parameter(&service, Parameter::KReceipt, amount, yes).await?
        }
    }

    Ok(())
}

/// Prints the stored deductions.
///
/// # Output Format
///
/// ```text
/// Deduction Configuration
///
///   Personal deduction:  60000
///   K-receipt maximum:   50000
///   Updated:             2024-04-01 09:00 UTC
/// ```
async fn show_config(service: &DeductionService<dyn DeductionRepository>) -> Result<()> {
    println!("{}", "Deduction Configuration".bright_blue().bold());
    println!();

    let settings = service
        .get_settings()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read configuration: {}", e))?;

    print_settings(&settings);

    Ok(())
}

fn print_settings(settings: &DeductionSettings) {
    println!(
        "  {:<20} {}",
        "Personal deduction:",
        settings.config.personal_deduction.to_string().cyan()
    );
    println!(
        "  {:<20} {}",
        "K-receipt maximum:",
        settings.config.k_receipt_max.to_string().cyan()
    );
    println!(
        "  {:<20} {}",
        "Updated:",
        settings
            .updated_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Updates one deduction parameter after confirmation.
///
/// # Flow
///
/// 1. Show current and new value
/// 2. Confirm (unless `--yes` flag)
/// 3. Store through the deduction service, which enforces the 0..=100000 range
async fn set_parameter(
    service: &DeductionService<dyn DeductionRepository>,
    parameter: Parameter,
    amount: Decimal,
    skip_confirm: bool,
) -> Result<()> {
    println!(
        "{}",
        format!("Set {}", parameter.label()).bright_blue().bold()
    );
    println!();

    let current = service
        .get_settings()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read configuration: {}", e))?;

    println!(
        "  {}: {} -> {}",
        parameter.label(),
        parameter.current(&current).to_string().bright_black(),
        amount.to_string().bright_yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Apply this change?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let result = match parameter {
        Parameter::Personal => service.update_personal_deduction(amount).await,
        Parameter::KReceipt => service.update_k_receipt_max(amount).await,
    };
    let settings = result.map_err(|e| {
        anyhow::anyhow!("Failed to update {}: {}", parameter.label(), e)
    })?;

    println!("{}", "Updated successfully".green().bold());
    println!();
    print_settings(&settings);

    Ok(())
}

fn build_request(
    income: Decimal,
    wht: Decimal,
    donation: Option<Decimal>,
    k_receipt: Option<Decimal>,
) -> TaxRequest {
    let allowances = [
        (AllowanceKind::Donation, donation),
        (AllowanceKind::KReceipt, k_receipt),
    ]
    .into_iter()
    .filter_map(|(kind, amount)| {
        amount.map(|amount| RawAllowance {
            allowance_type: kind.as_str().to_string(),
            amount,
        })
    })
    .collect();

    TaxRequest {
        total_income: income,
        wht,
        allowances,
    }
}

/// Runs a calculation and prints the bracket breakdown.
///
/// # Output Format
///
/// ```text
/// Tax Calculation
///
///   Bracket                  Tax
///   ────────────────────────────────
///   0-150,000                0
///   150,001-500,000          19000
///   ...
///
///   Tax payable: 19000
/// ```
async fn calculate(repository: Arc<dyn DeductionRepository>, request: TaxRequest) -> Result<()> {
    println!("{}", "Tax Calculation".bright_blue().bold());
    println!();

    let service = TaxService::new(repository);
    let result = service
        .calculate(request)
        .await
        .map_err(|e| anyhow::anyhow!("Calculation failed: {}", e))?;

    println!(
        "  {:<24} {}",
        "Bracket".bright_white().bold(),
        "Tax".bright_white().bold()
    );
    println!("  {}", "─".repeat(32).bright_black());

    for level in &result.levels {
        let tax = if level.tax.is_zero() {
            level.tax.to_string().bright_black()
        } else {
            level.tax.to_string().normal()
        };
        println!("  {:<24} {}", level.label, tax);
    }
    println!();

    match result.refund() {
        Some(refund) => println!(
            "  Tax refund:  {}",
            refund.to_string().bright_green().bold()
        ),
        None => println!(
            "  Tax payable: {}",
            result.tax().to_string().bright_yellow().bold()
        ),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());

            let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_config")
                .fetch_one(pool)
                .await
                .context("Failed to read admin_config; have migrations run?")?;

            if rows == 0 {
                println!(
                    "{}",
                    "admin_config has no row; calculations will fail".red()
                );
            } else {
                println!("{}", "Deduction configuration present".green());
            }
        }
    }

    Ok(())
}
