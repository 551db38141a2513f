//! Risk reports over an account snapshot.
//!
//! Usage:
//!   risk-cli --snapshot account.json positions
//!   risk-cli --snapshot account.json stress --shock -0.3 --shock -0.5
//!   risk-cli --snapshot account.json borrow --reserve USDC --amount 250
//!   risk-cli --snapshot account.json repay --reserve USDC --amount 50 --days 7

mod snapshot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ledger_interface::types::rate_mode::RateMode;
use risk_engine::methods::account_summary::{account_summary, stress_test_account};
use risk_engine::methods::preview_borrow::preview_borrow;
use risk_engine::methods::repay::{plan_repayment, preview_repay};
use risk_engine::methods::stress_test::{stress_test, DEFAULT_SHOCKS};
use risk_engine::types::repayment::FundingSource;
use risk_engine::EngineConfig;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::snapshot::Snapshot;

#[derive(Parser)]
#[command(name = "risk-cli")]
#[command(version, about = "Position risk reports for a lending account")]
struct Cli {
    /// JSON account snapshot
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Engine config in TOML, defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per reserve positions and the account summary
    Positions,
    /// Collateral shocks against the account or one reserve
    Stress {
        /// Shock fraction within [-0.5, 0.2], repeatable
        #[arg(long = "shock", allow_negative_numbers = true)]
        shocks: Vec<f64>,
        /// Stress a single reserve position instead of the whole account
        #[arg(long)]
        reserve: Option<String>,
    },
    /// Metrics after borrowing more
    Borrow {
        #[arg(long)]
        reserve: String,
        /// Amount in units of the underlying
        #[arg(long)]
        amount: f64,
    },
    /// Repayment check, interest first split and projected metrics
    Repay {
        #[arg(long)]
        reserve: String,
        /// Amount in units of the underlying
        #[arg(long)]
        amount: f64,
        /// Days since the last accrual
        #[arg(long, default_value = "0")]
        days: f64,
        #[arg(long, value_enum, default_value = "variable")]
        rate_mode: RateModeArg,
        #[arg(long, value_enum, default_value = "wallet")]
        funding: FundingArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RateModeArg {
    Variable,
    Stable,
}

#[derive(Clone, Copy, ValueEnum)]
enum FundingArg {
    Wallet,
    Receipt,
}

impl From<RateModeArg> for RateMode {
    fn from(value: RateModeArg) -> Self {
        match value {
            RateModeArg::Variable => RateMode::Variable,
            RateModeArg::Stable => RateMode::Stable,
        }
    }
}

impl From<FundingArg> for FundingSource {
    fn from(value: FundingArg) -> Self {
        match value {
            FundingArg::Wallet => FundingSource::Wallet,
            FundingArg::Receipt => FundingSource::Receipt,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RepaymentReport {
    accrued_interest: f64,
    interest_portion: f64,
    principal_portion: f64,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let snapshot = Snapshot::load(&cli.snapshot)?;
    let aggregated = snapshot.aggregate();
    debug!(positions = aggregated.positions.len(), "snapshot aggregated");

    for symbol in &aggregated.missing_prices {
        warn!(reserve = %symbol, "price missing, position valued at zero");
    }

    let summary = account_summary(&aggregated.positions);

    match cli.command {
        Command::Positions => print_json(&json!({
            "positions": aggregated.positions,
            "summary": summary,
            "missingPrices": aggregated.missing_prices,
            "missingReserves": aggregated.missing_reserves,
        })),
        Command::Stress { shocks, reserve } => {
            let shocks = if shocks.is_empty() {
                DEFAULT_SHOCKS.to_vec()
            } else {
                shocks
            };

            let results = match reserve {
                Some(symbol) => {
                    let position = aggregated
                        .get(&symbol)
                        .with_context(|| format!("no position in {symbol}"))?;
                    stress_test(&position.risk_inputs(), &shocks)?
                }
                None => stress_test_account(&summary, &shocks)?,
            };

            print_json(&results)
        }
        Command::Borrow { reserve, amount } => {
            let amount_usd = amount * snapshot.price(&reserve)?;
            print_json(&preview_borrow(&summary.risk_inputs(), amount_usd))
        }
        Command::Repay {
            reserve,
            amount,
            days,
            rate_mode,
            funding,
        } => {
            let terms =
                snapshot.repay_terms(&reserve, rate_mode.into(), funding.into(), days)?;
            let allocation = plan_repayment(&terms, amount, config.min_repay_usd)?;
            let preview = preview_repay(
                &summary.risk_inputs(),
                amount * snapshot.price(&reserve)?,
            );

            print_json(&json!({
                "terms": terms,
                "allocation": RepaymentReport {
                    accrued_interest: allocation.accrued_interest.to_f64(),
                    interest_portion: allocation.interest_portion.to_f64(),
                    principal_portion: allocation.principal_portion.to_f64(),
                },
                "preview": preview,
            }))
        }
    }
}
