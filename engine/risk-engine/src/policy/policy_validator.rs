use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ledger_interface::LedgerReader;
use parking_lot::Mutex;
use price_feed_interface::PriceFeed;
use risk_service_interface::types::action_type::ActionType;
use risk_service_interface::types::validation_request::ValidationRequest;
use risk_service_interface::types::validation_verdict::ValidationVerdict;
use risk_service_interface::RiskValidator;
use tokio::time::Instant;
use tracing::{info, warn};

use super::limits::{
    format_usd, TierLimits, DAILY_WARNING_FRACTION, LARGE_DEPOSIT_FRACTION, LOW_HEALTH_FACTOR,
    MAX_REPAY_USD, MIN_AMOUNT_USD,
};
use crate::config::PolicyConfig;
use crate::error::Error;
use crate::methods::account_summary::account_summary;
use crate::methods::load_account::load_account;
use crate::methods::preview_borrow::preview_borrow;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);
const MINUTE: Duration = Duration::from_secs(60);

/// Accepted amounts per wallet, oldest first
type ActivityLog = HashMap<String, VecDeque<(Instant, f64)>>;

/// Backend re-validation run in process.
///
/// Checks run in a fixed order and the first refusal wins. Accepted requests
/// count towards the wallet's daily volume and per minute rate.
pub struct PolicyRiskValidator {
    config: PolicyConfig,
    reader: Arc<dyn LedgerReader>,
    prices: Arc<dyn PriceFeed>,
    activity: Mutex<ActivityLog>,
}

enum HealthCheck {
    Passed(Vec<String>),
    Rejected(String),
}

impl PolicyRiskValidator {
    pub fn new(
        config: PolicyConfig,
        reader: Arc<dyn LedgerReader>,
        prices: Arc<dyn PriceFeed>,
    ) -> Self {
        Self {
            config,
            reader,
            prices,
            activity: Mutex::default(),
        }
    }

    fn limits(&self) -> TierLimits {
        self.config.tier.limits()
    }

    /// Requested amount valued in USD, the raw amount when the reserve has no price
    fn amount_usd(&self, symbol: &str, amount: f64, warnings: &mut Vec<String>) -> f64 {
        match self
            .prices
            .price_usd(symbol)
            .filter(|price| price.is_finite() && *price >= 0.0)
        {
            Some(price) => amount * price,
            None => {
                warnings.push(format!(
                    "Could not price {symbol}. Limits are applied to the token amount."
                ));
                amount
            }
        }
    }

    fn check_amount(&self, action: ActionType, amount_usd: f64) -> Result<(), String> {
        let limits = self.limits();

        match action {
            ActionType::Deposit | ActionType::Borrow => {
                if action == ActionType::Borrow && amount_usd > limits.max_borrow_usd {
                    return Err(format!(
                        "Borrow amount ${} exceeds your {} tier limit of ${}. Upgrade your plan for higher limits.",
                        format_usd(amount_usd),
                        limits.label,
                        format_usd(limits.max_borrow_usd),
                    ));
                }
                if amount_usd > limits.per_tx_limit_usd {
                    return Err(format!(
                        "Amount ${} exceeds your {} tier per-transaction limit of ${}. Upgrade your plan for higher limits.",
                        format_usd(amount_usd),
                        limits.label,
                        format_usd(limits.per_tx_limit_usd),
                    ));
                }
                if amount_usd < MIN_AMOUNT_USD {
                    return Err(format!("Amount too small. Minimum: ${MIN_AMOUNT_USD}"));
                }
            }
            ActionType::Repay => {
                if amount_usd < MIN_AMOUNT_USD {
                    return Err(format!("Amount too small. Minimum: ${MIN_AMOUNT_USD}"));
                }
                if amount_usd > MAX_REPAY_USD {
                    return Err(format!(
                        "Amount exceeds per-transaction limit of ${}.",
                        format_usd(MAX_REPAY_USD)
                    ));
                }
            }
        }

        Ok(())
    }

    fn check_daily_volume(
        &self,
        wallet: &str,
        amount_usd: f64,
        now: Instant,
        warnings: &mut Vec<String>,
    ) -> Result<(), String> {
        let limits = self.limits();
        let daily_total = rolling_total(&mut self.activity.lock(), wallet, now);
        let new_total = daily_total + amount_usd;

        if new_total > limits.daily_limit_usd {
            return Err(daily_limit_exceeded(&limits, daily_total, amount_usd));
        }

        if new_total > limits.daily_limit_usd * DAILY_WARNING_FRACTION {
            warnings.push(format!(
                "Approaching daily limit ({} tier). ${} remaining today.",
                limits.label,
                format_usd(limits.daily_limit_usd - daily_total),
            ));
        }

        Ok(())
    }

    async fn check_health_factor(&self, wallet: &str, borrow_usd: f64) -> Result<HealthCheck, Error> {
        let account = load_account(self.reader.as_ref(), wallet).await?;
        let summary = account_summary(&account.aggregate(self.prices.as_ref()).positions);

        if summary.collateral_value_usd <= 0.0 {
            return Ok(HealthCheck::Rejected(
                "No collateral found. You must deposit assets before borrowing.".to_owned(),
            ));
        }

        let projected = preview_borrow(&summary.risk_inputs(), borrow_usd).after.health_factor;
        let mut warnings = Vec::new();

        if projected < self.config.critical_health_factor {
            return Ok(HealthCheck::Rejected(format!(
                "This borrow would bring your health factor to {projected:.2}, below the critical threshold of {}. Risk of liquidation is too high.",
                self.config.critical_health_factor,
            )));
        }
        if projected < self.config.min_health_factor {
            warnings.push(format!(
                "Health factor would be {projected:.2}. Consider a smaller amount to maintain a safer position."
            ));
        }
        if projected < LOW_HEALTH_FACTOR {
            warnings.push(
                "Your health factor will be relatively low. Monitor your position closely to avoid liquidation."
                    .to_owned(),
            );
        }

        Ok(HealthCheck::Passed(warnings))
    }

    /// Records the request when it still fits the daily volume and the rate window.
    ///
    /// The daily total is checked again under the lock, requests accepted while
    /// this one awaited the ledger count against it.
    fn admit(&self, wallet: &str, amount_usd: f64, now: Instant) -> Result<(), String> {
        let mut activity = self.activity.lock();
        activity.retain(|_, entries| {
            prune(entries, now);
            !entries.is_empty()
        });

        let (recent, daily_total) = activity.get(wallet).map_or((0, 0.0), |entries| {
            let recent = entries
                .iter()
                .filter(|(at, _)| now.duration_since(*at) < MINUTE)
                .count();
            (recent, entries.iter().map(|(_, amount)| amount).sum::<f64>())
        });

        if recent >= self.config.max_actions_per_minute {
            return Err(
                "Rate limit exceeded. Please wait a moment before sending another transaction."
                    .to_owned(),
            );
        }

        let limits = self.limits();
        if daily_total + amount_usd > limits.daily_limit_usd {
            return Err(daily_limit_exceeded(&limits, daily_total, amount_usd));
        }

        activity
            .entry(wallet.to_owned())
            .or_default()
            .push_back((now, amount_usd));

        Ok(())
    }

    /// Wallets with accepted requests inside the last day
    pub fn tracked_wallets(&self) -> usize {
        self.activity.lock().len()
    }

    async fn run(&self, request: &ValidationRequest) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        let amount = request
            .amount_human
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(|| "Invalid amount format".to_owned())?;

        if !is_wallet_address(&request.wallet_address) {
            return Err("Invalid wallet address".to_owned());
        }

        let wallet = request.wallet_address.to_ascii_lowercase();
        let amount_usd = self.amount_usd(&request.reserve_symbol, amount, &mut warnings);

        self.check_amount(request.action_type, amount_usd)?;
        self.check_daily_volume(&wallet, amount_usd, Instant::now(), &mut warnings)?;

        match request.action_type {
            ActionType::Borrow => match self.check_health_factor(&wallet, amount_usd).await {
                Ok(HealthCheck::Passed(health_warnings)) => warnings.extend(health_warnings),
                Ok(HealthCheck::Rejected(reason)) => return Err(reason),
                Err(error) => {
                    warn!(%wallet, %error, "health factor check failed");
                    warnings
                        .push("Could not calculate health factor. Proceed with caution.".to_owned());
                }
            },
            ActionType::Deposit => {
                if amount_usd > self.limits().per_tx_limit_usd * LARGE_DEPOSIT_FRACTION {
                    warnings.push(
                        "Large deposit detected. Ensure you have reviewed the protocol risks."
                            .to_owned(),
                    );
                }
            }
            ActionType::Repay => {}
        }

        self.admit(&wallet, amount_usd, Instant::now())?;

        Ok(warnings)
    }
}

#[async_trait]
impl RiskValidator for PolicyRiskValidator {
    async fn validate(&self, request: &ValidationRequest) -> ValidationVerdict {
        match self.run(request).await {
            Ok(warnings) => {
                info!(
                    action = %request.action_type,
                    reserve = %request.reserve_symbol,
                    amount = %request.amount_human,
                    tier = ?self.config.tier,
                    "action validated"
                );
                ValidationVerdict::valid_with_warnings(warnings)
            }
            Err(reason) => ValidationVerdict::rejected(reason),
        }
    }
}

/// `0x` followed by 40 hex digits
pub fn is_wallet_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn daily_limit_exceeded(limits: &TierLimits, daily_total: f64, amount_usd: f64) -> String {
    format!(
        "Daily transaction limit of ${} exceeded ({} tier). Today's total: ${}. Requested: ${}. Upgrade your plan for higher daily limits.",
        format_usd(limits.daily_limit_usd),
        limits.label,
        format_usd(daily_total),
        format_usd(amount_usd),
    )
}

/// Sum accepted for the wallet inside the last day, forgetting wallets with none
fn rolling_total(activity: &mut ActivityLog, wallet: &str, now: Instant) -> f64 {
    let Some(entries) = activity.get_mut(wallet) else {
        return 0.0;
    };

    prune(entries, now);
    if entries.is_empty() {
        activity.remove(wallet);
        return 0.0;
    }

    entries.iter().map(|(_, amount)| amount).sum()
}

fn prune(entries: &mut VecDeque<(Instant, f64)>, now: Instant) {
    while entries
        .front()
        .is_some_and(|(at, _)| now.duration_since(*at) >= DAY)
    {
        entries.pop_front();
    }
}
