use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use common::FixedI128;
use ledger_interface::types::ledger_call::LedgerCall;
use ledger_interface::types::tx_hash::TxHash;
use ledger_interface::{LedgerReader, LedgerWriter};
use risk_service_interface::types::action_type::ActionType;
use risk_service_interface::types::validation_request::ValidationRequest;
use risk_service_interface::RiskValidator;
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;
use crate::error::Error;
use crate::event;
use crate::methods::repay::validate_repay;
use crate::methods::utils::validation::require_finite_positive_amount;
use crate::types::repayment::FundingSource;

use self::action::{ActionKey, ActionReceipt, ActionRequest};
use self::in_flight::{InFlightGuard, InFlightTable};
use self::state::ActionState;

pub mod action;
pub mod in_flight;
pub mod state;

/// Reason used when the risk service refuses without giving one
const REJECTED_WITHOUT_REASON: &str = "validation failed";

/// Runs validate, approve and submit for one user session.
///
/// At most one action is in flight per wallet and reserve; a second one fails
/// with [`Error::Busy`] without touching the first.
pub struct TransactionOrchestrator {
    validator: Arc<dyn RiskValidator>,
    reader: Arc<dyn LedgerReader>,
    writer: Arc<dyn LedgerWriter>,
    pool_address: String,
    default_timeout: Duration,
    min_repay_usd: f64,
    in_flight: InFlightTable,
}

impl TransactionOrchestrator {
    pub fn new(
        config: &EngineConfig,
        validator: Arc<dyn RiskValidator>,
        reader: Arc<dyn LedgerReader>,
        writer: Arc<dyn LedgerWriter>,
    ) -> Self {
        Self {
            validator,
            reader,
            writer,
            pool_address: config.pool_address.clone(),
            default_timeout: config.request_timeout(),
            min_repay_usd: config.min_repay_usd,
            in_flight: InFlightTable::default(),
        }
    }

    pub async fn execute(&self, request: &ActionRequest) -> Result<ActionReceipt, Error> {
        self.execute_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Like [`Self::execute`]; `cancel` is honoured only while the action is validating
    pub async fn execute_with_cancel(
        &self,
        request: &ActionRequest,
        cancel: CancellationToken,
    ) -> Result<ActionReceipt, Error> {
        preflight(request, self.min_repay_usd)?;

        let mut guard = self.in_flight.acquire(request.key())?;

        match self.run(request, &mut guard, &cancel).await {
            Ok(receipt) => {
                event::confirmed(guard.key(), request.action_type, &receipt.tx_hash);
                guard.finish(ActionState::Confirmed);
                Ok(receipt)
            }
            Err(error) => {
                event::failed(guard.key(), request.action_type, &error);
                guard.finish(ActionState::Failed);
                Err(error)
            }
        }
    }

    /// Current state of the action in flight for the wallet and reserve
    pub fn state(&self, wallet: &str, symbol: &str) -> ActionState {
        self.in_flight
            .state(&ActionKey::new(wallet, symbol))
            .unwrap_or(ActionState::Idle)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    async fn run(
        &self,
        request: &ActionRequest,
        guard: &mut InFlightGuard<'_>,
        cancel: &CancellationToken,
    ) -> Result<ActionReceipt, Error> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);
        let symbol = request.reserve_symbol.as_str();
        let wallet = request.wallet_address.as_str();

        let validation_request = ValidationRequest {
            action_type: request.action_type,
            reserve_symbol: symbol.to_owned(),
            amount_human: request.amount.to_string(),
            wallet_address: wallet.to_owned(),
        };
        let verdict = cancellable(
            cancel,
            timeout,
            self.validator.validate(&validation_request),
        )
        .await?;

        if !verdict.is_valid {
            let reason = verdict
                .reason
                .unwrap_or_else(|| REJECTED_WITHOUT_REASON.to_owned());
            event::validation_rejected(guard.key(), request.action_type, &reason);
            return Err(Error::ValidationRejected(reason));
        }

        let reserve = cancellable(cancel, timeout, self.reader.reserve(symbol)).await??;
        let amount = FixedI128::from_f64(request.amount)
            .and_then(|amount| amount.to_precision(reserve.decimals))
            .ok_or(Error::MathOverflow)?;

        let mut approval_tx = None;
        if request.requires_allowance() {
            let allowance = cancellable(
                cancel,
                timeout,
                self.reader.allowance(wallet, symbol, &self.pool_address),
            )
            .await?
            .map_err(|e| Error::ApprovalFailed(e.to_string()))?;

            if allowance < amount {
                guard.transition(ActionState::Approving);
                approval_tx = Some(self.approve(guard, wallet, symbol, amount, timeout).await?);
            }
        }

        guard.transition(ActionState::Submitting);

        let call = ledger_call(request, amount);
        let tx_hash = bounded(timeout, self.writer.submit(wallet, call))
            .await?
            .map_err(|e| Error::SubmissionFailed(e.to_string()))?;

        Ok(ActionReceipt {
            action_type: request.action_type,
            reserve_symbol: request.reserve_symbol.clone(),
            tx_hash,
            approval_tx,
            warnings: verdict.warnings,
        })
    }

    async fn approve(
        &self,
        guard: &InFlightGuard<'_>,
        wallet: &str,
        symbol: &str,
        amount: i128,
        timeout: Duration,
    ) -> Result<TxHash, Error> {
        let call = LedgerCall::Approve {
            symbol: symbol.to_owned(),
            spender: self.pool_address.clone(),
            amount,
        };

        let tx = bounded(timeout, self.writer.submit(wallet, call))
            .await?
            .map_err(|e| Error::ApprovalFailed(e.to_string()))?;
        event::approval_submitted(guard.key(), &tx);

        bounded(timeout, self.writer.wait_for_confirmation(&tx))
            .await?
            .map_err(|e| Error::ApprovalFailed(e.to_string()))?;

        Ok(tx)
    }
}

/// Local checks, resolved before the in-flight claim and any network call
fn preflight(request: &ActionRequest, min_repay_usd: f64) -> Result<(), Error> {
    require_finite_positive_amount(request.amount)?;

    match &request.repay_terms {
        Some(terms) if request.action_type == ActionType::Repay => {
            validate_repay(terms, request.amount, min_repay_usd)
        }
        _ => Ok(()),
    }
}

fn ledger_call(request: &ActionRequest, amount: i128) -> LedgerCall {
    let symbol = request.reserve_symbol.clone();
    let on_behalf_of = request.wallet_address.clone();

    match request.action_type {
        ActionType::Deposit => LedgerCall::Deposit {
            symbol,
            amount,
            on_behalf_of,
        },
        ActionType::Borrow => LedgerCall::Borrow {
            symbol,
            amount,
            rate_mode: request.rate_mode,
            on_behalf_of,
        },
        ActionType::Repay => LedgerCall::Repay {
            symbol,
            amount,
            rate_mode: request.rate_mode,
            on_behalf_of,
            with_receipt: request.funding_source == FundingSource::Receipt,
        },
    }
}

async fn bounded<F: Future>(timeout: Duration, future: F) -> Result<F::Output, Error> {
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| Error::Timeout)
}

async fn cancellable<F: Future>(
    cancel: &CancellationToken,
    timeout: Duration,
    future: F,
) -> Result<F::Output, Error> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        output = bounded(timeout, future) => output,
    }
}
