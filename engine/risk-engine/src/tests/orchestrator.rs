use std::time::Duration;

use ledger_interface::types::error::LedgerError;
use ledger_interface::types::ledger_call::LedgerCall;
use ledger_interface::types::rate_mode::RateMode;
use risk_service_interface::types::action_type::ActionType;
use risk_service_interface::types::validation_verdict::ValidationVerdict;
use risk_service_mock::RiskServiceMock;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, ErrorCategory, ErrorKind};
use crate::orchestrator::action::ActionRequest;
use crate::orchestrator::state::ActionState;
use crate::tests::sut::{init_orchestrator, repay_terms, wait_for_state, POOL, USDC, WALLET};
use crate::types::repayment::FundingSource;

#[tokio::test]
async fn should_approve_then_deposit() {
    let sut = init_orchestrator(RiskServiceMock::approving());

    let receipt = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 100.0))
        .await
        .unwrap();

    let submitted = sut.ledger.submitted();
    assert_eq!(submitted.len(), 2);
    assert_eq!(
        submitted[0].1,
        LedgerCall::Approve {
            symbol: "USDC".into(),
            spender: POOL.into(),
            amount: 100 * USDC,
        }
    );
    assert_eq!(
        submitted[1].1,
        LedgerCall::Deposit {
            symbol: "USDC".into(),
            amount: 100 * USDC,
            on_behalf_of: WALLET.into(),
        }
    );

    assert_eq!(receipt.action_type, ActionType::Deposit);
    assert_eq!(receipt.approval_tx.as_ref(), sut.ledger.confirmed().first());
    assert_ne!(receipt.approval_tx, Some(receipt.tx_hash.clone()));
    assert_eq!(sut.orchestrator.state(WALLET, "USDC"), ActionState::Idle);
    assert_eq!(sut.orchestrator.in_flight_count(), 0);
}

#[tokio::test]
async fn should_skip_approval_when_allowance_suffices() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger.set_allowance(WALLET, "USDC", POOL, 1_000 * USDC);

    let receipt = sut
        .orchestrator
        .execute(&ActionRequest::borrow(WALLET, "USDC", 40.0, RateMode::Stable))
        .await
        .unwrap();

    assert_eq!(receipt.approval_tx, None);
    assert_eq!(
        sut.ledger.submitted().into_iter().map(|(_, call)| call).collect::<Vec<_>>(),
        vec![LedgerCall::Borrow {
            symbol: "USDC".into(),
            amount: 40 * USDC,
            rate_mode: RateMode::Stable,
            on_behalf_of: WALLET.into(),
        }]
    );
}

#[tokio::test]
async fn should_repay_without_allowance_check() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger
        .fail_method("allowance", LedgerError::Node("unavailable".into()));

    let request = ActionRequest::repay(WALLET, "USDC", 50.0, repay_terms(1_000.0, 0.05, 7.0));
    let receipt = sut.orchestrator.execute(&request).await.unwrap();

    assert_eq!(receipt.approval_tx, None);
    assert_eq!(
        sut.ledger.submitted()[0].1,
        LedgerCall::Repay {
            symbol: "USDC".into(),
            amount: 50 * USDC,
            rate_mode: RateMode::Variable,
            on_behalf_of: WALLET.into(),
            with_receipt: false,
        }
    );
}

#[tokio::test]
async fn should_send_action_to_risk_service() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.validator.approve_with_warnings(&["Large deposit detected."]);

    let receipt = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 12.5))
        .await
        .unwrap();

    let requests = sut.validator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action_type, ActionType::Deposit);
    assert_eq!(requests[0].reserve_symbol, "USDC");
    assert_eq!(requests[0].amount_human, "12.5");
    assert_eq!(requests[0].wallet_address, WALLET);
    assert_eq!(receipt.warnings, vec!["Large deposit detected.".to_owned()]);
}

#[tokio::test]
async fn should_fail_with_service_reason_verbatim() {
    let sut = init_orchestrator(RiskServiceMock::rejecting("Wallet is on a sanctions list"));

    let error = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 100.0))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        Error::ValidationRejected("Wallet is on a sanctions list".into())
    );
    assert_eq!(error.kind().category(), ErrorCategory::Backend);
    assert!(sut.ledger.submitted().is_empty());
    assert_eq!(sut.validator.requests().len(), 1);
}

#[tokio::test]
async fn should_fail_when_service_rejects_without_reason() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.validator.respond(ValidationVerdict {
        is_valid: false,
        reason: None,
        warnings: Vec::new(),
    });

    let error = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 100.0))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ValidationRejected);
}

#[tokio::test]
async fn should_resolve_local_errors_before_network() {
    let sut = init_orchestrator(RiskServiceMock::approving());

    let cases = [
        (ActionRequest::deposit(WALLET, "USDC", 0.0), ErrorKind::InvalidAmount),
        (ActionRequest::deposit(WALLET, "USDC", f64::NAN), ErrorKind::InvalidAmount),
        (
            ActionRequest::borrow(WALLET, "USDC", -1.0, RateMode::Variable),
            ErrorKind::InvalidAmount,
        ),
        (
            ActionRequest::repay(WALLET, "USDC", 0.001, repay_terms(1_000.0, 0.05, 7.0)),
            ErrorKind::BelowMinimum,
        ),
        (
            ActionRequest::repay(WALLET, "USDC", 2_000.0, repay_terms(1_000.0, 0.05, 7.0)),
            ErrorKind::ExceedsDebt,
        ),
    ];

    for (request, kind) in cases {
        let error = sut.orchestrator.execute(&request).await.unwrap_err();
        assert_eq!(error.kind(), kind);
        assert_eq!(kind.category(), ErrorCategory::Local);
    }

    assert!(sut.validator.requests().is_empty());
    assert!(sut.ledger.submitted().is_empty());
}

#[tokio::test]
async fn should_reject_second_action_on_same_reserve_as_busy() {
    let sut = init_orchestrator(RiskServiceMock::gated());

    let orchestrator = sut.orchestrator.clone();
    let first = tokio::spawn(async move {
        orchestrator
            .execute(&ActionRequest::deposit(WALLET, "USDC", 10.0))
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Validating).await;

    let second = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 20.0))
        .await;

    assert_eq!(second.unwrap_err(), Error::Busy);
    assert_eq!(sut.orchestrator.state(WALLET, "USDC"), ActionState::Validating);
    assert_eq!(sut.validator.requests().len(), 1);

    sut.validator.release();
    let receipt = first.await.unwrap().unwrap();

    assert_eq!(receipt.reserve_symbol, "USDC");
    assert_eq!(sut.ledger.submitted().len(), 2);
    assert_eq!(sut.orchestrator.in_flight_count(), 0);
}

#[tokio::test]
async fn should_treat_wallet_case_as_same_user() {
    let sut = init_orchestrator(RiskServiceMock::gated());

    let orchestrator = sut.orchestrator.clone();
    let first = tokio::spawn(async move {
        orchestrator
            .execute(&ActionRequest::deposit(WALLET, "USDC", 10.0))
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Validating).await;

    let second = sut
        .orchestrator
        .execute(&ActionRequest::deposit(&WALLET.to_ascii_uppercase(), "USDC", 20.0))
        .await;

    assert_eq!(second.unwrap_err(), Error::Busy);

    sut.validator.release();
    first.await.unwrap().unwrap();
}

#[tokio::test]
async fn should_run_actions_on_different_reserves_independently() {
    let sut = init_orchestrator(RiskServiceMock::gated());

    let orchestrator = sut.orchestrator.clone();
    let usdc = tokio::spawn(async move {
        orchestrator
            .execute(&ActionRequest::deposit(WALLET, "USDC", 10.0))
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Validating).await;

    let orchestrator = sut.orchestrator.clone();
    let weth = tokio::spawn(async move {
        orchestrator
            .execute(&ActionRequest::deposit(WALLET, "WETH", 0.5))
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "WETH", ActionState::Validating).await;

    assert_eq!(sut.orchestrator.in_flight_count(), 2);

    sut.validator.release();
    sut.validator.release();

    assert!(usdc.await.unwrap().is_ok());
    assert!(weth.await.unwrap().is_ok());
    assert_eq!(sut.orchestrator.in_flight_count(), 0);
}

#[tokio::test]
async fn should_cancel_while_validating() {
    let sut = init_orchestrator(RiskServiceMock::gated());
    let cancel = CancellationToken::new();

    let orchestrator = sut.orchestrator.clone();
    let token = cancel.clone();
    let action = tokio::spawn(async move {
        orchestrator
            .execute_with_cancel(&ActionRequest::deposit(WALLET, "USDC", 10.0), token)
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Validating).await;

    cancel.cancel();

    assert_eq!(action.await.unwrap().unwrap_err(), Error::Cancelled);
    assert!(sut.ledger.submitted().is_empty());
    assert_eq!(sut.orchestrator.state(WALLET, "USDC"), ActionState::Idle);
}

#[tokio::test]
async fn should_release_reserve_when_action_is_dropped() {
    let sut = init_orchestrator(RiskServiceMock::gated());

    let orchestrator = sut.orchestrator.clone();
    let action = tokio::spawn(async move {
        orchestrator
            .execute(&ActionRequest::deposit(WALLET, "USDC", 10.0))
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Validating).await;

    action.abort();

    assert!(action.await.unwrap_err().is_cancelled());
    assert_eq!(sut.orchestrator.in_flight_count(), 0);
    assert_eq!(sut.orchestrator.state(WALLET, "USDC"), ActionState::Idle);
    assert!(sut.ledger.submitted().is_empty());

    sut.validator.release();
    sut.orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 20.0))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn should_not_cancel_after_validation() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger.set_allowance(WALLET, "USDC", POOL, 1_000 * USDC);
    sut.ledger.set_submit_delay(Duration::from_secs(1));
    let cancel = CancellationToken::new();

    let orchestrator = sut.orchestrator.clone();
    let token = cancel.clone();
    let action = tokio::spawn(async move {
        orchestrator
            .execute_with_cancel(&ActionRequest::deposit(WALLET, "USDC", 10.0), token)
            .await
    });
    wait_for_state(&sut.orchestrator, WALLET, "USDC", ActionState::Submitting).await;

    cancel.cancel();

    assert!(action.await.unwrap().is_ok());
    assert_eq!(sut.ledger.submitted().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn should_time_out_hanging_validation() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.validator.hang();

    let request =
        ActionRequest::deposit(WALLET, "USDC", 10.0).with_timeout(Duration::from_millis(300));
    let error = sut.orchestrator.execute(&request).await.unwrap_err();

    assert_eq!(error, Error::Timeout);
    assert_eq!(error.kind().as_str(), "TIMEOUT");
    assert!(sut.ledger.submitted().is_empty());
    assert_eq!(sut.orchestrator.in_flight_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn should_time_out_slow_submission() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger.set_submit_delay(Duration::from_secs(10));

    let request =
        ActionRequest::repay(WALLET, "USDC", 50.0, repay_terms(1_000.0, 0.05, 7.0))
            .with_timeout(Duration::from_secs(1));
    let error = sut.orchestrator.execute(&request).await.unwrap_err();

    assert_eq!(error, Error::Timeout);
}

#[tokio::test]
async fn should_fail_on_rejected_approval() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger.fail_method("approve", LedgerError::SignatureRejected);

    let error = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 100.0))
        .await
        .unwrap_err();

    assert_eq!(error, Error::ApprovalFailed("signature rejected".into()));
    assert_eq!(error.kind().category(), ErrorCategory::Ledger);
    assert!(sut.ledger.submitted().is_empty());
}

#[tokio::test]
async fn should_fail_on_reverted_approval() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger
        .fail_confirmation(LedgerError::Reverted("out of gas".into()));

    let error = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "USDC", 100.0))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ApprovalFailed);
    assert_eq!(sut.ledger.submitted().len(), 1);
}

#[tokio::test]
async fn should_release_reserve_after_failed_submission() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    sut.ledger.set_allowance(WALLET, "USDC", POOL, 1_000 * USDC);
    sut.ledger
        .fail_method("deposit", LedgerError::Node("nonce too low".into()));
    let request = ActionRequest::deposit(WALLET, "USDC", 100.0);

    let error = sut.orchestrator.execute(&request).await.unwrap_err();

    assert_eq!(error, Error::SubmissionFailed("node error: nonce too low".into()));
    assert_eq!(sut.orchestrator.state(WALLET, "USDC"), ActionState::Idle);

    sut.ledger.clear_failures();
    let receipt = sut.orchestrator.execute(&request).await.unwrap();

    assert_eq!(receipt.action_type, ActionType::Deposit);
    assert_eq!(sut.validator.requests().len(), 2);
}

#[tokio::test]
async fn should_fail_for_unknown_reserve() {
    let sut = init_orchestrator(RiskServiceMock::approving());

    let error = sut
        .orchestrator
        .execute(&ActionRequest::deposit(WALLET, "DAI", 1.0))
        .await
        .unwrap_err();

    assert_eq!(error, Error::Ledger(LedgerError::UnknownReserve("DAI".into())));
    assert!(sut.ledger.submitted().is_empty());
}

#[tokio::test]
async fn should_repay_with_receipt_tokens() {
    let sut = init_orchestrator(RiskServiceMock::approving());
    let mut terms = repay_terms(1_000.0, 0.05, 7.0);
    terms.funding_source = FundingSource::Receipt;

    sut.orchestrator
        .execute(&ActionRequest::repay(WALLET, "USDC", 10.0, terms))
        .await
        .unwrap();

    assert!(matches!(
        sut.ledger.submitted()[0].1,
        LedgerCall::Repay {
            with_receipt: true,
            ..
        }
    ));
}
