use super::risk_metrics::risk_metrics;
use super::utils::non_negative;
use crate::types::borrow_preview::BorrowPreview;
use crate::types::risk_inputs::RiskInputs;

pub fn preview_borrow(inputs: &RiskInputs, borrow_amount_usd: f64) -> BorrowPreview {
    let borrow_amount_usd = non_negative(borrow_amount_usd);
    let debt_value_usd_after = non_negative(inputs.debt_value_usd) + borrow_amount_usd;
    let after = RiskInputs {
        debt_value_usd: debt_value_usd_after,
        ..*inputs
    };

    BorrowPreview {
        borrow_amount_usd,
        debt_value_usd_after,
        before: risk_metrics(inputs),
        after: risk_metrics(&after),
    }
}
