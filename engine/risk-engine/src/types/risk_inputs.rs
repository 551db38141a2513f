/// Everything the risk formulas need about one position or a whole account
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    pub collateral_value_usd: f64,
    pub debt_value_usd: f64,
    pub loan_to_value: f64,
    pub liquidation_threshold: f64,
}
