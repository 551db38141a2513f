use serde::{Deserialize, Serialize};

use super::action_type::ActionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub action_type: ActionType,
    pub reserve_symbol: String,
    /// Amount in human units, decimal string
    pub amount_human: String,
    pub wallet_address: String,
}
