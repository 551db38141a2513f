use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Deposit,
    Borrow,
    Repay,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Deposit => "deposit",
            ActionType::Borrow => "borrow",
            ActionType::Repay => "repay",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
