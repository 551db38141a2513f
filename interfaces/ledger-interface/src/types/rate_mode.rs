use serde::{Deserialize, Serialize};

/// Interest rate mode of a borrow, encoded on the ledger as 1 - stable, 2 - variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateMode {
    Stable,
    #[default]
    Variable,
}

impl RateMode {
    pub fn code(self) -> u32 {
        match self {
            RateMode::Stable => 1,
            RateMode::Variable => 2,
        }
    }
}
