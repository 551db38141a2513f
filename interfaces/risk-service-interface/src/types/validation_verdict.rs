use serde::{Deserialize, Serialize};

use crate::VALIDATION_SERVICE_ERROR;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
            warnings: Vec::new(),
        }
    }

    pub fn valid_with_warnings(warnings: Vec<String>) -> Self {
        Self {
            is_valid: true,
            reason: None,
            warnings,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
            warnings: Vec::new(),
        }
    }

    pub fn service_error() -> Self {
        Self::rejected(VALIDATION_SERVICE_ERROR)
    }
}
