use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown reserve {0}")]
    UnknownReserve(String),

    #[error("signature rejected")]
    SignatureRejected,

    #[error("transaction reverted: {0}")]
    Reverted(String),

    #[error("node error: {0}")]
    Node(String),

    #[error("math overflow")]
    MathOverflow,
}
