use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Wallet rejected the request: {0}")]
    WalletRejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Node returned {status}: {message}")]
    Node { status: u16, message: String },

    #[error("Transaction {hash} failed: {vm_status}")]
    TransactionFailed { hash: String, vm_status: String },

    #[error("Transaction {hash} does not match the request: {reason}")]
    TransactionMismatch { hash: String, reason: String },

    #[error("Transaction {0} not found")]
    TransactionNotFound(String),

    #[error("Unexpected node response: {0}")]
    Decode(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// True for errors caused by caller input rather than the wallet, node or configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress(_) | Error::InvalidAmount(_) | Error::InvalidArgument(_)
        )
    }
}
