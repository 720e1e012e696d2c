//! The signing/relay collaborator.

use thiserror::Error;

use crate::request::TransactionRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("signing failed: {0}")]
    Signing(String),

    #[error("relay failed: {0}")]
    Relay(String),
}

/// Outcome of signing and broadcasting a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    /// Hash of the signed transaction, hex.
    pub tx_hash: String,
    /// Whether the node accepted the transaction into its pool.
    pub relayed: bool,
}

/// Signs a completed request with the wallet's keys and broadcasts it.
///
/// Only fully assembled requests ever reach this trait; a failure in any
/// earlier stage discards the whole command.
pub trait SignerRelay {
    fn sign_and_relay(&self, request: TransactionRequest) -> Result<RelayReceipt, RelayError>;
}
