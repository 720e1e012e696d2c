use lattice_types::{AmountError, ContractHash, KeyError};
use thiserror::Error;

use crate::wallet::WalletError;

/// Failures assembling a transaction request.
///
/// Every stage surfaces its failure immediately; nothing is retried and no
/// partially built request survives an error.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("unknown asset: no contract deployed at {0}")]
    UnknownAsset(ContractHash),

    #[error("contract at {hash} is not a token contract: {reason}")]
    MalformedAsset { hash: ContractHash, reason: String },

    #[error("contract query failed: {0}")]
    ContractQueryFailed(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}
