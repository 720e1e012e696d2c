//! The wallet collaborator: balance selection and fee completion.

use lattice_types::ContractHash;
use thiserror::Error;

use crate::request::{TransactionRequest, TransferOutput};
use crate::signer::{Signer, TransactionAttribute};

/// Failure reported by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The paying account cannot cover the amount plus network fee.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(String),

    #[error("no wallet is loaded")]
    NoWalletLoaded,

    #[error("wallet error: {0}")]
    Other(String),
}

/// Turns outputs or a raw script into a signable transaction request.
///
/// The wallet is solely responsible for balance sufficiency, fee
/// computation and account-state resolution; this core never re-checks
/// them.
pub trait Wallet {
    /// Build a transfer transaction from token outputs.
    ///
    /// `from` overrides the paying account; when `None` the wallet picks
    /// one. An empty signer list lets the wallet infer signers from the
    /// sender.
    fn build_transfer_tx(
        &self,
        outputs: &[TransferOutput],
        from: Option<ContractHash>,
        signers: &[Signer],
    ) -> Result<TransactionRequest, WalletError>;

    /// Build a transaction around an already-encoded script.
    ///
    /// `ContractHash::ZERO` as `sender` asks the wallet to resolve the
    /// paying account from the signer list.
    fn build_script_tx(
        &self,
        script: Vec<u8>,
        sender: ContractHash,
        attributes: Vec<TransactionAttribute>,
        signers: &[Signer],
    ) -> Result<TransactionRequest, WalletError>;
}
