//! Transaction requests handed to the wallet and relay collaborators.

use lattice_types::{ContractHash, FixedAmount};

use crate::signer::{Signer, TransactionAttribute};

/// A single token movement inside a transfer transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferOutput {
    pub asset: ContractHash,
    pub to: ContractHash,
    /// Already scaled to the asset's declared decimals.
    pub value: FixedAmount,
    /// Opaque payload forwarded to the receiving contract's transfer hook.
    pub data: Option<String>,
}

/// An unsigned transaction awaiting fee/balance completion and signing.
///
/// Built fresh per command, handed once to the wallet collaborator and then
/// to the signer/relay collaborator; never persisted or reused.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRequest {
    /// Invocation script the VM will execute.
    pub script: Vec<u8>,
    /// Paying account. [`ContractHash::ZERO`] is the sentinel meaning
    /// "resolve from the signer list".
    pub sender: ContractHash,
    pub attributes: Vec<TransactionAttribute>,
    /// Ordered signers; their order fixes the witness order.
    pub signers: Vec<Signer>,
}
