//! Client-side transaction construction for the Lattice ledger.
//!
//! Given a user intent (transfer tokens, cast a governance vote) this crate
//! resolves the asset's decimal precision, encodes the invocation script,
//! and assembles a transaction request with the correct signer scopes.
//! Balance selection, fee computation, signing and broadcast stay behind
//! collaborator traits:
//!
//! - [`LedgerQuery`] / [`InvocationReader`] — contract state and read-only
//!   execution
//! - [`Wallet`] — balance/fee completion of an assembled request
//! - [`SignerRelay`] — signing and broadcast
//!
//! [`NodeClient`] implements all of them over a node's JSON-RPC surface.
//! Every build is linear and all-or-nothing: nothing reaches the relay
//! collaborator unless every stage succeeded.

pub mod chain;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod relay;
pub mod request;
pub mod signer;
pub mod transaction_builder;
pub mod wallet;

pub use chain::{ContractDescriptor, InvocationReader, LedgerQuery, QueryError};
pub use client::NodeClient;
pub use descriptor::AssetDescriptor;
pub use error::BuildError;
pub use relay::{RelayError, RelayReceipt, SignerRelay};
pub use request::{TransactionRequest, TransferOutput};
pub use signer::{Signer, TransactionAttribute, WitnessScope};
pub use transaction_builder::{
    build_transfer, build_vote, TransferIntent, VoteIntent, GOVERNANCE_CONTRACT,
};
pub use wallet::{Wallet, WalletError};
