//! Fundamental types for the Lattice wallet.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: contract/account hashes, fixed-point token amounts, and
//! compressed secp256r1 public keys.

pub mod amount;
pub mod error;
pub mod hash;
pub mod keys;

pub use amount::FixedAmount;
pub use error::{AmountError, HashError, KeyError};
pub use hash::ContractHash;
pub use keys::PublicKey;
