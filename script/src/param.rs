//! Typed parameters for contract invocations.

use lattice_types::{ContractHash, PublicKey};
use num_bigint::BigInt;

/// A positional argument to a contract method.
///
/// A closed sum over the parameter kinds the ledger understands. Method
/// arguments are positional, never named; `Array` nests recursively.
#[derive(Clone, Debug, PartialEq)]
pub enum ContractParameter {
    Hash160(ContractHash),
    Integer(BigInt),
    Boolean(bool),
    ByteArray(Vec<u8>),
    String(String),
    PublicKey(PublicKey),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    /// The wire name of this parameter's kind, as used in RPC payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Hash160(_) => "Hash160",
            Self::Integer(_) => "Integer",
            Self::Boolean(_) => "Boolean",
            Self::ByteArray(_) => "ByteArray",
            Self::String(_) => "String",
            Self::PublicKey(_) => "PublicKey",
            Self::Array(_) => "Array",
        }
    }
}
