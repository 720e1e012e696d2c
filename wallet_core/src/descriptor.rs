//! Asset descriptor resolution.

use lattice_types::ContractHash;

use crate::chain::{InvocationReader, LedgerQuery, QueryError};
use crate::error::BuildError;

/// Name and decimal precision of a token contract.
///
/// Resolved fresh for every command against current ledger state — never
/// cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub hash: ContractHash,
    pub name: String,
    pub decimals: u32,
}

impl AssetDescriptor {
    /// Resolve an asset with a single pass over the chain collaborator:
    /// the manifest supplies the name, a read-only `decimals()` invocation
    /// supplies the precision. No retry; callers re-resolve per command.
    pub fn resolve<C>(chain: &C, hash: ContractHash) -> Result<Self, BuildError>
    where
        C: LedgerQuery + InvocationReader,
    {
        let contract = chain
            .get_contract(hash)
            .map_err(|e| BuildError::ContractQueryFailed(e.to_string()))?
            .ok_or(BuildError::UnknownAsset(hash))?;

        let item = match chain.invoke_read(hash, "decimals", &[]) {
            Ok(item) => item,
            Err(QueryError::Fault(reason)) => {
                return Err(BuildError::MalformedAsset { hash, reason });
            }
            Err(e) => return Err(BuildError::ContractQueryFailed(e.to_string())),
        };
        let value = item.as_integer().ok_or_else(|| BuildError::MalformedAsset {
            hash,
            reason: "decimals() did not return an integer".into(),
        })?;
        let decimals = u32::try_from(value).map_err(|_| BuildError::MalformedAsset {
            hash,
            reason: format!("decimals() out of range: {value}"),
        })?;

        Ok(Self {
            hash,
            name: contract.name,
            decimals,
        })
    }
}
