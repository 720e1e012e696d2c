//! Read-only chain collaborators.

use lattice_script::{ContractParameter, StackValue};
use lattice_types::ContractHash;
use thiserror::Error;

/// Failure querying the ledger or executing a read-only invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("ledger query failed: {0}")]
    Transport(String),

    #[error("read-only invocation faulted: {0}")]
    Fault(String),

    #[error("malformed node response: {0}")]
    Response(String),
}

/// Manifest data for a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDescriptor {
    pub hash: ContractHash,
    pub name: String,
}

/// Contract-state lookup against current ledger state.
pub trait LedgerQuery {
    /// `Ok(None)` when no contract is deployed at `hash`.
    fn get_contract(&self, hash: ContractHash) -> Result<Option<ContractDescriptor>, QueryError>;
}

/// Read-only contract invocation: test execution, no state change, no
/// witness checking.
pub trait InvocationReader {
    /// Run `method` on `contract` and return the top of the result stack.
    fn invoke_read(
        &self,
        contract: ContractHash,
        method: &str,
        args: &[ContractParameter],
    ) -> Result<StackValue, QueryError>;
}
