//! Signers, witness scopes, and transaction attributes.

use lattice_types::ContractHash;
use std::fmt;
use std::str::FromStr;

/// How broadly a signer's witness authorizes a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WitnessScope {
    /// Witness only pays fees; no contract may consume it.
    None,
    /// Witness is valid only while the entry script is on the call stack.
    CalledByEntry,
    /// Witness is valid anywhere in the execution.
    Global,
}

impl WitnessScope {
    /// Wire encoding of the scope in the transaction format.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::CalledByEntry => 0x01,
            Self::Global => 0x80,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::CalledByEntry => "CalledByEntry",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WitnessScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "None" => Ok(Self::None),
            "CalledByEntry" => Ok(Self::CalledByEntry),
            "Global" => Ok(Self::Global),
            other => Err(format!("unknown witness scope {other:?}")),
        }
    }
}

/// An account whose witness the transaction will carry, with its scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signer {
    pub account: ContractHash,
    pub scope: WitnessScope,
}

impl Signer {
    /// Cosigner at the most restrictive scope that still permits the entry
    /// invocation.
    pub fn called_by_entry(account: ContractHash) -> Self {
        Self {
            account,
            scope: WitnessScope::CalledByEntry,
        }
    }
}

/// Optional transaction attributes. Requests default to none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionAttribute {
    /// Prioritized by consensus; only committee members may attach it.
    HighPriority,
}

impl TransactionAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighPriority => "HighPriority",
        }
    }
}

impl FromStr for TransactionAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "HighPriority" => Ok(Self::HighPriority),
            other => Err(format!("unknown transaction attribute {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_wire_bytes() {
        assert_eq!(WitnessScope::None.as_byte(), 0x00);
        assert_eq!(WitnessScope::CalledByEntry.as_byte(), 0x01);
        assert_eq!(WitnessScope::Global.as_byte(), 0x80);
    }

    #[test]
    fn scope_names_round_trip() {
        for scope in [
            WitnessScope::None,
            WitnessScope::CalledByEntry,
            WitnessScope::Global,
        ] {
            assert_eq!(scope.as_str().parse::<WitnessScope>(), Ok(scope));
        }
        assert!("Everything".parse::<WitnessScope>().is_err());
    }

    #[test]
    fn cosigner_default_scope_is_entry_only() {
        let signer = Signer::called_by_entry(ContractHash::new([3u8; 20]));
        assert_eq!(signer.scope, WitnessScope::CalledByEntry);
    }
}
