use thiserror::Error;

/// Failure parsing a human decimal amount into fixed-point form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("malformed amount {0:?}")]
    MalformedNumber(String),

    #[error("amount has {digits} fractional digits but the asset supports {decimals}")]
    PrecisionExceeded { digits: u32, decimals: u32 },
}

/// Failure parsing a 160-bit hash from its hex form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("hash must be 40 hex characters, got {0}")]
    Length(usize),

    #[error("invalid hex in hash {0:?}")]
    Hex(String),
}

/// Failure parsing a secp256r1 public key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("malformed public key {0:?}")]
    MalformedPublicKey(String),
}
