//! Compressed secp256r1 public keys.
//!
//! Governance candidates are identified by their compressed SEC1 encoding
//! (33 bytes). Parsing goes through the curve implementation, so an
//! off-curve point is rejected, not just a wrong length.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// A secp256r1 public key, held as a validated curve point.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(p256::PublicKey);

impl PublicKey {
    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        p256::PublicKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| KeyError::MalformedPublicKey(hex::encode(bytes)))
    }

    /// The canonical 33-byte compressed SEC1 encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(true).as_bytes().to_vec()
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))
            .map_err(|_| KeyError::MalformedPublicKey(s.to_string()))?;
        Self::from_sec1_bytes(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}…)", &self.to_string()[..10])
    }
}
