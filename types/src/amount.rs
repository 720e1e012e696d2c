//! Fixed-point token amounts.
//!
//! Every asset on the ledger declares a decimal count; an amount is stored
//! as `human_value * 10^decimals` in an arbitrary-precision integer so no
//! rounding ever happens client-side. Amounts with different decimal counts
//! are deliberately incomparable.

use num_bigint::{BigInt, BigUint, Sign};
use std::cmp::Ordering;
use std::fmt;

use crate::error::AmountError;

/// A token amount scaled to its asset's declared decimal count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedAmount {
    raw: BigInt,
    decimals: u32,
}

impl FixedAmount {
    /// Wrap an already-scaled raw value.
    pub fn from_raw(raw: BigInt, decimals: u32) -> Self {
        Self { raw, decimals }
    }

    /// Parse a human decimal numeral into a scaled amount.
    ///
    /// The accepted grammar is `digits [ "." digits ]` — no sign (transfer
    /// amounts are never negative), no exponent. Supplying more fractional
    /// digits than the asset supports is an error, never a truncation.
    pub fn parse(s: &str, decimals: u32) -> Result<Self, AmountError> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (s, ""),
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || (s.contains('.') && !all_digits(frac_part)) {
            return Err(AmountError::MalformedNumber(s.to_string()));
        }
        if frac_part.len() as u32 > decimals {
            return Err(AmountError::PrecisionExceeded {
                digits: frac_part.len() as u32,
                decimals,
            });
        }

        let mut digits = String::with_capacity(int_part.len() + decimals as usize);
        digits.push_str(int_part);
        digits.push_str(frac_part);
        for _ in frac_part.len() as u32..decimals {
            digits.push('0');
        }
        let raw = digits
            .parse::<BigInt>()
            .map_err(|_| AmountError::MalformedNumber(s.to_string()))?;
        Ok(Self { raw, decimals })
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.sign() == Sign::NoSign
    }

    /// Sum two amounts. `None` when the decimal counts differ: amounts of
    /// different precisions are not combinable.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.decimals != other.decimals {
            return None;
        }
        Some(Self {
            raw: &self.raw + &other.raw,
            decimals: self.decimals,
        })
    }
}

impl PartialOrd for FixedAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.decimals == other.decimals).then(|| self.raw.cmp(&other.raw))
    }
}

impl fmt::Display for FixedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw.sign() == Sign::Minus { "-" } else { "" };
        let scale = BigUint::from(10u32).pow(self.decimals);
        let int = self.raw.magnitude() / &scale;
        let frac = self.raw.magnitude() % &scale;
        if frac == BigUint::from(0u8) {
            return write!(f, "{sign}{int}");
        }
        let mut frac_digits = frac.to_string();
        while frac_digits.len() < self.decimals as usize {
            frac_digits.insert(0, '0');
        }
        write!(f, "{sign}{int}.{}", frac_digits.trim_end_matches('0'))
    }
}
