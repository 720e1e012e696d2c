//! Evaluation-stack values returned by read-only invocations.

use num_bigint::BigInt;

/// A value left on the VM's evaluation stack after a read-only invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum StackValue {
    Null,
    Boolean(bool),
    Integer(BigInt),
    ByteString(Vec<u8>),
    Array(Vec<StackValue>),
}

impl StackValue {
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// UTF-8 view of a byte-string item.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_accessor() {
        let item = StackValue::Integer(BigInt::from(8));
        assert_eq!(item.as_integer(), Some(&BigInt::from(8)));
        assert_eq!(item.as_bytes(), None);
    }

    #[test]
    fn byte_string_as_str() {
        let item = StackValue::ByteString(b"Token".to_vec());
        assert_eq!(item.as_str(), Some("Token"));
        assert_eq!(StackValue::ByteString(vec![0xff, 0xfe]).as_str(), None);
    }
}
