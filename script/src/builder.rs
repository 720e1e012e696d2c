//! Deterministic script construction.

use lattice_types::ContractHash;
use num_bigint::{BigInt, Sign};

use crate::opcode::{syscall_id, OpCode, SYSTEM_CONTRACT_CALL};
use crate::param::ContractParameter;

/// Call flags requested for a dynamic contract call (all permissions).
const CALL_FLAGS_ALL: u8 = 0x0f;

/// Accumulates VM instructions. The same emit sequence always yields the
/// same bytes.
#[derive(Default)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Push an integer using the shortest encoding the VM accepts:
    /// `PUSHM1`/`PUSH0`..`PUSH16` for small values, otherwise a
    /// little-endian two's-complement operand sign-extended to the next
    /// `PUSHINT` width.
    ///
    /// # Panics
    /// Panics if the value does not fit in 256 bits; the VM has no wider
    /// integer push.
    pub fn emit_push_int(&mut self, value: &BigInt) -> &mut Self {
        if let Ok(small) = i8::try_from(value) {
            if small == -1 {
                return self.emit(OpCode::PushM1);
            }
            if (0..=16).contains(&small) {
                self.script.push(OpCode::Push0 as u8 + small as u8);
                return self;
            }
        }
        let mut bytes = value.to_signed_bytes_le();
        let (op, width) = match bytes.len() {
            1 => (OpCode::PushInt8, 1),
            2 => (OpCode::PushInt16, 2),
            3..=4 => (OpCode::PushInt32, 4),
            5..=8 => (OpCode::PushInt64, 8),
            9..=16 => (OpCode::PushInt128, 16),
            17..=32 => (OpCode::PushInt256, 32),
            n => panic!("integer operand of {n} bytes exceeds 256 bits"),
        };
        let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
        bytes.resize(width, fill);
        self.emit(op);
        self.script.extend_from_slice(&bytes);
        self
    }

    /// Push raw bytes with the narrowest `PUSHDATA` length prefix.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> &mut Self {
        if data.len() < 0x100 {
            self.emit(OpCode::PushData1);
            self.script.push(data.len() as u8);
        } else if data.len() < 0x1_0000 {
            self.emit(OpCode::PushData2);
            self.script.extend_from_slice(&(data.len() as u16).to_le_bytes());
        } else {
            self.emit(OpCode::PushData4);
            self.script.extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit(if value { OpCode::PushTrue } else { OpCode::PushFalse })
    }

    pub fn emit_push(&mut self, param: &ContractParameter) -> &mut Self {
        match param {
            ContractParameter::Hash160(hash) => self.emit_push_bytes(hash.as_bytes()),
            ContractParameter::Integer(value) => self.emit_push_int(value),
            ContractParameter::Boolean(value) => self.emit_push_bool(*value),
            ContractParameter::ByteArray(bytes) => self.emit_push_bytes(bytes),
            ContractParameter::String(s) => self.emit_push_bytes(s.as_bytes()),
            ContractParameter::PublicKey(key) => self.emit_push_bytes(&key.to_bytes()),
            ContractParameter::Array(elements) => self.emit_push_array(elements),
        }
    }

    /// Elements are pushed in reverse declaration order, then the count,
    /// then `PACK`, so the VM pops them back into declared order.
    pub fn emit_push_array(&mut self, elements: &[ContractParameter]) -> &mut Self {
        if elements.is_empty() {
            return self.emit(OpCode::NewArray0);
        }
        for element in elements.iter().rev() {
            self.emit_push(element);
        }
        self.emit_push_int(&BigInt::from(elements.len()));
        self.emit(OpCode::Pack)
    }

    pub fn emit_syscall(&mut self, service: &str) -> &mut Self {
        self.emit(OpCode::Syscall);
        self.script.extend_from_slice(&syscall_id(service));
        self
    }

    /// Emit a dynamic contract call: packed argument array, call flags,
    /// method name, contract hash, `System.Contract.Call`.
    pub fn emit_contract_call(
        &mut self,
        contract: ContractHash,
        method: &str,
        args: &[ContractParameter],
    ) -> &mut Self {
        self.emit_push_array(args);
        self.emit_push_int(&BigInt::from(CALL_FLAGS_ALL));
        self.emit_push_bytes(method.as_bytes());
        self.emit_push_bytes(contract.as_bytes());
        self.emit_syscall(SYSTEM_CONTRACT_CALL)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

/// Encode a contract-method invocation into executable script bytes.
///
/// Pure and deterministic: identical inputs always produce identical bytes.
/// Arguments are encoded strictly in declaration order.
pub fn encode_invocation(
    contract: ContractHash,
    method: &str,
    args: &[ContractParameter],
) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    builder.emit_contract_call(contract, method, args);
    builder.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(f: impl FnOnce(&mut ScriptBuilder)) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        f(&mut builder);
        builder.into_bytes()
    }

    #[test]
    fn small_integers_use_single_byte_pushes() {
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(-1));
        }), vec![0x0f]);
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(0));
        }), vec![0x10]);
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(16));
        }), vec![0x20]);
    }

    #[test]
    fn wider_integers_sign_extend_little_endian() {
        // 17 is the first value past the PUSH16 window.
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(17));
        }), vec![0x00, 0x11]);
        // 255 needs a second byte to stay non-negative in two's complement.
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(255));
        }), vec![0x01, 0xff, 0x00]);
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(-2));
        }), vec![0x00, 0xfe]);
        // Three significant bytes round up to the 4-byte operand.
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(0xffff));
        }), vec![0x02, 0xff, 0xff, 0x00, 0x00]);
        assert_eq!(built(|b| {
            b.emit_push_int(&BigInt::from(-100_000));
        }), vec![0x02, 0x60, 0x79, 0xfe, 0xff]);
    }

    #[test]
    fn transfer_scale_integer_encoding() {
        // 1_050_000_000 = 0x3e95ba80 fits the 4-byte operand exactly.
        assert_eq!(
            built(|b| {
                b.emit_push_int(&BigInt::from(1_050_000_000u64));
            }),
            vec![0x02, 0x80, 0xba, 0x95, 0x3e]
        );
    }

    #[test]
    fn push_data_prefix_widens_with_length() {
        let short = vec![0xaa; 0xff];
        let bytes = built(|b| {
            b.emit_push_bytes(&short);
        });
        assert_eq!(&bytes[..2], &[0x0c, 0xff]);
        assert_eq!(bytes.len(), 2 + 0xff);

        let medium = vec![0xbb; 0x100];
        let bytes = built(|b| {
            b.emit_push_bytes(&medium);
        });
        assert_eq!(&bytes[..3], &[0x0d, 0x00, 0x01]);

        let long = vec![0xcc; 0x1_0000];
        let bytes = built(|b| {
            b.emit_push_bytes(&long);
        });
        assert_eq!(&bytes[..5], &[0x0e, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn booleans() {
        assert_eq!(built(|b| {
            b.emit_push_bool(true);
        }), vec![0x08]);
        assert_eq!(built(|b| {
            b.emit_push_bool(false);
        }), vec![0x09]);
    }

    #[test]
    fn empty_array_is_newarray0() {
        assert_eq!(built(|b| {
            b.emit_push_array(&[]);
        }), vec![0xc2]);
    }

    #[test]
    fn array_packs_elements_in_reverse() {
        let elements = [
            ContractParameter::Integer(BigInt::from(1)),
            ContractParameter::Integer(BigInt::from(2)),
        ];
        // PUSH2, PUSH1 (reverse order), count PUSH2, PACK
        assert_eq!(built(|b| {
            b.emit_push_array(&elements);
        }), vec![0x12, 0x11, 0x12, 0xc0]);
    }

    #[test]
    fn arrays_nest_recursively() {
        let inner = ContractParameter::Array(vec![ContractParameter::Boolean(true)]);
        let elements = [inner, ContractParameter::Integer(BigInt::from(3))];
        // PUSH3, then the inner array (PUSHT, count 1, PACK), count 2, PACK
        assert_eq!(
            built(|b| {
                b.emit_push_array(&elements);
            }),
            vec![0x13, 0x08, 0x11, 0xc0, 0x12, 0xc0]
        );
    }

    #[test]
    fn contract_call_layout() {
        let contract: ContractHash = "0xd2a4cff31913016155e38e474a2c06d08be276cf"
            .parse()
            .unwrap();
        let script = encode_invocation(contract, "decimals", &[]);

        let mut expected = vec![0xc2]; // empty argument array
        expected.push(0x1f); // call flags: PUSH15
        expected.extend_from_slice(&[0x0c, 0x08]); // PUSHDATA1, len("decimals")
        expected.extend_from_slice(b"decimals");
        expected.extend_from_slice(&[0x0c, 0x14]); // PUSHDATA1, 20-byte hash
        expected.extend_from_slice(contract.as_bytes());
        expected.extend_from_slice(&[0x41, 0x62, 0x7d, 0x5b, 0x52]); // SYSCALL
        assert_eq!(script, expected);
    }

    #[test]
    fn identical_inputs_yield_identical_bytes() {
        let contract = ContractHash::new([7u8; 20]);
        let args = [
            ContractParameter::Hash160(ContractHash::new([9u8; 20])),
            ContractParameter::Array(vec![ContractParameter::Integer(BigInt::from(42))]),
        ];
        let first = encode_invocation(contract, "vote", &args);
        let second = encode_invocation(contract, "vote", &args);
        assert_eq!(first, second);
    }
}
