//! VM instruction bytes emitted by the script builder.

use sha2::{Digest, Sha256};

/// The subset of VM opcodes the builder emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Push a 1-byte signed integer operand.
    PushInt8 = 0x00,
    PushInt16 = 0x01,
    PushInt32 = 0x02,
    PushInt64 = 0x03,
    PushInt128 = 0x04,
    PushInt256 = 0x05,
    PushTrue = 0x08,
    PushFalse = 0x09,
    /// Push data with a 1-byte length prefix.
    PushData1 = 0x0c,
    /// Push data with a 2-byte little-endian length prefix.
    PushData2 = 0x0d,
    /// Push data with a 4-byte little-endian length prefix.
    PushData4 = 0x0e,
    PushM1 = 0x0f,
    /// `PUSH0`; `PUSH1`..`PUSH16` are the 16 bytes that follow.
    Push0 = 0x10,
    Syscall = 0x41,
    /// Pop N items plus the count and push them as one array.
    Pack = 0xc0,
    NewArray0 = 0xc2,
}

/// The interop service that dispatches every contract call.
pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";

/// Interop service id: the first four bytes of the SHA-256 digest of the
/// service name, emitted after `SYSCALL` in digest order.
pub fn syscall_id(service: &str) -> [u8; 4] {
    let digest = Sha256::digest(service.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}
