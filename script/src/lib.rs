//! Contract-invocation script encoding.
//!
//! Serializes a contract call (method name plus typed positional parameters)
//! into the ledger VM's executable bytecode. Encoding is a pure function of
//! its inputs: the builder never consults chain state and never validates
//! that the target method exists — that is the VM's job at execution time.

pub mod builder;
pub mod opcode;
pub mod param;
pub mod stack;

pub use builder::{encode_invocation, ScriptBuilder};
pub use opcode::OpCode;
pub use param::ContractParameter;
pub use stack::StackValue;
