//! Runtime error types for microevm
//!
//! Every variant is fatal to the run that raised it; nothing is retried
//! or recovered inside the machine.

use microevm_spec::{SpecError, Word};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Stack overflow: depth {depth} at capacity {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },

    #[error("Stack underflow: pop on empty stack")]
    StackUnderflow,

    #[error("Invalid memory offset: {offset} does not fit the address space")]
    InvalidOffset { offset: Word },

    #[error("Invalid byte value: {value:#x} is wider than one byte")]
    InvalidByteValue { value: u64 },

    #[error("Memory limit exceeded: offset {offset} is past the {limit}-byte ceiling")]
    MemoryLimitExceeded { offset: usize, limit: usize },

    #[error("Invalid program counter: pc {pc} outside code of length {code_len}")]
    InvalidProgramCounter { pc: usize, code_len: usize },

    #[error("Invalid opcode {opcode:#04x} at pc {pc}")]
    InvalidOpcode { opcode: u8, pc: usize },
}

pub type Result<T> = std::result::Result<T, VmError>;
