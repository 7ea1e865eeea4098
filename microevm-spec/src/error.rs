//! # Error Types for microevm-spec
//!
//! Construction-time failures, kept separate from the runtime's per-run
//! errors: both variants indicate a defect in how the machine was set up,
//! not in the code being executed.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Invalid word: {len} bytes does not fit a 256-bit word")]
    InvalidWord { len: usize },

    #[error("Duplicate opcode {opcode:#04x} in instruction table")]
    DuplicateOpcode { opcode: u8 },
}
