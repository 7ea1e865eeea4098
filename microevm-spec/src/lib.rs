//! # microevm Specification
//!
//! Core types for a minimal 256-bit-word stack machine.
//!
//! ## Key Features
//! - 256-bit unsigned words with wraparound arithmetic
//! - One-byte opcodes over a closed six-instruction set
//! - Explicit instruction table built once and handed to the runtime
//! - Serializable per-step trace records
//!
//! The mutable machine itself (stack, memory, execution context, and the
//! decode-execute loop) lives in `microevm-runtime`.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod trace;
pub mod word;

pub use error::SpecError;
pub use instruction::{Instruction, InstructionSet};
pub use opcode::Opcode;
pub use trace::TraceRow;
pub use word::Word;

/// Bytes per machine word
pub const WORD_BYTES: usize = 32;

/// Bits per machine word
pub const WORD_BITS: usize = 256;

/// Default operand stack depth limit
pub const MAX_STACK_DEPTH: usize = 1024;

/// Default memory allocation ceiling in bytes
///
/// The machine's nominal address space covers 2^256 bytes; no platform can
/// honor that, so offsets past this ceiling are treated as resource
/// exhaustion by the runtime.
pub const DEFAULT_MEMORY_LIMIT: usize = 1 << 20;
