//! # Step Trace Records
//!
//! One record per executed instruction, emitted in execution order. The
//! trace is the machine's primary observable output besides the final
//! halted/failed status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::word::Word;

/// A single step record
///
/// Captures the executed instruction's mnemonic, the program counter it
/// was fetched from, and the stack and memory contents after the step
/// completed. No record exists for a failing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    /// Instruction mnemonic
    pub name: String,

    /// Program counter before the step
    pub pc: usize,

    /// Stack contents after the step, bottom to top
    pub stack: Vec<Word>,

    /// Memory contents after the step
    pub memory: Vec<u8>,
}

impl TraceRow {
    pub fn new(
        name: impl Into<String>,
        pc: usize,
        stack: Vec<Word>,
        memory: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            pc,
            stack,
            memory,
        }
    }
}

impl fmt::Display for TraceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} @ pc={}", self.name, self.pc)?;
        let stack: Vec<String> = self.stack.iter().map(Word::to_string).collect();
        writeln!(f, "stack: [{}]", stack.join(", "))?;
        write!(f, "memory: {:?}", self.memory)
    }
}
