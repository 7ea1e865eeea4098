//! # microevm Opcode Definitions
//!
//! One-byte opcodes for the machine's six instructions, numbered the EVM
//! way:
//! - 0x00: STOP
//! - 0x01-0x02: arithmetic (ADD, MUL)
//! - 0x53: memory (MSTORE8)
//! - 0x60: push with immediate operand (PUSH1)
//! - 0xF3: RETURN

use serde::{Deserialize, Serialize};

/// Instruction opcode (one byte)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// STOP: halt the context
    Stop = 0x00,
    /// ADD: pop a, pop b, push (a + b) mod 2^256
    Add = 0x01,
    /// MUL: pop a, pop b, push (a * b) mod 2^256
    Mul = 0x02,
    /// MSTORE8: pop offset, pop value, store value mod 256 at offset
    Mstore8 = 0x53,
    /// PUSH1: read one immediate code byte, push it as a word
    Push1 = 0x60,
    /// RETURN: pop offset, pop size, capture that memory region, halt
    Return = 0xF3,
}

impl Opcode {
    /// Every opcode, in registration order
    pub const ALL: [Opcode; 6] = [
        Opcode::Stop,
        Opcode::Push1,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Mstore8,
        Opcode::Return,
    ];

    /// Try to convert from a raw byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Opcode::Stop),
            0x01 => Some(Opcode::Add),
            0x02 => Some(Opcode::Mul),
            0x53 => Some(Opcode::Mstore8),
            0x60 => Some(Opcode::Push1),
            0xF3 => Some(Opcode::Return),
            _ => None,
        }
    }

    /// Convert to a raw byte
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Uppercase mnemonic, as it appears in step traces
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Stop => "STOP",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Mstore8 => "MSTORE8",
            Opcode::Push1 => "PUSH1",
            Opcode::Return => "RETURN",
        }
    }

    /// Number of immediate operand bytes following the opcode in the code
    #[inline]
    pub const fn immediate_bytes(self) -> usize {
        match self {
            Opcode::Push1 => 1,
            _ => 0,
        }
    }

    /// Check if executing this opcode halts the context
    #[inline]
    pub const fn halts(self) -> bool {
        matches!(self, Opcode::Stop | Opcode::Return)
    }

    /// Check if this is an arithmetic opcode
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Mul)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
