//! # Instruction Table
//!
//! The registry mapping opcode bytes to named instructions. The table is
//! built once, before any run, and only read afterwards: it is an explicit
//! value handed to the virtual machine, never ambient global state.
//!
//! Execution semantics are not stored in the table. They are dispatched in
//! the runtime by an exhaustive match over [`Opcode`], so an unhandled
//! opcode is a compile error rather than a runtime lookup miss.

use std::fmt;

use crate::error::SpecError;
use crate::opcode::Opcode;

/// A named instruction: an opcode paired with its mnemonic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    name: &'static str,
}

impl Instruction {
    pub const fn new(opcode: Opcode) -> Self {
        Instruction {
            opcode,
            name: opcode.mnemonic(),
        }
    }

    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Immutable-after-init mapping from opcode byte to instruction
#[derive(Clone, Debug)]
pub struct InstructionSet {
    by_opcode: [Option<Instruction>; 256],
}

impl InstructionSet {
    /// An empty table
    pub const fn empty() -> Self {
        InstructionSet {
            by_opcode: [None; 256],
        }
    }

    /// The machine's six-instruction table
    pub fn standard() -> Self {
        let mut set = Self::empty();
        for opcode in Opcode::ALL {
            set.register(Instruction::new(opcode))
                .expect("standard opcode table has no duplicates");
        }
        set
    }

    /// Register an instruction.
    ///
    /// Registering a second instruction on an occupied opcode byte is a
    /// table-setup defect and fails with [`SpecError::DuplicateOpcode`]
    /// here, at registration time, not during a run.
    pub fn register(&mut self, instruction: Instruction) -> Result<(), SpecError> {
        let opcode = instruction.opcode().to_u8();
        let slot = &mut self.by_opcode[opcode as usize];
        if slot.is_some() {
            return Err(SpecError::DuplicateOpcode { opcode });
        }
        *slot = Some(instruction);
        Ok(())
    }

    /// Look up the instruction registered on a raw opcode byte.
    ///
    /// A miss returns `None`; the decode step is responsible for turning
    /// that into a runtime error.
    pub fn lookup(&self, opcode: u8) -> Option<&Instruction> {
        self.by_opcode[opcode as usize].as_ref()
    }

    /// Number of registered instructions
    pub fn len(&self) -> usize {
        self.by_opcode.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.by_opcode.iter().all(|slot| slot.is_none())
    }

    /// Registered instructions in opcode order
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.by_opcode.iter().filter_map(|slot| slot.as_ref())
    }
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self::standard()
    }
}
