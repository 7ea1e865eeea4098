//! Instruction execution
//!
//! Semantics for every opcode, dispatched by an exhaustive match so the
//! instruction set is closed at compile time.

use microevm_spec::{Instruction, Opcode, Word};

use crate::context::ExecutionContext;
use crate::error::{Result, VmError};

/// Convert a 256-bit operand into a host memory offset or size
fn operand_to_offset(word: Word) -> Result<usize> {
    word.to_usize().ok_or(VmError::InvalidOffset { offset: word })
}

/// Execute a single instruction against the context.
///
/// Sub-effects land in order and are not rolled back on failure: if a
/// push fails after two pops, the pops stay consumed.
pub fn execute(instruction: &Instruction, ctx: &mut ExecutionContext) -> Result<()> {
    match instruction.opcode() {
        Opcode::Stop => {
            tracing::debug!("STOP at pc={}", ctx.pc);
            ctx.stop();
        }

        Opcode::Push1 => {
            let immediate = ctx.read_code(1)?;
            ctx.stack.push(immediate)?;
        }

        Opcode::Add => {
            let a = ctx.stack.pop()?;
            let b = ctx.stack.pop()?;
            ctx.stack.push(a.wrapping_add(b))?;
        }

        Opcode::Mul => {
            let a = ctx.stack.pop()?;
            let b = ctx.stack.pop()?;
            ctx.stack.push(a.wrapping_mul(b))?;
        }

        Opcode::Mstore8 => {
            // offset first, value second: the pop order is positional
            let offset = ctx.stack.pop()?;
            let value = ctx.stack.pop()?;
            let offset = operand_to_offset(offset)?;
            ctx.memory.store(offset, value.low_byte() as u64)?;
        }

        Opcode::Return => {
            let offset = ctx.stack.pop()?;
            let size = ctx.stack.pop()?;
            let offset = operand_to_offset(offset)?;
            let size = operand_to_offset(size)?;
            ctx.set_return_data(offset, size)?;
            tracing::debug!("RETURN {} bytes at pc={}", size, ctx.pc);
        }
    }
    Ok(())
}
