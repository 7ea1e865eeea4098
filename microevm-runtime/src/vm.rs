//! Virtual machine driver: the decode-execute loop

use serde::{Deserialize, Serialize};

use microevm_spec::{
    Instruction, InstructionSet, TraceRow, DEFAULT_MEMORY_LIMIT, MAX_STACK_DEPTH,
};

use crate::context::ExecutionContext;
use crate::error::{Result, VmError};
use crate::execute::execute;
use crate::memory::Memory;
use crate::stack::Stack;

/// VM configuration
#[derive(Debug, Clone)]
pub struct VmConfig {
    /// Operand stack depth limit
    pub max_stack_depth: usize,

    /// Memory allocation ceiling in bytes
    pub memory_limit: usize,

    /// Emit a log event per executed step
    pub trace: bool,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: MAX_STACK_DEPTH,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            trace: false,
        }
    }
}

/// Result of a run that reached a halt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Number of executed steps
    pub steps: u64,

    /// Data captured by RETURN, if the run ended with one
    pub return_data: Option<Vec<u8>>,

    /// One record per executed step, in execution order
    pub trace: Vec<TraceRow>,
}

/// The decode-execute loop over one context
///
/// The instruction set is read-only once the machine is built; a single
/// set can be cloned into any number of independent machines.
#[derive(Debug)]
pub struct Vm {
    context: ExecutionContext,
    instructions: InstructionSet,
    config: VmConfig,
}

impl Vm {
    /// A machine over `code` with the standard instruction table
    pub fn new(code: impl Into<Vec<u8>>, config: VmConfig) -> Self {
        Self::with_instruction_set(code, InstructionSet::standard(), config)
    }

    /// A machine over `code` with a caller-built instruction table
    pub fn with_instruction_set(
        code: impl Into<Vec<u8>>,
        instructions: InstructionSet,
        config: VmConfig,
    ) -> Self {
        let stack = Stack::with_max_depth(config.max_stack_depth);
        let memory = Memory::with_limit(config.memory_limit);
        Vm {
            context: ExecutionContext::new(code, stack, memory),
            instructions,
            config,
        }
    }

    /// Run to completion.
    ///
    /// Any step failure aborts the run immediately and surfaces as the
    /// terminal result; no trace row exists for the failing step.
    pub fn run(mut self) -> Result<ExecutionResult> {
        let mut trace = Vec::new();
        while let Some(row) = self.step()? {
            trace.push(row);
        }

        let steps = trace.len() as u64;
        let return_data = self.context.take_return_data();
        if self.config.trace {
            tracing::debug!(
                "halted after {} steps, return data {} bytes",
                steps,
                return_data.as_ref().map_or(0, Vec::len)
            );
        }

        Ok(ExecutionResult {
            steps,
            return_data,
            trace,
        })
    }

    /// Execute one step and return its trace record, or `None` once the
    /// context has halted.
    ///
    /// External drivers can use this to consume trace records as they are
    /// produced, or to abort a run between steps.
    pub fn step(&mut self) -> Result<Option<TraceRow>> {
        if self.context.is_halted() {
            return Ok(None);
        }

        let pc_before = self.context.pc;
        let instruction = self.fetch_and_decode()?;
        execute(&instruction, &mut self.context)?;

        if self.config.trace {
            tracing::debug!(
                "{} @ pc={} (stack depth {})",
                instruction.name(),
                pc_before,
                self.context.stack.len()
            );
        }

        Ok(Some(TraceRow::new(
            instruction.name(),
            pc_before,
            self.context.stack.items().to_vec(),
            self.context.memory.bytes().to_vec(),
        )))
    }

    /// Fetch the next opcode byte and resolve it through the table
    fn fetch_and_decode(&mut self) -> Result<Instruction> {
        let pc = self.context.pc;
        let code_len = self.context.code().len();
        if pc >= code_len {
            return Err(VmError::InvalidProgramCounter { pc, code_len });
        }
        let opcode = self.context.read_code(1)?.low_byte();
        self.instructions
            .lookup(opcode)
            .copied()
            .ok_or(VmError::InvalidOpcode { opcode, pc })
    }

    /// The machine's context, for inspection between steps
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }
}

/// Execute `code` in a fresh machine with the default configuration
pub fn run_code(code: impl Into<Vec<u8>>) -> Result<ExecutionResult> {
    Vm::new(code, VmConfig::default()).run()
}
