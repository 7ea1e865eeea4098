//! # microevm Runtime
//!
//! The mutable half of the machine: operand stack, byte-addressable
//! memory, the execution context of one run, and the decode-execute loop
//! driving the instruction table from `microevm-spec`.
//!
//! ## Example
//!
//! ```
//! use microevm_runtime::run_code;
//!
//! // PUSH1 0x04, PUSH1 0x01, MSTORE8, STOP
//! let result = run_code([0x60, 0x04, 0x60, 0x01, 0x53, 0x00]).unwrap();
//! assert_eq!(result.steps, 4);
//! assert_eq!(result.trace.last().unwrap().memory, vec![0, 4]);
//! ```

pub mod context;
pub mod error;
pub mod execute;
pub mod memory;
pub mod stack;
pub mod vm;

pub use context::ExecutionContext;
pub use error::{Result, VmError};
pub use execute::execute;
pub use memory::Memory;
pub use stack::Stack;
pub use vm::{run_code, ExecutionResult, Vm, VmConfig};
