//! Ringvm core - stored-program integer VM
//!
//! A program is a flat list of signed integers. Each word's low two
//! decimal digits are the opcode; the remaining digits, least
//! significant first, select per-parameter addressing modes:
//!
//! ```text
//! 1002,4,3,4,33
//!  ↓
//! mul  (mem[4]) (imm 3) -> mem[4]
//! ```
//!
//! ## Components
//!
//! - [`Program`]: immutable listing, parsed once, copied per instance
//! - [`Memory`]: owned address space, [`MemoryModel::Fixed`] or
//!   [`MemoryModel::Extended`]
//! - [`Instruction`]/[`Opcode`]/[`Mode`]: transient decoding of one word
//! - [`Channel`]: FIFO input/output queue, single producer and consumer
//! - [`Interpreter`]: fetch-decode-execute loop; suspends on empty
//!   input and resumes without losing state
//!
//! ## Example
//!
//! ```
//! use ringvm::vm::{Interpreter, Program, RunState};
//!
//! let program = Program::parse("3,0,4,0,99")?;
//! let mut vm = Interpreter::new(&program);
//! vm.push_input(12);
//! assert_eq!(vm.run()?, RunState::Halted);
//! assert_eq!(vm.pop_output(), Some(12));
//! # Ok::<(), ringvm::VmError>(())
//! ```

mod channel;
mod decode;
mod interpreter;
mod memory;
mod opcode;
mod program;

pub use channel::Channel;
pub use decode::{Instruction, Mode, MAX_PARAMS};
pub use interpreter::{Interpreter, RunState, StepResult};
pub use memory::{Memory, MemoryModel};
pub use opcode::Opcode;
pub use program::Program;
