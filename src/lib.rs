//! # Ringvm - Stored-Program Integer VM
//!
//! A small virtual machine over a flat, signed-integer memory: an
//! instruction pointer, a nine-opcode instruction set with two
//! parameter addressing modes, blocking FIFO I/O queues, and a driver
//! that wires several instances into a feedback ring.
//!
//! ## Core Components
//!
//! - **Program**: an immutable integer listing; every VM instance gets
//!   its own memory copied from it
//! - **Interpreter**: the fetch-decode-execute loop; suspends on empty
//!   input and resumes exactly where it left off
//! - **Channel**: unbounded FIFO queue, single producer and consumer
//! - **AmplifierRing**: N phase-seeded instances wired output -> input
//!   in a cycle, driven cooperatively until all halt
//!
//! ## Design Principles
//!
//! - Memory is never shared between instances; queues are the only
//!   shared resource and are moved by the driver, not aliased
//! - Suspension is a normal status, never an error; every fatal error
//!   carries the instruction pointer and the offending opcode/address
//! - Execution is single-threaded and cooperative; the ring driver is
//!   a plain round-robin loop, not a coroutine scheduler
//!
//! ## Example
//!
//! ```
//! use ringvm::{AmplifierRing, Program};
//!
//! let program = Program::parse(
//!     "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,\
//!      4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
//! )?;
//! let signal = AmplifierRing::new(&program, &[9, 8, 7, 6, 5]).run(0)?;
//! assert_eq!(signal, 139629729);
//! # Ok::<(), ringvm::VmError>(())
//! ```

// Core VM: memory, decoding, interpreter, I/O queues
pub mod vm;
pub use vm::{
    Channel, Instruction, Interpreter, Memory, MemoryModel, Mode, Opcode, Program, RunState,
    StepResult,
};

// Amplifier ring driver and phase-permutation search
pub mod amplifier;
pub use amplifier::{max_feedback_signal, AmplifierRing};

// Program loader - listing files to Program values
pub mod loader;
pub use loader::{load_path, load_string};

// Error types
mod error;
pub use error::{Result, VmError};
