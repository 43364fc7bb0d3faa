//! Error types for ringvm

use thiserror::Error;

/// Ringvm error type
///
/// Every fatal condition carries enough context (instruction pointer,
/// offending opcode or address) to debug the program that tripped it.
/// Suspension on empty input is *not* an error; it is reported through
/// [`StepResult::NeedInput`](crate::vm::StepResult::NeedInput).
#[derive(Debug, Error)]
pub enum VmError {
    /// Addressing-mode digit other than 0 (position) or 1 (immediate)
    #[error("invalid addressing mode digit {digit} in word {word} at ip {ip}")]
    InvalidMode { digit: i64, word: i64, ip: usize },

    /// Memory access outside the valid address range
    #[error("address {address} out of range (memory length {len})")]
    OutOfRange { address: i64, len: usize },

    /// Opcode not in the instruction table
    #[error("unknown opcode {opcode} at ip {ip}")]
    UnknownOpcode { opcode: i64, ip: usize },

    /// Instruction pointer left `[0, len)` without reaching halt
    #[error("instruction pointer {ip} outside memory of length {len} without halting")]
    PointerOutOfBounds { ip: i64, len: usize },

    /// Malformed token in a program listing
    #[error("invalid value {token:?} in program listing")]
    BadListing { token: String },

    /// IO error while loading a program listing
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Amplifier ring completed without ever feeding a value back
    #[error("amplifier ring halted without producing a signal")]
    NoSignal,

    /// Every live amplifier is blocked on input and no value can arrive
    #[error("amplifier ring stalled: every interpreter is blocked on input")]
    Stalled,
}

pub type Result<T> = std::result::Result<T, VmError>;
