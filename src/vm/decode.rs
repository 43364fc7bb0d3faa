//! Instruction decoding - opcode plus per-parameter addressing modes
//!
//! An instruction is never stored; it is a transient view of `memory[ip]`:
//!
//! ```text
//! word = 1002
//!          ↓
//!   02  → opcode (mul)
//!   0   → mode of parameter 0 (position)
//!   1   → mode of parameter 1 (immediate)
//!   (absent) → mode of parameter 2 defaults to position
//! ```
//!
//! Mode digits run from least to most significant, matching the
//! left-to-right parameter order. Only digits covering the opcode's
//! arity are validated; a write target keeps its raw parameter value
//! no matter what its mode digit says.

use super::memory::Memory;
use super::opcode::Opcode;
use crate::error::{Result, VmError};

/// Maximum parameters any opcode takes
pub const MAX_PARAMS: usize = 3;

/// Per-parameter addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parameter is an address into memory
    #[default]
    Position,
    /// Parameter is the value itself
    Immediate,
}

impl Mode {
    /// Resolve a read parameter against memory.
    pub fn resolve(self, raw: i64, memory: &Memory) -> Result<i64> {
        match self {
            Self::Immediate => Ok(raw),
            Self::Position => memory.read(raw),
        }
    }
}

/// Transient decoding of one instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    modes: [Mode; MAX_PARAMS],
}

impl Instruction {
    /// Decode `word`, validating the mode digit of each parameter the
    /// opcode actually takes. `ip` is carried for error reports only.
    pub fn decode(word: i64, ip: usize) -> Result<Self> {
        let opcode = Opcode::from_word(word, ip)?;
        let mut modes = [Mode::Position; MAX_PARAMS];
        let mut digits = word / 100;
        for mode in modes.iter_mut().take(opcode.arity()) {
            *mode = match digits % 10 {
                0 => Mode::Position,
                1 => Mode::Immediate,
                digit => return Err(VmError::InvalidMode { digit, word, ip }),
            };
            digits /= 10;
        }
        Ok(Self { opcode, modes })
    }

    /// Addressing mode of parameter `index`
    pub fn mode(&self, index: usize) -> Mode {
        self.modes[index]
    }
}
