//! Opcode - operation table for the ringvm instruction set
//!
//! The opcode is the low two decimal digits of an instruction word.
//!
//! | Code | Mnemonic | Params | Effect                                  |
//! |------|----------|--------|-----------------------------------------|
//! | 1    | add      | 3      | mem[c] = a + b                          |
//! | 2    | mul      | 3      | mem[c] = a * b                          |
//! | 3    | in       | 1      | mem[a] = pop(input), suspends if empty  |
//! | 4    | out      | 1      | push(output, a)                         |
//! | 5    | jnz      | 2      | if a != 0 { ip = b }                    |
//! | 6    | jz       | 2      | if a == 0 { ip = b }                    |
//! | 7    | lt       | 3      | mem[c] = (a < b) as int                 |
//! | 8    | eq       | 3      | mem[c] = (a == b) as int                |
//! | 99   | halt     | 0      | terminal                                |

use crate::error::{Result, VmError};
use std::fmt;

/// Operation selector decoded from the low two digits of an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// mem[c] = a + b
    Add,
    /// mem[c] = a * b
    Mul,
    /// mem[a] = next input value; suspends when the queue is empty
    Input,
    /// push a onto the output queue
    Output,
    /// if a != 0, jump to b
    JumpIfTrue,
    /// if a == 0, jump to b
    JumpIfFalse,
    /// mem[c] = 1 if a < b else 0
    LessThan,
    /// mem[c] = 1 if a == b else 0
    Equals,
    /// terminal state
    Halt,
}

impl Opcode {
    /// Decode the low two digits of an instruction word.
    ///
    /// `ip` is carried only for the error report.
    pub fn from_word(word: i64, ip: usize) -> Result<Self> {
        match word.rem_euclid(100) {
            1 => Ok(Self::Add),
            2 => Ok(Self::Mul),
            3 => Ok(Self::Input),
            4 => Ok(Self::Output),
            5 => Ok(Self::JumpIfTrue),
            6 => Ok(Self::JumpIfFalse),
            7 => Ok(Self::LessThan),
            8 => Ok(Self::Equals),
            99 => Ok(Self::Halt),
            opcode => Err(VmError::UnknownOpcode { opcode, ip }),
        }
    }

    /// Number of parameter words following the instruction word
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Mul | Self::LessThan | Self::Equals => 3,
            Self::JumpIfTrue | Self::JumpIfFalse => 2,
            Self::Input | Self::Output => 1,
            Self::Halt => 0,
        }
    }

    /// Index of the write-target parameter, if the opcode writes memory.
    ///
    /// Write targets are raw addresses regardless of their mode digit.
    pub const fn write_param(self) -> Option<usize> {
        match self {
            Self::Add | Self::Mul | Self::LessThan | Self::Equals => Some(2),
            Self::Input => Some(0),
            _ => None,
        }
    }

    /// Assembly-style name for diagnostics
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Input => "in",
            Self::Output => "out",
            Self::JumpIfTrue => "jnz",
            Self::JumpIfFalse => "jz",
            Self::LessThan => "lt",
            Self::Equals => "eq",
            Self::Halt => "halt",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
