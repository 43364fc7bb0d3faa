//! Interpreter - fetch-decode-execute state machine
//!
//! One instruction per [`Interpreter::step`]. The interpreter owns its
//! memory and both I/O channels; the only suspension point is the `in`
//! opcode on an empty input queue, which returns
//! [`StepResult::NeedInput`] *without* advancing the pointer, so a
//! later [`Interpreter::run`] resumes exactly where it left off. That
//! resumability is what the amplifier ring's cooperative scheduling
//! leans on.
//!
//! Fatal conditions (unknown opcode, bad mode digit, address out of
//! range, pointer leaving memory without a halt) surface as [`VmError`]
//! and poison nothing beyond this instance; the caller decides whether
//! the whole computation is invalidated.

use super::channel::Channel;
use super::decode::Instruction;
use super::memory::{Memory, MemoryModel};
use super::opcode::Opcode;
use super::program::Program;
use crate::error::{Result, VmError};

/// Result of executing a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Instruction retired, more to run
    Continue,
    /// `in` found the input queue empty; pointer unchanged
    NeedInput,
    /// `halt` reached (idempotent: further steps keep reporting it)
    Halted,
}

/// Result of running until no further progress is possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Suspended on input; append input and call `run` again
    NeedInput,
    /// Terminal
    Halted,
}

/// A stored-program VM instance
#[derive(Debug, Clone)]
pub struct Interpreter {
    memory: Memory,
    ip: usize,
    input: Channel,
    output: Channel,
    halted: bool,
}

impl Interpreter {
    /// Build an instance over a fixed address space
    pub fn new(program: &Program) -> Self {
        Self::with_model(program, MemoryModel::Fixed)
    }

    /// Build an instance with an explicit address-space policy
    pub fn with_model(program: &Program, model: MemoryModel) -> Self {
        Self {
            memory: Memory::new(program, model),
            ip: 0,
            input: Channel::new(),
            output: Channel::new(),
            halted: false,
        }
    }

    /// Append a value to the input queue
    pub fn push_input(&mut self, value: i64) {
        self.input.push(value);
    }

    /// Append many input values in order
    pub fn extend_input<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        self.input.extend(values);
    }

    /// Pop the oldest produced output, if any
    pub fn pop_output(&mut self) -> Option<i64> {
        self.output.pop()
    }

    /// Move all produced output out, oldest first
    pub fn drain_output(&mut self) -> Vec<i64> {
        self.output.drain()
    }

    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Result<StepResult> {
        if self.halted {
            return Ok(StepResult::Halted);
        }
        if self.ip >= self.memory.len() {
            return Err(self.runaway(self.ip as i64));
        }

        let word = self.memory.read(self.ip as i64)?;
        let instr = Instruction::decode(word, self.ip)?;
        match instr.opcode {
            Opcode::Add => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.store(&instr, a.wrapping_add(b))?;
            }
            Opcode::Mul => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.store(&instr, a.wrapping_mul(b))?;
            }
            Opcode::Input => match self.input.pop() {
                None => return Ok(StepResult::NeedInput),
                Some(value) => self.store(&instr, value)?,
            },
            Opcode::Output => {
                let a = self.param(&instr, 0)?;
                self.output.push(a);
                self.ip += 2;
            }
            Opcode::JumpIfTrue => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.jump_or_skip(a != 0, b)?;
            }
            Opcode::JumpIfFalse => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.jump_or_skip(a == 0, b)?;
            }
            Opcode::LessThan => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.store(&instr, (a < b) as i64)?;
            }
            Opcode::Equals => {
                let (a, b) = (self.param(&instr, 0)?, self.param(&instr, 1)?);
                self.store(&instr, (a == b) as i64)?;
            }
            Opcode::Halt => {
                self.halted = true;
                return Ok(StepResult::Halted);
            }
        }
        Ok(StepResult::Continue)
    }

    /// Step until the instance halts or needs input.
    ///
    /// After [`RunState::NeedInput`], push input and call `run` again;
    /// no state is lost across the suspension.
    pub fn run(&mut self) -> Result<RunState> {
        loop {
            match self.step()? {
                StepResult::Continue => continue,
                StepResult::NeedInput => return Ok(RunState::NeedInput),
                StepResult::Halted => return Ok(RunState::Halted),
            }
        }
    }

    /// Resolve read parameter `index` of the current instruction
    fn param(&self, instr: &Instruction, index: usize) -> Result<i64> {
        let raw = self.memory.read((self.ip + 1 + index) as i64)?;
        instr.mode(index).resolve(raw, &self.memory)
    }

    /// Write `value` through the current instruction's write target and
    /// retire the instruction. The target is the raw parameter, never
    /// resolved through its mode digit.
    fn store(&mut self, instr: &Instruction, value: i64) -> Result<()> {
        // write_param is Some for every opcode routed here
        let index = instr.opcode.write_param().unwrap_or_default();
        let dest = self.memory.read((self.ip + 1 + index) as i64)?;
        self.memory.write(dest, value)?;
        self.ip += 1 + instr.opcode.arity();
        Ok(())
    }

    /// Retire a jump: set the pointer to `target` when `taken`, else
    /// fall through past the instruction.
    fn jump_or_skip(&mut self, taken: bool, target: i64) -> Result<()> {
        if taken {
            self.ip = usize::try_from(target).map_err(|_| self.runaway(target))?;
        } else {
            self.ip += 3;
        }
        Ok(())
    }

    fn runaway(&self, ip: i64) -> VmError {
        VmError::PointerOutOfBounds {
            ip,
            len: self.memory.len(),
        }
    }
}
