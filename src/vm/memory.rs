//! Memory - per-interpreter address space
//!
//! Each interpreter owns a mutable copy of its program; memory is never
//! shared between instances. Two address-space policies exist:
//!
//! - [`MemoryModel::Fixed`]: any access outside the program image fails
//! - [`MemoryModel::Extended`]: reads past the end yield 0, writes past
//!   the end grow the buffer lazily; negative addresses still fail

use super::program::Program;
use crate::error::{Result, VmError};

/// Address-space policy for out-of-image accesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryModel {
    /// Accesses outside `[0, len)` are errors
    #[default]
    Fixed,
    /// Non-negative addresses are unbounded; unwritten cells read as 0
    Extended,
}

/// Mutable address space initialized from a [`Program`]
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<i64>,
    model: MemoryModel,
}

impl Memory {
    /// Copy a program into a fresh address space
    pub fn new(program: &Program, model: MemoryModel) -> Self {
        Self {
            cells: program.cells().to_vec(),
            model,
        }
    }

    /// Read the cell at `address`.
    ///
    /// Negative addresses fail in both models. Past-the-end reads fail
    /// in the fixed model and yield 0 in the extended model.
    pub fn read(&self, address: i64) -> Result<i64> {
        let idx = self.index(address)?;
        match self.cells.get(idx) {
            Some(&value) => Ok(value),
            None => match self.model {
                MemoryModel::Fixed => Err(self.out_of_range(address)),
                MemoryModel::Extended => Ok(0),
            },
        }
    }

    /// Store `value` at `address`, growing the buffer in the extended model
    pub fn write(&mut self, address: i64, value: i64) -> Result<()> {
        let idx = self.index(address)?;
        if idx >= self.cells.len() {
            match self.model {
                MemoryModel::Fixed => return Err(self.out_of_range(address)),
                MemoryModel::Extended => self.cells.resize(idx + 1, 0),
            }
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Currently allocated length
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Full image, for inspecting final state
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    fn index(&self, address: i64) -> Result<usize> {
        usize::try_from(address).map_err(|_| self.out_of_range(address))
    }

    fn out_of_range(&self, address: i64) -> VmError {
        VmError::OutOfRange {
            address,
            len: self.cells.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(cells: Vec<i64>) -> Memory {
        Memory::new(&Program::new(cells), MemoryModel::Fixed)
    }

    fn extended(cells: Vec<i64>) -> Memory {
        Memory::new(&Program::new(cells), MemoryModel::Extended)
    }

    #[test]
    fn test_read_write_in_image() {
        let mut mem = fixed(vec![1, 2, 3]);
        assert_eq!(mem.read(1).unwrap(), 2);
        mem.write(1, 42).unwrap();
        assert_eq!(mem.read(1).unwrap(), 42);
    }

    #[test]
    fn test_fixed_rejects_out_of_image() {
        let mut mem = fixed(vec![1, 2, 3]);
        assert!(matches!(
            mem.read(3),
            Err(VmError::OutOfRange { address: 3, len: 3 })
        ));
        assert!(mem.write(3, 0).is_err());
    }

    #[test]
    fn test_negative_address_rejected_in_both_models() {
        let mut mem = fixed(vec![1]);
        assert!(mem.read(-1).is_err());
        assert!(mem.write(-1, 0).is_err());
        let mut ext = extended(vec![1]);
        assert!(ext.read(-1).is_err());
        assert!(ext.write(-1, 0).is_err());
    }

    #[test]
    fn test_extended_reads_zero_past_end() {
        let mem = extended(vec![1, 2]);
        assert_eq!(mem.read(100).unwrap(), 0);
        // Reads do not allocate
        assert_eq!(mem.len(), 2);
    }

    #[test]
    fn test_extended_grows_on_write() {
        let mut mem = extended(vec![1, 2]);
        mem.write(5, 7).unwrap();
        assert_eq!(mem.len(), 6);
        assert_eq!(mem.cells(), &[1, 2, 0, 0, 0, 7]);
    }

    #[test]
    fn test_program_not_aliased() {
        let program = Program::new(vec![1, 2, 3]);
        let mut a = Memory::new(&program, MemoryModel::Fixed);
        let b = Memory::new(&program, MemoryModel::Fixed);
        a.write(0, 99).unwrap();
        assert_eq!(b.read(0).unwrap(), 1);
        assert_eq!(program.cells()[0], 1);
    }
}
