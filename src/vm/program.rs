//! Program - immutable instruction listing
//!
//! A program is the comma-separated integer listing handed to the VM,
//! parsed once. It is a template: every interpreter copies it into its
//! own [`Memory`](super::memory::Memory), so one program can back any
//! number of instances without aliasing.

use crate::error::{Result, VmError};
use std::str::FromStr;

/// Parsed program listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    cells: Vec<i64>,
}

impl Program {
    /// Wrap an already-parsed listing
    pub fn new(cells: Vec<i64>) -> Self {
        Self { cells }
    }

    /// Parse a comma-separated listing.
    ///
    /// Whitespace around values (including a trailing newline from a
    /// program file) is tolerated; empty trailing fields are not.
    pub fn parse(listing: &str) -> Result<Self> {
        let cells = listing
            .trim()
            .split(',')
            .map(|token| {
                token
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| VmError::BadListing {
                        token: token.trim().to_string(),
                    })
            })
            .collect::<Result<Vec<i64>>>()?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromStr for Program {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        let program = Program::parse("1,0,0,0,99").unwrap();
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99]);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let program = Program::parse(" 3, 9,-8 ,9,10,9,4,9,99,-1,8\n").unwrap();
        assert_eq!(program.len(), 11);
        assert_eq!(program.cells()[2], -8);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = Program::parse("1,two,3").unwrap_err();
        assert!(matches!(err, VmError::BadListing { token } if token == "two"));
    }

    #[test]
    fn test_parse_rejects_empty_field() {
        assert!(Program::parse("1,,3").is_err());
    }

    #[test]
    fn test_from_str() {
        let program: Program = "99".parse().unwrap();
        assert_eq!(program.cells(), &[99]);
    }
}
