//! Program loader - reads comma-separated listings from disk
//!
//! The external format is a single line of comma-separated signed
//! integers, usually with a trailing newline.
//!
//! # Usage
//!
//! ```ignore
//! use ringvm::loader::load_path;
//!
//! let program = load_path("programs/thruster.txt")?;
//! ```

use crate::error::Result;
use crate::vm::Program;
use std::fs;
use std::path::Path;

/// Read and parse a program listing from a file
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Program> {
    let listing = fs::read_to_string(path.as_ref())?;
    Program::parse(&listing)
}

/// Parse a program listing from a string (testing and embedding)
pub fn load_string(listing: &str) -> Result<Program> {
    Program::parse(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VmError;
    use std::io::Write;

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "1,0,0,0,99").unwrap();

        let program = load_path(&path).unwrap();
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99]);
    }

    #[test]
    fn test_load_path_missing_fails() {
        let err = load_path("definitely/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, VmError::Io(_)));
    }

    #[test]
    fn test_load_string() {
        let program = load_string("99\n").unwrap();
        assert_eq!(program.cells(), &[99]);
    }

    #[test]
    fn test_load_string_bad_token() {
        assert!(matches!(
            load_string("1,x,3").unwrap_err(),
            VmError::BadListing { .. }
        ));
    }
}
