//! Custom error types for the ini-reader crate.

use std::collections::TryReserveError;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum IniError {
    /// The input could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line buffer could not be allocated or grown.
    #[error("line buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// Parsing finished (or was stopped), and `line` is the first
    /// malformed or handler-rejected line. Later malformed lines never
    /// overwrite this value; unless the parser is configured to stop on
    /// the first error, every valid line after it was still dispatched.
    #[error("malformed INI input at line {line}")]
    Syntax { line: u32 },
}

impl IniError {
    /// Maps this error onto the classic C return-code convention:
    /// `-1` for I/O failure, `-2` for allocation failure, and the
    /// 1-based line number of the first bad line for syntax errors.
    /// A successful parse (`Ok(())`) corresponds to `0`.
    pub fn code(&self) -> i32 {
        match self {
            IniError::Io(_) => -1,
            IniError::Alloc(_) => -2,
            IniError::Syntax { line } => *line as i32,
        }
    }
}

/// A convenience `Result` type alias using the crate's `IniError` type.
pub type Result<T> = std::result::Result<T, IniError>;
