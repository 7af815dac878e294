//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// unrecognized string table type {0}
    #[error("unrecognized string table type {0:?}")]
    #[diagnostic(help("expected one of \"string\", \"dlstring\" or \"ilstring\""))]
    InvalidArgument(String),

    /// file is an invalid string table: {0}
    #[error("file is an invalid string table: {0}")]
    Format(#[from] FormatError),
}

/// Error type to provide further information when a string table is malformed
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// buffer of {len} bytes is too short for the header
    #[error("buffer of {len} bytes is too short for the 8 byte header")]
    TruncatedHeader { len: usize },

    /// directory of {count} entries needs {expected} bytes
    #[error("directory of {count} entries needs {expected} bytes, buffer has {actual}")]
    TruncatedDirectory {
        count: u32,
        expected: u64,
        actual: usize,
    },

    /// data block ends at {expected}
    #[error("data block ends at byte {expected}, buffer has {actual}")]
    TruncatedData { expected: u64, actual: usize },

    /// offset {offset} of string {id} is outside the data block
    #[error("offset {offset} of string {id} is outside the data block of {data_size} bytes")]
    OffsetOutOfBounds { id: u32, offset: u32, data_size: u32 },

    /// length prefix of string {id} is cut off
    #[error("length prefix of string {id} at byte {position} is cut off")]
    TruncatedLength { id: u32, position: u64 },

    /// string {id} declares {length} bytes
    #[error("string {id} declares {length} bytes but only {available} remain")]
    LengthOutOfBounds {
        id: u32,
        length: u32,
        available: u64,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
