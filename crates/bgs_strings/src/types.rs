//! Base types for structure of string table files.

use binrw::BinRead;
use derive_more::derive::{Constructor, Deref, Display, Index, IntoIterator};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Size in bytes of the fixed header
pub const HEADER_SIZE: u64 = 8;

/// Size in bytes of a single directory entry
pub const ENTRY_SIZE: u64 = 8;

/// String table header
///
/// The first eight bytes of every string table. All data is stored in little endian format.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[br(little)]
pub struct Header {
    /// The number of strings, and so of directory entries, in the file
    pub strings_count: u32,

    /// The size of the data block following the directory
    pub data_size: u32,
}

impl Header {
    /// Offset from the start of the file where the data block begins
    pub fn data_start(&self) -> u64 {
        HEADER_SIZE + self.strings_count as u64 * ENTRY_SIZE
    }

    /// Offset from the start of the file where the data block ends
    pub fn data_end(&self) -> u64 {
        self.data_start() + self.data_size as u64
    }
}

/// String table directory entry
///
/// Locates a single string inside the data block
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct DirectoryEntry {
    /// The id records reference this string by
    pub id: u32,

    /// The offset from the start of the data block to this string
    pub offset: u32,
}

/// Identifies how strings are laid out inside the data block
///
/// Resolved from the tag naming the kind of file being decoded:
///
/// | Tag          | File extension | Variant                              |
/// |--------------|----------------|--------------------------------------|
/// | `"string"`   | `.strings`     | [`Variant::PlainNullTerminated`]     |
/// | `"dlstring"` | `.dlstrings`   | [`Variant::LengthPrefixed`]          |
/// | `"ilstring"` | `.ilstrings`   | [`Variant::LengthPrefixed`]          |
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Each string runs until the first NUL byte
    #[display("null terminated")]
    PlainNullTerminated,

    /// Each string is preceded by its length as a little endian u32
    #[display("length prefixed")]
    LengthPrefixed,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Variant::PlainNullTerminated),
            "dlstring" | "ilstring" => Ok(Variant::LengthPrefixed),
            _ => Err(Error::InvalidArgument(s.to_owned())),
        }
    }
}

/// A decoded string and the id it is referenced by
#[derive(Constructor, Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringRecord {
    pub id: u32,
    pub text: String,
}

/// Decoded strings in the order the file lists them
#[derive(Constructor, Debug, Default, Clone, PartialEq, Eq, Deref, Index, IntoIterator)]
#[into_iterator(owned, ref)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringTable(Vec<StringRecord>);

impl StringTable {
    /// Try to get the text of the first string with the given id
    pub fn by_id(&self, id: u32) -> Option<&str> {
        self.0
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.text.as_str())
    }

    /// Unwrap and return the decoded records
    pub fn into_inner(self) -> Vec<StringRecord> {
        self.0
    }
}

impl FromIterator<StringRecord> for StringTable {
    fn from_iter<T: IntoIterator<Item = StringRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
