//! # String Table Format Documentation
//!
//! This crate provides utilities to decode the localized **string tables** used by Creation Engine
//! games. Every plugin ships its user facing text in three tables per language, identified by the
//! `.strings`, `.dlstrings` and `.ilstrings` extensions (e.g. `starfield_en.strings`).
//! Records reference their text by a numeric id which is looked up in these tables.
//!
//! ## File Structure
//!
//! A string table consists of a header, followed by a directory of entries, and a data block.
//!
//! | Offset (bytes)     | Field                  | Description                                                |
//! |--------------------|------------------------|------------------------------------------------------------|
//! | 0x0000             | String Count           | 4 bytes: Number of entries in the directory                |
//! | 0x0004             | Data Size              | 4 bytes: Size of the data block                            |
//! | 0x0008             | Directory              | (String Count * 8) bytes: Directory entries                |
//! | 8 + Count * 8      | Data Block             | (Data Size) bytes: The string data                         |
//!
//! ### Directory
//!
//! After the header, the file contains one entry per string. The entries are not sorted, and the
//! order they are listed in is the order strings are returned in. Each entry has the following
//! structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | ID                     | 4 bytes: The id records use to reference this string    |
//! | 0x0004         | Offset                 | 4 bytes: Offset of the string from the data block start |
//!
//! ### Data Block
//!
//! The layout of each string depends on the type of file:
//!
//! - **`.strings`**: the string is stored as is, terminated by a null byte.
//! - **`.dlstrings`** / **`.ilstrings`**: a 4-byte length comes first, followed by that many bytes
//!   of string, which usually include a trailing null byte.
//!
//! ### Encoding
//!
//! The files carry no encoding information. Which encoding applies depends on the language the
//! file was made for, see [`encoding::LocaleTable`].
//!
//! ## Additional Information
//!
//! - **File Extension**: `.strings`, `.dlstrings`, `.ilstrings`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod encoding;
pub mod error;
pub mod read;
pub mod types;

pub use encoding::{LocaleTable, TextEncodings};
pub use read::{decode, decode_with, parse_header};
pub use types::{StringRecord, StringTable, Variant};
