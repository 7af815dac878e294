//! Functions for decoding string table files
//!

use binrw::BinRead;
use byteorder::{ByteOrder, LittleEndian};
use std::io::Cursor;
use tracing::{debug, instrument, trace};

use crate::{
    encoding::{decode_text, LocaleTable, TextEncodings},
    error::{Error, FormatError, Result},
    types::{DirectoryEntry, Header, StringRecord, StringTable, Variant, HEADER_SIZE},
};

/// Read the fixed header at the start of a string table.
///
/// Only the buffer size is checked, the values are returned as found.
pub fn parse_header(buffer: &[u8]) -> Result<Header> {
    if (buffer.len() as u64) < HEADER_SIZE {
        return Err(FormatError::TruncatedHeader { len: buffer.len() }.into());
    }

    Ok(Header::read(&mut Cursor::new(buffer))?)
}

/// Read the directory that follows the header, in the order the file lists it.
pub fn parse_directory(buffer: &[u8], header: &Header) -> Result<Vec<DirectoryEntry>> {
    let expected = header.data_start();
    if (buffer.len() as u64) < expected {
        return Err(FormatError::TruncatedDirectory {
            count: header.strings_count,
            expected,
            actual: buffer.len(),
        }
        .into());
    }

    let mut reader = Cursor::new(buffer);
    reader.set_position(HEADER_SIZE);

    (0..header.strings_count)
        .map(|_| DirectoryEntry::read(&mut reader).map_err(Error::from))
        .collect()
}

/// Slice the raw bytes of every directory entry out of the data block.
///
/// The returned slices never include the terminating NUL of a string.
pub fn extract<'a>(
    buffer: &'a [u8],
    header: &Header,
    directory: &[DirectoryEntry],
    variant: Variant,
) -> Result<Vec<&'a [u8]>> {
    let data_end = header.data_end();
    if (buffer.len() as u64) < data_end {
        return Err(FormatError::TruncatedData {
            expected: data_end,
            actual: buffer.len(),
        }
        .into());
    }

    // data_end fits in the buffer, so it fits in usize
    let block = &buffer[..data_end as usize];
    let base = header.data_start();
    directory
        .iter()
        .map(|entry| {
            if entry.offset >= header.data_size {
                return Err(FormatError::OffsetOutOfBounds {
                    id: entry.id,
                    offset: entry.offset,
                    data_size: header.data_size,
                }
                .into());
            }

            let start = (base + entry.offset as u64) as usize;
            let data = match variant {
                Variant::PlainNullTerminated => null_terminated(&buffer[start..]),
                Variant::LengthPrefixed => length_prefixed(block, start, entry.id)?,
            };

            trace!(id = entry.id, offset = entry.offset, len = data.len(), "extracted");

            Ok(data)
        })
        .collect()
}

fn null_terminated(data: &[u8]) -> &[u8] {
    match data.iter().position(|b| *b == 0) {
        Some(end) => &data[..end],
        None => data,
    }
}

/// `block` ends with the data block, so the prefix and the string must both lie inside it.
fn length_prefixed(block: &[u8], start: usize, id: u32) -> Result<&[u8]> {
    let Some(prefix) = block.get(start..start + 4) else {
        return Err(FormatError::TruncatedLength {
            id,
            position: start as u64,
        }
        .into());
    };

    let length = LittleEndian::read_u32(prefix);
    let available = (block.len() - start - 4) as u64;
    if length as u64 > available {
        return Err(FormatError::LengthOutOfBounds {
            id,
            length,
            available,
        }
        .into());
    }

    let data = &block[start + 4..start + 4 + length as usize];
    Ok(data.strip_suffix(&[0]).unwrap_or(data))
}

/// Decode a string table using the default [`LocaleTable`].
///
/// `kind` names the type of file and must be one of `"string"`, `"dlstring"` or `"ilstring"`.
///
/// ```no_run
/// fn list_strings(path: &str) -> bgs_strings::error::Result<()> {
///     let data = std::fs::read(path)?;
///     let strings = bgs_strings::decode(&data, "string", Some("en"))?;
///
///     for record in &strings {
///         println!("{}: {}", record.id, record.text);
///     }
///
///     Ok(())
/// }
/// ```
pub fn decode(buffer: &[u8], kind: &str, locale: Option<&str>) -> Result<StringTable> {
    decode_with(buffer, kind, locale, &LocaleTable::default())
}

/// Decode a string table, resolving locales through the given encodings.
///
/// The result holds exactly one record per directory entry, in directory order.
/// Any malformed record fails the whole decode.
#[instrument(level = "debug", skip(buffer, encodings), fields(len = buffer.len()))]
pub fn decode_with(
    buffer: &[u8],
    kind: &str,
    locale: Option<&str>,
    encodings: &impl TextEncodings,
) -> Result<StringTable> {
    let variant: Variant = kind.parse()?;

    let header = parse_header(buffer)?;
    debug!(
        strings = header.strings_count,
        data_size = header.data_size,
        %variant,
        "parsed header"
    );

    if locale.and_then(|l| encodings.encoding_for(l)).is_none() {
        debug!("no encoding for locale, decoding as UTF-8");
    }

    let directory = parse_directory(buffer, &header)?;
    let payloads = extract(buffer, &header, &directory, variant)?;

    Ok(directory
        .iter()
        .zip(payloads)
        .map(|(entry, data)| StringRecord::new(entry.id, decode_text(data, locale, encodings)))
        .collect())
}
