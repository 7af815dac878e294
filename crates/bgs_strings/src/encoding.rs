//! Locale aware conversion of raw string bytes into text.
//!
//! String tables carry no encoding marker of their own: the encoding is implied by the
//! language the file was shipped for. Which encoding belongs to which language is provided
//! by a [`TextEncodings`] implementation, [`LocaleTable`] being the one used by default.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1250, WINDOWS_1251, WINDOWS_1252};
use std::collections::HashMap;
use tracing::trace;

/// Maps a locale to the character encoding its string tables are written in
pub trait TextEncodings {
    /// The encoding for `locale`, or `None` when the locale is unknown
    fn encoding_for(&self, locale: &str) -> Option<&'static Encoding>;
}

impl<T: TextEncodings + ?Sized> TextEncodings for &T {
    fn encoding_for(&self, locale: &str) -> Option<&'static Encoding> {
        (**self).encoding_for(locale)
    }
}

/// Lookup table from locale names (`en`, `ru`, `ja`, ...) to encodings
///
/// ```
/// use bgs_strings::encoding::{LocaleTable, TextEncodings};
///
/// let table = LocaleTable::default().with("uk", encoding_rs::WINDOWS_1251);
/// assert_eq!(table.encoding_for("RU"), Some(encoding_rs::WINDOWS_1251));
/// assert_eq!(table.encoding_for("uk"), Some(encoding_rs::WINDOWS_1251));
/// assert_eq!(table.encoding_for("xx"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    encodings: HashMap<String, &'static Encoding>,
}

impl LocaleTable {
    /// Code pages used by the legacy localized releases
    ///
    /// Both the short codes (`en`) and the full names used in older file names (`english`) are known.
    pub fn legacy() -> Self {
        [
            ("en", WINDOWS_1252),
            ("fr", WINDOWS_1252),
            ("de", WINDOWS_1252),
            ("it", WINDOWS_1252),
            ("es", WINDOWS_1252),
            ("esmx", WINDOWS_1252),
            ("ptbr", WINDOWS_1252),
            ("pl", WINDOWS_1250),
            ("cs", WINDOWS_1250),
            ("ru", WINDOWS_1251),
            ("ja", UTF_8),
            ("zhhans", UTF_8),
            ("english", WINDOWS_1252),
            ("french", WINDOWS_1252),
            ("german", WINDOWS_1252),
            ("italian", WINDOWS_1252),
            ("spanish", WINDOWS_1252),
            ("polish", WINDOWS_1250),
            ("czech", WINDOWS_1250),
            ("russian", WINDOWS_1251),
            ("japanese", UTF_8),
            ("chinese", UTF_8),
        ]
        .into_iter()
        .fold(Self::utf8(), |table, (locale, encoding)| {
            table.with(locale, encoding)
        })
    }

    /// An empty table, every locale is decoded as UTF-8
    pub fn utf8() -> Self {
        Self {
            encodings: HashMap::new(),
        }
    }

    /// Add or replace the encoding used for `locale`
    pub fn with(mut self, locale: &str, encoding: &'static Encoding) -> Self {
        self.encodings.insert(locale.to_ascii_lowercase(), encoding);
        self
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::legacy()
    }
}

impl TextEncodings for LocaleTable {
    fn encoding_for(&self, locale: &str) -> Option<&'static Encoding> {
        self.encodings.get(&locale.to_ascii_lowercase()).copied()
    }
}

/// Convert the raw bytes of a single string into text.
///
/// Unknown or missing locales fall back to UTF-8. Malformed sequences are replaced
/// with U+FFFD rather than failing the decode.
pub fn decode_text(bytes: &[u8], locale: Option<&str>, encodings: &impl TextEncodings) -> String {
    let encoding = locale
        .and_then(|l| encodings.encoding_for(l))
        .unwrap_or(UTF_8);

    let (text, malformed) = encoding.decode_without_bom_handling(bytes);
    if malformed {
        trace!("replaced malformed {} sequences", encoding.name());
    }

    text.into_owned()
}
