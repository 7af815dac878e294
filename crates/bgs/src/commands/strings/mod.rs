use std::path::Path;

use bgs_strings::{LocaleTable, StringTable};
use clap::ValueEnum;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::debug;

pub mod decode;
pub mod diff;
pub mod header;

#[derive(clap::Subcommand)]
pub enum StringsCommands {
    /// Decode string tables into JSON
    Decode(decode::DecodeArgs),
    /// Compare two string tables
    Diff(diff::DiffArgs),
    /// Show the header of a string table
    Header(header::HeaderArgs),
}

impl StringsCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            StringsCommands::Decode(decode) => decode.handle(),
            StringsCommands::Diff(diff) => diff.handle(),
            StringsCommands::Header(header) => header.handle(),
        }
    }
}

/// The type of string table, named after its file extension
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    String,
    Dlstring,
    Ilstring,
}

impl Kind {
    /// The tag the decoder knows this kind by
    pub fn tag(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Dlstring => "dlstring",
            Kind::Ilstring => "ilstring",
        }
    }

    /// Detect the kind from a `.strings`, `.dlstrings` or `.ilstrings` extension
    pub fn from_path(path: &Path) -> Option<Kind> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "strings" => Some(Kind::String),
            "dlstrings" => Some(Kind::Dlstring),
            "ilstrings" => Some(Kind::Ilstring),
            _ => None,
        }
    }
}

/// Which locale table to decode text with
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Table {
    /// Per language code pages of the older releases
    #[default]
    Legacy,
    /// Everything is UTF-8
    Utf8,
}

impl From<Table> for LocaleTable {
    fn from(value: Table) -> Self {
        match value {
            Table::Legacy => LocaleTable::legacy(),
            Table::Utf8 => LocaleTable::utf8(),
        }
    }
}

/// Take the locale from a file name such as `skyrim_english.strings` or `starfield_en.strings`
pub fn locale_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let (_, locale) = stem.rsplit_once('_')?;
    (!locale.is_empty()).then(|| locale.to_ascii_lowercase())
}

/// Read and decode a string table from disk
pub fn read_table(
    path: &Path,
    kind: Option<Kind>,
    locale: Option<&str>,
    table: &LocaleTable,
) -> Result<StringTable> {
    let kind = kind
        .or_else(|| Kind::from_path(path))
        .ok_or_else(|| miette!("unable to detect string table type of {}", path.display()))?;

    let detected = locale_from_path(path);
    let locale = locale.or(detected.as_deref());
    debug!(?kind, ?locale, "decoding {}", path.display());

    let data = std::fs::read(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;

    bgs_strings::decode_with(&data, kind.tag(), locale, table)
        .context(format!("decoding {}", path.display()))
}
