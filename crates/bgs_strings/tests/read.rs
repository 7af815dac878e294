use std::path::PathBuf;

use bgs_strings::error::Result;
use bgs_strings::{decode, decode_with, parse_header, LocaleTable, StringRecord};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

fn resource(name: &str) -> Result<Vec<u8>> {
    let path = PathBuf::from(format!(
        "{}/resources/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    ));

    info!("reading {}", path.display());
    Ok(std::fs::read(path)?)
}

fn expected() -> Vec<StringRecord> {
    vec![
        StringRecord::new(0x0001A2F3, "Iron Sword".into()),
        StringRecord::new(0x00000010, "Whiterun".into()),
        StringRecord::new(0x0001A2F0, "".into()),
        StringRecord::new(0x00000002, "Café del Mar".into()),
        StringRecord::new(0x000FF001, "You have been poisoned.".into()),
    ]
}

#[traced_test]
#[test]
fn parse_strings() -> Result<()> {
    let data = resource("sample_en.strings")?;
    let strings = decode(&data, "string", Some("en"))?;

    assert_eq!(strings.len(), parse_header(&data)?.strings_count as usize);
    assert_eq!(strings.into_inner(), expected());

    Ok(())
}

#[traced_test]
#[test]
fn parse_dlstrings() -> Result<()> {
    let data = resource("sample_en.dlstrings")?;
    let strings = decode(&data, "dlstring", Some("en"))?;

    assert_eq!(strings.len(), parse_header(&data)?.strings_count as usize);
    assert_eq!(strings.into_inner(), expected());

    Ok(())
}

#[traced_test]
#[test]
fn parse_ilstrings() -> Result<()> {
    let data = resource("sample_en.ilstrings")?;
    let strings = decode(&data, "ilstring", Some("en"))?;

    assert_eq!(strings.into_inner(), expected());

    Ok(())
}

#[traced_test]
#[test]
fn decoded_text_has_no_nul() -> Result<()> {
    for (name, kind) in [
        ("sample_en.strings", "string"),
        ("sample_en.dlstrings", "dlstring"),
        ("sample_en.ilstrings", "ilstring"),
    ] {
        let data = resource(name)?;
        let strings = decode(&data, kind, Some("en"))?;

        assert!(strings.iter().all(|record| !record.text.contains('\0')));
    }

    Ok(())
}

#[traced_test]
#[test]
fn parse_utf8_locale() -> Result<()> {
    let data = resource("sample_ja.strings")?;

    let strings = decode(&data, "string", Some("ja"))?;
    assert_eq!(strings.by_id(7), Some("鉄の剣"));

    // unknown locales fall back to UTF-8 as well
    let strings = decode_with(&data, "string", Some("tlh"), &LocaleTable::legacy())?;
    assert_eq!(strings.by_id(7), Some("鉄の剣"));

    Ok(())
}

#[traced_test]
#[test]
fn wrong_kind_for_file() -> Result<()> {
    let data = resource("sample_en.strings")?;

    // a .strings file read as length prefixed trips over its own text
    assert!(decode(&data, "dlstring", Some("en")).is_err());

    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn serialize_table() -> Result<()> {
    let data = resource("sample_en.strings")?;
    let strings = decode(&data, "string", Some("en"))?;

    let json = serde_json::to_value(&strings).expect("serializable");
    assert_eq!(json[0]["id"], 0x0001A2F3);
    assert_eq!(json[0]["text"], "Iron Sword");
    assert_eq!(json.as_array().map(Vec::len), Some(5));

    let header = serde_json::to_value(parse_header(&data)?).expect("serializable");
    assert_eq!(header["strings_count"], 5);

    Ok(())
}
