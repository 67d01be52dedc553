// Catalog assembly and rendering guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use common::library_fixture;
use packsmith::catalog::{CATALOG_RELATIVE_PATH, DEPENDENCIES, PACKS, build_catalog};
use serde_json::Value;
use std::fs;

#[test]
fn saved_catalog_is_a_docx_container() -> Result<()> {
    let temp = library_fixture()?;
    let output = temp.path().join(CATALOG_RELATIVE_PATH);

    build_catalog("2026-08-07").save(&output)?;

    let bytes = fs::read(&output)?;
    assert!(bytes.len() > 4, "rendered file should not be empty");
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    Ok(())
}

#[test]
fn save_overwrites_a_previous_run() -> Result<()> {
    let temp = library_fixture()?;
    let output = temp.path().join(CATALOG_RELATIVE_PATH);

    build_catalog("2026-08-06").save(&output)?;
    let first = fs::read(&output)?;
    build_catalog("2026-08-07").save(&output)?;
    let second = fs::read(&output)?;

    assert_eq!(&second[..4], b"PK\x03\x04");
    assert_ne!(first, second, "date change should reach the rendered bytes");
    Ok(())
}

#[test]
fn missing_docs_directory_is_an_error() -> Result<()> {
    let temp = tempfile::TempDir::new()?;
    let output = temp.path().join(CATALOG_RELATIVE_PATH);

    let err = build_catalog("2026-08-07").save(&output).unwrap_err();
    assert!(err.to_string().contains("creating"), "{err:#}");
    assert!(!output.exists());
    Ok(())
}

#[test]
fn model_serializes_for_structural_inspection() -> Result<()> {
    let value = serde_json::to_value(build_catalog("2026-08-07"))?;

    assert_eq!(
        value.pointer("/default_style/font_family").and_then(Value::as_str),
        Some("Arial")
    );
    assert_eq!(
        value.pointer("/default_style/size_pt").and_then(Value::as_u64),
        Some(11)
    );
    assert_eq!(
        value.pointer("/blocks/0/Heading/level").and_then(Value::as_u64),
        Some(0)
    );
    assert_eq!(
        value.pointer("/blocks/1/Paragraph/text").and_then(Value::as_str),
        Some("Generated: 2026-08-07")
    );

    // Dependency table: header plus one row per shared script.
    let dep_rows = value
        .pointer("/blocks/8/Table/rows")
        .and_then(Value::as_array)
        .expect("dependency table rows");
    assert_eq!(dep_rows.len(), DEPENDENCIES.len() + 1);

    // Pack table: header plus one row per genre.
    let pack_rows = value
        .pointer("/blocks/10/Table/rows")
        .and_then(Value::as_array)
        .expect("pack table rows");
    assert_eq!(pack_rows.len(), PACKS.len() + 1);
    Ok(())
}
