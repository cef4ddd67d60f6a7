// src/persistence.rs

//! Flat JSON files: a bare array of records, no envelope, no version.

use crate::config;
use crate::error::StoreError;
use crate::stocks::StockRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads every record in `path`. Stored values are returned as-is; ranking is
/// the caller's business.
pub fn load_file(path: &Path) -> Result<Vec<StockRecord>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<StockRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), count = records.len(), "loaded stock table");
    Ok(records)
}

/// Writes `records` to `path` as a 4-space indented JSON array, replacing any
/// existing file.
pub fn save_file(path: &Path, records: &[StockRecord]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    let mut ser = serde_json::Serializer::with_formatter(
        &mut writer,
        PrettyFormatter::with_indent(config::JSON_INDENT),
    );
    records.serialize(&mut ser).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    info!(path = %path.display(), count = records.len(), "saved stock table");
    Ok(())
}

/// Appends `.json` when the user typed a bare file name.
pub fn with_default_extension(path: &str) -> PathBuf {
    let mut path = PathBuf::from(path.trim());
    if path.extension().is_none() {
        path.set_extension(config::FILE_EXTENSION);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::{StockTable, sample_records};

    fn demo_records() -> Vec<StockRecord> {
        let mut table = StockTable::from_records(sample_records());
        table.add_new_entry();
        table.add_new_entry();
        table.apply_edit(1, crate::stocks::FieldEdit::Name("Dogecorp".into()));
        table.apply_edit(2, crate::stocks::FieldEdit::Price(0.1 + 0.2));
        table.into_records()
    }

    #[test]
    fn save_then_load_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        let records = demo_records();

        save_file(&path, &records).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded, records);

        // resorting an unmodified round trip changes nothing
        assert_eq!(StockTable::from_records(loaded).into_records(), records);
    }

    #[test]
    fn saved_file_is_pretty_array_with_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pretty.json");
        save_file(&path, &sample_records()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"rank\": 1,"));
        assert!(text.contains("\"price\": 991.0"));
        assert!(text.contains("\"hype_score\": 55"));
    }

    #[test]
    fn stored_derived_fields_are_trusted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.json");
        std::fs::write(
            &path,
            r#"[{"rank": 9, "name": "Odd", "promo": "abc", "weight": 77,
                 "price": 3, "shares": 2, "market_cap": 1.5, "hype_score": -4}]"#,
        )
        .unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded[0].rank, 9);
        assert_eq!(loaded[0].weight, 77);
        assert_eq!(loaded[0].price, 3.0);
        assert_eq!(loaded[0].market_cap, 1.5);
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"[{"name": "no price"}]"#).unwrap();
        assert!(matches!(load_file(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn empty_table_saves_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        save_file(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(with_default_extension("stocks"), PathBuf::from("stocks.json"));
        assert_eq!(with_default_extension(" a/b.json "), PathBuf::from("a/b.json"));
        assert_eq!(with_default_extension("data.txt"), PathBuf::from("data.txt"));
    }
}
