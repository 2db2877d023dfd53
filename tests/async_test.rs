//! Async loading tests (requires the `async` feature)
#![cfg(feature = "async")]

use csvjson::{load_csv_file_async, CsvJsonError, CsvLoader};
use std::io::Write;
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_async_load_matches_blocking() {
    init_logging();
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"a|b\r1|\"x|y\"\r").unwrap();
    temp.flush().unwrap();

    let async_json = load_csv_file_async(temp.path(), '|').await.unwrap();
    let blocking_json = csvjson::load_csv_file(temp.path(), '|').unwrap();
    assert_eq!(async_json, blocking_json);
    assert!(async_json.contains("\"b\": \"x|y\""));
}

#[tokio::test]
async fn test_async_read_failure() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let err = CsvLoader::open_async(dir.path().join("absent.csv"))
        .await
        .unwrap_err();
    match err {
        CsvJsonError::ReadError { path, source } => {
            assert!(path.unwrap().ends_with("absent.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}
