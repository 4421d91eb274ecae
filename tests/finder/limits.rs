//! Result-set cap and query time limit, including TOML-loaded configuration.

use std::time::Duration;

use docwindow::config::CONFIG_FILE_NAME;
use docwindow::{Error, ReadPreference, StoreErrorKind};
use docwindow_storage::Latency;
use tempfile::TempDir;

use crate::common::*;

#[test]
fn cap_rejects_oversized_window_without_reading() {
    let coll = collection_of("cap", 20);
    let mut finder = finder();
    finder.set_max_result_set_size(5);
    let mut ctx = context();

    let err = finder
        .find(&mut ctx, &coll, FindRequest::all().from(3).to(9))
        .unwrap_err();

    assert!(matches!(err, Error::TooManyResults { requested: 7, max: 5 }));
    assert!(ctx.is_empty());
    assert_eq!(coll.cursor_log().materialized, 0);
    assert_eq!(coll.cursor_log().open_cursors(), 0);
}

#[test]
fn config_file_drives_finder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "read_preference = \"secondary_preferred\"\nmax_result_set_size = 4\nmax_query_time_ms = 250\n",
    )
    .unwrap();

    let config = FinderConfig::from_file(&path).unwrap();
    let finder = WindowFinder::with_config(JsonTranslator::new(), config);
    let coll = collection_of("cfg", 10);

    let (matched, ctx) = run(&finder, &coll, FindRequest::all().to(3));
    assert_eq!(matched, 10);
    assert_eq!(ctx.len(), 4);

    let log = coll.cursor_log();
    assert_eq!(log.last_read_preference, Some(ReadPreference::SecondaryPreferred));
    assert_eq!(log.last_max_time, Some(Duration::from_millis(250)));

    let err = finder
        .find(&mut context(), &coll, FindRequest::all().to(4))
        .unwrap_err();
    assert!(err.is_admission_rejection());
}

#[test]
fn default_config_file_is_unlimited() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    FinderConfig::write_default_if_missing(&path).unwrap();

    let config = FinderConfig::from_file(&path).unwrap();
    assert_eq!(config, FinderConfig::default());

    let finder = WindowFinder::with_config(JsonTranslator::new(), config);
    let coll = collection_of("dflt", 30);
    let (_, ctx) = run(&finder, &coll, FindRequest::all());
    assert_eq!(ctx.len(), 30);
    assert_eq!(coll.cursor_log().last_max_time, None);
}

#[test]
fn invalid_read_preference_is_a_config_error() {
    let err = FinderConfig::from_toml_str("read_preference = \"fastest\"\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn query_time_limit_surfaces_store_timeout() {
    let coll = collection_of("timeout", 5);
    coll.set_latency(Latency {
        open: Duration::ZERO,
        retrieval: Duration::from_millis(50),
    });
    let mut finder = finder();
    finder.set_max_query_time_ms(10);

    let err = finder
        .find(&mut context(), &coll, FindRequest::all())
        .unwrap_err();

    assert!(matches!(&err, Error::Store(e) if e.kind() == StoreErrorKind::Timeout));
    assert_eq!(err.code(), "store:Timeout");
    assert_eq!(coll.cursor_log().open_cursors(), 0);
}
