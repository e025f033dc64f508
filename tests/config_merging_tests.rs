//! Integration tests for config loading and merging

use reels::prelude::*;
use std::io::Write;

#[test]
fn test_merge_empty_configs() {
    let merged = ReelsConfig::merge(vec![]);

    assert_eq!(merged, ReelsConfig::default());
    assert_eq!(merged.storage(), StorageConfig::Memory);
}

#[test]
fn test_merge_single_config() {
    let config = ReelsConfig::from_yaml_str(
        r#"
wishlists:
  scout_wishlist: scouts_v2
default_sorts:
  transfers: rating
"#,
    )
    .unwrap();

    let merged = ReelsConfig::merge(vec![config.clone()]);
    assert_eq!(merged, config);
}

#[test]
fn test_merge_layers_storage_and_sorts() {
    let base = ReelsConfig::from_yaml_str(
        r#"
storage:
  backend: lmdb
  path: /var/lib/reels
default_sorts:
  roster: age
  explore: potential
"#,
    )
    .unwrap();

    let local = ReelsConfig::from_yaml_str(
        r#"
storage:
  backend: memory
default_sorts:
  roster: name
"#,
    )
    .unwrap();

    let merged = ReelsConfig::merge(vec![base, local]);
    assert_eq!(merged.storage(), StorageConfig::Memory);
    assert_eq!(merged.default_sorts.get(&Page::Roster), Some(&SortMode::new("name")));
    assert_eq!(
        merged.default_sorts.get(&Page::Explore),
        Some(&SortMode::new("potential"))
    );
}

#[test]
fn test_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wishlists:\n  ai_shortlist: shortlist").unwrap();

    let config = ReelsConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.wishlist_keys().ai_shortlist, "shortlist");
    assert_eq!(config.wishlist_keys().scout_wishlist, "scout_wishlist");
}

#[test]
fn test_from_yaml_file_reports_file_on_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_sorts: [oops").unwrap();

    let err = ReelsConfig::from_yaml_file(file.path()).unwrap_err();
    match err {
        ConfigError::ParseError { file: Some(path), .. } => {
            assert_eq!(path, file.path().display().to_string())
        }
        other => panic!("expected parse error with file, got {:?}", other),
    }
}

#[cfg(not(feature = "lmdb"))]
#[test]
fn test_lmdb_backend_requires_feature() {
    let config = ReelsConfig::from_yaml_str("storage:\n  backend: lmdb\n  path: /tmp/x\n").unwrap();
    let err = match config.storage().open() {
        Ok(_) => panic!("lmdb backend should be unavailable"),
        Err(e) => e,
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
