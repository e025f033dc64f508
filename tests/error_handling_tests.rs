//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors report stable error codes
//! - Error messages are readable
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use reels::core::error::FieldValidationError;
use reels::domain::{PlayerWizard, TalentProfile, catalog, pages};
use reels::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_record_not_found_code() {
        let err = ReelsError::Record(RecordError::NotFound {
            record_type: "player".to_string(),
            id: "p9".to_string(),
        });
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_record_already_exists_code() {
        let err = ReelsError::Record(RecordError::AlreadyExists {
            record_type: "player".to_string(),
            id: "p1".to_string(),
        });
        assert_eq!(err.error_code(), "RECORD_ALREADY_EXISTS");
    }

    #[test]
    fn test_config_and_storage_codes() {
        let config: ReelsError = ConfigError::UnknownSortMode {
            mode: "height".to_string(),
        }
        .into();
        assert_eq!(config.error_code(), "CONFIG_ERROR");

        let storage: ReelsError = StorageError::Write {
            key: "scout_wishlist".to_string(),
            message: "quota exceeded".to_string(),
        }
        .into();
        assert_eq!(storage.error_code(), "STORAGE_ERROR");
    }
}

// =============================================================================
// Message Tests
// =============================================================================

mod message_tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RecordError::NotFound {
            record_type: "talent".to_string(),
            id: "t99".to_string(),
        };
        assert_eq!(err.to_string(), "talent with id 't99' not found");
    }

    #[test]
    fn test_field_errors_are_joined() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("name", "'name' is required"),
            FieldValidationError::new("age", "'age' must be a number"),
        ]);
        let message = err.to_string();
        assert!(message.contains("name: 'name' is required"));
        assert!(message.contains("age: 'age' must be a number"));
    }

    #[test]
    fn test_parse_error_without_file() {
        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }
}

// =============================================================================
// Error Source Tests
// =============================================================================

mod source_tests {
    use super::*;

    #[test]
    fn test_store_mutations_surface_record_errors() {
        let mut store: RecordStore<TalentProfile> =
            RecordStore::new(catalog::talents(), pages::explore()).unwrap();

        let duplicate = catalog::talents().remove(0);
        assert!(matches!(
            store.add(duplicate),
            Err(RecordError::AlreadyExists { .. })
        ));
        assert!(matches!(
            store.remove("t404"),
            Err(RecordError::NotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_sort_mode() {
        let mut store = RecordStore::new(catalog::talents(), pages::explore()).unwrap();
        match store.set_sort("shirt_colour") {
            Err(ConfigError::UnknownSortMode { mode }) => assert_eq!(mode, "shirt_colour"),
            other => panic!("expected UnknownSortMode, got {:?}", other),
        }
    }

    #[test]
    fn test_wizard_errors_convert() {
        let mut wizard = PlayerWizard::new();
        let err: ReelsError = wizard.next().unwrap_err().into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_anyhow_wraps_typed_errors() {
        let err: anyhow::Error = RecordError::NotFound {
            record_type: "player".to_string(),
            id: "p9".to_string(),
        }
        .into();
        assert!(err.downcast_ref::<RecordError>().is_some());
    }
}
