use catalog_admin::types::errors::*;

// === NavigationError Tests ===

#[test]
fn navigation_error_unknown_target_display() {
    let err = NavigationError::UnknownTarget("brands".to_string());
    assert_eq!(err.to_string(), "Unknown navigation target: brands");
}

#[test]
fn navigation_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(NavigationError::UnknownTarget("x".to_string()));
    assert!(err.source().is_none());
}

// === FilterError Tests ===

#[test]
fn filter_error_display_variants() {
    assert_eq!(
        FilterError::InvalidSortField("color".to_string()).to_string(),
        "Invalid sort field: color"
    );
    assert_eq!(FilterError::InvalidPageSize(0).to_string(), "Invalid page size: 0");
}

// === ValidationErrors Tests ===

#[test]
fn validation_errors_collects_fields() {
    let mut errors = ValidationErrors::default();
    assert!(errors.is_empty());
    errors.push("name", "Name is required");
    errors.push("price", "Price must be zero or positive");

    assert!(!errors.is_empty());
    assert_eq!(errors.get("price"), Some("Price must be zero or positive"));
    assert_eq!(errors.get("stock"), None);
    assert_eq!(
        errors.to_string(),
        "Validation failed: name: Name is required; price: Price must be zero or positive"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("tabs.nope".to_string()).to_string(),
        "Invalid settings key: tabs.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a number".to_string()).to_string(),
        "Invalid settings value: not a number"
    );
}
