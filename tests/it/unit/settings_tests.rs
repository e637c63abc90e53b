//! Unit tests for settings serialization and defaults.

use cropboard::settings::CropSettings;

#[test]
fn test_default_settings() {
    let settings = CropSettings::default();
    assert_eq!(settings.edge_tolerance, 6.0);
    assert_eq!(settings.handle_radius, 4.0);
    assert_eq!(settings.min_width, 20.0);
    assert_eq!(settings.min_height, 20.0);
}

#[test]
fn test_tolerances_conversion() {
    let mut settings = CropSettings::default();
    settings.edge_tolerance = 10.0;
    settings.min_width = 32.0;

    let tolerances = settings.tolerances();
    assert_eq!(tolerances.edge_tolerance, 10.0);
    assert_eq!(tolerances.min_width, 32.0);
    assert_eq!(tolerances.min_height, 20.0);
}

#[test]
fn test_settings_round_trip() {
    let settings = CropSettings {
        edge_tolerance: 8.0,
        handle_radius: 5.0,
        min_width: 10.0,
        min_height: 12.0,
    };

    let json = serde_json::to_string_pretty(&settings).unwrap();
    let restored: CropSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let restored: CropSettings = serde_json::from_str(r#"{"edge_tolerance": 9.0}"#).unwrap();
    assert_eq!(restored.edge_tolerance, 9.0);
    assert_eq!(restored.min_width, 20.0);
    assert_eq!(restored.min_height, 20.0);
}

#[test]
fn test_empty_object_is_all_defaults() {
    let restored: CropSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(restored, CropSettings::default());
}
