//! Tests for configuration system

use mealmate::{AppError, Config};
use mealmate_shared::MealType;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.log_format, "pretty");
    assert_eq!(config.session.pantry, vec!["salt", "turmeric", "oil"]);
    assert_eq!(config.session.max_missing, 2);
    assert_eq!(config.session.max_time_minutes, 60);
    assert_eq!(config.scoring.fresh_produce, 5);
    assert_eq!(config.retailer.host, "blinkit.com");
    assert_eq!(config.retailer.search_path, "/s/");
    assert!(config.catalog.path.is_none());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealmate.toml");
    std::fs::write(
        &path,
        r#"
[observability]
log_format = "json"

[session]
pantry = ["salt"]
max_missing = 3
meal_type = "lunch"
limit_by_meal_type = true

[scoring]
spices = 0
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.observability.log_format, "json");
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.session.pantry, vec!["salt"]);
    assert_eq!(config.session.max_time_minutes, 60, "unset keys keep defaults");
    assert_eq!(config.scoring.spices, 0);
    assert_eq!(config.scoring.grains, 4);

    let state = config.session.initial_state();
    assert_eq!(state.filters.max_missing, Some(3));
    assert_eq!(state.filters.meal_type, Some(MealType::Lunch));
    assert!(state.filters.limit_by_meal_type);
    assert_eq!(config.validate(), Ok(()));

    Ok(())
}

#[test]
fn test_invalid_values_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(&path, "[retailer]\nsearch_path = \"search\"\n")?;

    let path = path.to_string_lossy().into_owned();
    let config = Config::load(Some(path.clone()))?;
    assert!(config.validate().is_err());

    let result = Config::load_validated(Some(path));
    assert!(
        matches!(&result, Err(AppError::ValidationError(msg)) if msg.contains("search_path")),
        "expected a validation error, got {:?}",
        result.map(|_| ())
    );

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_string()))
        .expect("missing file should be ignored");

    assert_eq!(config.session.max_missing, 2);
    assert_eq!(config.retailer.android_package, "com.grofers.customerapp");
}
