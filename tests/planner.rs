use std::collections::BTreeSet;

use mealmate::{load_catalog, AppError, Config, Planner, SuggestionMode};
use mealmate_recipe::{Catalog, CatalogError, FreeTextInput};
use mealmate_shared::{Filters, MealType, SelectionState};
use temp_dir::TempDir;

fn planner(config: &Config) -> Planner<'static> {
    Planner::from_config(Catalog::builtin(), config)
}

#[test]
fn test_breakfast_rava_flow() {
    let config = Config::default();
    let planner = planner(&config);

    let mut state = SelectionState::with_pantry(["salt", "oil"]);
    planner.add_free_text(&mut state, "sooji");
    state.set_filters(Filters {
        max_missing: Some(2),
        max_time_minutes: 60,
        dietary_only: true,
        meal_type: Some(MealType::Breakfast),
        limit_by_meal_type: true,
    });
    state.set_active_recipe(Some("upma".to_string()));

    let view = planner.derive(&state);
    let ids: Vec<&str> = view.suggestions.iter().map(|s| s.recipe.id.as_str()).collect();

    assert_eq!(view.mode, SuggestionMode::Matched);
    assert!(ids.contains(&"upma"));
    assert!(!ids.contains(&"rajma-chawal"));
    assert!(view.universe.contains("rava"));
    assert_eq!(view.active.map(|s| s.missing), Some(vec![]));
}

#[test]
fn test_view_is_deterministic() {
    let config = Config::default();
    let planner = planner(&config);
    let mut state = config.session.initial_state();
    state.add_free_text(Catalog::builtin(), "rice, tomato, paneer");

    let first = planner.derive(&state);
    let second = planner.derive(&state);

    assert_eq!(first.universe, second.universe);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.nudges, second.nudges);
}

#[test]
fn test_scoring_weights_come_from_config() {
    let mut config = Config::default();
    config.scoring.dairy = 50;
    let planner = planner(&config);

    let mut state = config.session.initial_state();
    planner.add_free_text(&mut state, "paneer, rice");

    let view = planner.derive(&state);
    let top = view.suggestions.first().map(|s| s.recipe.id.as_str());
    assert!(
        matches!(top, Some("paneer-bhurji") | Some("palak-paneer")),
        "dairy-heavy recipes should lead, got {top:?}"
    );
}

#[test]
fn test_custom_catalog_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "ingredients": { "Grains": ["rice"], "Pulses": ["moong dal"], "Spices": ["salt"] },
            "recipes": [{
                "id": "khichdi",
                "name": "Khichdi",
                "meal_type": "dinner",
                "time_minutes": 30,
                "dietary_flag": true,
                "ingredients": [
                    { "name": "rice", "category": "Grains" },
                    { "name": "moong dal", "category": "Pulses" },
                    { "name": "salt", "category": "Spices", "optional": true }
                ],
                "auxiliary_spice_names": ["salt"],
                "steps": ["Pressure cook."]
            }]
        }"#,
    )?;

    let catalog = load_catalog(&path)?;
    let config = Config::default();
    let planner = Planner::from_config(&catalog, &config);

    let mut state = SelectionState::default();
    assert_eq!(planner.add_free_text(&mut state, "rice, paneer"), vec!["rice"]);

    let view = planner.derive(&state);
    assert_eq!(view.suggestions.len(), 1);
    assert_eq!(view.universe, BTreeSet::from(["rice".to_string(), "moong dal".to_string(), "salt".to_string()]));

    Ok(())
}

#[test]
fn test_invalid_catalog_file_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("catalog.json");
    std::fs::write(
        &path,
        r#"{ "ingredients": { "Dairy": ["ghee"], "Oils": ["ghee"] }, "recipes": [] }"#,
    )?;

    let result = load_catalog(&path);
    assert!(matches!(
        result,
        Err(AppError::CatalogError(CatalogError::DuplicateIngredient { .. }))
    ));

    assert!(matches!(
        load_catalog(dir.child("missing.json")),
        Err(AppError::IoError(_))
    ));

    Ok(())
}

#[test]
fn test_shopping_flow_with_ticked_auxiliaries() -> anyhow::Result<()> {
    let config = Config::default();
    let planner = planner(&config);

    let mut state = SelectionState::default();
    planner.add_free_text(&mut state, "besan, rice");
    state.set_exclude_auxiliaries(true);

    let ticked = vec!["mustard seeds".to_string(), "oil".to_string()];
    let list = planner.shopping_list(&state, "kadhi-chawal", &ticked)?;

    assert_eq!(list.clipboard_text(), "curd\nmustard seeds\noil");
    assert_eq!(
        planner.retailer_link("Mozilla/5.0 (iPhone)", &list),
        "https://blinkit.com/s/?q=curd%2C%20mustard%20seeds%2C%20oil"
    );
    assert!(planner.retailer_link("Android 14", &list).starts_with("intent://s/?q=curd"));

    Ok(())
}
