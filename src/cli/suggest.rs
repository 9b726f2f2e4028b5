use anyhow::Result;
use mealmate_shared::SelectionState;

use super::print_json;
use crate::planner::{Planner, SuggestionMode};

#[tracing::instrument(skip_all)]
pub fn suggest(planner: &Planner<'_>, state: &SelectionState, json: bool) -> Result<()> {
    let view = planner.derive(state);
    tracing::info!(
        mode = ?view.mode,
        suggestions = view.suggestions.len(),
        universe = view.universe.len(),
        "derived view"
    );

    if json {
        return print_json(&view);
    }

    match view.mode {
        SuggestionMode::Starter => println!("Starter ideas:"),
        SuggestionMode::Matched => println!("{} suggestion(s):", view.suggestions.len()),
    }
    for suggestion in &view.suggestions {
        let missing = if suggestion.missing.is_empty() {
            "nothing".to_string()
        } else {
            suggestion.missing.join(", ")
        };
        println!(
            "  {:<28} {:>3} min  score {:>3}  missing: {}",
            suggestion.recipe.name, suggestion.recipe.time_minutes, suggestion.score, missing
        );
    }

    let nudges = &view.nudges;
    for message in [nudges.no_matches, nudges.time_relax, nudges.adaptive]
        .into_iter()
        .flatten()
    {
        println!("\n{message}");
    }
    if !nudges.unlock.is_empty() {
        println!("\nAdding {} would unlock more recipes.", nudges.unlock.join(", "));
    }

    if let Some(active) = &view.active {
        let recipe = active.recipe;
        println!("\n{} ({}, {} min)", recipe.name, recipe.meal_type, recipe.time_minutes);
        for (idx, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", idx + 1, step);
        }
        for hint in &view.substitution_hints {
            println!("  {hint}");
        }
        if !view.auxiliary_prompts.is_empty() {
            println!("  Spices/oil to consider: {}", view.auxiliary_prompts.join(", "));
        }
        if let Some(list) = view.shopping_list.as_ref().filter(|l| !l.is_empty()) {
            println!("  To buy: {}", list.items().join(", "));
        }
    } else if let Some(id) = &state.active_recipe_id {
        tracing::warn!(recipe = %id, "recipe is not among the current suggestions");
    }

    Ok(())
}

#[tracing::instrument(skip(planner, state))]
pub fn universe(
    planner: &Planner<'_>,
    state: &SelectionState,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let picker = planner.picker(state, search);

    if json {
        return print_json(&picker);
    }

    for (category, names) in &picker {
        println!("{category}: {}", names.join(", "));
    }

    Ok(())
}
