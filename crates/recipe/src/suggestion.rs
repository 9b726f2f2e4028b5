use std::cmp::Ordering;

use mealmate_shared::{Filters, IngredientSet, Recipe};
use serde::Serialize;

use crate::matcher::{has_main_overlap, Matcher};

/// Number of suggestions shown as starter ideas before anything is selected.
pub const STARTER_IDEAS_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion<'a> {
    pub recipe: &'a Recipe,
    pub missing: Vec<String>,
    pub score: u32,
}

/// Score descending, then faster recipes first, then recipe id.
fn rank(a: &Suggestion<'_>, b: &Suggestion<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.recipe.time_minutes.cmp(&b.recipe.time_minutes))
        .then_with(|| a.recipe.id.cmp(&b.recipe.id))
}

/// Ranked suggestions across the whole catalog.
///
/// Filters applied per recipe, in order:
/// 1. time ceiling and (when enabled) meal type
/// 2. dietary exclusion
/// 3. main-ingredient gating, only when `have` is non-empty
/// 4. missing-count ceiling
pub fn compute_suggestions<'a, H, P>(
    matcher: &Matcher<'a>,
    have: &H,
    pantry: &P,
    filters: &Filters,
) -> Vec<Suggestion<'a>>
where
    H: IngredientSet + ?Sized,
    P: IngredientSet + ?Sized,
{
    let ceiling = filters.missing_ceiling();
    let gate_on_main = !have.is_empty_set();

    let mut suggestions: Vec<Suggestion<'a>> = matcher
        .catalog()
        .recipes()
        .iter()
        .filter(|recipe| Matcher::passes_prefilters(recipe, filters))
        .filter_map(|recipe| {
            let result = matcher.match_recipe(recipe, have, pantry, filters.dietary_only);
            if !result.is_ok() {
                return None;
            }
            if gate_on_main && !has_main_overlap(recipe, have) {
                return None;
            }
            if result.missing().len() > ceiling {
                return None;
            }

            let score = result.score();
            Some(Suggestion {
                recipe,
                missing: result.missing().to_vec(),
                score,
            })
        })
        .collect();

    suggestions.sort_by(rank);

    tracing::debug!(
        count = suggestions.len(),
        gated = gate_on_main,
        "computed suggestions"
    );
    suggestions
}

/// The suggestion whose recipe id matches the session's active recipe.
pub fn active_recipe<'s, 'a>(
    suggestions: &'s [Suggestion<'a>],
    active_recipe_id: Option<&str>,
) -> Option<&'s Suggestion<'a>> {
    let id = active_recipe_id?;
    suggestions.iter().find(|s| s.recipe.id == id)
}

/// The first `count` suggestions, shown while nothing is selected.
pub fn starter_ideas<'s, 'a>(suggestions: &'s [Suggestion<'a>], count: usize) -> &'s [Suggestion<'a>] {
    &suggestions[..count.min(suggestions.len())]
}
