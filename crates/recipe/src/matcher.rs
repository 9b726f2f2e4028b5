//! Per-recipe feasibility and the reachable-ingredient universe.
//!
//! # Business Rules
//! - **Hard dietary exclusion**: with the dietary flag on, a recipe whose
//!   *required* ingredients include a blocked name is excluded outright.
//!   Optional blocked ingredients are fine (they can be skipped).
//! - **Missing list**: required names absent from have ∪ pantry, in recipe
//!   declaration order.
//! - **Main gating**: only intentional selections (the have-set, not the
//!   pantry) in a main category count as overlap.

use std::collections::BTreeSet;

use mealmate_shared::{EffectiveHave, Filters, IngredientSet, Recipe};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::scorer::Scorer;

/// Ingredients disallowed by the Jain-friendly dietary flag.
pub const DIETARY_BLOCK_LIST: [&str; 3] = ["onion", "garlic", "ginger"];

pub fn is_dietary_blocked(name: &str) -> bool {
    DIETARY_BLOCK_LIST.contains(&name)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// A required ingredient violates the dietary constraint.
    DietaryBlocked,
    Matched { missing: Vec<String>, score: u32 },
}

impl MatchResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn missing(&self) -> &[String] {
        match self {
            MatchResult::Matched { missing, .. } => missing,
            MatchResult::DietaryBlocked => &[],
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            MatchResult::Matched { score, .. } => *score,
            MatchResult::DietaryBlocked => 0,
        }
    }
}

/// True iff some main-category ingredient of the recipe is in `have`.
/// Pantry staples are deliberately not consulted.
pub fn has_main_overlap<H: IngredientSet + ?Sized>(recipe: &Recipe, have: &H) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.category.is_main() && have.has(&ingredient.name))
}

pub struct Matcher<'a> {
    catalog: &'a Catalog,
    scorer: Scorer,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog, scorer: Scorer) -> Self {
        Self { catalog, scorer }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn match_recipe<H, P>(
        &self,
        recipe: &Recipe,
        have: &H,
        pantry: &P,
        dietary_only: bool,
    ) -> MatchResult
    where
        H: IngredientSet + ?Sized,
        P: IngredientSet + ?Sized,
    {
        let effective = EffectiveHave::new(have, pantry);

        if dietary_only && recipe.required().any(|r| is_dietary_blocked(&r.name)) {
            return MatchResult::DietaryBlocked;
        }

        let missing = recipe
            .required()
            .filter(|r| !effective.has(&r.name))
            .map(|r| r.name.clone())
            .collect();

        MatchResult::Matched {
            missing,
            score: self.scorer.score_recipe(recipe, &effective),
        }
    }

    /// Hard pre-filters shared by the universe and the suggestion list.
    pub(crate) fn passes_prefilters(recipe: &Recipe, filters: &Filters) -> bool {
        filters.allows_time(recipe.time_minutes) && filters.allows_meal_type(recipe.meal_type)
    }

    /// Every ingredient referenced by a recipe that is still reachable under
    /// the current constraints. Drives which ingredients the picker shows.
    pub fn reachable_universe<H, P>(&self, have: &H, pantry: &P, filters: &Filters) -> BTreeSet<String>
    where
        H: IngredientSet + ?Sized,
        P: IngredientSet + ?Sized,
    {
        let ceiling = filters.missing_ceiling();
        let mut universe = BTreeSet::new();

        for recipe in self.catalog.recipes() {
            if !Self::passes_prefilters(recipe, filters) {
                continue;
            }

            let result = self.match_recipe(recipe, have, pantry, filters.dietary_only);
            if !result.is_ok() || result.missing().len() > ceiling {
                continue;
            }

            universe.extend(recipe.ingredient_names().map(str::to_owned));
        }

        tracing::debug!(size = universe.len(), "computed reachable universe");
        universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealmate_shared::{IngredientCategory, MealType};

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn matcher() -> Matcher<'static> {
        Matcher::new(Catalog::builtin(), Scorer::default())
    }

    fn recipe(id: &str) -> &'static Recipe {
        Catalog::builtin().recipe(id).unwrap()
    }

    #[test]
    fn test_aloo_gobi_with_optional_spices_in_pantry() {
        let result = matcher().match_recipe(
            recipe("aloo-gobi"),
            &set(&["potato", "cauliflower"]),
            &set(&["salt", "turmeric", "oil"]),
            true,
        );

        assert!(result.is_ok());
        assert!(result.missing().is_empty());
        // potato 5 + cauliflower 5 + turmeric 1 + salt 1 + oil 1
        assert_eq!(result.score(), 13);
    }

    #[test]
    fn test_missing_preserves_declaration_order() {
        let result = matcher().match_recipe(recipe("rajma-chawal"), &set(&["rice"]), &set(&[]), false);
        assert_eq!(result.missing(), ["rajma".to_string(), "tomato".to_string()]);
    }

    #[test]
    fn test_pantry_satisfies_required_items() {
        let result = matcher().match_recipe(
            recipe("poha"),
            &set(&["poha", "onion", "turmeric", "salt"]),
            &set(&["oil"]),
            false,
        );
        assert!(result.missing().is_empty());
    }

    #[test]
    fn test_required_blocked_ingredient_excludes_recipe() {
        let result = matcher().match_recipe(recipe("poha"), &set(&["poha", "onion"]), &set(&[]), true);
        assert_eq!(result, MatchResult::DietaryBlocked);
        assert!(!result.is_ok());
    }

    #[test]
    fn test_optional_blocked_ingredient_is_allowed() {
        // onion and green chilli are optional in upma
        let result = matcher().match_recipe(recipe("upma"), &set(&["rava"]), &set(&[]), true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_recipe_without_required_ingredients_always_matches() {
        let recipe = Recipe {
            id: "garnish".to_string(),
            name: "Garnish".to_string(),
            meal_type: MealType::Snack,
            time_minutes: 1,
            dietary_flag: true,
            ingredients: vec![mealmate_shared::RecipeIngredient::optional(
                "lemon",
                IngredientCategory::FreshProduce,
            )],
            auxiliary_spice_names: vec![],
            steps: vec![],
        };

        let result = matcher().match_recipe(&recipe, &set(&[]), &set(&[]), true);
        assert_eq!(
            result,
            MatchResult::Matched {
                missing: vec![],
                score: 0
            }
        );
    }

    #[test]
    fn test_main_overlap_ignores_spices_and_pantry() {
        let chana = recipe("chana-masala");
        assert!(!has_main_overlap(chana, &set(&["turmeric", "salt", "oil"])));
        assert!(has_main_overlap(chana, &set(&["chickpeas"])));
        assert!(!has_main_overlap(recipe("poha"), &set(&["chickpeas"])));
    }

    #[test]
    fn test_universe_narrows_to_reachable_ingredients() {
        let filters = Filters {
            max_missing: Some(2),
            max_time_minutes: 60,
            ..Filters::default()
        };
        let universe = matcher().reachable_universe(
            &set(&["poha"]),
            &set(&["salt", "turmeric", "oil"]),
            &filters,
        );

        assert!(universe.contains("onion"));
        assert!(!universe.contains("rajma"));
    }

    #[test]
    fn test_universe_respects_meal_type_when_enabled() {
        let filters = Filters {
            max_missing: Some(4),
            max_time_minutes: 0,
            meal_type: Some(MealType::Breakfast),
            limit_by_meal_type: true,
            ..Filters::default()
        };
        let universe = matcher().reachable_universe(&set(&[]), &set(&[]), &filters);

        assert!(universe.contains("rava"));
        assert!(!universe.contains("rajma"), "rajma only appears in dinner");
        assert!(!universe.contains("chickpeas"), "chickpeas only appear in lunch");
    }

    #[test]
    fn test_universe_excludes_blocked_recipes() {
        let filters = Filters {
            max_missing: Some(4),
            max_time_minutes: 0,
            dietary_only: true,
            ..Filters::default()
        };
        let universe = matcher().reachable_universe(&set(&[]), &set(&[]), &filters);

        // poha sev is only referenced by kanda poha, which requires onion
        assert!(!universe.contains("poha sev"));
        assert!(universe.contains("rava"));
    }

    #[test]
    fn test_universe_is_idempotent() {
        let m = matcher();
        let have = set(&["rice", "tomato"]);
        let pantry = set(&["salt"]);
        let filters = Filters::default();

        assert_eq!(
            m.reachable_universe(&have, &pantry, &filters),
            m.reachable_universe(&have, &pantry, &filters)
        );
    }
}
