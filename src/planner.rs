//! The derived view over a session: everything the UI renders, recomputed
//! from scratch for each state.
//!
//! # Business Rules
//! - With an empty have-set the view is in starter mode and shows only the
//!   first three suggestions (main-ingredient gating is bypassed).
//! - The no-match message only appears once something is selected.
//! - The active recipe must be among the current suggestions; otherwise no
//!   detail, hints or shopping list are produced.

use std::collections::BTreeSet;
use std::path::Path;

use mealmate_recipe::{
    active_recipe, compute_suggestions, starter_ideas, AssistantService, Catalog,
    CategoryWeights, FreeTextInput, Matcher, Scorer, Suggestion, NO_MATCHES_MESSAGE,
    STARTER_IDEAS_COUNT,
};
use mealmate_shared::{IngredientCategory, SelectionState};
use mealmate_shopping::{auxiliary_prompts, Retailer, ShoppingList};
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionMode {
    /// Nothing selected yet
    Starter,
    Matched,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Nudges {
    pub time_relax: Option<&'static str>,
    /// Main ingredients that would open up more recipes
    pub unlock: Vec<String>,
    pub adaptive: Option<&'static str>,
    pub no_matches: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DerivedView<'c> {
    pub mode: SuggestionMode,
    pub universe: BTreeSet<String>,
    pub picker: Vec<(IngredientCategory, Vec<&'c str>)>,
    pub suggestions: Vec<Suggestion<'c>>,
    pub active: Option<Suggestion<'c>>,
    pub substitution_hints: Vec<String>,
    pub auxiliary_prompts: Vec<String>,
    pub shopping_list: Option<ShoppingList>,
    pub nudges: Nudges,
}

/// Read a JSON catalog from disk and validate it.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let catalog = Catalog::from_json(&json)?;
    tracing::info!(
        path = %path.as_ref().display(),
        recipes = catalog.recipes().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

pub struct Planner<'c> {
    matcher: Matcher<'c>,
    retailer: Retailer,
}

impl<'c> Planner<'c> {
    pub fn new(catalog: &'c Catalog, weights: CategoryWeights, retailer: Retailer) -> Self {
        Self {
            matcher: Matcher::new(catalog, Scorer::new(weights)),
            retailer,
        }
    }

    pub fn from_config(catalog: &'c Catalog, config: &Config) -> Self {
        Self::new(catalog, config.scoring.clone(), config.retailer.clone())
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.matcher.catalog()
    }

    /// Quick-add free text into the session's have-set.
    pub fn add_free_text(&self, state: &mut SelectionState, text: &str) -> Vec<String> {
        state.add_free_text(self.catalog(), text)
    }

    #[tracing::instrument(skip_all, fields(have = state.have.len()))]
    pub fn derive(&self, state: &SelectionState) -> DerivedView<'c> {
        let catalog = self.catalog();
        let filters = &state.filters;

        let universe = self
            .matcher
            .reachable_universe(&state.have, &state.pantry, filters);
        let all = compute_suggestions(&self.matcher, &state.have, &state.pantry, filters);

        let active = active_recipe(&all, state.active_recipe_id.as_deref()).cloned();
        let (substitution_hints, prompts, shopping_list) = match &active {
            Some(suggestion) => (
                AssistantService::substitution_hints(suggestion.missing.iter().map(String::as_str)),
                auxiliary_prompts(suggestion.recipe, state.exclude_auxiliaries).to_vec(),
                Some(ShoppingList::build(
                    catalog,
                    suggestion.recipe,
                    &state.have,
                    &state.pantry,
                    state.exclude_auxiliaries,
                    &[],
                )),
            ),
            None => (Vec::new(), Vec::new(), None),
        };

        let count = all.len();
        let nudges = Nudges {
            time_relax: AssistantService::time_relax_nudge(filters, count),
            unlock: AssistantService::unlock_ingredients(catalog, &universe, &state.have, count),
            adaptive: AssistantService::adaptive_nudge(catalog, &state.have),
            no_matches: (!state.have.is_empty() && count == 0).then_some(NO_MATCHES_MESSAGE),
        };

        let (mode, suggestions) = if state.have.is_empty() {
            (
                SuggestionMode::Starter,
                starter_ideas(&all, STARTER_IDEAS_COUNT).to_vec(),
            )
        } else {
            (SuggestionMode::Matched, all)
        };

        let picker = catalog.visible_ingredients(&universe, &state.have, None);

        DerivedView {
            mode,
            universe,
            picker,
            suggestions,
            active,
            substitution_hints,
            auxiliary_prompts: prompts,
            shopping_list,
            nudges,
        }
    }

    /// Picker contents narrowed by a search string.
    pub fn picker(
        &self,
        state: &SelectionState,
        search: Option<&str>,
    ) -> Vec<(IngredientCategory, Vec<&'c str>)> {
        let universe = self
            .matcher
            .reachable_universe(&state.have, &state.pantry, &state.filters);
        self.catalog()
            .visible_ingredients(&universe, &state.have, search)
    }

    /// Shopping list for any catalog recipe, with the auxiliaries the user
    /// ticked.
    pub fn shopping_list(
        &self,
        state: &SelectionState,
        recipe_id: &str,
        ticked: &[String],
    ) -> AppResult<ShoppingList> {
        let recipe = self
            .catalog()
            .recipe(recipe_id)
            .ok_or_else(|| AppError::UnknownRecipe(recipe_id.to_string()))?;

        Ok(ShoppingList::build(
            self.catalog(),
            recipe,
            &state.have,
            &state.pantry,
            state.exclude_auxiliaries,
            ticked,
        ))
    }

    pub fn retailer_link(&self, user_agent: &str, list: &ShoppingList) -> String {
        self.retailer.deep_link(user_agent, list.items())
    }
}
