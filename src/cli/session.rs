use clap::Args;
use mealmate_recipe::Tokenizer;
use mealmate_shared::{MealType, SelectionState};

use crate::config::SessionConfig;
use crate::planner::Planner;

/// Selection and filter flags shared by the session-driven commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Ingredients on hand, comma or newline separated (repeatable)
    #[arg(long)]
    pub have: Vec<String>,

    /// Pantry staples, replacing the configured ones
    #[arg(long)]
    pub pantry: Option<String>,

    /// Maximum number of missing required ingredients (0-4)
    #[arg(long)]
    pub max_missing: Option<u8>,

    /// Maximum cooking time in minutes, 0 for no limit
    #[arg(long)]
    pub max_time: Option<u32>,

    /// Exclude recipes requiring onion, garlic or ginger
    #[arg(long)]
    pub jain: bool,

    /// Meal type: breakfast, lunch, dinner or snack
    #[arg(long)]
    pub meal: Option<MealType>,

    /// Only show recipes for the selected meal type
    #[arg(long)]
    pub limit_by_meal: bool,

    /// No spices or oil on hand
    #[arg(long)]
    pub no_spices: bool,
}

impl SessionArgs {
    /// Build a session from configured defaults overridden by these flags.
    pub fn to_state(&self, planner: &Planner<'_>, defaults: &SessionConfig) -> SelectionState {
        let mut state = defaults.initial_state();

        if let Some(pantry) = &self.pantry {
            state.pantry = Tokenizer::tokenize(pantry).into_iter().collect();
        }

        let added = planner.add_free_text(&mut state, &self.have.join("\n"));
        tracing::debug!(?added, "selected ingredients");

        let mut filters = state.filters.clone();
        if let Some(max_missing) = self.max_missing {
            filters.max_missing = Some(max_missing);
        }
        if let Some(max_time) = self.max_time {
            filters.max_time_minutes = max_time;
        }
        if self.meal.is_some() {
            filters.meal_type = self.meal;
        }
        filters.dietary_only |= self.jain;
        filters.limit_by_meal_type |= self.limit_by_meal;

        state.set_filters(filters);
        state.set_exclude_auxiliaries(self.no_spices);
        state
    }
}
