mod filters;

pub use filters::*;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Per-session selections. Owned and mutated by the UI layer only; the
/// engine reads it by reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub have: BTreeSet<String>,
    /// Background staples that are always considered available
    pub pantry: BTreeSet<String>,
    pub favorites: BTreeSet<String>,
    pub filters: Filters,
    /// "No spices/oil" toggle
    pub exclude_auxiliaries: bool,
    pub active_recipe_id: Option<String>,
}

fn toggle(set: &mut BTreeSet<String>, name: &str) -> bool {
    if set.remove(name) {
        false
    } else {
        set.insert(name.to_owned());
        true
    }
}

impl SelectionState {
    pub fn with_pantry<I, S>(pantry: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pantry: pantry.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns whether `name` is selected after the toggle.
    pub fn toggle_selected(&mut self, name: &str) -> bool {
        toggle(&mut self.have, name)
    }

    pub fn toggle_pantry(&mut self, name: &str) -> bool {
        toggle(&mut self.pantry, name)
    }

    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        toggle(&mut self.favorites, recipe_id)
    }

    pub fn clear_selections(&mut self) {
        self.have.clear();
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters.clamped();
    }

    pub fn set_exclude_auxiliaries(&mut self, exclude: bool) {
        self.exclude_auxiliaries = exclude;
    }

    pub fn set_active_recipe(&mut self, recipe_id: Option<String>) {
        self.active_recipe_id = recipe_id;
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }
}
