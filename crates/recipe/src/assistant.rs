//! Assistant-style nudges derived from the current state. All pure; nothing
//! here is remembered between calls.

use std::collections::{BTreeSet, HashSet};

use mealmate_shared::{Filters, IngredientCategory, IngredientSet};
use strum::VariantArray;

use crate::catalog::Catalog;

pub const TIME_RELAX_NUDGE: &str =
    "Nothing fits in that time. Want to allow a few more minutes?";
pub const NO_MATCHES_MESSAGE: &str =
    "No matches. Try adjusting preferences or add another main ingredient.";
pub const LENTIL_NUDGE: &str =
    "You seem to enjoy lentils. Want me to surface more dal-based ideas?";
pub const GRAIN_NUDGE: &str =
    "Plenty of grain options here. Quick pulao or upma sound good?";

/// Time ceiling at or below which an empty result suggests relaxing time.
pub const TIME_RELAX_THRESHOLD_MINUTES: u32 = 20;
pub const UNLOCK_LIMIT: usize = 3;
/// Unlock ideas are offered only while fewer than this many suggestions show.
pub const UNLOCK_BELOW: usize = 3;

const SUBSTITUTES: [(&str, &[&str]); 7] = [
    ("paneer", &["tofu", "mushrooms"]),
    ("ghee", &["oil", "butter"]),
    ("curd", &["yogurt"]),
    ("yogurt", &["curd"]),
    ("rice", &["poha", "rava"]),
    ("tomato", &["capsicum"]),
    ("onion", &["asafoetida"]),
];

pub struct AssistantService;

impl AssistantService {
    pub fn substitutes_for(name: &str) -> Option<&'static [&'static str]> {
        SUBSTITUTES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, subs)| *subs)
    }

    /// One hint per distinct missing name that has substitutes, first-seen order.
    pub fn substitution_hints<'n, I>(missing: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut seen = HashSet::new();
        let mut hints = Vec::new();

        for name in missing {
            let key = name.to_lowercase();
            let Some(subs) = Self::substitutes_for(&key) else {
                continue;
            };
            if seen.insert(key.clone()) {
                hints.push(format!("No {key}? Try {}.", subs.join(" or ")));
            }
        }

        hints
    }

    pub fn should_relax_time(max_time_minutes: u32, suggestion_count: usize) -> bool {
        max_time_minutes <= TIME_RELAX_THRESHOLD_MINUTES && suggestion_count == 0
    }

    /// Time-relax nudge. A disabled time filter (0) never triggers it.
    pub fn time_relax_nudge(filters: &Filters, suggestion_count: usize) -> Option<&'static str> {
        (filters.max_time_minutes != 0
            && Self::should_relax_time(filters.max_time_minutes, suggestion_count))
        .then_some(TIME_RELAX_NUDGE)
    }

    /// Up to three unselected main-category ingredients from the reachable
    /// universe, in catalog order. Only offered when 0 < suggestions < 3.
    pub fn unlock_ingredients<H: IngredientSet + ?Sized>(
        catalog: &Catalog,
        universe: &BTreeSet<String>,
        have: &H,
        suggestion_count: usize,
    ) -> Vec<String> {
        if suggestion_count == 0 || suggestion_count >= UNLOCK_BELOW {
            return Vec::new();
        }

        catalog
            .ingredients_by_category()
            .filter(|(category, _)| category.is_main())
            .flat_map(|(_, names)| names.iter())
            .filter(|name| universe.contains(*name) && !have.has(name))
            .take(UNLOCK_LIMIT)
            .cloned()
            .collect()
    }

    /// Nudge based on the dominant category of the current selection.
    pub fn adaptive_nudge<'h, I>(catalog: &Catalog, have: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'h String>,
    {
        let mut counts = [0usize; IngredientCategory::VARIANTS.len()];
        for name in have {
            let category = catalog.category_of(name).unwrap_or(IngredientCategory::Other);
            counts[category as usize] += 1;
        }

        // Earlier categories win ties.
        let mut top: Option<(IngredientCategory, usize)> = None;
        for (category, count) in IngredientCategory::VARIANTS.iter().zip(counts) {
            if count > 0 && top.is_none_or(|(_, best)| count > best) {
                top = Some((*category, count));
            }
        }

        match top.map(|(category, _)| category) {
            Some(IngredientCategory::Pulses) => Some(LENTIL_NUDGE),
            Some(IngredientCategory::Grains) => Some(GRAIN_NUDGE),
            _ => None,
        }
    }
}
