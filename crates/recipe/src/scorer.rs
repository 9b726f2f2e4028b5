use mealmate_shared::{IngredientCategory, IngredientSet, Recipe};
use serde::{Deserialize, Serialize};

/// Per-category points awarded for each recipe ingredient the user has.
/// Fresh produce weighs most; spices and oil least.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub fresh_produce: u32,
    pub grains: u32,
    pub pulses: u32,
    pub dairy: u32,
    pub oils: u32,
    pub spices: u32,
    pub other: u32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            fresh_produce: 5,
            grains: 4,
            pulses: 3,
            dairy: 3,
            oils: 1,
            spices: 1,
            other: 2,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: IngredientCategory) -> u32 {
        match category {
            IngredientCategory::FreshProduce => self.fresh_produce,
            IngredientCategory::Grains => self.grains,
            IngredientCategory::Pulses => self.pulses,
            IngredientCategory::Dairy => self.dairy,
            IngredientCategory::Oils => self.oils,
            IngredientCategory::Spices => self.spices,
            IngredientCategory::Other => self.other,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scorer {
    weights: CategoryWeights,
}

impl Scorer {
    pub fn new(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    /// Sum of category weights over every ingredient (required or optional)
    /// present in `have`. Absent optional ingredients cost nothing. The sum
    /// saturates at `u32::MAX`.
    pub fn score_recipe<S: IngredientSet + ?Sized>(&self, recipe: &Recipe, have: &S) -> u32 {
        recipe
            .ingredients
            .iter()
            .filter(|ingredient| have.has(&ingredient.name))
            .map(|ingredient| self.weights.weight(ingredient.category))
            .fold(0u32, u32::saturating_add)
    }
}
