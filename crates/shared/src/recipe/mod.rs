use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum IngredientCategory {
    /// Vegetables, fruit, fresh herbs
    #[strum(serialize = "Fresh Produce")]
    #[serde(rename = "Fresh Produce")]
    FreshProduce,
    /// Rice, flattened rice, semolina, flours
    Grains,
    /// Dals, beans, chickpeas, gram flour
    Pulses,
    /// Paneer, curd, ghee, milk
    Dairy,
    Oils,
    Spices,
    Other,
}

impl IngredientCategory {
    /// Categories that define what a recipe is "built around".
    pub const MAIN: [IngredientCategory; 4] = [
        IngredientCategory::FreshProduce,
        IngredientCategory::Grains,
        IngredientCategory::Pulses,
        IngredientCategory::Dairy,
    ];

    pub fn is_main(&self) -> bool {
        Self::MAIN.contains(self)
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub category: IngredientCategory,
}

/// Reference from a recipe to a canonical ingredient name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub category: IngredientCategory,
    #[serde(default)]
    pub optional: bool,
}

impl RecipeIngredient {
    pub fn required(name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            name: name.into(),
            category,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            name: name.into(),
            category,
            optional: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub time_minutes: u32,
    /// Jain-friendly: no onion, garlic or ginger among required ingredients
    pub dietary_flag: bool,
    pub ingredients: Vec<RecipeIngredient>,
    /// Spices and oil offered as tick-boxes when the user has none on hand
    pub auxiliary_spice_names: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn required(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|i| !i.optional)
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}

// Recipes are compared by id only.
impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

/// Membership test over canonical ingredient names.
pub trait IngredientSet {
    fn has(&self, name: &str) -> bool;

    fn is_empty_set(&self) -> bool;
}

impl IngredientSet for BTreeSet<String> {
    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

/// have-set ∪ pantry-set, without materializing the union.
pub struct EffectiveHave<'a, H: ?Sized, P: ?Sized> {
    pub have: &'a H,
    pub pantry: &'a P,
}

impl<'a, H: IngredientSet + ?Sized, P: IngredientSet + ?Sized> EffectiveHave<'a, H, P> {
    pub fn new(have: &'a H, pantry: &'a P) -> Self {
        Self { have, pantry }
    }
}

impl<H: IngredientSet + ?Sized, P: IngredientSet + ?Sized> IngredientSet for EffectiveHave<'_, H, P> {
    fn has(&self, name: &str) -> bool {
        self.have.has(name) || self.pantry.has(name)
    }

    fn is_empty_set(&self) -> bool {
        self.have.is_empty_set() && self.pantry.is_empty_set()
    }
}
