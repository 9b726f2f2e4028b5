//! Immutable ingredient and recipe registries.
//!
//! A [`Catalog`] is assembled once and only ever handed out by shared
//! reference. The built-in catalog lives behind a `LazyLock` for the whole
//! process; external catalogs go through [`Catalog::new`] or
//! [`Catalog::from_json`], both of which validate before returning.

mod builtin;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use mealmate_shared::{Ingredient, IngredientCategory, Recipe};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::tokenizer::Tokenizer;

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::assemble(builtin::ingredients(), builtin::recipes()));

/// Wire shape of a catalog as produced by an external loader.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogData {
    pub ingredients: BTreeMap<IngredientCategory, Vec<String>>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug)]
pub struct Catalog {
    ingredients: BTreeMap<IngredientCategory, Vec<String>>,
    by_name: HashMap<String, IngredientCategory>,
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// The compiled-in vegetarian catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn new(
        ingredients: BTreeMap<IngredientCategory, Vec<String>>,
        recipes: Vec<Recipe>,
    ) -> CatalogResult<Self> {
        let catalog = Self::assemble(ingredients, recipes);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::try_from(data)
    }

    // First occurrence wins in both indexes; `validate` reports the rest.
    fn assemble(
        ingredients: BTreeMap<IngredientCategory, Vec<String>>,
        recipes: Vec<Recipe>,
    ) -> Self {
        let mut by_name = HashMap::new();
        for (category, names) in &ingredients {
            for name in names {
                by_name.entry(name.clone()).or_insert(*category);
            }
        }

        let mut by_id = HashMap::new();
        for (idx, recipe) in recipes.iter().enumerate() {
            by_id.entry(recipe.id.clone()).or_insert(idx);
        }

        Self {
            ingredients,
            by_name,
            recipes,
            by_id,
        }
    }

    /// Check the data-quality invariants: unique ingredient names across
    /// categories, unique recipe ids, positive times, and every recipe
    /// reference resolving to the category it declares.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen: HashMap<&str, IngredientCategory> = HashMap::new();
        for (category, names) in &self.ingredients {
            for name in names {
                if let Some(first) = seen.insert(name.as_str(), *category) {
                    return Err(CatalogError::DuplicateIngredient {
                        name: name.clone(),
                        first,
                        second: *category,
                    });
                }
            }
        }

        let mut ids = HashSet::new();
        for recipe in &self.recipes {
            if !ids.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateRecipe(recipe.id.clone()));
            }
            if recipe.time_minutes == 0 {
                return Err(CatalogError::ZeroTime(recipe.id.clone()));
            }
            for ingredient in &recipe.ingredients {
                match self.by_name.get(&ingredient.name) {
                    None => {
                        return Err(CatalogError::UnknownIngredient {
                            recipe: recipe.id.clone(),
                            ingredient: ingredient.name.clone(),
                        });
                    }
                    Some(indexed) if *indexed != ingredient.category => {
                        return Err(CatalogError::CategoryMismatch {
                            recipe: recipe.id.clone(),
                            ingredient: ingredient.name.clone(),
                            declared: ingredient.category,
                            indexed: *indexed,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }

    /// Ingredient names grouped by category, in category order.
    pub fn ingredients_by_category(
        &self,
    ) -> impl Iterator<Item = (IngredientCategory, &[String])> {
        self.ingredients
            .iter()
            .map(|(category, names)| (*category, names.as_slice()))
    }

    pub fn ingredients(&self) -> impl Iterator<Item = Ingredient> + '_ {
        self.ingredients_by_category().flat_map(|(category, names)| {
            names.iter().map(move |name| Ingredient {
                name: name.clone(),
                category,
            })
        })
    }

    pub fn category_of(&self, name: &str) -> Option<IngredientCategory> {
        self.by_name.get(name).copied()
    }

    pub fn contains_ingredient(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|idx| &self.recipes[*idx])
    }

    /// Picker contents: per category, the names that are still reachable or
    /// already selected, optionally narrowed by a case-insensitive search.
    /// Categories left empty are omitted.
    pub fn visible_ingredients<'c>(
        &'c self,
        universe: &BTreeSet<String>,
        have: &BTreeSet<String>,
        search: Option<&str>,
    ) -> Vec<(IngredientCategory, Vec<&'c str>)> {
        let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();

        self.ingredients_by_category()
            .filter_map(|(category, names)| {
                let shown: Vec<&str> = names
                    .iter()
                    .filter(|name| universe.contains(*name) || have.contains(*name))
                    .filter(|name| needle.is_empty() || name.contains(needle.as_str()))
                    .map(String::as_str)
                    .collect();
                (!shown.is_empty()).then_some((category, shown))
            })
            .collect()
    }

    /// Tokenize free text and keep the tokens that name catalog ingredients,
    /// deduplicated in first-seen order.
    pub fn resolve_tokens(&self, text: &str) -> Vec<String> {
        let mut resolved: Vec<String> = Vec::new();
        for token in Tokenizer::tokenize(text) {
            if self.contains_ingredient(&token) && !resolved.contains(&token) {
                resolved.push(token);
            }
        }
        resolved
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> CatalogResult<Self> {
        Self::new(data.ingredients, data.recipes)
    }
}
