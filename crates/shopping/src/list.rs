use std::collections::BTreeMap;

use mealmate_recipe::Catalog;
use mealmate_shared::{EffectiveHave, IngredientCategory, IngredientSet, Recipe};
use serde::Serialize;

/// Required ingredients of `recipe` absent from have ∪ pantry, in
/// declaration order.
pub fn required_missing<H, P>(recipe: &Recipe, have: &H, pantry: &P) -> Vec<String>
where
    H: IngredientSet + ?Sized,
    P: IngredientSet + ?Sized,
{
    let effective = EffectiveHave::new(have, pantry);
    recipe
        .required()
        .filter(|r| !effective.has(&r.name))
        .map(|r| r.name.clone())
        .collect()
}

/// Group names by catalog category. Names the catalog does not know land in
/// `Other`. Order within a group follows the input.
pub fn group_by_category<'n, I>(catalog: &Catalog, names: I) -> BTreeMap<IngredientCategory, Vec<String>>
where
    I: IntoIterator<Item = &'n str>,
{
    let mut groups: BTreeMap<IngredientCategory, Vec<String>> = BTreeMap::new();
    for name in names {
        let category = catalog.category_of(name).unwrap_or(IngredientCategory::Other);
        groups.entry(category).or_default().push(name.to_owned());
    }
    groups
}

/// Spice/oil tick-boxes offered when the user has declared no spices or oil.
pub fn auxiliary_prompts(recipe: &Recipe, exclude_auxiliaries: bool) -> &[String] {
    if exclude_auxiliaries {
        &recipe.auxiliary_spice_names
    } else {
        &[]
    }
}

/// Missing items for the active recipe plus any ticked auxiliaries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    pub missing: Vec<String>,
    pub groups: BTreeMap<IngredientCategory, Vec<String>>,
    pub auxiliaries: Vec<String>,
}

impl ShoppingList {
    /// Build the list for `recipe`. Only ticked names that the recipe actually
    /// offers as auxiliaries are kept, and only while auxiliaries are excluded.
    pub fn build<H, P>(
        catalog: &Catalog,
        recipe: &Recipe,
        have: &H,
        pantry: &P,
        exclude_auxiliaries: bool,
        ticked: &[String],
    ) -> Self
    where
        H: IngredientSet + ?Sized,
        P: IngredientSet + ?Sized,
    {
        let missing = required_missing(recipe, have, pantry);
        let groups = group_by_category(catalog, missing.iter().map(String::as_str));
        let auxiliaries = auxiliary_prompts(recipe, exclude_auxiliaries)
            .iter()
            .filter(|name| ticked.contains(*name))
            .cloned()
            .collect();

        Self {
            missing,
            groups,
            auxiliaries,
        }
    }

    /// Required missing items followed by ticked auxiliaries. Duplicates are
    /// left for the link builder to collapse.
    pub fn items(&self) -> Vec<&str> {
        self.missing
            .iter()
            .chain(&self.auxiliaries)
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.auxiliaries.is_empty()
    }

    pub fn clipboard_text(&self) -> String {
        self.items().join("\n")
    }
}
