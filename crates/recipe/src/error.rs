use mealmate_shared::IngredientCategory;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Ingredient '{name}' is listed under both {first} and {second}")]
    DuplicateIngredient {
        name: String,
        first: IngredientCategory,
        second: IngredientCategory,
    },

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),

    #[error("Recipe '{0}' must take more than 0 minutes")]
    ZeroTime(String),

    #[error("Recipe '{recipe}' references unknown ingredient '{ingredient}'")]
    UnknownIngredient { recipe: String, ingredient: String },

    #[error(
        "Recipe '{recipe}' declares '{ingredient}' as {declared}, catalog lists it under {indexed}"
    )]
    CategoryMismatch {
        recipe: String,
        ingredient: String,
        declared: IngredientCategory,
        indexed: IngredientCategory,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
