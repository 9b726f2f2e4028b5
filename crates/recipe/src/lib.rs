//! Vegetarian recipe matching and recommendation engine.
//!
//! Everything here is synchronous and pure. The catalog is immutable and
//! every computation borrows it.

pub mod assistant;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod scorer;
pub mod session;
pub mod suggestion;
pub mod tokenizer;

pub use assistant::{
    AssistantService, GRAIN_NUDGE, LENTIL_NUDGE, NO_MATCHES_MESSAGE, TIME_RELAX_NUDGE,
};
pub use catalog::{Catalog, CatalogData};
pub use error::{CatalogError, CatalogResult};
pub use matcher::{has_main_overlap, is_dietary_blocked, MatchResult, Matcher, DIETARY_BLOCK_LIST};
pub use scorer::{CategoryWeights, Scorer};
pub use session::FreeTextInput;
pub use suggestion::{active_recipe, compute_suggestions, starter_ideas, Suggestion, STARTER_IDEAS_COUNT};
pub use tokenizer::Tokenizer;
