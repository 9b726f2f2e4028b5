pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod planner;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use planner::{load_catalog, DerivedView, Nudges, Planner, SuggestionMode};
