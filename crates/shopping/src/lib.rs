pub mod link;
pub mod list;

pub use link::{is_android, Retailer};
pub use list::{auxiliary_prompts, group_by_category, required_missing, ShoppingList};
