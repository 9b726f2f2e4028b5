pub mod recipe;
pub mod session;

pub use recipe::*;
pub use session::*;
