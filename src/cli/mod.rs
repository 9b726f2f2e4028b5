mod session;
mod shop;
mod suggest;

pub use session::SessionArgs;
pub use shop::{shop, tokenize};
pub use suggest::{suggest, universe};

use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
