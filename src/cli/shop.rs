use anyhow::Result;
use mealmate_recipe::{Catalog, Tokenizer};
use mealmate_shared::SelectionState;
use mealmate_shopping::ShoppingList;
use serde::Serialize;

use super::print_json;
use crate::planner::Planner;

#[derive(Serialize)]
struct ShopOutput<'a> {
    recipe: &'a str,
    list: &'a ShoppingList,
    clipboard: String,
    link: String,
}

#[tracing::instrument(skip(planner, state))]
pub fn shop(
    planner: &Planner<'_>,
    state: &SelectionState,
    recipe_id: &str,
    ticked: &[String],
    user_agent: &str,
    json: bool,
) -> Result<()> {
    let list = planner.shopping_list(state, recipe_id, ticked)?;
    let link = planner.retailer_link(user_agent, &list);

    if json {
        return print_json(&ShopOutput {
            recipe: recipe_id,
            list: &list,
            clipboard: list.clipboard_text(),
            link,
        });
    }

    if list.is_empty() {
        println!("Nothing to buy for {recipe_id}.");
        return Ok(());
    }

    for (category, names) in &list.groups {
        println!("{category}: {}", names.join(", "));
    }
    if !list.auxiliaries.is_empty() {
        println!("Spices/oil: {}", list.auxiliaries.join(", "));
    }
    println!("\n{link}");

    Ok(())
}

#[derive(Serialize)]
struct TokenOutput {
    token: String,
    known: bool,
}

pub fn tokenize(catalog: &Catalog, text: &str, json: bool) -> Result<()> {
    let tokens: Vec<TokenOutput> = Tokenizer::tokenize(text)
        .into_iter()
        .map(|token| TokenOutput {
            known: catalog.contains_ingredient(&token),
            token,
        })
        .collect();

    if json {
        return print_json(&tokens);
    }

    for token in &tokens {
        let marker = if token.known { "" } else { "  (not in catalog)" };
        println!("{}{marker}", token.token);
    }

    Ok(())
}
