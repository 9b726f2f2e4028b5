use std::collections::BTreeSet;

use mealmate_recipe::Catalog;
use mealmate_shopping::{Retailer, ShoppingList};

const ANDROID_UA: &str =
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";
const IOS_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_android_gets_intent_link() {
    let link = Retailer::default().deep_link(ANDROID_UA, ["rice", "oil"]);

    assert!(link.starts_with("intent://"), "got {link}");
    assert!(link.contains("package=com.grofers.customerapp"));
    assert!(link.contains("S.browser_fallback_url=https%3A%2F%2Fblinkit.com%2Fs%2F"));
    assert!(link.ends_with(";end"));
}

#[test]
fn test_ios_gets_web_link() {
    let link = Retailer::default().deep_link(IOS_UA, ["rice", "oil"]);

    assert!(link.starts_with("https://"), "got {link}");
    assert!(link.contains("blinkit.com/s/"));
    assert_eq!(link, Retailer::default().search_url(["rice", "oil"]));
}

#[test]
fn test_shopping_list_feeds_deduplicated_link() {
    let catalog = Catalog::builtin();
    let recipe = catalog.recipe("dal-tadka").unwrap();

    let list = ShoppingList::build(
        catalog,
        recipe,
        &set(&[]),
        &set(&["salt"]),
        true,
        &["ghee".to_string(), "salt".to_string()],
    );
    assert_eq!(list.items(), vec!["toor dal", "ghee", "salt"]);

    let mut items = list.items();
    items.push("ghee");
    let url = Retailer::default().search_url(items);
    assert_eq!(url, "https://blinkit.com/s/?q=toor%20dal%2C%20ghee%2C%20salt");
}

#[test]
fn test_shopping_list_serializes_groups_by_category_name() {
    let catalog = Catalog::builtin();
    let list = ShoppingList::build(
        catalog,
        catalog.recipe("rajma-chawal").unwrap(),
        &set(&["rice"]),
        &set(&[]),
        false,
        &[],
    );

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["groups"]["Pulses"][0], "rajma");
    assert_eq!(json["groups"]["Fresh Produce"][0], "tomato");
}
