use std::collections::BTreeMap;

use mealmate_shared::IngredientCategory::{self, Dairy, FreshProduce, Grains, Oils, Other, Pulses, Spices};
use mealmate_shared::{MealType, Recipe, RecipeIngredient};

pub(super) fn ingredients() -> BTreeMap<IngredientCategory, Vec<String>> {
    let table: [(IngredientCategory, &[&str]); 7] = [
        (
            FreshProduce,
            &[
                "onion",
                "tomato",
                "potato",
                "cauliflower",
                "spinach",
                "peas",
                "carrot",
                "capsicum",
                "cucumber",
                "green chilli",
                "ginger",
                "garlic",
                "lemon",
                "coriander leaves",
                "mushrooms",
                "mango",
                "banana",
            ],
        ),
        (
            Grains,
            &["rice", "idli rice", "poha", "rava", "wheat flour", "oats", "bread"],
        ),
        (
            Pulses,
            &["toor dal", "moong dal", "urad dal", "chickpeas", "rajma", "besan", "tofu"],
        ),
        (
            Dairy,
            &["paneer", "curd", "yogurt", "milk", "ghee", "butter", "cheese"],
        ),
        (Oils, &["oil"]),
        (
            Spices,
            &[
                "salt",
                "turmeric",
                "mustard seeds",
                "cumin seeds",
                "curry leaves",
                "fenugreek seeds",
                "asafoetida",
                "red chilli powder",
                "coriander powder",
                "garam masala",
                "bay leaf",
                "cloves",
                "cardamom",
                "cinnamon",
                "black pepper",
                "kasuri methi",
            ],
        ),
        (
            Other,
            &["water", "poha sev", "tea leaves", "sugar", "honey", "baking powder"],
        ),
    ];

    table
        .into_iter()
        .map(|(category, names)| (category, names.iter().map(|n| n.to_string()).collect()))
        .collect()
}

fn req(name: &str, category: IngredientCategory) -> RecipeIngredient {
    RecipeIngredient::required(name, category)
}

fn opt(name: &str, category: IngredientCategory) -> RecipeIngredient {
    RecipeIngredient::optional(name, category)
}

struct Draft {
    id: &'static str,
    name: &'static str,
    meal_type: MealType,
    time_minutes: u32,
    dietary_flag: bool,
}

impl Draft {
    fn build(
        self,
        ingredients: Vec<RecipeIngredient>,
        auxiliaries: &[&str],
        steps: &[&str],
    ) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            name: self.name.to_string(),
            meal_type: self.meal_type,
            time_minutes: self.time_minutes,
            dietary_flag: self.dietary_flag,
            ingredients,
            auxiliary_spice_names: auxiliaries.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn draft(
    id: &'static str,
    name: &'static str,
    meal_type: MealType,
    time_minutes: u32,
    dietary_flag: bool,
) -> Draft {
    Draft {
        id,
        name,
        meal_type,
        time_minutes,
        dietary_flag,
    }
}

pub(super) fn recipes() -> Vec<Recipe> {
    use MealType::{Breakfast, Dinner, Lunch, Snack};

    vec![
        // Breakfast and snacks
        draft("poha", "Kanda Poha (Onion Poha)", Snack, 20, false).build(
            vec![
                req("poha", Grains),
                req("onion", FreshProduce),
                opt("green chilli", FreshProduce),
                opt("mustard seeds", Spices),
                opt("turmeric", Spices),
                opt("salt", Spices),
                opt("oil", Oils),
                opt("lemon", FreshProduce),
                opt("poha sev", Other),
                opt("curry leaves", Spices),
            ],
            &["mustard seeds", "turmeric", "salt", "oil", "curry leaves"],
            &[
                "Rinse poha and drain.",
                "Temper mustard seeds, curry leaves, green chilli.",
                "Add onions, saute; add turmeric and salt.",
                "Mix poha; cook 2-3 minutes. Finish with lemon.",
            ],
        ),
        draft("upma", "Rava Upma", Breakfast, 20, true).build(
            vec![
                req("rava", Grains),
                opt("onion", FreshProduce),
                opt("curry leaves", Spices),
                opt("mustard seeds", Spices),
                opt("green chilli", FreshProduce),
                opt("oil", Oils),
                opt("salt", Spices),
            ],
            &["mustard seeds", "curry leaves", "oil", "salt"],
            &[
                "Dry roast rava and keep aside.",
                "Temper mustard seeds and curry leaves.",
                "Add onions or green chilli if using, then water and salt.",
                "Stir in rava until fluffy.",
            ],
        ),
        draft("besan-chilla", "Besan Chilla", Breakfast, 20, true).build(
            vec![
                req("besan", Pulses),
                opt("onion", FreshProduce),
                opt("tomato", FreshProduce),
                opt("green chilli", FreshProduce),
                opt("turmeric", Spices),
                opt("salt", Spices),
                opt("oil", Oils),
                req("water", Other),
            ],
            &["turmeric", "salt", "oil"],
            &[
                "Make a batter with besan, water and spices.",
                "Add chopped veggies if using.",
                "Pan-fry thin pancakes until golden.",
            ],
        ),
        draft("idli", "Idli", Breakfast, 30, true).build(
            vec![
                req("idli rice", Grains),
                req("urad dal", Pulses),
                opt("fenugreek seeds", Spices),
                req("water", Other),
                opt("salt", Spices),
            ],
            &["salt"],
            &[
                "Soak idli rice and urad dal with fenugreek seeds.",
                "Grind, ferment, then steam batter in moulds.",
            ],
        ),
        draft("dosa", "Plain Dosa", Breakfast, 35, true).build(
            vec![
                req("idli rice", Grains),
                req("urad dal", Pulses),
                opt("fenugreek seeds", Spices),
                opt("oil", Oils),
                opt("salt", Spices),
                req("water", Other),
            ],
            &["oil", "salt"],
            &[
                "Prepare fermented dosa batter.",
                "Spread on hot tawa, drizzle oil, cook till crisp.",
            ],
        ),
        draft("aloo-paratha", "Aloo Paratha", Breakfast, 35, false).build(
            vec![
                req("wheat flour", Grains),
                req("potato", FreshProduce),
                opt("green chilli", FreshProduce),
                opt("coriander leaves", FreshProduce),
                opt("ghee", Dairy),
                opt("salt", Spices),
            ],
            &["ghee", "salt"],
            &[
                "Make soft dough with wheat flour, water and salt; rest.",
                "Mash boiled potato with green chilli, salt, coriander leaves.",
                "Stuff, roll, and roast on tawa with ghee until golden.",
            ],
        ),
        draft("oats-pancakes", "Banana Oats Pancakes", Breakfast, 20, true).build(
            vec![
                req("oats", Grains),
                req("banana", FreshProduce),
                req("milk", Dairy),
                opt("baking powder", Other),
                opt("honey", Other),
                opt("butter", Dairy),
            ],
            &["butter"],
            &[
                "Blend oats to flour.",
                "Mix with mashed banana, milk and baking powder.",
                "Cook small pancakes; serve with honey.",
            ],
        ),
        draft("masala-chai", "Masala Chai", Breakfast, 10, false).build(
            vec![
                req("tea leaves", Other),
                req("milk", Dairy),
                opt("ginger", FreshProduce),
                opt("cardamom", Spices),
                opt("cinnamon", Spices),
                opt("sugar", Other),
            ],
            &["cardamom", "cinnamon"],
            &[
                "Boil water with crushed ginger, cardamom, cinnamon.",
                "Add tea leaves; simmer.",
                "Add milk and sugar; boil briefly. Strain.",
            ],
        ),
        draft("veg-sandwich", "Vegetable Grilled Sandwich", Snack, 15, true).build(
            vec![
                req("bread", Grains),
                req("tomato", FreshProduce),
                opt("cucumber", FreshProduce),
                opt("capsicum", FreshProduce),
                opt("cheese", Dairy),
                opt("butter", Dairy),
                opt("salt", Spices),
                opt("black pepper", Spices),
            ],
            &["salt", "black pepper"],
            &[
                "Butter bread; layer tomato, cucumber, capsicum, cheese; season.",
                "Grill or toast until crisp and melty.",
            ],
        ),
        draft("mango-lassi", "Mango Lassi", Snack, 5, true).build(
            vec![
                req("mango", FreshProduce),
                req("curd", Dairy),
                opt("milk", Dairy),
                opt("honey", Other),
            ],
            &[],
            &["Blend mango, curd, milk and honey until smooth; chill."],
        ),
        // Lunch
        draft("chana-masala", "Chana Masala", Lunch, 40, false).build(
            vec![
                req("chickpeas", Pulses),
                req("tomato", FreshProduce),
                opt("onion", FreshProduce),
                opt("garlic", FreshProduce),
                opt("ginger", FreshProduce),
                opt("oil", Oils),
                opt("cumin seeds", Spices),
                opt("garam masala", Spices),
                opt("turmeric", Spices),
                opt("red chilli powder", Spices),
                opt("salt", Spices),
            ],
            &["oil", "cumin seeds", "garam masala", "turmeric", "red chilli powder", "salt"],
            &[
                "Soak and boil chickpeas or use cooked ones.",
                "Heat oil, add cumin seeds.",
                "Add onion, ginger, garlic (skip for Jain) and saute.",
                "Add tomatoes and spices; cook till thick.",
                "Add chickpeas, simmer 10 minutes.",
                "Garnish with coriander leaves and serve.",
            ],
        ),
        draft("aloo-gobi", "Aloo Gobi", Lunch, 30, true).build(
            vec![
                req("potato", FreshProduce),
                req("cauliflower", FreshProduce),
                opt("peas", FreshProduce),
                opt("turmeric", Spices),
                opt("coriander powder", Spices),
                opt("salt", Spices),
                opt("oil", Oils),
            ],
            &["turmeric", "coriander powder", "salt", "oil"],
            &[
                "Heat oil; add turmeric and spices.",
                "Add potato and cauliflower; cover and cook.",
                "Add peas if using; cook till tender.",
            ],
        ),
        draft("veg-pulao", "Veg Pulao", Lunch, 30, true).build(
            vec![
                req("rice", Grains),
                opt("peas", FreshProduce),
                opt("carrot", FreshProduce),
                opt("capsicum", FreshProduce),
                opt("bay leaf", Spices),
                opt("cloves", Spices),
                opt("cardamom", Spices),
                opt("cinnamon", Spices),
                opt("salt", Spices),
                opt("oil", Oils),
            ],
            &["bay leaf", "cloves", "cardamom", "cinnamon", "salt", "oil"],
            &[
                "Saute whole spices, add veggies.",
                "Add rice and water; cook till done.",
            ],
        ),
        draft("dal-tadka", "Dal Tadka", Lunch, 35, true).build(
            vec![
                req("toor dal", Pulses),
                opt("tomato", FreshProduce),
                opt("turmeric", Spices),
                opt("cumin seeds", Spices),
                opt("asafoetida", Spices),
                opt("ghee", Dairy),
                opt("salt", Spices),
            ],
            &["turmeric", "cumin seeds", "asafoetida", "ghee", "salt"],
            &[
                "Pressure cook dal with turmeric and salt.",
                "Make tadka with ghee, cumin, asafoetida, tomatoes.",
                "Pour over dal and simmer.",
            ],
        ),
        // Dinner
        draft("rajma-chawal", "Rajma Chawal", Dinner, 55, false).build(
            vec![
                req("rajma", Pulses),
                req("rice", Grains),
                req("tomato", FreshProduce),
                opt("onion", FreshProduce),
                opt("garlic", FreshProduce),
                opt("ginger", FreshProduce),
                opt("oil", Oils),
                opt("coriander powder", Spices),
                opt("garam masala", Spices),
                opt("turmeric", Spices),
                opt("salt", Spices),
            ],
            &["oil", "coriander powder", "garam masala", "turmeric", "salt"],
            &[
                "Soak and pressure cook rajma.",
                "Make masala with onion, ginger, garlic and tomatoes.",
                "Add spices and rajma; simmer.",
                "Cook rice separately. Serve together.",
            ],
        ),
        draft("khichdi", "Moong Dal Khichdi", Dinner, 30, true).build(
            vec![
                req("rice", Grains),
                req("moong dal", Pulses),
                opt("turmeric", Spices),
                opt("ghee", Dairy),
                opt("salt", Spices),
            ],
            &["turmeric", "ghee", "salt"],
            &[
                "Wash rice and dal.",
                "Pressure cook with turmeric and salt until soft.",
                "Finish with ghee.",
            ],
        ),
        draft("veg-biryani", "Veg Biryani", Dinner, 60, true).build(
            vec![
                req("rice", Grains),
                opt("peas", FreshProduce),
                opt("carrot", FreshProduce),
                opt("capsicum", FreshProduce),
                opt("bay leaf", Spices),
                opt("cloves", Spices),
                opt("cardamom", Spices),
                opt("cinnamon", Spices),
                opt("garam masala", Spices),
                opt("oil", Oils),
                opt("salt", Spices),
            ],
            &["bay leaf", "cloves", "cardamom", "cinnamon", "garam masala", "oil", "salt"],
            &[
                "Parboil rice; cook veggies with spices.",
                "Layer and dum-cook until aromatic.",
            ],
        ),
        draft("paneer-bhurji", "Paneer Bhurji", Dinner, 25, false).build(
            vec![
                req("paneer", Dairy),
                req("tomato", FreshProduce),
                opt("onion", FreshProduce),
                opt("turmeric", Spices),
                opt("red chilli powder", Spices),
                opt("garam masala", Spices),
                opt("oil", Oils),
                opt("salt", Spices),
            ],
            &["turmeric", "red chilli powder", "garam masala", "oil", "salt"],
            &[
                "Crumble paneer and saute with masala.",
                "Cook till soft and well seasoned.",
            ],
        ),
        draft("kadhi-chawal", "Kadhi Chawal", Dinner, 45, true).build(
            vec![
                req("besan", Pulses),
                req("curd", Dairy),
                req("rice", Grains),
                opt("turmeric", Spices),
                opt("curry leaves", Spices),
                opt("mustard seeds", Spices),
                opt("salt", Spices),
                opt("oil", Oils),
            ],
            &["turmeric", "curry leaves", "mustard seeds", "salt", "oil"],
            &[
                "Whisk besan with curd and water.",
                "Simmer; temper with spices, serve with rice.",
            ],
        ),
        draft("palak-paneer", "Palak Paneer", Dinner, 30, false).build(
            vec![
                req("spinach", FreshProduce),
                req("paneer", Dairy),
                opt("tomato", FreshProduce),
                opt("onion", FreshProduce),
                opt("garlic", FreshProduce),
                opt("ginger", FreshProduce),
                opt("ghee", Dairy),
                opt("oil", Oils),
                opt("garam masala", Spices),
                opt("cumin seeds", Spices),
                opt("salt", Spices),
            ],
            &["ghee", "oil", "garam masala", "cumin seeds", "salt"],
            &[
                "Blanch spinach and blend.",
                "Saute onion, garlic, ginger (skip for Jain).",
                "Add tomato and spices.",
                "Add spinach puree and paneer cubes.",
                "Simmer and finish with kasuri methi if available.",
            ],
        ),
    ]
}
