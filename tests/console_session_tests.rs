//! Scripted end-to-end sessions against the console

use chrono::NaiveDate;
use fridge_manager::cli::{FAREWELL, FOOD_WASTE_HINT};
use fridge_manager::{AppConfig, AppState, Console, seed};
use std::io::Cursor;

fn config() -> AppConfig {
    AppConfig {
        today: NaiveDate::from_ymd_opt(2024, 12, 20),
        ..AppConfig::default()
    }
}

fn session(script: &str, state: AppState, config: &AppConfig) -> (AppState, String) {
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        state,
        config,
    );
    console.run().unwrap();
    let (state, out) = console.into_parts();
    (state, String::from_utf8(out).unwrap())
}

fn seeded() -> AppState {
    AppState::from_seed(seed::builtin().unwrap()).unwrap()
}

#[test]
fn test_show_items_table_is_sorted() {
    let (_, out) = session("1\n14\n", seeded(), &config());

    assert!(out.contains("Items in the fridge:"));
    assert!(out.contains("Name         | Quantity  Unit   | Price per unit | Best before date"));
    let apple = out.find("Apple        |").unwrap();
    let salt = out.find("Salt         |").unwrap();
    assert!(apple < salt);
    assert!(out.contains("Egg          |   12.00   pcs    |   2.00  kr     | 24-12-2024"));
}

#[test]
fn test_expired_view_with_fixed_today() {
    let (_, out) = session("6\n14\n", seeded(), &config());

    // Apple (12-12-2024) and Butter (15-12-2024) are past 20-12-2024
    assert!(out.contains("Expired items:"));
    let apple = out.find("Apple ").unwrap();
    let butter = out.find("Butter ").unwrap();
    assert!(apple < butter);
    assert!(!out.contains("Egg          |"));
    assert!(out.contains("Total value of expired items: 60.00 kr"));
    assert!(out.contains(FOOD_WASTE_HINT));
}

#[test]
fn test_remove_item_reports_each_line() {
    let (state, out) = session("3\negg\n20\n14\n", seeded(), &config());

    assert!(out.contains(
        "12.00 pcs of Egg with best before 24-12-2024 is removed. Remaining in stock: 0.00"
    ));
    assert!(out.contains("Not enough egg in stock to remove 20.00. Missing 8.00."));
    assert!(state.storage.search_item("Egg").is_empty());
}

#[test]
fn test_invalid_prompt_answers_are_reasked() {
    let script = "2\n42\nCheese\nlots\n-1\n150\ngrams\n0.2\n2025-01-01\n01-01-2025\n14\n";
    let (state, out) = session(script, AppState::new(), &config());

    assert!(out.contains("Invalid input, please try again."));
    assert!(out.contains("Invalid input, please enter a number."));
    assert!(out.contains("Invalid date format, please use dd-MM-yyyy."));
    assert!(out.contains("150.00 grams of Cheese has been added to the fridge!"));
    assert_eq!(state.storage.len(), 1);
}

#[test]
fn test_add_recipe_then_check_and_suggest() {
    let script = "10\nOmelette\nFluffy eggs, quick.\nWhisk and fry.\n1\n\
                  Egg\n3\npcs\nyes\nMilk\n0.5\ndL\nno\n\
                  12\nomelette\n13\n9\nOmelette\n14\n";
    let (state, out) = session(script, seeded(), &config());

    assert!(out.contains("The recipe 'Omelette' is added to the cookbook."));
    assert!(out.contains("You can make 'Omelette' with the items in the fridge."));
    assert!(out.contains("- Omelette"));
    assert!(out.contains("Recipe description: Fluffy eggs, quick."));
    assert!(out.contains("- Milk: 0.50 dL"));
    assert!(out.contains("Enjoy! :)"));
    assert_eq!(state.cookbook.len(), 5);
}

#[test]
fn test_add_recipe_with_zero_servings_is_rejected() {
    let script = "10\nToast\nCrispy\nToast it\n0\nBread\n1\npcs\nno\n14\n";
    let (state, out) = session(script, AppState::new(), &config());

    assert!(out.contains("Servings must be greater than zero"));
    assert!(state.cookbook.is_empty());
}

#[test]
fn test_duplicate_recipe_and_remove() {
    let script = "10\npannekake\nAgain\nSame\n2\nEgg\n1\npcs\nno\n11\nPannekake\n11\nPannekake\n14\n";
    let (state, out) = session(script, seeded(), &config());

    assert!(out.contains(
        "A recipe with the name 'pannekake' already exists in the cookbook. Try with a different name."
    ));
    assert!(out.contains("The recipe 'Pannekake' is removed from the cookbook."));
    assert!(out.contains("The recipe 'Pannekake' does not exist in the cookbook."));
    assert_eq!(state.cookbook.len(), 3);
}

#[test]
fn test_recipes_listed_by_name() {
    let (_, out) = session("8\n14\n", seeded(), &config());

    assert!(out.contains("Recipes in the cookbook:"));
    let crumble = out.find("Apple crumble").unwrap();
    let pannekake = out.find("Pannekake").unwrap();
    let scrambled = out.find("Scrambled eggs").unwrap();
    assert!(crumble < pannekake && pannekake < scrambled);
}

#[test]
fn test_items_by_date_and_search() {
    let (_, out) = session("5\n15-12-2024\n4\nbutter\n4\nCheese\n14\n", seeded(), &config());

    assert!(out.contains("Items with a best before date on or before 15-12-2024:"));
    assert!(out.contains("Items found with the name: butter"));
    assert!(out.contains("No matching item with the name: Cheese"));
}

#[test]
fn test_currency_label_from_config() {
    let config = AppConfig {
        currency: "NOK".to_string(),
        ..config()
    };
    let (_, out) = session("7\n14\n", seeded(), &config);
    assert!(out.contains("Total value of items: "));
    assert!(out.contains(" NOK"));
    assert!(out.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_input_ending_mid_command_exits_cleanly() {
    let (state, out) = session("2\nMilk\n", AppState::new(), &config());
    assert!(out.contains(FAREWELL));
    assert!(state.storage.is_empty());
}

#[test]
fn test_console_refuses_negative_price_before_it_reaches_storage() {
    let script = "2\nCoupon\n1\npcs\n-5\n0.5\n01-01-2025\n14\n";
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        AppState::new(),
        &config(),
    );
    console.run().unwrap();

    let coupons = console.state().storage.search_item("Coupon");
    assert_eq!(coupons.len(), 1);
    assert_eq!(coupons[0].price_per_unit(), 0.5);

    let (_, out) = console.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid input, the value cannot be negative. Please try again."));
}
