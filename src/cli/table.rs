use crate::domain::{Ingredient, Recipe, format_date};

pub const ITEM_HEADER: &str =
    "Name         | Quantity  Unit   | Price per unit | Best before date   ";
pub const ITEM_RULE: &str =
    "-------------------------------------------------------------------";
pub const RECIPE_HEADER: &str =
    "Name               | Description                                        | Servings";
pub const RECIPE_RULE: &str =
    "-----------------------------------------------------------------------------------";

pub fn item_row(item: &Ingredient, currency: &str) -> String {
    format!(
        "{:<12} | {:>7.2}   {:<6} | {:>6.2}  {:<7}| {}",
        item.name().as_str(),
        item.quantity(),
        item.unit().as_str(),
        item.price_per_unit(),
        currency,
        format_date(item.best_before())
    )
}

/// Header, rule and one row per item, each line newline-terminated.
pub fn items_table(items: &[Ingredient], currency: &str) -> String {
    let mut out = format!("{ITEM_HEADER}\n{ITEM_RULE}\n");
    for item in items {
        out.push_str(&item_row(item, currency));
        out.push('\n');
    }
    out
}

pub fn recipe_row(recipe: &Recipe) -> String {
    format!(
        "{:<18} | {:<50} | {}",
        recipe.name().as_str(),
        recipe.description(),
        recipe.servings()
    )
}

pub fn recipes_table(recipes: &[Recipe]) -> String {
    let mut out = format!("{RECIPE_HEADER}\n{RECIPE_RULE}\n");
    for recipe in recipes {
        out.push_str(&recipe_row(recipe));
        out.push('\n');
    }
    out
}
