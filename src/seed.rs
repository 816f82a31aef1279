//! Startup data for the fridge and the cookbook.
//!
//! Either the built-in set or a YAML/JSON seed file. File records go through
//! the same validating constructors as user input.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::{
    Ingredient, ItemName, Recipe, RecipeIngredient, RecipeName, Unit, ValidationError, parse_date,
};

/// Validated items and recipes ready to be loaded.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub items: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
    #[serde(default)]
    recipes: Vec<RecipeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    name: ItemName,
    quantity: f64,
    unit: Unit,
    price_per_unit: f64,
    /// `dd-MM-yyyy`
    best_before: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeRecord {
    name: RecipeName,
    description: String,
    instructions: String,
    ingredients: Vec<RequirementRecord>,
    servings: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementRecord {
    name: ItemName,
    quantity: f64,
    unit: Unit,
}

impl SeedFile {
    fn into_seed(self) -> Result<SeedData, ValidationError> {
        let items = self
            .items
            .into_iter()
            .map(|r| {
                Ingredient::new(
                    r.name,
                    r.quantity,
                    r.unit,
                    r.price_per_unit,
                    parse_date(&r.best_before)?,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let recipes = self
            .recipes
            .into_iter()
            .map(|r| {
                let ingredients = r
                    .ingredients
                    .into_iter()
                    .map(|i| RecipeIngredient::new(i.name, i.quantity, i.unit))
                    .collect::<Result<Vec<_>, _>>()?;
                Recipe::new(r.name, r.description, r.instructions, ingredients, r.servings)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeedData { items, recipes })
    }
}

/// Reads a seed file. The format follows the extension (`.yaml`, `.yml`, `.json`).
pub fn load_seed_file(path: &Path) -> Result<SeedData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed: SeedFile = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML seed file {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON seed file {:?}", path))?,
        other => anyhow::bail!("unsupported seed file extension: {other}"),
    };

    let seed = parsed
        .into_seed()
        .with_context(|| format!("invalid entry in seed file {:?}", path))?;
    tracing::debug!(
        path = %path.display(),
        items = seed.items.len(),
        recipes = seed.recipes.len(),
        "seed file loaded"
    );
    Ok(seed)
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ValidationError::InvalidDate {
        input: format!("{day:02}-{month:02}-{year}"),
    })
}

/// The fridge contents and recipes the application starts with by default.
pub fn builtin() -> Result<SeedData, ValidationError> {
    let christmas_eve = ymd(2024, 12, 24)?;
    let items = vec![
        Ingredient::new("Egg", 12.0, "pcs", 2.0, christmas_eve)?,
        Ingredient::new("Milk", 3.0, "dL", 10.0, christmas_eve)?,
        Ingredient::new("Butter", 250.0, "grams", 0.1, ymd(2024, 12, 15)?)?,
        Ingredient::new("Flour", 1000.0, "grams", 0.03, christmas_eve)?,
        Ingredient::new("Apple", 5.0, "pcs", 7.0, ymd(2024, 12, 12)?)?,
        Ingredient::new("Baking soda", 250.0, "grams", 0.1, christmas_eve)?,
        Ingredient::new("Sugar", 1000.0, "grams", 0.02, christmas_eve)?,
        Ingredient::new("Salt", 1000.0, "grams", 0.02, christmas_eve)?,
        Ingredient::new("Pepper", 50.0, "grams", 0.6, christmas_eve)?,
    ];

    let need = RecipeIngredient::new;
    let recipes = vec![
        Recipe::new(
            "Pannekake",
            "Classic norwegian pancakes, thin and delicious",
            "Mix all ingredients, pour batter in a pan and cook until golden",
            vec![
                need("Egg", 2.0, "pcs")?,
                need("Milk", 0.25, "L")?,
                need("Butter", 50.0, "grams")?,
                need("Flour", 150.0, "grams")?,
                need("Baking soda", 6.0, "grams")?,
                need("Sugar", 9.0, "grams")?,
            ],
            4,
        )?,
        Recipe::new(
            "Scrambled eggs",
            "Classic scrambled eggs with milk, butter and chives",
            "Melt butter in a pan, whisk egg and milk together, stir until just set",
            vec![
                need("Egg", 3.0, "pcs")?,
                need("Milk", 0.15, "dL")?,
                need("Butter", 30.0, "grams")?,
                need("Salt", 0.4, "grams")?,
                need("Pepper", 0.4, "grams")?,
                need("Chives", 0.5, "pcs")?,
            ],
            2,
        )?,
        Recipe::new(
            "Pasta with salmon",
            "Creamy pasta with salmon and green peas",
            "Cook pasta until al dente, fry salmon on both sides, heat up creme fraiche with peas and serve",
            vec![
                need("Pasta", 400.0, "grams")?,
                need("Salmon", 400.0, "grams")?,
                need("Peas", 200.0, "grams")?,
                need("Creme fraiche", 3.0, "dL")?,
                need("Butter", 30.0, "grams")?,
                need("Salt", 0.4, "grams")?,
                need("Pepper", 0.4, "grams")?,
            ],
            2,
        )?,
        Recipe::new(
            "Apple crumble",
            "Simple and delicious dessert with apples",
            "Mix sliced apples with sugar, top with a crumble of flour, butter, and sugar. Bake until golden",
            vec![
                need("Apple", 4.0, "pcs")?,
                need("Sugar", 100.0, "grams")?,
                need("Flour", 100.0, "grams")?,
                need("Butter", 100.0, "grams")?,
            ],
            4,
        )?,
    ];

    Ok(SeedData { items, recipes })
}
