//! Recipe collection: the [`CookBook`] aggregate and recipe matching.
//!
//! Matching a recipe against the fridge looks at the *first* stock line whose
//! name matches each requirement. Stock of the same item split across several
//! best-before dates is not added up.

use std::fmt;

use crate::domain::{Ingredient, ItemName, Recipe, RecipeName, Unit};
use crate::error::{FridgeError, FridgeResult};
use crate::storage::FoodStorage;

#[derive(Debug, Clone, Default)]
pub struct CookBook {
    recipes: Vec<Recipe>,
}

impl CookBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cookbook from a list of recipes, rejecting duplicate names.
    pub fn with_recipes<I>(recipes: I) -> FridgeResult<Self>
    where
        I: IntoIterator<Item = Recipe>,
    {
        let mut cookbook = Self::new();
        for recipe in recipes {
            cookbook.add_recipe(recipe)?;
        }
        Ok(cookbook)
    }

    /// Owned copy of every recipe, in insertion order.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    /// Every recipe ordered by lowercase name.
    pub fn recipes_sorted(&self) -> Vec<Recipe> {
        let mut recipes = self.recipes.clone();
        recipes.sort_by_key(|r| r.name().as_str().to_lowercase());
        recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// # Errors
    /// Returns [`FridgeError::DuplicateRecipe`] if a recipe with the same name,
    /// ignoring case, is already in the cookbook.
    pub fn add_recipe(&mut self, recipe: Recipe) -> FridgeResult<String> {
        if self.find_recipe(recipe.name().as_str()).is_some() {
            tracing::warn!(recipe = %recipe.name(), "duplicate recipe rejected");
            return Err(FridgeError::duplicate_recipe(recipe.name().as_str()));
        }
        let message = format!("The recipe '{}' is added to the cookbook.", recipe.name());
        tracing::info!(
            recipe = %recipe.name(),
            ingredients = recipe.ingredients().len(),
            "recipe added"
        );
        self.recipes.push(recipe);
        Ok(message)
    }

    /// # Errors
    /// Returns [`FridgeError::RecipeNotFound`] if no recipe has that name.
    pub fn remove_recipe(&mut self, name: &str) -> FridgeResult<String> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.name().matches(name))
            .ok_or_else(|| FridgeError::recipe_not_found(name))?;
        let removed = self.recipes.remove(index);
        tracing::info!(recipe = %removed.name(), "recipe removed");
        Ok(format!("The recipe '{}' is removed from the cookbook.", name))
    }

    /// Case-insensitive lookup.
    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name().matches(name))
    }

    /// Full description of a recipe, one ingredient per line.
    ///
    /// # Errors
    /// Returns [`FridgeError::RecipeNotFound`] if no recipe has that name.
    pub fn expand_recipe(&self, name: &str) -> FridgeResult<String> {
        let recipe = self.lookup(name)?;
        let mut lines = vec![
            format!("Recipe name: {}", recipe.name()),
            format!("Recipe description: {}", recipe.description()),
            format!("Recipe instructions: {}", recipe.instructions()),
            "Ingredients:".to_string(),
        ];
        lines.extend(recipe.ingredients().iter().map(|ingredient| {
            format!(
                "- {}: {:.2} {}",
                ingredient.name(),
                ingredient.quantity(),
                ingredient.unit()
            )
        }));
        lines.push(format!("Servings: {}", recipe.servings()));
        Ok(lines.join("\n"))
    }

    /// Checks a recipe against the fridge and lists what is missing.
    ///
    /// # Errors
    /// Returns [`FridgeError::RecipeNotFound`] if no recipe has that name.
    pub fn can_make_recipe(&self, name: &str, storage: &FoodStorage) -> FridgeResult<Feasibility> {
        let recipe = self.lookup(name)?;
        let shortfalls = shortfalls(recipe, &storage.items());
        tracing::debug!(
            recipe = %recipe.name(),
            feasible = shortfalls.is_empty(),
            missing = shortfalls.len(),
            "recipe checked against fridge"
        );
        Ok(Feasibility {
            recipe: recipe.name().clone(),
            shortfalls,
        })
    }

    /// Names of every recipe that can be made from the fridge, in cookbook order.
    pub fn suggest_recipes(&self, storage: &FoodStorage) -> Vec<String> {
        let stock = storage.items();
        self.recipes
            .iter()
            .filter(|recipe| shortfalls(recipe, &stock).is_empty())
            .map(|recipe| recipe.name().to_string())
            .collect()
    }

    fn lookup(&self, name: &str) -> FridgeResult<&Recipe> {
        self.find_recipe(name)
            .ok_or_else(|| FridgeError::recipe_not_found(name))
    }
}

fn shortfalls(recipe: &Recipe, stock: &[Ingredient]) -> Vec<Shortfall> {
    recipe
        .ingredients()
        .iter()
        .filter_map(|required| {
            let available = stock
                .iter()
                .find(|line| line.name().matches(required.name().as_str()))
                .map(Ingredient::quantity);
            match available {
                Some(quantity) if quantity >= required.quantity() => None,
                _ => Some(Shortfall {
                    name: required.name().clone(),
                    unit: required.unit().clone(),
                    required: required.quantity(),
                    available: available.unwrap_or(0.0),
                }),
            }
        })
        .collect()
}

/// A requirement the fridge cannot cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    pub name: ItemName,
    pub unit: Unit,
    pub required: f64,
    /// Quantity on the first matching stock line, 0 when there is none.
    pub available: f64,
}

impl Shortfall {
    pub fn missing(&self) -> f64 {
        self.required - self.available
    }
}

/// Outcome of [`CookBook::can_make_recipe`].
#[derive(Debug, Clone, PartialEq)]
pub struct Feasibility {
    recipe: RecipeName,
    shortfalls: Vec<Shortfall>,
}

impl Feasibility {
    pub fn recipe(&self) -> &RecipeName {
        &self.recipe
    }

    pub fn is_feasible(&self) -> bool {
        self.shortfalls.is_empty()
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        &self.shortfalls
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_feasible() {
            return write!(f, "You can make '{}' with the items in the fridge.", self.recipe);
        }
        write!(f, "You cannot make '{}'. Missing ingredients:", self.recipe)?;
        for shortfall in &self.shortfalls {
            write!(
                f,
                "\n- {}: {:.2} {}",
                shortfall.name,
                shortfall.missing(),
                shortfall.unit
            )?;
        }
        Ok(())
    }
}
