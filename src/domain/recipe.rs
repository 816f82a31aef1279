//! Recipe entity and the ingredient requirements it lists.

use super::value_objects::{
    ItemName, RecipeName, Unit, ValidationError, non_blank, positive_quantity,
};

/// A single requirement of a recipe, e.g. `2 pcs Egg`.
///
/// Unlike a stock line it has no price or best-before date.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    name: ItemName,
    quantity: f64,
    unit: Unit,
}

impl RecipeIngredient {
    /// # Errors
    /// Returns `Err` for a blank name or unit, or a quantity that is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ItemName::new(name)?,
            quantity: positive_quantity("Quantity", quantity)?,
            unit: Unit::new(unit)?,
        })
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

/// A named dish. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: RecipeName,
    description: String,
    instructions: String,
    ingredients: Vec<RecipeIngredient>,
    servings: u32,
}

impl Recipe {
    /// Creates a validated recipe.
    ///
    /// # Errors
    /// Returns `Err` if any text field is blank, the ingredient list is empty
    /// or `servings` is zero.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
        ingredients: Vec<RecipeIngredient>,
        servings: u32,
    ) -> Result<Self, ValidationError> {
        let name = RecipeName::new(name)?;
        let description = non_blank("Recipe description", description)?;
        let instructions = non_blank("Recipe instructions", instructions)?;
        if ingredients.is_empty() {
            return Err(ValidationError::Empty("Recipe ingredients"));
        }
        if servings == 0 {
            return Err(ValidationError::NotPositive("Servings"));
        }
        Ok(Self {
            name,
            description,
            instructions,
            ingredients,
            servings,
        })
    }

    pub fn name(&self) -> &RecipeName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake_ingredients() -> Vec<RecipeIngredient> {
        vec![
            RecipeIngredient::new("Egg", 12.0, "pcs").unwrap(),
            RecipeIngredient::new("Milk", 3.0, "dL").unwrap(),
        ]
    }

    #[test]
    fn test_recipe_accessors() {
        let recipe = Recipe::new("Cake", "Dessert", "Mix and bake", cake_ingredients(), 6).unwrap();
        assert_eq!(recipe.name().as_str(), "Cake");
        assert_eq!(recipe.description(), "Dessert");
        assert_eq!(recipe.instructions(), "Mix and bake");
        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(recipe.ingredients()[1].unit().as_str(), "dL");
        assert_eq!(recipe.servings(), 6);
    }

    #[test]
    fn test_recipe_rejects_invalid_fields() {
        let err = |r: Result<Recipe, ValidationError>| r.unwrap_err().to_string();
        assert_eq!(
            err(Recipe::new(" ", "Dessert", "Mix", cake_ingredients(), 4)),
            "Recipe name cannot be empty"
        );
        assert_eq!(
            err(Recipe::new("Cake", "", "Mix", cake_ingredients(), 4)),
            "Recipe description cannot be empty"
        );
        assert_eq!(
            err(Recipe::new("Cake", "Dessert", "\t", cake_ingredients(), 4)),
            "Recipe instructions cannot be empty"
        );
        assert_eq!(
            err(Recipe::new("Cake", "Dessert", "Mix", Vec::new(), 4)),
            "Recipe ingredients cannot be empty"
        );
        assert_eq!(
            err(Recipe::new("Cake", "Dessert", "Mix", cake_ingredients(), 0)),
            "Servings must be greater than zero"
        );
    }

    #[test]
    fn test_recipe_ingredient_rejects_zero_quantity() {
        assert_eq!(
            RecipeIngredient::new("Salt", 0.0, "grams"),
            Err(ValidationError::NotPositive("Quantity"))
        );
    }
}
