use crate::cookbook::CookBook;
use crate::error::FridgeResult;
use crate::seed::SeedData;
use crate::storage::FoodStorage;
use tracing::info;

/// Everything a session mutates: the fridge and the cookbook.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub storage: FoodStorage,
    pub cookbook: CookBook,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads seed items (merging duplicates) and seed recipes.
    ///
    /// # Errors
    /// Fails on an unusable item or a repeated recipe name.
    pub fn from_seed(seed: SeedData) -> FridgeResult<Self> {
        let storage = FoodStorage::with_items(seed.items)?;
        let cookbook = CookBook::with_recipes(seed.recipes)?;
        info!(
            stock_lines = storage.len(),
            recipes = cookbook.len(),
            "state seeded"
        );
        Ok(Self { storage, cookbook })
    }
}
