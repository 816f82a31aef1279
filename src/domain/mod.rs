//! Fridge and cookbook domain model.
//!
//! ## Architecture
//!
//! ```text
//! +------------------------+     +------------------------+
//! |   src/domain/          |     |   aggregates           |
//! |   (values, entities)   |     |                        |
//! +------------------------+     +------------------------+
//! | - ItemName, Unit       |---->| - storage::FoodStorage |
//! | - Ingredient           |     | - cookbook::CookBook   |
//! | - Recipe               |     |                        |
//! +------------------------+     +------------------------+
//! ```
//!
//! Entities validate every field on construction and never expose `&mut`
//! access to their identity fields. The aggregates own the collections.

pub mod ingredient;
pub mod recipe;
pub mod value_objects;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeIngredient};
pub use value_objects::*;
