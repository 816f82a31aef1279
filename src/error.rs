//! Error handling for fridge and cookbook operations
//!
//! Domain operations return [`FridgeError`]. Each variant maps onto an
//! [`ErrorCode`] so the console can classify what went wrong without
//! matching on message text. Insufficient stock is not an error: it is
//! reported through [`RemovalReport`](crate::storage::RemovalReport) and
//! [`Feasibility`](crate::cookbook::Feasibility) instead.

use std::fmt;
use thiserror::Error;

use crate::domain::ValidationError;

/// Result alias for domain operations.
pub type FridgeResult<T> = Result<T, FridgeError>;

// =============================================================================
// ERROR CODES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// A field failed validation
    ValidationError = 1,
    /// An item offered to the fridge is unusable
    InvalidItem = 2,
    /// No recipe with the requested name
    RecipeNotFound = 3,
    /// A recipe with the same name already exists
    DuplicateRecipe = 4,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get the error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError | ErrorCode::InvalidItem => "validation_error",
            ErrorCode::RecipeNotFound => "lookup_error",
            ErrorCode::DuplicateRecipe => "conflict",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

// =============================================================================
// DOMAIN ERROR TYPE
// =============================================================================

/// Errors raised by [`FoodStorage`](crate::storage::FoodStorage) and
/// [`CookBook`](crate::cookbook::CookBook).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid item or quantity")]
    InvalidItem,

    #[error("The recipe '{name}' does not exist in the cookbook.")]
    RecipeNotFound { name: String },

    #[error("A recipe with the name '{name}' already exists in the cookbook. Try with a different name.")]
    DuplicateRecipe { name: String },
}

impl FridgeError {
    pub fn recipe_not_found(name: impl Into<String>) -> Self {
        Self::RecipeNotFound { name: name.into() }
    }

    pub fn duplicate_recipe(name: impl Into<String>) -> Self {
        Self::DuplicateRecipe { name: name.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FridgeError::Validation(_) => ErrorCode::ValidationError,
            FridgeError::InvalidItem => ErrorCode::InvalidItem,
            FridgeError::RecipeNotFound { .. } => ErrorCode::RecipeNotFound,
            FridgeError::DuplicateRecipe { .. } => ErrorCode::DuplicateRecipe,
        }
    }

    /// Name of the recipe the error refers to, if any.
    pub fn recipe_name(&self) -> Option<&str> {
        match self {
            FridgeError::RecipeNotFound { name } | FridgeError::DuplicateRecipe { name } => {
                Some(name)
            }
            _ => None,
        }
    }
}
