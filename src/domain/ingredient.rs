//! Stock line entity held by [`FoodStorage`](crate::storage::FoodStorage).

use chrono::NaiveDate;

use super::value_objects::{
    ItemName, Unit, ValidationError, finite, non_negative, positive_quantity,
};

/// One line of fridge stock: a quantity of a named item bought at a given
/// price with a given best-before date.
///
/// Everything except the quantity is fixed at construction. Two lines are the
/// same stock line when [`Ingredient::same_stock_line`] holds; the quantity is
/// not part of that identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: ItemName,
    quantity: f64,
    unit: Unit,
    price_per_unit: f64,
    best_before: NaiveDate,
}

impl Ingredient {
    /// Creates a validated stock line.
    ///
    /// # Errors
    /// Returns `Err` for a blank name or unit, a quantity that is not strictly
    /// positive, or a price that is not a finite number.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        price_per_unit: f64,
        best_before: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = ItemName::new(name)?;
        let quantity = positive_quantity("Quantity", quantity)?;
        let unit = Unit::new(unit)?;
        let price_per_unit = finite("Price per unit", price_per_unit)?;
        Ok(Self {
            name,
            quantity,
            unit,
            price_per_unit,
            best_before,
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

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    pub fn best_before(&self) -> NaiveDate {
        self.best_before
    }

    /// Overwrites the quantity in place. Zero is allowed so a line can be
    /// drained before the storage sweeps it out.
    ///
    /// # Errors
    /// Returns `Err` if the quantity is negative or not finite.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), ValidationError> {
        self.quantity = non_negative("Quantity", quantity)?;
        Ok(())
    }

    /// Same name (ignoring case), same best-before date and same price.
    pub fn same_stock_line(&self, other: &Ingredient) -> bool {
        self.name.matches(other.name.as_str())
            && self.best_before == other.best_before
            && self.price_per_unit == other.price_per_unit
    }

    /// Quantity times price per unit.
    pub fn value(&self) -> f64 {
        self.quantity * self.price_per_unit
    }

    /// Expired means the best-before date lies strictly before `today`.
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        self.best_before < today
    }
}
