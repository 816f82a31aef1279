//! Fridge stock: the [`FoodStorage`] aggregate.
//!
//! Stock lines are kept in a plain `Vec`. Nothing here is ordered on insert;
//! every query sorts its own result by best-before date, and
//! [`FoodStorage::remove_item`] re-sorts the stock itself so the earliest
//! expiring line is drained first.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::domain::{Ingredient, ItemName, Unit, format_date, positive_quantity};
use crate::error::{FridgeError, FridgeResult};

/// Quantities closer than this are treated as equal when draining stock.
pub const QUANTITY_EPSILON: f64 = 1e-9;

/// The fridge: owns every stock line.
#[derive(Debug, Clone, Default)]
pub struct FoodStorage {
    items: Vec<Ingredient>,
}

impl FoodStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a storage by adding each item in turn, merging duplicates.
    pub fn with_items<I>(items: I) -> FridgeResult<Self>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let mut storage = Self::new();
        for item in items {
            storage.add_item(item)?;
        }
        Ok(storage)
    }

    /// Owned copy of every stock line, in storage order.
    pub fn items(&self) -> Vec<Ingredient> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a stock line, merging it into an existing line with the same
    /// name (ignoring case), best-before date and price.
    ///
    /// # Errors
    /// Returns [`FridgeError::InvalidItem`] if the item's quantity is not
    /// strictly positive.
    pub fn add_item(&mut self, item: Ingredient) -> FridgeResult<String> {
        if item.quantity() <= 0.0 {
            return Err(FridgeError::InvalidItem);
        }

        let message = format!(
            "{:.2} {} of {} has been added to the fridge!",
            item.quantity(),
            item.unit(),
            item.name()
        );

        match self.items.iter_mut().find(|line| line.same_stock_line(&item)) {
            Some(line) => {
                line.set_quantity(line.quantity() + item.quantity())?;
                tracing::info!(
                    item = %item.name(),
                    added = item.quantity(),
                    total = line.quantity(),
                    "merged into existing stock line"
                );
            }
            None => {
                tracing::info!(
                    item = %item.name(),
                    quantity = item.quantity(),
                    best_before = %item.best_before(),
                    "new stock line"
                );
                self.items.push(item);
            }
        }

        Ok(message)
    }

    /// Removes `quantity` of the named item, earliest best-before first.
    ///
    /// Insufficient stock is not an error: whatever is available is removed and
    /// the shortfall is reported in [`RemovalReport::missing`].
    ///
    /// # Errors
    /// Returns a validation error if `quantity` is not strictly positive.
    pub fn remove_item(&mut self, name: &str, quantity: f64) -> FridgeResult<RemovalReport> {
        let requested = positive_quantity("Quantity", quantity)?;
        let mut remaining = requested;
        let mut removals = Vec::new();

        self.items.sort_by_key(Ingredient::best_before);

        for line in self.items.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            if !line.name().matches(name) {
                continue;
            }
            let left = line.quantity() - remaining;
            let amount = if left > QUANTITY_EPSILON {
                line.set_quantity(left)?;
                remaining
            } else {
                // Drained, including lines left with only rounding noise
                let all = line.quantity();
                line.set_quantity(0.0)?;
                all
            };
            remaining -= amount;
            if remaining < QUANTITY_EPSILON {
                remaining = 0.0;
            }
            removals.push(RemovedLine {
                name: line.name().clone(),
                unit: line.unit().clone(),
                best_before: line.best_before(),
                amount,
                left_on_line: line.quantity(),
            });
        }

        let before = self.items.len();
        self.items.retain(|line| line.quantity() > 0.0);

        let report = RemovalReport {
            name: name.to_string(),
            requested,
            removals,
            missing: remaining.max(0.0),
        };

        tracing::info!(
            item = name,
            requested,
            removed = report.removed_total(),
            missing = report.missing,
            lines_emptied = before - self.items.len(),
            "stock removed"
        );

        Ok(report)
    }

    /// Every line with the given name (ignoring case), earliest first.
    pub fn search_item(&self, name: &str) -> Vec<Ingredient> {
        self.sorted_by_date(|line| line.name().matches(name))
    }

    /// Lines whose best-before date is on or before `date`, earliest first.
    pub fn items_before_date(&self, date: NaiveDate) -> Vec<Ingredient> {
        self.sorted_by_date(|line| line.best_before() <= date)
    }

    /// Lines that expired before today's local date.
    pub fn expired_items(&self) -> Vec<Ingredient> {
        self.expired_items_at(Local::now().date_naive())
    }

    /// Lines whose best-before date lies strictly before `today`, earliest first.
    pub fn expired_items_at(&self, today: NaiveDate) -> Vec<Ingredient> {
        self.sorted_by_date(|line| line.is_expired_at(today))
    }

    /// Sum of quantity times price over all lines.
    pub fn total_value(&self) -> f64 {
        Self::value_of(&self.items)
    }

    pub fn value_of(items: &[Ingredient]) -> f64 {
        items.iter().map(Ingredient::value).sum()
    }

    /// Every line ordered by lowercase name, then best-before date.
    pub fn items_sorted(&self) -> Vec<Ingredient> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            a.name()
                .sort_key()
                .cmp(&b.name().sort_key())
                .then(a.best_before().cmp(&b.best_before()))
        });
        items
    }

    fn sorted_by_date(&self, keep: impl Fn(&Ingredient) -> bool) -> Vec<Ingredient> {
        let mut found: Vec<Ingredient> = self.items.iter().filter(|l| keep(*l)).cloned().collect();
        found.sort_by_key(Ingredient::best_before);
        found
    }
}

/// One partial removal from a single stock line.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedLine {
    pub name: ItemName,
    pub unit: Unit,
    pub best_before: NaiveDate,
    pub amount: f64,
    pub left_on_line: f64,
}

impl fmt::Display for RemovedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} of {} with best before {} is removed. Remaining in stock: {:.2}",
            self.amount,
            self.unit,
            self.name,
            format_date(self.best_before),
            self.left_on_line
        )
    }
}

/// Outcome of [`FoodStorage::remove_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalReport {
    name: String,
    requested: f64,
    removals: Vec<RemovedLine>,
    missing: f64,
}

impl RemovalReport {
    pub fn requested(&self) -> f64 {
        self.requested
    }

    pub fn removals(&self) -> &[RemovedLine] {
        &self.removals
    }

    /// Amount that could not be removed because stock ran out.
    pub fn missing(&self) -> f64 {
        self.missing
    }

    pub fn removed_total(&self) -> f64 {
        self.removals.iter().map(|r| r.amount).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.missing <= 0.0
    }
}

impl fmt::Display for RemovalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self.removals.iter().map(ToString::to_string).collect();
        if !self.is_complete() {
            lines.push(format!(
                "Not enough {} in stock to remove {:.2}. Missing {:.2}.",
                self.name, self.requested, self.missing
            ));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, qty: f64, unit: &str, price: f64, best_before: NaiveDate) -> Ingredient {
        Ingredient::new(name, qty, unit, price, best_before).unwrap()
    }

    fn fridge() -> FoodStorage {
        FoodStorage::with_items([
            item("Egg", 12.0, "pcs", 2.0, date(2024, 12, 24)),
            item("Milk", 3.0, "dL", 10.0, date(2024, 12, 20)),
            item("Butter", 250.0, "grams", 0.1, date(2024, 12, 10)),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_item_message() {
        let mut storage = FoodStorage::new();
        let message = storage
            .add_item(item("Apple", 5.0, "pcs", 5.0, date(2024, 12, 24)))
            .unwrap();
        assert_eq!(message, "5.00 pcs of Apple has been added to the fridge!");
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_add_item_merges_same_stock_line() {
        let mut storage = fridge();
        storage
            .add_item(item("egg", 5.0, "pcs", 2.0, date(2024, 12, 24)))
            .unwrap();
        let eggs = storage.search_item("Egg");
        assert_eq!(eggs.len(), 1);
        assert_eq!(eggs[0].quantity(), 17.0);
        assert_eq!(storage.len(), 3);
    }

    #[test]
    fn test_add_item_keeps_different_price_separate() {
        let mut storage = fridge();
        storage
            .add_item(item("Egg", 5.0, "pcs", 2.5, date(2024, 12, 24)))
            .unwrap();
        assert_eq!(storage.search_item("egg").len(), 2);
    }

    #[test]
    fn test_add_item_rejects_drained_item() {
        let mut storage = FoodStorage::new();
        let mut drained = item("Egg", 1.0, "pcs", 2.0, date(2024, 12, 24));
        drained.set_quantity(0.0).unwrap();
        assert_eq!(storage.add_item(drained), Err(FridgeError::InvalidItem));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_item_partial_line() {
        let mut storage = fridge();
        let report = storage.remove_item("Egg", 6.0).unwrap();
        assert!(report.is_complete());
        assert_eq!(storage.search_item("Egg")[0].quantity(), 6.0);
        assert_eq!(
            report.to_string(),
            "6.00 pcs of Egg with best before 24-12-2024 is removed. Remaining in stock: 6.00"
        );
    }

    #[test]
    fn test_remove_item_earliest_expiry_first() {
        let mut storage = FoodStorage::with_items([
            item("Egg", 10.0, "pcs", 2.0, date(2024, 12, 24)),
            item("Egg", 5.0, "pcs", 2.0, date(2024, 12, 10)),
        ])
        .unwrap();

        let report = storage.remove_item("egg", 6.0).unwrap();

        let eggs = storage.search_item("Egg");
        assert_eq!(eggs.len(), 1);
        assert_eq!(eggs[0].best_before(), date(2024, 12, 24));
        assert_eq!(eggs[0].quantity(), 9.0);
        assert_eq!(report.removals().len(), 2);
        assert_eq!(report.removals()[0].amount, 5.0);
        assert_eq!(report.removals()[0].left_on_line, 0.0);
        assert_eq!(report.removals()[1].amount, 1.0);
    }

    #[test]
    fn test_remove_item_reports_missing_amount() {
        let mut storage = fridge();
        let report = storage.remove_item("Egg", 20.0).unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.missing(), 8.0);
        assert_eq!(report.removed_total(), 12.0);
        assert!(storage.search_item("Egg").is_empty());
        assert!(report
            .to_string()
            .ends_with("Not enough Egg in stock to remove 20.00. Missing 8.00."));
    }

    #[test]
    fn test_remove_unknown_item_leaves_stock_untouched() {
        let mut storage = fridge();
        let value = storage.total_value();
        let report = storage.remove_item("Cheese", 2.0).unwrap();
        assert!(report.removals().is_empty());
        assert_eq!(report.missing(), 2.0);
        assert_eq!(
            report.to_string(),
            "Not enough Cheese in stock to remove 2.00. Missing 2.00."
        );
        assert_eq!(storage.total_value(), value);
    }

    #[test]
    fn test_remove_decimal_amount_spanning_lines_deletes_drained_lines() {
        let mut storage = FoodStorage::new();
        for (quantity, day) in [(0.1, 1), (0.2, 2), (5.0, 3)] {
            storage
                .add_item(item("Milk", quantity, "L", 10.0, date(2024, 12, day)))
                .unwrap();
        }

        let report = storage.remove_item("Milk", 0.3).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.missing(), 0.0);
        assert_eq!(report.removals().len(), 2);
        assert!(report.removals().iter().all(|r| r.left_on_line == 0.0));
        let left = storage.items();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].best_before(), date(2024, 12, 3));
        assert_eq!(left[0].quantity(), 5.0);
    }

    #[test]
    fn test_remove_item_rejects_non_positive_quantity() {
        let mut storage = fridge();
        assert_eq!(
            storage.remove_item("Egg", 0.0),
            Err(FridgeError::Validation(ValidationError::NotPositive("Quantity")))
        );
        assert!(storage.remove_item("Egg", -2.0).is_err());
        assert_eq!(storage.search_item("Egg")[0].quantity(), 12.0);
    }

    #[test]
    fn test_items_before_date_is_inclusive() {
        let storage = fridge();
        let found = storage.items_before_date(date(2024, 12, 11));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name().as_str(), "Butter");

        let found = storage.items_before_date(date(2024, 12, 20));
        let names: Vec<&str> = found.iter().map(|i| i.name().as_str()).collect();
        assert_eq!(names, vec!["Butter", "Milk"]);
    }

    #[test]
    fn test_expired_items_at() {
        let storage = fridge();
        let expired = storage.expired_items_at(date(2024, 12, 20));
        let names: Vec<&str> = expired.iter().map(|i| i.name().as_str()).collect();
        assert_eq!(names, vec!["Butter"]);
        assert!(storage.expired_items_at(date(2024, 12, 1)).is_empty());
    }

    #[test]
    fn test_expired_items_uses_local_clock() {
        let mut storage = FoodStorage::new();
        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let tomorrow = Local::now().date_naive().succ_opt().unwrap();
        storage
            .add_item(item("Cheese", 150.0, "grams", 0.2, yesterday))
            .unwrap();
        storage
            .add_item(item("Ham", 100.0, "grams", 0.3, tomorrow))
            .unwrap();
        let expired = storage.expired_items();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name().as_str(), "Cheese");
    }

    #[test]
    fn test_total_value() {
        assert_eq!(FoodStorage::new().total_value(), 0.0);
        let expected = 12.0 * 2.0 + 3.0 * 10.0 + 250.0 * 0.1;
        assert!((fridge().total_value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_items_returns_independent_copy() {
        let storage = fridge();
        let mut copy = storage.items();
        copy[0].set_quantity(0.0).unwrap();
        copy.clear();
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.search_item("Egg")[0].quantity(), 12.0);
    }

    #[test]
    fn test_items_sorted_by_name_then_date() {
        let mut storage = fridge();
        storage
            .add_item(item("egg", 2.0, "pcs", 2.0, date(2024, 12, 1)))
            .unwrap();
        let sorted = storage.items_sorted();
        let keys: Vec<(String, NaiveDate)> = sorted
            .iter()
            .map(|i| (i.name().sort_key(), i.best_before()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("butter".to_string(), date(2024, 12, 10)),
                ("egg".to_string(), date(2024, 12, 1)),
                ("egg".to_string(), date(2024, 12, 24)),
                ("milk".to_string(), date(2024, 12, 20)),
            ]
        );
    }
}
