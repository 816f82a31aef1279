//! Interactive console: numbered menu, prompts and table output.
//!
//! [`Console`] is generic over its reader and writer so a whole session can be
//! scripted in tests.

pub mod menu;
pub mod prompt;
pub mod table;

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{Ingredient, Recipe, RecipeIngredient, format_date};
use crate::error::FridgeError;
use crate::logging::operation_span;
use crate::state::AppState;
use crate::storage::FoodStorage;

pub use menu::{MenuOption, render_menu};
pub use prompt::{PromptError, PromptResult, Prompter};

pub const FAREWELL: &str =
    "Thank you for using the Fridge and Cookbook Manager. See you next time! :)";
pub const FOOD_WASTE_HINT: &str =
    "Before throwing out, LOOK - SMELL - TASTE! Trust your senses, reduce food waste! :)";

pub struct Console<R, W> {
    prompt: Prompter<R, W>,
    state: AppState,
    currency: String,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, state: AppState, config: &AppConfig) -> Self {
        Self {
            prompt: Prompter::new(input, output),
            state,
            currency: config.currency.clone(),
            today: config.today(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.prompt.into_output())
    }

    /// Shows the menu and runs commands until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.prompt.output(), "{}", render_menu())?;
            let choice = match self.prompt.read_int("Choose an option: ") {
                Ok(choice) => choice,
                Err(PromptError::Eof) => return self.farewell(),
                Err(PromptError::Io(err)) => return Err(err),
            };

            match MenuOption::from_value(choice) {
                Some(MenuOption::Exit) => return self.farewell(),
                Some(option) => match self.dispatch(option) {
                    Ok(()) => {}
                    Err(PromptError::Eof) => return self.farewell(),
                    Err(PromptError::Io(err)) => return Err(err),
                },
                None => writeln!(self.prompt.output(), "Invalid option, please try again")?,
            }
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        let out = self.prompt.output();
        writeln!(out)?;
        writeln!(out, "{FAREWELL}")?;
        out.flush()
    }

    fn dispatch(&mut self, option: MenuOption) -> PromptResult<()> {
        let span = operation_span(option.name());
        let _enter = span.enter();
        debug!("command started");

        match option {
            MenuOption::ShowItems => self.show_items(),
            MenuOption::AddItem => self.add_item(),
            MenuOption::RemoveItem => self.remove_item(),
            MenuOption::SearchItem => self.search_item(),
            MenuOption::ShowItemsByDate => self.show_items_by_date(),
            MenuOption::ShowExpired => self.show_expired(),
            MenuOption::ShowTotalValue => self.show_total_value(),
            MenuOption::ShowAllRecipes => self.show_recipes(),
            MenuOption::ExpandRecipe => self.expand_recipe(),
            MenuOption::AddRecipe => self.add_recipe(),
            MenuOption::RemoveRecipe => self.remove_recipe(),
            MenuOption::CheckRecipe => self.check_recipe(),
            MenuOption::SuggestRecipes => self.suggest_recipes(),
            MenuOption::Exit => Ok(()),
        }
    }

    /// Prints the outcome of a domain call: the message, or the error text.
    fn report(&mut self, result: Result<String, FridgeError>) -> PromptResult<()> {
        let out = self.prompt.output();
        match result {
            Ok(message) => {
                writeln!(out)?;
                writeln!(out, "{message}")?;
            }
            Err(err) => {
                debug!(
                    code = %err.code(),
                    category = err.code().category(),
                    error = %err,
                    "command rejected"
                );
                writeln!(out, "{err}")?;
            }
        }
        Ok(())
    }

    fn print_items(&mut self, items: &[Ingredient]) -> PromptResult<()> {
        let out = self.prompt.output();
        writeln!(out)?;
        write!(out, "{}", table::items_table(items, &self.currency))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Fridge
    // -------------------------------------------------------------------------

    fn show_items(&mut self) -> PromptResult<()> {
        if self.state.storage.is_empty() {
            writeln!(self.prompt.output(), "The fridge is empty")?;
        } else {
            writeln!(self.prompt.output(), "Items in the fridge:")?;
            let items = self.state.storage.items_sorted();
            self.print_items(&items)?;
        }
        writeln!(self.prompt.output())?;
        Ok(())
    }

    fn add_item(&mut self) -> PromptResult<()> {
        let name = self.prompt.read_text("Type in name of the new item: ")?;
        let quantity = self.prompt.read_positive("Type quantity of item: ")?;
        let unit = self
            .prompt
            .read_text("Type unit of measurement (e.g dL, grams or pcs): ")?;
        let price = self.prompt.read_non_negative("Price per unit: ")?;
        let best_before = self
            .prompt
            .read_date("Type in best before date (dd-MM-yyyy): ")?;

        let result = Ingredient::new(name, quantity, unit, price, best_before)
            .map_err(FridgeError::from)
            .and_then(|item| self.state.storage.add_item(item));
        self.report(result)
    }

    fn remove_item(&mut self) -> PromptResult<()> {
        let name = self.prompt.read_text("Type in the item you want to remove: ")?;
        let quantity = self
            .prompt
            .read_positive("Type in the quantity you want to remove: ")?;
        let result = self
            .state
            .storage
            .remove_item(&name, quantity)
            .map(|report| report.to_string());
        self.report(result)
    }

    fn search_item(&mut self) -> PromptResult<()> {
        let name = self.prompt.read_text("Type in item name: ")?;
        let matches = self.state.storage.search_item(&name);
        if matches.is_empty() {
            writeln!(self.prompt.output(), "No matching item with the name: {name}")?;
        } else {
            writeln!(self.prompt.output(), "Items found with the name: {name}")?;
            self.print_items(&matches)?;
        }
        writeln!(self.prompt.output())?;
        Ok(())
    }

    fn show_items_by_date(&mut self) -> PromptResult<()> {
        let date = self.prompt.read_date("Enter a date (dd-MM-yyyy): ")?;
        let items = self.state.storage.items_before_date(date);
        let shown = format_date(date);
        if items.is_empty() {
            writeln!(
                self.prompt.output(),
                "No items with a best before date on or before {shown}"
            )?;
        } else {
            writeln!(
                self.prompt.output(),
                "Items with a best before date on or before {shown}:"
            )?;
            self.print_items(&items)?;
        }
        writeln!(self.prompt.output())?;
        Ok(())
    }

    fn show_expired(&mut self) -> PromptResult<()> {
        let expired = self.state.storage.expired_items_at(self.today);
        writeln!(self.prompt.output())?;
        if expired.is_empty() {
            writeln!(self.prompt.output(), "No items have expired!")?;
        } else {
            writeln!(self.prompt.output(), "Expired items:")?;
            self.print_items(&expired)?;
            let value = FoodStorage::value_of(&expired);
            let out = self.prompt.output();
            writeln!(
                out,
                "Total value of expired items: {value:.2} {}",
                self.currency
            )?;
            writeln!(out, "{FOOD_WASTE_HINT}")?;
        }
        writeln!(self.prompt.output())?;
        Ok(())
    }

    fn show_total_value(&mut self) -> PromptResult<()> {
        let total = self.state.storage.total_value();
        let out = self.prompt.output();
        writeln!(out)?;
        writeln!(out, "Total value of items: {total:.2} {}", self.currency)?;
        writeln!(out)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Cookbook
    // -------------------------------------------------------------------------

    fn show_recipes(&mut self) -> PromptResult<()> {
        let out = self.prompt.output();
        if self.state.cookbook.is_empty() {
            writeln!(out, "There's no recipes in the cookbook.")?;
        } else {
            writeln!(out, "Recipes in the cookbook:")?;
            writeln!(out)?;
            let recipes = self.state.cookbook.recipes_sorted();
            write!(out, "{}", table::recipes_table(&recipes))?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn expand_recipe(&mut self) -> PromptResult<()> {
        let name = self.prompt.read_text("Type in recipe name: ")?;
        match self.state.cookbook.expand_recipe(&name) {
            Ok(text) => {
                let out = self.prompt.output();
                writeln!(out)?;
                writeln!(out, "{text}")?;
                writeln!(out, "Enjoy! :)")?;
                writeln!(out)?;
                Ok(())
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn add_recipe(&mut self) -> PromptResult<()> {
        let out = self.prompt.output();
        writeln!(out)?;
        writeln!(out, "Step 1. Writing the recipe")?;
        writeln!(out, "----------------------------")?;
        let name = self.prompt.read_text("Type in name of the new recipe: ")?;
        let description = self
            .prompt
            .read_sentence("Type in a short description of the recipe: ")?;
        let instructions = self
            .prompt
            .read_sentence("Type in instructions for recipe: ")?;
        let servings = self.prompt.read_int("Type in the number of servings: ")?;

        let out = self.prompt.output();
        writeln!(
            out,
            "Step 2. Adding ingredients with its quantity and unit for the recipe:"
        )?;
        writeln!(
            out,
            "----------------------------------------------------------------------"
        )?;

        let mut ingredients = Vec::new();
        let mut problems = Vec::new();
        loop {
            let ingredient = self.prompt.read_text("Type in an ingredient: ")?;
            let quantity = self.prompt.read_positive("Type in quantity: ")?;
            let unit = self
                .prompt
                .read_text("Type in unit (e.g dL, grams or pcs): ")?;
            match RecipeIngredient::new(ingredient, quantity, unit) {
                Ok(requirement) => ingredients.push(requirement),
                Err(err) => problems.push(err),
            }
            let more = self
                .prompt
                .read_text("Do you want to add another ingredient? (yes/no): ")?;
            if !more.eq_ignore_ascii_case("yes") {
                break;
            }
        }

        // Negative counts fail the servings check instead of wrapping.
        let servings = u32::try_from(servings).unwrap_or(0);
        let result = match problems.into_iter().next() {
            Some(err) => Err(FridgeError::from(err)),
            None => Recipe::new(name, description, instructions, ingredients, servings)
                .map_err(FridgeError::from)
                .and_then(|recipe| self.state.cookbook.add_recipe(recipe)),
        };
        self.report(result)
    }

    fn remove_recipe(&mut self) -> PromptResult<()> {
        let name = self
            .prompt
            .read_text("Type in name of the recipe to remove: ")?;
        let result = self.state.cookbook.remove_recipe(&name);
        self.report(result)
    }

    fn check_recipe(&mut self) -> PromptResult<()> {
        let name = self.prompt.read_text("Type in recipe name: ")?;
        let result = self
            .state
            .cookbook
            .can_make_recipe(&name, &self.state.storage)
            .map(|feasibility| feasibility.to_string());
        self.report(result)
    }

    fn suggest_recipes(&mut self) -> PromptResult<()> {
        let suggestions = self.state.cookbook.suggest_recipes(&self.state.storage);
        let out = self.prompt.output();
        writeln!(out)?;
        if suggestions.is_empty() {
            writeln!(
                out,
                "No recipe can be made with the current items in the fridge"
            )?;
        } else {
            writeln!(
                out,
                "You can make the following recipes from items in the fridge: "
            )?;
            for name in suggestions {
                writeln!(out, "- {name}")?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}
