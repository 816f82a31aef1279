pub mod cli;
pub mod config;
pub mod cookbook;
pub mod domain;
pub mod error;
pub mod logging;
pub mod seed;
pub mod state;
pub mod storage;

pub use cli::{Console, MenuOption};
pub use config::{AppConfig, CliArgs, SeedSource};
pub use cookbook::{CookBook, Feasibility, Shortfall};
pub use domain::{Ingredient, Recipe, RecipeIngredient, ValidationError};
pub use error::{ErrorCode, FridgeError, FridgeResult};
pub use logging::{LoggingConfig, init_logging};
pub use state::AppState;
pub use storage::{FoodStorage, QUANTITY_EPSILON, RemovalReport, RemovedLine};

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Loads the configured seed and runs an interactive session on stdin/stdout.
pub fn run_app(config: AppConfig) -> Result<()> {
    let seed = config.load_seed()?;
    let state = AppState::from_seed(seed).context("failed to load seed data")?;

    tracing::info!(
        seed = %config.seed,
        seed_file = ?config.seed_file,
        today = %domain::format_date(config.today()),
        stock_lines = state.storage.len(),
        recipes = state.cookbook.len(),
        "starting fridge manager"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), state, &config);
    console.run().context("console I/O failed")?;

    let (_, mut out) = console.into_parts();
    out.flush().context("failed to flush stdout")?;
    tracing::info!("session ended");
    Ok(())
}
