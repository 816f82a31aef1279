use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ValidationError, parse_date};
use crate::seed::{self, SeedData};

const DEFAULT_CURRENCY: &str = "kr";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// Start with the built-in fridge contents and recipes
    #[value(alias = "default")]
    #[serde(alias = "default")]
    Builtin,
    /// Start with an empty fridge and an empty cookbook
    #[value(alias = "empty")]
    #[serde(alias = "empty")]
    None,
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedSource::Builtin => write!(f, "builtin"),
            SeedSource::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: SeedSource,
    /// Takes precedence over `seed` when set.
    pub seed_file: Option<PathBuf>,
    /// Label printed after money amounts.
    pub currency: String,
    /// Fixed reference date for expiry views; the local date when unset.
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SeedSource::Builtin,
            seed_file: None,
            currency: DEFAULT_CURRENCY.to_string(),
            today: None,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            seed: cli_seed,
            seed_file: cli_seed_file,
            currency: cli_currency,
            today: cli_today,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            seed: file_seed,
            seed_file: file_seed_file,
            currency: file_currency,
            today: file_today,
        } = file_config;

        // Relative seed paths in a config file are relative to that file.
        let file_seed_file = file_seed_file.map(|path| match config.as_deref() {
            Some(config_path) if path.is_relative() => config_path
                .parent()
                .map(|dir| dir.join(&path))
                .unwrap_or(path),
            _ => path,
        });

        let file_today = file_today
            .as_deref()
            .map(parse_date)
            .transpose()
            .context("invalid `today` in config file")?;

        let currency = cli_currency
            .or(file_currency)
            .map(|c| c.trim().to_string())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Self {
            seed: cli_seed.or(file_seed).unwrap_or(SeedSource::Builtin),
            seed_file: cli_seed_file.or(file_seed_file),
            currency,
            today: cli_today.or(file_today),
        })
    }

    /// Fail-fast checks run before the console starts.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.currency.is_empty(), "currency label cannot be empty");
        if let Some(path) = self.seed_file.as_ref() {
            anyhow::ensure!(path.exists(), "seed file {:?} does not exist", path);
            anyhow::ensure!(path.is_file(), "seed file {:?} is not a file", path);
        }
        Ok(())
    }

    /// Reference date for "expired" checks.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn load_seed(&self) -> Result<SeedData> {
        if let Some(path) = self.seed_file.as_ref() {
            return seed::load_seed_file(path);
        }
        match self.seed {
            SeedSource::Builtin => seed::builtin().context("built-in seed data is invalid"),
            SeedSource::None => Ok(SeedData::default()),
        }
    }
}

fn parse_cli_date(input: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(input)
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "fridge-manager",
    about = "Fridge inventory and cookbook manager",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "FRIDGE_MANAGER_SEED",
        value_enum,
        value_name = "SOURCE",
        help = "Initial data to load (builtin or none)"
    )]
    pub seed: Option<SeedSource>,

    #[arg(
        long,
        env = "FRIDGE_MANAGER_SEED_FILE",
        value_name = "FILE",
        help = "Load initial items and recipes from a YAML or JSON file"
    )]
    pub seed_file: Option<PathBuf>,

    #[arg(
        long,
        env = "FRIDGE_MANAGER_CURRENCY",
        value_name = "TEXT",
        help = "Currency label printed after prices"
    )]
    pub currency: Option<String>,

    #[arg(
        long,
        env = "FRIDGE_MANAGER_TODAY",
        value_name = "DD-MM-YYYY",
        help = "Reference date used to decide which items are expired",
        value_parser = parse_cli_date
    )]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    seed: Option<SeedSource>,
    seed_file: Option<PathBuf>,
    currency: Option<String>,
    today: Option<String>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
