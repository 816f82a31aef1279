//! Configuration layering: CLI and environment over config file over defaults

use chrono::NaiveDate;
use clap::Parser;
use fridge_manager::{AppConfig, CliArgs, SeedSource};
use serial_test::serial;
use std::env;
use std::fs;

fn parse(args: &[&str]) -> AppConfig {
    let mut argv = vec!["fridge-manager"];
    argv.extend_from_slice(args);
    AppConfig::from_args(CliArgs::try_parse_from(argv).unwrap()).unwrap()
}

#[test]
#[serial]
fn test_env_fills_in_missing_flags() {
    unsafe {
        env::set_var("FRIDGE_MANAGER_CURRENCY", "EUR");
        env::set_var("FRIDGE_MANAGER_SEED", "none");
    }

    let config = parse(&[]);
    assert_eq!(config.currency, "EUR");
    assert_eq!(config.seed, SeedSource::None);

    let config = parse(&["--currency", "SEK"]);
    assert_eq!(config.currency, "SEK");

    unsafe {
        env::remove_var("FRIDGE_MANAGER_CURRENCY");
        env::remove_var("FRIDGE_MANAGER_SEED");
    }
}

#[test]
#[serial]
fn test_yaml_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fridge.yaml");
    fs::write(&path, "currency: USD\ntoday: 31-12-2024\nseed: builtin\n").unwrap();

    let config = parse(&["--config", path.to_str().unwrap()]);
    assert_eq!(config.currency, "USD");
    assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_unknown_config_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fridge.json");
    fs::write(&path, r#"{"currency": "kr", "colour": "blue"}"#).unwrap();

    let args = CliArgs::try_parse_from(["fridge-manager", "--config", path.to_str().unwrap()])
        .unwrap();
    assert!(AppConfig::from_args(args).is_err());
}

#[test]
#[serial]
fn test_blank_currency_fails_validation() {
    let config = parse(&["--currency", "   "]);
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_seed_file_replaces_builtin_data() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.yaml");
    fs::write(
        &seed_path,
        "items:\n  - name: Cheese\n    quantity: 200\n    unit: grams\n    price_per_unit: 0.15\n    best_before: 10-01-2025\n",
    )
    .unwrap();

    let config = parse(&["--seed-file", seed_path.to_str().unwrap()]);
    assert!(config.validate().is_ok());
    let seed = config.load_seed().unwrap();
    assert_eq!(seed.items.len(), 1);
    assert!(seed.recipes.is_empty());
}

#[test]
#[serial]
fn test_missing_seed_file_fails_validation() {
    let config = parse(&["--seed-file", "/no/such/seed.yaml"]);
    assert!(config.validate().is_err());
}
