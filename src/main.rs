use clap::Parser;
use fridge_manager::{AppConfig, CliArgs, LoggingConfig, init_logging, run_app};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = AppConfig::from_args(cli)?;

    // Fail before the menu is shown
    config.validate()?;

    run_app(config)
}
