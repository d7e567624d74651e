use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;

const LOG_LEVEL_ENV: &str = "OPEN_PR_LOG";

/// `OPEN_PR_LOG` wins over the level picked from the flags.
pub fn init(level: LevelFilter) -> Result<()> {
    let level = env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(level);

    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .init()?;

    Ok(())
}
