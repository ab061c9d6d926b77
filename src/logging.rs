use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// `env_logger` by default; terminal plus file via `simplelog` when a log file is given.
pub fn init(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .try_init()?;
        }
        Some(path) => {
            let level = level_from_env();
            CombinedLogger::init(vec![
                TermLogger::new(
                    level,
                    Config::default(),
                    TerminalMode::Stderr,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(level, Config::default(), File::create(path)?),
            ])?;
        }
    }
    Ok(())
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
