//! Command handlers. Each returns the process exit code.

use std::path::Path;
use tracing::{debug, error};

use super::commands::{ConfigArgs, EmitArgs, TagsArgs};
use super::output::OutputFormatter;
use crate::config::{ConfigError, LoggerConfig, MissingDatePolicy};
use crate::date::today;
use crate::event::CallSite;
use crate::logger::TaggedLogger;

/// Loads the file at `config_path`, or the environment when there is none.
pub fn load_config(config_path: Option<&Path>) -> Result<LoggerConfig, ConfigError> {
    match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            LoggerConfig::from_file(path)
        }
        None => Ok(LoggerConfig::from_env()),
    }
}

/// Applies `emit` flags on top of a loaded configuration and re-validates.
pub fn apply_overrides(
    mut config: LoggerConfig,
    args: &EmitArgs,
) -> Result<LoggerConfig, ConfigError> {
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(cutoff) = &args.suppress_before {
        config.suppress_before_date = cutoff.clone();
    }
    if args.color {
        config.use_color = true;
    }
    if args.disabled {
        config.enabled = false;
    }
    if args.crash_reporting {
        config.crash_reporting_active = true;
    }
    if args.emit_undated {
        config.missing_date = MissingDatePolicy::Emit;
    }

    config.validate()?;
    Ok(config)
}

pub fn handle_emit(args: &EmitArgs, config_path: Option<&Path>) -> i32 {
    let config = match load_config(config_path).and_then(|c| apply_overrides(c, args)) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let logger = TaggedLogger::new(config);

    let date = if args.today {
        Some(today())
    } else {
        args.date.clone()
    };

    let here = crate::call_site!();
    let site = CallSite::new(
        args.file.as_deref().unwrap_or(here.file),
        args.function.as_deref().unwrap_or(here.function),
        args.line.unwrap_or(here.line),
    );

    logger.emit(args.tag, args.message.as_deref(), date.as_deref(), site);
    0
}

pub fn handle_tags(args: &TagsArgs) -> i32 {
    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_tags() {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub fn handle_config(args: &ConfigArgs, config_path: Option<&Path>) -> i32 {
    let config = match load_config(config_path).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_config(&config) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
