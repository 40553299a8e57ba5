use ikilog::cli::commands::{CliArgs, Commands};
use ikilog::cli::handlers::{handle_config, handle_emit, handle_tags};
use ikilog::util::logging::{init_logging, parse_level, LoggingConfig};
use ikilog::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("ikilog v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config_path = args.config.as_deref();
    let exit_code = match &args.command {
        Commands::Emit(emit_args) => handle_emit(emit_args, config_path),
        Commands::Tags(tags_args) => handle_tags(tags_args),
        Commands::Config(config_args) => handle_config(config_args, config_path),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::TRACE
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("IKILOG_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::with_level(level));
}
