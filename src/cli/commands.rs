use crate::tag::ColorTag;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tagged debug logging with a date-based suppression cutoff
#[derive(Parser, Debug)]
#[command(
    name = "ikilog",
    about = "Tagged debug logging with a date-based suppression cutoff",
    version,
    long_about = "ikilog prints tagged, optionally glyph-annotated debug records. Records \
                  dated on or before the configured cutoff are suppressed unless tagged \
                  critical. Configuration comes from a TOML file (--config), IKILOG_* \
                  environment variables, and command-line overrides, in that order."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "FILE",
        help = "TOML configuration file (defaults to IKILOG_* environment variables)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set diagnostics level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Trace why records are dropped"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only errors on stderr"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Emit a tagged message",
        long_about = "Runs one message through the filter and prints it, one record per line.\n\n\
                      Examples:\n  \
                      ikilog emit 'cache warmed' --date 2016-Jul-28\n  \
                      ikilog emit 'token expired' --tag critical --date 1999-Jan-01\n  \
                      ikilog emit 'layout pass' --tag highlighted --today --color"
    )]
    Emit(EmitArgs),

    #[command(about = "List tags and their glyphs")]
    Tags(TagsArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct EmitArgs {
    #[arg(value_name = "MESSAGE", help = "Message text (omit to emit nothing)")]
    pub message: Option<String>,

    #[arg(
        short = 't',
        long,
        value_parser = parse_tag,
        default_value = "none",
        help = "Tag: none, critical, important, highlighted, reviewed, valuable, to_be_reviewed, not_important"
    )]
    pub tag: ColorTag,

    #[arg(
        short = 'd',
        long,
        value_name = "DATE",
        conflicts_with = "today",
        help = "Creation date of the message, yyyy-MMM-dd"
    )]
    pub date: Option<String>,

    #[arg(long, help = "Use today's date as the creation date")]
    pub today: bool,

    #[arg(long, help = "Override the line prefix")]
    pub prefix: Option<String>,

    #[arg(long, value_name = "DATE", help = "Override the cutoff date, yyyy-MMM-dd")]
    pub suppress_before: Option<String>,

    #[arg(long, help = "Print tag glyphs")]
    pub color: bool,

    #[arg(long, help = "Turn logging off (nothing is printed)")]
    pub disabled: bool,

    #[arg(long, help = "Also send records to the crash-reporting sink")]
    pub crash_reporting: bool,

    #[arg(long, help = "Emit messages that carry no date instead of dropping them")]
    pub emit_undated: bool,

    #[arg(long, value_name = "FILE", help = "Source file shown in the record")]
    pub file: Option<String>,

    #[arg(long, value_name = "NAME", help = "Function shown in the record")]
    pub function: Option<String>,

    #[arg(long, value_name = "LINE", help = "Line number shown in the record")]
    pub line: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct TagsArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Toml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Toml => super::output::OutputFormat::Toml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_tag(s: &str) -> Result<ColorTag, String> {
    s.parse::<ColorTag>().map_err(|e| e.to_string())
}
