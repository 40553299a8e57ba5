//! Output formatting for the `tags` and `config` commands
//!
//! Records emitted by `ikilog emit` are never formatted here; they go through
//! the logger's own sinks.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::LoggerConfig;
use crate::tag::ColorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// TOML, loadable again with `--config`
    Toml,
    /// Human-readable formatted text
    Human,
}

#[derive(Debug, Serialize)]
struct TagInfo {
    name: &'static str,
    glyph: &'static str,
    bypasses_cutoff: bool,
}

#[derive(Debug, Serialize)]
struct TagList {
    tags: Vec<TagInfo>,
}

impl TagList {
    fn all() -> Self {
        Self {
            tags: ColorTag::ALL
                .iter()
                .map(|tag| TagInfo {
                    name: tag.name(),
                    glyph: tag.glyph(),
                    bypasses_cutoff: tag.bypasses_cutoff(),
                })
                .collect(),
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_tags(&self) -> Result<String> {
        let list = TagList::all();
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&list.tags).context("Failed to serialize tags to JSON")
            }
            OutputFormat::Toml => {
                toml::to_string_pretty(&list).context("Failed to serialize tags to TOML")
            }
            OutputFormat::Human => Ok(Self::format_tags_human(&list)),
        }
    }

    pub fn format_config(&self, config: &LoggerConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")
            }
            OutputFormat::Toml => {
                toml::to_string_pretty(config).context("Failed to serialize config to TOML")
            }
            OutputFormat::Human => Ok(Self::format_config_human(config)),
        }
    }

    fn format_tags_human(list: &TagList) -> String {
        let mut output = String::new();
        for tag in &list.tags {
            output.push_str(&format!("{}  {}", tag.glyph, tag.name));
            if tag.bypasses_cutoff {
                output.push_str("  (never suppressed by date)");
            }
            output.push('\n');
        }
        output
    }

    fn format_config_human(config: &LoggerConfig) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        let mut output = String::new();
        output.push_str(&format!("enabled:          {}\n", on_off(config.enabled)));
        output.push_str(&format!("suppress before:  {}\n", config.suppress_before_date));
        output.push_str(&format!("prefix:           {}\n", config.prefix));
        output.push_str(&format!("color:            {}\n", on_off(config.use_color)));
        output.push_str(&format!(
            "crash reporting:  {} ({:?})\n",
            on_off(config.crash_reporting_active),
            config.crash_routing
        ));
        output.push_str(&format!("undated messages: {:?}\n", config.missing_date));
        output
    }
}
