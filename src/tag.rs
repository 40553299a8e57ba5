//! Color tags attached to every log call
//!
//! A tag does two jobs: it picks the glyph shown in front of the record when
//! color output is on, and it decides whether the date cutoff applies at all.
//! Only [`ColorTag::Critical`] bypasses the cutoff.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    /// Plain call with no particular emphasis
    #[default]
    None,
    /// Never suppressed by the date cutoff
    Critical,
    Important,
    Highlighted,
    Reviewed,
    Valuable,
    ToBeReviewed,
    /// Gray, low-signal output
    NotImportant,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown tag: {0}. Valid tags: none, critical, important, highlighted, reviewed, valuable, to_be_reviewed, not_important")]
pub struct ParseTagError(pub String);

impl ColorTag {
    pub const ALL: [ColorTag; 8] = [
        ColorTag::None,
        ColorTag::Critical,
        ColorTag::Important,
        ColorTag::Highlighted,
        ColorTag::Reviewed,
        ColorTag::Valuable,
        ColorTag::ToBeReviewed,
        ColorTag::NotImportant,
    ];

    /// Glyph printed after the prefix when color output is enabled
    pub fn glyph(self) -> &'static str {
        match self {
            ColorTag::None => "⚪",
            ColorTag::Critical => "🔴",
            ColorTag::Important => "🟠",
            ColorTag::Highlighted => "🟡",
            ColorTag::Reviewed => "🟢",
            ColorTag::Valuable => "🔵",
            ColorTag::ToBeReviewed => "🟣",
            ColorTag::NotImportant => "⚫",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTag::None => "none",
            ColorTag::Critical => "critical",
            ColorTag::Important => "important",
            ColorTag::Highlighted => "highlighted",
            ColorTag::Reviewed => "reviewed",
            ColorTag::Valuable => "valuable",
            ColorTag::ToBeReviewed => "to_be_reviewed",
            ColorTag::NotImportant => "not_important",
        }
    }

    /// Whether events with this tag skip the date cutoff
    pub fn bypasses_cutoff(self) -> bool {
        matches!(self, ColorTag::Critical)
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorTag {
    type Err = ParseTagError;

    /// Accepts snake_case, camelCase and kebab-case spellings, plus `gray`
    /// as an alias for [`ColorTag::NotImportant`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "none" | "plain" => Ok(ColorTag::None),
            "critical" => Ok(ColorTag::Critical),
            "important" => Ok(ColorTag::Important),
            "highlighted" => Ok(ColorTag::Highlighted),
            "reviewed" => Ok(ColorTag::Reviewed),
            "valuable" => Ok(ColorTag::Valuable),
            "tobereviewed" => Ok(ColorTag::ToBeReviewed),
            "notimportant" | "gray" | "grey" => Ok(ColorTag::NotImportant),
            _ => Err(ParseTagError(s.to_string())),
        }
    }
}
