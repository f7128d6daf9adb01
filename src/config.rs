//! Formatter configuration
//!
//! Parses a TOML document into precision rules and display options. Every
//! field has a default, so an empty document reproduces the built-in rules.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A keyword rule selecting the precision of matching metric names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrecisionRule {
    /// Substrings matched case-insensitively against the metric name
    pub keywords: Vec<String>,
    /// Decimal places used when any keyword matches
    pub decimals: usize,
}

impl PrecisionRule {
    /// Create a rule from keywords and a decimal count
    #[must_use]
    pub fn new(keywords: &[&str], decimals: usize) -> Self {
        Self {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            decimals,
        }
    }

    /// Returns true if the lowercased metric name contains any keyword
    #[must_use]
    pub fn matches(&self, lowercase_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowercase_name.contains(&k.to_lowercase()))
    }
}

/// Ordered precision rules; the first matching rule wins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrecisionConfig {
    /// Decimal places for names no rule matches (default: 6)
    #[serde(default = "default_decimals")]
    pub default: usize,
    /// Rules in priority order
    #[serde(default = "default_rules", rename = "rule")]
    pub rules: Vec<PrecisionRule>,
}

const fn default_decimals() -> usize {
    6
}

fn default_rules() -> Vec<PrecisionRule> {
    vec![
        PrecisionRule::new(&["loss", "recall", "alarm", "prec"], 4),
        PrecisionRule::new(&["accuracy", "acc"], 2),
    ]
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            default: default_decimals(),
            rules: default_rules(),
        }
    }
}

impl PrecisionConfig {
    /// Decimal places for a metric name
    #[must_use]
    pub fn decimals_for(&self, name: &str) -> usize {
        let lowercase = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowercase))
            .map_or(self.default, |rule| rule.decimals)
    }
}

/// Terminal display options
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Render the header line bold cyan (default: false).
    ///
    /// Escape codes are emitted only when `colored` decides colour is wanted:
    /// it checks whether stdout is a terminal and honours `NO_COLOR`,
    /// `CLICOLOR` and `CLICOLOR_FORCE`, or a `colored::control::set_override`
    /// made by the caller. Otherwise the header is plain text.
    #[serde(default)]
    pub color_header: bool,
}

/// Top-level formatter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    /// Precision rules
    #[serde(default)]
    pub precision: PrecisionConfig,
    /// Display options
    #[serde(default)]
    pub display: DisplayConfig,
}

impl FormatConfig {
    /// Parse a configuration file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse configuration content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse format config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (i, rule) in self.precision.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                bail!("Precision rule {} has no keywords", i + 1);
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                bail!("Precision rule {} has an empty keyword", i + 1);
            }
        }

        Ok(())
    }
}
