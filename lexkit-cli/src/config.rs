//! Configuration for the lexkit CLI.
//!
//! Settings live in `lexkit.toml`. Command-line flags are applied on top of
//! whatever the file (or the defaults) provide.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use lexkit_lex::parsers::{
    CommentParser, IdentifierParser, NumberParser, NumericLiteralParser, QuotedStringParser,
    WhitespaceSkipper,
};
use lexkit_lex::{EofPolicy, LexerConfig, ParserChain, SkipPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexkit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// How input is tokenized.
    #[serde(default)]
    pub lexer: LexerSection,

    /// How tokens are printed.
    #[serde(default)]
    pub output: OutputSection,
}

/// Which number parser the chain uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Plain ASCII digit runs, no values
    #[default]
    Simple,
    /// Decimal, octal, hex and float literals with typed values
    C,
}

/// Token output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of tokens
    Json,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    #[serde(default)]
    pub numbers: NumberStyle,

    /// Report end of input as an error instead of an EOF token.
    #[serde(default)]
    pub strict_eof: bool,

    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,

    /// Restart the chain after a parser skips text without producing a token.
    #[serde(default = "default_true")]
    pub rescan_after_skip: bool,

    /// Characters that open and close string literals.
    #[serde(default = "default_quote_marks")]
    pub quote_marks: String,
}

/// `[output]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print typed number values next to number tokens.
    #[serde(default = "default_true")]
    pub show_values: bool,
}

/// Lexer settings given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOverrides {
    pub numbers: Option<NumberStyle>,
    pub strict: bool,
    pub no_rescan: bool,
    pub comment_marker: Option<char>,
}

fn default_comment_marker() -> char {
    '#'
}

fn default_quote_marks() -> String {
    "\"'".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            numbers: NumberStyle::default(),
            strict_eof: false,
            comment_marker: default_comment_marker(),
            rescan_after_skip: true,
            quote_marks: default_quote_marks(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_values: true,
        }
    }
}

impl LexerSection {
    /// Applies command-line flags. Flags only ever tighten or replace.
    pub fn apply(&mut self, overrides: &LexerOverrides) {
        if let Some(numbers) = overrides.numbers {
            self.numbers = numbers;
        }
        if let Some(marker) = overrides.comment_marker {
            self.comment_marker = marker;
        }
        self.strict_eof |= overrides.strict;
        if overrides.no_rescan {
            self.rescan_after_skip = false;
        }
    }

    /// Builds the parser chain these settings describe.
    ///
    /// The simple style keeps comments as a chain entry, the C style hands
    /// them to the skipper.
    pub fn chain(&self) -> ParserChain {
        let strings = QuotedStringParser::with_marks(self.quote_marks.chars());
        match self.numbers {
            NumberStyle::Simple => ParserChain::new(WhitespaceSkipper::new())
                .with(IdentifierParser::new())
                .with(NumberParser)
                .with(strings)
                .with(CommentParser::new(self.comment_marker)),
            NumberStyle::C => ParserChain::new(WhitespaceSkipper::with_comments(self.comment_marker))
                .with(IdentifierParser::new())
                .with(NumericLiteralParser)
                .with(strings),
        }
    }

    /// The lexer policies these settings describe.
    pub fn lexer_config(&self) -> LexerConfig {
        let eof = if self.strict_eof {
            EofPolicy::Error
        } else {
            EofPolicy::Token
        };
        let skip = if self.rescan_after_skip {
            SkipPolicy::Rescan
        } else {
            SkipPolicy::FallThrough
        };
        LexerConfig::default().with_eof(eof).with_skip(skip)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches, in order, the current directory, `~/.config/lexkit/` and
    /// the platform configuration directory. Falls back to defaults when no
    /// file exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lexkit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexkit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
