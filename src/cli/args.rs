//! Command line argument parsing for the wordform CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::separator::SeparatorStrategy;

/// Wordform - builds a dictionary of words and their forms from raw text
#[derive(Parser, Debug, Clone)]
#[command(name = "wordform")]
#[command(about = "Builds a dictionary of word roots and their surface forms from raw text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordformArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Separator strategy (overrides the configuration file)
    #[arg(long, value_name = "STRATEGY", global = true)]
    pub separators: Option<SeparatorArg>,

    /// Compare tokens case-sensitively (overrides the configuration file)
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordformArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the separator set classified for a text
    Separators(InputArgs),

    /// Print the token stream of a text
    Tokenize(InputArgs),

    /// Build the dictionary of a text
    Build(BuildArgs),

    /// Evaluate the dictionary of a text against a reference dictionary
    Evaluate(EvaluateArgs),
}

/// Arguments for commands reading a single text file
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Path to the UTF-8 text file
    #[arg(value_name = "TEXT_FILE")]
    pub input: PathBuf,
}

/// Arguments for building a dictionary
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the UTF-8 text file
    #[arg(value_name = "TEXT_FILE")]
    pub input: PathBuf,

    /// Include word frequencies in the output
    #[arg(long)]
    pub frequencies: bool,
}

/// Arguments for quality evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to the UTF-8 text file
    #[arg(value_name = "TEXT_FILE")]
    pub input: PathBuf,

    /// Reference dictionary (JSON)
    #[arg(long, value_name = "IDEAL_FILE")]
    pub ideal: PathBuf,

    /// Maximum accepted number of root token errors
    #[arg(long)]
    pub max_root_errors: Option<usize>,

    /// Maximum accepted number of token errors
    #[arg(long)]
    pub max_token_errors: Option<usize>,
}

/// Separator strategies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorArg {
    /// Fixed whitespace and punctuation
    Predefined,
    /// Every non-letter character
    #[value(name = "non-alphabetic", alias = "non_alphabetic")]
    NonAlphabetic,
    /// Inferred from character statistics
    Probability,
}

impl From<SeparatorArg> for SeparatorStrategy {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Predefined => SeparatorStrategy::Predefined,
            SeparatorArg::NonAlphabetic => SeparatorStrategy::NonAlphabetic,
            SeparatorArg::Probability => SeparatorStrategy::Probability,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
