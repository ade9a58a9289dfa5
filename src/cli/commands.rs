//! Command implementations for the wordform CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::error::{Result, WordformError};
use crate::morphology::observer::LogObserver;
use crate::pipeline::DictionaryPipeline;
use crate::quality::{IdealDictionary, QualityThresholds};

/// Execute a CLI command.
pub fn execute_command(args: WordformArgs) -> Result<()> {
    let pipeline = create_pipeline(&args)?;

    match &args.command {
        Command::Separators(input_args) => show_separators(&pipeline, input_args, &args),
        Command::Tokenize(input_args) => tokenize_text(&pipeline, input_args, &args),
        Command::Build(build_args) => build_dictionary(&pipeline, build_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_dictionary(&pipeline, evaluate_args, &args),
    }
}

/// Resolve the configuration: file (if any), then command line overrides.
pub fn load_config(args: &WordformArgs) -> Result<DictionaryConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            DictionaryConfig::from_json_file(path)?
        }
        None => DictionaryConfig::default(),
    };

    if let Some(strategy) = args.separators {
        config.separator_strategy = strategy.into();
    }
    if args.case_sensitive {
        config.case_insensitive = false;
    }

    config.validate()?;
    Ok(config)
}

fn create_pipeline(args: &WordformArgs) -> Result<DictionaryPipeline> {
    let config = load_config(args)?;
    Ok(DictionaryPipeline::new(config)?.with_observer(Arc::new(LogObserver)))
}

fn read_text(path: &Path) -> Result<String> {
    info!("Reading text from: {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Print the separator set of a text.
fn show_separators(
    pipeline: &DictionaryPipeline,
    args: &InputArgs,
    cli_args: &WordformArgs,
) -> Result<()> {
    let text = read_text(&args.input)?;
    let separators = pipeline.separators(&text);

    output_result(
        "Separators classified",
        &SeparatorsResult {
            strategy: pipeline.config().separator_strategy.to_string(),
            separators: separators.iter().collect(),
        },
        cli_args,
    )
}

/// Print the token stream of a text.
fn tokenize_text(
    pipeline: &DictionaryPipeline,
    args: &InputArgs,
    cli_args: &WordformArgs,
) -> Result<()> {
    let text = read_text(&args.input)?;
    let tokens: Vec<TokenEntry> = pipeline
        .tokenize(&text)?
        .map(|token| TokenEntry {
            position: token.position,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            text: token.text,
        })
        .collect();

    output_result(
        "Text tokenized",
        &TokenizeResult {
            total_tokens: tokens.len(),
            tokens,
        },
        cli_args,
    )
}

/// Build and print the dictionary of a text.
fn build_dictionary(
    pipeline: &DictionaryPipeline,
    args: &BuildArgs,
    cli_args: &WordformArgs,
) -> Result<()> {
    let text = read_text(&args.input)?;

    let start_time = Instant::now();
    let dictionary = pipeline.build_from_text(&text)?;
    let duration = start_time.elapsed();

    let record = dictionary.to_record(args.frequencies);
    output_result(
        "Dictionary built successfully",
        &BuildResult {
            total_words: dictionary.len(),
            total_tokens: dictionary.total_frequency(),
            duration_ms: duration.as_millis() as u64,
            words: record.words,
            frequencies: record.frequencies,
        },
        cli_args,
    )
}

/// Evaluate the dictionary of a text against a reference dictionary.
fn evaluate_dictionary(
    pipeline: &DictionaryPipeline,
    args: &EvaluateArgs,
    cli_args: &WordformArgs,
) -> Result<()> {
    let text = read_text(&args.input)?;
    let ideal = IdealDictionary::from_json_file(&args.ideal)?;

    let dictionary = pipeline.build_from_text(&text)?;
    let report = ideal.evaluate(&dictionary);
    let thresholds = QualityThresholds::new(args.max_root_errors, args.max_token_errors);
    let passed = report.within(&thresholds);

    output_result(
        "Dictionary evaluated",
        &EvaluationResult {
            report,
            max_root_token_errors: thresholds.max_root_token_errors,
            max_token_errors: thresholds.max_token_errors,
            passed,
        },
        cli_args,
    )?;

    if !passed {
        return Err(WordformError::other(format!(
            "Quality thresholds exceeded: {} root token errors, {} token errors",
            report.root_token_errors, report.token_errors
        )));
    }

    Ok(())
}
