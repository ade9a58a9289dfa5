//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordformArgs};
use crate::error::Result;
use crate::quality::QualityReport;

/// Result structure for separator classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeparatorsResult {
    pub strategy: String,
    pub separators: Vec<char>,
}

/// A token with its position and byte offsets.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenEntry {
    pub text: String,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub total_tokens: usize,
    pub tokens: Vec<TokenEntry>,
}

/// Result structure for dictionary construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub total_words: usize,
    pub total_tokens: u64,
    pub duration_ms: u64,
    pub words: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<BTreeMap<String, u64>>,
}

/// Result structure for quality evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub report: QualityReport,
    pub max_root_token_errors: Option<usize>,
    pub max_token_errors: Option<usize>,
    pub passed: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordformArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordformArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match std::any::type_name::<T>() {
        name if name.ends_with("BuildResult") => output_build_human(&value),
        name if name.ends_with("TokenizeResult") => output_tokens_human(&value),
        name if name.ends_with("EvaluationResult") => output_evaluation_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output a dictionary in human format, one word per line.
fn output_build_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value);
    };

    println!("Dictionary:");
    println!("═══════════");

    let frequencies = obj.get("frequencies").and_then(|f| f.as_object());
    if let Some(words) = obj.get("words").and_then(|w| w.as_object()) {
        for (root, variants) in words {
            let variants = format_value(variants);
            match frequencies.and_then(|f| f.get(root)).and_then(|n| n.as_u64()) {
                Some(frequency) => println!("{root} ({frequency}): {variants}"),
                None => println!("{root}: {variants}"),
            }
        }
    }

    println!();
    if let Some(total) = obj.get("total_words").and_then(|t| t.as_u64()) {
        println!("Total words: {total}");
    }
    if let Some(tokens) = obj.get("total_tokens").and_then(|t| t.as_u64()) {
        println!("Total tokens: {tokens}");
    }
    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Built in {duration}ms");
    }
    Ok(())
}

/// Output a token stream in human format.
fn output_tokens_human(value: &serde_json::Value) -> Result<()> {
    if let Some(tokens) = value.get("tokens").and_then(|t| t.as_array()) {
        for token in tokens {
            let text = token.get("text").and_then(|t| t.as_str()).unwrap_or_default();
            let start = token.get("start_offset").and_then(|s| s.as_u64()).unwrap_or(0);
            let end = token.get("end_offset").and_then(|e| e.as_u64()).unwrap_or(0);
            println!("{text}\t{start}..{end}");
        }
    }
    if let Some(total) = value.get("total_tokens").and_then(|t| t.as_u64()) {
        println!();
        println!("Total tokens: {total}");
    }
    Ok(())
}

/// Output a quality report in human format.
fn output_evaluation_human(value: &serde_json::Value) -> Result<()> {
    println!("Quality Report:");
    println!("═══════════════");

    if let Some(report) = value.get("report").and_then(|r| r.as_object()) {
        for (key, val) in report {
            println!("{}: {}", key.replace('_', " "), format_value(val));
        }
    }
    for key in ["max_root_token_errors", "max_token_errors"] {
        if let Some(max) = value.get(key).and_then(|m| m.as_u64()) {
            println!("{}: {max}", key.replace('_', " "));
        }
    }

    let passed = value.get("passed").and_then(|p| p.as_bool()).unwrap_or(false);
    println!();
    println!("Result: {}", if passed { "PASSED" } else { "FAILED" });
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordformArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        serde_json::Value::Object(_) => value.to_string(),
    }
}
