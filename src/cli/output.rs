use crate::case::Convention;
use crate::{BatchSummary, Conversion};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    convention: String,
    total: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonTokens {
    input: String,
    variant: String,
    tokens: Vec<String>,
}

pub fn print_conversions(
    convention: Convention,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(conversions, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(convention, conversions)?);
            Ok(())
        }
    }
}

fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        match &conversion.output {
            Ok(output) => println!("{}", output),
            Err(e) => {
                if colored_output {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                } else {
                    eprintln!("Error: {}", e);
                }
            }
        }
    }
}

/// Render a batch as one pretty-printed JSON document
pub fn render_json(convention: Convention, conversions: &[Conversion]) -> Result<String> {
    let summary = BatchSummary::from_conversions(conversions);
    let results = conversions
        .iter()
        .map(|c| match &c.output {
            Ok(output) => JsonResult {
                input: c.input.clone(),
                output: Some(output.clone()),
                error: None,
            },
            Err(e) => JsonResult {
                input: c.input.clone(),
                output: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        convention: convention.to_string(),
        total: summary.total,
        failed: summary.failed,
        results,
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize results")
}

pub fn print_tokens(
    input: &str,
    variant: crate::Variant,
    tokens: &[String],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let joined = if colored_output {
                tokens
                    .iter()
                    .map(|t| t.cyan().to_string())
                    .collect::<Vec<_>>()
                    .join(&" | ".dimmed().to_string())
            } else {
                tokens.join(" | ")
            };
            println!("{}", joined);
        }
        OutputFormat::Json => {
            let output = JsonTokens {
                input: input.to_string(),
                variant: variant.to_string(),
                tokens: tokens.to_vec(),
            };
            println!(
                "{}",
                serde_json::to_string(&output).context("Failed to serialize tokens")?
            );
        }
    }
    Ok(())
}

pub fn print_failure_summary(summary: &BatchSummary, colored: bool) {
    if summary.failed == 0 {
        return;
    }

    let input_word = if summary.total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} could not be converted",
            "✗".red().bold(),
            summary.failed.to_string().red().bold(),
            summary.total,
            input_word
        );
    } else {
        eprintln!(
            "✗ {} of {} {} could not be converted",
            summary.failed, summary.total, input_word
        );
    }
}
