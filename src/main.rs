use anyhow::{Context, Result};
use casekit::cli::output::{self, OutputFormat};
use casekit::config::{Overrides, LOCAL_CONFIG_FILE};
use casekit::{case, tokenize, BatchSummary, Config, Convention, Input, Variant};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::*;
use std::io::{self, BufRead};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(
    version,
    about = "Convert text to camelCase, dot.case, kebab-case or snake_case",
    long_about = None
)]
struct Cli {
    /// Text to convert (one line of stdin per input when omitted)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Target convention (camel, dot, kebab, snake)
    #[arg(short, long)]
    convention: Option<Convention>,

    /// Read every input as a JSON value; a blank line is a missing input
    #[arg(short, long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if some inputs could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Show the words a text is split into
    Split {
        /// Tokenizer variant (pattern, separator)
        #[arg(short, long)]
        variant: Option<Variant>,

        /// Text to split (one line of stdin per input when omitted)
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print where configuration files are looked up
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casekit", &mut io::stdout());
        return Ok(());
    }

    let mut overrides = Overrides {
        convention: cli.convention,
        variant: None,
        no_color: cli.no_color,
        json_input: cli.json_input,
    };
    if let Some(Commands::Split { variant, .. }) = &cli.command {
        overrides.variant = *variant;
    }

    let config = Config::load(&overrides)?;
    if !config.color {
        colored::control::set_override(false);
    }

    if let Some(command) = cli.command {
        return handle_command(command, &config, &cli.format);
    }

    let lines = read_inputs(cli.texts)?;
    if lines.is_empty() {
        warn("no input given", config.color);
        return Ok(());
    }

    let inputs = if config.json_input {
        parse_json_inputs(&lines)?
    } else {
        lines.into_iter().map(Input::Text).collect()
    };

    let conversions = case::convert_all(config.convention, &inputs);
    output::print_conversions(config.convention, &conversions, config.color, &cli.format)?;

    let summary = BatchSummary::from_conversions(&conversions);
    if cli.format == OutputFormat::Text {
        output::print_failure_summary(&summary, config.color);
    }

    // Exit with appropriate code
    if summary.failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands, config: &Config, format: &OutputFormat) -> Result<()> {
    match command {
        Commands::Split { texts, .. } => {
            for text in read_inputs(texts)? {
                let tokens = tokenize(&text, config.variant);
                output::print_tokens(&text, config.variant, &tokens, config.color, format)?;
            }
        }
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                print!("{}", config.to_toml()?);
            }
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => print_config_path("global", &path),
                    None => println!("global: {}", "unavailable".dimmed()),
                }
                print_config_path("local", Path::new(LOCAL_CONFIG_FILE));
            }
        },
    }
    Ok(())
}

fn print_config_path(label: &str, path: &Path) {
    let marker = if path.exists() {
        "✓".green()
    } else {
        "✗".dimmed()
    };
    println!("{} {}: {}", marker, label, path.display());
}

/// Use the given texts, or every line of stdin when there are none
fn read_inputs(texts: Vec<String>) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts);
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}

fn parse_json_inputs(lines: &[String]) -> Result<Vec<Input>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if line.trim().is_empty() {
                return Ok(Input::Value(None));
            }
            let value = serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON in input {}: {}", i + 1, line))?;
            Ok(Input::Value(Some(value)))
        })
        .collect()
}

fn warn(message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    } else {
        eprintln!("Warning: {}", message);
    }
}
