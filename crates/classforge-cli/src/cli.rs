//! Command-line interface for the classforge utility
//!
//! Provides a CLI to turn a JSON class model into Java, PHP or Python source.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use classforge::core::logging::init_logging;
use classforge::model::ClassModel;
use classforge::plugins::Generator;
use classforge::{EmitConfig, Target};

/// Classforge - Generate source code skeletons from class models
#[derive(Parser)]
#[command(name = "classforge")]
#[command(about = "A Rust utility to generate Java, PHP and Python classes from a UML class model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate source code from a JSON class model
    Generate {
        /// Input file containing the JSON model (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the generated code (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target language; inferred from the output extension when omitted
        #[arg(short, long, value_enum)]
        target: Option<TargetChoice>,

        #[command(flatten)]
        emit: EmitArgs,
    },

    /// Check a JSON class model for errors and warnings
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported target languages
    Targets {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported target languages
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TargetChoice {
    Java,
    Php,
    #[value(alias = "py")]
    Python,
}

impl From<TargetChoice> for Target {
    fn from(value: TargetChoice) -> Self {
        match value {
            TargetChoice::Java => Target::Java,
            TargetChoice::Php => Target::Php,
            TargetChoice::Python => Target::Python,
        }
    }
}

/// Output shaping options shared by all targets
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EmitArgs {
    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Leave out docblocks, docstrings and explanatory comments
    #[arg(long)]
    pub no_docs: bool,

    /// Emit getters and fluent setters for PHP properties
    #[arg(long)]
    pub php_accessors: bool,

    /// Leave out the relationship comment block
    #[arg(long)]
    pub no_trailer: bool,
}

impl EmitArgs {
    pub fn to_config(&self) -> EmitConfig {
        EmitConfig::new()
            .with_indent(self.indent)
            .with_doc_comments(!self.no_docs)
            .with_php_accessors(self.php_accessors)
            .with_relationship_trailer(!self.no_trailer)
    }
}

/// Pick the target: explicit flag, then output extension, then Java
pub fn resolve_target(target: Option<TargetChoice>, output: Option<&Path>) -> Target {
    if let Some(choice) = target {
        return choice.into();
    }
    output
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
        .and_then(Target::from_extension)
        .unwrap_or_default()
}

/// Main CLI application
///
/// The held generator only inspects models; `generate` builds its own from
/// the emit flags.
pub struct ClassforgeApp {
    generator: Generator,
}

impl ClassforgeApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("CLASSFORGE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("CLASSFORGE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classforge v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output,
                target,
                emit,
            } => self.generate_command(input, output, target, &emit, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
            Commands::Targets { json } => self.targets_command(json, cli.verbose),
        }
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        target: Option<TargetChoice>,
        emit: &EmitArgs,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let target = resolve_target(target, output.as_deref());
        debug!(language = %target, "Resolved target language");
        let generator = Generator::with_config(emit.to_config());

        let model = ClassModel::from_json(&content)
            .map_err(|e| anyhow!("Failed to read class model: {}", e))?;
        let code = generator.generate(&model, target)?;

        if verbose {
            eprintln!(
                "Generated {} code for {} classes",
                target,
                model.class_count()
            );
        }

        self.write_output(output, &code)
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let model = match ClassModel::from_json(&content) {
            Ok(model) => model,
            Err(e) => {
                println!("✗ Invalid model: {}", e);
                return Err(e.into());
            }
        };

        if let Err(e) = model.validate() {
            println!("✗ Invalid model: {}", e);
            return Err(e.into());
        }

        let report = self.generator.inspect(&model);
        for rel in &report.dangling {
            println!(
                "warning: {} relationship {} -> {} references a missing class",
                rel.kind, rel.from, rel.to
            );
        }
        for conflict in &report.conflicts {
            println!(
                "warning: {} already extends {}; ignoring {}",
                conflict.child, conflict.kept, conflict.rejected
            );
        }

        println!(
            "✓ Valid model: {} classes, {} relationships",
            model.class_count(),
            model.relationship_count()
        );
        Ok(())
    }

    /// Handle the targets command
    fn targets_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported target languages");
        }

        if json {
            let targets: Vec<_> = Target::all()
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.to_string(),
                        "extension": t.file_extension(),
                        "description": t.description(),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "supported_targets": targets,
                "total": Target::all().len(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            println!("Supported target languages:");
            for target in Target::all() {
                println!(
                    "  {:<8} (.{:<4}) - {}",
                    target.to_string(),
                    target.file_extension(),
                    target.description()
                );
            }
            println!();
            println!("Total: {} target languages supported", Target::all().len());
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the generator (for testing)
    #[cfg(test)]
    pub fn generator(&self) -> &Generator {
        &self.generator
    }
}

impl Default for ClassforgeApp {
    fn default() -> Self {
        Self::new()
    }
}
