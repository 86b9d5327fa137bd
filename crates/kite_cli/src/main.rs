//! Kite CLI: inspect the diagnostic catalog and check declaration files.
//!
//! `kite catalog` lists every registered diagnostic, `kite explain` shows one
//! in detail, and `kite check` runs the semantic checkers over a JSON
//! declaration tree and renders what they report.

#![warn(missing_docs)]

mod catalog;
mod check;
mod explain;

use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use kite_diagnostics::Severity;
use tracing_subscriber::EnvFilter;

/// Kite: diagnostics of the Kite compiler's semantic analysis.
#[derive(Parser, Debug)]
#[command(name = "kite", version, about = "Kite compiler diagnostics")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `kite.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every registered diagnostic.
    Catalog {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Describe one diagnostic.
    Explain {
        /// Diagnostic name, e.g. `NAME_CLASH`.
        name: String,
    },
    /// Run the checkers on JSON declaration files.
    Check(CheckArgs),
}

/// Arguments for the `kite check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Declaration files to check.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Diagnostic names to suppress (e.g., `--allow IMPLICITLY_RENAMED`).
    /// Repeat the flag or separate names with commas.
    #[arg(long, action = ArgAction::Append, value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Diagnostic names to promote to errors (e.g., `--deny REDUNDANT_TARGET_NAME`).
    /// Repeat the flag or separate names with commas.
    #[arg(long, action = ArgAction::Append, value_delimiter = ',')]
    pub deny: Vec<String>,

    /// Lowest severity reported; overrides the configuration file.
    #[arg(long)]
    pub min_severity: Option<Severity>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::env::var_os("TERM").is_some()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Catalog { format } => catalog::run(format),
        Command::Explain { ref name } => explain::run(name),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `KITE_LOG` applies unless a verbosity
/// flag is given.
fn init_logging(quiet: bool, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_env("KITE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
