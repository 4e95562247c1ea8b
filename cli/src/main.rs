//! muster CLI — driving adapter for the superset matcher.
//!
//! Subcommands:
//! - `check <actual> <pattern> [--exact-multiset]` — does `actual` contain `pattern`?
//! - `run <fixture>...` — run conformance fixture files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use muster::{MatchOptions, Matcher, Value};
use muster_test::Fixture;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Superset matching for JSON and YAML documents.
#[derive(Debug, Parser)]
#[command(name = "muster", version, about)]
struct Cli {
    /// More log output (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the actual document contains everything the pattern requires
    Check {
        /// Actual document (.json is read as JSON, anything else as YAML)
        actual: PathBuf,
        /// Pattern document
        pattern: PathBuf,
        /// Require a distinct actual element for every collection pattern element
        #[arg(long)]
        exact_multiset: bool,
    },
    /// Run conformance fixture files
    Run {
        /// Fixture files (YAML, `---` separated)
        #[arg(required = true)]
        fixtures: Vec<PathBuf>,
    },
}

/// Exit status for "ran fine, answer is no".
const EXIT_MISMATCH: u8 = 1;
/// Exit status for unreadable input.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Check {
            actual,
            pattern,
            exact_multiset,
        } => cmd_check(
            &actual,
            &pattern,
            MatchOptions::new().with_exact_multiset(exact_multiset),
        ),
        Command::Run { fixtures } => cmd_run(&fixtures),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_MISMATCH),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_check(actual: &Path, pattern: &Path, options: MatchOptions) -> Result<bool> {
    let actual = load_document(actual)?;
    let pattern = load_document(pattern)?;
    debug!(?options, "comparing documents");

    let matched = Matcher::new(options).matches(&actual, &pattern);
    println!("{}", if matched { "match" } else { "no match" });
    Ok(matched)
}

fn cmd_run(paths: &[PathBuf]) -> Result<bool> {
    let mut failed = 0usize;
    let mut total = 0usize;

    for path in paths {
        for fixture in Fixture::from_path(path)? {
            for result in fixture.run() {
                total += 1;
                if result.passed {
                    println!("PASS {} :: {}", fixture.name, result.case_name);
                } else {
                    failed += 1;
                    println!(
                        "FAIL {} :: {} (expected {}, got {})",
                        fixture.name, result.case_name, result.expected, result.actual
                    );
                }
            }
        }
    }

    println!("\n{} passed, {failed} failed", total - failed);
    Ok(failed == 0)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Document loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read \"{}\"", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("JSON parse error in \"{}\"", path.display()))
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content)
            .with_context(|| format!("YAML parse error in \"{}\"", path.display()))
    }
}
