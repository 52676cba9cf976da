//! CLI argument parsing for cardlint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cardlint: linear-time validator for batches of candidate card numbers.
///
/// Input is line oriented: a count line followed by that many candidate
/// tokens, one per line. Every token gets a `Valid` or `Invalid` verdict
/// on stdout, in input order. Malformed tokens are never errors — only a
/// broken batch header or a short read is.
#[derive(Parser, Debug)]
#[command(name = "cardlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cardlint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a batch of candidate card numbers.
    ///
    /// Reads the count line and tokens from stdin (or a file), writes one
    /// verdict per token to stdout.
    Check(CheckArgs),

    /// Generate a synthetic batch for benchmarking.
    ///
    /// Emits the same line-oriented shape `check` consumes: a count line,
    /// then random card-number-shaped lines, roughly a third hyphenated.
    Generate(GenerateArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Input file. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Write a JSON summary of the run to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Cross-check every verdict against the backtracking baseline
    /// matcher and warn on disagreements. Diagnostic only; verdicts are
    /// always produced by the linear pipeline.
    #[arg(long)]
    pub compare_baseline: bool,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of candidate lines to generate.
    pub count: usize,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output. A clock-derived seed is used when
    /// omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
