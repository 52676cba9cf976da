//! Implementation of the `cardlint check` command.
//!
//! Wires the batch processor to the process streams: opens the input
//! (stdin or a file), locks stdout for the verdict stream, and writes the
//! optional JSON summary report once the batch completes. All validation
//! semantics live in `validate` and `batch`; this module only does I/O
//! plumbing and error shaping.

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::batch::{BatchSummary, run_batch};
use crate::cli::CheckArgs;
use crate::error::{CardlintError, Result};
use crate::validate::Validator;

/// Execute the `cardlint check` command.
///
/// # Exit Codes
///
/// - 0: Batch processed (verdicts written, whatever they were)
/// - 1: User error (unreadable input file, unwritable report path)
/// - 2: Input framing error (bad count line, short read)
/// - 3: I/O failure mid-run
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let validator = Validator::new();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = check_into(&args, &validator, &mut out)?;
    out.flush()?;

    if let Some(path) = &args.report {
        write_report(path, &summary)?;
    }
    Ok(())
}

/// Run the batch from the configured input into `out`.
///
/// Split from [`cmd_check`] so tests can capture the verdict stream.
fn check_into<W: Write>(args: &CheckArgs, validator: &Validator, out: W) -> Result<BatchSummary> {
    match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                CardlintError::UserError(format!(
                    "cannot open input file '{}': {}",
                    path.display(),
                    err
                ))
            })?;
            run_batch(validator, BufReader::new(file), out, args.compare_baseline)
        }
        None => {
            let stdin = io::stdin();
            run_batch(validator, stdin.lock(), out, args.compare_baseline)
        }
    }
}

/// Write the JSON summary report.
fn write_report(path: &Path, summary: &BatchSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|err| {
        CardlintError::UserError(format!("cannot serialize report: {err}"))
    })?;
    std::fs::write(path, json + "\n").map_err(|err| {
        CardlintError::UserError(format!(
            "cannot write report '{}': {}",
            path.display(),
            err
        ))
    })
}
