//! Line-oriented batch processing.
//!
//! Framing contract: the first input line carries a non-negative integer
//! N, the next N lines each carry one candidate token, and exactly N
//! verdict lines are written in input order. Violating the framing
//! (missing or non-numeric count line, fewer lines than declared) is a
//! fatal error; a malformed *token* is not — it is data, and its verdict
//! is `Invalid`.
//!
//! Tokens are handled as raw bytes so that non-UTF-8 input flows through
//! the engine instead of failing the read.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::{CardlintError, Result};
use crate::validate::{Validator, Verdict, baseline};

/// Counts for one completed batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Tokens where the backtracking baseline disagreed with the
    /// authoritative pipeline. `None` unless the cross-check ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_mismatches: Option<usize>,
}

/// Process one batch: read the framing header and N tokens from `reader`,
/// write one verdict line per token to `writer`.
///
/// The validator is borrowed, not built here — the caller constructs it
/// once and may share it. With `compare_baseline` set, every token is also
/// run through the backtracking baseline matcher; disagreements are
/// counted and reported on stderr, but the emitted verdict always comes
/// from the authoritative pipeline.
pub fn run_batch<R: BufRead, W: Write>(
    validator: &Validator,
    mut reader: R,
    mut writer: W,
    compare_baseline: bool,
) -> Result<BatchSummary> {
    let count = read_count_line(&mut reader)?;

    let mut summary = BatchSummary {
        baseline_mismatches: compare_baseline.then_some(0),
        ..BatchSummary::default()
    };

    let mut line = Vec::new();
    for index in 0..count {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(CardlintError::InputError(format!(
                "expected {count} token lines, input ended after {index}"
            )));
        }

        let token = trim_line_terminator(&line);
        let verdict = validator.validate(token);
        match verdict {
            Verdict::Valid => summary.valid += 1,
            Verdict::Invalid => summary.invalid += 1,
        }
        summary.total += 1;

        if compare_baseline && baseline::matches(token) != (verdict == Verdict::Valid) {
            if let Some(mismatches) = summary.baseline_mismatches.as_mut() {
                *mismatches += 1;
            }
            // Line 1 is the count header.
            eprintln!(
                "warning: baseline matcher disagrees with pipeline on line {}",
                index + 2
            );
        }

        writeln!(writer, "{verdict}")?;
    }

    Ok(summary)
}

/// Read and parse the count header. Surrounding whitespace is tolerated;
/// anything that does not parse as a non-negative integer is fatal.
fn read_count_line<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        return Err(CardlintError::InputError("missing count line".to_string()));
    }

    let text = String::from_utf8_lossy(trim_line_terminator(&line));
    let text = text.trim();
    text.parse::<usize>().map_err(|_| {
        CardlintError::InputError(format!(
            "count line is not a non-negative integer: '{text}'"
        ))
    })
}

/// Strip one trailing `\n`, and a `\r` before it if present.
fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
