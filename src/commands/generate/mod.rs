//! Implementation of the `cardlint generate` command.
//!
//! Emits a synthetic batch in the same line-oriented shape the `check`
//! command consumes: a count line, then one candidate per line. Each
//! candidate is 16 uniform random digits; roughly a third are rendered as
//! four hyphen-separated groups. Candidates are card-number-*shaped*, not
//! guaranteed `Valid` — the first digit and repeated runs are left to
//! chance, which is the point: this is benchmark input for the engine,
//! not a card number factory.


use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cli::GenerateArgs;
use crate::error::{CardlintError, Result};

/// Execute the `cardlint generate` command.
///
/// # Exit Codes
///
/// - 0: Batch written
/// - 1: User error (output path cannot be created)
/// - 3: Write failure mid-run
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                CardlintError::UserError(format!(
                    "cannot create output file '{}': {}",
                    path.display(),
                    err
                ))
            })?;
            write_batch(BufWriter::new(file), args.count, seed)
        }
        None => {
            let stdout = io::stdout();
            write_batch(BufWriter::new(stdout.lock()), args.count, seed)
        }
    }
}

/// Write a full synthetic batch: count line, then `count` candidates.
fn write_batch<W: Write>(mut writer: W, count: usize, seed: u64) -> Result<()> {
    let mut rng = SplitMix64::new(seed);

    writeln!(writer, "{count}")?;
    for _ in 0..count {
        writeln!(writer, "{}", candidate(&mut rng))?;
    }
    writer.flush()?;
    Ok(())
}

/// One random candidate: 16 uniform digits, hyphenated into groups of
/// four with probability 1/3.
fn candidate(rng: &mut SplitMix64) -> String {
    let mut digits = String::with_capacity(19);
    for _ in 0..16 {
        digits.push(char::from(b'0' + (rng.next_u64() % 10) as u8));
    }

    if rng.next_u64() % 3 != 0 {
        return digits;
    }

    let mut grouped = String::with_capacity(19);
    for (i, chunk) in digits.as_bytes().chunks(4).enumerate() {
        if i > 0 {
            grouped.push('-');
        }
        for &byte in chunk {
            grouped.push(char::from(byte));
        }
    }
    grouped
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

/// Small deterministic PRNG (splitmix64). Statistical quality is plenty
/// for synthetic test data, and a fixed seed reproduces a batch exactly.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
