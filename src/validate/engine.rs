//! Verdict type and the authoritative validation pipeline.

use std::fmt;

use super::grammar::CompiledGrammar;
use super::repeats::has_run_of;

/// A run of this many identical digits (hyphens skipped) makes a token
/// invalid.
pub const REPEAT_LIMIT: usize = 4;

/// Outcome of validating a single token. There are no partial or graded
/// verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => f.write_str("Valid"),
            Verdict::Invalid => f.write_str("Invalid"),
        }
    }
}

/// The validation engine: compiled structural grammar plus repetition rule.
///
/// Owns the compiled pattern so construction cost is paid once per
/// process, not per token. Create one instance and share it by reference;
/// validation is a read-only traversal and the engine holds no mutable
/// state, so a shared instance is safe across threads.
#[derive(Debug, Default)]
pub struct Validator {
    grammar: CompiledGrammar,
}

impl Validator {
    /// Build a validator with the grammar compiled ahead of use.
    pub fn new() -> Self {
        Self {
            grammar: CompiledGrammar::new(),
        }
    }

    /// Validate one token.
    ///
    /// `Valid` iff the token matches the structural grammar AND contains
    /// no run of [`REPEAT_LIMIT`] identical digits. This composition is
    /// the single authoritative validation rule; no other code path
    /// decides validity. Total over arbitrary byte sequences.
    pub fn validate(&self, token: &[u8]) -> Verdict {
        if self.grammar.matches(token) && !has_run_of(token, REPEAT_LIMIT) {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}
