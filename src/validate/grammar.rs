//! Structural grammar for candidate card numbers.
//!
//! The grammar is fixed for the lifetime of the process: a leading digit in
//! {4, 5, 6}, sixteen ASCII digits total, grouped 4-4-4-4 with at most one
//! hyphen between adjacent groups and no separator anywhere else. It is
//! matched with an anchored pattern on the `regex` bytes engine, which
//! compiles to a finite automaton: no backtracking, worst-case matching
//! time linear in the token length. The repeated-digit rule is *not* part
//! of this grammar — expressing it in a single pattern requires
//! backreferences, which automaton engines cannot provide (see
//! `validate::repeats` and `validate::baseline`).

use regex::bytes::Regex;

/// Anchored structural pattern. The anchors make the match span the whole
/// token, so leading or trailing noise is rejected.
const STRUCTURAL_PATTERN: &str = r"^[456][0-9]{3}(?:-?[0-9]{4}){3}$";

/// Compiled structural grammar.
///
/// Compile once and reuse across all tokens; the compiled automaton is
/// immutable and `Sync`, so one instance can serve any number of
/// concurrent validations without synchronization.
#[derive(Debug)]
pub struct CompiledGrammar {
    pattern: Regex,
}

impl CompiledGrammar {
    /// Compile the structural pattern.
    pub fn new() -> Self {
        // The pattern is a fixed constant; it cannot fail to compile at
        // runtime for any input.
        let pattern = Regex::new(STRUCTURAL_PATTERN).expect("structural pattern must compile");
        Self { pattern }
    }

    /// Whether `token` conforms to the structural grammar.
    ///
    /// Total over arbitrary byte sequences: empty tokens, embedded NUL and
    /// non-ASCII bytes all simply fail to match. The bytes API never
    /// requires valid UTF-8.
    pub fn matches(&self, token: &[u8]) -> bool {
        self.pattern.is_match(token)
    }
}

impl Default for CompiledGrammar {
    fn default() -> Self {
        Self::new()
    }
}
