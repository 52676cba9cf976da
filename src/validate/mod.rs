//! Validation engine for candidate card numbers.
//!
//! Three cooperating pieces, composed by [`engine::Validator`]:
//! - `grammar`: backtrack-free structural matching (automaton-based)
//! - `repeats`: explicit linear scan for repeated-digit runs
//! - `baseline`: the whole rule as one backtracking pattern, kept only to
//!   cross-check the linear pipeline
//!
//! The rule is split in two so that worst-case validation time stays
//! linear in the token length: folding the repetition constraint into a
//! single pattern would require backreferences, and with them a
//! backtracking engine.

pub mod baseline;
pub mod engine;
pub mod grammar;
pub mod repeats;


pub use engine::{REPEAT_LIMIT, Validator, Verdict};
pub use grammar::CompiledGrammar;
pub use repeats::has_run_of;
