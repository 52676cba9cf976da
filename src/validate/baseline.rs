//! Single-pattern backtracking matcher, kept as a comparison baseline.
//!
//! The entire validation rule — structural grammar plus the repeated-digit
//! constraint — can be written as one pattern if the pattern language has
//! a negative lookahead and a backreference:
//!
//! ```text
//! ^(?!.*(\d)(-?\1){3})[456]\d{3}(-?\d{4}){3}$
//! ```
//!
//! The lookahead refuses any token in which some digit is followed, across
//! optional single hyphens, by three more copies of itself; the rest is
//! the structural grammar. Backreferences are out of reach for
//! automaton-based engines, so this variant runs on a small recursive
//! backtracking matcher over a fixed node tree. Its worst-case time on
//! adversarial input is superlinear, which is exactly why it is NOT the
//! authoritative path: it exists to cross-check the linear pipeline
//! (`check --compare-baseline`) and as a performance baseline.
//!
//! Matching works continuation-style: each node consumes some bytes and
//! hands the resulting position to the rest of the pattern, retrying its
//! alternatives (shorter `.*` prefixes, skipped optionals) until the rest
//! succeeds or every alternative is exhausted. Capture state is saved and
//! restored around each alternative.

use std::sync::LazyLock;

/// Capture slots, indexed by group number. Group 0 is unused; this pattern
/// has a single capturing group.
type Caps = [Option<(usize, usize)>; 2];

/// Continuation invoked with the position after the current node matched.
type Cont<'a> = &'a dyn Fn(usize, &mut Caps) -> bool;

/// One node of the pattern tree.
enum Node {
    /// One byte out of a fixed set, e.g. `[456]`.
    OneOf(&'static [u8]),
    /// One ASCII digit, `\d`.
    Digit,
    /// One literal byte.
    Byte(u8),
    /// Zero or one occurrence, `?`.
    Opt(Box<Node>),
    /// Exactly `n` occurrences, `{n}`.
    Times(Box<Node>, usize),
    /// Nodes matched in order.
    Seq(Vec<Node>),
    /// Capturing group `(...)`, 1-based group number.
    Group(Box<Node>, usize),
    /// Backreference `\1`: the bytes the group captured, again.
    Backref(usize),
    /// Negative lookahead `(?!...)`: zero-width, succeeds iff the inner
    /// pattern does not match here.
    NotAhead(Box<Node>),
    /// `.*`: any number of arbitrary bytes.
    AnyStar,
}

/// `^(?!.*(\d)(-?\1){3})[456]\d{3}(-?\d{4}){3}$` as a node tree. The `^`
/// and `$` anchors live in [`matches`], which starts at position 0 and
/// requires the match to end at the token's end.
static CARD_PATTERN: LazyLock<Node> = LazyLock::new(|| {
    Node::Seq(vec![
        Node::NotAhead(Box::new(Node::Seq(vec![
            Node::AnyStar,
            Node::Group(Box::new(Node::Digit), 1),
            Node::Times(
                Box::new(Node::Seq(vec![
                    Node::Opt(Box::new(Node::Byte(b'-'))),
                    Node::Backref(1),
                ])),
                3,
            ),
        ]))),
        Node::OneOf(b"456"),
        Node::Times(Box::new(Node::Digit), 3),
        Node::Times(
            Box::new(Node::Seq(vec![
                Node::Opt(Box::new(Node::Byte(b'-'))),
                Node::Times(Box::new(Node::Digit), 4),
            ])),
            3,
        ),
    ])
});

/// Whether `token` as a whole satisfies the single-pattern formulation of
/// the validation rule.
///
/// Agrees with the composed pipeline (`CompiledGrammar::matches` +
/// `!has_run_of(.., 4)`) on every byte sequence; the property tests assert
/// this. Total and panic-free, but not linear-time — do not use it to
/// decide verdicts.
pub fn matches(token: &[u8]) -> bool {
    let mut caps: Caps = [None; 2];
    match_node(&CARD_PATTERN, token, 0, &mut caps, &|pos: usize, _: &mut Caps| {
        pos == token.len()
    })
}

fn match_node(node: &Node, text: &[u8], pos: usize, caps: &mut Caps, k: Cont<'_>) -> bool {
    match node {
        Node::OneOf(set) => pos < text.len() && set.contains(&text[pos]) && k(pos + 1, caps),
        Node::Digit => pos < text.len() && text[pos].is_ascii_digit() && k(pos + 1, caps),
        Node::Byte(expected) => pos < text.len() && text[pos] == *expected && k(pos + 1, caps),
        Node::Opt(inner) => {
            let saved = *caps;
            if match_node(inner, text, pos, caps, k) {
                return true;
            }
            *caps = saved;
            k(pos, caps)
        }
        Node::Times(inner, n) => match_times(inner, *n, text, pos, caps, k),
        Node::Seq(nodes) => match_seq(nodes, text, pos, caps, k),
        Node::Group(inner, group) => {
            let start = pos;
            let group = *group;
            match_node(inner, text, pos, caps, &|end: usize, caps: &mut Caps| {
                let saved = caps[group];
                caps[group] = Some((start, end));
                if k(end, caps) {
                    true
                } else {
                    caps[group] = saved;
                    false
                }
            })
        }
        Node::Backref(group) => match caps[*group] {
            Some((start, end)) => {
                let captured = &text[start..end];
                text[pos..].starts_with(captured) && k(pos + captured.len(), caps)
            }
            // An unmatched group backreferences the empty string.
            None => k(pos, caps),
        },
        Node::NotAhead(inner) => {
            let mut probe = *caps;
            if match_node(inner, text, pos, &mut probe, &|_: usize, _: &mut Caps| true) {
                return false;
            }
            k(pos, caps)
        }
        Node::AnyStar => {
            let saved = *caps;
            for end in pos..=text.len() {
                if k(end, caps) {
                    return true;
                }
                *caps = saved;
            }
            false
        }
    }
}

fn match_seq(nodes: &[Node], text: &[u8], pos: usize, caps: &mut Caps, k: Cont<'_>) -> bool {
    match nodes.split_first() {
        None => k(pos, caps),
        Some((head, rest)) => {
            match_node(head, text, pos, caps, &|next: usize, caps: &mut Caps| {
                match_seq(rest, text, next, caps, k)
            })
        }
    }
}

fn match_times(inner: &Node, n: usize, text: &[u8], pos: usize, caps: &mut Caps, k: Cont<'_>) -> bool {
    if n == 0 {
        k(pos, caps)
    } else {
        match_node(inner, text, pos, caps, &|next: usize, caps: &mut Caps| {
            match_times(inner, n - 1, text, next, caps, k)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_tokens() {
        assert!(matches(b"6345093243215543"));
        assert!(matches(b"4908-1573-6339-2872"));
        assert!(matches(b"4123456789123456"));
        assert!(matches(b"5123-4567-8912-3456"));
    }

    #[test]
    fn rejects_repeated_digit_runs() {
        assert!(!matches(b"4444-5555-6666-7777"));
        assert!(!matches(b"4444567890123456"));
        // Run crosses the hyphen boundary.
        assert!(!matches(b"5044-4420-8173-7744"));
        // Run at the very end of the token.
        assert!(!matches(b"5123-4567-8912-3333"));
    }

    #[test]
    fn three_in_a_row_is_still_fine() {
        assert!(matches(b"4443567890123456"));
        assert!(matches(b"4443-5678-9012-3456"));
    }

    #[test]
    fn four_in_a_row_across_one_group_is_not() {
        // "5133" + "3367": four 3s once the separator is skipped.
        assert!(!matches(b"5133-3367-8912-3456"));
    }

    #[test]
    fn rejects_structural_violations() {
        assert!(!matches(b"3081-2855-9842-8003")); // leading digit
        assert!(!matches(b"511898531667435")); // 15 digits
        assert!(!matches(b"54910-987-2578-3904")); // group of 5
        assert!(!matches(b"5491-0987-2578-3904-")); // trailing hyphen
        assert!(!matches(b"-5491-0987-2578-3904")); // leading hyphen
        assert!(!matches(b"4123--4567-8912-3456")); // adjacent hyphens
        assert!(!matches(b"6O438I4033277914")); // non-digits
    }

    #[test]
    fn total_over_arbitrary_bytes() {
        assert!(!matches(b""));
        assert!(!matches(b"\x00\x00\x00\x00"));
        assert!(!matches(&[0xff; 32]));
    }
}
