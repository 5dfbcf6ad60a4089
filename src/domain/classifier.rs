// Line classification
// Decides whether one raw input line holds exactly one signed decimal integer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Optional single `-` followed by ASCII digits and nothing else.
fn integer_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer token regex"))
}

/// Why a line was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    Blank,      // Empty or whitespace-only
    MultiToken, // Whitespace between two non-empty runs
    Malformed,  // Not of the form `-?[0-9]+`
    Overflow,   // Digit run does not fit in i64
}

/// Outcome of classifying one raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Value(i64),
    Rejected(Rejection),
}

impl Classification {
    pub fn value(self) -> Option<i64> {
        match self {
            Classification::Value(v) => Some(v),
            Classification::Rejected(_) => None,
        }
    }
}

/// Classify one raw line.
///
/// Leading and trailing whitespace is ignored, so `" 5 "` and `"\t-9\t\r"` are accepted.
/// A line is never partially parsed: `"5 7"` and `"5.0"` are rejected as a whole.
pub fn classify(raw_line: &str) -> Classification {
    let token = raw_line.trim();
    if token.is_empty() {
        return Classification::Rejected(Rejection::Blank);
    }
    if token.contains(char::is_whitespace) {
        return Classification::Rejected(Rejection::MultiToken);
    }
    if !integer_token_regex().is_match(token) {
        return Classification::Rejected(Rejection::Malformed);
    }

    match parse_digits(token) {
        Some(v) => Classification::Value(v),
        None => Classification::Rejected(Rejection::Overflow),
    }
}

/// Convert a token already known to match `-?[0-9]+`.
///
/// Negative tokens accumulate downwards so that `i64::MIN` is reachable.
fn parse_digits(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes() {
        let d = i64::from(b - b'0');
        acc = acc.checked_mul(10)?;
        acc = if negative {
            acc.checked_sub(d)?
        } else {
            acc.checked_add(d)?
        };
    }
    Some(acc)
}
