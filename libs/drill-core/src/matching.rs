//! Answer classification for typed prompts.

use serde::{Deserialize, Serialize};

/// Mismatch count up to which an answer still counts as a near miss.
pub const NEAR_MISS_MISMATCHES: usize = 2;

/// Outcome of comparing a typed answer to the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Exact match, case and accent sensitive.
    Correct,
    /// Close enough to earn one more attempt.
    NearMiss,
    Wrong,
    /// Empty input: the user gives up on this prompt.
    Blank,
}

/// Classify an answer using the default near-miss threshold.
pub fn classify(actual: &str, expected: &str) -> Verdict {
    classify_with(actual, expected, NEAR_MISS_MISMATCHES)
}

/// Classify an answer, treating up to `max_mismatches` differing positions as a near miss.
pub fn classify_with(actual: &str, expected: &str, max_mismatches: usize) -> Verdict {
    if actual == expected {
        Verdict::Correct
    } else if actual.is_empty() {
        Verdict::Blank
    } else if mismatch_count(actual, expected) <= max_mismatches {
        Verdict::NearMiss
    } else {
        Verdict::Wrong
    }
}

/// Count differing character positions up to the length of the shorter string.
///
/// Characters past the shorter length are not counted, so `"j'a rompu"` vs
/// `"j'ai rompu"` scores high while `"abc"` vs `"abcdef"` scores zero.
pub fn mismatch_count(actual: &str, expected: &str) -> usize {
    actual
        .chars()
        .zip(expected.chars())
        .filter(|(a, e)| a != e)
        .count()
}
