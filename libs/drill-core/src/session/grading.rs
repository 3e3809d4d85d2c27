//! Answer grading protocol for a single prompt.

use crate::matching::{classify_with, Verdict};
use std::io;

/// User-facing input and output consumed by the session.
pub trait Interaction {
    /// Show `label` and block until the user enters one line.
    fn prompt(&mut self, label: &str) -> io::Result<String>;

    /// Show one line of output.
    fn display(&mut self, message: &str) -> io::Result<()>;
}

/// Label of the forced re-typing prompt.
pub const REPEAT_LABEL: &str = "Repeat:";

/// Ask one prompt and grade the reply.
///
/// A near miss earns a second attempt when `allow_retry` is set, never more
/// than one. Every failure ends in [`force_retype`]. Returns whether the
/// answer was accepted.
pub fn grade_answer<I: Interaction + ?Sized>(
    io: &mut I,
    prompt: &str,
    expected: &str,
    allow_retry: bool,
    near_miss_mismatches: usize,
) -> io::Result<bool> {
    let max_attempts = if allow_retry { 2 } else { 1 };
    let mut attempt = 1;

    loop {
        let actual = io.prompt(prompt)?;
        let verdict = classify_with(&actual, expected, near_miss_mismatches);
        tracing::trace!(attempt, ?verdict, "graded answer");

        match verdict {
            Verdict::Correct => return Ok(true),
            Verdict::Blank => {
                io.display(&format!("Skipping - correct answer: {expected}"))?;
                force_retype(io, expected)?;
                return Ok(false);
            }
            Verdict::NearMiss if attempt < max_attempts => {
                io.display("Close... try again")?;
                attempt += 1;
            }
            Verdict::NearMiss | Verdict::Wrong => {
                io.display(&format!("Nope - correct answer: {expected}"))?;
                force_retype(io, expected)?;
                return Ok(false);
            }
        }
    }
}

/// Block until the user has typed `expected` exactly.
///
/// There is no time limit and no way to skip.
pub fn force_retype<I: Interaction + ?Sized>(io: &mut I, expected: &str) -> io::Result<()> {
    let mut tries = 0u32;
    while io.prompt(REPEAT_LABEL)? != expected {
        tries += 1;
    }
    tracing::trace!(tries, "re-typed answer");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    /// Replays canned answers and records every prompt and message.
    #[derive(Debug, Default)]
    pub(crate) struct Script {
        pub answers: VecDeque<String>,
        pub prompts: Vec<String>,
        pub messages: Vec<String>,
    }

    impl Script {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl Interaction for Script {
        fn prompt(&mut self, label: &str) -> io::Result<String> {
            self.prompts.push(label.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn display(&mut self, message: &str) -> io::Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn correct_first_try() {
        let mut io = Script::new(&["vais"]);
        assert!(grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(io.prompts, vec!["je"]);
        assert!(io.messages.is_empty());
    }

    #[test]
    fn near_miss_then_correct_is_accepted() {
        let mut io = Script::new(&["vois", "vais"]);
        assert!(grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(io.prompts, vec!["je", "je"]);
        assert_eq!(io.messages, vec!["Close... try again"]);
    }

    #[test]
    fn two_near_misses_force_retype() {
        let mut io = Script::new(&["vois", "veis", "nope", "vais"]);
        assert!(!grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(io.prompts, vec!["je", "je", "Repeat:", "Repeat:"]);
        assert_eq!(
            io.messages,
            vec!["Close... try again", "Nope - correct answer: vais"]
        );
        assert!(io.answers.is_empty());
    }

    #[test]
    fn near_miss_without_retry_fails_at_once() {
        let mut io = Script::new(&["vois", "vais"]);
        assert!(!grade_answer(&mut io, "je", "vais", false, 2).unwrap());
        assert_eq!(io.prompts, vec!["je", "Repeat:"]);
        assert_eq!(io.messages, vec!["Nope - correct answer: vais"]);
    }

    #[test]
    fn wrong_answer_forces_retype() {
        let mut io = Script::new(&["xyzw", "vais"]);
        assert!(!grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(io.messages, vec!["Nope - correct answer: vais"]);
    }

    #[test]
    fn blank_answer_skips_and_forces_retype() {
        let mut io = Script::new(&["", "", "Vais", "vais"]);
        assert!(!grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(io.messages, vec!["Skipping - correct answer: vais"]);
        assert_eq!(io.prompts, vec!["je", "Repeat:", "Repeat:", "Repeat:"]);
    }

    #[test]
    fn blank_on_second_attempt_skips() {
        let mut io = Script::new(&["vois", "", "vais"]);
        assert!(!grade_answer(&mut io, "je", "vais", true, 2).unwrap());
        assert_eq!(
            io.messages,
            vec!["Close... try again", "Skipping - correct answer: vais"]
        );
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut io = Script::new(&["wrong answer"]);
        let err = grade_answer(&mut io, "je", "vais", true, 2).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
