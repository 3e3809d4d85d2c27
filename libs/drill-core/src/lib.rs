//! Session engine for timed vocabulary drills.
//!
//! Provides:
//! - Delimited-text reader for study set files
//! - Validation of raw rows into a word set
//! - Answer classification (exact, near miss, wrong, blank)
//! - Timed study sessions with forced re-typing on failure

pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod types;
pub mod validator;

pub use error::{LoadError, Result, SessionError};
pub use matching::{classify, classify_with, mismatch_count, Verdict};
pub use parser::parse_rows;
pub use session::clock::{percent_learned, pretty_time_delta, Clock, SessionClock, SystemClock};
pub use session::grading::{force_retype, grade_answer, Interaction};
pub use session::{study, RoundResult, SessionReport, SessionStatus, StudySession};
pub use types::{DrillSettings, Entity, Field, RawRow, WordSet, FIELD_COUNT};
pub use validator::{validate, validate_rows};

/// Read and validate a study set from delimited text.
///
/// Schema errors name the line of the offending row in `content`.
pub fn load(content: &str) -> Result<WordSet> {
    validate_rows(parse_rows(content)?)
}
