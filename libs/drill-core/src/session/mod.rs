//! Timed study session: round selection, mastery tracking and termination.

pub mod clock;
pub mod grading;

use crate::error::SessionError;
use crate::types::{DrillSettings, Entity, Field, WordSet};
use clock::{percent_learned, pretty_time_delta, Clock, SessionClock};
use grading::{grade_answer, Interaction};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    /// Every entity was mastered.
    Completed,
    /// The time budget ran out first.
    Expired,
}

/// Final statistics of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub outcome: SessionStatus,
    pub original_size: usize,
    pub mastered_count: usize,
    pub rounds: usize,
    pub percent_learned: u32,
    pub elapsed_secs: i64,
    pub remaining_secs: i64,
}

impl SessionReport {
    /// Closing line shown to the user.
    pub fn summary(&self) -> String {
        match self.outcome {
            SessionStatus::Completed => format!(
                "You have completed this set! (with {} remaining)",
                pretty_time_delta(self.remaining_secs)
            ),
            _ => format!(
                "Time is up. You have reached a learn rate of {}% for this set.",
                self.percent_learned
            ),
        }
    }
}

/// Result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub base_accepted: bool,
    /// Inflected field asked, if the base form was accepted.
    pub field: Option<Field>,
    pub mastered: bool,
}

/// State of one study session over a word set.
///
/// The word set stays untouched; mastery removes an entity's index from the
/// active working set.
pub struct StudySession<'a, C: Clock> {
    words: &'a WordSet,
    settings: DrillSettings,
    clock: C,
    timer: SessionClock,
    active: Vec<usize>,
    mastered_count: usize,
    round_index: usize,
    status: SessionStatus,
}

impl<'a, C: Clock> StudySession<'a, C> {
    pub fn new(words: &'a WordSet, settings: DrillSettings, clock: C) -> Self {
        let timer = SessionClock::start(clock.now(), words.len(), settings.seconds_per_word);
        Self {
            words,
            settings,
            clock,
            timer,
            active: (0..words.len()).collect(),
            mastered_count: 0,
            round_index: 0,
            status: SessionStatus::Running,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn original_size(&self) -> usize {
        self.words.len()
    }

    /// Entities not yet mastered, in no particular order.
    pub fn remaining(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.active.iter().filter_map(|&idx| self.words.get(idx))
    }

    pub fn percent_learned(&self) -> u32 {
        percent_learned(self.mastered_count, self.original_size())
    }

    /// Run rounds until the set is mastered or time is up.
    pub fn run<I, R>(&mut self, io: &mut I, rng: &mut R) -> Result<SessionReport, SessionError>
    where
        I: Interaction + ?Sized,
        R: Rng,
    {
        io.display("")?;
        io.display(&format!(
            "Study set contains {} words. Study time for this set is {}",
            self.original_size(),
            pretty_time_delta(self.timer.budget_secs())
        ))?;
        tracing::info!(
            words = self.original_size(),
            budget_secs = self.timer.budget_secs(),
            "study session started"
        );

        while self.status == SessionStatus::Running {
            let now = self.clock.now();
            if self.timer.is_expired(now) {
                self.status = SessionStatus::Expired;
                break;
            }

            io.display("")?;
            io.display(&format!(
                "Step {} - {} remaining ({}% learned)",
                self.round_index + 1,
                pretty_time_delta(self.timer.remaining_secs(now)),
                self.percent_learned()
            ))?;

            self.play_round(io, rng)?;
        }

        let report = self.report();
        tracing::info!(
            outcome = ?report.outcome,
            mastered = report.mastered_count,
            rounds = report.rounds,
            percent = report.percent_learned,
            "study session finished"
        );
        io.display("")?;
        io.display(&report.summary())?;
        Ok(report)
    }

    /// Play a single round and update mastery and status.
    pub fn play_round<I, R>(&mut self, io: &mut I, rng: &mut R) -> Result<RoundResult, SessionError>
    where
        I: Interaction + ?Sized,
        R: Rng,
    {
        if self.active.is_empty() {
            self.status = SessionStatus::Completed;
        }
        if self.status != SessionStatus::Running {
            return Ok(RoundResult {
                base_accepted: false,
                field: None,
                mastered: false,
            });
        }

        let slot = rng.random_range(0..self.active.len());
        let words = self.words;
        let entity = &words.entities()[self.active[slot]];
        self.round_index += 1;
        tracing::debug!(round = self.round_index, word = entity.key(), "selected word");

        let near_miss = self.settings.near_miss_mismatches;
        let base_prompt = format!("{}:", entity.get(Field::BaseSource));
        let base_accepted = self.ask(io, &base_prompt, entity.get(Field::BaseTarget), near_miss)?;

        let mut result = RoundResult {
            base_accepted,
            field: None,
            mastered: false,
        };

        if base_accepted {
            let field = Field::INFLECTED[rng.random_range(0..Field::INFLECTED.len())];
            result.field = Some(field);
            if self.ask(io, field.label(), entity.get(field), near_miss)? {
                self.active.swap_remove(slot);
                self.mastered_count += 1;
                result.mastered = true;
                tracing::info!(word = entity.key(), mastered = self.mastered_count, "word mastered");
            }
        }

        if self.active.is_empty() {
            self.status = SessionStatus::Completed;
        }

        Ok(result)
    }

    fn ask<I: Interaction + ?Sized>(
        &self,
        io: &mut I,
        prompt: &str,
        expected: &str,
        near_miss: usize,
    ) -> Result<bool, SessionError> {
        let before = self.clock.now();
        let accepted = grade_answer(io, prompt, expected, true, near_miss)?;
        let after = self.clock.now();
        tracing::trace!(
            prompt,
            accepted,
            answer_secs = (after - before).num_seconds(),
            remaining_secs = self.timer.remaining_secs(after),
            "prompt answered"
        );
        Ok(accepted)
    }

    /// Snapshot of the current statistics.
    pub fn report(&self) -> SessionReport {
        let now = self.clock.now();
        SessionReport {
            outcome: self.status,
            original_size: self.original_size(),
            mastered_count: self.mastered_count,
            rounds: self.round_index,
            percent_learned: self.percent_learned(),
            elapsed_secs: self.timer.elapsed_secs(now),
            remaining_secs: self.timer.remaining_secs(now),
        }
    }
}

/// Run a full study session over `words`.
pub fn study<I, C, R>(
    words: &WordSet,
    settings: DrillSettings,
    io: &mut I,
    clock: C,
    rng: &mut R,
) -> Result<SessionReport, SessionError>
where
    I: Interaction + ?Sized,
    C: Clock,
    R: Rng,
{
    StudySession::new(words, settings, clock).run(io, rng)
}
