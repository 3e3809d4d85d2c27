//! Session time budget and progress accounting.

use chrono::{DateTime, Duration, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed budget and deadline of one session.
///
/// Time is re-sampled from the clock whenever it is asked for; nothing ticks
/// in the background.
#[derive(Debug, Clone)]
pub struct SessionClock {
    start: DateTime<Utc>,
    deadline: DateTime<Utc>,
    budget_secs: i64,
}

impl SessionClock {
    /// Start a session of `word_count` words at `seconds_per_word` each.
    ///
    /// A budget reaching past the representable date range saturates at the
    /// latest representable deadline.
    pub fn start(now: DateTime<Utc>, word_count: usize, seconds_per_word: u32) -> Self {
        let budget_secs = i64::try_from(word_count)
            .unwrap_or(i64::MAX)
            .saturating_mul(i64::from(seconds_per_word));
        let deadline = Duration::try_seconds(budget_secs)
            .and_then(|budget| now.checked_add_signed(budget))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            start: now,
            deadline,
            budget_secs,
        }
    }

    pub fn budget_secs(&self) -> i64 {
        self.budget_secs
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Whole seconds left until the deadline; negative once it has passed.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline - now).num_seconds()
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.start).num_seconds()
    }

    /// True once no whole second of the budget is left.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) <= 0
    }
}

/// Share of the set mastered, as a whole percentage.
///
/// Rounds half to even and never reports 100 while any entity remains.
pub fn percent_learned(mastered: usize, original_size: usize) -> u32 {
    if original_size == 0 || mastered >= original_size {
        return 100;
    }
    let percent = (mastered as f64 / original_size as f64 * 100.0).round_ties_even() as u32;
    percent.min(99)
}

/// Format a signed number of seconds as a compact duration such as `1d1h1m1s`.
pub fn pretty_time_delta(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();

    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{sign}{days}d{hours}h{minutes}m{secs}s")
    } else if hours > 0 {
        format!("{sign}{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{secs}s")
    } else {
        format!("{sign}{secs}s")
    }
}
