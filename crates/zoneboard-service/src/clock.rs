//! Wall-clock abstraction and pure time-computation helpers.
//!
//! Record times are always computed against an instant supplied by a
//! [`Clock`], so tests can inject a fixed instant instead of depending on
//! real wall-clock time.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use zoneboard_core::types::TimeFormat;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ## Summary
/// Formats the local time in `tz` at the instant `at`.
///
/// Pure: identical `(tz, at, format)` inputs always produce identical output.
/// The twelve-hour rendering matches the `en-US` `Intl` output the original
/// UI displayed (`3:05 PM`), the twenty-four-hour rendering is `15:05`.
#[must_use]
pub fn format_local_time(tz: Tz, at: DateTime<Utc>, format: TimeFormat) -> String {
    let local = at.with_timezone(&tz);
    match format {
        TimeFormat::TwelveHour => local.format("%-I:%M %p").to_string(),
        TimeFormat::TwentyFourHour => local.format("%H:%M").to_string(),
    }
}

/// ## Summary
/// Minutes elapsed since local midnight in `tz` at the instant `at`.
///
/// This is the sort key for time-ordered listings: it wraps once per 24h
/// cycle, so zones just past their midnight sort before zones late in
/// their day.
#[must_use]
pub fn minutes_since_midnight(tz: Tz, at: DateTime<Utc>) -> u32 {
    let local = at.with_timezone(&tz);
    local.hour() * 60 + local.minute()
}
