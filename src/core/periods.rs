//! Teaching period catalog and wall-clock ↔ period conversion
//!
//! The day is split into 14 fixed periods with gaps for the morning break,
//! lunch, and the evening break. The catalog below is the only source of
//! period boundaries; conversions are ordered table lookups, never
//! arithmetic on minutes-per-period.

use crate::core::models::PeriodRange;
use std::fmt;

/// Number of teaching periods per day
pub const PERIOD_COUNT: usize = 14;

/// Wall-clock time of day (24h)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

impl ClockTime {
    /// Create a clock time (no range checking; callers pass catalog values)
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    const fn minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One teaching period: inclusive `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// 1-based period index
    pub index: u8,
    /// Start time (inclusive)
    pub start: ClockTime,
    /// End time (inclusive)
    pub end: ClockTime,
}

impl Period {
    const fn new(index: u8, start: (u8, u8), end: (u8, u8)) -> Self {
        Self {
            index,
            start: ClockTime::new(start.0, start.1),
            end: ClockTime::new(end.0, end.1),
        }
    }

    const fn contains(&self, minutes: u16) -> bool {
        self.start.minutes() <= minutes && minutes <= self.end.minutes()
    }

    /// `"HH:MM → HH:MM"`
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{} → {}", self.start, self.end)
    }
}

static PERIODS: [Period; PERIOD_COUNT] = [
    Period::new(1, (7, 0), (7, 50)),
    Period::new(2, (7, 50), (8, 40)),
    Period::new(3, (9, 0), (9, 50)),
    Period::new(4, (9, 50), (10, 40)),
    Period::new(5, (10, 40), (11, 30)),
    Period::new(6, (12, 30), (13, 20)),
    Period::new(7, (13, 20), (14, 10)),
    Period::new(8, (14, 30), (15, 20)),
    Period::new(9, (15, 20), (16, 10)),
    Period::new(10, (16, 10), (17, 0)),
    Period::new(11, (17, 30), (18, 15)),
    Period::new(12, (18, 15), (19, 0)),
    Period::new(13, (19, 10), (19, 55)),
    Period::new(14, (19, 55), (20, 40)),
];

/// The full period catalog in order
#[must_use]
pub fn catalog() -> &'static [Period; PERIOD_COUNT] {
    &PERIODS
}

/// Look up a period by its 1-based index
#[must_use]
pub fn period(index: u8) -> Option<&'static Period> {
    PERIODS.get(usize::from(index).checked_sub(1)?)
}

/// Map a time of day to a period.
///
/// Scans periods in order: a time inside `[start, end]` maps to that period
/// (a shared edge such as 07:50 resolves to the earlier period); a time in the
/// gap before the next period rounds up to that next period; a time after the
/// last period maps to 14; anything earlier than the first period maps to 1.
#[must_use]
pub fn time_to_period(hour: u8, minute: u8) -> u8 {
    let t = ClockTime::new(hour, minute).minutes();

    for (idx, period) in PERIODS.iter().enumerate() {
        if period.contains(t) {
            return period.index;
        }
        if let Some(next) = PERIODS.get(idx + 1) {
            if period.end.minutes() < t && t < next.start.minutes() {
                return next.index;
            }
        }
    }

    let last = &PERIODS[PERIOD_COUNT - 1];
    if t > last.end.minutes() {
        return last.index;
    }
    1
}

/// `"HH:MM → HH:MM"` for a period index, or `None` outside 1–14
#[must_use]
pub fn period_time_label(index: u8) -> Option<String> {
    period(index).map(Period::time_label)
}

/// `"HH:MM → HH:MM"` for a period index.
///
/// Callers must pass an index in 1–14; anything else yields an empty string.
#[must_use]
pub fn period_to_time_label(index: u8) -> String {
    period_time_label(index).unwrap_or_default()
}

/// Parse `"HH:MM"`, `"H:MM"` or `"HHhMM"` into `(hour, minute)`
#[must_use]
pub fn parse_clock(value: &str) -> Option<(u8, u8)> {
    let value = value.trim();
    let (hour, minute) = value
        .split_once(':')
        .or_else(|| value.split_once(['h', 'H']))?;
    let hour: u8 = hour.trim().parse().ok()?;
    let minute: u8 = if minute.trim().is_empty() {
        0
    } else {
        minute.trim().parse().ok()?
    };
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Map a wall-clock span to the periods it covers, using [`time_to_period`]
/// on both ends
#[must_use]
pub fn period_range_for_times(start: &str, end: &str) -> Option<PeriodRange> {
    let (sh, sm) = parse_clock(start)?;
    let (eh, em) = parse_clock(end)?;
    PeriodRange::new(time_to_period(sh, sm), time_to_period(eh, em))
}
