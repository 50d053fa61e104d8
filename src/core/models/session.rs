//! Class session models: parsed portal sessions and user-entered custom sessions

use crate::core::error::ScheduleError;
use crate::core::models::Weekday;
use crate::core::periods::{self, PERIOD_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive period span `start..=end` within `1..=14`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRange {
    start: u8,
    end: u8,
}

impl PeriodRange {
    /// Build a range, rejecting reversed or out-of-catalog bounds
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Option<Self> {
        if start >= 1 && start <= end && end as usize <= PERIOD_COUNT {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Parse `"start-end"` (hyphen separated integers). A single integer is
    /// accepted as a one-period range.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.split_once('-') {
            Some((start, end)) => {
                Self::new(start.trim().parse().ok()?, end.trim().parse().ok()?)
            }
            None => {
                let single = value.parse().ok()?;
                Self::new(single, single)
            }
        }
    }

    /// First period
    #[must_use]
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Last period (inclusive)
    #[must_use]
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// Every period index in the range
    pub fn periods(&self) -> impl Iterator<Item = u8> {
        self.start..=self.end
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Anything that occupies timetable cells
pub trait SessionSlot {
    /// Day column
    fn day(&self) -> Weekday;

    /// Occupied periods
    fn periods(&self) -> PeriodRange;

    /// Text written into each occupied cell
    fn label(&self) -> String;

    /// Canonical `"day,start-end"` token, the join key between parsed and
    /// custom sessions
    fn slot_token(&self) -> String {
        format!("{},{}", self.day().label(), self.periods())
    }
}

fn cell_label(name: &str, room: &str) -> String {
    if room.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({room})")
    }
}

/// One class meeting parsed from the portal schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// 1-based line number in the source text
    pub row: usize,
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Instructor name (may be empty)
    pub instructor: String,
    /// Day column
    pub day: Weekday,
    /// Occupied periods
    pub periods: PeriodRange,
    /// Room label (may be empty)
    pub room: String,
}

impl SessionSlot for ClassSession {
    fn day(&self) -> Weekday {
        self.day
    }

    fn periods(&self) -> PeriodRange {
        self.periods
    }

    fn label(&self) -> String {
        cell_label(&self.name, &self.room)
    }
}

/// A class slot entered by the user rather than parsed from the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSession {
    /// Course name
    pub name: String,
    /// Room label (may be empty)
    pub room: String,
    /// Day column
    pub day: Weekday,
    /// Occupied periods
    pub periods: PeriodRange,
}

impl CustomSession {
    /// Create a custom session
    #[must_use]
    pub const fn new(name: String, room: String, day: Weekday, periods: PeriodRange) -> Self {
        Self {
            name,
            room,
            day,
            periods,
        }
    }

    /// Parse `"name|room|day|range"` where range is either periods (`"3-5"`)
    /// or wall-clock times (`"07:00-09:40"`).
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidCustomSession`] when a part is missing
    /// or cannot be interpreted.
    pub fn parse_spec(spec: &str) -> Result<Self, ScheduleError> {
        let invalid = |reason: &str| ScheduleError::InvalidCustomSession {
            input: spec.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = spec.split('|').map(str::trim).collect();
        let [name, room, day, range] = parts.as_slice() else {
            return Err(invalid("expected 4 '|'-separated parts: name|room|day|range"));
        };

        if name.is_empty() {
            return Err(invalid("course name is empty"));
        }
        let day = Weekday::from_label(day).ok_or_else(|| invalid("unknown weekday"))?;
        let periods = if range.contains(':') || range.contains('h') {
            let (start, end) = range
                .split_once('-')
                .ok_or_else(|| invalid("time range must look like 07:00-09:40"))?;
            periods::period_range_for_times(start, end)
                .ok_or_else(|| invalid("unreadable time range"))?
        } else {
            PeriodRange::parse(range).ok_or_else(|| invalid("period range must be within 1-14"))?
        };

        Ok(Self::new((*name).to_string(), (*room).to_string(), day, periods))
    }
}

impl SessionSlot for CustomSession {
    fn day(&self) -> Weekday {
        self.day
    }

    fn periods(&self) -> PeriodRange {
        self.periods
    }

    fn label(&self) -> String {
        cell_label(&self.name, &self.room)
    }
}

/// Caller-owned list of custom sessions. Each mutation is expected to be
/// followed by a fresh timetable build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSessions {
    sessions: Vec<CustomSession>,
}

impl CustomSessions {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Append a session
    pub fn add(&mut self, session: CustomSession) {
        self.sessions.push(session);
    }

    /// Remove the session at `index`, returning it if the index was valid
    pub fn remove(&mut self, index: usize) -> Option<CustomSession> {
        (index < self.sessions.len()).then(|| self.sessions.remove(index))
    }

    /// Remove all sessions
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    /// Session at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CustomSession> {
        self.sessions.get(index)
    }

    /// Number of sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CustomSession> {
        self.sessions.iter()
    }

    /// Indices of custom sessions whose slot token matches a parsed session,
    /// paired with that parsed session
    #[must_use]
    pub fn conflicts_with<'a>(
        &self,
        sessions: &'a [ClassSession],
    ) -> Vec<(usize, &'a ClassSession)> {
        self.sessions
            .iter()
            .enumerate()
            .filter_map(|(idx, custom)| {
                let token = custom.slot_token();
                sessions
                    .iter()
                    .find(|parsed| parsed.slot_token() == token)
                    .map(|parsed| (idx, parsed))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CustomSessions {
    type Item = &'a CustomSession;
    type IntoIter = std::slice::Iter<'a, CustomSession>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u8, end: u8) -> PeriodRange {
        PeriodRange::new(start, end).unwrap()
    }

    #[test]
    fn test_period_range_bounds() {
        assert!(PeriodRange::new(1, 14).is_some());
        assert!(PeriodRange::new(3, 3).is_some());
        assert!(PeriodRange::new(0, 2).is_none());
        assert!(PeriodRange::new(5, 4).is_none());
        assert!(PeriodRange::new(13, 15).is_none());
    }

    #[test]
    fn test_period_range_parse() {
        assert_eq!(PeriodRange::parse("1-3"), Some(range(1, 3)));
        assert_eq!(PeriodRange::parse(" 7 - 9 "), Some(range(7, 9)));
        assert_eq!(PeriodRange::parse("4"), Some(range(4, 4)));
        assert_eq!(PeriodRange::parse("3-1"), None);
        assert_eq!(PeriodRange::parse("a-b"), None);
        assert_eq!(PeriodRange::parse(""), None);
    }

    #[test]
    fn test_period_range_periods() {
        assert_eq!(range(2, 5).periods().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_labels_and_tokens() {
        let custom = CustomSession::new(
            "Gym".to_string(),
            String::new(),
            Weekday::Tuesday,
            range(1, 2),
        );
        assert_eq!(custom.label(), "Gym");
        assert_eq!(custom.slot_token(), "Thứ 3,1-2");

        let parsed = ClassSession {
            row: 2,
            code: "INT2204".to_string(),
            name: "OOP".to_string(),
            instructor: "Nguyen Van A".to_string(),
            day: Weekday::Tuesday,
            periods: range(1, 2),
            room: "P301".to_string(),
        };
        assert_eq!(parsed.label(), "OOP (P301)");
        assert_eq!(parsed.slot_token(), custom.slot_token());
    }

    #[test]
    fn test_parse_spec_periods() {
        let s = CustomSession::parse_spec("English Club|B2|Thứ 5|8-9").unwrap();
        assert_eq!(s.name, "English Club");
        assert_eq!(s.room, "B2");
        assert_eq!(s.day, Weekday::Thursday);
        assert_eq!(s.periods, range(8, 9));
    }

    #[test]
    fn test_parse_spec_times() {
        let s = CustomSession::parse_spec("Lab|A1|CN|07:00-10:40").unwrap();
        assert_eq!(s.day, Weekday::Sunday);
        assert_eq!(s.periods, range(1, 4));
    }

    #[test]
    fn test_parse_spec_rejects_bad_input() {
        assert!(CustomSession::parse_spec("only|three|parts").is_err());
        assert!(CustomSession::parse_spec("|A1|Thứ 2|1-2").is_err());
        assert!(CustomSession::parse_spec("X|A1|Someday|1-2").is_err());
        assert!(CustomSession::parse_spec("X|A1|Thứ 2|5-2").is_err());
    }

    #[test]
    fn test_custom_sessions_mutation() {
        let mut list = CustomSessions::new();
        assert!(list.is_empty());
        list.add(CustomSession::parse_spec("A||Thứ 2|1").unwrap());
        list.add(CustomSession::parse_spec("B||Thứ 3|2").unwrap());
        assert_eq!(list.len(), 2);

        assert!(list.remove(5).is_none());
        let removed = list.remove(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(list.get(0).unwrap().name, "B");

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_conflicts_with_matches_slot_token() {
        let parsed = vec![ClassSession {
            row: 1,
            code: "C1".to_string(),
            name: "Math".to_string(),
            instructor: String::new(),
            day: Weekday::Monday,
            periods: range(1, 3),
            room: "P1".to_string(),
        }];
        let mut list = CustomSessions::new();
        list.add(CustomSession::parse_spec("Other|X|Thứ 2|1-3").unwrap());
        list.add(CustomSession::parse_spec("Free|X|Thứ 2|4-5").unwrap());

        let conflicts = list.conflicts_with(&parsed);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].0, 0);
        assert_eq!(conflicts[0].1.name, "Math");
    }
}
