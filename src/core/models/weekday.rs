//! Weekday labels used by the portal schedule

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven timetable columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Thứ 2
    Monday,
    /// Thứ 3
    Tuesday,
    /// Thứ 4
    Wednesday,
    /// Thứ 5
    Thursday,
    /// Thứ 6
    Friday,
    /// Thứ 7
    Saturday,
    /// Chủ nhật
    Sunday,
}

impl Weekday {
    /// All days in column order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Portal label for this day
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Thứ 2",
            Self::Tuesday => "Thứ 3",
            Self::Wednesday => "Thứ 4",
            Self::Thursday => "Thứ 5",
            Self::Friday => "Thứ 6",
            Self::Saturday => "Thứ 7",
            Self::Sunday => "Chủ nhật",
        }
    }

    /// Zero-based column index
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Parse a portal day label. Whitespace and case are normalized; `CN` is
    /// accepted for Sunday.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_lowercase().as_str() {
            "thứ 2" => Some(Self::Monday),
            "thứ 3" => Some(Self::Tuesday),
            "thứ 4" => Some(Self::Wednesday),
            "thứ 5" => Some(Self::Thursday),
            "thứ 6" => Some(Self::Friday),
            "thứ 7" => Some(Self::Saturday),
            "chủ nhật" | "cn" => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Unknown weekday: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_label(day.label()), Some(day));
        }
    }

    #[test]
    fn test_from_label_normalizes() {
        assert_eq!(Weekday::from_label("  Thứ   2 "), Some(Weekday::Monday));
        assert_eq!(Weekday::from_label("THỨ 7"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_label("Chủ Nhật"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_label("CN"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_label("Thứ 8"), None);
        assert_eq!(Weekday::from_label(""), None);
    }

    #[test]
    fn test_column_order() {
        assert_eq!(Weekday::Monday.column(), 0);
        assert_eq!(Weekday::Sunday.column(), 6);
    }

    #[test]
    fn test_from_str_error() {
        assert!("Thứ 9".parse::<Weekday>().is_err());
    }
}
