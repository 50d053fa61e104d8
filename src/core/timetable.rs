//! Weekly timetable grid builder
//!
//! Sessions are written into a 14 × 7 working grid. Collisions stack: a
//! cell keeps every label in arrival order. Periods nobody touched are
//! dropped from the result, and the kept rows stay in period order.

use crate::core::error::ScheduleError;
use crate::core::models::{ClassSession, CustomSessions, SessionSlot, Weekday};
use crate::core::parser::{parse_schedule_records, validate_schedule_columns};
use crate::core::periods::{self, PERIOD_COUNT};
use crate::debug;
use serde::Serialize;

const DAY_COUNT: usize = Weekday::ALL.len();

/// One kept period row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// Period index (1–14)
    pub period: u8,
    /// Cells in weekday column order; each cell lists labels in arrival order
    pub cells: [Vec<String>; DAY_COUNT],
}

impl GridRow {
    fn new(period: u8) -> Self {
        Self {
            period,
            cells: Default::default(),
        }
    }

    /// Row header with clock times, e.g. `"3 (09:00 → 09:50)"`
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "{} ({})",
            self.period,
            periods::period_to_time_label(self.period)
        )
    }
}

/// A cell holding more than one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// Period index
    pub period: u8,
    /// Day column
    pub day: Weekday,
    /// Labels sharing the cell
    pub labels: Vec<String>,
}

/// Day × used-period grid. Columns are always the seven weekdays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimetableGrid {
    rows: Vec<GridRow>,
}

impl TimetableGrid {
    /// Column headers
    #[must_use]
    pub const fn columns(&self) -> [Weekday; DAY_COUNT] {
        Weekday::ALL
    }

    /// Kept rows in period order
    #[must_use]
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Whether no period is used
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the kept periods
    #[must_use]
    pub fn used_periods(&self) -> Vec<u8> {
        self.rows.iter().map(|row| row.period).collect()
    }

    /// Clock label for a kept row's period; `None` when the row was dropped
    #[must_use]
    pub fn period_label(&self, period: u8) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.period == period)
            .and_then(|row| periods::period_time_label(row.period))
    }

    /// Labels in a cell; `None` when the period row was dropped
    #[must_use]
    pub fn cell(&self, period: u8, day: Weekday) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.period == period)
            .map(|row| row.cells[day.column()].as_slice())
    }

    /// Cell text with labels joined by newlines (empty string for an empty or
    /// dropped cell)
    #[must_use]
    pub fn cell_text(&self, period: u8, day: Weekday) -> String {
        self.cell(period, day)
            .map(|labels| labels.join("\n"))
            .unwrap_or_default()
    }

    /// Every cell holding more than one label, in row then column order
    #[must_use]
    pub fn collisions(&self) -> Vec<Collision> {
        self.rows
            .iter()
            .flat_map(|row| {
                Weekday::ALL.iter().filter_map(move |day| {
                    let labels = &row.cells[day.column()];
                    (labels.len() > 1).then(|| Collision {
                        period: row.period,
                        day: *day,
                        labels: labels.clone(),
                    })
                })
            })
            .collect()
    }
}

fn place<S: SessionSlot>(
    grid: &mut [GridRow],
    used: &mut [bool; PERIOD_COUNT],
    session: &S,
) {
    let column = session.day().column();
    let label = session.label();
    for period in session.periods().periods() {
        let idx = usize::from(period) - 1;
        grid[idx].cells[column].push(label.clone());
        used[idx] = true;
    }
}

/// Merge parsed and custom sessions into a grid, dropping unused periods.
///
/// Parsed sessions are placed first, then custom sessions, each in order.
#[must_use]
pub fn build_timetable(sessions: &[ClassSession], custom: &CustomSessions) -> TimetableGrid {
    let mut grid: Vec<GridRow> = periods::catalog()
        .iter()
        .map(|p| GridRow::new(p.index))
        .collect();
    let mut used = [false; PERIOD_COUNT];

    for session in sessions {
        place(&mut grid, &mut used, session);
    }
    for session in custom {
        place(&mut grid, &mut used, session);
    }

    let rows: Vec<GridRow> = grid
        .into_iter()
        .zip(used)
        .filter_map(|(row, used)| used.then_some(row))
        .collect();

    debug!(
        "Built timetable: {} sessions, {} custom, {} periods used",
        sessions.len(),
        custom.len(),
        rows.len()
    );
    TimetableGrid { rows }
}

/// Validate, parse and build in one step from pasted schedule text.
///
/// # Errors
/// [`ScheduleError::MissingColumn`] when the input lacks the name or time/room
/// column entirely.
pub fn build_timetable_from_text(
    text: &str,
    custom: &CustomSessions,
) -> Result<TimetableGrid, ScheduleError> {
    validate_schedule_columns(text)?;
    let sessions = parse_schedule_records(text);
    Ok(build_timetable(&sessions, custom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CustomSession, PeriodRange};

    fn session(name: &str, day: Weekday, start: u8, end: u8, room: &str) -> ClassSession {
        ClassSession {
            row: 1,
            code: String::new(),
            name: name.to_string(),
            instructor: String::new(),
            day,
            periods: PeriodRange::new(start, end).unwrap(),
            room: room.to_string(),
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_grid() {
        let grid = build_timetable(&[], &CustomSessions::new());
        assert!(grid.is_empty());
        assert_eq!(grid.columns().len(), 7);
        assert!(grid.collisions().is_empty());
    }

    #[test]
    fn test_overlap_stacks_and_unused_rows_dropped() {
        let sessions = vec![
            session("Math", Weekday::Monday, 1, 2, "P3"),
            session("Physics", Weekday::Monday, 2, 3, "P4"),
        ];
        let grid = build_timetable(&sessions, &CustomSessions::new());

        assert_eq!(grid.used_periods(), vec![1, 2, 3]);
        assert_eq!(
            grid.cell_text(2, Weekday::Monday),
            "Math (P3)\nPhysics (P4)"
        );
        assert_eq!(grid.cell_text(1, Weekday::Monday), "Math (P3)");
        assert_eq!(grid.cell_text(3, Weekday::Monday), "Physics (P4)");
        assert!(grid.cell(4, Weekday::Monday).is_none());
        assert_eq!(grid.cell(1, Weekday::Tuesday), Some(&[][..]));

        let collisions = grid.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].period, 2);
        assert_eq!(collisions[0].day, Weekday::Monday);
    }

    #[test]
    fn test_rows_in_period_order_not_insertion_order() {
        let sessions = vec![
            session("Late", Weekday::Friday, 12, 13, ""),
            session("Early", Weekday::Wednesday, 3, 3, ""),
        ];
        let grid = build_timetable(&sessions, &CustomSessions::new());
        assert_eq!(grid.used_periods(), vec![3, 12, 13]);
        assert_eq!(grid.cell_text(12, Weekday::Friday), "Late");
    }

    #[test]
    fn test_custom_sessions_placed_after_parsed() {
        let sessions = vec![session("Math", Weekday::Sunday, 5, 5, "A1")];
        let mut custom = CustomSessions::new();
        custom.add(CustomSession::new(
            "Club".to_string(),
            "B2".to_string(),
            Weekday::Sunday,
            PeriodRange::new(5, 6).unwrap(),
        ));

        let grid = build_timetable(&sessions, &custom);
        assert_eq!(grid.cell_text(5, Weekday::Sunday), "Math (A1)\nClub (B2)");
        assert_eq!(grid.used_periods(), vec![5, 6]);

        custom.clear();
        let rebuilt = build_timetable(&sessions, &custom);
        assert_eq!(rebuilt.used_periods(), vec![5]);
    }

    #[test]
    fn test_row_header() {
        let grid = build_timetable(
            &[session("X", Weekday::Monday, 6, 6, "")],
            &CustomSessions::new(),
        );
        assert_eq!(grid.rows()[0].header(), "6 (12:30 → 13:20)");
        assert_eq!(grid.period_label(6).as_deref(), Some("12:30 → 13:20"));
        assert_eq!(grid.period_label(7), None);
    }

    #[test]
    fn test_build_from_text_validates_columns() {
        let err = build_timetable_from_text("1\tC1\tMath\tT", &CustomSessions::new());
        assert!(err.is_err());

        let grid =
            build_timetable_from_text("1\tC1\tMath\tT\tThứ 4,2-2,P9", &CustomSessions::new())
                .unwrap();
        assert_eq!(grid.cell_text(2, Weekday::Wednesday), "Math (P9)");
    }
}
