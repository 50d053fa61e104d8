//! Class schedule parser
//!
//! Column layout (tab separated): row number, code, name, instructor,
//! time/room. The time/room cell is `"<day>,<start>-<end>,<room>"`, e.g.
//! `"Thứ 2,1-3,P.301"`.

use super::fields::{self, ParsedTable, RowError, SkippedRow};
use crate::core::error::ScheduleError;
use crate::core::models::{ClassSession, PeriodRange, Weekday};
use crate::debug;

/// Marker (case-insensitive) of the portal summary row. Only lines with an
/// empty code column count, so course names like "Tổng quan ..." are kept.
pub const TOTAL_MARKER: &str = "tổng";

const COL_CODE: usize = 1;
const COL_NAME: usize = 2;
const COL_INSTRUCTOR: usize = 3;
const COL_TIME_ROOM: usize = 4;

const REQUIRED_FIELDS: usize = COL_TIME_ROOM + 1;

fn is_total_row(line: &str) -> bool {
    let cols = fields::split_fields(line);
    fields::field(&cols, COL_CODE).is_none() && line.to_lowercase().contains(TOTAL_MARKER)
}

/// Parse pasted schedule rows, keeping diagnostics for dropped rows
#[must_use]
pub fn parse_schedule_table(text: &str) -> ParsedTable<ClassSession> {
    let mut table = ParsedTable::default();

    for (line_no, line) in fields::lines(text) {
        match parse_schedule_line(line, line_no) {
            Ok(session) => table.rows.push(session),
            Err(reason) => {
                debug!("Skipping schedule line {line_no}: {reason}");
                table.skipped.push(SkippedRow {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    debug!(
        "Parsed {} class sessions ({} skipped)",
        table.rows.len(),
        table.skipped.len()
    );
    table
}

/// Parse pasted schedule rows. Total rows and rows without a well-formed
/// time/room triple are dropped.
#[must_use]
pub fn parse_schedule_records(text: &str) -> Vec<ClassSession> {
    parse_schedule_table(text).rows
}

/// Check that the pasted schedule has the name and time/room columns at all.
///
/// Input without any candidate rows passes; it simply yields an empty grid.
///
/// # Errors
/// [`ScheduleError::MissingColumn`] when no candidate row reaches the course
/// name column, or none reaches the time/room column.
pub fn validate_schedule_columns(text: &str) -> Result<(), ScheduleError> {
    let mut rows = 0;
    let mut has_name = false;
    let mut has_time = false;

    for (_, line) in fields::lines(text).filter(|(_, line)| !is_total_row(line)) {
        let cols = fields::split_fields(line);
        rows += 1;
        has_name |= fields::field(&cols, COL_NAME).is_some();
        has_time |= fields::field(&cols, COL_TIME_ROOM).is_some();
    }

    if rows > 0 && !has_name {
        return Err(ScheduleError::MissingColumn {
            column: "course name",
            rows,
        });
    }
    if rows > 0 && !has_time {
        return Err(ScheduleError::MissingColumn {
            column: "time/room",
            rows,
        });
    }
    Ok(())
}

fn parse_schedule_line(line: &str, line_no: usize) -> Result<ClassSession, RowError> {
    if is_total_row(line) {
        return Err(RowError::TotalRow);
    }

    let cols = fields::split_fields(line);
    if cols.len() < REQUIRED_FIELDS {
        return Err(RowError::TooFewFields {
            found: cols.len(),
            required: REQUIRED_FIELDS,
        });
    }

    let name = fields::required_text(&cols, COL_NAME, "course name")?;
    let (day, periods, room) = parse_time_room(cols[COL_TIME_ROOM])?;

    Ok(ClassSession {
        row: line_no,
        code: cols[COL_CODE].to_string(),
        name,
        instructor: cols[COL_INSTRUCTOR].to_string(),
        day,
        periods,
        room,
    })
}

/// Split `"day,start-end,room"`. The room is everything after the second comma.
fn parse_time_room(cell: &str) -> Result<(Weekday, PeriodRange, String), RowError> {
    let mut parts = cell.splitn(3, ',').map(str::trim);
    let (Some(day), Some(range), Some(room)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(RowError::MalformedTimeRoom(cell.to_string()));
    };

    let day = Weekday::from_label(day).ok_or_else(|| RowError::UnknownWeekday(day.to_string()))?;
    if !range.contains('-') {
        return Err(RowError::BadPeriodRange(range.to_string()));
    }
    let periods =
        PeriodRange::parse(range).ok_or_else(|| RowError::BadPeriodRange(range.to_string()))?;

    Ok((day, periods, room.to_string()))
}
