//! Integration tests for schedule parsing and timetable building

use studyboard::core::error::ScheduleError;
use studyboard::core::models::{CustomSession, CustomSessions, SessionSlot, Weekday};
use studyboard::core::parser::{parse_schedule_records, parse_schedule_table};
use studyboard::core::periods::{period_to_time_label, time_to_period, PERIOD_COUNT};
use studyboard::core::timetable::{build_timetable, build_timetable_from_text};

const SAMPLE: &str = include_str!("../samples/schedule.tsv");

const OOP: &str = "Lập trình hướng đối tượng (P3)";
const DSA: &str = "Cấu trúc dữ liệu và giải thuật (P4)";

#[test]
fn sample_parses_and_skips_header_and_total() {
    let table = parse_schedule_table(SAMPLE);

    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.skipped.len(), 2);
    assert_eq!(table.rows[0].row, 2);
    assert_eq!(table.rows[0].code, "INT2204 1");
    assert_eq!(table.rows[3].day, Weekday::Sunday);
    assert_eq!(table.rows[3].room, "Hội trường");
}

#[test]
fn overlapping_sessions_stack_in_one_cell() {
    let grid = build_timetable_from_text(SAMPLE, &CustomSessions::new()).unwrap();

    assert_eq!(grid.used_periods(), vec![1, 2, 3, 7, 8, 9, 11, 12]);
    assert_eq!(grid.cell_text(1, Weekday::Monday), OOP);
    assert_eq!(grid.cell_text(2, Weekday::Monday), format!("{OOP}\n{DSA}"));
    assert_eq!(grid.cell_text(3, Weekday::Monday), DSA);
    assert_eq!(grid.cell_text(11, Weekday::Sunday), "Triết học (Hội trường)");

    let collisions = grid.collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].labels, vec![OOP.to_string(), DSA.to_string()]);
}

#[test]
fn every_parsed_period_appears_and_rows_stay_sorted() {
    let sessions = parse_schedule_records(SAMPLE);
    let grid = build_timetable(&sessions, &CustomSessions::new());

    for session in &sessions {
        for period in session.periods().periods() {
            let cell = grid.cell(period, session.day()).expect("row kept");
            assert!(cell.contains(&session.label()));
        }
    }
    let periods = grid.used_periods();
    assert!(periods.windows(2).all(|w| w[0] < w[1]));
    assert!(periods.len() <= PERIOD_COUNT);
}

#[test]
fn custom_sessions_round_trip_through_rebuilds() {
    let sessions = parse_schedule_records(SAMPLE);
    let mut custom = CustomSessions::new();
    custom.add(CustomSession::parse_spec("Câu lạc bộ|B2|Thứ 4|07:00-08:40").unwrap());
    custom.add(CustomSession::parse_spec("Gym|Hall|Thứ 2|1-2").unwrap());

    let grid = build_timetable(&sessions, &custom);
    assert_eq!(grid.cell_text(1, Weekday::Wednesday), "Câu lạc bộ (B2)");
    assert_eq!(grid.cell_text(1, Weekday::Monday), format!("{OOP}\nGym (Hall)"));

    let conflicts = custom.conflicts_with(&sessions);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].0, 1);
    assert_eq!(conflicts[0].1.code, "INT2204 1");

    assert!(custom.remove(1).is_some());
    let grid = build_timetable(&sessions, &custom);
    assert_eq!(grid.cell_text(1, Weekday::Monday), OOP);

    custom.clear();
    let grid = build_timetable(&sessions, &custom);
    assert_eq!(grid.cell_text(1, Weekday::Wednesday), "");
    assert_eq!(grid, build_timetable(&sessions, &CustomSessions::new()));
}

#[test]
fn invalid_custom_spec_is_reported() {
    let err = CustomSession::parse_spec("Gym|Hall|Someday|1-2").unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidCustomSession { .. }));
    assert!(err.to_string().contains("Gym|Hall|Someday|1-2"));
}

#[test]
fn missing_time_column_is_rejected() {
    let text = "1\tINT1\tMath\tTeacher\n2\tINT2\tPhysics\tTeacher\n";
    let err = build_timetable_from_text(text, &CustomSessions::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Schedule is missing the required 'time/room' column (2 rows checked)"
    );
}

#[test]
fn empty_schedule_gives_empty_grid() {
    let grid = build_timetable_from_text("", &CustomSessions::new()).unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.columns(), Weekday::ALL);
}

#[test]
fn period_boundaries() {
    let cases = [
        ((7, 0), 1),
        ((7, 50), 1),
        ((7, 51), 2),
        ((8, 41), 3),
        ((11, 31), 6),
        ((19, 0), 12),
        ((19, 5), 13),
        ((20, 40), 14),
        ((23, 0), 14),
        ((6, 0), 1),
    ];
    for ((h, m), expected) in cases {
        assert_eq!(time_to_period(h, m), expected, "{h:02}:{m:02}");
    }
    assert_eq!(period_to_time_label(1), "07:00 → 07:50");
    assert_eq!(period_to_time_label(15), "");
}

#[test]
fn course_names_starting_with_tong_reach_the_grid() {
    let text = "1\tINT1001\tTổng quan về công nghệ thông tin\tNguyễn A\tThứ 2,1-2,P1\n\
                2\tMAT1\tĐại số\tB\tThứ 3,3-4,P2\n\
                \t\tTổng số tín chỉ: 5\t\t";
    let grid = build_timetable_from_text(text, &CustomSessions::new()).unwrap();

    assert_eq!(grid.used_periods(), vec![1, 2, 3, 4]);
    assert_eq!(
        grid.cell_text(1, Weekday::Monday),
        "Tổng quan về công nghệ thông tin (P1)"
    );
}
