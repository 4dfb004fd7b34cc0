use chrono::NaiveDate;
use kintai::calendar::StaticHolidays;
use kintai::chart::{ChartEntry, ChartRow};
use kintai::core::parse::parse_chart;
use kintai::models::{DayType, Duration, WorkplaceType};

fn entry(workplace: &str, category: &str, clock_in: &str, clock_out: &str) -> ChartEntry {
    ChartEntry {
        workplace: workplace.to_string(),
        category: category.to_string(),
        clock_in: clock_in.to_string(),
        clock_out: clock_out.to_string(),
        memo: String::new(),
    }
}

fn row(day: &str, color: &str, entries: Vec<ChartEntry>) -> ChartRow {
    ChartRow {
        day: day.to_string(),
        color: color.to_string(),
        entries,
        memo: String::new(),
    }
}

fn noon() -> Duration {
    Duration::parse("12:00").unwrap()
}

#[test]
fn test_day_marker_regex() {
    assert_eq!(row("9/1(Mon)", "", vec![]).day_of_month(), 1);
    assert_eq!(row("12/31(Wed)", "", vec![]).day_of_month(), 31);
    assert_eq!(row("Total", "", vec![]).day_of_month(), 0);
    assert_eq!(row("", "", vec![]).day_of_month(), 0);
}

#[test]
fn test_summary_rows_skipped() {
    let rows = vec![
        row(
            "9/1(Mon)",
            "",
            vec![entry("HF Bldg.", "Attendance", "09:00", "18:00")],
        ),
        row("Total", "", vec![]),
    ];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    assert_eq!(parsed.records.len(), 1);
    assert!(parsed.issues.is_empty());
}

#[test]
fn test_color_signals_win() {
    let rows = vec![
        // Red on a plain weekday: the portal marks it as holiday.
        row("9/1(Mon)", "red", vec![]),
        row("9/6(Sat)", "blue", vec![]),
    ];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    assert_eq!(parsed.records[0].day_type, DayType::Holiday);
    assert_eq!(parsed.records[1].day_type, DayType::Weekend);
}

#[test]
fn test_leave_categories_classify_day() {
    let rows = vec![
        row(
            "9/1(Mon)",
            "",
            vec![entry("HF Bldg.", "Unpaid Leave", "", "")],
        ),
        row("9/2(Tue)", "", vec![entry("HF Bldg.", "Paid Leave", "", "")]),
    ];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    assert_eq!(parsed.records[0].day_type, DayType::UnpaidLeave);
    assert_eq!(parsed.records[1].day_type, DayType::PaidLeave);
}

#[test]
fn test_holiday_lookup_fallback() {
    let holidays = StaticHolidays::from_pairs([(
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        "敬老の日".to_string(),
    )]);

    let rows = vec![
        row("9/15(Mon)", "", vec![]),
        row("9/16(Tue)", "", vec![]),
    ];

    let parsed = parse_chart(&rows, 2025, 9, &holidays, noon()).unwrap();
    assert_eq!(parsed.records[0].day_type, DayType::Holiday);
    assert_eq!(parsed.records[1].day_type, DayType::WorkingDay);
}

#[test]
fn test_workplace_classification() {
    let rows = vec![row(
        "9/1(Mon)",
        "",
        vec![
            entry("HF Bldg.", "Attendance", "09:00", "13:00"),
            entry("WFH", "Attendance", "14:00", "18:00"),
        ],
    )];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    let record = &parsed.records[0];

    assert_eq!(record.entries[0].workplace, WorkplaceType::Office);
    assert_eq!(record.entries[1].workplace, WorkplaceType::Wfh);
    assert_eq!(record.office_minutes(), 240);
    assert_eq!(record.remote_minutes(), 240);
}

#[test]
fn test_open_entry_closed_at_reference_time() {
    let rows = vec![row(
        "9/1(Mon)",
        "",
        vec![entry("HF Bldg.", "Attendance", "09:00", "")],
    )];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    let record = &parsed.records[0];

    assert_eq!(record.entries[0].clock_out, None);
    assert_eq!(record.entries[0].duration.minutes(), 180);
}

#[test]
fn test_bad_time_rejects_single_day_only() {
    let rows = vec![
        row(
            "9/1(Mon)",
            "",
            vec![entry("HF Bldg.", "Attendance", "9am", "18:00")],
        ),
        row(
            "9/2(Tue)",
            "",
            vec![entry("HF Bldg.", "Attendance", "09:00", "18:00")],
        ),
    ];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();

    assert_eq!(parsed.records.len(), 1);
    assert_eq!(
        parsed.records[0].date,
        NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()
    );
    assert_eq!(parsed.issues.len(), 1);
    assert_eq!(parsed.issues[0].day_of_month, 1);
}

#[test]
fn test_day_outside_month_is_an_issue() {
    let rows = vec![row("9/31(Wed)", "", vec![])];

    let parsed = parse_chart(&rows, 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.issues.len(), 1);
}

#[test]
fn test_invalid_month_is_fatal() {
    assert!(parse_chart(&[], 2025, 13, &StaticHolidays::default(), noon()).is_err());
}

#[test]
fn test_row_memo_carried_over() {
    let mut r = row(
        "9/1(Mon)",
        "",
        vec![entry("HF Bldg.", "Attendance", "09:00", "18:00")],
    );
    r.memo = "client visit".to_string();

    let parsed = parse_chart(&[r], 2025, 9, &StaticHolidays::default(), noon()).unwrap();
    assert_eq!(parsed.records[0].memo, "client visit");
}
