use ecalendar::{CalendarDate, Locale, MonthGrid, WeekStart};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// Render a grid the way a plain text calendar would, with week numbers on the left,
/// the selected day in brackets and today marked with a star.
fn render(grid: &MonthGrid, locale: Locale) -> String {
    let mut out = String::from("   |");
    for label in locale.weekday_labels(grid.week_start()) {
        out += &format!("{label:>5}");
    }
    out.push('\n');
    for row in grid.rows() {
        out += &format!("{:>2} |", row.iso_week);
        for cell in row.cells {
            let text = if cell.is_blank() {
                ".".to_owned()
            } else if cell.is_selected {
                format!("[{}]", cell.label)
            } else if cell.is_today {
                format!("{}*", cell.label)
            } else {
                cell.label.clone()
            };
            out += &format!("{text:>5}");
        }
        out.push('\n');
    }
    out
}

#[test]
fn february_2024_monday_first() {
    let grid = MonthGrid::new(
        date("2024-02-10"),
        WeekStart::Monday,
        date("2024-02-14"),
        Some(date("2024-02-29")),
    );
    similar_asserts::assert_eq!(
        render(&grid, Locale::Fr),
        "   |    L    M    M    J    V    S    D
 5 |    .    .    .    1    2    3    4
 6 |    5    6    7    8    9   10   11
 7 |   12   13  14*   15   16   17   18
 8 |   19   20   21   22   23   24   25
 9 |   26   27   28 [29]    .    .    .
"
    );
}

#[test]
fn february_2024_sunday_first() {
    let grid = MonthGrid::new(
        date("2024-02-10"),
        WeekStart::Sunday,
        date("2023-01-01"),
        None,
    );
    similar_asserts::assert_eq!(
        render(&grid, Locale::EnUs),
        "   |    S    M    T    W    T    F    S
 5 |    .    .    .    .    1    2    3
 6 |    4    5    6    7    8    9   10
 7 |   11   12   13   14   15   16   17
 8 |   18   19   20   21   22   23   24
 9 |   25   26   27   28   29    .    .
"
    );
}

#[test]
fn year_boundary_week_numbers() {
    // 2020-12-31 is a Thursday in ISO week 53; 2021-01-03 is still in that week.
    let december = MonthGrid::new(date("2020-12-01"), WeekStart::Monday, date("2020-12-01"), None);
    let weeks: Vec<u32> = december.rows().map(|row| row.iso_week).collect();
    similar_asserts::assert_eq!(weeks, vec![49, 50, 51, 52, 53]);

    let january = MonthGrid::new(date("2021-01-01"), WeekStart::Monday, date("2020-12-01"), None);
    let weeks: Vec<u32> = january.rows().map(|row| row.iso_week).collect();
    similar_asserts::assert_eq!(weeks, vec![53, 1, 2, 3, 4]);
}

#[test]
fn every_month_is_whole_weeks() {
    for week_start in [WeekStart::Monday, WeekStart::Sunday] {
        for year in [1900, 2000, 2023, 2024, 9999] {
            for month in 1..=12 {
                let first = CalendarDate::from_ymd(year, month, 1).unwrap();
                let grid = MonthGrid::new(first, week_start, first, None);
                assert_eq!(grid.cells().len() % 7, 0, "{first} {week_start:?}");
                assert!(grid.leading_blanks() < 7);
                assert!(grid.trailing_blanks() < 7);
                let days: Vec<_> = grid.cells().iter().filter_map(|cell| cell.date).collect();
                assert_eq!(days.first(), Some(&first));
                assert_eq!(days.last(), Some(&first.last_of_month()));
            }
        }
    }
}
