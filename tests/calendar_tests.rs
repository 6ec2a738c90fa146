use caresync::core::calendar::{
    CalendarWindow, Direction, Granularity, MonthLayout, dates_for, dates_with_layout, step,
    step_n, week_start,
};
use chrono::{Datelike, NaiveDate, Weekday};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_day_window_is_reference_only() {
    for reference in [d(2024, 2, 29), d(2023, 12, 31), d(2025, 1, 1)] {
        assert_eq!(dates_for(reference, Granularity::Day), vec![reference]);
    }
}

#[test]
fn test_week_window_starts_on_sunday() {
    // 2024-02-01 .. 2024-02-29 covers every weekday several times
    let mut reference = d(2024, 2, 1);
    while reference.month() == 2 {
        let dates = dates_for(reference, Granularity::Week);
        assert_eq!(dates.len(), 7, "week of {reference}");
        assert_eq!(dates[0].weekday(), Weekday::Sun, "week of {reference}");
        assert!(dates.contains(&reference));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::TimeDelta::days(1));
        }
        reference = reference.succ_opt().unwrap();
    }
}

#[test]
fn test_week_window_on_sunday_starts_same_day() {
    let sunday = d(2024, 3, 3);
    assert_eq!(week_start(sunday), Some(sunday));
    assert_eq!(dates_for(sunday, Granularity::Week)[0], sunday);
}

#[test]
fn test_week_window_crosses_year_boundary() {
    let dates = dates_for(d(2025, 1, 1), Granularity::Week);
    assert_eq!(dates.first(), Some(&d(2024, 12, 29)));
    assert_eq!(dates.last(), Some(&d(2025, 1, 4)));
}

#[test]
fn test_month_window_leap_february() {
    let dates = dates_for(d(2024, 2, 1), Granularity::Month);
    assert_eq!(dates.len(), 33);
    assert_eq!(
        &dates[..4],
        &[d(2024, 1, 28), d(2024, 1, 29), d(2024, 1, 30), d(2024, 1, 31)]
    );
    assert_eq!(dates[4], d(2024, 2, 1));
    assert_eq!(dates.last(), Some(&d(2024, 2, 29)));
    assert_eq!(dates[0].weekday(), Weekday::Sun);
}

#[test]
fn test_month_window_non_leap_february() {
    let dates = dates_for(d(2023, 2, 1), Granularity::Month);
    assert_eq!(dates.len(), 31);
    assert_eq!(dates[0], d(2023, 1, 29));
    assert_eq!(dates[3], d(2023, 2, 1));
    assert_eq!(dates.last(), Some(&d(2023, 2, 28)));
}

#[test]
fn test_month_window_reference_mid_month() {
    // Same window whatever day of the month is the reference.
    assert_eq!(
        dates_for(d(2024, 2, 17), Granularity::Month),
        dates_for(d(2024, 2, 1), Granularity::Month)
    );
}

#[test]
fn test_month_starting_on_sunday_has_no_padding() {
    // 2024-09-01 is a Sunday
    let dates = dates_for(d(2024, 9, 1), Granularity::Month);
    assert_eq!(dates.len(), 30);
    assert_eq!(dates[0], d(2024, 9, 1));
}

#[test]
fn test_month_window_has_no_trailing_padding() {
    // 2024-08-31 is a Saturday, 2024-06-30 a Sunday: both end on the month's last day
    for (y, m, last) in [(2024, 8, 31), (2024, 6, 30), (2024, 4, 30), (2100, 2, 28)] {
        let dates = dates_for(d(y, m, 1), Granularity::Month);
        assert_eq!(dates.last(), Some(&d(y, m, last)));
    }
}

#[test]
fn test_plain_month_layout_skips_padding() {
    let dates = dates_with_layout(d(2024, 2, 10), Granularity::Month, MonthLayout::Plain);
    assert_eq!(dates.len(), 29);
    assert_eq!(dates[0], d(2024, 2, 1));

    // Day and week do not depend on the layout
    assert_eq!(
        dates_with_layout(d(2024, 2, 10), Granularity::Week, MonthLayout::Plain),
        dates_for(d(2024, 2, 10), Granularity::Week)
    );
}

#[test]
fn test_step_month_normalizes_to_first() {
    assert_eq!(
        step(d(2024, 3, 31), Granularity::Month, Direction::Next),
        Some(d(2024, 4, 1))
    );
    assert_eq!(
        step(d(2024, 3, 31), Granularity::Month, Direction::Prev),
        Some(d(2024, 2, 1))
    );
    assert_eq!(
        step(d(2024, 12, 15), Granularity::Month, Direction::Next),
        Some(d(2025, 1, 1))
    );
    assert_eq!(
        step(d(2024, 1, 15), Granularity::Month, Direction::Prev),
        Some(d(2023, 12, 1))
    );
}

#[test]
fn test_step_week_and_day() {
    assert_eq!(
        step(d(2024, 1, 1), Granularity::Week, Direction::Prev),
        Some(d(2023, 12, 25))
    );
    assert_eq!(
        step(d(2024, 2, 26), Granularity::Week, Direction::Next),
        Some(d(2024, 3, 4))
    );
    assert_eq!(
        step(d(2024, 2, 28), Granularity::Day, Direction::Next),
        Some(d(2024, 2, 29))
    );
    assert_eq!(
        step(d(2024, 3, 1), Granularity::Day, Direction::Prev),
        Some(d(2024, 2, 29))
    );
}

#[test]
fn test_step_n_repeats_and_goes_backwards() {
    assert_eq!(step_n(d(2024, 1, 31), Granularity::Month, 0), Some(d(2024, 1, 31)));
    assert_eq!(step_n(d(2024, 1, 31), Granularity::Month, 2), Some(d(2024, 3, 1)));
    assert_eq!(step_n(d(2024, 1, 31), Granularity::Month, -13), Some(d(2022, 12, 1)));
    assert_eq!(step_n(d(2024, 1, 1), Granularity::Week, -1), Some(d(2023, 12, 25)));
}

#[test]
fn test_out_of_range_reference_yields_empty_window() {
    assert!(dates_for(NaiveDate::MAX, Granularity::Week).is_empty());
    assert!(dates_for(NaiveDate::MIN, Granularity::Month).is_empty());
    assert_eq!(step(NaiveDate::MAX, Granularity::Day, Direction::Next), None);
    assert_eq!(step(NaiveDate::MIN, Granularity::Month, Direction::Prev), None);
}

#[test]
fn test_window_helpers() {
    let window = CalendarWindow::new(d(2024, 2, 14), Granularity::Month);
    assert_eq!(window.len(), 33);
    assert!(window.is_padding(&d(2024, 1, 31)));
    assert!(!window.is_padding(&d(2024, 2, 1)));
    assert_eq!(window.title(), "2024-02");

    let weeks = window.weeks();
    assert_eq!(weeks.len(), 5);
    assert!(weeks[..4].iter().all(|w| w.len() == 7));
    assert_eq!(weeks[4].len(), 5);
    assert_eq!(weeks[0][0], Some(d(2024, 1, 28)));

    let next = window.shifted(1).expect("next month");
    assert_eq!(next.reference, d(2024, 3, 1));
    assert_eq!(next.granularity, Granularity::Month);
    assert_eq!(window.shifted(-2).unwrap().reference, d(2023, 12, 1));
    assert_eq!(window.shifted(0).unwrap(), window);

    let week = CalendarWindow::new(d(2024, 2, 14), Granularity::Week);
    assert_eq!(week.title(), "2024-02-11 .. 2024-02-17");
    assert!(week.weeks()[0].iter().all(Option::is_some));

    let day = CalendarWindow::new(d(2024, 2, 5), Granularity::Day);
    assert_eq!(day.title(), "2024-02-05 (Mon)");
}

#[test]
fn test_plain_month_weeks_start_with_blanks() {
    // 2024-02-01 is a Thursday.
    let window = CalendarWindow::with_layout(d(2024, 2, 14), Granularity::Month, MonthLayout::Plain);
    let weeks = window.weeks();
    assert_eq!(weeks[0][..4], [None, None, None, None]);
    assert_eq!(weeks[0][4], Some(d(2024, 2, 1)));
    assert_eq!(weeks.iter().flatten().flatten().count(), 29);
    assert_eq!(weeks.last().unwrap().last(), Some(&Some(d(2024, 2, 29))));

    let shifted = window.shifted(1).unwrap();
    assert_eq!(shifted.layout, MonthLayout::Plain);
    assert_eq!(shifted.len(), 31);
}

#[test]
fn test_shifted_out_of_range_is_none() {
    let window = CalendarWindow::new(NaiveDate::MAX, Granularity::Day);
    assert!(window.shifted(1).is_none());
}
