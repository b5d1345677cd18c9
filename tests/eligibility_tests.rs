// Pure tests for the candidate eligibility filter and exclusion building

use amora_match::core::{age_in_years, build_exclusions, BirthDateWindow};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_age_is_calendar_aware() {
    // Birthday already passed this year
    assert_eq!(age_in_years(date(2000, 1, 10), date(2024, 6, 1)), 24);
    // Birthday still ahead this year
    assert_eq!(age_in_years(date(2000, 12, 24), date(2024, 6, 1)), 23);
    // Exactly on the birthday
    assert_eq!(age_in_years(date(2000, 6, 1), date(2024, 6, 1)), 24);
}

#[test]
fn test_explicit_window_matches_preferences() {
    // Requester age 25, prefers 20-30, on 2024-06-15
    let window = BirthDateWindow::resolve(
        date(1999, 3, 1),
        Some(20),
        Some(30),
        date(2024, 6, 15),
    );

    assert_eq!(window.min_birth_date, date(1994, 1, 1));
    assert_eq!(window.max_birth_date, date(2004, 6, 15));

    // Both boundaries are inclusive
    assert!(window.contains(date(1994, 1, 1)));
    assert!(window.contains(date(2004, 6, 15)));

    // One day outside either boundary is excluded
    assert!(!window.contains(date(1993, 12, 31)));
    assert!(!window.contains(date(2004, 6, 16)));
}

#[test]
fn test_default_window_centers_on_requester() {
    // Age 25 with no bounds set resolves to ages 23-27
    let window = BirthDateWindow::resolve(date(1999, 3, 1), None, None, date(2024, 6, 15));

    assert_eq!(window.min_birth_date, date(1997, 1, 1));
    assert_eq!(window.max_birth_date, date(2001, 6, 15));
}

#[test]
fn test_default_window_scenario() {
    // Born 2000-01-10, today 2024-06-01: age 24, effective bounds 22-26
    let window = BirthDateWindow::resolve(date(2000, 1, 10), None, None, date(2024, 6, 1));

    assert_eq!(window.min_birth_date, date(1998, 1, 1));
    assert_eq!(window.max_birth_date, date(2002, 6, 1));
}

#[test]
fn test_default_minimum_never_below_adult_age() {
    // An 18-year-old requester still gets an 18+ window
    let window = BirthDateWindow::resolve(date(2006, 1, 1), None, None, date(2024, 6, 15));

    // effective_min = max(18, 16) = 18, effective_max = 20
    assert_eq!(window.min_birth_date, date(2004, 1, 1));
    assert_eq!(window.max_birth_date, date(2006, 6, 15));
}

#[test]
fn test_mixed_explicit_and_default_bounds() {
    let window = BirthDateWindow::resolve(date(1999, 3, 1), Some(21), None, date(2024, 6, 15));

    // max defaults to requester age + 2 = 27
    assert_eq!(window.min_birth_date, date(1997, 1, 1));
    assert_eq!(window.max_birth_date, date(2003, 6, 15));
}

#[test]
fn test_exclusions_cover_all_sources() {
    let ids = build_exclusions(10, &[20, 30], &[40]);

    assert!(ids.contains(&10), "self must be excluded");
    assert!(ids.contains(&20) && ids.contains(&30), "interacted ids excluded");
    assert!(ids.contains(&40), "queued ids excluded");
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_exclusions_with_no_history() {
    assert_eq!(build_exclusions(10, &[], &[]), vec![10]);
}
