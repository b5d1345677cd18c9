use chrono::{Datelike, NaiveDate};

/// Minimum age served or accepted anywhere in the system.
pub const ADULT_AGE: i32 = 18;

/// Half-width of the default age window when a user has not set bounds.
const DEFAULT_AGE_SPREAD: i32 = 2;

/// Whole years between `birth_date` and `today`, calendar-aware:
/// the year difference, minus one when this year's birthday has not
/// happened yet (compared on (month, day)).
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Inclusive birth-date range describing eligible candidates.
///
/// The window is expressed in birth dates rather than ages so it can be
/// pushed straight into a `BETWEEN` predicate:
/// - `min_birth_date` — January 1 of the year `today.year - effective_max_age`;
///   the oldest allowed candidates are those born in or after that year.
/// - `max_birth_date` — today's month/day in the year
///   `today.year - effective_min_age`; the youngest allowed candidates are
///   those who have already turned `effective_min_age` as of today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateWindow {
    pub min_birth_date: NaiveDate,
    pub max_birth_date: NaiveDate,
}

impl BirthDateWindow {
    /// Resolve the window for a requester born on `birth_date` with optional
    /// preference bounds. Unset bounds default to the requester's own age
    /// plus/minus two years, floored at 18.
    pub fn resolve(
        birth_date: NaiveDate,
        min_age: Option<i32>,
        max_age: Option<i32>,
        today: NaiveDate,
    ) -> Self {
        let age = age_in_years(birth_date, today);
        let effective_max = max_age.unwrap_or(age + DEFAULT_AGE_SPREAD);
        let effective_min = min_age.unwrap_or((age - DEFAULT_AGE_SPREAD).max(ADULT_AGE));

        let min_birth_date =
            NaiveDate::from_ymd_opt(today.year() - effective_max, 1, 1).unwrap_or(NaiveDate::MIN);

        let target_year = today.year() - effective_min;
        // Feb 29 collapses to Mar 1 outside leap years
        let max_birth_date = NaiveDate::from_ymd_opt(target_year, today.month(), today.day())
            .or_else(|| NaiveDate::from_ymd_opt(target_year, 3, 1))
            .unwrap_or(NaiveDate::MIN);

        Self {
            min_birth_date,
            max_birth_date,
        }
    }

    /// Whether a candidate birth date falls inside the window. Both bounds
    /// are inclusive.
    pub fn contains(&self, birth_date: NaiveDate) -> bool {
        self.min_birth_date <= birth_date && birth_date <= self.max_birth_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_birthday_already_passed() {
        assert_eq!(age_in_years(date(2000, 1, 10), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_age_birthday_not_yet_reached() {
        assert_eq!(age_in_years(date(2000, 8, 1), date(2024, 6, 1)), 23);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_in_years(date(2000, 6, 1), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_in_years(date(2000, 6, 2), date(2024, 6, 1)), 23);
    }

    #[test]
    fn test_window_explicit_bounds() {
        // Requester is 25, prefers 20-30, today is 2024-06-15
        let window = BirthDateWindow::resolve(
            date(1999, 3, 1),
            Some(20),
            Some(30),
            date(2024, 6, 15),
        );

        assert_eq!(window.min_birth_date, date(1994, 1, 1));
        assert_eq!(window.max_birth_date, date(2004, 6, 15));
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let window = BirthDateWindow::resolve(
            date(1999, 3, 1),
            Some(20),
            Some(30),
            date(2024, 6, 15),
        );

        assert!(window.contains(date(1994, 1, 1)));
        assert!(window.contains(date(2004, 6, 15)));
        assert!(!window.contains(date(1993, 12, 31)));
        assert!(!window.contains(date(2004, 6, 16)));
    }

    #[test]
    fn test_window_defaults_center_on_requester_age() {
        // Requester is 25 with no bounds set: effective window is 23-27
        let window =
            BirthDateWindow::resolve(date(1999, 3, 1), None, None, date(2024, 6, 15));

        assert_eq!(window.min_birth_date, date(1997, 1, 1));
        assert_eq!(window.max_birth_date, date(2001, 6, 15));
    }

    #[test]
    fn test_window_default_scenario_literal() {
        // Born 2000-01-10, today 2024-06-01: age 24, defaults 22-26
        let window =
            BirthDateWindow::resolve(date(2000, 1, 10), None, None, date(2024, 6, 1));

        assert_eq!(window.min_birth_date, date(1998, 1, 1));
        assert_eq!(window.max_birth_date, date(2002, 6, 1));
    }

    #[test]
    fn test_window_default_min_floored_at_adult_age() {
        // A 19-year-old's default minimum is 18, not 17
        let window =
            BirthDateWindow::resolve(date(2005, 2, 1), None, None, date(2024, 6, 15));

        assert_eq!(window.max_birth_date, date(2006, 6, 15));
        assert_eq!(window.min_birth_date, date(2003, 1, 1));
    }

    #[test]
    fn test_window_partial_bounds() {
        // Only max_age set: min defaults from the requester's age
        let window =
            BirthDateWindow::resolve(date(1999, 3, 1), None, Some(40), date(2024, 6, 15));

        assert_eq!(window.min_birth_date, date(1984, 1, 1));
        assert_eq!(window.max_birth_date, date(2001, 6, 15));
    }

    #[test]
    fn test_window_leap_day_collapses_to_march_first() {
        // 2024-02-29 minus 21 years lands in 2003, which has no Feb 29
        let window = BirthDateWindow::resolve(
            date(1994, 1, 1),
            Some(21),
            Some(35),
            date(2024, 2, 29),
        );

        assert_eq!(window.max_birth_date, date(2003, 3, 1));
    }
}
