//! Federal holiday tables checked against published OPM schedules.
//!
//! These integration tests exercise `compute_holidays`, `HolidayCalendar`,
//! and the nth/last weekday helpers.

use std::collections::HashSet;

use fy_time::{
    compute_holidays, Calendar, Date, FederalHoliday, HolidayCalendar, Month, Observance, Weekday,
};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that the holiday set for `fiscal_year` matches `expected` exactly,
/// as `(holiday, actual, observed)` triples.
fn check_holidays(fiscal_year: i32, expected: &[(FederalHoliday, Date, Date)]) {
    let set = compute_holidays(fiscal_year).unwrap();
    assert_eq!(set.fiscal_year(), fiscal_year);
    assert_eq!(set.len(), expected.len(), "FY{fiscal_year}: holiday count");
    for &(holiday, actual, observed) in expected {
        let dates = set
            .get(holiday)
            .unwrap_or_else(|| panic!("FY{fiscal_year}: {holiday} missing"));
        assert_eq!(dates.actual, actual, "FY{fiscal_year}: {holiday} actual");
        assert_eq!(dates.observed, observed, "FY{fiscal_year}: {holiday} observed");
    }
}

// ─── Fixed tables ─────────────────────────────────────────────────────────────

#[test]
fn test_fy2025_holidays() {
    use FederalHoliday::*;
    check_holidays(
        2025,
        &[
            (ColumbusDay, date(2024, 10, 14), date(2024, 10, 14)),
            (VeteransDay, date(2024, 11, 11), date(2024, 11, 11)),
            (ThanksgivingDay, date(2024, 11, 28), date(2024, 11, 28)),
            (ChristmasDay, date(2024, 12, 25), date(2024, 12, 25)),
            (NewYearsDay, date(2025, 1, 1), date(2025, 1, 1)),
            (MartinLutherKingJrDay, date(2025, 1, 20), date(2025, 1, 20)),
            (WashingtonsBirthday, date(2025, 2, 17), date(2025, 2, 17)),
            (MemorialDay, date(2025, 5, 26), date(2025, 5, 26)),
            (Juneteenth, date(2025, 6, 19), date(2025, 6, 19)),
            (IndependenceDay, date(2025, 7, 4), date(2025, 7, 4)),
            (LaborDay, date(2025, 9, 1), date(2025, 9, 1)),
        ],
    );
}

#[test]
fn test_fy2023_sunday_shifts() {
    use FederalHoliday::*;
    check_holidays(
        2023,
        &[
            (ColumbusDay, date(2022, 10, 10), date(2022, 10, 10)),
            (VeteransDay, date(2022, 11, 11), date(2022, 11, 11)),
            (ThanksgivingDay, date(2022, 11, 24), date(2022, 11, 24)),
            (ChristmasDay, date(2022, 12, 25), date(2022, 12, 26)),
            (NewYearsDay, date(2023, 1, 1), date(2023, 1, 2)),
            (MartinLutherKingJrDay, date(2023, 1, 16), date(2023, 1, 16)),
            (WashingtonsBirthday, date(2023, 2, 20), date(2023, 2, 20)),
            (MemorialDay, date(2023, 5, 29), date(2023, 5, 29)),
            (Juneteenth, date(2023, 6, 19), date(2023, 6, 19)),
            (IndependenceDay, date(2023, 7, 4), date(2023, 7, 4)),
            (LaborDay, date(2023, 9, 4), date(2023, 9, 4)),
        ],
    );
}

#[test]
fn test_fy2024_veterans_day_on_saturday() {
    let set = compute_holidays(2024).unwrap();
    let vd = set.get_by_name("Veterans Day").unwrap();
    assert_eq!(vd.actual, date(2023, 11, 11));
    assert_eq!(vd.observed, date(2023, 11, 10));
    assert_eq!(vd.observed.weekday(), Weekday::Friday);
}

#[test]
fn test_independence_day_weekend_observance() {
    // 2026-07-04 is a Saturday → Friday 2026-07-03
    let fy26 = compute_holidays(2026).unwrap();
    let d = fy26.get(FederalHoliday::IndependenceDay).unwrap();
    assert_eq!(d.actual.weekday(), Weekday::Saturday);
    assert_eq!(d.observed, date(2026, 7, 3));

    // 2027-07-04 is a Sunday → Monday 2027-07-05
    let fy27 = compute_holidays(2027).unwrap();
    let d = fy27.get(FederalHoliday::IndependenceDay).unwrap();
    assert_eq!(d.actual.weekday(), Weekday::Sunday);
    assert_eq!(d.observed, date(2027, 7, 5));
}

#[test]
fn test_names_in_fiscal_order() {
    let set = compute_holidays(2026).unwrap();
    let names: Vec<_> = set.names().collect();
    assert_eq!(
        names,
        [
            "Columbus Day",
            "Veterans Day",
            "Thanksgiving Day",
            "Christmas Day",
            "New Year's Day",
            "Birthday of Martin Luther King, Jr.",
            "Washington's Birthday",
            "Memorial Day",
            "Juneteenth National Independence Day",
            "Independence Day",
            "Labor Day",
        ]
    );
    let observed = set.dates(Observance::Observed);
    assert!(observed.windows(2).all(|w| w[0] < w[1]));
}

// ─── Weekday helpers ──────────────────────────────────────────────────────────

#[test]
fn test_nth_and_last_weekday_of_month() {
    assert_eq!(
        HolidayCalendar::nth_weekday_of_month(2025, Month::November, Weekday::Thursday, 4)
            .unwrap(),
        date(2025, 11, 27)
    );
    assert_eq!(
        HolidayCalendar::nth_weekday_of_month(2026, Month::September, Weekday::Monday, 1)
            .unwrap(),
        date(2026, 9, 7)
    );
    assert_eq!(
        HolidayCalendar::last_weekday_of_month(2026, Month::May, Weekday::Monday).unwrap(),
        date(2026, 5, 25)
    );
    // September 2025 has five Mondays (1, 8, 15, 22, 29) but no sixth
    assert_eq!(
        HolidayCalendar::nth_weekday_of_month(2025, Month::September, Weekday::Monday, 5)
            .unwrap(),
        date(2025, 9, 29)
    );
    let e = HolidayCalendar::nth_weekday_of_month(2025, Month::September, Weekday::Monday, 6)
        .unwrap_err();
    assert!(e.is_invalid_argument());
}

// ─── Calendar queries ─────────────────────────────────────────────────────────

#[test]
fn test_is_holiday_observed_vs_actual() {
    let cal = HolidayCalendar::new(2027).unwrap();
    // Juneteenth 2027 falls on a Saturday
    assert!(cal.is_holiday("2027-06-18", Observance::Observed).unwrap());
    assert!(!cal.is_holiday("2027-06-19", Observance::Observed).unwrap());
    assert!(cal.is_holiday("2027-06-19", Observance::Actual).unwrap());
    assert!(!cal.is_holiday("2027-06-18", Observance::Actual).unwrap());
    assert!(cal.is_holiday(None::<Date>, Observance::Observed).is_err());
}

#[test]
fn test_holiday_list_matches_observed_set() {
    for fiscal_year in 2000..=2040 {
        let cal = HolidayCalendar::new(fiscal_year).unwrap();
        let listed: HashSet<_> = cal.holiday_list(cal.bounds()).into_iter().collect();
        let observed: HashSet<_> = cal.holidays().dates(Observance::Observed).into_iter().collect();
        assert_eq!(listed, observed, "FY{fiscal_year}");

        let window = cal.bounds();
        let classified = cal.business_days_in(window)
            + cal.weekend_days_in(window)
            + listed.len() as u32;
        assert_eq!(classified, window.len_days(), "FY{fiscal_year}");
    }
}

proptest! {
    #[test]
    fn observed_dates_are_weekdays_inside_window(fiscal_year in 1901i32..2200) {
        let cal = HolidayCalendar::new(fiscal_year).unwrap();
        let window = cal.bounds();
        prop_assert!(cal.holidays().len() <= 11);
        for (holiday, dates) in cal.holidays().iter() {
            prop_assert!(window.contains(dates.observed), "{} {:?}", holiday, dates);
            prop_assert!(dates.observed.weekday().is_weekday());
            prop_assert!(dates.actual.days_between(dates.observed).abs() <= 1);
        }
        let unique: HashSet<_> = cal.holidays().dates(Observance::Observed).into_iter().collect();
        prop_assert_eq!(unique.len(), cal.holidays().len());
    }
}
