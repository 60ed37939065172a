//! U.S. federal holidays by fiscal year.
//!
//! Eleven holidays are recognised (5 U.S.C. 6103):
//! * Columbus Day (2nd Mon in Oct)
//! * Veterans Day (Nov 11)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25)
//! * New Year's Day (Jan 1)
//! * Birthday of Martin Luther King, Jr. (3rd Mon in Jan)
//! * Washington's Birthday (3rd Mon in Feb)
//! * Memorial Day (last Mon in May)
//! * Juneteenth National Independence Day (Jun 19)
//! * Independence Day (Jul 4)
//! * Labor Day (1st Mon in Sep)
//!
//! The October–December holidays are taken from the fiscal year's start
//! year, the rest from its end year. A holiday on a Saturday is observed the
//! Friday before, one on a Sunday the Monday after. Only holidays whose
//! observed date falls inside `[Oct 1, Sep 30]` of the fiscal year are kept.

use fy_core::errors::{Error, Result, ResultExt};
use fy_core::Year;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::date::{Date, IntoDate};
use crate::date_range::DateRange;
use crate::month::Month;
use crate::observance::Observance;
use crate::weekday::Weekday;

const MODULE: &str = module_path!();

/// One of the eleven U.S. federal holidays.
///
/// Variants are ordered as they occur within a fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FederalHoliday {
    /// 2nd Monday of October.
    ColumbusDay,
    /// November 11.
    VeteransDay,
    /// 4th Thursday of November.
    ThanksgivingDay,
    /// December 25.
    ChristmasDay,
    /// January 1.
    NewYearsDay,
    /// 3rd Monday of January.
    MartinLutherKingJrDay,
    /// 3rd Monday of February.
    WashingtonsBirthday,
    /// Last Monday of May.
    MemorialDay,
    /// June 19.
    Juneteenth,
    /// July 4.
    IndependenceDay,
    /// 1st Monday of September.
    LaborDay,
}

/// How a holiday's actual date is found in its calendar year.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed(Month, u8),
    Nth(u8, Weekday, Month),
    Last(Weekday, Month),
}

impl FederalHoliday {
    /// All holidays in fiscal-year order.
    pub const ALL: [FederalHoliday; 11] = [
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::ThanksgivingDay,
        FederalHoliday::ChristmasDay,
        FederalHoliday::NewYearsDay,
        FederalHoliday::MartinLutherKingJrDay,
        FederalHoliday::WashingtonsBirthday,
        FederalHoliday::MemorialDay,
        FederalHoliday::Juneteenth,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
    ];

    /// The statutory name, used as the holiday's unique key.
    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::ThanksgivingDay => "Thanksgiving Day",
            FederalHoliday::ChristmasDay => "Christmas Day",
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingJrDay => "Birthday of Martin Luther King, Jr.",
            FederalHoliday::WashingtonsBirthday => "Washington's Birthday",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::Juneteenth => "Juneteenth National Independence Day",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
        }
    }

    /// Look a holiday up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }

    fn rule(&self) -> Rule {
        use Month::*;
        match self {
            FederalHoliday::ColumbusDay => Rule::Nth(2, Weekday::Monday, October),
            FederalHoliday::VeteransDay => Rule::Fixed(November, 11),
            FederalHoliday::ThanksgivingDay => Rule::Nth(4, Weekday::Thursday, November),
            FederalHoliday::ChristmasDay => Rule::Fixed(December, 25),
            FederalHoliday::NewYearsDay => Rule::Fixed(January, 1),
            FederalHoliday::MartinLutherKingJrDay => Rule::Nth(3, Weekday::Monday, January),
            FederalHoliday::WashingtonsBirthday => Rule::Nth(3, Weekday::Monday, February),
            FederalHoliday::MemorialDay => Rule::Last(Weekday::Monday, May),
            FederalHoliday::Juneteenth => Rule::Fixed(June, 19),
            FederalHoliday::IndependenceDay => Rule::Fixed(July, 4),
            FederalHoliday::LaborDay => Rule::Nth(1, Weekday::Monday, September),
        }
    }

    /// The actual (unshifted) date of this holiday within `fiscal_year`.
    pub fn actual_date(&self, fiscal_year: Year) -> Result<Date> {
        let rule = self.rule();
        let month = match rule {
            Rule::Fixed(m, _) | Rule::Nth(_, _, m) | Rule::Last(_, m) => m,
        };
        let year = if month.starts_next_fiscal_year() {
            start_year(fiscal_year)?
        } else {
            fiscal_year
        };
        match rule {
            Rule::Fixed(m, d) => Date::from_ymd(year, m.number(), d),
            Rule::Nth(n, w, m) => Date::nth_weekday(n, w, year, m),
            Rule::Last(w, m) => Date::last_weekday(w, year, m),
        }
    }
}

impl std::fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A holiday's calendar date and its weekend-adjusted observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayDates {
    /// The date the holiday falls on.
    pub actual: Date,
    /// The date it is observed on.
    pub observed: Date,
}

impl HolidayDates {
    /// Return the date selected by `observance`.
    pub fn date(&self, observance: Observance) -> Date {
        match observance {
            Observance::Observed => self.observed,
            Observance::Actual => self.actual,
        }
    }
}

/// The federal holidays of one fiscal year, keyed by holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    fiscal_year: Year,
    entries: Vec<(FederalHoliday, HolidayDates)>,
}

impl HolidaySet {
    /// The fiscal year these holidays belong to.
    pub fn fiscal_year(&self) -> Year {
        self.fiscal_year
    }

    /// Dates of `holiday`, if it is observed within this fiscal year.
    pub fn get(&self, holiday: FederalHoliday) -> Option<&HolidayDates> {
        self.entries
            .iter()
            .find(|(h, _)| *h == holiday)
            .map(|(_, dates)| dates)
    }

    /// Dates of the holiday named `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&HolidayDates> {
        FederalHoliday::from_name(name).and_then(|h| self.get(h))
    }

    /// Iterate over `(holiday, dates)` in fiscal-year order.
    pub fn iter(&self) -> impl Iterator<Item = (FederalHoliday, &HolidayDates)> + '_ {
        self.entries.iter().map(|(h, d)| (*h, d))
    }

    /// Holiday names in fiscal-year order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(h, _)| h.name())
    }

    /// The observed or actual dates of every holiday, in order.
    pub fn dates(&self, observance: Observance) -> Vec<Date> {
        self.entries.iter().map(|(_, d)| d.date(observance)).collect()
    }

    /// Return `true` if some holiday's observed/actual date equals `date`.
    pub fn contains_date(&self, date: Date, observance: Observance) -> bool {
        self.entries.iter().any(|(_, d)| d.date(observance) == date)
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shift a weekend holiday to its observed weekday.
///
/// Saturday moves back to Friday, Sunday forward to Monday; any other day is
/// returned unchanged.
pub fn observed_date(actual: Date) -> Result<Date> {
    match actual.weekday() {
        Weekday::Saturday => actual.add_days(-1),
        Weekday::Sunday => actual.add_days(1),
        _ => Ok(actual),
    }
}

/// The calendar year a fiscal year begins in.
pub fn start_year(fiscal_year: Year) -> Result<Year> {
    fiscal_year
        .checked_sub(1)
        .ok_or_else(|| Error::Date(format!("FY{fiscal_year} has no start year")))
}

/// The federal fiscal-year window: Oct 1 of `fiscal_year - 1` through
/// Sep 30 of `fiscal_year`.
pub fn fiscal_year_window(fiscal_year: Year) -> Result<DateRange> {
    Ok(DateRange::new(
        Date::from_ymd(start_year(fiscal_year)?, 10, 1)?,
        Date::from_ymd(fiscal_year, 9, 30)?,
    ))
}

/// Compute the federal holidays observed within `fiscal_year`.
pub fn compute_holidays(fiscal_year: Year) -> Result<HolidaySet> {
    compute(fiscal_year).context(MODULE, "HolidayCalendar", "compute_holidays(fiscal_year)")
}

fn compute(fiscal_year: Year) -> Result<HolidaySet> {
    let window = fiscal_year_window(fiscal_year)?;
    let mut entries = Vec::with_capacity(FederalHoliday::ALL.len());
    for holiday in FederalHoliday::ALL {
        let actual = holiday.actual_date(fiscal_year)?;
        let observed = observed_date(actual)?;
        if window.contains(observed) {
            entries.push((holiday, HolidayDates { actual, observed }));
        } else {
            log::trace!("FY{fiscal_year}: {holiday} observed {observed} outside {window}");
        }
    }
    Ok(HolidaySet {
        fiscal_year,
        entries,
    })
}

/// Federal holiday calendar for a single fiscal year.
///
/// The holiday set is computed when the calendar is built; building one per
/// query is cheap. See [`HolidayCache`](crate::HolidayCache) to share sets
/// across queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    window: DateRange,
    holidays: HolidaySet,
    name: String,
}

impl HolidayCalendar {
    /// Build the calendar for `fiscal_year`.
    pub fn new(fiscal_year: Year) -> Result<Self> {
        let window =
            fiscal_year_window(fiscal_year).context(MODULE, "HolidayCalendar", "new(fiscal_year)")?;
        Ok(Self {
            window,
            holidays: compute_holidays(fiscal_year)?,
            name: format!("United States (Federal, FY{fiscal_year})"),
        })
    }

    /// The fiscal year this calendar covers.
    pub fn fiscal_year(&self) -> Year {
        self.holidays.fiscal_year()
    }

    /// Oct 1 of the fiscal year's start year.
    pub fn fy_start(&self) -> Date {
        self.window.start
    }

    /// Sep 30 of the fiscal year.
    pub fn fy_end(&self) -> Date {
        self.window.end
    }

    /// The fiscal-year window.
    pub fn bounds(&self) -> DateRange {
        self.window
    }

    /// The holidays observed in this fiscal year.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Dates of the holiday named `name`, if observed in this fiscal year.
    pub fn holiday(&self, name: &str) -> Option<&HolidayDates> {
        self.holidays.get_by_name(name)
    }

    /// Return `true` if `when` is one of this fiscal year's holidays.
    pub fn is_holiday(&self, when: impl IntoDate, observance: Observance) -> Result<bool> {
        let date = when
            .into_date()
            .context(MODULE, "HolidayCalendar", "is_holiday(when, observance)")?;
        Ok(self.holidays.contains_date(date, observance))
    }

    /// Return `true` if `when` is a Saturday or Sunday.
    ///
    /// # Errors
    /// An input-validation error if `when` is absent.
    pub fn is_weekend(&self, when: impl IntoDate) -> Result<bool> {
        let date = when
            .into_date()
            .context(MODULE, "HolidayCalendar", "is_weekend(when)")?;
        Ok(date.is_weekend())
    }

    /// The `n`-th (1-based) `weekday` of `month` in `year`.
    ///
    /// # Errors
    /// An invalid-argument error if the month has fewer than `n` such
    /// weekdays.
    pub fn nth_weekday_of_month(year: Year, month: Month, weekday: Weekday, n: u8) -> Result<Date> {
        Date::nth_weekday(n, weekday, year, month).context(
            MODULE,
            "HolidayCalendar",
            "nth_weekday_of_month(year, month, weekday, n)",
        )
    }

    /// The last `weekday` of `month` in `year`.
    pub fn last_weekday_of_month(year: Year, month: Month, weekday: Weekday) -> Result<Date> {
        Date::last_weekday(weekday, year, month).context(
            MODULE,
            "HolidayCalendar",
            "last_weekday_of_month(year, month, weekday)",
        )
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.weekday().is_weekend() && !self.holidays.contains_date(date, Observance::Observed)
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains_date(date, Observance::Observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn names_are_unique_keys() {
        for h in FederalHoliday::ALL {
            assert_eq!(FederalHoliday::from_name(h.name()), Some(h));
        }
        assert_eq!(FederalHoliday::from_name("Easter"), None);
    }

    #[test]
    fn observance_shift() {
        // 2026-07-04 is a Saturday
        assert_eq!(observed_date(date(2026, 7, 4)).unwrap(), date(2026, 7, 3));
        // 2027-07-04 is a Sunday
        assert_eq!(observed_date(date(2027, 7, 4)).unwrap(), date(2027, 7, 5));
        // 2025-07-04 is a Friday
        assert_eq!(observed_date(date(2025, 7, 4)).unwrap(), date(2025, 7, 4));
    }

    #[test]
    fn independence_day_fy2025() {
        let set = compute_holidays(2025).unwrap();
        let d = set.get(FederalHoliday::IndependenceDay).unwrap();
        assert_eq!(d.actual, date(2025, 7, 4));
        assert_eq!(d.observed, date(2025, 7, 4));
    }

    #[test]
    fn start_year_holidays_come_from_previous_calendar_year() {
        let set = compute_holidays(2026).unwrap();
        assert_eq!(
            set.get(FederalHoliday::ColumbusDay).unwrap().actual,
            date(2025, 10, 13)
        );
        assert_eq!(
            set.get(FederalHoliday::ThanksgivingDay).unwrap().actual,
            date(2025, 11, 27)
        );
        assert_eq!(
            set.get(FederalHoliday::LaborDay).unwrap().actual,
            date(2026, 9, 7)
        );
    }

    #[test]
    fn new_years_day_shifted_into_december() {
        // 2022-01-01 is a Saturday; observed Friday 2021-12-31, still in FY2022
        let cal = HolidayCalendar::new(2022).unwrap();
        let ny = cal.holiday("New Year's Day").unwrap();
        assert_eq!(ny.actual, date(2022, 1, 1));
        assert_eq!(ny.observed, date(2021, 12, 31));
        assert!(cal.is_holiday(date(2021, 12, 31), Observance::Observed).unwrap());
        assert!(!cal.is_holiday(date(2021, 12, 31), Observance::Actual).unwrap());
        assert!(cal.is_holiday(date(2022, 1, 1), Observance::Actual).unwrap());
    }

    #[test]
    fn calendar_trait_business_days() {
        let cal = HolidayCalendar::new(2026).unwrap();
        // Thanksgiving (Thu) is closed; the Friday after is open
        assert!(!cal.is_business_day(date(2025, 11, 27)));
        assert!(cal.is_business_day(date(2025, 11, 28)));
        // Independence Day observed Friday 2026-07-03
        assert!(!cal.is_business_day(date(2026, 7, 3)));
        assert_eq!(
            cal.next_business_day(date(2026, 7, 3)).unwrap(),
            date(2026, 7, 6)
        );
        assert_eq!(cal.holiday_list(cal.bounds()).len(), 11);
    }

    #[test]
    fn nth_weekday_errors_carry_context() {
        let e = HolidayCalendar::nth_weekday_of_month(2024, Month::February, Weekday::Wednesday, 5)
            .unwrap_err();
        assert!(e.is_invalid_argument());
        let ctx = e.context().unwrap();
        assert_eq!(ctx.cause, "HolidayCalendar");
        assert_eq!(ctx.module, "fy_time::holidays");
    }

    #[test]
    fn trait_is_holiday_uses_observed_dates() {
        let cal = HolidayCalendar::new(2026).unwrap();
        // Independence Day 2026 is a Saturday, observed Friday
        assert!(Calendar::is_holiday(&cal, date(2026, 7, 3)));
        assert!(!Calendar::is_holiday(&cal, date(2026, 7, 4)));
        // an ordinary weekend is not a holiday
        assert!(!Calendar::is_holiday(&cal, date(2025, 10, 4)));
    }

    #[test]
    fn unrepresentable_fiscal_years_are_errors() {
        assert!(start_year(i32::MIN).is_err());
        assert!(fiscal_year_window(i32::MIN).is_err());
        assert!(FederalHoliday::ColumbusDay.actual_date(i32::MIN).is_err());
        assert!(compute_holidays(i32::MIN).is_err());
        assert!(HolidayCalendar::new(i32::MIN).is_err());
        assert!(HolidayCalendar::new(i32::MAX).is_err());
    }

    #[test]
    fn is_weekend_rejects_empty_input() {
        let cal = HolidayCalendar::new(2026).unwrap();
        assert!(cal.is_weekend(date(2025, 10, 4)).unwrap());
        assert!(!cal.is_weekend(date(2025, 10, 6)).unwrap());
        assert!(cal.is_weekend(None::<Date>).unwrap_err().is_invalid_input());
    }
}
