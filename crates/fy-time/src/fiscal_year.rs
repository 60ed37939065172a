//! `FiscalYear`: a reference date bound to its calendar and federal fiscal
//! year.
//!
//! The U.S. federal fiscal year runs from October 1 through September 30 and
//! is named for the calendar year it ends in: 2025-10-01 falls in FY2026.
//! `BBFY` / `EBFY` are the beginning and ending calendar years of that
//! window.
//!
//! All queries are evaluated from the bound state on every call. Holiday
//! aware counts build a [`HolidayCalendar`] for the bound fiscal year.

use fy_core::errors::{Result, ResultExt};
use fy_core::{Real, Year};
use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, WeekendsOnly};
use crate::date::{Date, IntoDate};
use crate::date_range::DateRange;
use crate::holidays::{fiscal_year_window, HolidayCalendar, HolidaySet};
use crate::observance::Observance;

const MODULE: &str = module_path!();

/// Calendar and fiscal-year state for one reference date.
///
/// Invariant: `fiscal_bounds().start <= date() <= fiscal_bounds().end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FiscalYear {
    date: Date,
    calendar_year: Year,
    fiscal_year: Year,
    beginning_fiscal_year: Year,
    ending_fiscal_year: Year,
    calendar_bounds: DateRange,
    fiscal_bounds: DateRange,
}

impl FiscalYear {
    // ── Construction ──────────────────────────────────────────────────────────

    /// Bind to `reference`, or to today when `None`.
    ///
    /// "Today" is the [`Settings`](fy_core::Settings) evaluation date when one
    /// is set. A `NaiveDateTime` reference is truncated to its date.
    pub fn bind<D: IntoDate>(reference: Option<D>) -> Result<Self> {
        const METHOD: &str = "bind(reference)";
        let date = match reference {
            Some(d) => d.into_date(),
            None => Date::today(),
        }
        .context(MODULE, "FiscalYear", METHOD)?;
        Self::compute(date, METHOD)
    }

    /// Bind to `reference`.
    pub fn new(reference: impl IntoDate) -> Result<Self> {
        Self::bind(Some(reference))
    }

    /// Bind to today.
    pub fn today() -> Result<Self> {
        const METHOD: &str = "today()";
        let date = Date::today().context(MODULE, "FiscalYear", METHOD)?;
        Self::compute(date, METHOD)
    }

    /// Re-bind to `reference`, recomputing every field.
    ///
    /// On error `self` is left unchanged.
    pub fn rebind(&mut self, reference: impl IntoDate) -> Result<()> {
        const METHOD: &str = "rebind(reference)";
        let date = reference.into_date().context(MODULE, "FiscalYear", METHOD)?;
        *self = Self::compute(date, METHOD)?;
        Ok(())
    }

    fn compute(date: Date, method: &str) -> Result<Self> {
        Self::boundaries(date).context(MODULE, "FiscalYear", method)
    }

    fn boundaries(date: Date) -> Result<Self> {
        let year = date.year();
        let fiscal_year = if date.month().starts_next_fiscal_year() {
            year + 1
        } else {
            year
        };
        let calendar_bounds =
            DateRange::new(Date::start_of_year(year)?, Date::end_of_year(year)?);
        let fiscal_bounds = fiscal_year_window(fiscal_year)?;
        fy_core::ensure!(
            fiscal_bounds.contains(date),
            "{date} outside fiscal year window {fiscal_bounds}"
        );
        log::debug!("bound {date}: CY{year}, FY{fiscal_year}");
        Ok(Self {
            date,
            calendar_year: year,
            fiscal_year,
            beginning_fiscal_year: fiscal_year - 1,
            ending_fiscal_year: fiscal_year,
            calendar_bounds,
            fiscal_bounds,
        })
    }

    // ── Bound state ───────────────────────────────────────────────────────────

    /// The reference date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Calendar year of the reference date.
    pub fn calendar_year(&self) -> Year {
        self.calendar_year
    }

    /// Fiscal year of the reference date (named for its end year).
    pub fn fiscal_year(&self) -> Year {
        self.fiscal_year
    }

    /// BBFY: the calendar year the fiscal year begins in.
    pub fn beginning_fiscal_year(&self) -> Year {
        self.beginning_fiscal_year
    }

    /// EBFY: the calendar year the fiscal year ends in.
    pub fn ending_fiscal_year(&self) -> Year {
        self.ending_fiscal_year
    }

    /// `[Jan 1, Dec 31]` of the calendar year.
    pub fn calendar_bounds(&self) -> DateRange {
        self.calendar_bounds
    }

    /// `[Oct 1, Sep 30]` of the fiscal year.
    pub fn fiscal_bounds(&self) -> DateRange {
        self.fiscal_bounds
    }

    // ── Calendar-year queries ─────────────────────────────────────────────────

    /// 1-based day index within the calendar year (1..=366).
    pub fn calendar_day_of_year(&self) -> u32 {
        self.calendar_bounds.start.days_between(self.date) as u32 + 1
    }

    /// Days in the calendar year (365 or 366).
    pub fn calendar_days_in_year(&self) -> u32 {
        self.calendar_bounds.len_days()
    }

    /// Completed days of the calendar year before the reference date.
    pub fn calendar_elapsed_days(&self) -> u32 {
        floor_days(self.calendar_bounds.start.days_between(self.date))
    }

    /// Days of the calendar year after the reference date.
    pub fn calendar_remaining_days(&self) -> u32 {
        floor_days(self.date.days_between(self.calendar_bounds.end))
    }

    /// Completed months of the calendar year (0..=11).
    pub fn calendar_elapsed_months(&self) -> u8 {
        self.date.month_number().saturating_sub(1)
    }

    /// Months of the calendar year after the current one (0..=11).
    pub fn calendar_remaining_months(&self) -> u8 {
        12 - self.date.month_number()
    }

    /// Share of the calendar year completed, in percent.
    pub fn calendar_percent_elapsed(&self) -> Real {
        percent(self.calendar_elapsed_days(), self.calendar_days_in_year())
    }

    // ── Fiscal-year queries ───────────────────────────────────────────────────

    /// 1-based day index within the fiscal year (1..=366).
    pub fn fiscal_day_of_year(&self) -> u32 {
        self.fiscal_bounds.start.days_between(self.date) as u32 + 1
    }

    /// Days in the fiscal year (365 or 366).
    pub fn fiscal_days_in_year(&self) -> u32 {
        self.fiscal_bounds.len_days()
    }

    /// Position of the current month in the fiscal year
    /// (October = 1 … September = 12).
    pub fn fiscal_month_number(&self) -> u8 {
        self.date.month().fiscal_number()
    }

    /// Completed days of the fiscal year before the reference date.
    pub fn fiscal_elapsed_days(&self) -> u32 {
        floor_days(self.fiscal_bounds.start.days_between(self.date))
    }

    /// Days of the fiscal year after the reference date.
    pub fn fiscal_days_remaining(&self) -> u32 {
        floor_days(self.date.days_between(self.fiscal_bounds.end))
    }

    /// Completed months of the fiscal year (0..=11).
    pub fn fiscal_elapsed_months(&self) -> u8 {
        self.fiscal_month_number() - 1
    }

    /// Months of the fiscal year after the current one (0..=11).
    pub fn fiscal_remaining_months(&self) -> u8 {
        12 - self.fiscal_month_number()
    }

    /// Share of the fiscal year completed, in percent.
    pub fn fiscal_percent_elapsed(&self) -> Real {
        percent(self.fiscal_elapsed_days(), self.fiscal_days_in_year())
    }

    // ── Boundary checks ───────────────────────────────────────────────────────

    /// Return `true` on October 1, the first day of the fiscal year.
    pub fn is_fiscal_start_year(&self) -> bool {
        self.date == self.fiscal_bounds.start
    }

    /// Return `true` on September 30, the last day of the fiscal year.
    pub fn is_fiscal_end_year(&self) -> bool {
        self.date == self.fiscal_bounds.end
    }

    /// Return `true` on January 1.
    pub fn is_calendar_start_year(&self) -> bool {
        self.date == self.calendar_bounds.start
    }

    /// Return `true` on December 31.
    pub fn is_calendar_end_year(&self) -> bool {
        self.date == self.calendar_bounds.end
    }

    // ── Holidays and range counts ─────────────────────────────────────────────

    /// Federal holiday calendar for the bound fiscal year.
    pub fn holiday_calendar(&self) -> Result<HolidayCalendar> {
        HolidayCalendar::new(self.fiscal_year)
    }

    /// Federal holidays observed in the bound fiscal year.
    pub fn holidays(&self) -> Result<HolidaySet> {
        Ok(self.holiday_calendar()?.holidays().clone())
    }

    /// Weekend days in `[start, end]`; 0 if `start > end`.
    pub fn count_weekends(&self, start: impl IntoDate, end: impl IntoDate) -> Result<u32> {
        let range = range(start, end).context(MODULE, "FiscalYear", "count_weekends(start, end)")?;
        Ok(WeekendsOnly.weekend_days_in(range))
    }

    /// Holidays of the bound fiscal year whose observed/actual date lies in
    /// `[start, end]`; 0 if `start > end`.
    pub fn count_holidays(
        &self,
        start: impl IntoDate,
        end: impl IntoDate,
        observance: Observance,
    ) -> Result<u32> {
        let range = range(start, end).context(
            MODULE,
            "FiscalYear",
            "count_holidays(start, end, observance)",
        )?;
        if range.is_empty() {
            return Ok(0);
        }
        let calendar = self.holiday_calendar()?;
        Ok(calendar
            .holidays()
            .dates(observance)
            .into_iter()
            .filter(|d| range.contains(*d))
            .count() as u32)
    }

    /// Monday–Friday days in `[start, end]` that are not a holiday date of the
    /// bound fiscal year; 0 if `start > end`.
    pub fn count_workdays(
        &self,
        start: impl IntoDate,
        end: impl IntoDate,
        observance: Observance,
    ) -> Result<u32> {
        let range = range(start, end).context(
            MODULE,
            "FiscalYear",
            "count_workdays(start, end, observance)",
        )?;
        if range.is_empty() {
            return Ok(0);
        }
        let holidays = self.holiday_calendar()?.holidays().dates(observance);
        Ok(range
            .days()
            .filter(|d| d.weekday().is_weekday() && !holidays.contains(d))
            .count() as u32)
    }

    // ── Export ────────────────────────────────────────────────────────────────

    /// Flat record of the bound state for reporting.
    pub fn export_snapshot(&self) -> FiscalYearSnapshot {
        FiscalYearSnapshot {
            date: self.date,
            calendar_year: self.calendar_year,
            fiscal_year: self.fiscal_year,
            beginning_fiscal_year: self.beginning_fiscal_year,
            ending_fiscal_year: self.ending_fiscal_year,
            cy_start_date: self.calendar_bounds.start,
            cy_end_date: self.calendar_bounds.end,
            fy_start_date: self.fiscal_bounds.start,
            fy_end_date: self.fiscal_bounds.end,
        }
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FiscalYear(date={}, CY={}, FY={}, BBFY={}, EBFY={})",
            self.date,
            self.calendar_year,
            self.fiscal_year,
            self.beginning_fiscal_year,
            self.ending_fiscal_year
        )
    }
}

/// Flat export of a [`FiscalYear`]'s identity and boundary fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalYearSnapshot {
    /// Reference date.
    pub date: Date,
    /// Calendar year.
    pub calendar_year: Year,
    /// Fiscal year.
    pub fiscal_year: Year,
    /// BBFY.
    pub beginning_fiscal_year: Year,
    /// EBFY.
    pub ending_fiscal_year: Year,
    /// January 1 of the calendar year.
    pub cy_start_date: Date,
    /// December 31 of the calendar year.
    pub cy_end_date: Date,
    /// October 1 opening the fiscal year.
    pub fy_start_date: Date,
    /// September 30 closing the fiscal year.
    pub fy_end_date: Date,
}

fn range(start: impl IntoDate, end: impl IntoDate) -> Result<DateRange> {
    Ok(DateRange::new(start.into_date()?, end.into_date()?))
}

fn floor_days(days: i32) -> u32 {
    days.max(0) as u32
}

fn percent(part: u32, whole: u32) -> Real {
    Real::from(part) / Real::from(whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fy(y: i32, m: u8, d: u8) -> FiscalYear {
        FiscalYear::new(Date::from_ymd(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn october_starts_next_fiscal_year() {
        let f = fy(2025, 10, 1);
        assert_eq!(f.calendar_year(), 2025);
        assert_eq!(f.fiscal_year(), 2026);
        assert_eq!(f.beginning_fiscal_year(), 2025);
        assert_eq!(f.ending_fiscal_year(), 2026);
        assert!(f.is_fiscal_start_year());
        assert_eq!(f.fiscal_day_of_year(), 1);
        assert_eq!(f.fiscal_elapsed_days(), 0);
        assert_eq!(f.fiscal_month_number(), 1);
    }

    #[test]
    fn september_closes_fiscal_year() {
        let f = fy(2026, 9, 30);
        assert_eq!(f.fiscal_year(), 2026);
        assert!(f.is_fiscal_end_year());
        assert_eq!(f.fiscal_days_remaining(), 0);
        assert_eq!(f.fiscal_remaining_months(), 0);
        assert_eq!(f.fiscal_elapsed_months(), 11);
        assert_eq!(f.fiscal_day_of_year(), 365);
    }

    #[test]
    fn leap_day_counts() {
        let f = fy(2024, 2, 29);
        assert_eq!(f.calendar_day_of_year(), 60);
        assert_eq!(f.calendar_days_in_year(), 366);
        assert_eq!(f.fiscal_days_in_year(), 366);
        assert_eq!(f.calendar_elapsed_days(), 59);
        assert_eq!(f.calendar_remaining_days(), 306);
        assert_eq!(f.calendar_elapsed_months(), 1);
        assert_eq!(f.calendar_remaining_months(), 10);
        assert_eq!(f.fiscal_month_number(), 5);
    }

    #[test]
    fn percentages() {
        let f = fy(2025, 7, 2);
        assert_relative_eq!(
            f.calendar_percent_elapsed(),
            182.0 / 365.0 * 100.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(fy(2024, 10, 1).fiscal_percent_elapsed(), 0.0);
    }

    #[test]
    fn rebind_recomputes_everything() {
        let mut f = fy(2025, 9, 30);
        assert_eq!(f.fiscal_year(), 2025);
        f.rebind("2025-10-01").unwrap();
        assert_eq!(f, fy(2025, 10, 1));
        assert!(f.rebind("not a date").is_err());
        assert_eq!(f, fy(2025, 10, 1));
    }

    #[test]
    fn boundary_failures_name_the_calling_method() {
        // the last representable date has no fiscal-year end
        let last = chrono::NaiveDate::MAX;

        let e = FiscalYear::new(last).unwrap_err();
        assert_eq!(e.context().unwrap().method, "bind(reference)");

        let mut f = fy(2025, 10, 1);
        let e = f.rebind(last).unwrap_err();
        assert_eq!(e.context().unwrap().method, "rebind(reference)");
        assert_eq!(f, fy(2025, 10, 1));
    }

    #[test]
    fn display_summary() {
        assert_eq!(
            fy(2025, 10, 1).to_string(),
            "FiscalYear(date=2025-10-01, CY=2025, FY=2026, BBFY=2025, EBFY=2026)"
        );
    }

    #[test]
    fn inverted_ranges_count_zero() {
        let f = fy(2025, 10, 1);
        assert_eq!(f.count_weekends("2025-10-07", "2025-10-01").unwrap(), 0);
        assert_eq!(
            f.count_holidays("2025-12-31", "2025-10-01", Observance::Observed)
                .unwrap(),
            0
        );
        assert_eq!(
            f.count_workdays("2025-12-31", "2025-10-01", Observance::Actual)
                .unwrap(),
            0
        );
    }

    #[test]
    fn empty_range_arguments_rejected() {
        let f = fy(2025, 10, 1);
        let e = f.count_weekends(None::<Date>, "2025-10-07").unwrap_err();
        assert!(e.is_invalid_input());
        assert_eq!(e.context().unwrap().method, "count_weekends(start, end)");
    }
}
