//! `Date` type.
//!
//! A naive calendar date: no time of day, no timezone. `Date` wraps
//! [`chrono::NaiveDate`] and exposes the small arithmetic surface the fiscal
//! calculations need (day offsets, signed day differences, nth-weekday
//! lookup).
//!
//! # Day numbers
//! [`Date::serial`] returns the day number counted from 0001-01-01 (= 1) in
//! the proleptic Gregorian calendar. It is the representation used by
//! `fy_core::Settings` for the evaluation date.
//!
//! # Inputs
//! Operations that accept "a date" take any [`IntoDate`] value: a `Date`, a
//! `chrono::NaiveDate`, a `chrono::NaiveDateTime` (the time of day is
//! discarded), an ISO `YYYY-MM-DD` string, or an `Option` of those, where
//! `None` is rejected as an empty argument.

use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use fy_core::errors::{Error, Result};
use fy_core::{Settings, Year};
use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!(
                    "{year:04}-{month:02}-{day:02} is not a valid calendar date"
                ))
            })
    }

    /// Create a date from a serial day number (0001-01-01 = 1).
    pub fn from_serial(serial: i32) -> Result<Self> {
        NaiveDate::from_num_days_from_ce_opt(serial)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("serial {serial} out of range")))
    }

    /// January 1 of `year`.
    pub fn start_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn end_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    /// Today's date.
    ///
    /// Returns the evaluation date from [`Settings`] if one is set, otherwise
    /// the current local date.
    ///
    /// # Errors
    /// A date error if the evaluation date is not a representable date.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Ok(Date(chrono::Local::now().date_naive())),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial day number (0001-01-01 = 1).
    pub fn serial(&self) -> i32 {
        self.0.num_days_from_ce()
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.0.year()
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::from_number(self.month_number()).expect("chrono months are always 1..=12")
    }

    /// Return the month number (1–12).
    pub fn month_number(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Return `true` if this date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Return the underlying `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative to go back). Returns an error if the
    /// result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add_signed(Duration::days(i64::from(n)))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// The following day, if representable.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        (other.0 - self.0).num_days() as i32
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `Date::nth_weekday(3, Weekday::Wednesday, 2024, Month::March)`
    /// returns the third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is zero or larger than the number of
    /// such weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: Month) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month.number(), 1)?;
        // Days to advance from the 1st to reach the first occurrence
        let skip = (i32::from(weekday.ordinal()) - i32::from(first.weekday().ordinal()))
            .rem_euclid(7) as u8;
        let day = u32::from(1 + skip) + 7 * (u32::from(n) - 1);
        let count = weekday_count(weekday, year, month)?;
        if n > count {
            return Err(Error::InvalidArgument(format!(
                "{n}-th {weekday} does not exist in {year}-{:02} (only {count})",
                month.number()
            )));
        }
        Date::from_ymd(year, month.number(), day as u8)
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    pub fn last_weekday(weekday: Weekday, year: Year, month: Month) -> Result<Self> {
        let last = Date::from_ymd(year, month.number(), days_in_month(year, month)?)?;
        let back = (i32::from(last.weekday().ordinal()) - i32::from(weekday.ordinal()))
            .rem_euclid(7);
        last.add_days(-back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(dt: NaiveDateTime) -> Self {
        Date(dt.date())
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD: {e}")))
    }
}

/// Normalization of date-like inputs to a [`Date`].
pub trait IntoDate {
    /// Convert to a `Date`, failing on absent or unparsable input.
    fn into_date(self) -> Result<Date>;
}

impl IntoDate for Date {
    fn into_date(self) -> Result<Date> {
        Ok(self)
    }
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<Date> {
        Ok(self.into())
    }
}

impl IntoDate for NaiveDateTime {
    fn into_date(self) -> Result<Date> {
        Ok(self.into())
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<Date> {
        if self.trim().is_empty() {
            return Err(Error::InvalidInput("date".into()));
        }
        self.parse()
    }
}

impl<T: IntoDate> IntoDate for Option<T> {
    fn into_date(self) -> Result<Date> {
        fy_core::require!(self, "date").into_date()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format("%Y-%m-%d"))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: Month) -> Result<u8> {
    let first = Date::from_ymd(year, month.number(), 1)?;
    let next = first
        .0
        .checked_add_months(Months::new(1))
        .ok_or_else(|| Error::Date(format!("no month after {first}")))?;
    Ok((next - first.0).num_days() as u8)
}

/// Number of times `weekday` occurs in `month` of `year` (4 or 5).
pub fn weekday_count(weekday: Weekday, year: Year, month: Month) -> Result<u8> {
    let first = Date::from_ymd(year, month.number(), 1)?;
    let skip = (i32::from(weekday.ordinal()) - i32::from(first.weekday().ordinal()))
        .rem_euclid(7) as u8;
    Ok((days_in_month(year, month)? - 1 - skip) / 7 + 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
