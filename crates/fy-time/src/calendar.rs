//! `Calendar` trait.
//!
//! A calendar knows which dates are business days. Range counts use
//! inclusive `[start, end]` bounds and are zero for an inverted range.

use fy_core::errors::Result;

use crate::date::Date;
use crate::date_range::DateRange;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal, FY2026)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count business days in `range`.
    fn business_days_in(&self, range: DateRange) -> u32 {
        range.days().filter(|d| self.is_business_day(*d)).count() as u32
    }

    /// Count weekend days in `range`.
    fn weekend_days_in(&self, range: DateRange) -> u32 {
        range.days().filter(|d| self.is_weekend(*d)).count() as u32
    }

    /// Non-business days in `range` that are not weekends.
    fn holiday_list(&self, range: DateRange) -> Vec<Date> {
        range
            .days()
            .filter(|d| !self.is_weekend(*d) && !self.is_business_day(*d))
            .collect()
    }

    /// The first business day on or after `date`.
    fn next_business_day(&self, mut date: Date) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// The last business day on or before `date`.
    fn previous_business_day(&self, mut date: Date) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.add_days(-1)?;
        }
        Ok(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
        assert!(cal.is_holiday(date(2023, 9, 2)));
        assert!(!cal.is_holiday(date(2023, 9, 4)));
    }

    #[test]
    fn next_and_previous() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.next_business_day(sat).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.previous_business_day(sat).unwrap(), date(2023, 9, 1));
    }

    #[test]
    fn range_counts() {
        let cal = WeekendsOnly;
        // Mon 2023-09-04 .. Sun 2023-09-10
        let week = DateRange::new(date(2023, 9, 4), date(2023, 9, 10));
        assert_eq!(cal.business_days_in(week), 5);
        assert_eq!(cal.weekend_days_in(week), 2);
        assert!(cal.holiday_list(week).is_empty());
    }
}
