//! # fy-time
//!
//! Dates, U.S. federal holidays, and fiscal-year context.
//!
//! ```
//! use fy_time::{FiscalYear, Observance};
//!
//! let fy = FiscalYear::new("2025-10-01").unwrap();
//! assert_eq!(fy.fiscal_year(), 2026);
//! assert!(fy.is_fiscal_start_year());
//! assert_eq!(fy.count_weekends("2025-10-01", "2025-10-07").unwrap(), 2);
//! assert_eq!(
//!     fy.count_workdays("2025-10-01", "2025-10-31", Observance::Observed).unwrap(),
//!     22
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// `Date` type and date-like input normalization.
pub mod date;

/// `DateRange`: an inclusive span of days.
pub mod date_range;

/// `FiscalYear`: reference date bound to its calendar and fiscal year.
pub mod fiscal_year;

/// Memoized holiday calendars.
pub mod holiday_cache;

/// U.S. federal holidays by fiscal year.
pub mod holidays;

/// `Month`: month of the year.
pub mod month;

/// Observed vs. actual holiday dates.
pub mod observance;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use date::{Date, IntoDate};
pub use date_range::DateRange;
pub use fiscal_year::{FiscalYear, FiscalYearSnapshot};
pub use holiday_cache::HolidayCache;
pub use holidays::{
    compute_holidays, observed_date, FederalHoliday, HolidayCalendar, HolidayDates, HolidaySet,
};
pub use month::Month;
pub use observance::Observance;
pub use weekday::Weekday;
