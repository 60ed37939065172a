//! # fiscal
//!
//! U.S. federal fiscal-year calendar arithmetic.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fy-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fiscal = "0.1"
//! ```
//!
//! ```rust
//! use fiscal::prelude::*;
//!
//! let fy = FiscalYear::new("2025-07-04").unwrap();
//! assert_eq!(fy.fiscal_year(), 2025);
//! assert_eq!(fy.fiscal_month_number(), 10);
//!
//! let holidays = fy.holidays().unwrap();
//! let july4 = holidays.get(FederalHoliday::IndependenceDay).unwrap();
//! assert_eq!(july4.observed, fy.date());
//!
//! // Failures are values; route them to a sink if they should be presented.
//! let sink = CollectingSink::new();
//! let bad = fy.count_weekends("2025-07-01", "").report_to(&sink);
//! assert!(bad.is_err());
//! assert_eq!(sink.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, error reporting, and settings.
pub use fy_core as core;

/// Dates, federal holidays, and fiscal-year context.
pub use fy_time as time;

/// The types most applications need.
pub mod prelude {
    pub use fy_core::{
        CollectingSink, Error, ErrorReport, ErrorSink, LogSink, NullSink, ReportExt, Result,
        ScopedEvaluationDate, Settings,
    };
    pub use fy_time::{
        Calendar, Date, DateRange, FederalHoliday, FiscalYear, FiscalYearSnapshot, HolidayCache,
        HolidayCalendar, HolidayDates, HolidaySet, Month, Observance, Weekday,
    };
}
