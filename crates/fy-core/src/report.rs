//! Error reporting to an external presentation sink.
//!
//! Fallible operations return [`Result`]; nothing in the workspace reports on
//! its own. A caller that wants failures presented (a dialog, a log, a test
//! collector) routes them through [`ReportExt::report_to`], which hands an
//! [`ErrorReport`] to an [`ErrorSink`] and passes the error through unchanged.

use std::sync::Mutex;

use crate::errors::{Error, ErrorContext, Result};

/// Structured payload handed to an [`ErrorSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// The failure itself.
    pub underlying_error: Error,
    /// Short title for presentation.
    pub heading: String,
    /// Component that raised the error.
    pub cause: String,
    /// Method that raised the error.
    pub method: String,
    /// Module that raised the error.
    pub module: String,
}

impl ErrorReport {
    /// Default heading used when none is supplied.
    pub const DEFAULT_HEADING: &'static str = "Error";

    /// Build a report from an error.
    ///
    /// The location fields are taken from the error's [`ErrorContext`] if it
    /// carries one, and are empty otherwise.
    pub fn new(error: Error) -> Self {
        let ctx = error.context().cloned().unwrap_or_default();
        Self {
            underlying_error: error,
            heading: Self::DEFAULT_HEADING.to_owned(),
            cause: ctx.cause,
            method: ctx.method,
            module: ctx.module,
        }
    }

    /// Replace the heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Fill location fields that the error itself did not carry.
    pub fn with_fallback_context(mut self, ctx: &ErrorContext) -> Self {
        if self.module.is_empty() {
            self.module.clone_from(&ctx.module);
        }
        if self.cause.is_empty() {
            self.cause.clone_from(&ctx.cause);
        }
        if self.method.is_empty() {
            self.method.clone_from(&ctx.method);
        }
        self
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [module={}, cause={}, method={}]: {}",
            self.heading,
            self.module,
            self.cause,
            self.method,
            self.underlying_error.root()
        )
    }
}

/// A presentation collaborator that accepts error reports.
///
/// Implementations present the report synchronously and return once it has
/// been dealt with.
pub trait ErrorSink {
    /// Present `report`.
    fn report(&self, report: &ErrorReport);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &S {
    fn report(&self, report: &ErrorReport) {
        (**self).report(report)
    }
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&self, _report: &ErrorReport) {}
}

/// Sink that forwards reports to the `log` facade at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, report: &ErrorReport) {
        log::error!(target: "fy_core::report", "{report}");
    }
}

/// Sink that stores every report it receives.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<ErrorReport>>,
}

impl CollectingSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the collected reports, oldest first.
    pub fn reports(&self) -> Vec<ErrorReport> {
        self.reports
            .lock()
            .expect("CollectingSink mutex poisoned")
            .clone()
    }

    /// Number of collected reports.
    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .expect("CollectingSink mutex poisoned")
            .len()
    }

    /// Return `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, report: &ErrorReport) {
        self.reports
            .lock()
            .expect("CollectingSink mutex poisoned")
            .push(report.clone());
    }
}

/// Route the error arm of a [`Result`] to an [`ErrorSink`].
pub trait ReportExt<T> {
    /// Report any error to `sink` and return the result unchanged.
    fn report_to(self, sink: &dyn ErrorSink) -> Result<T>;

    /// Like [`report_to`](Self::report_to) with a custom heading.
    fn report_with_heading(self, sink: &dyn ErrorSink, heading: &str) -> Result<T>;
}

impl<T> ReportExt<T> for Result<T> {
    fn report_to(self, sink: &dyn ErrorSink) -> Result<T> {
        self.report_with_heading(sink, ErrorReport::DEFAULT_HEADING)
    }

    fn report_with_heading(self, sink: &dyn ErrorSink, heading: &str) -> Result<T> {
        if let Err(e) = &self {
            sink.report(&ErrorReport::new(e.clone()).with_heading(heading));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResultExt;

    #[test]
    fn report_takes_fields_from_context() {
        let err = Error::InvalidArgument("n = 6".into()).with_context(ErrorContext::new(
            "fy_time::holidays",
            "HolidayCalendar",
            "nth_weekday_of_month",
        ));
        let report = ErrorReport::new(err);
        assert_eq!(report.heading, "Error");
        assert_eq!(report.module, "fy_time::holidays");
        assert_eq!(report.cause, "HolidayCalendar");
        assert_eq!(report.method, "nth_weekday_of_month");
    }

    #[test]
    fn fallback_context_only_fills_gaps() {
        let report = ErrorReport::new(Error::Runtime("boom".into()))
            .with_fallback_context(&ErrorContext::new("m", "C", "f"));
        assert_eq!(report.module, "m");
        assert_eq!(report.cause, "C");
        assert_eq!(report.method, "f");
    }

    #[test]
    fn collecting_sink_records_errors_only() {
        let sink = CollectingSink::new();
        let ok: Result<i32> = Ok(1);
        assert_eq!(ok.report_to(&sink), Ok(1));
        assert!(sink.is_empty());

        let err: Result<i32> = Err(Error::Date("bad".into()));
        let err = err.context("m", "C", "f()").report_with_heading(&sink, "Dates");
        assert!(err.is_err());
        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].heading, "Dates");
        assert_eq!(reports[0].method, "f()");
    }

    #[test]
    fn null_and_log_sinks_accept_reports() {
        let err: Result<()> = Err(Error::Runtime("ignored".into()));
        assert!(err.clone().report_to(&NullSink).is_err());
        assert!(err.report_to(&LogSink).is_err());
    }
}
