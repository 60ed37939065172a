//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date that stands in for
//! "today" whenever a fiscal-year context is bound without an explicit date.
//! It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! The date is stored as a day number (days since 0001-01-01 in the proleptic
//! Gregorian calendar, with 0001-01-01 = 1) so that this crate stays free of
//! any particular date type. `fy_time::Date` converts to and from it.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by fiscal-rs.
pub struct Settings {
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation date day number, or `None` to use the system
    /// clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date day number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        log::debug!("evaluation date set to day {serial}");
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace_evaluation_date_serial(&self, serial: Option<i32>) -> Option<i32> {
        std::mem::replace(
            &mut *self
                .evaluation_date
                .lock()
                .expect("Settings mutex poisoned"),
            serial,
        )
    }
}

/// RAII guard that sets the evaluation date and restores the previous value
/// on drop.
///
/// ```
/// use fy_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(739_160);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(739_160));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let previous = Settings::instance().replace_evaluation_date_serial(Some(serial));
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_date_serial(self.previous);
    }
}
