//! Memoized holiday calendars keyed by fiscal year.
//!
//! Holiday computation is a pure function of the fiscal year, so calendars
//! can be shared freely. The cache is an explicit value owned by the caller;
//! nothing in the library consults it implicitly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fy_core::errors::Result;
use fy_core::Year;

use crate::holidays::HolidayCalendar;

/// Thread-safe cache of [`HolidayCalendar`]s.
#[derive(Debug, Default)]
pub struct HolidayCache {
    calendars: Mutex<HashMap<Year, Arc<HolidayCalendar>>>,
}

impl HolidayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the calendar for `fiscal_year`, computing it on first use.
    ///
    /// Failed computations are not cached.
    pub fn get(&self, fiscal_year: Year) -> Result<Arc<HolidayCalendar>> {
        let mut calendars = self.calendars.lock().expect("HolidayCache mutex poisoned");
        if let Some(cal) = calendars.get(&fiscal_year) {
            return Ok(Arc::clone(cal));
        }
        let cal = Arc::new(HolidayCalendar::new(fiscal_year)?);
        log::debug!("cached federal holidays for FY{fiscal_year}");
        calendars.insert(fiscal_year, Arc::clone(&cal));
        Ok(cal)
    }

    /// Number of cached fiscal years.
    pub fn len(&self) -> usize {
        self.calendars
            .lock()
            .expect("HolidayCache mutex poisoned")
            .len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached calendar.
    pub fn clear(&self) {
        self.calendars
            .lock()
            .expect("HolidayCache mutex poisoned")
            .clear();
    }
}
