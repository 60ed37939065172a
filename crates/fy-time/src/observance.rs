//! Which of a holiday's two dates a query matches against.

use serde::{Deserialize, Serialize};

/// Selects a holiday's observed or actual date.
///
/// A holiday falling on a Saturday is observed on the preceding Friday, one
/// falling on a Sunday on the following Monday. Business-day arithmetic
/// normally works with the observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Observance {
    /// Match the weekend-adjusted date.
    #[default]
    Observed,
    /// Match the calendar date the holiday actually falls on.
    Actual,
}

impl Observance {
    /// Map a `use_observed` flag to an `Observance`.
    pub fn from_use_observed(use_observed: bool) -> Self {
        if use_observed {
            Observance::Observed
        } else {
            Observance::Actual
        }
    }
}

impl std::fmt::Display for Observance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Observance::Observed => "observed",
            Observance::Actual => "actual",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_observed_flag() {
        assert_eq!(Observance::from_use_observed(true), Observance::Observed);
        assert_eq!(Observance::from_use_observed(false), Observance::Actual);
        assert_eq!(Observance::default(), Observance::Observed);
        assert_eq!(Observance::Actual.to_string(), "actual");
    }
}
