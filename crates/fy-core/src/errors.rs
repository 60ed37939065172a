//! Error types for fiscal-rs.
//!
//! Every fallible operation in the workspace returns [`Result<T>`]. Failures
//! fall into three kinds: input validation ([`Error::InvalidInput`]), invalid
//! date arithmetic ([`Error::InvalidArgument`] / [`Error::Date`]), and
//! anything unexpected ([`Error::Runtime`]). Public operations attach an
//! [`ErrorContext`] naming the module, component and method that failed.
//!
//! The `require!`, `ensure!` and `fail!` macros are the guard-clause
//! shorthands used throughout the workspace.

use std::fmt;

use thiserror::Error;

/// The top-level error type used throughout fiscal-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required argument was empty or absent.
    #[error("Argument \"{0}\" cannot be empty!")]
    InvalidInput(String),

    /// An argument was present but describes something that does not exist
    /// (e.g. the fifth Monday of a four-Monday month).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid date construction or date arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime failure (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Another error enriched with the location it surfaced at.
    #[error("{context}: {source}")]
    Context {
        /// Where the error surfaced.
        context: ErrorContext,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap `self` with the given context.
    ///
    /// An error that already carries a context keeps its innermost one; the
    /// first boundary an error crosses is the most precise.
    pub fn with_context(self, context: ErrorContext) -> Self {
        match self {
            Error::Context { .. } => self,
            other => Error::Context {
                context,
                source: Box::new(other),
            },
        }
    }

    /// The context attached to this error, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Context { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The error with any context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Return `true` for input-validation failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.root(), Error::InvalidInput(_))
    }

    /// Return `true` for arguments describing a non-existent value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), Error::InvalidArgument(_))
    }
}

/// Location metadata attached to an error at a public operation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Module path, e.g. `fy_time::holidays`.
    pub module: String,
    /// Component (type) that raised the error, e.g. `HolidayCalendar`.
    pub cause: String,
    /// Method signature, e.g. `nth_weekday_of_month(year, month, weekday, n)`.
    pub method: String,
}

impl ErrorContext {
    /// Create a new context.
    pub fn new(
        module: impl Into<String>,
        cause: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            cause: cause.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.module, self.cause, self.method)
    }
}

/// Attach an [`ErrorContext`] to the error arm of a [`Result`].
pub trait ResultExt<T> {
    /// Wrap any error with `module`, `cause` and `method`.
    fn context(self, module: &str, cause: &str, method: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, module: &str, cause: &str, method: &str) -> Result<T> {
        self.map_err(|e| e.with_context(ErrorContext::new(module, cause, method)))
    }
}

/// Shorthand `Result` type used throughout fiscal-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unwrap an `Option` argument or return `Err(Error::InvalidInput(...))`.
///
/// # Example
/// ```
/// use fy_core::{require, errors::Error};
/// fn first(xs: Option<&[u8]>) -> fy_core::errors::Result<usize> {
///     let xs = require!(xs, "xs");
///     Ok(xs.len())
/// }
/// assert_eq!(first(Some(&[1, 2][..])), Ok(2));
/// assert!(first(None).unwrap_err().is_invalid_input());
/// ```
#[macro_export]
macro_rules! require {
    ($value:expr, $name:expr) => {
        match $value {
            Some(v) => v,
            None => {
                return Err($crate::errors::Error::InvalidInput(
                    ::std::string::String::from($name),
                ))
            }
        }
    };
}

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fy_core::{ensure, errors::Error};
/// fn positive(x: i32) -> fy_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use fy_core::{fail, errors::Error};
/// fn always_err() -> fy_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
