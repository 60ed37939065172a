//! # fy-core
//!
//! Core types, error definitions, error reporting, and settings for
//! fiscal-rs.
//!
//! This crate provides the foundational building blocks shared by the other
//! crates in the workspace – type aliases, the error hierarchy with its
//! guard macros, the error-report sink used to present failures, and the
//! global `Settings` holding the evaluation date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `require!` / `ensure!` / `fail!` macros.
pub mod errors;

/// Error reports and the sinks that present them.
pub mod report;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for ratios and percentages.
pub type Real = f64;

/// A calendar or fiscal year number (e.g. `2026`).
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, ErrorContext, Result, ResultExt};
pub use report::{CollectingSink, ErrorReport, ErrorSink, LogSink, NullSink, ReportExt};
pub use settings::{ScopedEvaluationDate, Settings};
