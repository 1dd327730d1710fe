//! # typeshape-verify
//!
//! Verification engine for structural assertions. A verification records a
//! condition and an optional reason phrase, and formats a failure message
//! only when the condition is false.
//!
//! ## Message Templates
//!
//! - `{0}`, `{1}`, ... are replaced by positional arguments
//! - `{reason}` is replaced by ` because <phrase>`, or nothing
//! - unknown placeholders are left as literal text
//!
//! Line separators and listing limits come from an explicit [`FormatConfig`]
//! rather than process-wide state.

#![deny(unsafe_code)]

pub mod config;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod reason;
pub mod template;

// ── Re-exports ───────────────────────────────────────────────────────

pub use config::FormatConfig;
pub use constraint::AndConstraint;
pub use engine::{RecordedVerification, Verification};
pub use error::{AssertionFailure, VerifyResult};
pub use reason::Reason;
pub use template::substitute;
