//! The verification chain.
//!
//! ```text
//! Verification::new(config)
//!     .for_condition(holds)          // record, no effect yet
//!     .because_of("reason")          // optional, stored unformatted
//!     .fail_with(template, args)     // terminal: Ok(()) or Err(AssertionFailure)
//! ```
//!
//! A [`RecordedVerification`] is consumed by its terminal call. When the
//! recorded condition holds, no message is ever built.

use crate::config::FormatConfig;
use crate::error::{AssertionFailure, VerifyResult};
use crate::reason::Reason;
use crate::template::substitute;
use std::fmt::Display;
use tracing::debug;

/// Start of a verification; only a condition can be recorded.
#[derive(Debug)]
pub struct Verification<'c> {
    config: &'c FormatConfig,
}

impl<'c> Verification<'c> {
    pub fn new(config: &'c FormatConfig) -> Self {
        Self { config }
    }

    pub fn for_condition<'r>(self, condition: bool) -> RecordedVerification<'c, 'r> {
        RecordedVerification {
            config: self.config,
            condition,
            reason: Reason::none(),
        }
    }
}

/// A verification with its condition recorded, awaiting the terminal call.
#[derive(Debug)]
#[must_use = "a verification only fails through fail_with"]
pub struct RecordedVerification<'c, 'r> {
    config: &'c FormatConfig,
    condition: bool,
    reason: Reason<'r>,
}

impl<'c, 'r> RecordedVerification<'c, 'r> {
    /// Record why the check matters. `because` is prepended when missing.
    pub fn because_of(mut self, reason: impl Into<Reason<'r>>) -> Self {
        self.reason = reason.into().normalized();
        self
    }

    pub fn condition(&self) -> bool {
        self.condition
    }

    /// The stored, normalized reason template, if any.
    pub fn reason_template(&self) -> Option<&str> {
        if self.reason.is_empty() {
            None
        } else {
            Some(self.reason.template())
        }
    }

    /// Terminal step: fail with `template` when the condition is false.
    pub fn fail_with(self, template: &str, args: &[&dyn Display]) -> VerifyResult<()> {
        self.fail_with_listing(template, args, Vec::new)
    }

    /// Terminal step with a member listing appended after the primary
    /// sentence. `lines` runs only on the failure path.
    pub fn fail_with_listing<F>(
        self,
        template: &str,
        args: &[&dyn Display],
        lines: F,
    ) -> VerifyResult<()>
    where
        F: FnOnce() -> Vec<String>,
    {
        if self.condition {
            debug!("Verification passed");
            return Ok(());
        }

        let clause = self.reason.render_clause();
        let mut message = substitute(template, args, Some(clause.as_str()));
        message.push_str(&self.config.render_listing(&lines()));
        Err(AssertionFailure::new(message))
    }
}
