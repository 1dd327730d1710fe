//! Checks over a single declared type.

use super::Expectation;
use std::fmt::Display;
use tracing::warn;
use typeshape_types::{AccessCategory, TypeDescriptor};
use typeshape_verify::{AndConstraint, FormatConfig, Reason, Verification, VerifyResult};

/// Starts type assertions from a descriptor.
pub trait TypeShould {
    fn should(&self) -> TypeAssertions;

    fn should_with(&self, format: FormatConfig) -> TypeAssertions;
}

impl TypeShould for TypeDescriptor {
    fn should(&self) -> TypeAssertions {
        TypeAssertions::new(self.clone())
    }

    fn should_with(&self, format: FormatConfig) -> TypeAssertions {
        TypeAssertions::new(self.clone()).with_format(format)
    }
}

/// Assertions about a type's own visibility and nesting.
#[derive(Debug, Clone)]
pub struct TypeAssertions {
    subject: TypeDescriptor,
    format: FormatConfig,
}

impl TypeAssertions {
    pub fn new(subject: TypeDescriptor) -> Self {
        Self {
            subject,
            format: FormatConfig::default(),
        }
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn subject(&self) -> &TypeDescriptor {
        &self.subject
    }

    /// The type classifies to `category` under the type classifier.
    pub fn have_access_category<'r>(
        self,
        category: AccessCategory,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        let actual = self.subject.access_category();
        self.require(
            actual == category,
            "Expected type {0} to {1}{reason}, but it is {2}.",
            Expectation::Category(category),
            &actual.label(),
            reason.into(),
        )
    }

    pub fn be_nested<'r>(self, reason: impl Into<Reason<'r>>) -> VerifyResult<AndConstraint<Self>> {
        let nested = self.subject.is_nested();
        self.require(
            nested,
            "Expected type {0} to {1}{reason}, but it is not.",
            Expectation::Nested,
            &"",
            reason.into(),
        )
    }

    pub fn not_be_nested<'r>(
        self,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        let nested = self.subject.is_nested();
        self.require(
            !nested,
            "Expected type {0} to {1}{reason}, but it is.",
            Expectation::NotNested,
            &"",
            reason.into(),
        )
    }

    fn require(
        self,
        holds: bool,
        template: &str,
        expectation: Expectation<'_>,
        actual: &dyn Display,
        reason: Reason<'_>,
    ) -> VerifyResult<AndConstraint<Self>> {
        let outcome = Verification::new(&self.format)
            .for_condition(holds)
            .because_of(reason)
            .fail_with(template, &[&self.subject, &expectation, actual]);

        if outcome.is_err() {
            warn!(
                type_name = %self.subject,
                expectation = %expectation,
                "Type assertion failed"
            );
        }
        outcome?;
        Ok(AndConstraint::new(self))
    }
}
