//! Assertion facades.
//!
//! Each facade wraps one subject and runs every check through the
//! verification chain: compute the non-conforming part, record whether it
//! is empty, attach the caller's reason, and fail with a kind-specific
//! template. A passing check hands the facade back through an
//! [`AndConstraint`](typeshape_verify::AndConstraint).

pub mod members;
pub mod types;

pub use members::MemberAssertions;
pub use types::{TypeAssertions, TypeShould};

use std::fmt;
use typeshape_types::{AccessCategory, AnnotationKind};

/// What a check expects of each subject, rendered only into failure messages.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Expectation<'a> {
    Overridable,
    DecoratedWith(&'a AnnotationKind),
    Category(AccessCategory),
    Nested,
    NotNested,
}

impl fmt::Display for Expectation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overridable => write!(f, "be virtual"),
            Self::DecoratedWith(kind) => write!(f, "be decorated with {}", kind),
            Self::Category(category) => write!(f, "be {}", category.label()),
            Self::Nested => write!(f, "be nested"),
            Self::NotNested => write!(f, "not be nested"),
        }
    }
}
