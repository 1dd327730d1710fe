//! # typeshape
//!
//! Fluent structural assertions over type metadata. Tests select the
//! members of a type, narrow the selection with filters, and assert that
//! every remaining member has some declared property.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ MetadataSource ──→ Selector<K> ──filter──→ Selector<K>     │
//! │   (snapshot)          │                        │           │
//! │                       └────────── should() ────┘           │
//! │                                     │                      │
//! │                                     ▼                      │
//! │                          MemberAssertions<K>               │
//! │                          TypeAssertions                    │
//! │                                     │                      │
//! │                                     ▼                      │
//! │              Verification ──→ Ok(AndConstraint)            │
//! │                          └──→ Err(AssertionFailure)        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use typeshape::prelude::*;
//!
//! let widget = TypeName::new("Fixtures", "Widget");
//! let metadata = InMemoryMetadata::new()
//!     .with_type(
//!         TypeDefinition::new(widget.clone(), TypeVisibility::PUBLIC)
//!             .with_method(MethodDefinition::new("Open", MemberAccess::PUBLIC).overridable())
//!             .with_method(MethodDefinition::new("Reset", MemberAccess::PRIVATE)),
//!     )
//!     .unwrap();
//!
//! let failure = TypeInspector::new(&metadata)
//!     .methods(&widget)
//!     .unwrap()
//!     .should()
//!     .be_overridable("proxies intercept every call")
//!     .unwrap_err();
//!
//! assert_eq!(
//!     failure.message(),
//!     "Expected all selected methods to be virtual because proxies intercept every call, \
//!      but the following methods are not:\nVoid Fixtures.Widget.Reset"
//! );
//! ```

#![deny(unsafe_code)]

pub mod assertions;
pub mod config;
pub mod inspector;
pub mod kind;
pub mod logging;
pub mod selector;

// ── Re-exports ───────────────────────────────────────────────────────

pub use assertions::{MemberAssertions, TypeAssertions, TypeShould};
pub use config::AssertionConfig;
pub use inspector::TypeInspector;
pub use kind::{MemberKindMarker, Methods, Properties};
pub use selector::{MethodSelector, PropertySelector, Selector};

pub use typeshape_types as types;
pub use typeshape_verify as verify;

/// Everything a test usually needs.
pub mod prelude {
    pub use crate::{
        AssertionConfig, MemberAssertions, MethodSelector, Methods, Properties, PropertySelector,
        Selector, TypeAssertions, TypeInspector, TypeShould,
    };
    pub use typeshape_types::{
        AccessCategory, AccessorDefinition, AnnotationKind, EventDefinition, InMemoryMetadata,
        MemberAccess, MemberDescriptor, MemberKind, MemberScope, MetadataSource,
        MethodDefinition, PropertyDefinition, ReflectError, ReflectResult, TypeDefinition,
        TypeDescriptor, TypeName, TypeVisibility,
    };
    pub use typeshape_verify::{
        AndConstraint, AssertionFailure, FormatConfig, Reason, VerifyResult,
    };
}
