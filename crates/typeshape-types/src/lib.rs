//! # typeshape-types
//!
//! Metadata model for structural assertions: access categories, the
//! visibility classifiers, read-only member and type descriptors, and the
//! [`MetadataSource`] capability that produces them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  MetadataSource                      │
//! │   InMemoryMetadata (builder / JSON document)         │
//! │        │                                             │
//! │        ▼  members(type, kind, scope)                 │
//! │   MemberDescriptor ── access ──→ classify_member     │
//! │   TypeDescriptor ── visibility ──→ classify_type     │
//! │                                   │                  │
//! │                                   ▼                  │
//! │                            AccessCategory            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Descriptors are snapshots; nothing here holds a live binding to the
//! host's metadata.

#![deny(unsafe_code)]

pub mod access;
pub mod descriptor;
pub mod error;
pub mod metadata;

// ── Re-exports ───────────────────────────────────────────────────────

pub use access::{classify_member, classify_type, AccessCategory, MemberAccess, TypeVisibility};
pub use descriptor::{AnnotationKind, MemberDescriptor, MemberKind, TypeDescriptor, TypeName};
pub use error::{MetadataFault, ReflectError, ReflectResult};
pub use metadata::{
    AccessorDefinition, EventDefinition, InMemoryMetadata, MemberScope, MetadataDocument,
    MetadataSource, MethodDefinition, PropertyDefinition, TypeDefinition,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_object_safe() {
        let meta = InMemoryMetadata::new()
            .with_type(TypeDefinition::new(
                TypeName::new("Fixtures", "Nested"),
                TypeVisibility::NESTED_FAMILY,
            ))
            .unwrap();
        let source: &dyn MetadataSource = &meta;
        let descriptor = source
            .type_descriptor(&TypeName::new("Fixtures", "Nested"))
            .unwrap();
        assert_eq!(descriptor.access_category(), AccessCategory::Protected);
        assert_eq!(source.name(), "in-memory");
    }

    #[test]
    fn descriptors_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemberDescriptor>();
        assert_send_sync::<TypeDescriptor>();
        assert_send_sync::<InMemoryMetadata>();
    }
}
