//! Member-kind markers for typed selectors.

use typeshape_types::MemberKind;

/// Ties a selector or facade to one member kind.
pub trait MemberKindMarker: std::fmt::Debug + Clone + Send + Sync + 'static {
    const KIND: MemberKind;
}

/// Method-like members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Methods;

impl MemberKindMarker for Methods {
    const KIND: MemberKind = MemberKind::Method;
}

/// Property-like members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Properties;

impl MemberKindMarker for Properties {
    const KIND: MemberKind = MemberKind::Property;
}
