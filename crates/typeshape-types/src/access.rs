//! Access categories and the two visibility classifiers.
//!
//! Member access and type visibility are encoded differently in host
//! metadata. A member carries a single 3-bit access field; a type carries a
//! 3-bit visibility field whose values also say whether the type is nested.
//! The classifiers are therefore kept as two functions with their own rule
//! order.

use serde::{Deserialize, Serialize};

// ── Access Category ──────────────────────────────────────────────────

/// Declared visibility of a member or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessCategory {
    Private,
    Protected,
    Internal,
    Public,
    ProtectedOrInternal,
    /// A flag combination the source language cannot declare.
    Invalid,
}

impl AccessCategory {
    /// All categories in declaration order.
    pub fn all() -> &'static [AccessCategory] {
        &[
            Self::Private,
            Self::Protected,
            Self::Internal,
            Self::Public,
            Self::ProtectedOrInternal,
            Self::Invalid,
        ]
    }

    /// Keyword-style label used in failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Public => "public",
            Self::ProtectedOrInternal => "protected internal",
            Self::Invalid => "invalid",
        }
    }

    /// Visible to callers within the declaring package.
    pub fn is_public_or_internal(&self) -> bool {
        matches!(self, Self::Public | Self::Internal)
    }
}

impl std::fmt::Display for AccessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ── Member Access Flags ──────────────────────────────────────────────

/// Raw member access field as stored in metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct MemberAccess(u16);

impl MemberAccess {
    pub const MASK: u16 = 0x0007;
    pub const PRIVATE_SCOPE: Self = Self(0);
    pub const PRIVATE: Self = Self(1);
    pub const FAMILY_AND_ASSEMBLY: Self = Self(2);
    pub const ASSEMBLY: Self = Self(3);
    pub const FAMILY: Self = Self(4);
    pub const FAMILY_OR_ASSEMBLY: Self = Self(5);
    pub const PUBLIC: Self = Self(6);

    /// Build from raw attribute bits; bits outside the access mask are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_private(&self) -> bool {
        self.0 == Self::PRIVATE.0
    }

    pub fn is_family(&self) -> bool {
        self.0 == Self::FAMILY.0
    }

    pub fn is_assembly(&self) -> bool {
        self.0 == Self::ASSEMBLY.0
    }

    pub fn is_public(&self) -> bool {
        self.0 == Self::PUBLIC.0
    }

    pub fn is_family_or_assembly(&self) -> bool {
        self.0 == Self::FAMILY_OR_ASSEMBLY.0
    }
}

impl From<u16> for MemberAccess {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<MemberAccess> for u16 {
    fn from(access: MemberAccess) -> Self {
        access.0
    }
}

// ── Type Visibility Flags ────────────────────────────────────────────

/// Raw type visibility field as stored in metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct TypeVisibility(u16);

impl TypeVisibility {
    pub const MASK: u16 = 0x0007;
    pub const NOT_PUBLIC: Self = Self(0);
    pub const PUBLIC: Self = Self(1);
    pub const NESTED_PUBLIC: Self = Self(2);
    pub const NESTED_PRIVATE: Self = Self(3);
    pub const NESTED_FAMILY: Self = Self(4);
    pub const NESTED_ASSEMBLY: Self = Self(5);
    pub const NESTED_FAMILY_AND_ASSEMBLY: Self = Self(6);
    pub const NESTED_FAMILY_OR_ASSEMBLY: Self = Self(7);

    /// Build from raw attribute bits; bits outside the visibility mask are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Nested values start at `NESTED_PUBLIC`.
    pub fn is_nested(&self) -> bool {
        self.0 >= Self::NESTED_PUBLIC.0
    }

    pub fn is_not_public(&self) -> bool {
        self.0 == Self::NOT_PUBLIC.0
    }

    pub fn is_public(&self) -> bool {
        self.0 == Self::PUBLIC.0
    }

    pub fn is_nested_public(&self) -> bool {
        self.0 == Self::NESTED_PUBLIC.0
    }

    pub fn is_nested_private(&self) -> bool {
        self.0 == Self::NESTED_PRIVATE.0
    }

    pub fn is_nested_family(&self) -> bool {
        self.0 == Self::NESTED_FAMILY.0
    }

    pub fn is_nested_assembly(&self) -> bool {
        self.0 == Self::NESTED_ASSEMBLY.0
    }

    pub fn is_nested_family_or_assembly(&self) -> bool {
        self.0 == Self::NESTED_FAMILY_OR_ASSEMBLY.0
    }
}

impl From<u16> for TypeVisibility {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<TypeVisibility> for u16 {
    fn from(visibility: TypeVisibility) -> Self {
        visibility.0
    }
}

// ── Classifiers ──────────────────────────────────────────────────────

/// Classify a callable member's access field. First match wins.
pub fn classify_member(access: MemberAccess) -> AccessCategory {
    if access.is_private() {
        return AccessCategory::Private;
    }

    if access.is_family() {
        return AccessCategory::Protected;
    }

    if access.is_assembly() {
        return AccessCategory::Internal;
    }

    if access.is_public() {
        return AccessCategory::Public;
    }

    if access.is_family_or_assembly() {
        return AccessCategory::ProtectedOrInternal;
    }

    AccessCategory::Invalid
}

/// Classify a type declaration's visibility field. First match wins.
///
/// A top-level type declared without `public` is internal; the nested
/// assembly check alone would miss it.
pub fn classify_type(visibility: TypeVisibility) -> AccessCategory {
    if visibility.is_nested_private() {
        return AccessCategory::Private;
    }

    if visibility.is_nested_family() {
        return AccessCategory::Protected;
    }

    if visibility.is_nested_assembly() || (!visibility.is_nested() && visibility.is_not_public()) {
        return AccessCategory::Internal;
    }

    if visibility.is_public() || visibility.is_nested_public() {
        return AccessCategory::Public;
    }

    if visibility.is_nested_family_or_assembly() {
        return AccessCategory::ProtectedOrInternal;
    }

    AccessCategory::Invalid
}
