//! Read-only descriptors captured from type metadata.
//!
//! Descriptors are owned snapshots: once a [`MemberDescriptor`] is produced
//! by a metadata source, later changes to the source are not observed.

use crate::access::{classify_member, classify_type, AccessCategory, MemberAccess, TypeVisibility};
use serde::{Deserialize, Serialize};

// ── Type Names ───────────────────────────────────────────────────────

/// Identity of a declared type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
}

impl TypeName {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
        }
    }

    /// A type declared outside any namespace.
    pub fn global(name: &str) -> Self {
        Self {
            namespace: None,
            name: name.to_string(),
        }
    }

    /// Split a full name on its last dot.
    pub fn parse(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((namespace, name)) if !namespace.is_empty() => Self::new(namespace, name),
            _ => Self::global(full_name),
        }
    }

    /// The return type of a method that returns nothing.
    pub fn void() -> Self {
        Self::new("System", "Void")
    }

    pub fn string() -> Self {
        Self::new("System", "String")
    }

    pub fn is_void(&self) -> bool {
        *self == Self::void()
    }

    /// Simple name: the segment after the last `.`, so a nested type
    /// modelled as `Outer.Inner` yields `Inner`.
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, simple)| simple)
    }

    /// No usable name; such a type can only be a caller mistake.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", ns, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for TypeName {
    fn from(full_name: &str) -> Self {
        Self::parse(full_name)
    }
}

// ── Annotations ──────────────────────────────────────────────────────

/// Kind of annotation attached to a member, identified by its type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationKind(pub TypeName);

impl AnnotationKind {
    pub fn new(full_name: &str) -> Self {
        Self(TypeName::parse(full_name))
    }

    pub fn type_name(&self) -> &TypeName {
        &self.0
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Member Kind ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Method,
    Property,
}

impl MemberKind {
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Property => "property",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Method => "methods",
            Self::Property => "properties",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.singular())
    }
}

// ── Member Descriptor ────────────────────────────────────────────────

/// Snapshot of one reflected method or property.
///
/// For properties the access and dispatch flags are those of the accessor
/// the metadata source resolved them from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub kind: MemberKind,
    pub declaring_type: TypeName,
    /// Return type for methods, property type for properties.
    pub value_type: TypeName,
    /// Parameter types in declaration order; overloads differ here.
    #[serde(default)]
    pub parameters: Vec<TypeName>,
    pub access: MemberAccess,
    pub is_virtual: bool,
    pub is_final: bool,
    pub is_static: bool,
    /// Compiler-generated accessors such as `get_Name` or `add_Changed`.
    pub is_special_name: bool,
    pub annotations: Vec<AnnotationKind>,
}

impl MemberDescriptor {
    pub fn access_category(&self) -> AccessCategory {
        classify_member(self.access)
    }

    /// Virtual and not sealed.
    pub fn is_overridable(&self) -> bool {
        self.is_virtual && !self.is_final
    }

    pub fn returns_void(&self) -> bool {
        self.value_type.is_void()
    }

    pub fn has_value_type(&self, ty: &TypeName) -> bool {
        self.value_type == *ty
    }

    pub fn has_annotation(&self, kind: &AnnotationKind) -> bool {
        self.annotations.iter().any(|a| a == kind)
    }

    /// `<ValueType> <DeclaringType>.<Member>`, as listed in failure messages.
    pub fn describe(&self) -> String {
        format!(
            "{} {}.{}",
            self.value_type.short_name(),
            self.declaring_type,
            self.name
        )
    }
}

impl std::fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// ── Type Descriptor ──────────────────────────────────────────────────

/// Snapshot of a declared type's own visibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub visibility: TypeVisibility,
}

impl TypeDescriptor {
    pub fn new(name: TypeName, visibility: TypeVisibility) -> Self {
        Self { name, visibility }
    }

    pub fn access_category(&self) -> AccessCategory {
        classify_type(self.visibility)
    }

    pub fn is_nested(&self) -> bool {
        self.visibility.is_nested()
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, value_type: TypeName) -> MemberDescriptor {
        MemberDescriptor {
            name: name.into(),
            kind: MemberKind::Method,
            declaring_type: TypeName::new("Fixtures", "Widget"),
            value_type,
            parameters: Vec::new(),
            access: MemberAccess::PUBLIC,
            is_virtual: true,
            is_final: false,
            is_static: false,
            is_special_name: false,
            annotations: vec![AnnotationKind::new("Fixtures.DummyMethodAttribute")],
        }
    }

    #[test]
    fn type_name_parse_and_display() {
        let t = TypeName::parse("System.Collections.Generic.List");
        assert_eq!(t.namespace.as_deref(), Some("System.Collections.Generic"));
        assert_eq!(t.short_name(), "List");
        assert_eq!(t.to_string(), "System.Collections.Generic.List");

        let g = TypeName::parse("Widget");
        assert!(g.namespace.is_none());
        assert_eq!(g.to_string(), "Widget");
    }

    #[test]
    fn short_name_of_nested_type_is_the_simple_name() {
        let nested = TypeName::new("Shop", "Catalog.Cache");
        assert_eq!(nested.short_name(), "Cache");
        assert_eq!(nested.to_string(), "Shop.Catalog.Cache");

        let mut m = method("Lookup", nested);
        m.declaring_type = TypeName::new("Shop", "Catalog");
        assert_eq!(m.describe(), "Cache Shop.Catalog.Lookup");
    }

    #[test]
    fn blank_names() {
        assert!(TypeName::global("").is_blank());
        assert!(TypeName::new("Shop", "  ").is_blank());
        assert!(!TypeName::global("Widget").is_blank());
    }

    #[test]
    fn void_detection() {
        assert!(TypeName::void().is_void());
        assert!(TypeName::parse("System.Void").is_void());
        assert!(!TypeName::string().is_void());
    }

    #[test]
    fn describe_uses_short_value_type_and_full_declaring_type() {
        let m = method("Render", TypeName::string());
        assert_eq!(m.describe(), "String Fixtures.Widget.Render");
        assert_eq!(m.to_string(), m.describe());
    }

    #[test]
    fn overridable_requires_virtual_and_not_final() {
        let mut m = method("Render", TypeName::void());
        assert!(m.is_overridable());
        m.is_final = true;
        assert!(!m.is_overridable());
        m.is_final = false;
        m.is_virtual = false;
        assert!(!m.is_overridable());
    }

    #[test]
    fn annotation_query_matches_full_name() {
        let m = method("Render", TypeName::void());
        assert!(m.has_annotation(&AnnotationKind::new("Fixtures.DummyMethodAttribute")));
        assert!(!m.has_annotation(&AnnotationKind::new("Other.DummyMethodAttribute")));
    }

    #[test]
    fn type_descriptor_category() {
        let t = TypeDescriptor::new(TypeName::global("Hidden"), TypeVisibility::NOT_PUBLIC);
        assert_eq!(t.access_category(), AccessCategory::Internal);
        assert!(!t.is_nested());
    }
}
