//! Immutable member selection.
//!
//! A [`Selector`] is captured once from a [`MetadataSource`] and then only
//! narrowed in memory. Every filter returns a new selector holding the
//! matching subsequence in declaration order; the source is never queried
//! again and earlier selectors are left untouched.

use crate::assertions::MemberAssertions;
use crate::kind::{MemberKindMarker, Methods, Properties};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use typeshape_types::{
    AnnotationKind, MemberDescriptor, MemberScope, MetadataSource, ReflectError, ReflectResult,
    TypeName,
};
use typeshape_verify::FormatConfig;

/// Selector over methods.
pub type MethodSelector = Selector<Methods>;

/// Selector over properties.
pub type PropertySelector = Selector<Properties>;

/// Ordered, duplicate-free snapshot of one kind of member.
#[derive(Debug, Clone)]
pub struct Selector<K: MemberKindMarker> {
    members: Vec<Arc<MemberDescriptor>>,
    format: Arc<FormatConfig>,
    _kind: PhantomData<K>,
}

impl<K: MemberKindMarker> Selector<K> {
    /// Capture the declared members of `ty` admitted by `scope`.
    ///
    /// This is the only point at which metadata is read. A blank type name
    /// is invalid usage and never reaches the source.
    pub fn from_type<S>(source: &S, ty: &TypeName, scope: &MemberScope) -> ReflectResult<Self>
    where
        S: MetadataSource + ?Sized,
    {
        if ty.is_blank() {
            return Err(ReflectError::invalid_usage("cannot select members of a blank type name"));
        }
        let members = source.members(ty, K::KIND, scope)?;
        debug!(
            source = source.name(),
            type_name = %ty,
            kind = %K::KIND,
            count = members.len(),
            "Selector captured"
        );
        Ok(Self::from_members(members))
    }

    /// Build a selector from descriptors produced elsewhere.
    ///
    /// Descriptors of another member kind are skipped, as are repeats of an
    /// earlier descriptor.
    pub fn from_members(members: impl IntoIterator<Item = MemberDescriptor>) -> Self {
        let mut unique: Vec<Arc<MemberDescriptor>> = Vec::new();
        for member in members {
            if member.kind == K::KIND && !unique.iter().any(|m| **m == member) {
                unique.push(Arc::new(member));
            }
        }
        Self {
            members: unique,
            format: Arc::new(FormatConfig::default()),
            _kind: PhantomData,
        }
    }

    /// Use `format` for assertions started from this selector.
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = Arc::new(format);
        self
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    /// Members satisfying `predicate`, in declaration order.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&MemberDescriptor) -> bool,
    {
        Self {
            members: self
                .members
                .iter()
                .filter(|m| predicate(m))
                .cloned()
                .collect(),
            format: Arc::clone(&self.format),
            _kind: PhantomData,
        }
    }

    fn filter_named<P>(&self, filter: &str, predicate: P) -> Self
    where
        P: Fn(&MemberDescriptor) -> bool,
    {
        let narrowed = self.filter(predicate);
        debug!(
            kind = %K::KIND,
            filter,
            before = self.len(),
            after = narrowed.len(),
            "Selector filtered"
        );
        narrowed
    }

    /// Public or internal members.
    pub fn that_are_public_or_internal(&self) -> Self {
        self.filter_named("public-or-internal", |m| {
            m.access_category().is_public_or_internal()
        })
    }

    pub fn that_are_decorated_with(&self, annotation: &AnnotationKind) -> Self {
        self.filter_named("decorated-with", |m| m.has_annotation(annotation))
    }

    pub fn that_are_not_decorated_with(&self, annotation: &AnnotationKind) -> Self {
        self.filter_named("not-decorated-with", |m| !m.has_annotation(annotation))
    }

    /// Virtual members that are not sealed.
    pub fn that_are_overridable(&self) -> Self {
        self.filter_named("overridable", MemberDescriptor::is_overridable)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.members.iter().map(|m| &**m)
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|m| m.name == name)
    }

    /// `describe()` of every selected member, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.iter().map(MemberDescriptor::describe).collect()
    }

    /// Start asserting on the selected members.
    pub fn should(&self) -> MemberAssertions<K> {
        MemberAssertions::new(self.clone())
    }

    /// Start asserting with an explicit formatting configuration.
    pub fn should_with(&self, format: FormatConfig) -> MemberAssertions<K> {
        MemberAssertions::new(self.clone().with_format(format))
    }
}

impl MethodSelector {
    pub fn that_return(&self, ty: &TypeName) -> Self {
        self.filter_named("return-type", |m| m.has_value_type(ty))
    }

    pub fn that_return_void(&self) -> Self {
        self.filter_named("return-void", MemberDescriptor::returns_void)
    }
}

impl PropertySelector {
    pub fn of_type(&self, ty: &TypeName) -> Self {
        self.filter_named("property-type", |m| m.has_value_type(ty))
    }
}

impl<'s, K: MemberKindMarker> IntoIterator for &'s Selector<K> {
    type Item = &'s MemberDescriptor;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'s, Arc<MemberDescriptor>>,
        fn(&'s Arc<MemberDescriptor>) -> &'s MemberDescriptor,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let project: fn(&'s Arc<MemberDescriptor>) -> &'s MemberDescriptor = |m| &**m;
        self.members.iter().map(project)
    }
}
