//! Checks over a selection of methods or properties.

use super::Expectation;
use crate::kind::MemberKindMarker;
use crate::selector::Selector;
use tracing::warn;
use typeshape_types::{AccessCategory, AnnotationKind, MemberDescriptor};
use typeshape_verify::{AndConstraint, Reason, Verification, VerifyResult};

const ALL_TEMPLATE: &str =
    "Expected all selected {0} to {1}{reason}, but the following {0} are not:";
const NONE_TEMPLATE: &str =
    "Expected no selected {0} to {1}{reason}, but the following {0} are:";

/// Assertions that every selected member has some structural property.
///
/// Checks consume the facade and hand it back through [`AndConstraint`] on
/// success, so several checks can run against one selection. An empty
/// selection passes every check.
#[derive(Debug, Clone)]
pub struct MemberAssertions<K: MemberKindMarker> {
    subject: Selector<K>,
}

impl<K: MemberKindMarker> MemberAssertions<K> {
    pub fn new(subject: Selector<K>) -> Self {
        Self { subject }
    }

    pub fn subject(&self) -> &Selector<K> {
        &self.subject
    }

    /// All selected members are virtual and not sealed. Properties use the
    /// flags of their resolving accessor.
    pub fn be_overridable<'r>(
        self,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        self.require(
            ALL_TEMPLATE,
            Expectation::Overridable,
            |m| !m.is_overridable(),
            reason.into(),
        )
    }

    pub fn be_decorated_with<'r>(
        self,
        annotation: &AnnotationKind,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        self.require(
            ALL_TEMPLATE,
            Expectation::DecoratedWith(annotation),
            |m| !m.has_annotation(annotation),
            reason.into(),
        )
    }

    pub fn not_be_decorated_with<'r>(
        self,
        annotation: &AnnotationKind,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        self.require(
            NONE_TEMPLATE,
            Expectation::DecoratedWith(annotation),
            |m| m.has_annotation(annotation),
            reason.into(),
        )
    }

    /// All selected members classify to `category`.
    pub fn have_access_category<'r>(
        self,
        category: AccessCategory,
        reason: impl Into<Reason<'r>>,
    ) -> VerifyResult<AndConstraint<Self>> {
        self.require(
            ALL_TEMPLATE,
            Expectation::Category(category),
            |m| m.access_category() != category,
            reason.into(),
        )
    }

    fn require<F>(
        self,
        template: &str,
        expectation: Expectation<'_>,
        violates: F,
        reason: Reason<'_>,
    ) -> VerifyResult<AndConstraint<Self>>
    where
        F: Fn(&MemberDescriptor) -> bool,
    {
        let offending = self.subject.filter(violates);
        let plural = K::KIND.plural();

        let outcome = Verification::new(self.subject.format())
            .for_condition(offending.is_empty())
            .because_of(reason)
            .fail_with_listing(template, &[&plural, &expectation], || {
                offending.descriptions()
            });

        if outcome.is_err() {
            warn!(
                kind = %K::KIND,
                expectation = %expectation,
                selected = self.subject.len(),
                non_conforming = offending.len(),
                "Member assertion failed"
            );
        }
        outcome?;
        Ok(AndConstraint::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{MethodSelector, PropertySelector};
    use typeshape_types::{MemberAccess, MemberKind, TypeName};
    use typeshape_verify::FormatConfig;

    fn method(name: &str, access: MemberAccess, overridable: bool) -> MemberDescriptor {
        MemberDescriptor {
            name: name.into(),
            kind: MemberKind::Method,
            declaring_type: TypeName::new("Fixtures", "Widget"),
            value_type: TypeName::void(),
            access,
            is_virtual: overridable,
            is_final: false,
            is_static: false,
            is_special_name: false,
            annotations: Vec::new(),
            parameters: Vec::new(),
        }
    }

    fn abcd() -> MethodSelector {
        Selector::from_members(vec![
            method("A", MemberAccess::PUBLIC, true),
            method("B", MemberAccess::ASSEMBLY, true),
            method("C", MemberAccess::FAMILY, true),
            method("D", MemberAccess::PRIVATE, false),
        ])
    }

    #[test]
    fn passing_check_returns_the_facade() {
        let and = abcd()
            .that_are_public_or_internal()
            .should()
            .be_overridable("")
            .unwrap();
        assert_eq!(and.and().subject().names(), vec!["A", "B"]);
    }

    #[test]
    fn failure_lists_only_non_conforming_members() {
        let failure = abcd()
            .should()
            .be_overridable("they are mocked")
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected all selected methods to be virtual because they are mocked, \
             but the following methods are not:\nVoid Fixtures.Widget.D"
        );
    }

    #[test]
    fn sealed_virtual_members_are_not_overridable() {
        let mut sealed = method("Sealed", MemberAccess::PUBLIC, true);
        sealed.is_final = true;
        let selector: MethodSelector = Selector::from_members(vec![sealed]);
        assert!(selector.should().be_overridable("").is_err());
    }

    #[test]
    fn empty_selection_passes_everything() {
        let empty = abcd().filter(|_| false);
        let marker = AnnotationKind::new("Fixtures.MarkerAttribute");
        empty
            .should()
            .be_overridable("")
            .unwrap()
            .and()
            .be_decorated_with(&marker, "")
            .unwrap()
            .and()
            .have_access_category(AccessCategory::Private, "")
            .unwrap();
    }

    #[test]
    fn access_category_check_names_the_label() {
        let failure = abcd()
            .that_are_public_or_internal()
            .should()
            .have_access_category(AccessCategory::Public, "")
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected all selected methods to be public, \
             but the following methods are not:\nVoid Fixtures.Widget.B"
        );
    }

    #[test]
    fn not_decorated_lists_decorated_members() {
        let marker = AnnotationKind::new("Fixtures.MarkerAttribute");
        let mut tagged = method("Tagged", MemberAccess::PUBLIC, false);
        tagged.annotations.push(marker.clone());
        let selector: MethodSelector =
            Selector::from_members(vec![tagged, method("Plain", MemberAccess::PUBLIC, false)]);

        let failure = selector
            .should()
            .not_be_decorated_with(&marker, "")
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected no selected methods to be decorated with Fixtures.MarkerAttribute, \
             but the following methods are:\nVoid Fixtures.Widget.Tagged"
        );
    }

    #[test]
    fn listing_honours_format_config() {
        let failure = abcd()
            .should_with(FormatConfig::crlf().with_max_listed_members(1))
            .have_access_category(AccessCategory::Public, "")
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected all selected methods to be public, \
             but the following methods are not:\r\nVoid Fixtures.Widget.B\r\n... and 2 more"
        );
    }

    #[test]
    fn property_wording_uses_plural() {
        let prop = MemberDescriptor {
            kind: MemberKind::Property,
            value_type: TypeName::string(),
            ..method("Title", MemberAccess::PUBLIC, false)
        };
        let selector: PropertySelector = Selector::from_members(vec![prop]);
        let failure = selector.should().be_overridable("").unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected all selected properties to be virtual, \
             but the following properties are not:\nString Fixtures.Widget.Title"
        );
    }
}
