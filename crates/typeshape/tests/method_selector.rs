//! Method selection over a fixture class that mixes visibilities, return
//! types, annotations and an event.

use typeshape::logging::init_test_tracing;
use typeshape::prelude::*;

fn fixture_name() -> TypeName {
    TypeName::new("Fixtures", "TestClassForMethodSelector")
}

fn dummy_method() -> AnnotationKind {
    AnnotationKind::new("Fixtures.DummyMethodAttribute")
}

fn fixture() -> InMemoryMetadata {
    let int32 = TypeName::new("System", "Int32");
    InMemoryMetadata::new()
        .with_type(
            TypeDefinition::new(fixture_name(), TypeVisibility::PUBLIC)
                .with_event(EventDefinition::new(
                    "SomethingChanged",
                    TypeName::new("System", "EventHandler"),
                    MemberAccess::PUBLIC,
                ))
                .with_method(MethodDefinition::new("PublicVirtualVoidMethod", MemberAccess::PUBLIC).overridable())
                .with_method(
                    MethodDefinition::new("PublicVirtualVoidMethodWithAttribute", MemberAccess::PUBLIC)
                        .overridable()
                        .annotated(dummy_method()),
                )
                .with_method(
                    MethodDefinition::new("InternalVirtualIntMethod", MemberAccess::ASSEMBLY)
                        .returning(int32)
                        .overridable(),
                )
                .with_method(
                    MethodDefinition::new("ProtectedVirtualVoidMethodWithAttribute", MemberAccess::FAMILY)
                        .overridable()
                        .annotated(dummy_method()),
                )
                .with_method(MethodDefinition::new("PrivateVoidDoNothing", MemberAccess::PRIVATE))
                .with_method(
                    MethodDefinition::new("ProtectedVirtualStringMethod", MemberAccess::FAMILY)
                        .returning(TypeName::string())
                        .overridable(),
                )
                .with_method(
                    MethodDefinition::new("PrivateStringMethod", MemberAccess::PRIVATE)
                        .returning(TypeName::string()),
                ),
        )
        .expect("fixture registers")
}

fn methods() -> anyhow::Result<MethodSelector> {
    init_test_tracing();
    Ok(MethodSelector::from_type(&fixture(), &fixture_name(), &MemberScope::default())?)
}

#[test]
fn default_scope_skips_event_accessors() -> anyhow::Result<()> {
    let all = methods()?;
    assert_eq!(all.len(), 7);
    assert!(!all.contains("add_SomethingChanged"));
    assert!(!all.contains("remove_SomethingChanged"));
    Ok(())
}

#[test]
fn special_names_are_captured_on_request() -> anyhow::Result<()> {
    let scope = MemberScope {
        include_special_names: true,
        ..MemberScope::default()
    };
    let all = MethodSelector::from_type(&fixture(), &fixture_name(), &scope)?;
    assert_eq!(all.len(), 9);
    assert!(all.contains("add_SomethingChanged"));
    Ok(())
}

#[test]
fn public_or_internal_methods() -> anyhow::Result<()> {
    let selected = methods()?.that_are_public_or_internal();
    assert_eq!(
        selected.names(),
        vec![
            "PublicVirtualVoidMethod",
            "PublicVirtualVoidMethodWithAttribute",
            "InternalVirtualIntMethod",
        ]
    );
    Ok(())
}

#[test]
fn decorated_methods() -> anyhow::Result<()> {
    let selected = methods()?.that_are_decorated_with(&dummy_method());
    assert_eq!(selected.len(), 2);

    let undecorated = methods()?.that_are_not_decorated_with(&dummy_method());
    assert_eq!(undecorated.len(), 5);
    Ok(())
}

#[test]
fn methods_returning_string() -> anyhow::Result<()> {
    let selected = methods()?.that_return(&TypeName::string());
    assert_eq!(
        selected.names(),
        vec!["ProtectedVirtualStringMethod", "PrivateStringMethod"]
    );
    Ok(())
}

#[test]
fn methods_returning_void() -> anyhow::Result<()> {
    assert_eq!(methods()?.that_return_void().len(), 4);
    Ok(())
}

#[test]
fn public_or_internal_void_methods() -> anyhow::Result<()> {
    let selected = methods()?.that_are_public_or_internal().that_return_void();
    assert_eq!(selected.len(), 2);
    Ok(())
}

#[test]
fn string_and_void_are_exclusive_in_either_order() -> anyhow::Result<()> {
    let all = methods()?;
    assert!(all.that_return(&TypeName::string()).that_return_void().is_empty());
    assert!(all.that_return_void().that_return(&TypeName::string()).is_empty());
    Ok(())
}

#[test]
fn overridable_methods_keep_declaration_order() -> anyhow::Result<()> {
    let selected = methods()?.that_are_overridable();
    assert_eq!(
        selected.names(),
        vec![
            "PublicVirtualVoidMethod",
            "PublicVirtualVoidMethodWithAttribute",
            "InternalVirtualIntMethod",
            "ProtectedVirtualVoidMethodWithAttribute",
            "ProtectedVirtualStringMethod",
        ]
    );
    Ok(())
}

#[test]
fn visible_methods_are_all_virtual() -> anyhow::Result<()> {
    methods()?
        .that_are_public_or_internal()
        .should()
        .be_overridable("mocks need to intercept them")?;
    Ok(())
}

#[test]
fn non_virtual_methods_are_listed_on_failure() -> anyhow::Result<()> {
    let failure = methods()?
        .should()
        .be_overridable("we want to test the error {0}")
        .unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected all selected methods to be virtual because we want to test the error {0}, \
         but the following methods are not:\n\
         Void Fixtures.TestClassForMethodSelector.PrivateVoidDoNothing\n\
         String Fixtures.TestClassForMethodSelector.PrivateStringMethod"
    );
    Ok(())
}

#[test]
fn decorated_check_lists_undecorated_methods() -> anyhow::Result<()> {
    let failure = methods()?
        .that_are_public_or_internal()
        .should()
        .be_decorated_with(&dummy_method(), "")
        .unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected all selected methods to be decorated with Fixtures.DummyMethodAttribute, \
         but the following methods are not:\n\
         Void Fixtures.TestClassForMethodSelector.PublicVirtualVoidMethod\n\
         Int32 Fixtures.TestClassForMethodSelector.InternalVirtualIntMethod"
    );
    Ok(())
}

#[test]
fn unknown_type_is_a_metadata_fault() {
    let err = MethodSelector::from_type(
        &fixture(),
        &TypeName::new("Fixtures", "Nope"),
        &MemberScope::default(),
    )
    .unwrap_err();
    assert!(err.is_metadata_fault());
    assert!(!err.is_invalid_usage());
}
