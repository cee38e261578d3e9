use super::*;
use crate::class::ClassNode;

fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    for (name, base) in [
        ("lib.Foo", None),
        ("lib.Bar", Some("lib.Foo")),
        ("lib.Qux", Some("lib.Bar")),
        ("lib.Baz", None),
    ] {
        registry
            .insert(ClassNode::new(name, base))
            .expect("unique class names");
    }
    registry
}

#[test]
fn test_trivial_rules() {
    let registry = registry();

    assert!(is_return_type_compatible("string", "string", &registry));
    assert!(is_return_type_compatible("void", "lib.Foo", &registry));
    assert!(is_return_type_compatible("lib.Foo", "any", &registry));
    assert!(is_return_type_compatible("lib.Foo", "this", &registry));
}

#[test]
fn test_subclass_is_compatible() {
    let registry = registry();

    assert!(is_return_type_compatible("lib.Foo", "lib.Bar", &registry));
    assert!(is_return_type_compatible("lib.Foo", "lib.Qux", &registry));
}

#[test]
fn test_base_class_is_not_compatible_with_subclass() {
    let registry = registry();

    assert!(!is_return_type_compatible("lib.Bar", "lib.Foo", &registry));
}

#[test]
fn test_unrelated_classes_are_incompatible() {
    let registry = registry();

    assert!(!is_return_type_compatible("lib.Foo", "lib.Baz", &registry));
}

#[test]
fn test_unresolved_names_are_incompatible() {
    let registry = registry();

    assert!(!is_return_type_compatible("lib.Foo", "lib.Unregistered", &registry));
    assert!(!is_return_type_compatible("lib.Unregistered", "lib.Foo", &registry));
    assert!(!is_return_type_compatible("string", "number", &registry));
    assert!(!is_return_type_compatible("any", "string", &registry));
}
