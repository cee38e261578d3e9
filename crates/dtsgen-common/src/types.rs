//! Well-known type names of the target type system.

/// The "nothing returned" type.
pub const VOID: &str = "void";

/// The universal "accepts anything" type.
pub const ANY: &str = "any";

/// Self-type marker: the receiver's own (sub)type, used by fluent methods.
pub const THIS: &str = "this";

/// Name under which class constructors are modeled as methods.
pub const CONSTRUCTOR: &str = "constructor";

/// Returns the last dotted segment of a qualified name (`a.b.C` -> `C`).
pub fn simple_name(full_name: &str) -> &str {
    full_name.rsplit('.').next().unwrap_or(full_name)
}

/// Returns the qualified name without its last segment (`a.b.C` -> `a.b`).
pub fn parent_name(full_name: &str) -> Option<&str> {
    full_name.rfind('.').map(|idx| &full_name[..idx])
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
