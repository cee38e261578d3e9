//! Return type compatibility between an overridden and an overriding method.
//!
//! A conservative, name-based check: it never assumes a relationship it cannot
//! prove from the class registry.

use crate::registry::ClassRegistry;
use dtsgen_common::types::{ANY, THIS, VOID};

/// Whether `candidate` may stand in for `expected`.
///
/// Rules, in order:
/// 1. identical names
/// 2. `expected` is `void`
/// 3. `candidate` is `any`
/// 4. `candidate` is the self-type marker
/// 5. both names resolve to classes and `candidate`'s base chain (itself
///    included) contains a class whose simple name equals `expected`'s
///
/// Anything else, including names that do not resolve, is incompatible.
pub fn is_return_type_compatible(expected: &str, candidate: &str, registry: &ClassRegistry) -> bool {
    if expected == candidate || expected == VOID || candidate == ANY || candidate == THIS {
        return true;
    }

    let (Some(expected_class), Some(candidate_id)) =
        (registry.by_name(expected), registry.lookup(candidate))
    else {
        return false;
    };

    registry
        .chain(candidate_id)
        .any(|id| registry.get(id).name == expected_class.name)
}

#[cfg(test)]
#[path = "tests/compat_tests.rs"]
mod tests;
