//! Override Reconciliation
//!
//! Runs once, after the registry is complete and before anything is printed.
//! Starting at every class without a resolvable base, subclasses are visited
//! depth-first; each visited class has its methods aligned with the nearest
//! method of the same name and static-ness up its base chain:
//!
//! - an incompatible return type is replaced, either by the subclass itself
//!   (when the ancestor returns its own declaring class) or by the ancestor's
//!   return type
//! - a `protected` method overriding a `public` one becomes `public`
//!
//! Ancestors are always settled before their descendants, so a second run
//! finds nothing left to change.

use crate::compat::is_return_type_compatible;
use crate::registry::{ClassId, ClassRegistry};
use dtsgen_common::config::matches_exact;
use dtsgen_common::types::{ANY, THIS};
use dtsgen_common::{GeneratorConfig, Visibility};

pub struct OverrideReconciler<'a> {
    registry: &'a mut ClassRegistry,
    /// Methods whose return type is never rewritten to the subclass.
    not_this: &'a [String],
}

struct MethodFix {
    index: usize,
    return_type: Option<String>,
    widen_visibility: bool,
}

impl<'a> OverrideReconciler<'a> {
    pub fn new(registry: &'a mut ClassRegistry, config: &'a GeneratorConfig) -> Self {
        OverrideReconciler {
            registry,
            not_this: &config.replacements.specific.method_return_type_not_this,
        }
    }

    pub fn run(&mut self) {
        let roots: Vec<ClassId> = self.registry.roots().collect();
        for root in roots {
            self.visit_subclasses(root);
        }
    }

    fn visit_subclasses(&mut self, base: ClassId) {
        let base_name = self.registry.get(base).full_name.clone();
        let subclasses = self.registry.subclasses(&base_name).to_vec();
        for subclass in subclasses {
            self.reconcile_class(base, subclass);
            self.visit_subclasses(subclass);
        }
    }

    fn reconcile_class(&mut self, base: ClassId, subclass: ClassId) {
        let fixes = self.collect_fixes(base, subclass);
        if fixes.is_empty() {
            return;
        }

        let class = self.registry.get_mut(subclass);
        for fix in fixes {
            let method = &mut class.methods[fix.index];
            if let Some(return_type) = fix.return_type {
                tracing::debug!(
                    method = %method.full_name,
                    from = %method.return_value.type_name,
                    to = %return_type,
                    "aligning return type with overridden method"
                );
                method.return_value.type_name = return_type;
            }
            if fix.widen_visibility {
                tracing::debug!(method = %method.full_name, "widening visibility to public");
                method.visibility = Visibility::Public;
            }
        }
    }

    fn collect_fixes(&self, base: ClassId, subclass: ClassId) -> Vec<MethodFix> {
        let registry = &*self.registry;
        let class = registry.get(subclass);
        let mut fixes = Vec::new();

        for (index, method) in class.methods.iter().enumerate() {
            let Some((owner, overridden)) =
                registry.find_in_chain(base, &method.name, method.is_static)
            else {
                continue;
            };

            let expected = &overridden.return_value.type_name;
            let actual = &method.return_value.type_name;

            let mut return_type = None;
            if !is_return_type_compatible(expected, actual, registry) {
                let candidate = if *expected == registry.get(owner).full_name {
                    // Fluent method: the override returns the subclass.
                    if *actual != class.full_name && !matches_exact(self.not_this, &method.full_name)
                    {
                        Some(class.full_name.clone())
                    } else {
                        None
                    }
                } else {
                    Some(expected.clone())
                };
                return_type = candidate.filter(|c| c != ANY && actual != THIS);
            }

            let widen_visibility = overridden.visibility == Visibility::Public
                && method.visibility == Visibility::Protected;

            if return_type.is_some() || widen_visibility {
                fixes.push(MethodFix {
                    index,
                    return_type,
                    widen_visibility,
                });
            }
        }

        fixes
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
