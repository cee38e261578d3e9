//! Class Registry
//!
//! Indexed store over every class record of the tree:
//! - `classes`: growable table, a record's `ClassId` is its stable index
//! - `by_name`: full class name -> `ClassId`
//! - `by_base_class`: base class full name -> direct subclasses, in insertion order
//!
//! Both maps are only written by `insert`, so every subclass listed under a
//! base name is also registered under its own name. Records refer to their base
//! by name, never by reference; a base name that does not resolve simply ends
//! the chain.

use crate::class::ClassNode;
use crate::error::BuildError;
use crate::method::MethodNode;
use rustc_hash::FxHashMap;

/// Index of a class in its registry. Only handed out by the registry itself:
///
/// ```compile_fail
/// let _ = dtsgen_emitter::ClassId(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    classes: Vec<ClassNode>,
    by_name: FxHashMap<String, ClassId>,
    by_base_class: FxHashMap<String, Vec<ClassId>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: ClassNode) -> Result<ClassId, BuildError> {
        if self.by_name.contains_key(&class.full_name) {
            return Err(BuildError::DuplicateClass(class.full_name));
        }

        let id = ClassId(self.classes.len() as u32);
        self.by_name.insert(class.full_name.clone(), id);
        if let Some(base) = &class.base_class {
            self.by_base_class.entry(base.clone()).or_default().push(id);
        }
        self.classes.push(class);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, id: ClassId) -> &ClassNode {
        &self.classes[id.0 as usize]
    }

    pub(crate) fn get_mut(&mut self, id: ClassId) -> &mut ClassNode {
        &mut self.classes[id.0 as usize]
    }

    pub fn lookup(&self, full_name: &str) -> Option<ClassId> {
        self.by_name.get(full_name).copied()
    }

    pub fn by_name(&self, full_name: &str) -> Option<&ClassNode> {
        self.lookup(full_name).map(|id| self.get(id))
    }

    /// Direct subclasses of the class named `base_name`.
    pub fn subclasses(&self, base_name: &str) -> &[ClassId] {
        self.by_base_class
            .get(base_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The registered base class of `id`, if its base name resolves.
    pub fn base_of(&self, id: ClassId) -> Option<ClassId> {
        self.get(id)
            .base_class
            .as_deref()
            .and_then(|base| self.lookup(base))
    }

    /// Classes without a resolvable base class, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.ids().filter(|&id| self.base_of(id).is_none())
    }

    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len() as u32).map(ClassId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassNode)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (ClassId(idx as u32), class))
    }

    /// `start` followed by its ancestors, nearest first.
    ///
    /// Stops at the first unresolvable base name. Malformed inputs with
    /// inheritance cycles are cut off after visiting every class once.
    pub fn chain(&self, start: ClassId) -> BaseChain<'_> {
        BaseChain {
            registry: self,
            next: Some(start),
            remaining: self.classes.len(),
        }
    }

    /// Nearest method with the same name and static-ness, searching `start`
    /// and then its ancestors. Returns the declaring class with the method.
    pub fn find_in_chain(
        &self,
        start: ClassId,
        name: &str,
        is_static: bool,
    ) -> Option<(ClassId, &MethodNode)> {
        self.chain(start).find_map(|id| {
            self.get(id)
                .find_method(name, is_static)
                .map(|method| (id, method))
        })
    }
}

pub struct BaseChain<'a> {
    registry: &'a ClassRegistry,
    next: Option<ClassId>,
    remaining: usize,
}

impl Iterator for BaseChain<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.registry.base_of(current);
        Some(current)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
