//! Methods and constructors.
//!
//! A `MethodNode` captures the kind of its enclosing symbol as a plain value at
//! construction time; the emitter picks the signature shape from it and never
//! needs a link back to the parent.

use crate::parameter::ParameterNode;
use crate::type_mapper::TypeMapper;
use dtsgen_common::config::{matches_exact, matches_qualified};
use dtsgen_common::types::{ANY, CONSTRUCTOR, THIS, VOID};
use dtsgen_common::{ClassConstructor, GeneratorConfig, Kind, Method, Visibility};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnValue {
    pub type_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub name: String,
    pub full_name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    pub description: String,
    /// Declaration order is significant and never changed.
    pub parameters: Vec<ParameterNode>,
    pub return_value: ReturnValue,
    pub parent_kind: Kind,
    pub parent_name: String,
}

impl MethodNode {
    pub fn from_api(
        method: &Method,
        parent_name: &str,
        parent_kind: Kind,
        mapper: &TypeMapper<'_>,
        config: &GeneratorConfig,
    ) -> Self {
        let full_name = format!("{parent_name}.{}", method.name);
        let specific = &config.replacements.specific;

        let is_static = method.is_static
            && !matches_qualified(&specific.method_remove_static, &full_name, &method.name);

        let description = method
            .return_value
            .as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default();
        let declared = method.return_value.as_ref().and_then(|r| r.type_name.as_deref());
        let raw = match mapper.method_return_type(&full_name, &method.name).or(declared) {
            Some(raw) => raw,
            None if description.is_empty() => VOID,
            None => ANY,
        };
        let mut type_name = mapper.replace_types(raw, &full_name);

        let returns_own_class = !is_static
            && method.name != CONSTRUCTOR
            && parent_kind == Kind::Class
            && type_name == parent_name
            && !matches_exact(&specific.method_return_type_not_this, &full_name);
        if returns_own_class {
            tracing::trace!(method = %full_name, "return type inferred as self type");
            type_name = THIS.to_string();
        }

        let parameters = method
            .parameters
            .iter()
            .map(|p| ParameterNode::from_api(p, &full_name, mapper))
            .collect();

        MethodNode {
            name: method.name.clone(),
            full_name,
            is_static,
            visibility: method.visibility,
            description: method.description.clone().unwrap_or_default(),
            parameters,
            return_value: ReturnValue {
                type_name,
                description,
            },
            parent_kind,
            parent_name: parent_name.to_string(),
        }
    }

    /// A class constructor, modeled as a method named `constructor` returning nothing.
    pub fn constructor(ctor: &ClassConstructor, class_name: &str, mapper: &TypeMapper<'_>) -> Self {
        let full_name = format!("{class_name}.{CONSTRUCTOR}");
        let parameters = ctor
            .parameters
            .iter()
            .map(|p| ParameterNode::from_api(p, &full_name, mapper))
            .collect();

        MethodNode {
            name: CONSTRUCTOR.to_string(),
            full_name,
            is_static: false,
            visibility: ctor.visibility,
            description: ctor.description.clone().unwrap_or_default(),
            parameters,
            return_value: ReturnValue {
                type_name: VOID.to_string(),
                description: String::new(),
            },
            parent_kind: Kind::Class,
            parent_name: class_name.to_string(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }

    /// Whether the configuration drops this method from the output.
    pub fn is_ignored(&self, config: &GeneratorConfig) -> bool {
        if self.parent_kind == Kind::Class
            && self.is_static
            && matches_exact(&config.ignore_static, &self.full_name)
        {
            return true;
        }
        matches_qualified(
            &config.replacements.specific.filter_methods,
            &self.full_name,
            &self.name,
        )
    }

    pub fn needs_compatibility_overload(&self, config: &GeneratorConfig) -> bool {
        matches_exact(
            &config.replacements.specific.method_overrides_not_compatible,
            &self.full_name,
        )
    }
}

#[cfg(test)]
#[path = "tests/method_tests.rs"]
mod tests;
