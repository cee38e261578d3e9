//! Method parameters.

use crate::type_mapper::TypeMapper;
use dtsgen_common::Parameter;
use dtsgen_common::types::ANY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNode {
    pub name: String,
    pub type_name: String,
    pub optional: bool,
    pub spread: bool,
    pub description: String,
    /// Default value as JSON text, if the API declares one.
    pub default_value: Option<String>,
}

impl ParameterNode {
    /// A required, non-spread parameter.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ParameterNode {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            spread: false,
            description: String::new(),
            default_value: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    pub fn from_api(param: &Parameter, method_full_name: &str, mapper: &TypeMapper<'_>) -> Self {
        let qualified = format!("{method_full_name}.{}", param.name);
        let raw = mapper
            .method_parameter_type(method_full_name, &param.name)
            .unwrap_or(&param.type_name);

        ParameterNode {
            name: param.name.clone(),
            type_name: mapper.replace_types(raw, &qualified),
            optional: param.optional,
            spread: param.spread,
            description: param.description.clone().unwrap_or_default(),
            default_value: param.default_value.as_ref().map(|v| v.to_string()),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }

    /// Whether this parameter can take `other`'s place without ambiguity.
    /// Compares raw type identity; `any` on either side is interchangeable.
    pub fn is_interchangeable_with(&self, other: &ParameterNode) -> bool {
        self.type_name == other.type_name || self.type_name == ANY || other.type_name == ANY
    }

    /// Copy of this parameter with the optional flag cleared.
    pub fn as_required(&self) -> ParameterNode {
        ParameterNode {
            optional: false,
            ..self.clone()
        }
    }

    /// Widen the declared type to `any`.
    ///
    /// Loses call-site type safety; a union of the conflicting types would be
    /// the precise representation.
    pub fn widen_to_any(&mut self) {
        self.type_name = ANY.to_string();
    }

    /// `name: T`, `name?: T` or `...name: T[]`.
    pub fn render(&self) -> String {
        if self.spread {
            return format!("...{}: {}", self.name, spread_type(&self.type_name));
        }
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, marker, self.type_name)
    }

    /// `@param` line for the documentation block, on a single line.
    pub fn doc_line(&self) -> String {
        let name = match (&self.default_value, self.optional) {
            (Some(default), _) => format!("[{}={}]", self.name, default),
            (None, true) => format!("[{}]", self.name),
            (None, false) => self.name.clone(),
        };
        let line = format!("@param {{{}}} {} {}", self.type_name, name, self.description);
        single_line(line.trim_end())
    }
}

fn spread_type(type_name: &str) -> String {
    if type_name.ends_with("[]") {
        type_name.to_string()
    } else if type_name.contains('|') {
        format!("({type_name})[]")
    } else {
        format!("{type_name}[]")
    }
}

pub(crate) fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "tests/parameter_tests.rs"]
mod tests;
