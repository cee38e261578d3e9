//! Class records and member properties.

use crate::method::MethodNode;
use crate::type_mapper::TypeMapper;
use dtsgen_common::{GeneratorConfig, Kind, Property, Symbol, Visibility};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    pub name: String,
    pub full_name: String,
    pub type_name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub description: String,
}

impl PropertyNode {
    pub fn from_api(property: &Property, parent_name: &str, mapper: &TypeMapper<'_>) -> Self {
        let full_name = format!("{parent_name}.{}", property.name);
        let raw = mapper
            .property_type(&full_name, &property.name)
            .unwrap_or(&property.type_name);
        let type_name = mapper.replace_types(raw, &full_name);

        PropertyNode {
            name: property.name.clone(),
            full_name,
            type_name,
            visibility: property.visibility,
            is_static: property.is_static,
            description: property.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    pub full_name: String,
    /// Full name of the base class; may name a class outside this library.
    pub base_class: Option<String>,
    pub description: String,
    pub module: Option<String>,
    pub constructor: Option<MethodNode>,
    pub methods: Vec<MethodNode>,
    pub properties: Vec<PropertyNode>,
}

impl ClassNode {
    /// Bare class record, used when assembling registries by hand.
    pub fn new(full_name: impl Into<String>, base_class: Option<&str>) -> Self {
        let full_name = full_name.into();
        ClassNode {
            name: dtsgen_common::types::simple_name(&full_name).to_string(),
            full_name,
            base_class: base_class.map(str::to_string),
            description: String::new(),
            module: None,
            constructor: None,
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn from_symbol(symbol: &Symbol, mapper: &TypeMapper<'_>, config: &GeneratorConfig) -> Self {
        let methods = symbol
            .methods
            .iter()
            .map(|m| MethodNode::from_api(m, &symbol.name, Kind::Class, mapper, config))
            .collect();
        let properties = symbol
            .properties
            .iter()
            .map(|p| PropertyNode::from_api(p, &symbol.name, mapper))
            .collect();
        let constructor = symbol
            .constructor
            .as_ref()
            .map(|ctor| MethodNode::constructor(ctor, &symbol.name, mapper));

        ClassNode {
            name: symbol.basename().to_string(),
            full_name: symbol.name.clone(),
            base_class: symbol.extends.clone(),
            description: symbol.description.clone().unwrap_or_default(),
            module: symbol.module.clone(),
            constructor,
            methods,
            properties,
        }
    }

    /// First own method with the given name and static-ness.
    pub fn find_method(&self, name: &str, is_static: bool) -> Option<&MethodNode> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.is_static == is_static)
    }
}
