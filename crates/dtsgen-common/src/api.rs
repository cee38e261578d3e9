//! API Description Model
//!
//! Serde model of the library description (`api.json`) the generator consumes.
//! Every symbol carries a `kind` tag; kind-specific members are optional and
//! default to empty. Unknown JSON fields are ignored.
//!
//! ```json
//! {
//!   "library": "sap.m",
//!   "version": "1.60.0",
//!   "symbols": [
//!     { "kind": "class", "name": "sap.m.Button", "basename": "Button",
//!       "visibility": "public", "extends": "sap.ui.core.Control",
//!       "methods": [ { "name": "setText", "visibility": "public",
//!                      "parameters": [ { "name": "sText", "type": "string" } ],
//!                      "returnValue": { "type": "sap.m.Button" } } ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete API description as delivered by the fetch collaborator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    #[serde(default)]
    pub library: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

/// Closed set of symbol kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Namespace,
    Class,
    Enum,
    Interface,
    Typedef,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Namespace => "namespace",
            Kind::Class => "class",
            Kind::Enum => "enum",
            Kind::Interface => "interface",
            Kind::Typedef => "typedef",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Restricted,
}

impl Visibility {
    /// Keyword used in class member declarations.
    /// `restricted` has no counterpart in the target language and renders as `protected`.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected | Visibility::Restricted => "protected",
        }
    }
}

/// One raw entry from the API description.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub kind: Kind,
    pub name: String,
    #[serde(default)]
    pub basename: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub description: Option<String>,
    /// Module path the symbol is exported from (e.g. `sap/m/Button`).
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Only meaningful for classes.
    #[serde(default)]
    pub constructor: Option<ClassConstructor>,
}

impl Symbol {
    /// Simple name of the symbol, falling back to the last segment of `name`.
    pub fn basename(&self) -> &str {
        if self.basename.is_empty() {
            crate::types::simple_name(&self.name)
        } else {
            &self.basename
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConstructor {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_value: Option<ReturnValueInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnValueInfo {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub spread: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
