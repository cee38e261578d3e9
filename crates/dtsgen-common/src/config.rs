//! Generator configuration values.
//!
//! These types only describe configuration; reading them from disk is the
//! CLI's job. Every section is optional in the source file and falls back to
//! its `Default`.
//!
//! Qualified-name keys accept either a fully-qualified name
//! (`sap.m.Button.setText`) or a wildcard on the simple name (`*.setText`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the requested version in `input.jsonLocation`.
pub const VERSION_MARKER: &str = "{{VERSION}}";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub local: LocalOptions,
    #[serde(default)]
    pub output: OutputOptions,
    #[serde(default)]
    pub input: InputOptions,
    /// Symbols (and everything nested under them) to skip entirely.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Static class methods, by full name, that are not emitted.
    #[serde(default)]
    pub ignore_static: Vec<String>,
    #[serde(default)]
    pub replacements: Replacements,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalOptions {
    #[serde(default)]
    pub run_local: bool,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default = "default_exports_path")]
    pub exports_path: String,
    #[serde(default = "default_definitions_path")]
    pub definitions_path: String,
    #[serde(default = "default_indentation")]
    pub indentation: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            exports_path: default_exports_path(),
            definitions_path: default_definitions_path(),
            indentation: default_indentation(),
        }
    }
}

fn default_exports_path() -> String {
    "exports".to_string()
}

fn default_definitions_path() -> String {
    "declarations".to_string()
}

fn default_indentation() -> String {
    "    ".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOptions {
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub json_location: String,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub namespaces: Vec<String>,
    /// Additional attempts after a failed remote fetch.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for InputOptions {
    fn default() -> Self {
        InputOptions {
            api_base_url: String::new(),
            json_location: String::new(),
            versions: Vec::new(),
            namespaces: Vec::new(),
            retries: default_retries(),
        }
    }
}

fn default_retries() -> u32 {
    2
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacements {
    /// Raw type name -> target type name, applied to each union member.
    #[serde(default)]
    pub global: FxHashMap<String, String>,
    /// Raw type names that are logged when encountered.
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub specific: SpecificReplacements,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificReplacements {
    /// Namespace used as a type -> replacement type.
    #[serde(default)]
    pub namespace_as_type: FxHashMap<String, String>,
    /// `<method full name>.<parameter>` or `*.<parameter>` -> type.
    #[serde(default)]
    pub method_parameter_type: FxHashMap<String, String>,
    #[serde(default)]
    pub method_return_type: FxHashMap<String, String>,
    #[serde(default)]
    pub property_type: FxHashMap<String, String>,
    /// Methods that get the trailing `(...args: any[]): any` overload.
    #[serde(default)]
    pub method_overrides_not_compatible: Vec<String>,
    /// Methods whose `static` flag is cleared before processing.
    #[serde(default)]
    pub method_remove_static: Vec<String>,
    /// Methods excluded from self-type inference and fluent-return fixes.
    #[serde(default)]
    pub method_return_type_not_this: Vec<String>,
    /// Methods dropped from the output.
    #[serde(default)]
    pub filter_methods: Vec<String>,
}

/// Replace every version marker in `template` with `version`.
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(VERSION_MARKER, version)
}

/// Wildcard key for a simple name: `*.name`.
pub fn wildcard(name: &str) -> String {
    format!("*.{name}")
}

/// Looks up `full_name`, then `*.name`.
pub fn lookup_qualified<'a>(
    map: &'a FxHashMap<String, String>,
    full_name: &str,
    name: &str,
) -> Option<&'a str> {
    map.get(full_name)
        .or_else(|| map.get(&wildcard(name)))
        .map(String::as_str)
}

/// True if `list` names `full_name` or `*.name`.
pub fn matches_qualified(list: &[String], full_name: &str, name: &str) -> bool {
    let wildcard = wildcard(name);
    list.iter().any(|entry| entry == full_name || *entry == wildcard)
}

/// True if `list` names exactly `full_name`.
pub fn matches_exact(list: &[String], full_name: &str) -> bool {
    list.iter().any(|entry| entry == full_name)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
