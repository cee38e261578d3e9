//! Raw type name -> target type name mapping.
//!
//! Raw types come as `|`-separated unions whose members may carry `[]`
//! suffixes (`int|sap.m.Button[]`). Each member is looked up in the
//! namespace-as-type table, then in the global table; suffixes are kept.

use dtsgen_common::config::lookup_qualified;
use dtsgen_common::types::ANY;
use dtsgen_common::{GeneratorConfig, Replacements};

pub struct TypeMapper<'a> {
    replacements: &'a Replacements,
}

impl<'a> TypeMapper<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        TypeMapper {
            replacements: &config.replacements,
        }
    }

    /// Map a raw type for the member identified by `context` (used for logging only).
    pub fn replace_types(&self, raw: &str, context: &str) -> String {
        let mut members: Vec<String> = Vec::new();

        for part in raw.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            let base = part.trim_end_matches("[]");
            let suffix = &part[base.len()..];

            if self.replacements.warnings.iter().any(|w| w == base) {
                tracing::warn!(member = %context, type_name = %base, "type flagged in replacement warnings");
            }

            let specific = &self.replacements.specific;
            let mapped = specific
                .namespace_as_type
                .get(base)
                .or_else(|| self.replacements.global.get(base))
                .map(String::as_str)
                .unwrap_or(base);

            let member = format!("{mapped}{suffix}");
            if !members.contains(&member) {
                members.push(member);
            }
        }

        if members.is_empty() {
            return ANY.to_string();
        }
        members.join("|")
    }

    /// Forced return type for a method (full name or `*.name`).
    pub fn method_return_type(&self, full_name: &str, name: &str) -> Option<&'a str> {
        lookup_qualified(
            &self.replacements.specific.method_return_type,
            full_name,
            name,
        )
    }

    /// Forced type for a parameter (`<method full name>.<param>` or `*.<param>`).
    pub fn method_parameter_type(&self, method_full_name: &str, param: &str) -> Option<&'a str> {
        let qualified = format!("{method_full_name}.{param}");
        lookup_qualified(
            &self.replacements.specific.method_parameter_type,
            &qualified,
            param,
        )
    }

    pub fn property_type(&self, full_name: &str, name: &str) -> Option<&'a str> {
        lookup_qualified(&self.replacements.specific.property_type, full_name, name)
    }
}

#[cfg(test)]
#[path = "tests/type_mapper_tests.rs"]
mod tests;
