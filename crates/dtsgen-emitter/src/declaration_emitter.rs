//! Method Declaration Emitter
//!
//! Prints one block per planned overload of a method: a documentation block
//! followed by the signature line.
//!
//! ```typescript
//! /**
//!  * Sets a new value for property text.
//!  * @param {string} sText New value for property text
//!  * @returns {this} Reference to this in order to allow method chaining
//!  */
//! public setText(sText: string): this;
//! ```
//!
//! The signature shape follows the enclosing symbol kind: free `function` in a
//! namespace, bare member in an interface, visibility (and `static`) keywords
//! in a class.
//!
//! The emitter is internal to the crate: printing is only reachable through
//! `ReconciledTree`, so no method can be printed before its overrides have
//! been reconciled.

use crate::error::EmitError;
use crate::method::{MethodNode, ReturnValue};
use crate::overloads::plan_overloads;
use crate::parameter::{ParameterNode, single_line};
use dtsgen_common::types::{ANY, VOID};
use dtsgen_common::{GeneratorConfig, Kind};

const COMPATIBILITY_DESCRIPTION: &str = "Compatibility overload. The API declares an override that does not \
satisfy the target override rules; this signature only keeps the declaration \
checker quiet and is not meant to be called.";

pub(crate) struct DeclarationEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DeclarationEmitter<'a> {
    pub(crate) fn new(config: &'a GeneratorConfig) -> Self {
        DeclarationEmitter { config }
    }

    /// Emit every overload of `method`, in order. Empty if the method is filtered.
    ///
    /// The enclosing kind is checked before the filters, so a filtered method on
    /// an enum is still an error.
    pub(crate) fn emit_method(&self, method: &MethodNode) -> Result<Vec<String>, EmitError> {
        let declaration = declaration_prefix(method)?;

        if method.is_ignored(self.config) {
            tracing::trace!(method = %method.full_name, "method filtered from output");
            return Ok(Vec::new());
        }

        let mut blocks = Vec::new();
        for overload in plan_overloads(&method.parameters) {
            blocks.push(self.emit_signature(
                method,
                &declaration,
                &method.description,
                &overload,
                &method.return_value,
            ));
        }

        if method.needs_compatibility_overload(self.config) {
            let parameters = [ParameterNode::new("args", "any[]").with_spread(true)];
            let return_value = ReturnValue {
                type_name: ANY.to_string(),
                description: String::new(),
            };
            blocks.push(self.emit_signature(
                method,
                &declaration,
                COMPATIBILITY_DESCRIPTION,
                &parameters,
                &return_value,
            ));
        }

        Ok(blocks)
    }

    fn emit_signature(
        &self,
        method: &MethodNode,
        declaration: &str,
        description: &str,
        parameters: &[ParameterNode],
        return_value: &ReturnValue,
    ) -> String {
        let mut doc_lines: Vec<String> = parameters.iter().map(ParameterNode::doc_line).collect();
        if return_value.type_name != VOID {
            let line = format!(
                "@returns {{{}}} {}",
                return_value.type_name, return_value.description
            );
            doc_lines.push(single_line(line.trim_end()));
        }

        let params = parameters
            .iter()
            .map(ParameterNode::render)
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = if method.is_constructor() {
            String::new()
        } else {
            format!(": {}", return_value.type_name)
        };

        let mut block = doc_comment(description, &doc_lines);
        block.push_str(&format!("{declaration}{}({params}){return_type};", method.name));
        block
    }
}

/// `function `, nothing, or `<visibility> [static ]`, by enclosing kind.
fn declaration_prefix(method: &MethodNode) -> Result<String, EmitError> {
    match method.parent_kind {
        Kind::Namespace => Ok("function ".to_string()),
        Kind::Interface => Ok(String::new()),
        Kind::Class => {
            let static_modifier = if method.is_static { "static " } else { "" };
            Ok(format!("{} {}", method.visibility.keyword(), static_modifier))
        }
        kind @ (Kind::Enum | Kind::Typedef) => Err(EmitError::KindCannotHaveMethods {
            kind,
            owner: method.parent_name.clone(),
            method: method.full_name.clone(),
        }),
    }
}

/// `/** ... */` block, one line per description line and tag; ends with a newline.
/// Empty when there is nothing to document.
pub(crate) fn doc_comment(description: &str, tags: &[String]) -> String {
    let description = description.trim();
    if description.is_empty() && tags.is_empty() {
        return String::new();
    }

    let mut out = String::from("/**\n");
    for line in description.lines().chain(tags.iter().map(String::as_str)) {
        let line = line.trim_end().replace("*/", "* /");
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push_str(" */\n");
    out
}

#[cfg(test)]
#[path = "tests/declaration_emitter_tests.rs"]
mod tests;
