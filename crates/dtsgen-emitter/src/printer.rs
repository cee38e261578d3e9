//! Declaration File Printer
//!
//! Collates the per-member blocks of a reconciled tree into a `.d.ts` file.
//! Symbols are grouped by their parent namespace (a namespace symbol's own
//! members go into its own block); blocks are sorted by namespace name and
//! keep input order inside:
//!
//! ```typescript
//! declare namespace sap.m {
//!     function getScrollDelegate(oControl: sap.ui.core.Control): any;
//!
//!     class Button extends sap.ui.core.Control {
//!         public constructor(sId?: string, mSettings?: any);
//!
//!         public setText(sText: string): this;
//!     }
//! }
//! ```
//!
//! Typedefs print nothing.

use crate::class::{ClassNode, PropertyNode};
use crate::declaration_emitter::{DeclarationEmitter, doc_comment};
use crate::error::EmitError;
use crate::method::MethodNode;
use crate::tree::{ContainerNode, EnumNode, ReconciledTree, SymbolNode};
use dtsgen_common::Kind;
use dtsgen_common::types::parent_name;
use std::collections::BTreeMap;

/// Indenting line writer.
pub struct DeclarationWriter {
    out: String,
    indentation: String,
    level: usize,
}

impl DeclarationWriter {
    pub fn new(indentation: &str) -> Self {
        DeclarationWriter {
            out: String::with_capacity(4096),
            indentation: indentation.to_string(),
            level: 0,
        }
    }

    pub fn write_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.level {
                self.out.push_str(&self.indentation);
            }
            self.out.push_str(line);
        }
        self.out.push('\n');
    }

    /// Write a multi-line block at the current indentation.
    pub fn write_block(&mut self, block: &str) {
        for line in block.lines() {
            self.write_line(line);
        }
    }

    pub fn open(&mut self, header: &str) {
        self.write_line(&format!("{header} {{"));
        self.level += 1;
    }

    pub fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.write_line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl ReconciledTree<'_> {
    /// The declaration file for every symbol of the tree.
    pub fn emit_declarations(&self) -> Result<String, EmitError> {
        let config = self.config();
        let emitter = DeclarationEmitter::new(config);
        let mut writer = DeclarationWriter::new(&config.output.indentation);

        let mut groups: BTreeMap<Option<&str>, Vec<&SymbolNode>> = BTreeMap::new();
        for (name, node) in &self.tree.symbols {
            let key = match node {
                // A namespace's own members live inside its own block.
                SymbolNode::Namespace(_) => Some(name.as_str()),
                _ => parent_name(name),
            };
            groups.entry(key).or_default().push(node);
        }

        let mut first = true;
        for (namespace, nodes) in groups {
            if !first {
                writer.write_line("");
            }
            first = false;

            match namespace {
                Some(namespace) => {
                    writer.open(&format!("declare namespace {namespace}"));
                    self.print_members(&mut writer, &emitter, &nodes, false)?;
                    writer.close();
                }
                None => self.print_members(&mut writer, &emitter, &nodes, true)?,
            }
        }

        Ok(writer.finish())
    }

    /// `declare module` blocks re-exporting every symbol that names a module path.
    pub fn emit_exports(&self) -> String {
        let config = self.config();
        let mut writer = DeclarationWriter::new(&config.output.indentation);

        for node in self.symbols() {
            let (full_name, module) = match node {
                SymbolNode::Class(id) => {
                    let class = self.registry().get(*id);
                    (&class.full_name, &class.module)
                }
                SymbolNode::Interface(container) => (&container.full_name, &container.module),
                SymbolNode::Enum(node) => (&node.full_name, &node.module),
                SymbolNode::Namespace(_) | SymbolNode::Typedef(_) => continue,
            };
            let Some(module) = module else {
                continue;
            };

            writer.open(&format!("declare module \"{module}\""));
            writer.write_line(&format!("export default {full_name};"));
            writer.close();
            writer.write_line("");
        }

        writer.finish()
    }

    fn print_members(
        &self,
        writer: &mut DeclarationWriter,
        emitter: &DeclarationEmitter<'_>,
        nodes: &[&SymbolNode],
        top_level: bool,
    ) -> Result<(), EmitError> {
        let declare = if top_level { "declare " } else { "" };
        let mut first = true;
        let mut separate = |writer: &mut DeclarationWriter| {
            if !first {
                writer.write_line("");
            }
            first = false;
        };

        for node in nodes {
            match node {
                SymbolNode::Namespace(ns) => {
                    for property in &ns.properties {
                        separate(writer);
                        print_property(writer, property, Kind::Namespace);
                    }
                    for method in &ns.methods {
                        print_method(writer, emitter, method, &mut separate)?;
                    }
                }
                SymbolNode::Class(id) => {
                    separate(writer);
                    print_class(writer, emitter, self.registry().get(*id), declare)?;
                }
                SymbolNode::Interface(interface) => {
                    separate(writer);
                    print_interface(writer, emitter, interface, declare)?;
                }
                SymbolNode::Enum(node) => {
                    separate(writer);
                    print_enum(writer, emitter, node, declare)?;
                }
                SymbolNode::Typedef(typedef) => {
                    tracing::trace!(typedef = %typedef.full_name, "typedef has no declaration output");
                }
            }
        }
        Ok(())
    }
}

fn print_method(
    writer: &mut DeclarationWriter,
    emitter: &DeclarationEmitter<'_>,
    method: &MethodNode,
    separate: &mut impl FnMut(&mut DeclarationWriter),
) -> Result<(), EmitError> {
    for block in emitter.emit_method(method)? {
        separate(writer);
        writer.write_block(&block);
    }
    Ok(())
}

fn print_property(writer: &mut DeclarationWriter, property: &PropertyNode, parent_kind: Kind) {
    writer.write_block(&doc_comment(&property.description, &[]));
    let line = match parent_kind {
        Kind::Namespace => format!("var {}: {};", property.name, property.type_name),
        Kind::Class => {
            let static_modifier = if property.is_static { "static " } else { "" };
            format!(
                "{} {}{}: {};",
                property.visibility.keyword(),
                static_modifier,
                property.name,
                property.type_name
            )
        }
        _ => format!("{}: {};", property.name, property.type_name),
    };
    writer.write_line(&line);
}

fn print_class(
    writer: &mut DeclarationWriter,
    emitter: &DeclarationEmitter<'_>,
    class: &ClassNode,
    declare: &str,
) -> Result<(), EmitError> {
    let extends = class
        .base_class
        .as_ref()
        .map(|base| format!(" extends {base}"))
        .unwrap_or_default();

    writer.write_block(&doc_comment(&class.description, &[]));
    writer.open(&format!("{declare}class {}{extends}", class.name));

    let mut first = true;
    let mut separate = |writer: &mut DeclarationWriter| {
        if !first {
            writer.write_line("");
        }
        first = false;
    };

    if let Some(constructor) = &class.constructor {
        print_method(writer, emitter, constructor, &mut separate)?;
    }
    for property in &class.properties {
        separate(writer);
        print_property(writer, property, Kind::Class);
    }
    for method in &class.methods {
        print_method(writer, emitter, method, &mut separate)?;
    }

    writer.close();
    Ok(())
}

fn print_interface(
    writer: &mut DeclarationWriter,
    emitter: &DeclarationEmitter<'_>,
    interface: &ContainerNode,
    declare: &str,
) -> Result<(), EmitError> {
    let extends = interface
        .extends
        .as_ref()
        .map(|base| format!(" extends {base}"))
        .unwrap_or_default();

    writer.write_block(&doc_comment(&interface.description, &[]));
    writer.open(&format!("{declare}interface {}{extends}", interface.name));

    let mut first = true;
    let mut separate = |writer: &mut DeclarationWriter| {
        if !first {
            writer.write_line("");
        }
        first = false;
    };

    for property in &interface.properties {
        separate(writer);
        print_property(writer, property, Kind::Interface);
    }
    for method in &interface.methods {
        print_method(writer, emitter, method, &mut separate)?;
    }

    writer.close();
    Ok(())
}

fn print_enum(
    writer: &mut DeclarationWriter,
    emitter: &DeclarationEmitter<'_>,
    node: &EnumNode,
    declare: &str,
) -> Result<(), EmitError> {
    // Reaches the emitter's kind check, which rejects methods on enums.
    for method in &node.methods {
        emitter.emit_method(method)?;
    }

    writer.write_block(&doc_comment(&node.description, &[]));
    writer.open(&format!("{declare}enum {}", node.name));
    for member in &node.members {
        writer.write_block(&doc_comment(&member.description, &[]));
        writer.write_line(&format!("{} = \"{}\",", member.name, member.name));
    }
    writer.close();
    Ok(())
}

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod tests;
