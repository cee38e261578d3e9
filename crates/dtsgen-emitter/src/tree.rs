//! Symbol Tree
//!
//! Generation happens in fixed phases:
//!
//! 1. `ApiTree::build` walks the symbols once, creating every node and
//!    registering classes in the `ClassRegistry`.
//! 2. `ApiTree::reconcile` consumes the tree, runs the override reconciliation
//!    exactly once and hands back a `ReconciledTree`.
//! 3. Only a `ReconciledTree` can be printed, and printing never mutates it.

use crate::class::{ClassNode, PropertyNode};
use crate::error::BuildError;
use crate::method::MethodNode;
use crate::reconcile::OverrideReconciler;
use crate::registry::{ClassId, ClassRegistry};
use crate::type_mapper::TypeMapper;
use dtsgen_common::{ApiDocument, GeneratorConfig, Kind, Symbol};

/// Namespace or interface: a container of methods and properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub module: Option<String>,
    pub extends: Option<String>,
    pub methods: Vec<MethodNode>,
    pub properties: Vec<PropertyNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNode {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub module: Option<String>,
    pub members: Vec<EnumMember>,
    /// Methods declared on an enum symbol. The emitter rejects them.
    pub methods: Vec<MethodNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedefNode {
    pub name: String,
    pub full_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolNode {
    Namespace(ContainerNode),
    Class(ClassId),
    Interface(ContainerNode),
    Enum(EnumNode),
    Typedef(TypedefNode),
}

impl SymbolNode {
    pub fn kind(&self) -> Kind {
        match self {
            SymbolNode::Namespace(_) => Kind::Namespace,
            SymbolNode::Class(_) => Kind::Class,
            SymbolNode::Interface(_) => Kind::Interface,
            SymbolNode::Enum(_) => Kind::Enum,
            SymbolNode::Typedef(_) => Kind::Typedef,
        }
    }
}

/// A freshly built tree. Its contents are not visible outside the crate until
/// `reconcile` has run:
///
/// ```compile_fail
/// use dtsgen_common::{ApiDocument, GeneratorConfig};
/// use dtsgen_emitter::ApiTree;
///
/// let config = GeneratorConfig::default();
/// let tree = ApiTree::build(&ApiDocument::default(), &config).unwrap();
/// let _ = tree.registry();
/// ```
#[derive(Debug)]
pub struct ApiTree<'c> {
    pub(crate) config: &'c GeneratorConfig,
    pub(crate) symbols: Vec<(String, SymbolNode)>,
    pub(crate) registry: ClassRegistry,
}

impl<'c> ApiTree<'c> {
    pub fn build(api: &ApiDocument, config: &'c GeneratorConfig) -> Result<Self, BuildError> {
        let mapper = TypeMapper::new(config);
        let mut registry = ClassRegistry::new();
        let mut symbols = Vec::with_capacity(api.symbols.len());

        for symbol in &api.symbols {
            if is_ignored(&symbol.name, &config.ignore) {
                tracing::debug!(symbol = %symbol.name, "symbol ignored by configuration");
                continue;
            }

            let node = match symbol.kind {
                Kind::Class => {
                    let class = ClassNode::from_symbol(symbol, &mapper, config);
                    SymbolNode::Class(registry.insert(class)?)
                }
                Kind::Namespace => {
                    SymbolNode::Namespace(container(symbol, Kind::Namespace, &mapper, config))
                }
                Kind::Interface => {
                    SymbolNode::Interface(container(symbol, Kind::Interface, &mapper, config))
                }
                Kind::Enum => SymbolNode::Enum(EnumNode {
                    name: symbol.basename().to_string(),
                    full_name: symbol.name.clone(),
                    description: symbol.description.clone().unwrap_or_default(),
                    module: symbol.module.clone(),
                    members: symbol
                        .properties
                        .iter()
                        .map(|p| EnumMember {
                            name: p.name.clone(),
                            description: p.description.clone().unwrap_or_default(),
                        })
                        .collect(),
                    methods: symbol
                        .methods
                        .iter()
                        .map(|m| MethodNode::from_api(m, &symbol.name, Kind::Enum, &mapper, config))
                        .collect(),
                }),
                Kind::Typedef => SymbolNode::Typedef(TypedefNode {
                    name: symbol.basename().to_string(),
                    full_name: symbol.name.clone(),
                    description: symbol.description.clone().unwrap_or_default(),
                }),
            };
            symbols.push((symbol.name.clone(), node));
        }

        check_leaf_symbols(&symbols)?;

        tracing::debug!(
            library = %api.library,
            symbols = symbols.len(),
            classes = registry.len(),
            "symbol tree built"
        );

        Ok(ApiTree {
            config,
            symbols,
            registry,
        })
    }

    pub(crate) fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub(crate) fn symbols(&self) -> impl Iterator<Item = &SymbolNode> {
        self.symbols.iter().map(|(_, node)| node)
    }

    /// Align overriding methods with their ancestors; the only phase that
    /// mutates method return types and visibility.
    pub fn reconcile(mut self) -> ReconciledTree<'c> {
        OverrideReconciler::new(&mut self.registry, self.config).run();
        ReconciledTree { tree: self }
    }
}

/// A tree whose overrides have been reconciled. Read-only from here on, and
/// the only way to print declarations:
///
/// ```compile_fail
/// use dtsgen_emitter::declaration_emitter::DeclarationEmitter;
/// ```
#[derive(Debug)]
pub struct ReconciledTree<'c> {
    pub(crate) tree: ApiTree<'c>,
}

impl<'c> ReconciledTree<'c> {
    pub fn registry(&self) -> &ClassRegistry {
        &self.tree.registry
    }

    pub fn symbols(&self) -> impl Iterator<Item = &SymbolNode> {
        self.tree.symbols()
    }

    pub fn config(&self) -> &'c GeneratorConfig {
        self.tree.config
    }
}

fn container(
    symbol: &Symbol,
    kind: Kind,
    mapper: &TypeMapper<'_>,
    config: &GeneratorConfig,
) -> ContainerNode {
    ContainerNode {
        name: symbol.basename().to_string(),
        full_name: symbol.name.clone(),
        description: symbol.description.clone().unwrap_or_default(),
        module: symbol.module.clone(),
        extends: symbol.extends.clone(),
        methods: symbol
            .methods
            .iter()
            .map(|m| MethodNode::from_api(m, &symbol.name, kind, mapper, config))
            .collect(),
        properties: symbol
            .properties
            .iter()
            .map(|p| PropertyNode::from_api(p, &symbol.name, mapper))
            .collect(),
    }
}

fn is_ignored(name: &str, ignore: &[String]) -> bool {
    ignore.iter().any(|entry| {
        name == entry
            || name
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Enums and typedefs cannot own nested symbols.
fn check_leaf_symbols(symbols: &[(String, SymbolNode)]) -> Result<(), BuildError> {
    for (name, node) in symbols {
        let kind = node.kind();
        if !matches!(kind, Kind::Enum | Kind::Typedef) {
            continue;
        }
        let prefix = format!("{name}.");
        if let Some((child, _)) = symbols.iter().find(|(other, _)| other.starts_with(&prefix)) {
            return Err(BuildError::ChildrenNotAllowed {
                kind,
                name: name.clone(),
                child: child.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
