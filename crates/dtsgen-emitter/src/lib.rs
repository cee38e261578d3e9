//! Declaration synthesis for dtsgen.
//!
//! Turns an API description into TypeScript declarations:
//! - Symbol tree and class registry (`tree`, `registry`)
//! - Override reconciliation across inheritance chains (`reconcile`, `compat`)
//! - Overload planning for optional-before-required parameters (`overloads`)
//! - Per-method declaration blocks and file collation (`declaration_emitter`, `printer`)

pub mod class;
pub mod compat;
mod declaration_emitter;
pub mod error;
pub mod method;
pub mod overloads;
pub mod parameter;
pub mod printer;
pub mod reconcile;
pub mod registry;
pub mod tree;
pub mod type_mapper;

pub use class::{ClassNode, PropertyNode};
pub use compat::is_return_type_compatible;
pub use error::{BuildError, EmitError};
pub use method::{MethodNode, ReturnValue};
pub use overloads::plan_overloads;
pub use parameter::ParameterNode;
pub use printer::DeclarationWriter;
pub use reconcile::OverrideReconciler;
pub use registry::{ClassId, ClassRegistry};
pub use tree::{ApiTree, ReconciledTree, SymbolNode};
pub use type_mapper::TypeMapper;
