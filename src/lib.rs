//! dtsgen: TypeScript declaration generator for library API descriptions.
//!
//! The generator reads a library's `api.json`, builds a symbol tree, reconciles
//! overriding methods across the class hierarchy and prints `.d.ts`
//! declarations. The heavy lifting lives in the workspace crates:
//! - `dtsgen-common`: API model and configuration values
//! - `dtsgen-emitter`: overload planning, override reconciliation, printing
//!
//! This crate adds the command-line surface: configuration loading, fetching
//! API descriptions (remote or local cache), and writing the output files.

pub use dtsgen_common as common;
pub use dtsgen_emitter as emitter;

pub mod cli;
pub mod tracing_config;
