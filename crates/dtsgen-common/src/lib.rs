//! Common types for the dtsgen declaration generator.
//!
//! This crate provides the foundational types shared by the emitter and the CLI:
//! - The API description model (`ApiDocument`, `Symbol`, `Method`, `Parameter`, ...)
//! - Generator configuration values (`GeneratorConfig` and its sections)
//! - Well-known target type names (`void`, `any`, `this`)

// API description model, deserialized from the library's api.json
pub mod api;
pub use api::{
    ApiDocument, ClassConstructor, Kind, Method, Parameter, Property, ReturnValueInfo, Symbol,
    Visibility,
};

// Configuration values consumed by the generator (no file access here)
pub mod config;
pub use config::{
    GeneratorConfig, InputOptions, LocalOptions, OutputOptions, Replacements,
    SpecificReplacements,
};

// Well-known type names of the target type system
pub mod types;
