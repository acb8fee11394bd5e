//! # umlgql-base
//!
//! Core library for compiling UML-like structural models into GraphQL IDL.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codegen   → IDL generation (dispatch, emitters, flattening, inflection)
//!   ↓
//! model     → Read-only element store with relationship queries
//! ```

// ============================================================================
// MODULES (dependency order: model → codegen)
// ============================================================================

/// Structural model: elements, relationships, project metadata
pub mod model;

/// GraphQL IDL generation
pub mod codegen;

// Re-export commonly needed items
pub use codegen::{
    GenerateError, GenerateOptions, GeneratedIdl, IdlGenerator, Warning, WarningKind, generate,
    generate_string,
};
pub use model::{Element, ElementId, ElementKind, Model, ProjectMetadata, TypeRef};
