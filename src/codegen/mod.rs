//! GraphQL IDL generation.
//!
//! Compiles a [`Model`] into GraphQL Interface Definition Language text.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 IdlGenerator (generator)                  │
//! │  - recurses over Project/Package owned elements          │
//! │  - dispatches classifiers to emitters                    │
//! └──────────────┬───────────────────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Emitters (emit)                        │
//! │  type / input / schema / union / interface / enum / scalar│
//! └──────┬──────────────────┬─────────────────────┬──────────┘
//!        │                  │                     │
//!        ▼                  ▼                     ▼
//! ┌─────────────┐   ┌───────────────┐     ┌──────────────┐
//! │  Flattener  │   │ type_of       │     │  Inflector   │
//! │  (flatten)  │   │ (types)       │     │ (inflector)  │
//! └─────────────┘   └───────────────┘     └──────────────┘
//! ```
//!
//! Output lines accumulate in an indent-aware [`CodeWriter`]. Model-shape
//! problems are recovered locally and reported as [`Warning`]s; only a
//! failure to write the destination aborts a run.
//!
//! ## Usage
//!
//! ```ignore
//! use umlgql::codegen::{GenerateOptions, generate, generate_string};
//!
//! let preview = generate_string(&model, &class_id, &GenerateOptions::default())?;
//! println!("{}", preview.text);
//!
//! let warnings = generate(&model, &project_id, "schema_Shop.gql", &GenerateOptions::default())?;
//! ```

mod emit;
mod error;
mod flatten;
mod generator;
pub mod inflector;
mod options;
pub mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{Diagnostics, GenerateError, Warning, WarningKind};
pub use flatten::{Field, FieldTable, Flattener, directives, field_name};
pub use generator::{ClassForm, GeneratedIdl, IdlGenerator};
pub use inflector::{pluralize, singularize};
pub use options::GenerateOptions;
pub use types::{Cardinality, TypeExpr, type_of};
pub use writer::CodeWriter;

use crate::model::{Element, ElementId, Model};
use std::path::Path;

/// Generate the full document for `root` and write it to `path`.
///
/// Returns the warnings raised along the way.
pub fn generate(
    model: &Model,
    root: &ElementId,
    path: impl AsRef<Path>,
    options: &GenerateOptions,
) -> Result<Vec<Warning>, GenerateError> {
    IdlGenerator::new(model, options.clone()).generate(root, path)
}

/// Generate the declarations for `element` as text, without the header.
pub fn generate_string(
    model: &Model,
    element: &ElementId,
    options: &GenerateOptions,
) -> Result<GeneratedIdl, GenerateError> {
    IdlGenerator::new(model, options.clone()).generate_string(element)
}

/// Default file name offered for a generated document.
pub fn default_file_name(element: &Element) -> String {
    format!("schema_{}.gql", element.name_str())
}

/// Supported file extensions for generated documents.
pub fn supported_extensions() -> &'static [&'static str] {
    &["gql", "graphql"]
}
