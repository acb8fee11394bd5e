//! Error and warning types for IDL generation.

use crate::model::ElementId;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Model-shape problems never surface here; they are recovered locally and
/// reported as [`Warning`]s.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested root element does not exist in the model.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// The destination file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Create a write error for the given destination.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Category of a non-fatal model-shape warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A class has more than one generalization; only the first is used.
    MultipleInheritance,
    /// A union has generalizations.
    UnionInheritance,
    /// A union realizes interfaces.
    UnionImplements,
    /// A union declares operations.
    UnionOperations,
    /// A union declares attributes.
    UnionAttributes,
    /// A multiplicity token outside the cardinality table.
    UnknownMultiplicity,
    /// A generalization chain loops back on itself.
    InheritanceCycle,
}

impl WarningKind {
    /// Whether the warning is also rendered as a documentation block.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, Self::UnknownMultiplicity | Self::InheritanceCycle)
    }
}

/// A non-fatal model-shape warning collected during generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// What went wrong.
    pub kind: WarningKind,
    /// The element the warning is about.
    pub element: ElementId,
    /// Human-readable message.
    pub message: Arc<str>,
}

impl Warning {
    /// Create a new warning.
    pub fn new(kind: WarningKind, element: ElementId, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            element,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.element)
    }
}

/// Collector for warnings raised while generating one document.
///
/// Every warning is logged through `tracing` as it is recorded; exact
/// duplicates are collected once.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn push(&mut self, kind: WarningKind, element: &ElementId, message: impl Into<Arc<str>>) {
        let warning = Warning::new(kind, element.clone(), message);
        tracing::warn!(kind = ?warning.kind, element = %warning.element, "{}", warning.message);
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Consume the collector.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
