//! Top-level document generation.
//!
//! The generator recurses over the package tree and hands every classifier to
//! the matching emitter (see [`emit`](super::emit)). Output accumulates in a
//! [`CodeWriter`]; nothing reaches the destination until the whole document
//! has been produced.

use super::error::{Diagnostics, GenerateError, Warning};
use super::options::GenerateOptions;
use super::writer::CodeWriter;
use crate::model::{Element, ElementId, ElementKind, Model};
use std::path::Path;
use tracing::debug;

/// Text produced by one generation run, with the warnings it raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIdl {
    /// The IDL document.
    pub text: String,
    /// Non-fatal model-shape warnings, in generation order.
    pub warnings: Vec<Warning>,
}

/// Generates GraphQL IDL from a [`Model`].
///
/// Holds no state between calls: each call walks the model from scratch.
#[derive(Clone, Debug)]
pub struct IdlGenerator<'a> {
    model: &'a Model,
    options: GenerateOptions,
}

impl<'a> IdlGenerator<'a> {
    /// Create a generator over `model`.
    pub fn new(model: &'a Model, options: GenerateOptions) -> Self {
        Self { model, options }
    }

    /// Generate the declarations for `root` without the document header.
    ///
    /// Used for previews of a single element or package.
    pub fn generate_string(&self, root: &ElementId) -> Result<GeneratedIdl, GenerateError> {
        let element = self.resolve(root)?;
        if self.options.debug {
            debug!(root = %root, "generateString");
        }
        let mut ctx = GenerateContext::new(self.model, &self.options);
        ctx.dispatch(element);
        Ok(ctx.finish())
    }

    /// Generate a full document for `root`: project header, then declarations.
    pub fn generate_document(&self, root: &ElementId) -> Result<GeneratedIdl, GenerateError> {
        let element = self.resolve(root)?;
        if self.options.debug {
            debug!(root = %root, "generate");
        }
        let mut ctx = GenerateContext::new(self.model, &self.options);
        ctx.write_header();
        ctx.dispatch(element);
        Ok(ctx.finish())
    }

    /// Generate a full document for `root` and write it to `path`.
    ///
    /// The file is written in one piece once generation has completed.
    pub fn generate(
        &self,
        root: &ElementId,
        path: impl AsRef<Path>,
    ) -> Result<Vec<Warning>, GenerateError> {
        let path = path.as_ref();
        let generated = self.generate_document(root)?;
        if self.options.debug {
            debug!("Saving to {}", path.display());
        }
        std::fs::write(path, &generated.text).map_err(|e| GenerateError::write(path, e))?;
        Ok(generated.warnings)
    }

    fn resolve(&self, id: &ElementId) -> Result<&'a Element, GenerateError> {
        self.model
            .get(id)
            .ok_or_else(|| GenerateError::UnknownElement(id.clone()))
    }
}

/// Emission form of a class, selected by stereotype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassForm {
    /// `type Name [extends ...] [implements ...]`
    Type,
    /// `input Name`
    Input,
    /// `schema`
    Schema,
    /// `union Name = A | B`
    Union,
}

impl ClassForm {
    /// Form of a class; `union` wins over `input`, which wins over `schema`.
    pub fn of(class: &Element) -> Self {
        if class.has_stereotype("union") {
            Self::Union
        } else if class.has_stereotype("input") {
            Self::Input
        } else if class.has_stereotype("schema") {
            Self::Schema
        } else {
            Self::Type
        }
    }
}

/// Per-run generation state.
pub(crate) struct GenerateContext<'a> {
    pub(crate) model: &'a Model,
    pub(crate) options: &'a GenerateOptions,
    pub(crate) writer: CodeWriter,
    pub(crate) diagnostics: Diagnostics,
}

impl<'a> GenerateContext<'a> {
    pub(crate) fn new(model: &'a Model, options: &'a GenerateOptions) -> Self {
        Self {
            model,
            options,
            writer: CodeWriter::new(options.indent_unit()),
            diagnostics: Diagnostics::new(),
        }
    }

    pub(crate) fn finish(self) -> GeneratedIdl {
        GeneratedIdl {
            text: self.writer.finish(),
            warnings: self.diagnostics.into_warnings(),
        }
    }

    /// Project metadata block followed by one blank line.
    pub(crate) fn write_header(&mut self) {
        let meta = &self.model.metadata;
        let lines: Vec<String> = [
            ("name: ", &meta.name),
            ("version: ", &meta.version),
            ("author: ", &meta.author),
            ("copyright: ", &meta.copyright),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{label}{v}"))
        })
        .collect();
        self.write_doc(&lines.join("\n"));
        self.writer.write_blank_line();
    }

    /// Emit `element` and, for namespaces, everything it owns.
    pub(crate) fn dispatch(&mut self, element: &'a Element) {
        if self.options.debug {
            debug!(kind = %element.kind, name = element.name_str(), "generate");
        }
        match element.kind {
            ElementKind::Project | ElementKind::Package => {
                let model = self.model;
                for child in model.owned_members(&element.id) {
                    self.dispatch(child);
                }
            }
            ElementKind::Class => {
                if element.is_abstract {
                    return;
                }
                match ClassForm::of(element) {
                    ClassForm::Union => self.emit_union(element),
                    form => self.emit_class(element, form),
                }
                self.writer.write_blank_line();
            }
            ElementKind::PrimitiveType => {
                self.emit_scalar(element);
                self.writer.write_blank_line();
            }
            ElementKind::Interface => {
                self.emit_interface(element);
                self.writer.write_blank_line();
            }
            ElementKind::Enumeration => {
                self.emit_enum(element);
                self.writer.write_blank_line();
            }
            ElementKind::Attribute
            | ElementKind::Operation
            | ElementKind::Parameter
            | ElementKind::EnumerationLiteral
            | ElementKind::AssociationEnd
            | ElementKind::Association
            | ElementKind::Generalization
            | ElementKind::InterfaceRealization
            | ElementKind::Dependency
            | ElementKind::Tag
            | ElementKind::Constraint => {
                if self.options.debug {
                    debug!(kind = %element.kind, "nothing generated");
                }
            }
        }
    }
}
