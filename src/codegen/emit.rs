//! Per-kind declaration emitters.

use super::error::WarningKind;
use super::flatten::{FieldTable, Flattener, directives, resolve_type};
use super::generator::{ClassForm, GenerateContext};
use crate::model::{Element, ElementId};
use rustc_hash::FxHashSet;

pub(crate) const MULTIPLE_INHERITANCE: &str =
    "WARNING: you can only extend one class, ignoring others";
pub(crate) const UNION_INHERITANCE: &str =
    "WARNING: Inheritance on union types is not GraphQL compliant, ignoring";
pub(crate) const UNION_IMPLEMENTS: &str =
    "WARNING: Implementing interfaces of union types is not GraphQL compliant, ignoring";
pub(crate) const UNION_OPERATIONS: &str =
    "WARNING: Operations on union types is not GraphQL compliant, ignoring.";
pub(crate) const UNION_ATTRIBUTES: &str =
    "WARNING: Attributes on union types is not GraphQL compliant, ignoring.";

const DOC_FENCE: &str = "\"\"\"";

fn join_names(elements: &[&Element], separator: &str) -> String {
    elements
        .iter()
        .map(|e| e.name_str())
        .collect::<Vec<_>>()
        .join(separator)
}

impl<'a> GenerateContext<'a> {
    /// Write a `"""` documentation block when docs are enabled.
    ///
    /// Blank lines are dropped; other lines are written as given.
    pub(crate) fn write_doc(&mut self, text: &str) {
        if !self.options.idl_doc {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.writer.write_line(DOC_FENCE);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.writer.write_line(line);
        }
        self.writer.write_line(DOC_FENCE);
    }

    fn write_element_doc(&mut self, element: &Element) {
        if let Some(doc) = element.documentation.as_deref() {
            self.write_doc(doc);
        }
    }

    /// Record a warning, rendering it inline as documentation when its kind
    /// is shown in the output.
    fn warn_inline(&mut self, kind: WarningKind, element: &ElementId, message: &str) {
        self.diagnostics.push(kind, element, message);
        if kind.is_rendered() {
            self.write_doc(message);
        }
    }

    pub(crate) fn emit_scalar(&mut self, element: &Element) {
        self.write_element_doc(element);
        self.writer.write_line(&format!("scalar {}", element.name_str()));
    }

    pub(crate) fn emit_enum(&mut self, element: &Element) {
        self.write_element_doc(element);
        self.writer.write_line(&format!("enum {} {{", element.name_str()));
        self.writer.indent();

        let model = self.model;
        for literal in model.literals(&element.id) {
            if let Some(doc) = literal.documentation.as_deref() {
                for line in doc.lines().filter(|l| !l.trim().is_empty()) {
                    self.writer.write_line(&format!("#{line}"));
                }
            }
            self.writer.write_line(literal.name_str());
        }

        self.writer.outdent();
        self.writer.write_line("}");
    }

    pub(crate) fn emit_interface(&mut self, element: &Element) {
        self.write_element_doc(element);

        let mut header = format!("interface {}", element.name_str());
        let parents = self.model.super_classes(&element.id);
        if !parents.is_empty() {
            header.push_str(" extends ");
            header.push_str(&join_names(&parents, ", "));
        }
        self.writer.write_line(&format!("{header} {{"));
        self.writer.write_blank_line();
        self.writer.indent();

        let table = Flattener::new(self.model, &mut self.diagnostics)
            .with_debug(self.options.debug)
            .flatten_interface(element);
        self.write_fields(&table);
        self.write_operations(element);

        self.writer.outdent();
        self.writer.write_line("}");
    }

    pub(crate) fn emit_class(&mut self, element: &Element, form: ClassForm) {
        self.write_element_doc(element);

        let extends = self.extends_target(element);
        let interfaces = self.model.super_interfaces(&element.id);
        let header = match form {
            ClassForm::Input => format!("input {}", element.name_str()),
            ClassForm::Schema => "schema".to_string(),
            ClassForm::Type | ClassForm::Union => {
                let mut header = format!("type {}", element.name_str());
                match extends {
                    Some(parent) => {
                        header.push_str(" extends ");
                        header.push_str(parent.name_str());
                        if !interfaces.is_empty() {
                            header.push_str(", ");
                            header.push_str(&join_names(&interfaces, ", "));
                        }
                    }
                    None if !interfaces.is_empty() => {
                        header.push_str(" implements ");
                        header.push_str(&join_names(&interfaces, ", "));
                    }
                    None => {}
                }
                header
            }
        };
        self.writer.write_line(&format!("{header} {{"));
        self.writer.write_blank_line();
        self.writer.indent();

        let table = Flattener::new(self.model, &mut self.diagnostics)
            .with_debug(self.options.debug)
            .flatten_class(element);
        self.write_fields(&table);
        self.write_operations(element);

        self.writer.outdent();
        self.writer.write_line("}");
    }

    /// First non-abstract ancestor along first generalizations.
    ///
    /// Abstract ancestors are skipped. Warns at every step with more than
    /// one generalization.
    pub(crate) fn extends_target(&mut self, class: &Element) -> Option<&'a Element> {
        let model = self.model;
        let mut visited = FxHashSet::default();
        visited.insert(class.id.clone());
        let mut current_id = class.id.clone();
        loop {
            let parents = model.super_classes(&current_id);
            let first = *parents.first()?;
            if parents.len() > 1 {
                self.warn_inline(
                    WarningKind::MultipleInheritance,
                    &current_id,
                    MULTIPLE_INHERITANCE,
                );
            }
            // A parent already on the walk, the class itself included, is a cycle.
            if !visited.insert(first.id.clone()) {
                self.diagnostics.push(
                    WarningKind::InheritanceCycle,
                    &first.id,
                    format!("inheritance cycle through {}", first.name_str()),
                );
                return None;
            }
            if !first.is_abstract {
                return Some(first);
            }
            current_id = first.id.clone();
        }
    }

    pub(crate) fn emit_union(&mut self, element: &Element) {
        let model = self.model;
        let id = &element.id;

        if !model.super_classes(id).is_empty() {
            self.warn_inline(WarningKind::UnionInheritance, id, UNION_INHERITANCE);
        }
        if !model.super_interfaces(id).is_empty() {
            self.warn_inline(WarningKind::UnionImplements, id, UNION_IMPLEMENTS);
        }
        if !model.operations(id).is_empty() {
            self.warn_inline(WarningKind::UnionOperations, id, UNION_OPERATIONS);
        }
        if !model.attributes(id).is_empty() {
            self.warn_inline(WarningKind::UnionAttributes, id, UNION_ATTRIBUTES);
        }

        let members = model.dependency_targets(id);
        if self.options.debug {
            tracing::debug!(
                union = element.name_str(),
                count = members.len(),
                "dependencies length"
            );
        }
        if members.is_empty() {
            return;
        }
        self.write_element_doc(element);
        self.writer.write_line(&format!(
            "union {} = {}",
            element.name_str(),
            join_names(&members, " | ")
        ));
    }

    fn write_fields(&mut self, table: &FieldTable) {
        for field in table.iter() {
            if let Some(doc) = field.documentation.as_deref() {
                self.write_doc(doc);
            }
            self.writer.write_line(&field.render());
        }
    }

    fn write_operations(&mut self, owner: &Element) {
        let model = self.model;
        for operation in model.operations(&owner.id) {
            if self.emit_operation(operation) {
                self.writer.write_blank_line();
            }
        }
    }

    /// Emit one operation line; unnamed operations are skipped.
    pub(crate) fn emit_operation(&mut self, operation: &Element) -> bool {
        let name = operation.name_str();
        if name.is_empty() {
            return false;
        }
        let model = self.model;
        let params = model.non_return_parameters(&operation.id);
        let ret = model.return_parameter(&operation.id);

        let mut doc = operation
            .documentation
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string();
        for param in &params {
            if let Some(param_doc) = param.documentation.as_deref().filter(|d| !d.is_empty()) {
                doc.push_str(&format!("\nparam: {} {}", param.name_str(), param_doc));
            }
        }
        if let Some(ret_doc) = ret
            .and_then(|r| r.documentation.as_deref())
            .filter(|d| !d.is_empty())
        {
            doc.push_str(&format!("\nreturn: {ret_doc}"));
        }
        self.write_doc(&doc);

        let params: Vec<String> = params
            .iter()
            .map(|param| {
                let mut term = format!(
                    "{}: {}",
                    param.name_str(),
                    resolve_type(model, &mut self.diagnostics, param)
                );
                if let Some(default) = param.default_value.as_deref().filter(|v| !v.is_empty()) {
                    term.push('=');
                    term.push_str(default);
                }
                term
            })
            .collect();

        let mut line = format!("{}({})", name, params.join(", "));
        if let Some(ret) = ret {
            line.push_str(": ");
            line.push_str(&resolve_type(model, &mut self.diagnostics, ret));
        }
        for directive in directives(model, operation) {
            line.push(' ');
            line.push_str(&directive);
        }
        self.writer.write_line(&line);
        true
    }
}
