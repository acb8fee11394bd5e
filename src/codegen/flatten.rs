//! Attribute flattening.
//!
//! Builds the field table of a class or interface by folding in, in order:
//!
//! ```text
//! implemented interfaces (classes only, realization order)
//!   └── ancestors, root-most first
//!         └── own attributes
//!               └── navigable association ends
//! ```
//!
//! Later writes for the same field name replace the earlier text and
//! documentation but keep the position of the field's first write.

use super::error::{Diagnostics, WarningKind};
use super::inflector::inflect;
use super::types::{multiplicity_token, type_of};
use crate::model::{Element, ElementId, ElementKind, Model};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A rendered field of a type, input or interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// GraphQL type expression.
    pub type_expr: String,
    /// Default value, rendered after `=`.
    pub default_value: Option<String>,
    /// Rendered directives (`@name(value)`), in declaration order.
    pub directives: Vec<String>,
    /// Documentation of the source attribute or association end.
    pub documentation: Option<Arc<str>>,
}

impl Field {
    /// Render the field line, e.g. `orders: [Order]=[] @deprecated(true)`.
    pub fn render(&self) -> String {
        let mut line = format!("{}: {}", self.name, self.type_expr);
        if let Some(default) = &self.default_value {
            line.push('=');
            line.push_str(default);
        }
        for directive in &self.directives {
            line.push(' ');
            line.push_str(directive);
        }
        line
    }
}

/// Ordered, deduplicated field table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: IndexMap<String, Field>,
}

impl FieldTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any field of the same name in place.
    pub fn insert(&mut self, field: Field) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Field names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Render the directives of a field or operation.
///
/// Tags become visual directives (`@tag(value)`), owned constraints
/// non-visual ones (`@constraint(specification)`); tags come first.
pub fn directives(model: &Model, element: &Element) -> Vec<String> {
    let tags = model.tags(&element.id).into_iter().map(|tag| {
        format!(
            "@{}({})",
            tag.name_str(),
            tag.value.as_deref().unwrap_or("")
        )
    });
    let constraints = model.constraints(&element.id).into_iter().map(|c| {
        format!(
            "@{}({})",
            c.name_str(),
            c.specification.as_deref().unwrap_or("")
        )
    });
    tags.chain(constraints).collect()
}

/// Type expression of an element, recording unmapped multiplicities.
pub fn resolve_type(model: &Model, diagnostics: &mut Diagnostics, element: &Element) -> String {
    let ty = type_of(model, element);
    if let Some(token) = ty.unknown_multiplicity {
        diagnostics.push(
            WarningKind::UnknownMultiplicity,
            &element.id,
            format!(
                "unknown cardinality '{}' on {}, using {}",
                token,
                element.name_str(),
                ty.rendered
            ),
        );
    }
    ty.rendered
}

/// Name of the field produced by an attribute or association end.
///
/// An unnamed association end borrows its association's name; when that is
/// empty too, the name is inferred from the referenced type, singular for
/// `0`, `1`, `0..1` or a missing or blank multiplicity, plural otherwise,
/// with the first letter lowercased.
pub fn field_name(model: &Model, element: &Element) -> Option<String> {
    let name = element.name_str();
    if !name.is_empty() {
        return Some(name.to_string());
    }
    if element.kind != ElementKind::AssociationEnd {
        return None;
    }

    let association_name = element
        .owner
        .as_ref()
        .and_then(|id| model.get(id))
        .map(|assoc| assoc.name_str())
        .unwrap_or("");
    if !association_name.is_empty() {
        return Some(association_name.to_string());
    }

    let referenced = element
        .reference
        .as_ref()
        .and_then(|id| model.get(id))
        .map(|target| target.name_str())
        .filter(|n| !n.is_empty())?;
    let singular = match multiplicity_token(element) {
        None | Some("0") | Some("1") | Some("0..1") => true,
        Some(_) => false,
    };
    Some(lowercase_first(&inflect(referenced, singular)))
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Walks generalization and association edges to build field tables.
pub struct Flattener<'a, 'd> {
    model: &'a Model,
    diagnostics: &'d mut Diagnostics,
    debug: bool,
}

impl<'a, 'd> Flattener<'a, 'd> {
    /// Create a flattener over `model`, recording warnings in `diagnostics`.
    pub fn new(model: &'a Model, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            model,
            diagnostics,
            debug: false,
        }
    }

    /// Trace association walks at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Field table of a class: fields of every implemented interface, then
    /// the class's single-inheritance chain.
    pub fn flatten_class(&mut self, class: &Element) -> FieldTable {
        let model = self.model;
        let mut table = FieldTable::new();
        for interface in model.super_interfaces(&class.id) {
            let mut path = FxHashSet::default();
            self.interface_fields(&mut table, interface, &mut path);
        }
        let mut path = FxHashSet::default();
        self.class_fields(&mut table, class, &mut path);
        table
    }

    /// Field table of an interface and everything it extends.
    pub fn flatten_interface(&mut self, interface: &Element) -> FieldTable {
        let mut table = FieldTable::new();
        let mut path = FxHashSet::default();
        self.interface_fields(&mut table, interface, &mut path);
        table
    }

    fn class_fields(
        &mut self,
        table: &mut FieldTable,
        class: &Element,
        path: &mut FxHashSet<ElementId>,
    ) {
        if !self.enter(class, path) {
            return;
        }
        let model = self.model;
        // Only the first generalization takes part in class flattening.
        if let Some(parent) = model.super_classes(&class.id).first() {
            self.class_fields(table, parent, path);
        }
        self.own_fields(table, class);
        path.remove(&class.id);
    }

    fn interface_fields(
        &mut self,
        table: &mut FieldTable,
        interface: &Element,
        path: &mut FxHashSet<ElementId>,
    ) {
        if !self.enter(interface, path) {
            return;
        }
        let model = self.model;
        for parent in model.super_classes(&interface.id) {
            self.interface_fields(table, parent, path);
        }
        self.own_fields(table, interface);
        path.remove(&interface.id);
    }

    /// Mark `element` as being on the current inheritance path.
    fn enter(&mut self, element: &Element, path: &mut FxHashSet<ElementId>) -> bool {
        if path.insert(element.id.clone()) {
            return true;
        }
        self.diagnostics.push(
            WarningKind::InheritanceCycle,
            &element.id,
            format!("inheritance cycle through {}", element.name_str()),
        );
        false
    }

    fn own_fields(&mut self, table: &mut FieldTable, element: &Element) {
        let model = self.model;
        for attribute in model.attributes(&element.id) {
            if let Some(field) = self.field_of(attribute) {
                table.insert(field);
            }
        }

        let associations = model.associations_of(&element.id);
        if self.debug {
            tracing::debug!(
                element = element.name_str(),
                count = associations.len(),
                "association length"
            );
        }
        for association in associations {
            let Some((end1, end2)) = model.association_ends(&association.id) else {
                continue;
            };
            if end2.reference.as_ref() == Some(&element.id) && end1.navigable {
                if let Some(field) = self.field_of(end1) {
                    table.insert(field);
                }
            }
            if end1.reference.as_ref() == Some(&element.id) && end2.navigable {
                if let Some(field) = self.field_of(end2) {
                    table.insert(field);
                }
            }
        }
    }

    /// Field rendered for an attribute or association end, if it has a name.
    pub fn field_of(&mut self, element: &Element) -> Option<Field> {
        let name = field_name(self.model, element)?;
        let type_expr = resolve_type(self.model, self.diagnostics, element);
        let default_value = element
            .default_value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        Some(Field {
            name,
            type_expr,
            default_value,
            directives: directives(self.model, element),
            documentation: element.documentation.clone(),
        })
    }
}
