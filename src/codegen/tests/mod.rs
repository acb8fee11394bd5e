#![allow(clippy::unwrap_used, clippy::expect_used)]

mod tests_emit;

use super::{GenerateOptions, GeneratedIdl, generate_string};
use crate::model::{Element, ElementId, ElementKind, Model, ParameterDirection};

/// Small builder for test models; every helper returns the new element's id.
pub(super) struct Fixture {
    pub model: Model,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            model: Model::new(),
        }
    }

    pub fn package(&mut self, owner: &str, id: &str, name: &str) -> ElementId {
        self.model.add_element(
            Element::new(id, ElementKind::Package)
                .with_name(name)
                .with_owner(owner),
        )
    }

    pub fn class(&mut self, id: &str, name: &str) -> ElementId {
        self.model
            .add_element(Element::new(id, ElementKind::Class).with_name(name))
    }

    pub fn abstract_class(&mut self, id: &str, name: &str) -> ElementId {
        self.model.add_element(
            Element::new(id, ElementKind::Class)
                .with_name(name)
                .with_abstract(true),
        )
    }

    pub fn stereotyped(&mut self, id: &str, name: &str, stereotype: &str) -> ElementId {
        self.model.add_element(
            Element::new(id, ElementKind::Class)
                .with_name(name)
                .with_stereotype(stereotype),
        )
    }

    pub fn interface(&mut self, id: &str, name: &str) -> ElementId {
        self.model
            .add_element(Element::new(id, ElementKind::Interface).with_name(name))
    }

    pub fn attr(&mut self, owner: &str, id: &str, name: &str, ty: &str, mult: Option<&str>) {
        let mut attr = Element::new(id, ElementKind::Attribute)
            .with_name(name)
            .with_type_name(ty)
            .with_owner(owner);
        if let Some(mult) = mult {
            attr = attr.with_multiplicity(mult);
        }
        self.model.add_element(attr);
    }

    pub fn generalize(&mut self, id: &str, child: &str, parent: &str) {
        self.model
            .add_rel(id, ElementKind::Generalization, child, parent);
    }

    pub fn realize(&mut self, id: &str, class: &str, interface: &str) {
        self.model
            .add_rel(id, ElementKind::InterfaceRealization, class, interface);
    }

    pub fn depend(&mut self, id: &str, client: &str, supplier: &str) {
        self.model.add_rel(id, ElementKind::Dependency, client, supplier);
    }

    /// Association whose `end1` (towards `target`) is navigable from `source`.
    pub fn navigable_to(
        &mut self,
        id: &str,
        source: &str,
        target: &str,
        end_name: Option<&str>,
        mult: Option<&str>,
    ) {
        let mut end1 = Element::new(format!("{id}-e1"), ElementKind::AssociationEnd)
            .with_reference(target)
            .with_navigable(true);
        if let Some(name) = end_name {
            end1 = end1.with_name(name);
        }
        if let Some(mult) = mult {
            end1 = end1.with_multiplicity(mult);
        }
        let end2 = Element::new(format!("{id}-e2"), ElementKind::AssociationEnd)
            .with_reference(source)
            .with_navigable(false);
        self.model.add_association(id, None, end1, end2);
    }

    pub fn operation(&mut self, owner: &str, id: &str, name: &str) -> ElementId {
        self.model.add_element(
            Element::new(id, ElementKind::Operation)
                .with_name(name)
                .with_owner(owner),
        )
    }

    pub fn param(&mut self, op: &str, id: &str, name: &str, ty: &str, mult: Option<&str>) {
        let mut param = Element::new(id, ElementKind::Parameter)
            .with_name(name)
            .with_type_name(ty)
            .with_owner(op);
        if let Some(mult) = mult {
            param = param.with_multiplicity(mult);
        }
        self.model.add_element(param);
    }

    pub fn returns(&mut self, op: &str, id: &str, ty: &str) {
        self.model.add_element(
            Element::new(id, ElementKind::Parameter)
                .with_type_name(ty)
                .with_direction(ParameterDirection::Return)
                .with_owner(op),
        );
    }

    pub fn tag(&mut self, owner: &str, id: &str, name: &str, value: &str) {
        self.model.add_element(
            Element::new(id, ElementKind::Tag)
                .with_name(name)
                .with_value(value)
                .with_owner(owner),
        );
    }

    pub fn constraint(&mut self, owner: &str, id: &str, name: &str, spec: &str) {
        self.model.add_element(
            Element::new(id, ElementKind::Constraint)
                .with_name(name)
                .with_specification(spec)
                .with_owner(owner),
        );
    }

    pub fn element(&self, id: &str) -> &Element {
        self.model.get(&ElementId::new(id)).unwrap()
    }

    pub fn render_with(&self, id: &str, options: &GenerateOptions) -> GeneratedIdl {
        generate_string(&self.model, &ElementId::new(id), options).unwrap()
    }

    pub fn render(&self, id: &str) -> String {
        self.render_with(id, &GenerateOptions::default()).text
    }
}
