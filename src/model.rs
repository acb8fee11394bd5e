//! Read-only structural model consumed by the IDL generator.
//!
//! The `Model` stores elements by ID, with relationships (generalizations,
//! realizations, dependencies, associations) stored as elements of their
//! own. All queries walk the element map in insertion order, so repeated
//! generation over the same model is deterministic.
//!
//! ```text
//! Model
//! ├── elements: IndexMap<ElementId, Element>  (preserves insertion order)
//! └── metadata: ProjectMetadata
//! ```

use indexmap::IndexMap;
use std::sync::Arc;

// ============================================================================
// IDs
// ============================================================================

/// Unique identifier for a model element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub Arc<str>);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The metatype of a model element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    // Namespaces
    Project,
    Package,

    // Classifiers
    Class,
    Interface,
    Enumeration,
    PrimitiveType,

    // Features
    Attribute,
    Operation,
    Parameter,
    EnumerationLiteral,
    AssociationEnd,

    // Relationships
    Association,
    Generalization,
    InterfaceRealization,
    Dependency,

    // Annotations
    Tag,
    Constraint,
}

impl ElementKind {
    /// Human-readable metaclass name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Package => "Package",
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Enumeration => "Enumeration",
            Self::PrimitiveType => "PrimitiveType",
            Self::Attribute => "Attribute",
            Self::Operation => "Operation",
            Self::Parameter => "Parameter",
            Self::EnumerationLiteral => "EnumerationLiteral",
            Self::AssociationEnd => "AssociationEnd",
            Self::Association => "Association",
            Self::Generalization => "Generalization",
            Self::InterfaceRealization => "InterfaceRealization",
            Self::Dependency => "Dependency",
            Self::Tag => "Tag",
            Self::Constraint => "Constraint",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// The declared type of an attribute or parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    /// Reference to another model element (class, enum, scalar...).
    Element(ElementId),
    /// Free-text type name.
    Named(Arc<str>),
}

/// Direction of an operation parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParameterDirection {
    #[default]
    In,
    InOut,
    Out,
    /// The operation's return value.
    Return,
}

/// A single model element.
#[derive(Clone, Debug)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Metaclass of this element.
    pub kind: ElementKind,
    /// Declared name.
    pub name: Option<Arc<str>>,
    /// The owning element's ID (None for root elements).
    pub owner: Option<ElementId>,
    /// IDs of directly owned elements, in declaration order.
    pub owned_elements: Vec<ElementId>,
    /// Documentation text.
    pub documentation: Option<Arc<str>>,
    /// Free-text stereotype (`union`, `input`, `schema` are recognized).
    pub stereotype: Option<Arc<str>>,
    /// Whether this classifier is abstract.
    pub is_abstract: bool,
    /// Declared type of an attribute or parameter.
    pub type_ref: Option<TypeRef>,
    /// Multiplicity token (`1`, `0..1`, `*`, `1..*`, ...).
    pub multiplicity: Option<Arc<str>>,
    /// Default value of an attribute or parameter.
    pub default_value: Option<Arc<str>>,
    /// Value of a tag.
    pub value: Option<Arc<str>>,
    /// Body of a constraint.
    pub specification: Option<Arc<str>>,
    /// Whether an association end is navigable.
    pub navigable: bool,
    /// Element referenced by an association end.
    pub reference: Option<ElementId>,
    /// Direction of a parameter.
    pub direction: ParameterDirection,
    /// Relationship-specific data (source/target).
    /// Present when this element represents a directed relationship edge.
    pub relationship: Option<RelationshipData>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            owner: None,
            owned_elements: Vec::new(),
            documentation: None,
            stereotype: None,
            is_abstract: false,
            type_ref: None,
            multiplicity: None,
            default_value: None,
            value: None,
            specification: None,
            navigable: true,
            reference: None,
            direction: ParameterDirection::In,
            relationship: None,
        }
    }

    /// Create a new relationship element with the given source and target.
    pub fn new_relationship(
        id: impl Into<ElementId>,
        kind: ElementKind,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Self {
        Self {
            relationship: Some(RelationshipData::new(source, target)),
            ..Self::new(id, kind)
        }
    }

    /// Get the source element ID (for relationship elements).
    pub fn source(&self) -> Option<&ElementId> {
        self.relationship.as_ref().map(|rd| &rd.source)
    }

    /// Get the target element ID (for relationship elements).
    pub fn target(&self) -> Option<&ElementId> {
        self.relationship.as_ref().map(|rd| &rd.target)
    }

    /// The declared name, or `""` when absent.
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether the element carries the given stereotype.
    pub fn has_stereotype(&self, stereotype: &str) -> bool {
        self.stereotype.as_deref() == Some(stereotype)
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<ElementId>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the stereotype.
    pub fn with_stereotype(mut self, stereotype: impl Into<Arc<str>>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    /// Set isAbstract.
    pub fn with_abstract(mut self, value: bool) -> Self {
        self.is_abstract = value;
        self
    }

    /// Type this element by reference to another element.
    pub fn with_type(mut self, ty: impl Into<ElementId>) -> Self {
        self.type_ref = Some(TypeRef::Element(ty.into()));
        self
    }

    /// Type this element by a free-text type name.
    pub fn with_type_name(mut self, ty: impl Into<Arc<str>>) -> Self {
        self.type_ref = Some(TypeRef::Named(ty.into()));
        self
    }

    /// Set the multiplicity token.
    pub fn with_multiplicity(mut self, multiplicity: impl Into<Arc<str>>) -> Self {
        self.multiplicity = Some(multiplicity.into());
        self
    }

    /// Set the default value.
    pub fn with_default_value(mut self, value: impl Into<Arc<str>>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the tag value.
    pub fn with_value(mut self, value: impl Into<Arc<str>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the constraint specification.
    pub fn with_specification(mut self, spec: impl Into<Arc<str>>) -> Self {
        self.specification = Some(spec.into());
        self
    }

    /// Set navigability of an association end.
    pub fn with_navigable(mut self, navigable: bool) -> Self {
        self.navigable = navigable;
        self
    }

    /// Set the element referenced by an association end.
    pub fn with_reference(mut self, reference: impl Into<ElementId>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Set the parameter direction.
    pub fn with_direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = direction;
        self
    }
}

// ============================================================================
// RELATIONSHIP DATA (on Element)
// ============================================================================

/// Source/target of a directed relationship element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipData {
    /// Source element of the relationship (the specific / client side).
    pub source: ElementId,
    /// Target element of the relationship (the general / supplier side).
    pub target: ElementId,
}

impl RelationshipData {
    /// Create relationship data with a source and target.
    pub fn new(source: impl Into<ElementId>, target: impl Into<ElementId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// A complete structural model.
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// All elements by ID (IndexMap preserves insertion order for deterministic queries).
    pub elements: IndexMap<ElementId, Element>,
    /// Project-level metadata, rendered in the document header.
    pub metadata: ProjectMetadata,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the model.
    ///
    /// The element is appended to its owner's `owned_elements` when the owner
    /// is already present and does not list it yet.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id.clone();
        if let Some(owner) = element
            .owner
            .as_ref()
            .and_then(|owner_id| self.elements.get_mut(owner_id))
        {
            if !owner.owned_elements.contains(&id) {
                owner.owned_elements.push(id.clone());
            }
        }
        self.elements.insert(id.clone(), element);
        id
    }

    /// Add a directed relationship owned by its source element.
    pub fn add_rel(
        &mut self,
        id: impl Into<ElementId>,
        kind: ElementKind,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> ElementId {
        let source = source.into();
        let element =
            Element::new_relationship(id, kind, source.clone(), target).with_owner(source);
        self.add_element(element)
    }

    /// Add an association between two ends.
    ///
    /// The association is owned by `end1`'s referenced element; the ends are
    /// owned by the association, `end1` first.
    pub fn add_association(
        &mut self,
        id: impl Into<ElementId>,
        name: Option<&str>,
        end1: Element,
        end2: Element,
    ) -> ElementId {
        let id = id.into();
        let mut association = Element::new(id.clone(), ElementKind::Association);
        association.name = name.map(Arc::from);
        association.owner = end1.reference.clone();
        self.add_element(association);
        for mut end in [end1, end2] {
            end.kind = ElementKind::AssociationEnd;
            end.owner = Some(id.clone());
            self.add_element(end);
        }
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    // ── Ownership ────────────────────────────────────────────────────

    /// Directly owned elements, in declaration order.
    pub fn owned_members(&self, id: &ElementId) -> Vec<&Element> {
        match self.get(id) {
            Some(element) => element
                .owned_elements
                .iter()
                .filter_map(|child_id| self.get(child_id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Directly owned elements of one kind, in declaration order.
    pub fn owned_of_kind(&self, id: &ElementId, kind: ElementKind) -> Vec<&Element> {
        self.owned_members(id)
            .into_iter()
            .filter(|e| e.kind == kind)
            .collect()
    }

    /// Attributes of a class or interface.
    pub fn attributes(&self, id: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(id, ElementKind::Attribute)
    }

    /// Operations of a class or interface.
    pub fn operations(&self, id: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(id, ElementKind::Operation)
    }

    /// Literals of an enumeration.
    pub fn literals(&self, id: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(id, ElementKind::EnumerationLiteral)
    }

    /// Tags attached to an element.
    pub fn tags(&self, id: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(id, ElementKind::Tag)
    }

    /// Constraints owned by an element.
    pub fn constraints(&self, id: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(id, ElementKind::Constraint)
    }

    /// Parameters of an operation other than the return parameter.
    pub fn non_return_parameters(&self, operation: &ElementId) -> Vec<&Element> {
        self.owned_of_kind(operation, ElementKind::Parameter)
            .into_iter()
            .filter(|p| p.direction != ParameterDirection::Return)
            .collect()
    }

    /// The return parameter of an operation, if any.
    pub fn return_parameter(&self, operation: &ElementId) -> Option<&Element> {
        self.owned_of_kind(operation, ElementKind::Parameter)
            .into_iter()
            .find(|p| p.direction == ParameterDirection::Return)
    }

    // ── Relationship queries ────────────────────────────────────────

    /// Relationship elements where the given element is the source.
    pub fn rel_elements_from<'a, 's>(
        &'a self,
        source: &'s ElementId,
    ) -> impl Iterator<Item = &'a Element> + 's
    where
        'a: 's,
    {
        self.elements
            .values()
            .filter(move |e| e.source() == Some(source))
    }

    /// Relationship elements of a specific kind from a source.
    pub fn rel_elements_of_kind<'a, 's>(
        &'a self,
        source: &'s ElementId,
        kind: ElementKind,
    ) -> impl Iterator<Item = &'a Element> + 's
    where
        'a: 's,
    {
        self.rel_elements_from(source).filter(move |e| e.kind == kind)
    }

    /// Resolve the target element of a relationship element.
    pub fn rel_target<'a>(&'a self, rel_element: &Element) -> Option<&'a Element> {
        rel_element.target().and_then(|tid| self.get(tid))
    }

    fn targets_of_kind(&self, source: &ElementId, kind: ElementKind) -> Vec<&Element> {
        self.rel_elements_of_kind(source, kind)
            .filter_map(|rel| self.rel_target(rel))
            .collect()
    }

    /// Generalization targets of an element (its direct parents).
    pub fn super_classes(&self, id: &ElementId) -> Vec<&Element> {
        self.targets_of_kind(id, ElementKind::Generalization)
    }

    /// Interfaces realized by an element.
    pub fn super_interfaces(&self, id: &ElementId) -> Vec<&Element> {
        self.targets_of_kind(id, ElementKind::InterfaceRealization)
    }

    /// Suppliers of the element's outgoing dependencies.
    pub fn dependency_targets(&self, id: &ElementId) -> Vec<&Element> {
        self.targets_of_kind(id, ElementKind::Dependency)
    }

    /// The two ends of an association, `end1` first.
    pub fn association_ends(&self, association: &ElementId) -> Option<(&Element, &Element)> {
        let ends = self.owned_of_kind(association, ElementKind::AssociationEnd);
        match ends.as_slice() {
            [end1, end2, ..] => Some((*end1, *end2)),
            _ => None,
        }
    }

    /// Associations with at least one end referencing the given element.
    pub fn associations_of(&self, id: &ElementId) -> Vec<&Element> {
        self.elements
            .values()
            .filter(|e| e.kind == ElementKind::Association)
            .filter(|assoc| {
                self.association_ends(&assoc.id).is_some_and(|(end1, end2)| {
                    end1.reference.as_ref() == Some(id) || end2.reference.as_ref() == Some(id)
                })
            })
            .collect()
    }
}

/// Metadata about the project a model belongs to.
#[derive(Clone, Debug, Default)]
pub struct ProjectMetadata {
    /// Name of the project.
    pub name: Option<String>,
    /// Version string.
    pub version: Option<String>,
    /// Author.
    pub author: Option<String>,
    /// Copyright notice.
    pub copyright: Option<String>,
}
