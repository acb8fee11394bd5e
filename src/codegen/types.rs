//! Mapping of typed, multiplicity-annotated elements to GraphQL type
//! expressions.
//!
//! | multiplicity   | rendered   |
//! |----------------|------------|
//! | `0..1`         | `Type`     |
//! | `1`            | `Type!`    |
//! | `n` (integer)  | `[Type!]`  |
//! | `0..*` or `*`  | `[Type]`   |
//! | `1..*`         | `[Type!]`  |

use crate::model::{Element, ElementKind, Model, TypeRef};

/// Type name used when nothing resolves.
pub const DEFAULT_TYPE: &str = "String";

/// GraphQL decoration derived from a multiplicity token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `0..1`: nullable single value.
    Optional,
    /// `1`: non-null single value.
    Required,
    /// `*` / `0..*`: nullable list of nullable items.
    List,
    /// `1..*` or a fixed count: list of non-null items.
    RequiredList,
}

impl Cardinality {
    /// Parse a multiplicity token; surrounding whitespace is ignored.
    ///
    /// Returns `None` for tokens outside the cardinality table.
    pub fn from_multiplicity(token: &str) -> Option<Self> {
        match token.trim() {
            "0..1" => Some(Self::Optional),
            "1" => Some(Self::Required),
            "0..*" | "*" => Some(Self::List),
            "1..*" => Some(Self::RequiredList),
            m if !m.is_empty() && m.bytes().all(|b| b.is_ascii_digit()) => {
                Some(Self::RequiredList)
            }
            _ => None,
        }
    }

    /// Decorate a base type name.
    pub fn decorate(self, base: &str) -> String {
        match self {
            Self::Optional => base.to_string(),
            Self::Required => format!("{base}!"),
            Self::List => format!("[{base}]"),
            Self::RequiredList => format!("[{base}!]"),
        }
    }
}

/// Outcome of mapping an element to a type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    /// The rendered type, e.g. `[Order!]`.
    pub rendered: String,
    /// The multiplicity token that could not be mapped, if any.
    pub unknown_multiplicity: Option<String>,
}

/// The element's multiplicity, unless missing or blank.
pub fn multiplicity_token(element: &Element) -> Option<&str> {
    element
        .multiplicity
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
}

/// Base type name of an attribute, parameter or association end.
pub fn base_type_name<'a>(model: &'a Model, element: &'a Element) -> &'a str {
    let name = if element.kind == ElementKind::AssociationEnd {
        element
            .reference
            .as_ref()
            .and_then(|id| model.get(id))
            .map(|target| target.name_str())
    } else {
        match &element.type_ref {
            Some(TypeRef::Element(id)) => model.get(id).map(|target| target.name_str()),
            Some(TypeRef::Named(name)) => Some(name.as_ref()),
            None => None,
        }
    };
    name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_TYPE)
}

/// GraphQL type expression of an element.
///
/// A blank multiplicity counts as none. An unrecognized one leaves the base
/// type undecorated and is reported through [`TypeExpr::unknown_multiplicity`].
pub fn type_of(model: &Model, element: &Element) -> TypeExpr {
    let base = base_type_name(model, element);
    let Some(token) = multiplicity_token(element) else {
        return TypeExpr {
            rendered: base.to_string(),
            unknown_multiplicity: None,
        };
    };
    match Cardinality::from_multiplicity(token) {
        Some(cardinality) => TypeExpr {
            rendered: cardinality.decorate(base),
            unknown_multiplicity: None,
        },
        None => TypeExpr {
            rendered: base.to_string(),
            unknown_multiplicity: Some(token.to_string()),
        },
    }
}
