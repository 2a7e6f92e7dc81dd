use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use heck::ToShoutySnakeCase;

use super::property::{PropertyDeclaration, PropertyType};
use super::value_objects::{KindName, RelationName};

/// Traversal direction relative to the physical edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From edge source to edge target.
    Forward,
    /// From edge target back to edge source.
    Inverse,
}

/// Edge label under which the storage collaborator persists a relationship.
///
/// Derived from the forward relation name (`part-of` becomes `PART_OF`), so
/// re-declarations of the same name pair on disjoint kind subtrees share one
/// physical label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeLabel {
    value: String,
}

impl EdgeLabel {
    fn derive(forward: &RelationName) -> Self {
        Self {
            value: forward.as_str().to_shouty_snake_case(),
        }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for EdgeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Declaration request consumed by the registry.
///
/// Holds raw text; the registry validates both names and rejects the whole
/// declaration on the first problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipSpec {
    pub(crate) forward: String,
    pub(crate) inverse: String,
    pub(crate) edge_properties: Vec<(String, PropertyType)>,
}

impl RelationshipSpec {
    /// Creates a declaration request for a forward/inverse name pair.
    #[must_use]
    pub fn new(forward: impl Into<String>, inverse: impl Into<String>) -> Self {
        Self {
            forward: forward.into(),
            inverse: inverse.into(),
            edge_properties: Vec::new(),
        }
    }

    /// Declares a scalar property slot on edges of this relationship.
    #[must_use]
    pub fn edge_property(mut self, name: impl Into<String>, value_type: PropertyType) -> Self {
        self.edge_properties.push((name.into(), value_type));
        self
    }
}

/// An immutable, registered bidirectional relationship.
///
/// One record carries both traversal names; which one a caller used decides
/// the direction at traversal time, so the two halves can never drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipDeclaration {
    forward: RelationName,
    inverse: RelationName,
    label: EdgeLabel,
    declared_on: KindName,
    edge_properties: Vec<PropertyDeclaration>,
}

impl RelationshipDeclaration {
    pub(crate) fn new(
        forward: RelationName,
        inverse: RelationName,
        declared_on: KindName,
        edge_properties: Vec<PropertyDeclaration>,
    ) -> Self {
        let label = EdgeLabel::derive(&forward);
        Self {
            forward,
            inverse,
            label,
            declared_on,
            edge_properties,
        }
    }

    /// Returns the forward traversal name.
    #[must_use]
    pub fn forward(&self) -> &RelationName {
        &self.forward
    }

    /// Returns the inverse traversal name.
    #[must_use]
    pub fn inverse(&self) -> &RelationName {
        &self.inverse
    }

    /// Returns the storage edge label shared by both directions.
    #[must_use]
    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }

    /// Returns the kind this declaration was attached to.
    #[must_use]
    pub fn declared_on(&self) -> &KindName {
        &self.declared_on
    }

    /// Returns the optional edge-property schema.
    #[must_use]
    pub fn edge_properties(&self) -> &[PropertyDeclaration] {
        &self.edge_properties
    }

    /// Resolves a traversal name against this declaration.
    #[must_use]
    pub fn direction_of(&self, name: &RelationName) -> Option<Direction> {
        if name == &self.forward {
            Some(Direction::Forward)
        } else if name == &self.inverse {
            Some(Direction::Inverse)
        } else {
            None
        }
    }
}

/// Shared handle to a registered relationship declaration.
pub type RelationshipHandle = Arc<RelationshipDeclaration>;

/// A traversal name resolved to its declaration and direction.
#[derive(Clone, Debug)]
pub struct RelationshipBinding {
    declaration: RelationshipHandle,
    direction: Direction,
}

impl RelationshipBinding {
    pub(crate) fn new(declaration: RelationshipHandle, direction: Direction) -> Self {
        Self {
            declaration,
            direction,
        }
    }

    /// Returns the bound declaration.
    #[must_use]
    pub fn declaration(&self) -> &RelationshipHandle {
        &self.declaration
    }

    /// Returns the traversal direction the bound name denotes.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, RelationshipDeclaration};
    use crate::schema::value_objects::{KindName, RelationName};

    fn relation(text: &str) -> RelationName {
        RelationName::new(text).expect("valid relation name")
    }

    fn declaration() -> RelationshipDeclaration {
        RelationshipDeclaration::new(
            relation("part-of"),
            relation("has-part"),
            KindName::new("Continuant").expect("valid kind name"),
            Vec::new(),
        )
    }

    #[test]
    fn label_is_derived_from_forward_name() {
        assert_eq!(declaration().label().as_str(), "PART_OF");
    }

    #[test]
    fn both_names_resolve_to_a_direction() {
        let declaration = declaration();
        assert_eq!(
            declaration.direction_of(&relation("part-of")),
            Some(Direction::Forward)
        );
        assert_eq!(
            declaration.direction_of(&relation("has-part")),
            Some(Direction::Inverse)
        );
        assert_eq!(declaration.direction_of(&relation("located-in")), None);
    }
}
