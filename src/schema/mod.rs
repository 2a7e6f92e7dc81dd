//! Static schema model: the entity-kind hierarchy, property schemas and
//! bidirectional relationship declarations.
//!
//! Everything here is declaration-phase data. Instances and edges live in
//! the [`graph`](crate::graph) layer, which reads these registries but never
//! writes them.

pub mod catalog;
pub mod kind;
pub mod property;
pub mod registry;
pub mod relationship;
pub mod value_objects;

pub use kind::{KindHandle, KindSpec};
pub use property::{PropertyDeclaration, PropertyType, PropertyValue};
pub use registry::{RelationshipIndex, SchemaError, SchemaRegistry};
pub use relationship::{
    Direction, EdgeLabel, RelationshipBinding, RelationshipDeclaration, RelationshipHandle,
    RelationshipSpec,
};
pub use value_objects::{Iri, IriError, KindName, NameError, PropertyName, RelationName};
