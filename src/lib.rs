//! Upper-level ontology schema layer over property graph stores.
//!
//! The crate models a fixed upper-level type hierarchy as entity kinds with
//! typed, bidirectional relationships, instantiable as nodes and edges in
//! any property graph store. Domain code subclasses a small number of
//! abstract root kinds and inherits the standard relationship set (parthood,
//! inherence, participation, realization, temporal and spatial location)
//! without re-declaring it.
//!
//! The schema records shape, not constraints: nothing validates domain or
//! range at runtime, and coherence with the upper-level semantics is a
//! documentation convention. There is no reasoner here either; one hop
//! forward or backward is the whole query surface.
//!
//! # Quick start
//!
//! ```
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use ontograph::schema::catalog::{kinds, relations};
//! use ontograph::{EntityService, GraphSettings, SchemaRegistry};
//!
//! let registry = Arc::new(SchemaRegistry::with_upper_ontology()?);
//! let service = EntityService::from_config(Arc::clone(&registry), &GraphSettings::default());
//!
//! let object = registry.resolve(kinds::OBJECT)?;
//! let organism = service.create(&object).await?;
//! let cell = service.create(&object).await?;
//! service.connect(&cell, relations::PART_OF, organism.handle()).await?;
//!
//! let parts = service.traverse(&organism, relations::HAS_PART)?.fetch().await?;
//! assert_eq!(parts, vec![cell.handle()]);
//! # Ok(())
//! # }
//! ```
//!
//! # Extending the hierarchy
//!
//! New domain kinds are declared by naming an existing kind as parent;
//! extension is purely additive and happens before instance traffic begins:
//!
//! ```
//! use ontograph::schema::catalog::kinds;
//! use ontograph::{KindSpec, PropertyType, RelationshipSpec, SchemaRegistry};
//!
//! # fn main() -> Result<(), ontograph::SchemaError> {
//! let registry = SchemaRegistry::with_upper_ontology()?;
//! registry.declare_kind(
//!     KindSpec::new("Organism", kinds::OBJECT)
//!         .property("species", PropertyType::Text)
//!         .relationship(RelationshipSpec::new("offspring-of", "has-offspring")),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod graph;
pub mod schema;

pub use config::{GraphBackend, GraphSettings};
pub use graph::{
    EdgeHandle, EntityInstance, EntityService, GraphError, GraphStore, InMemoryGraphStore,
    InstanceHandle, Traversal,
};
pub use schema::{
    Direction, KindHandle, KindSpec, PropertyType, PropertyValue, RelationshipSpec, SchemaError,
    SchemaRegistry,
};
