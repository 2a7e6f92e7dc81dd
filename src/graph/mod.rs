//! Instance layer: creating entities, connecting them along declared
//! relationships and traversing the result through a storage collaborator.

pub mod instance;
pub mod memory;
pub mod service;
pub mod store;

pub use instance::{EdgeHandle, EntityInstance, InstanceHandle};
pub use memory::InMemoryGraphStore;
pub use service::{EntityService, GraphError, StoreHandle, Traversal};
pub use store::{EdgeId, GraphStore, InstanceId, PropertyMap};
