use std::sync::Arc;

use thiserror::Error;

use crate::config::{GraphBackend, GraphSettings};
use crate::schema::{
    Direction, EdgeLabel, KindHandle, KindName, PropertyName, PropertyValue, RelationName,
    SchemaError, SchemaRegistry,
};

use super::instance::{EdgeHandle, EntityInstance, InstanceHandle};
use super::memory::InMemoryGraphStore;
use super::store::{EdgeId, GraphStore, InstanceId, PropertyMap};

/// Type alias simplifying store trait object usage inside the service.
pub type StoreHandle = dyn GraphStore<Error = GraphError> + Send + Sync + 'static;

/// Errors raised by the instance layer.
///
/// Usage errors (abstract kind, unknown property or relationship) are caller
/// mistakes and always recoverable by correcting the request. Store-side
/// failures are propagated unchanged; the core performs no retry and no
/// compensating action.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Attempted to instantiate an abstract kind.
    #[error("kind `{kind}` is abstract and cannot be instantiated")]
    AbstractKind { kind: KindName },
    /// The property is not declared on the instance's kind.
    #[error("property `{property}` is not declared on kind `{kind}`")]
    UnknownProperty { kind: KindName, property: String },
    /// The relationship name is not visible on the instance's kind.
    #[error("relationship `{relation}` is not visible on kind `{kind}`")]
    UnknownRelationship { kind: KindName, relation: String },
    /// A schema lookup failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The store holds no node under the given identifier.
    #[error("node `{node}` does not exist in the graph store")]
    MissingNode { node: InstanceId },
    /// The store holds no edge under the given identifier.
    #[error("edge `{edge}` does not exist in the graph store")]
    MissingEdge { edge: EdgeId },
    /// Opaque storage collaborator failure.
    #[error("graph store failure: {0}")]
    Backend(String),
}

impl GraphError {
    fn abstract_kind(kind: &KindHandle) -> Self {
        Self::AbstractKind {
            kind: kind.name().clone(),
        }
    }

    fn unknown_property(kind: &KindHandle, property: &str) -> Self {
        Self::UnknownProperty {
            kind: kind.name().clone(),
            property: property.to_owned(),
        }
    }

    fn unknown_relationship(kind: &KindHandle, relation: &str) -> Self {
        Self::UnknownRelationship {
            kind: kind.name().clone(),
            relation: relation.to_owned(),
        }
    }
}

/// High level instance service wiring the schema registry to a storage
/// collaborator.
///
/// `create` and `connect` are the only operations with an observable effect
/// on the store; everything else reads already-materialized state plus the
/// static registries. The service never blocks internally.
#[derive(Clone)]
pub struct EntityService {
    registry: Arc<SchemaRegistry>,
    store: Arc<StoreHandle>,
    freeze_on_first_use: bool,
}

impl EntityService {
    /// Creates a new [`EntityService`] from a registry and a store handle.
    pub fn new(registry: Arc<SchemaRegistry>, store: Arc<StoreHandle>) -> Self {
        Self {
            registry,
            store,
            freeze_on_first_use: true,
        }
    }

    /// Builds a service instance from configuration settings.
    pub fn from_config(registry: Arc<SchemaRegistry>, settings: &GraphSettings) -> Self {
        let store: Arc<StoreHandle> = match settings.backend {
            GraphBackend::InMemory => Arc::new(InMemoryGraphStore::default()),
        };
        Self::new(registry, store).with_freeze_on_first_use(settings.freeze_on_first_use)
    }

    /// Overrides the freeze-on-first-use policy.
    #[must_use]
    pub fn with_freeze_on_first_use(mut self, freeze: bool) -> Self {
        self.freeze_on_first_use = freeze;
        self
    }

    /// Returns a clone of the registry handle.
    #[must_use]
    pub fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    /// Returns a clone of the store handle.
    #[must_use]
    pub fn store(&self) -> Arc<StoreHandle> {
        Arc::clone(&self.store)
    }

    /// Creates an instance of a concrete kind with no properties set.
    pub async fn create(&self, kind: &KindHandle) -> Result<EntityInstance, GraphError> {
        self.create_with(kind, Vec::<(String, PropertyValue)>::new())
            .await
    }

    /// Creates an instance of a concrete kind with initial property values.
    ///
    /// Every supplied name must be declared on the kind or an ancestor. The
    /// node is labeled with the kind's full lineage so storage queries can
    /// select on any ancestor.
    pub async fn create_with<I, N>(
        &self,
        kind: &KindHandle,
        properties: I,
    ) -> Result<EntityInstance, GraphError>
    where
        I: IntoIterator<Item = (N, PropertyValue)>,
        N: Into<String>,
    {
        if self.freeze_on_first_use {
            self.registry.freeze();
        }
        if !kind.is_instantiable() {
            return Err(GraphError::abstract_kind(kind));
        }

        let mut initial = PropertyMap::new();
        for (name, value) in properties {
            let name = self.declared_property(kind, &name.into())?;
            initial.insert(name, value);
        }

        let id = self
            .store
            .create_node(kind.lineage(), initial.clone())
            .await?;
        tracing::debug!(kind = %kind.name(), instance = %id, "created entity instance");
        Ok(EntityInstance::new(id, kind.clone(), initial))
    }

    /// Sets a property value on an instance.
    ///
    /// Pure in-core mutation: initial values travel with [`create_with`];
    /// nothing is written back to the store here.
    ///
    /// [`create_with`]: EntityService::create_with
    pub fn set_property(
        &self,
        instance: &mut EntityInstance,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), GraphError> {
        let name = self.declared_property(instance.kind(), name)?;
        instance.set(name, value.into());
        Ok(())
    }

    /// Connects two instances along a declared relationship name.
    ///
    /// A forward name writes the edge source to target; an inverse name
    /// writes it target to source, always under the declaration's storage
    /// label. No domain or range checking is performed.
    pub async fn connect(
        &self,
        source: &EntityInstance,
        relation: &str,
        target: InstanceHandle,
    ) -> Result<EdgeHandle, GraphError> {
        self.connect_with(source, relation, target, PropertyMap::new())
            .await
    }

    /// Connects two instances, attaching edge-scoped property values.
    pub async fn connect_with(
        &self,
        source: &EntityInstance,
        relation: &str,
        target: InstanceHandle,
        edge_properties: PropertyMap,
    ) -> Result<EdgeHandle, GraphError> {
        let (label, direction) = self.visible_relationship(source.kind(), relation)?;
        let (from, to) = match direction {
            Direction::Forward => (source.handle(), target),
            Direction::Inverse => (target, source.handle()),
        };

        let id = self
            .store
            .create_edge(from.id(), label.clone(), to.id(), edge_properties)
            .await?;
        tracing::debug!(label = %label, from = %from, to = %to, "connected instances");
        Ok(EdgeHandle::new(id, label, from, to))
    }

    /// Prepares a one-hop traversal along a declared relationship name.
    ///
    /// Validation happens here; nothing is fetched until
    /// [`Traversal::fetch`] runs.
    pub fn traverse(
        &self,
        instance: &EntityInstance,
        relation: &str,
    ) -> Result<Traversal, GraphError> {
        let (label, direction) = self.visible_relationship(instance.kind(), relation)?;
        Ok(Traversal {
            store: Arc::clone(&self.store),
            origin: instance.handle(),
            label,
            direction,
        })
    }

    /// Removes an instance. Deletion is entirely the store's concern.
    pub async fn remove(&self, instance: InstanceHandle) -> Result<(), GraphError> {
        self.store.delete_node(instance.id()).await
    }

    /// Removes a single relationship edge.
    pub async fn disconnect(&self, edge: &EdgeHandle) -> Result<(), GraphError> {
        self.store.delete_edge(edge.id()).await
    }

    fn declared_property(
        &self,
        kind: &KindHandle,
        name: &str,
    ) -> Result<PropertyName, GraphError> {
        let Ok(name) = PropertyName::new(name) else {
            return Err(GraphError::unknown_property(kind, name));
        };
        let declared = self.registry.properties_of(kind);
        if declared.iter().any(|slot| slot.name() == &name) {
            Ok(name)
        } else {
            Err(GraphError::unknown_property(kind, name.as_str()))
        }
    }

    fn visible_relationship(
        &self,
        kind: &KindHandle,
        relation: &str,
    ) -> Result<(EdgeLabel, Direction), GraphError> {
        let Ok(name) = RelationName::new(relation) else {
            return Err(GraphError::unknown_relationship(kind, relation));
        };
        let index = self.registry.relationships_of(kind);
        let binding = index
            .get(&name)
            .ok_or_else(|| GraphError::unknown_relationship(kind, name.as_str()))?;
        Ok((binding.declaration().label().clone(), binding.direction()))
    }
}

/// A lazy, finite, restartable one-hop traversal.
///
/// Holds the resolved label and direction; each [`fetch`] re-queries the
/// store, so the sequence can be walked any number of times. Ordering is
/// whatever the store returns.
///
/// [`fetch`]: Traversal::fetch
#[derive(Clone)]
pub struct Traversal {
    store: Arc<StoreHandle>,
    origin: InstanceHandle,
    label: EdgeLabel,
    direction: Direction,
}

impl std::fmt::Debug for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traversal")
            .field("origin", &self.origin)
            .field("label", &self.label)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl Traversal {
    /// Returns the instance the traversal starts from.
    #[must_use]
    pub fn origin(&self) -> InstanceHandle {
        self.origin
    }

    /// Returns the storage label the traversal follows.
    #[must_use]
    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }

    /// Returns the physical direction the traversal follows.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Executes the hop and returns every reachable instance.
    pub async fn fetch(&self) -> Result<Vec<InstanceHandle>, GraphError> {
        let neighbours = self
            .store
            .find_edges(self.origin.id(), self.label.clone(), self.direction)
            .await?;
        Ok(neighbours.into_iter().map(InstanceHandle::new).collect())
    }
}
