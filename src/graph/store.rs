use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use uuid::Uuid;

use crate::schema::{Direction, EdgeLabel, KindName, PropertyName, PropertyValue};

/// Process-unique identifier of a persisted node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Mints a fresh identifier. Intended for storage adapters.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Process-unique identifier of a persisted edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Mints a fresh identifier. Intended for storage adapters.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Property mapping persisted alongside a node or an edge.
pub type PropertyMap = BTreeMap<PropertyName, PropertyValue>;

/// Contract describing the property graph storage collaborator.
///
/// The schema layer owns no persistence: it only supplies label and property
/// names derived from the declared schema and propagates adapter failures
/// unchanged. Transactions, isolation and retries are the implementor's
/// concern.
#[async_trait]
pub trait GraphStore {
    /// Associated error type allowing infrastructure specific failures.
    type Error;

    /// Persists a node labeled with the full kind lineage.
    async fn create_node(
        &self,
        labels: Vec<KindName>,
        properties: PropertyMap,
    ) -> Result<InstanceId, Self::Error>;

    /// Persists a directed, labeled edge between two existing nodes.
    async fn create_edge(
        &self,
        from: InstanceId,
        label: EdgeLabel,
        to: InstanceId,
        properties: PropertyMap,
    ) -> Result<EdgeId, Self::Error>;

    /// Lists the neighbours one labeled hop away from `node`.
    ///
    /// `Direction::Forward` follows edges out of `node`; `Direction::Inverse`
    /// follows edges into it. Result ordering is implementor-defined and need
    /// not be stable across calls.
    async fn find_edges(
        &self,
        node: InstanceId,
        label: EdgeLabel,
        direction: Direction,
    ) -> Result<Vec<InstanceId>, Self::Error>;

    /// Deletes a node.
    async fn delete_node(&self, node: InstanceId) -> Result<(), Self::Error>;

    /// Deletes a single edge.
    async fn delete_edge(&self, edge: EdgeId) -> Result<(), Self::Error>;
}
