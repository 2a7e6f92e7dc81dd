use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::schema::{Direction, EdgeLabel, KindName};

use super::service::GraphError;
use super::store::{EdgeId, GraphStore, InstanceId, PropertyMap};

#[derive(Clone, Debug)]
struct NodeRecord {
    labels: Vec<KindName>,
    properties: PropertyMap,
}

#[derive(Clone, Debug)]
struct EdgeRecord {
    id: EdgeId,
    from: InstanceId,
    label: EdgeLabel,
    to: InstanceId,
    properties: PropertyMap,
}

#[derive(Default)]
struct MemoryState {
    nodes: BTreeMap<InstanceId, NodeRecord>,
    edges: Vec<EdgeRecord>,
}

/// Process-local storage collaborator.
///
/// Keeps edges in insertion order, so traversal listings are deterministic.
/// `delete_node` detaches incident edges along with the node.
#[derive(Default)]
pub struct InMemoryGraphStore {
    state: Mutex<MemoryState>,
}

impl InMemoryGraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().expect("in-memory graph store poisoned")
    }

    /// Returns the number of stored nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.guard().nodes.len()
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.guard().edges.len()
    }

    /// Returns the labels a node was created with, root kind first.
    #[must_use]
    pub fn labels_of(&self, node: InstanceId) -> Option<Vec<KindName>> {
        self.guard()
            .nodes
            .get(&node)
            .map(|record| record.labels.clone())
    }

    /// Returns the property values a node was created with.
    #[must_use]
    pub fn node_properties(&self, node: InstanceId) -> Option<PropertyMap> {
        self.guard()
            .nodes
            .get(&node)
            .map(|record| record.properties.clone())
    }

    /// Returns the property values an edge was created with.
    #[must_use]
    pub fn edge_properties(&self, edge: EdgeId) -> Option<PropertyMap> {
        self.guard()
            .edges
            .iter()
            .find(|record| record.id == edge)
            .map(|record| record.properties.clone())
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    type Error = GraphError;

    async fn create_node(
        &self,
        labels: Vec<KindName>,
        properties: PropertyMap,
    ) -> Result<InstanceId, Self::Error> {
        let id = InstanceId::generate();
        self.guard().nodes.insert(id, NodeRecord { labels, properties });
        Ok(id)
    }

    async fn create_edge(
        &self,
        from: InstanceId,
        label: EdgeLabel,
        to: InstanceId,
        properties: PropertyMap,
    ) -> Result<EdgeId, Self::Error> {
        let mut state = self.guard();
        for node in [from, to] {
            if !state.nodes.contains_key(&node) {
                return Err(GraphError::MissingNode { node });
            }
        }
        let id = EdgeId::generate();
        state.edges.push(EdgeRecord {
            id,
            from,
            label,
            to,
            properties,
        });
        Ok(id)
    }

    async fn find_edges(
        &self,
        node: InstanceId,
        label: EdgeLabel,
        direction: Direction,
    ) -> Result<Vec<InstanceId>, Self::Error> {
        let state = self.guard();
        if !state.nodes.contains_key(&node) {
            return Err(GraphError::MissingNode { node });
        }
        let neighbours = state
            .edges
            .iter()
            .filter(|edge| edge.label == label)
            .filter_map(|edge| match direction {
                Direction::Forward if edge.from == node => Some(edge.to),
                Direction::Inverse if edge.to == node => Some(edge.from),
                _ => None,
            })
            .collect();
        Ok(neighbours)
    }

    async fn delete_node(&self, node: InstanceId) -> Result<(), Self::Error> {
        let mut state = self.guard();
        if state.nodes.remove(&node).is_none() {
            return Err(GraphError::MissingNode { node });
        }
        state
            .edges
            .retain(|edge| edge.from != node && edge.to != node);
        Ok(())
    }

    async fn delete_edge(&self, edge: EdgeId) -> Result<(), Self::Error> {
        let mut state = self.guard();
        let before = state.edges.len();
        state.edges.retain(|record| record.id != edge);
        if state.edges.len() == before {
            return Err(GraphError::MissingEdge { edge });
        }
        Ok(())
    }
}
