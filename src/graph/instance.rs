use std::fmt::{self, Display, Formatter};

use crate::schema::{EdgeLabel, KindHandle, PropertyName, PropertyValue};

use super::store::{EdgeId, InstanceId, PropertyMap};

/// Lightweight reference to a persisted instance.
///
/// Traversals yield handles; only [`EntityInstance`] values returned by
/// `create` additionally know their kind and property values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceHandle {
    id: InstanceId,
}

impl InstanceHandle {
    pub(crate) fn new(id: InstanceId) -> Self {
        Self { id }
    }

    /// Returns the storage identifier of the referenced instance.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }
}

impl Display for InstanceHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.id, f)
    }
}

impl From<&EntityInstance> for InstanceHandle {
    fn from(instance: &EntityInstance) -> Self {
        instance.handle()
    }
}

/// A created occurrence of a concrete entity kind.
///
/// The storage collaborator owns the persisted node; this value mediates
/// further requests against it and caches the property values set through
/// the core. Unset properties are absent, never defaulted.
#[derive(Clone, Debug)]
pub struct EntityInstance {
    id: InstanceId,
    kind: KindHandle,
    properties: PropertyMap,
}

impl EntityInstance {
    pub(crate) fn new(id: InstanceId, kind: KindHandle, properties: PropertyMap) -> Self {
        Self {
            id,
            kind,
            properties,
        }
    }

    /// Returns the storage identifier assigned at creation.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Returns a lightweight handle to this instance.
    #[must_use]
    pub fn handle(&self) -> InstanceHandle {
        InstanceHandle::new(self.id)
    }

    /// Returns the kind this instance was created as.
    #[must_use]
    pub fn kind(&self) -> &KindHandle {
        &self.kind
    }

    /// Returns the value of a property, `None` when unset.
    #[must_use]
    pub fn property(&self, name: &PropertyName) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns all set property values in name order.
    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub(crate) fn set(&mut self, name: PropertyName, value: PropertyValue) {
        self.properties.insert(name, value);
    }
}

impl PartialEq for EntityInstance {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityInstance {}

/// Receipt for a persisted relationship edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeHandle {
    id: EdgeId,
    label: EdgeLabel,
    from: InstanceHandle,
    to: InstanceHandle,
}

impl EdgeHandle {
    pub(crate) fn new(id: EdgeId, label: EdgeLabel, from: InstanceHandle, to: InstanceHandle) -> Self {
        Self {
            id,
            label,
            from,
            to,
        }
    }

    /// Returns the storage identifier of the edge.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the storage label the edge was written under.
    #[must_use]
    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }

    /// Returns the physical source of the edge.
    #[must_use]
    pub fn from(&self) -> InstanceHandle {
        self.from
    }

    /// Returns the physical target of the edge.
    #[must_use]
    pub fn to(&self) -> InstanceHandle {
        self.to
    }
}
