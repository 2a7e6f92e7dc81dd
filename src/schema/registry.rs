use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dashmap::DashMap;
use thiserror::Error;

use super::kind::{KindHandle, KindInfo, KindSpec};
use super::property::{PropertyDeclaration, PropertyType};
use super::relationship::{
    Direction, RelationshipBinding, RelationshipDeclaration, RelationshipHandle, RelationshipSpec,
};
use super::value_objects::{Iri, IriError, KindName, NameError, PropertyName, RelationName};

/// Mapping from traversal name (forward and inverse) to its resolved binding.
pub type RelationshipIndex = BTreeMap<RelationName, RelationshipBinding>;

/// Errors raised while declaring or resolving schema elements.
///
/// All of these are configuration errors: they surface during the one-time
/// declaration phase, reject the whole mutation, and are not retryable.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A supplied kind, relation or property name failed validation.
    #[error(transparent)]
    InvalidName(#[from] NameError),
    /// A supplied kind IRI annotation failed validation.
    #[error(transparent)]
    InvalidIri(#[from] IriError),
    /// Attempted to declare a kind under an existing name.
    #[error("kind `{kind}` is already declared")]
    DuplicateKind { kind: KindName },
    /// The named parent has not been declared.
    #[error("parent kind `{parent}` of `{kind}` is not declared")]
    UnknownParent { kind: KindName, parent: KindName },
    /// A second parentless kind was declared; the hierarchy has one root.
    #[error("root kind `{root}` is already declared; `{kind}` must name a parent")]
    RootConflict { kind: KindName, root: KindName },
    /// The named kind has not been declared.
    #[error("kind `{kind}` is not declared")]
    UnknownKind { kind: String },
    /// A relationship name already denotes a property or relationship
    /// visible on the target kind or one of its descendants.
    #[error("name `{name}` already denotes a property or relationship on kind `{kind}`")]
    NameCollision { kind: KindName, name: String },
    /// The registry is frozen; declarations are no longer accepted.
    #[error("schema registry is frozen; declarations are no longer accepted")]
    Frozen,
}

struct KindEntry {
    handle: KindHandle,
    own_properties: Vec<PropertyDeclaration>,
    own_relationships: Vec<RelationshipHandle>,
}

#[derive(Default)]
struct RegistryState {
    kinds: BTreeMap<KindName, KindEntry>,
    root: Option<KindName>,
}

/// The append-only registry of entity kinds, property schemas and
/// relationship declarations.
///
/// Declaration is an initialization-phase activity; once [`freeze`] has been
/// called (explicitly, or by the instance layer on first use) the registry is
/// read-only and may be shared freely across threads. Aggregated views are
/// memoized per kind after first computation and invalidated by any later
/// declaration.
///
/// [`freeze`]: SchemaRegistry::freeze
pub struct SchemaRegistry {
    state: RwLock<RegistryState>,
    property_cache: DashMap<KindName, Arc<[PropertyDeclaration]>>,
    relationship_cache: DashMap<KindName, Arc<RelationshipIndex>>,
    frozen: AtomicBool,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            property_cache: DashMap::new(),
            relationship_cache: DashMap::new(),
            frozen: AtomicBool::new(false),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().expect("schema registry poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().expect("schema registry poisoned")
    }

    fn ensure_unfrozen(&self) -> Result<(), SchemaError> {
        if self.is_frozen() {
            return Err(SchemaError::Frozen);
        }
        Ok(())
    }

    fn invalidate_aggregates(&self) {
        self.property_cache.clear();
        self.relationship_cache.clear();
    }

    /// Registers a new kind together with its own properties and
    /// relationships.
    ///
    /// The whole spec is validated up front; any naming conflict rejects the
    /// declaration outright and leaves the registry unchanged.
    pub fn declare_kind(&self, spec: KindSpec) -> Result<KindHandle, SchemaError> {
        self.ensure_unfrozen()?;

        let name = KindName::new(spec.name)?;
        let parent_name = spec.parent.map(KindName::new).transpose()?;
        let iri = spec.iri.map(Iri::new).transpose()?;
        let own_properties = validate_properties(spec.properties)?;
        let relationships = validate_relationships(spec.relationships)?;

        let mut state = self.write();
        if state.kinds.contains_key(&name) {
            return Err(SchemaError::DuplicateKind { kind: name });
        }

        let parent = match &parent_name {
            Some(parent_name) => match state.kinds.get(parent_name) {
                Some(entry) => Some(entry.handle.clone()),
                None => {
                    return Err(SchemaError::UnknownParent {
                        kind: name,
                        parent: parent_name.clone(),
                    })
                }
            },
            None => {
                if let Some(root) = &state.root {
                    return Err(SchemaError::RootConflict {
                        kind: name,
                        root: root.clone(),
                    });
                }
                None
            }
        };

        // Names visible on the new kind: inherited aggregates plus the spec's
        // own properties. A brand-new kind has no descendants to consider.
        let mut visible = parent
            .as_ref()
            .map(|parent| visible_names(&state, parent))
            .unwrap_or_default();
        for declaration in &own_properties {
            visible.insert(declaration.name().as_str().to_owned());
        }

        let mut own_relationships = Vec::with_capacity(relationships.len());
        for (forward, inverse, edge_properties) in relationships {
            check_pair(&name, &forward, &inverse, &visible)?;
            visible.insert(forward.as_str().to_owned());
            visible.insert(inverse.as_str().to_owned());
            own_relationships.push(Arc::new(RelationshipDeclaration::new(
                forward,
                inverse,
                name.clone(),
                edge_properties,
            )));
        }

        let handle = KindHandle::new(KindInfo {
            name: name.clone(),
            parent,
            instantiable: spec.instantiable,
            label: spec.label,
            iri,
        });
        if handle.parent().is_none() {
            state.root = Some(name.clone());
        }
        state.kinds.insert(
            name.clone(),
            KindEntry {
                handle: handle.clone(),
                own_properties,
                own_relationships,
            },
        );
        drop(state);

        self.invalidate_aggregates();
        tracing::debug!(kind = %name, "declared entity kind");
        Ok(handle)
    }

    /// Declares an additional own property on an existing kind.
    ///
    /// Redeclaring a name already visible through an ancestor is tolerated;
    /// aggregation keeps the ancestor's declaration.
    pub fn declare_property(
        &self,
        kind: &KindHandle,
        name: impl Into<String>,
        value_type: PropertyType,
    ) -> Result<(), SchemaError> {
        self.ensure_unfrozen()?;
        let name = PropertyName::new(name)?;

        let mut state = self.write();
        let entry = state
            .kinds
            .get_mut(kind.name())
            .ok_or_else(|| SchemaError::UnknownKind {
                kind: kind.name().as_str().to_owned(),
            })?;
        entry
            .own_properties
            .push(PropertyDeclaration::new(name, value_type));
        drop(state);

        self.invalidate_aggregates();
        Ok(())
    }

    /// Declares a bidirectional relationship on an existing kind, visible to
    /// the kind and every descendant.
    ///
    /// Fails with [`SchemaError::NameCollision`] if either name already
    /// denotes a property or relationship visible on the kind, or an own
    /// declaration of one of its descendants.
    pub fn declare_relationship(
        &self,
        kind: &KindHandle,
        spec: RelationshipSpec,
    ) -> Result<RelationshipHandle, SchemaError> {
        self.ensure_unfrozen()?;
        let forward = RelationName::new(spec.forward)?;
        let inverse = RelationName::new(spec.inverse)?;
        let edge_properties = validate_properties(spec.edge_properties)?;

        let mut state = self.write();
        if !state.kinds.contains_key(kind.name()) {
            return Err(SchemaError::UnknownKind {
                kind: kind.name().as_str().to_owned(),
            });
        }

        let mut visible = visible_names(&state, kind);
        for entry in state.kinds.values() {
            if entry.handle.has_ancestor(kind) {
                for declaration in &entry.own_properties {
                    visible.insert(declaration.name().as_str().to_owned());
                }
                for relationship in &entry.own_relationships {
                    visible.insert(relationship.forward().as_str().to_owned());
                    visible.insert(relationship.inverse().as_str().to_owned());
                }
            }
        }
        check_pair(kind.name(), &forward, &inverse, &visible)?;

        let handle = Arc::new(RelationshipDeclaration::new(
            forward,
            inverse,
            kind.name().clone(),
            edge_properties,
        ));
        state
            .kinds
            .get_mut(kind.name())
            .expect("kind entry present")
            .own_relationships
            .push(handle.clone());
        drop(state);

        self.invalidate_aggregates();
        tracing::debug!(
            kind = %kind.name(),
            forward = %handle.forward(),
            inverse = %handle.inverse(),
            "declared relationship"
        );
        Ok(handle)
    }

    /// Resolves a kind handle by name.
    pub fn resolve(&self, name: &str) -> Result<KindHandle, SchemaError> {
        let Ok(name) = KindName::new(name) else {
            return Err(SchemaError::UnknownKind {
                kind: name.to_owned(),
            });
        };
        self.read()
            .kinds
            .get(&name)
            .map(|entry| entry.handle.clone())
            .ok_or_else(|| SchemaError::UnknownKind {
                kind: name.as_str().to_owned(),
            })
    }

    /// Reports whether `ancestor` appears on the parent chain of `kind`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: &KindHandle, kind: &KindHandle) -> bool {
        kind.has_ancestor(ancestor)
    }

    /// Returns the ordered property schema of a kind: ancestor declarations
    /// first, own declarations last, duplicates collapsed onto the first
    /// declaration.
    ///
    /// The aggregate is memoized per kind after the first call.
    #[must_use]
    pub fn properties_of(&self, kind: &KindHandle) -> Arc<[PropertyDeclaration]> {
        if let Some(aggregate) = self.property_cache.get(kind.name()) {
            return aggregate.value().clone();
        }

        let state = self.read();
        let mut seen = BTreeSet::new();
        let mut aggregate = Vec::new();
        for name in kind.lineage() {
            let Some(entry) = state.kinds.get(&name) else {
                continue;
            };
            for declaration in &entry.own_properties {
                if seen.insert(declaration.name().clone()) {
                    aggregate.push(declaration.clone());
                }
            }
        }

        // Memoized while the declaration lock is held, so an interleaved
        // declaration cannot strand a stale aggregate in the cache.
        let aggregate: Arc<[PropertyDeclaration]> = aggregate.into();
        self.property_cache
            .insert(kind.name().clone(), aggregate.clone());
        drop(state);
        aggregate
    }

    /// Returns every traversal name visible on a kind, mapped to its
    /// declaration and direction. Aggregated ancestor-first like
    /// [`properties_of`] and memoized the same way.
    ///
    /// [`properties_of`]: SchemaRegistry::properties_of
    #[must_use]
    pub fn relationships_of(&self, kind: &KindHandle) -> Arc<RelationshipIndex> {
        if let Some(index) = self.relationship_cache.get(kind.name()) {
            return index.value().clone();
        }

        let state = self.read();
        let mut index = RelationshipIndex::new();
        for name in kind.lineage() {
            let Some(entry) = state.kinds.get(&name) else {
                continue;
            };
            for declaration in &entry.own_relationships {
                index
                    .entry(declaration.forward().clone())
                    .or_insert_with(|| {
                        RelationshipBinding::new(declaration.clone(), Direction::Forward)
                    });
                index
                    .entry(declaration.inverse().clone())
                    .or_insert_with(|| {
                        RelationshipBinding::new(declaration.clone(), Direction::Inverse)
                    });
            }
        }

        let index = Arc::new(index);
        self.relationship_cache
            .insert(kind.name().clone(), index.clone());
        drop(state);
        index
    }

    /// Returns every registered kind in name order.
    #[must_use]
    pub fn kinds(&self) -> Vec<KindHandle> {
        self.read()
            .kinds
            .values()
            .map(|entry| entry.handle.clone())
            .collect()
    }

    /// Returns the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().kinds.len()
    }

    /// Returns whether the registry holds no kinds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().kinds.is_empty()
    }

    /// Rejects all further declarations. Idempotent.
    pub fn freeze(&self) {
        if !self.frozen.swap(true, Ordering::SeqCst) {
            tracing::debug!(kinds = self.len(), "schema registry frozen");
        }
    }

    /// Returns whether [`freeze`] has been called.
    ///
    /// [`freeze`]: SchemaRegistry::freeze
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::SeqCst)
    }
}

fn validate_properties(
    raw: Vec<(String, PropertyType)>,
) -> Result<Vec<PropertyDeclaration>, SchemaError> {
    let mut declarations = Vec::with_capacity(raw.len());
    for (name, value_type) in raw {
        declarations.push(PropertyDeclaration::new(
            PropertyName::new(name)?,
            value_type,
        ));
    }
    Ok(declarations)
}

type ValidatedRelationship = (RelationName, RelationName, Vec<PropertyDeclaration>);

fn validate_relationships(
    raw: Vec<RelationshipSpec>,
) -> Result<Vec<ValidatedRelationship>, SchemaError> {
    let mut validated = Vec::with_capacity(raw.len());
    for spec in raw {
        validated.push((
            RelationName::new(spec.forward)?,
            RelationName::new(spec.inverse)?,
            validate_properties(spec.edge_properties)?,
        ));
    }
    Ok(validated)
}

/// Collects every property and relationship name visible on `kind`.
fn visible_names(state: &RegistryState, kind: &KindHandle) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for name in kind.lineage() {
        let Some(entry) = state.kinds.get(&name) else {
            continue;
        };
        for declaration in &entry.own_properties {
            names.insert(declaration.name().as_str().to_owned());
        }
        for relationship in &entry.own_relationships {
            names.insert(relationship.forward().as_str().to_owned());
            names.insert(relationship.inverse().as_str().to_owned());
        }
    }
    names
}

fn check_pair(
    kind: &KindName,
    forward: &RelationName,
    inverse: &RelationName,
    visible: &BTreeSet<String>,
) -> Result<(), SchemaError> {
    if forward == inverse {
        return Err(SchemaError::NameCollision {
            kind: kind.clone(),
            name: forward.as_str().to_owned(),
        });
    }
    for name in [forward, inverse] {
        if visible.contains(name.as_str()) {
            return Err(SchemaError::NameCollision {
                kind: kind.clone(),
                name: name.as_str().to_owned(),
            });
        }
    }
    Ok(())
}
