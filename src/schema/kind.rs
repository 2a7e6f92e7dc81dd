use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use super::property::PropertyType;
use super::relationship::RelationshipSpec;
use super::value_objects::{Iri, KindName};

/// Declaration request for a new entity kind, consumed by the registry.
///
/// The builder holds raw text; names and the IRI are validated when the spec
/// is declared, so a malformed request leaves no trace in the registry.
#[derive(Clone, Debug)]
pub struct KindSpec {
    pub(crate) name: String,
    pub(crate) parent: Option<String>,
    pub(crate) instantiable: bool,
    pub(crate) label: Option<String>,
    pub(crate) iri: Option<String>,
    pub(crate) properties: Vec<(String, PropertyType)>,
    pub(crate) relationships: Vec<RelationshipSpec>,
}

impl KindSpec {
    /// Creates a spec for a kind inheriting from `parent`.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            instantiable: true,
            label: None,
            iri: None,
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Creates a spec for the single parentless root kind.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            instantiable: true,
            label: None,
            iri: None,
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Marks the kind abstract: it organizes the hierarchy but cannot be
    /// instantiated, only subclassed.
    #[must_use]
    pub fn abstract_kind(mut self) -> Self {
        self.instantiable = false;
        self
    }

    /// Sets a human friendly label for the kind.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Annotates the kind with its canonical ontology IRI.
    #[must_use]
    pub fn with_iri(mut self, iri: impl Into<String>) -> Self {
        self.iri = Some(iri.into());
        self
    }

    /// Declares an own property slot on the kind.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value_type: PropertyType) -> Self {
        self.properties.push((name.into(), value_type));
        self
    }

    /// Declares an own relationship on the kind.
    #[must_use]
    pub fn relationship(mut self, spec: RelationshipSpec) -> Self {
        self.relationships.push(spec);
        self
    }
}

/// Immutable identity of a registered kind.
#[derive(Debug)]
pub(crate) struct KindInfo {
    pub(crate) name: KindName,
    pub(crate) parent: Option<KindHandle>,
    pub(crate) instantiable: bool,
    pub(crate) label: Option<String>,
    pub(crate) iri: Option<Iri>,
}

/// Cheap, clonable handle to a registered entity kind.
///
/// Parent links form a shared chain, so ancestry checks and lineage listing
/// never touch the registry.
#[derive(Clone, Debug)]
pub struct KindHandle {
    info: Arc<KindInfo>,
}

impl KindHandle {
    pub(crate) fn new(info: KindInfo) -> Self {
        Self {
            info: Arc::new(info),
        }
    }

    /// Returns the kind name.
    #[must_use]
    pub fn name(&self) -> &KindName {
        &self.info.name
    }

    /// Returns the parent kind, `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&KindHandle> {
        self.info.parent.as_ref()
    }

    /// Returns whether instances of this kind may be created.
    #[must_use]
    pub fn is_instantiable(&self) -> bool {
        self.info.instantiable
    }

    /// Returns the optional display label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.info.label.as_deref()
    }

    /// Returns the optional canonical ontology IRI.
    #[must_use]
    pub fn iri(&self) -> Option<&Iri> {
        self.info.iri.as_ref()
    }

    /// Walks the parent chain and reports whether `candidate` is a strict
    /// ancestor of this kind.
    #[must_use]
    pub fn has_ancestor(&self, candidate: &KindHandle) -> bool {
        let mut current = self.parent();
        while let Some(kind) = current {
            if kind.name() == candidate.name() {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns the kind names from the root down to this kind.
    ///
    /// Instances are labeled with their full lineage so storage queries can
    /// select on any ancestor kind.
    #[must_use]
    pub fn lineage(&self) -> Vec<KindName> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(kind) = current {
            chain.push(kind.name().clone());
            current = kind.parent();
        }
        chain.reverse();
        chain
    }

    /// Returns the distance to the root kind.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(kind) = current {
            depth += 1;
            current = kind.parent();
        }
        depth
    }
}

impl PartialEq for KindHandle {
    fn eq(&self, other: &Self) -> bool {
        self.info.name == other.info.name
    }
}

impl Eq for KindHandle {}

impl Display for KindHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.info.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{KindHandle, KindInfo};
    use crate::schema::value_objects::KindName;

    fn handle(name: &str, parent: Option<&KindHandle>) -> KindHandle {
        KindHandle::new(KindInfo {
            name: KindName::new(name).expect("valid kind name"),
            parent: parent.cloned(),
            instantiable: true,
            label: None,
            iri: None,
        })
    }

    #[test]
    fn ancestry_walks_the_parent_chain() {
        let entity = handle("Entity", None);
        let continuant = handle("Continuant", Some(&entity));
        let object = handle("Object", Some(&continuant));

        assert!(object.has_ancestor(&continuant));
        assert!(object.has_ancestor(&entity));
        assert!(!entity.has_ancestor(&object));
        assert!(!object.has_ancestor(&object), "ancestry is strict");
    }

    #[test]
    fn lineage_lists_root_first() {
        let entity = handle("Entity", None);
        let continuant = handle("Continuant", Some(&entity));
        let object = handle("Object", Some(&continuant));

        let lineage = object.lineage();
        let names: Vec<&str> = lineage.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Entity", "Continuant", "Object"]);
        assert_eq!(object.depth(), 2);
        assert_eq!(entity.depth(), 0);
    }
}
