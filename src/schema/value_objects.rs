use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use oxrdf::NamedNode;
use regex::Regex;
use thiserror::Error;

fn kind_name_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("kind name grammar"))
}

fn relation_name_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR
        .get_or_init(|| Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("relation grammar"))
}

fn property_name_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("property grammar"))
}

/// Value object naming an entity kind, e.g. `MaterialEntity`.
///
/// Kind names double as node labels in the storage collaborator, so the
/// constructor rejects anything outside the label-safe alphanumeric grammar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindName {
    value: String,
}

impl KindName {
    /// Validates and constructs a new [`KindName`].
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        if !kind_name_grammar().is_match(&value) {
            return Err(NameError::InvalidKind { value });
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Value object naming one traversal direction of a relationship, e.g.
/// `part-of` or `has-part`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationName {
    value: String,
}

impl RelationName {
    /// Validates and constructs a new [`RelationName`].
    ///
    /// Relation names use a lowercase kebab grammar so that forward and
    /// inverse spellings stay distinguishable from kind and property names.
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        if !relation_name_grammar().is_match(&value) {
            return Err(NameError::InvalidRelation { value });
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Value object naming a declared scalar property, e.g. `mass_kg`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyName {
    value: String,
}

impl PropertyName {
    /// Validates and constructs a new [`PropertyName`].
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        if !property_name_grammar().is_match(&value) {
            return Err(NameError::InvalidProperty { value });
        }
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Value object ensuring that supplied text represents a valid IRI.
///
/// Upper-level kinds carry their canonical ontology IRI as metadata; the
/// constructor rejects malformed identifiers so every annotation is usable
/// as-is by RDF tooling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

macro_rules! textual_impls {
    ($name:ident, $error:ident) => {
        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl FromStr for $name {
            type Err = $error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.to_owned())
            }
        }

        impl TryFrom<String> for $name {
            type Error = $error;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

textual_impls!(KindName, NameError);
textual_impls!(RelationName, NameError);
textual_impls!(PropertyName, NameError);
textual_impls!(Iri, IriError);

/// Errors produced when validating schema names.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// The provided text is not a valid kind name.
    #[error("invalid kind name: `{value}`")]
    InvalidKind { value: String },
    /// The provided text is not a valid relation name.
    #[error("invalid relation name: `{value}`")]
    InvalidRelation { value: String },
    /// The provided text is not a valid property name.
    #[error("invalid property name: `{value}`")]
    InvalidProperty { value: String },
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::{Iri, KindName, NameError, PropertyName, RelationName};

    #[test]
    fn accepts_valid_kind_names() {
        let name = KindName::new("MaterialEntity").expect("valid kind name");
        assert_eq!(name.as_str(), "MaterialEntity");
    }

    #[test]
    fn rejects_kind_names_with_separators() {
        let err = KindName::new("material entity").expect_err("invalid kind name");
        assert!(matches!(err, NameError::InvalidKind { value } if value == "material entity"));
    }

    #[test]
    fn accepts_kebab_relation_names() {
        let name = RelationName::new("occupies-spatial-region").expect("valid relation name");
        assert_eq!(name.as_str(), "occupies-spatial-region");
    }

    #[test]
    fn rejects_uppercase_relation_names() {
        let err = RelationName::new("PartOf").expect_err("invalid relation name");
        assert!(matches!(err, NameError::InvalidRelation { .. }));
    }

    #[test]
    fn rejects_trailing_hyphen_relation_names() {
        assert!(RelationName::new("part-of-").is_err());
    }

    #[test]
    fn accepts_snake_property_names() {
        let name = PropertyName::new("mass_kg").expect("valid property name");
        assert_eq!(name.as_str(), "mass_kg");
    }

    #[test]
    fn rejects_kebab_property_names() {
        assert!(PropertyName::new("mass-kg").is_err());
    }

    #[test]
    fn accepts_valid_iri() {
        let iri = Iri::new("http://purl.obolibrary.org/obo/BFO_0000001").expect("valid IRI");
        assert_eq!(iri.as_str(), "http://purl.obolibrary.org/obo/BFO_0000001");
    }

    #[test]
    fn rejects_invalid_iri() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, super::IriError::Invalid { value } if value == "not an iri"));
    }
}
