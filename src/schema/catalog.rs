//! The Basic Formal Ontology (BFO 2.0) upper-level hierarchy.
//!
//! [`install`] declares the standard kinds, their property schemas and the
//! closed set of relationship pairs into a [`SchemaRegistry`]. Domain code
//! subclasses these kinds instead of re-declaring the upper structure; the
//! two top branches split entities that persist through time (continuants)
//! from entities that unfold over time (occurrents).
//!
//! Every kind carries its canonical OBO IRI as metadata. Coherent use of the
//! relationship pairs (e.g. pointing `inheres-in` at an independent
//! continuant) is a documentation convention; nothing here enforces it.

use super::kind::KindSpec;
use super::property::PropertyType;
use super::registry::{SchemaError, SchemaRegistry};
use super::relationship::RelationshipSpec;

/// Names of the standard entity kinds.
pub mod kinds {
    pub const ENTITY: &str = "Entity";
    pub const CONTINUANT: &str = "Continuant";
    pub const INDEPENDENT_CONTINUANT: &str = "IndependentContinuant";
    pub const MATERIAL_ENTITY: &str = "MaterialEntity";
    pub const OBJECT: &str = "Object";
    pub const FIAT_OBJECT_PART: &str = "FiatObjectPart";
    pub const OBJECT_AGGREGATE: &str = "ObjectAggregate";
    pub const IMMATERIAL_ENTITY: &str = "ImmaterialEntity";
    pub const SITE: &str = "Site";
    pub const CONTINUANT_FIAT_BOUNDARY: &str = "ContinuantFiatBoundary";
    pub const ZERO_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY: &str =
        "ZeroDimensionalContinuantFiatBoundary";
    pub const ONE_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY: &str =
        "OneDimensionalContinuantFiatBoundary";
    pub const TWO_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY: &str =
        "TwoDimensionalContinuantFiatBoundary";
    pub const SPATIAL_REGION: &str = "SpatialRegion";
    pub const ZERO_DIMENSIONAL_SPATIAL_REGION: &str = "ZeroDimensionalSpatialRegion";
    pub const ONE_DIMENSIONAL_SPATIAL_REGION: &str = "OneDimensionalSpatialRegion";
    pub const TWO_DIMENSIONAL_SPATIAL_REGION: &str = "TwoDimensionalSpatialRegion";
    pub const THREE_DIMENSIONAL_SPATIAL_REGION: &str = "ThreeDimensionalSpatialRegion";
    pub const GENERICALLY_DEPENDENT_CONTINUANT: &str = "GenericallyDependentContinuant";
    pub const SPECIFICALLY_DEPENDENT_CONTINUANT: &str = "SpecificallyDependentContinuant";
    pub const QUALITY: &str = "Quality";
    pub const RELATIONAL_QUALITY: &str = "RelationalQuality";
    pub const REALIZABLE_ENTITY: &str = "RealizableEntity";
    pub const ROLE: &str = "Role";
    pub const DISPOSITION: &str = "Disposition";
    pub const FUNCTION: &str = "Function";
    pub const OCCURRENT: &str = "Occurrent";
    pub const PROCESS: &str = "Process";
    pub const HISTORY: &str = "History";
    pub const PROCESS_PROFILE: &str = "ProcessProfile";
    pub const PROCESS_BOUNDARY: &str = "ProcessBoundary";
    pub const TEMPORAL_REGION: &str = "TemporalRegion";
    pub const ZERO_DIMENSIONAL_TEMPORAL_REGION: &str = "ZeroDimensionalTemporalRegion";
    pub const ONE_DIMENSIONAL_TEMPORAL_REGION: &str = "OneDimensionalTemporalRegion";
    pub const SPATIO_TEMPORAL_REGION: &str = "SpatioTemporalRegion";
}

/// Traversal names of the standard relationship pairs.
pub mod relations {
    pub const PART_OF: &str = "part-of";
    pub const HAS_PART: &str = "has-part";
    pub const EXISTS_AT: &str = "exists-at";
    pub const EXISTENCE_OF: &str = "existence-of";
    pub const LOCATED_IN: &str = "located-in";
    pub const LOCATION_OF: &str = "location-of";
    pub const OCCUPIES_SPATIAL_REGION: &str = "occupies-spatial-region";
    pub const SPATIAL_REGION_OF: &str = "spatial-region-of";
    pub const INHERES_IN: &str = "inheres-in";
    pub const BEARER_OF: &str = "bearer-of";
    pub const PARTICIPATES_IN: &str = "participates-in";
    pub const HAS_PARTICIPANT: &str = "has-participant";
    pub const REALIZES: &str = "realizes";
    pub const REALIZED_BY: &str = "realized-by";
    pub const SPATIALLY_CONTAINS: &str = "spatially-contains";
    pub const SPATIALLY_CONTAINED_IN: &str = "spatially-contained-in";
    pub const OCCURS_IN: &str = "occurs-in";
    pub const HAS_OCCURRENT: &str = "has-occurrent";
    pub const HAS_PROCESS_BOUNDARY: &str = "has-process-boundary";
    pub const PROCESS_BOUNDARY_OF: &str = "process-boundary-of";
    pub const PRECEDES: &str = "precedes";
    pub const PRECEDED_BY: &str = "preceded-by";
    pub const TEMPORALLY_CONTAINS: &str = "temporally-contains";
    pub const TEMPORALLY_CONTAINED_IN: &str = "temporally-contained-in";
}

/// Names of the standard property slots.
pub mod properties {
    pub const UID: &str = "uid";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CREATED_AT: &str = "created_at";
    pub const MODIFIED_AT: &str = "modified_at";
    pub const MASS_KG: &str = "mass_kg";
    pub const VALUE: &str = "value";
    pub const UNIT: &str = "unit";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const COORDINATES: &str = "coordinates";
    pub const COORDINATE_SYSTEM: &str = "coordinate_system";
    pub const TEMPORAL_START: &str = "temporal_start";
    pub const TEMPORAL_END: &str = "temporal_end";
    pub const SPATIAL_EXTENT: &str = "spatial_extent";
    pub const TEMPORAL_EXTENT: &str = "temporal_extent";
}

fn obo(code: &str) -> String {
    format!("http://purl.obolibrary.org/obo/BFO_{code}")
}

/// Declares the complete upper hierarchy into `registry`.
///
/// Relationships whose two ends live in disjoint branches (participation,
/// inherence, realization, existence, process boundaries) are declared once
/// per branch under the same name pair; the shared storage label keeps edges
/// written from either side traversable from both.
pub fn install(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    declare_root(registry)?;
    declare_continuants(registry)?;
    declare_material_entities(registry)?;
    declare_immaterial_entities(registry)?;
    declare_dependent_continuants(registry)?;
    declare_occurrents(registry)?;
    tracing::debug!(kinds = registry.len(), "installed upper ontology");
    Ok(())
}

impl SchemaRegistry {
    /// Creates a registry pre-populated with the upper hierarchy.
    pub fn with_upper_ontology() -> Result<Self, SchemaError> {
        let registry = Self::new();
        install(&registry)?;
        Ok(registry)
    }
}

/// Entity: anything that exists, has existed or will exist.
fn declare_root(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    registry.declare_kind(
        KindSpec::root(kinds::ENTITY)
            .abstract_kind()
            .with_iri(obo("0000001"))
            .property(properties::UID, PropertyType::Text)
            .property(properties::NAME, PropertyType::Text)
            .property(properties::DESCRIPTION, PropertyType::Text)
            .property(properties::CREATED_AT, PropertyType::Timestamp)
            .property(properties::MODIFIED_AT, PropertyType::Timestamp),
    )?;
    Ok(())
}

/// Continuants persist through time in full at every moment they exist:
/// organisms, molecules, qualities, functions.
fn declare_continuants(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    registry.declare_kind(
        KindSpec::new(kinds::CONTINUANT, kinds::ENTITY)
            .abstract_kind()
            .with_iri(obo("0000002"))
            .relationship(RelationshipSpec::new(relations::PART_OF, relations::HAS_PART))
            .relationship(RelationshipSpec::new(
                relations::EXISTS_AT,
                relations::EXISTENCE_OF,
            ))
            .relationship(RelationshipSpec::new(
                relations::LOCATED_IN,
                relations::LOCATION_OF,
            ))
            .relationship(RelationshipSpec::new(
                relations::OCCUPIES_SPATIAL_REGION,
                relations::SPATIAL_REGION_OF,
            )),
    )?;
    // Bearers of qualities and realizable entities; participants in processes.
    registry.declare_kind(
        KindSpec::new(kinds::INDEPENDENT_CONTINUANT, kinds::CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000004"))
            .relationship(RelationshipSpec::new(
                relations::INHERES_IN,
                relations::BEARER_OF,
            ))
            .relationship(RelationshipSpec::new(
                relations::PARTICIPATES_IN,
                relations::HAS_PARTICIPANT,
            )),
    )?;
    Ok(())
}

/// Material entities have some portion of matter as part: cells, organisms,
/// planets, chairs.
fn declare_material_entities(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    registry.declare_kind(
        KindSpec::new(kinds::MATERIAL_ENTITY, kinds::INDEPENDENT_CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000040"))
            .property(properties::MASS_KG, PropertyType::Number),
    )?;
    // Spatially extended, maximally self-connected wholes.
    registry.declare_kind(KindSpec::new(kinds::OBJECT, kinds::MATERIAL_ENTITY).with_iri(obo("0000030")))?;
    // Parts demarcated by fiat, not by physical discontinuity.
    registry.declare_kind(
        KindSpec::new(kinds::FIAT_OBJECT_PART, kinds::MATERIAL_ENTITY).with_iri(obo("0000024")),
    )?;
    // Mereological sums of separate objects.
    registry.declare_kind(
        KindSpec::new(kinds::OBJECT_AGGREGATE, kinds::MATERIAL_ENTITY).with_iri(obo("0000027")),
    )?;
    Ok(())
}

/// Immaterial entities have no material parts: sites, boundaries, spatial
/// regions.
fn declare_immaterial_entities(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    registry.declare_kind(
        KindSpec::new(kinds::IMMATERIAL_ENTITY, kinds::INDEPENDENT_CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000141")),
    )?;
    registry
        .declare_kind(KindSpec::new(kinds::SITE, kinds::IMMATERIAL_ENTITY).with_iri(obo("0000029")))?;

    registry.declare_kind(
        KindSpec::new(kinds::CONTINUANT_FIAT_BOUNDARY, kinds::IMMATERIAL_ENTITY)
            .abstract_kind()
            .with_iri(obo("0000140")),
    )?;
    registry.declare_kind(
        KindSpec::new(
            kinds::ZERO_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY,
            kinds::CONTINUANT_FIAT_BOUNDARY,
        )
        .with_iri(obo("0000147")),
    )?;
    registry.declare_kind(
        KindSpec::new(
            kinds::ONE_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY,
            kinds::CONTINUANT_FIAT_BOUNDARY,
        )
        .with_iri(obo("0000142")),
    )?;
    registry.declare_kind(
        KindSpec::new(
            kinds::TWO_DIMENSIONAL_CONTINUANT_FIAT_BOUNDARY,
            kinds::CONTINUANT_FIAT_BOUNDARY,
        )
        .with_iri(obo("0000146")),
    )?;

    // Space itself, in zero to three dimensions.
    registry.declare_kind(
        KindSpec::new(kinds::SPATIAL_REGION, kinds::IMMATERIAL_ENTITY)
            .abstract_kind()
            .with_iri(obo("0000006"))
            .property(properties::COORDINATES, PropertyType::Payload)
            .property(properties::COORDINATE_SYSTEM, PropertyType::Text)
            .relationship(RelationshipSpec::new(
                relations::SPATIALLY_CONTAINS,
                relations::SPATIALLY_CONTAINED_IN,
            )),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::ZERO_DIMENSIONAL_SPATIAL_REGION, kinds::SPATIAL_REGION)
            .with_iri(obo("0000018")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::ONE_DIMENSIONAL_SPATIAL_REGION, kinds::SPATIAL_REGION)
            .with_iri(obo("0000026")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::TWO_DIMENSIONAL_SPATIAL_REGION, kinds::SPATIAL_REGION)
            .with_iri(obo("0000009")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::THREE_DIMENSIONAL_SPATIAL_REGION, kinds::SPATIAL_REGION)
            .with_iri(obo("0000028")),
    )?;
    Ok(())
}

/// Continuants that depend on other entities: information artifacts,
/// qualities, roles, dispositions, functions.
fn declare_dependent_continuants(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    // Concretizable in multiple bearers: recipes, file contents, patterns.
    registry.declare_kind(
        KindSpec::new(kinds::GENERICALLY_DEPENDENT_CONTINUANT, kinds::CONTINUANT)
            .with_iri(obo("0000031")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::SPECIFICALLY_DEPENDENT_CONTINUANT, kinds::CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000020"))
            .relationship(RelationshipSpec::new(
                relations::INHERES_IN,
                relations::BEARER_OF,
            )),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::QUALITY, kinds::SPECIFICALLY_DEPENDENT_CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000019"))
            .property(properties::VALUE, PropertyType::Text)
            .property(properties::UNIT, PropertyType::Text),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::RELATIONAL_QUALITY, kinds::QUALITY).with_iri(obo("0000145")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::REALIZABLE_ENTITY, kinds::SPECIFICALLY_DEPENDENT_CONTINUANT)
            .abstract_kind()
            .with_iri(obo("0000017"))
            .relationship(RelationshipSpec::new(
                relations::REALIZES,
                relations::REALIZED_BY,
            )),
    )?;
    registry
        .declare_kind(KindSpec::new(kinds::ROLE, kinds::REALIZABLE_ENTITY).with_iri(obo("0000023")))?;
    registry.declare_kind(
        KindSpec::new(kinds::DISPOSITION, kinds::REALIZABLE_ENTITY).with_iri(obo("0000016")),
    )?;
    registry
        .declare_kind(KindSpec::new(kinds::FUNCTION, kinds::DISPOSITION).with_iri(obo("0000034")))?;
    Ok(())
}

/// Occurrents unfold over time: processes, process boundaries, temporal
/// regions.
fn declare_occurrents(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    registry.declare_kind(
        KindSpec::new(kinds::OCCURRENT, kinds::ENTITY)
            .abstract_kind()
            .with_iri(obo("0000003"))
            .property(properties::START_TIME, PropertyType::Timestamp)
            .property(properties::END_TIME, PropertyType::Timestamp)
            .relationship(RelationshipSpec::new(relations::PART_OF, relations::HAS_PART))
            .relationship(RelationshipSpec::new(
                relations::OCCURS_IN,
                relations::HAS_OCCURRENT,
            )),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::PROCESS, kinds::OCCURRENT)
            .abstract_kind()
            .with_iri(obo("0000015"))
            .relationship(RelationshipSpec::new(
                relations::PARTICIPATES_IN,
                relations::HAS_PARTICIPANT,
            ))
            .relationship(RelationshipSpec::new(
                relations::REALIZES,
                relations::REALIZED_BY,
            ))
            .relationship(RelationshipSpec::new(
                relations::HAS_PROCESS_BOUNDARY,
                relations::PROCESS_BOUNDARY_OF,
            ))
            .relationship(RelationshipSpec::new(
                relations::PRECEDES,
                relations::PRECEDED_BY,
            )),
    )?;
    // The totality of processes in an entity's spatiotemporal region.
    registry.declare_kind(KindSpec::new(kinds::HISTORY, kinds::PROCESS).with_iri(obo("0000182")))?;
    registry.declare_kind(
        KindSpec::new(kinds::PROCESS_PROFILE, kinds::PROCESS).with_iri(obo("0000144")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::PROCESS_BOUNDARY, kinds::OCCURRENT)
            .with_iri(obo("0000035"))
            .relationship(RelationshipSpec::new(
                relations::HAS_PROCESS_BOUNDARY,
                relations::PROCESS_BOUNDARY_OF,
            )),
    )?;

    // Time itself.
    registry.declare_kind(
        KindSpec::new(kinds::TEMPORAL_REGION, kinds::OCCURRENT)
            .abstract_kind()
            .with_iri(obo("0000008"))
            .property(properties::TEMPORAL_START, PropertyType::Timestamp)
            .property(properties::TEMPORAL_END, PropertyType::Timestamp)
            .relationship(RelationshipSpec::new(
                relations::EXISTS_AT,
                relations::EXISTENCE_OF,
            ))
            .relationship(RelationshipSpec::new(
                relations::TEMPORALLY_CONTAINS,
                relations::TEMPORALLY_CONTAINED_IN,
            )),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::ZERO_DIMENSIONAL_TEMPORAL_REGION, kinds::TEMPORAL_REGION)
            .with_iri(obo("0000148")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::ONE_DIMENSIONAL_TEMPORAL_REGION, kinds::TEMPORAL_REGION)
            .with_iri(obo("0000038")),
    )?;
    registry.declare_kind(
        KindSpec::new(kinds::SPATIO_TEMPORAL_REGION, kinds::OCCURRENT)
            .with_iri(obo("0000011"))
            .property(properties::SPATIAL_EXTENT, PropertyType::Payload)
            .property(properties::TEMPORAL_EXTENT, PropertyType::Text),
    )?;
    Ok(())
}
