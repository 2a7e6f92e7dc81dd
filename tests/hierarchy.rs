use ontograph::schema::catalog::{kinds, properties, relations};
use ontograph::schema::{PropertyName, RelationName};
use ontograph::SchemaRegistry;
use rstest::rstest;

fn registry() -> SchemaRegistry {
    SchemaRegistry::with_upper_ontology().expect("catalog installs")
}

fn property(text: &str) -> PropertyName {
    PropertyName::new(text).expect("valid property name")
}

fn relation(text: &str) -> RelationName {
    RelationName::new(text).expect("valid relation name")
}

#[rstest]
#[case(kinds::CONTINUANT, kinds::ENTITY)]
#[case(kinds::INDEPENDENT_CONTINUANT, kinds::CONTINUANT)]
#[case(kinds::MATERIAL_ENTITY, kinds::INDEPENDENT_CONTINUANT)]
#[case(kinds::OBJECT, kinds::MATERIAL_ENTITY)]
#[case(kinds::OBJECT, kinds::ENTITY)]
#[case(kinds::IMMATERIAL_ENTITY, kinds::INDEPENDENT_CONTINUANT)]
#[case(kinds::SPATIAL_REGION, kinds::IMMATERIAL_ENTITY)]
#[case(kinds::QUALITY, kinds::SPECIFICALLY_DEPENDENT_CONTINUANT)]
#[case(kinds::RELATIONAL_QUALITY, kinds::QUALITY)]
#[case(kinds::ROLE, kinds::REALIZABLE_ENTITY)]
#[case(kinds::DISPOSITION, kinds::REALIZABLE_ENTITY)]
#[case(kinds::FUNCTION, kinds::DISPOSITION)]
#[case(kinds::PROCESS, kinds::OCCURRENT)]
#[case(kinds::HISTORY, kinds::PROCESS)]
#[case(kinds::TEMPORAL_REGION, kinds::OCCURRENT)]
fn hierarchy_chains_hold(#[case] descendant: &str, #[case] ancestor: &str) {
    let registry = registry();
    let descendant = registry.resolve(descendant).expect("descendant");
    let ancestor = registry.resolve(ancestor).expect("ancestor");
    assert!(registry.is_ancestor(&ancestor, &descendant));
    assert!(!registry.is_ancestor(&descendant, &ancestor));
}

#[test]
fn continuants_and_occurrents_are_disjoint_branches() {
    let registry = registry();
    let continuant = registry.resolve(kinds::CONTINUANT).expect("continuant");
    let occurrent = registry.resolve(kinds::OCCURRENT).expect("occurrent");
    assert!(!registry.is_ancestor(&continuant, &occurrent));
    assert!(!registry.is_ancestor(&occurrent, &continuant));
}

#[test]
fn every_declared_kind_subsumes_its_parent_schema() {
    let registry = registry();
    for kind in registry.kinds() {
        let Some(parent) = kind.parent() else {
            assert_eq!(kind.name().as_str(), kinds::ENTITY, "single root");
            continue;
        };
        assert!(registry.is_ancestor(parent, &kind));

        let own = registry.properties_of(&kind);
        let inherited = registry.properties_of(parent);
        for declaration in inherited.iter() {
            assert!(
                own.contains(declaration),
                "{kind} is missing inherited property {}",
                declaration.name()
            );
        }

        let own_relations = registry.relationships_of(&kind);
        for name in registry.relationships_of(parent).keys() {
            assert!(
                own_relations.contains_key(name),
                "{kind} is missing inherited relationship {name}"
            );
        }
    }
}

#[rstest]
#[case(kinds::OBJECT, properties::UID)]
#[case(kinds::OBJECT, properties::NAME)]
#[case(kinds::OBJECT, properties::DESCRIPTION)]
#[case(kinds::OBJECT, properties::CREATED_AT)]
#[case(kinds::OBJECT, properties::MODIFIED_AT)]
#[case(kinds::OBJECT, properties::MASS_KG)]
#[case(kinds::RELATIONAL_QUALITY, properties::VALUE)]
#[case(kinds::RELATIONAL_QUALITY, properties::UNIT)]
#[case(kinds::PROCESS, properties::START_TIME)]
#[case(kinds::PROCESS, properties::END_TIME)]
#[case(kinds::THREE_DIMENSIONAL_SPATIAL_REGION, properties::COORDINATES)]
#[case(kinds::THREE_DIMENSIONAL_SPATIAL_REGION, properties::COORDINATE_SYSTEM)]
#[case(kinds::ONE_DIMENSIONAL_TEMPORAL_REGION, properties::TEMPORAL_START)]
#[case(kinds::SPATIO_TEMPORAL_REGION, properties::SPATIAL_EXTENT)]
fn standard_properties_are_visible(#[case] kind: &str, #[case] name: &str) {
    let registry = registry();
    let kind = registry.resolve(kind).expect("kind");
    let declared = registry.properties_of(&kind);
    assert!(
        declared.iter().any(|slot| slot.name() == &property(name)),
        "{kind} lacks property {name}"
    );
}

#[test]
fn base_properties_are_listed_before_branch_properties() {
    let registry = registry();
    let object = registry.resolve(kinds::OBJECT).expect("object");
    let props = registry.properties_of(&object);
    let names: Vec<&str> = props
        .iter()
        .map(|slot| slot.name().as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            properties::UID,
            properties::NAME,
            properties::DESCRIPTION,
            properties::CREATED_AT,
            properties::MODIFIED_AT,
            properties::MASS_KG,
        ]
    );
}

#[rstest]
#[case(kinds::CONTINUANT, relations::PART_OF)]
#[case(kinds::CONTINUANT, relations::HAS_PART)]
#[case(kinds::CONTINUANT, relations::EXISTS_AT)]
#[case(kinds::CONTINUANT, relations::LOCATED_IN)]
#[case(kinds::CONTINUANT, relations::OCCUPIES_SPATIAL_REGION)]
#[case(kinds::OBJECT, relations::HAS_PART)]
#[case(kinds::OBJECT, relations::BEARER_OF)]
#[case(kinds::OBJECT, relations::PARTICIPATES_IN)]
#[case(kinds::SITE, relations::PART_OF)]
#[case(kinds::QUALITY, relations::INHERES_IN)]
#[case(kinds::ROLE, relations::REALIZED_BY)]
#[case(kinds::THREE_DIMENSIONAL_SPATIAL_REGION, relations::SPATIALLY_CONTAINS)]
#[case(kinds::OCCURRENT, relations::PART_OF)]
#[case(kinds::OCCURRENT, relations::OCCURS_IN)]
#[case(kinds::PROCESS, relations::HAS_PARTICIPANT)]
#[case(kinds::PROCESS, relations::REALIZES)]
#[case(kinds::PROCESS, relations::PRECEDES)]
#[case(kinds::PROCESS, relations::PRECEDED_BY)]
#[case(kinds::HISTORY, relations::HAS_PROCESS_BOUNDARY)]
#[case(kinds::PROCESS_BOUNDARY, relations::PROCESS_BOUNDARY_OF)]
#[case(kinds::ONE_DIMENSIONAL_TEMPORAL_REGION, relations::TEMPORALLY_CONTAINS)]
#[case(kinds::ONE_DIMENSIONAL_TEMPORAL_REGION, relations::EXISTENCE_OF)]
fn standard_relationships_are_visible(#[case] kind: &str, #[case] name: &str) {
    let registry = registry();
    let kind = registry.resolve(kind).expect("kind");
    let index = registry.relationships_of(&kind);
    assert!(index.contains_key(&relation(name)), "{kind} lacks {name}");
}

#[rstest]
#[case(kinds::ENTITY)]
#[case(kinds::CONTINUANT)]
#[case(kinds::INDEPENDENT_CONTINUANT)]
#[case(kinds::MATERIAL_ENTITY)]
#[case(kinds::SPECIFICALLY_DEPENDENT_CONTINUANT)]
#[case(kinds::QUALITY)]
#[case(kinds::REALIZABLE_ENTITY)]
#[case(kinds::OCCURRENT)]
#[case(kinds::PROCESS)]
#[case(kinds::TEMPORAL_REGION)]
fn organizing_kinds_are_abstract(#[case] kind: &str) {
    let registry = registry();
    let kind = registry.resolve(kind).expect("kind");
    assert!(!kind.is_instantiable());
}

#[rstest]
#[case(kinds::OBJECT)]
#[case(kinds::FIAT_OBJECT_PART)]
#[case(kinds::OBJECT_AGGREGATE)]
#[case(kinds::SITE)]
#[case(kinds::GENERICALLY_DEPENDENT_CONTINUANT)]
#[case(kinds::RELATIONAL_QUALITY)]
#[case(kinds::ROLE)]
#[case(kinds::FUNCTION)]
#[case(kinds::HISTORY)]
#[case(kinds::PROCESS_BOUNDARY)]
#[case(kinds::SPATIO_TEMPORAL_REGION)]
fn leaf_kinds_are_instantiable(#[case] kind: &str) {
    let registry = registry();
    let kind = registry.resolve(kind).expect("kind");
    assert!(kind.is_instantiable());
}

#[test]
fn unknown_kinds_are_reported() {
    let registry = registry();
    let err = registry.resolve("Phlogiston").expect_err("unknown kind");
    assert!(matches!(
        err,
        ontograph::SchemaError::UnknownKind { kind } if kind == "Phlogiston"
    ));
}
