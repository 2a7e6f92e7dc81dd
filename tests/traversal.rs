use std::sync::Arc;

use ontograph::schema::catalog::{kinds, relations};
use ontograph::{
    EntityService, GraphError, GraphSettings, KindSpec, PropertyType, PropertyValue,
    RelationshipSpec, SchemaRegistry,
};

/// The minimal hierarchy: an abstract root, an abstract continuant branch
/// and one concrete kind carrying an inherited parthood pair.
fn minimal_registry() -> Arc<SchemaRegistry> {
    let registry = SchemaRegistry::new();
    registry
        .declare_kind(KindSpec::root("Entity").abstract_kind())
        .expect("root");
    registry
        .declare_kind(
            KindSpec::new("Continuant", "Entity")
                .abstract_kind()
                .relationship(RelationshipSpec::new("part-of", "has-part")),
        )
        .expect("continuant");
    registry
        .declare_kind(KindSpec::new("Object", "Continuant").property("name", PropertyType::Text))
        .expect("object");
    Arc::new(registry)
}

fn service(registry: &Arc<SchemaRegistry>) -> EntityService {
    EntityService::from_config(Arc::clone(registry), &GraphSettings::default())
}

#[tokio::test]
async fn parthood_round_trips_in_both_directions() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");

    let organism = service.create(&object).await.expect("organism");
    let cell = service.create(&object).await.expect("cell");
    service
        .connect(&cell, "part-of", organism.handle())
        .await
        .expect("edge");

    let wholes = service
        .traverse(&cell, "part-of")
        .expect("forward traversal")
        .fetch()
        .await
        .expect("wholes");
    assert_eq!(wholes, vec![organism.handle()]);

    let parts = service
        .traverse(&organism, "has-part")
        .expect("inverse traversal")
        .fetch()
        .await
        .expect("parts");
    assert_eq!(parts, vec![cell.handle()]);
}

#[tokio::test]
async fn abstract_kinds_cannot_be_instantiated() {
    let registry = minimal_registry();
    let service = service(&registry);
    let continuant = registry.resolve("Continuant").expect("continuant");

    let err = service.create(&continuant).await.expect_err("abstract kind");
    assert!(matches!(
        err,
        GraphError::AbstractKind { kind } if kind.as_str() == "Continuant"
    ));

    let object = registry.resolve("Object").expect("object");
    service.create(&object).await.expect("concrete kind");
}

#[tokio::test]
async fn undeclared_properties_are_rejected() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");
    let mut cell = service.create(&object).await.expect("cell");

    let err = service
        .set_property(&mut cell, "nonexistent", 1.0)
        .expect_err("unknown property");
    assert!(matches!(
        err,
        GraphError::UnknownProperty { property, .. } if property == "nonexistent"
    ));
    assert!(cell.properties().is_empty(), "rejected set leaves no value");

    service
        .set_property(&mut cell, "name", "epithelial cell")
        .expect("declared property");
    assert_eq!(
        cell.property(&"name".parse().expect("property name")),
        Some(&PropertyValue::Text("epithelial cell".into()))
    );
}

#[tokio::test]
async fn initial_properties_must_be_declared_too() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");

    let err = service
        .create_with(&object, [("species", PropertyValue::from("E. coli"))])
        .await
        .expect_err("unknown initial property");
    assert!(matches!(err, GraphError::UnknownProperty { .. }));

    let named = service
        .create_with(&object, [("name", PropertyValue::from("organism"))])
        .await
        .expect("declared initial property");
    assert_eq!(
        named.property(&"name".parse().expect("property name")),
        Some(&PropertyValue::Text("organism".into()))
    );
}

#[tokio::test]
async fn unknown_relationship_names_are_rejected() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");
    let organism = service.create(&object).await.expect("organism");
    let cell = service.create(&object).await.expect("cell");

    let err = service
        .connect(&cell, "member-of", organism.handle())
        .await
        .expect_err("unknown relationship");
    assert!(matches!(
        err,
        GraphError::UnknownRelationship { relation, .. } if relation == "member-of"
    ));

    let err = service
        .traverse(&cell, "member-of")
        .expect_err("unknown traversal");
    assert!(matches!(err, GraphError::UnknownRelationship { .. }));
}

#[tokio::test]
async fn duplicate_edges_are_permitted() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");
    let organism = service.create(&object).await.expect("organism");
    let cell = service.create(&object).await.expect("cell");

    for _ in 0..2 {
        service
            .connect(&cell, "part-of", organism.handle())
            .await
            .expect("edge");
    }

    let parts = service
        .traverse(&organism, "has-part")
        .expect("traversal")
        .fetch()
        .await
        .expect("parts");
    assert_eq!(parts, vec![cell.handle(), cell.handle()]);
}

#[tokio::test]
async fn first_create_freezes_out_later_declarations() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");

    service.create(&object).await.expect("first instance");

    let err = registry
        .declare_kind(KindSpec::new("Organism", "Object"))
        .expect_err("declaration after first use");
    assert!(matches!(err, ontograph::SchemaError::Frozen));
}

#[tokio::test]
async fn the_freeze_policy_can_be_disabled() {
    let registry = minimal_registry();
    let settings = GraphSettings::from_yaml("freeze_on_first_use: false").expect("settings");
    let service = EntityService::from_config(Arc::clone(&registry), &settings);
    let object = registry.resolve("Object").expect("object");

    service.create(&object).await.expect("instance");
    registry
        .declare_kind(KindSpec::new("Organism", "Object"))
        .expect("late declaration still accepted");
}

#[tokio::test]
async fn removal_is_delegated_to_the_store() {
    let registry = minimal_registry();
    let service = service(&registry);
    let object = registry.resolve("Object").expect("object");
    let organism = service.create(&object).await.expect("organism");
    let cell = service.create(&object).await.expect("cell");
    let edge = service
        .connect(&cell, "part-of", organism.handle())
        .await
        .expect("edge");

    service.disconnect(&edge).await.expect("disconnect");
    let parts = service
        .traverse(&organism, "has-part")
        .expect("traversal")
        .fetch()
        .await
        .expect("parts");
    assert!(parts.is_empty());

    service.remove(cell.handle()).await.expect("remove");
    let err = service.remove(cell.handle()).await.expect_err("gone");
    assert!(matches!(err, GraphError::MissingNode { .. }));
}

#[tokio::test]
async fn catalog_kinds_traverse_across_branches() {
    let registry = Arc::new(SchemaRegistry::with_upper_ontology().expect("catalog"));
    let service = service(&registry);
    let object = registry.resolve(kinds::OBJECT).expect("object");
    let history = registry.resolve(kinds::HISTORY).expect("history");

    let organism = service.create(&object).await.expect("organism");
    let life = service.create(&history).await.expect("life");
    service
        .connect(&organism, relations::PARTICIPATES_IN, life.handle())
        .await
        .expect("participation");

    let participants = service
        .traverse(&life, relations::HAS_PARTICIPANT)
        .expect("traversal")
        .fetch()
        .await
        .expect("participants");
    assert_eq!(participants, vec![organism.handle()]);
}

#[tokio::test]
async fn nodes_are_labeled_with_their_full_lineage() {
    use ontograph::InMemoryGraphStore;

    let registry = Arc::new(SchemaRegistry::with_upper_ontology().expect("catalog"));
    let store = Arc::new(InMemoryGraphStore::new());
    let service = EntityService::new(
        Arc::clone(&registry),
        Arc::clone(&store) as Arc<ontograph::graph::StoreHandle>,
    );
    let object = registry.resolve(kinds::OBJECT).expect("object");

    let organism = service.create(&object).await.expect("organism");
    let labels = store.labels_of(organism.id()).expect("labels");
    let names: Vec<&str> = labels.iter().map(|label| label.as_str()).collect();
    assert_eq!(
        names,
        vec![
            kinds::ENTITY,
            kinds::CONTINUANT,
            kinds::INDEPENDENT_CONTINUANT,
            kinds::MATERIAL_ENTITY,
            kinds::OBJECT,
        ]
    );
}
