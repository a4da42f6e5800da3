//! Integration tests for the identifier generation workflows: opaque
//! UUID generation, and namespaced sequential/hinted generation against
//! a shared object store.

use std::collections::HashSet;

use aas_ident::{
    IdType, Identifiable, Identifier, IdentifierGenerator, IdentifierLookup, MemoryObjectStore,
    NamespaceIriGenerator, ObjectStore, UuidGenerator,
};

/// Minimal identifiable entity standing in for a submodel.
struct Submodel {
    identification: Identifier,
}

impl Submodel {
    fn new(identification: Identifier) -> Self {
        Self { identification }
    }
}

impl Identifiable for Submodel {
    fn identifier(&self) -> &Identifier {
        &self.identification
    }
}

fn is_canonical_uuid_urn(id: &str) -> bool {
    let Some(hex) = id.strip_prefix("urn:uuid:") else {
        return false;
    };
    let groups: Vec<&str> = hex.split('-').collect();
    groups.iter().map(|g| g.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
}

#[test]
fn uuid_identifiers_are_canonical_and_pairwise_distinct() {
    let mut generator = UuidGenerator::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let identification = generator.generate_id(None);
        assert_eq!(identification.id_type(), IdType::Uuid);
        assert!(
            is_canonical_uuid_urn(identification.id()),
            "not a canonical urn:uuid form: {}",
            identification.id()
        );
        assert!(seen.insert(identification), "uuid generator repeated an identifier");
    }
}

#[test]
fn namespace_validation_matches_the_iri_prefix_rule() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();

    for namespace in ["", "http"] {
        let err = NamespaceIriGenerator::new(namespace, &store)
            .err()
            .expect("namespace should be rejected");
        assert_eq!(err.to_string(), "Namespace must be a valid IRI, ending with #, / or =");
    }

    let generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store)
        .expect("valid namespace should be accepted");
    assert_eq!(generator.namespace(), "http://acplt.org/AAS/");
}

#[test]
fn sequential_generation_walks_the_counter_against_the_store() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
    let mut generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store).unwrap();

    let identification = generator.generate_id(None);
    assert_eq!(identification.id(), "http://acplt.org/AAS/0000");
    store.add(Submodel::new(identification)).unwrap();

    let mut last = None;
    for _ in 0..10 {
        let identification = generator.generate_id(None);
        assert!(!store.contains_id(&identification));
        store.add(Submodel::new(identification.clone())).unwrap();
        last = Some(identification);
    }
    assert_eq!(last.unwrap().id(), "http://acplt.org/AAS/0010");
}

#[test]
fn sequential_generation_survives_out_of_band_insertions() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
    let mut generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store).unwrap();

    // Another actor claims the next two counter values through other means.
    store.add(Submodel::new(Identifier::iri("http://acplt.org/AAS/0000"))).unwrap();
    store.add(Submodel::new(Identifier::iri("http://acplt.org/AAS/0001"))).unwrap();

    let identification = generator.generate_id(None);
    assert_eq!(identification.id(), "http://acplt.org/AAS/0002");
    assert!(!store.contains_id(&identification));
}

#[test]
fn hinted_generation_disambiguates_against_the_store() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
    let mut generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store).unwrap();

    let identification = generator.generate_id(Some("Spülmaschine"));
    assert_eq!(identification.id(), "http://acplt.org/AAS/Spülmaschine");
    store.add(Submodel::new(identification)).unwrap();

    for _ in 0..10 {
        let identification = generator.generate_id(Some("Spülmaschine"));
        assert!(!store.contains_id(&identification));
        assert_ne!(identification.id(), "http://acplt.org/AAS/Spülmaschine");
    }
}

#[test]
fn sequential_counter_advances_even_without_insertion() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
    let mut generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store).unwrap();

    // Nothing is inserted between calls; the counter still moves on.
    let first = generator.generate_id(None);
    let second = generator.generate_id(None);
    assert_ne!(first, second);
}

#[test]
fn caller_insertion_of_generated_ids_never_collides() {
    let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
    let mut sequential = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store).unwrap();
    let mut opaque = UuidGenerator::new();

    for i in 0..20 {
        let identification = if i % 2 == 0 {
            sequential.generate_id(None)
        } else {
            opaque.generate_id(None)
        };
        store.add(Submodel::new(identification)).unwrap();
    }
    assert_eq!(store.len(), 20);
}
