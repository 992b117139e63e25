use uniformes::workflows::uniforms::{
    Catalog, CatalogHandle, CatalogStore, EmployeeGarmentInput, GarmentClass, GarmentSpec,
    OccupationResolver, PriceTable,
};

#[test]
fn every_synonym_resolves_to_its_own_occupation() {
    let catalog = Catalog::standard();
    let resolver = OccupationResolver::new();
    let empty = EmployeeGarmentInput::new();

    for occupation in &catalog.occupations {
        for synonym in &occupation.synonyms {
            let resolved = resolver.resolve(&catalog, "TEST", synonym, &empty, None);
            assert_eq!(
                resolved, occupation.name,
                "synonym {synonym} should resolve to {}",
                occupation.name
            );
        }
    }
}

#[test]
fn admin_edits_flow_through_store_and_handle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = CatalogStore::new(dir.path().join("config.json"));

    store.save(&Catalog::standard()).expect("seed catalog");
    let handle = CatalogHandle::new(store.load().expect("load succeeds"));

    let batch_snapshot = handle.snapshot();

    handle.mutate(|catalog| {
        let chaleco = GarmentSpec {
            garment_type: "CHALECO".to_string(),
            display_name: "Chaleco".to_string(),
            garment_class: GarmentClass::Upper,
            has_sizes: true,
            is_primary: false,
            is_required: false,
            default_quantity: 0,
            prices: PriceTable::by_size(15.0, 15.0, 17.0),
            extra: Default::default(),
        };
        catalog.add_garment("BARMAN", chaleco).expect("adds garment");
        catalog
            .add_synonym("BARMAN", "BARISTA")
            .expect("adds synonym");
    });

    // In-flight snapshot is untouched; the new snapshot sees both edits.
    assert!(batch_snapshot
        .find("BARMAN")
        .expect("barman")
        .garment("CHALECO")
        .is_none());
    let current = handle.snapshot();
    assert!(current
        .find("BARISTA")
        .expect("synonym resolves")
        .garment("CHALECO")
        .is_some());

    store.save(&current).expect("persist edits");
    let reloaded = store.load().expect("reload succeeds");
    assert_eq!(*current, reloaded);
}

#[test]
fn deleting_an_occupation_takes_its_garments_with_it() {
    let mut catalog = Catalog::standard();
    let garment_count: usize = catalog
        .find("COUNTER")
        .expect("counter exists")
        .garments
        .len();
    assert!(garment_count > 0);

    catalog.delete_occupation("COUNTER").expect("delete");
    assert!(catalog.find("COUNTER").is_none());
    assert!(catalog.find("COUNTER F/T").is_none(), "synonyms go too");
}
