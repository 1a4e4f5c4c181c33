use crate::{
    catalog::{ loader, CatalogDocument, ThemeCatalog },
    core::ThemeError,
    validate::validate_catalog,
};

#[test]
fn embedded_catalog_loads_and_upholds_the_contract() {
    let catalog = loader::load_embedded().unwrap();
    let issues = validate_catalog(&catalog);
    assert!(issues.is_empty(), "embedded catalog has violations: {:?}", issues);
}

#[test]
fn crystals_bucket_and_weekly_theme() {
    let catalog = ThemeCatalog::global();

    let bucket = catalog.bucket("crystals").unwrap();
    assert_eq!(bucket.name, "Crystals");

    let core = catalog.subtheme("crystals", "crystals-core").unwrap();
    assert_eq!(core.slugs, vec!["crystals".to_string()]);

    let theme = catalog.weekly_theme("crystals-a-f").unwrap();
    assert_eq!(theme.facets.len(), 7);
    for (position, facet) in theme.facets.iter().enumerate() {
        assert_eq!(facet.day_index as usize, position);
    }

    let first = &theme.facets[0];
    assert_eq!(first.title, "Amethyst");
    assert_eq!(first.grimoire_slug, "crystals/amethyst");

    let pool = theme.facet_pool.as_ref().unwrap();
    assert_eq!(pool.len(), 30);
    for (facet, pooled) in theme.facets.iter().zip(pool) {
        assert_eq!(facet.grimoire_slug, pooled.grimoire_slug);
        assert_eq!(facet.title, pooled.title);
    }
    assert_eq!(theme.all_facets().len(), 30);
}

#[test]
fn lookups_miss_with_none() {
    let catalog = ThemeCatalog::global();

    assert!(catalog.bucket("alchemy").is_none());
    assert!(catalog.weekly_theme("alchemy-core").is_none());
    assert!(catalog.subtheme_by_key("alchemy-core").is_none());

    // Subtheme keys are global, but the scoped lookup still checks the bucket.
    assert!(catalog.subtheme("crystals", "crystals-a-f").is_some());
    assert!(catalog.subtheme("tarot", "crystals-a-f").is_none());
    assert_eq!(catalog.bucket_of("crystals-a-f").unwrap().key, "crystals");
}

#[test]
fn iteration_follows_authored_order() {
    let catalog = ThemeCatalog::global();

    let bucket_keys: Vec<&str> = catalog.buckets().iter().map(|b| b.key.as_str()).collect();
    assert_eq!(bucket_keys.first(), Some(&"crystals"));
    assert_eq!(bucket_keys.last(), Some(&"birthstones"));

    let subtheme_keys: Vec<&str> =
        catalog.bucket("crystals").unwrap().subthemes.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        subtheme_keys,
        vec!["crystals-core", "crystals-a-f", "crystals-g-m", "crystals-n-s", "crystals-t-z"]
    );

    assert_eq!(catalog.weekly_themes()[0].id, "crystals-a-f");
}

#[test]
fn global_is_a_single_instance() {
    assert!(std::ptr::eq(ThemeCatalog::global(), ThemeCatalog::global()));
}

#[test]
fn serialization_round_trip_keeps_order_and_shape() {
    let doc = ThemeCatalog::global().to_document();
    let json = serde_json::to_string(&doc).unwrap();

    // facetPool must be omitted, not serialized as null.
    assert!(!json.contains("\"facetPool\":null"));
    assert!(json.contains("\"dayIndex\""));
    assert!(json.contains("\"grimoireSlug\""));
    assert!(json.contains("\"shortFormHook\""));

    let reparsed: CatalogDocument = serde_json::from_str(&json).unwrap();
    let original_keys: Vec<&String> =
        doc.generated_theme_buckets.iter().map(|b| &b.key).collect();
    let reparsed_keys: Vec<&String> =
        reparsed.generated_theme_buckets.iter().map(|b| &b.key).collect();
    assert_eq!(original_keys, reparsed_keys);

    let pools: Vec<bool> = reparsed
        .generated_category_themes
        .iter()
        .map(|t| t.facet_pool.is_some())
        .collect();
    let expected: Vec<bool> =
        doc.generated_category_themes.iter().map(|t| t.facet_pool.is_some()).collect();
    assert_eq!(pools, expected);
}

#[test]
fn duplicate_weekly_theme_ids_are_rejected() {
    let mut doc = ThemeCatalog::global().to_document();
    let duplicate = doc.generated_category_themes[0].clone();
    let id = duplicate.id.clone();
    doc.generated_category_themes.push(duplicate);

    match ThemeCatalog::from_document(doc) {
        Err(ThemeError::DuplicateKey(key)) => assert_eq!(key, id),
        other => panic!("expected DuplicateKey, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn duplicate_subtheme_keys_are_rejected_across_buckets() {
    let mut doc = ThemeCatalog::global().to_document();
    // Graft a crystals subtheme into the tarot bucket under its original key.
    let stolen = doc.generated_theme_buckets[0].subthemes[1].clone();
    doc.generated_theme_buckets[1].subthemes.push(stolen);

    assert!(matches!(
        ThemeCatalog::from_document(doc),
        Err(ThemeError::DuplicateKey(key)) if key == "crystals-a-f"
    ));
}
