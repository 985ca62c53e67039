use nerdrats_core::{BadgeCatalog, CatalogError, SortOrder, Track, evaluate, top_n};

const BUNDLED_CATALOG: &str = include_str!("../../nerdrats-web/static/assets/data/badges.json");

#[test]
fn bundled_catalog_loads_and_validates() {
    let catalog = BadgeCatalog::from_json(BUNDLED_CATALOG).unwrap();
    assert!(!catalog.distance.is_empty());
    assert!(!catalog.keydowns.is_empty());
    assert_eq!(catalog.len(), catalog.distance.len() + catalog.keydowns.len());

    for badge in catalog.track(Track::Distance) {
        assert_eq!(badge.track, Track::Distance);
        assert!(badge.threshold >= 0.0);
        assert!(!badge.name.is_empty());
    }
    for badge in catalog.track(Track::Keydowns) {
        assert_eq!(badge.track, Track::Keydowns);
        assert!(badge.threshold >= 0.0);
        assert!(!badge.name.is_empty());
    }
}

#[test]
fn bundled_catalog_supports_a_full_evaluation_pass() {
    let catalog = BadgeCatalog::from_json(BUNDLED_CATALOG).unwrap();

    let result = evaluate(&catalog.distance, 50.0);
    assert!(!result.earned.is_empty());
    let last = result.last.as_ref().unwrap();
    assert!(last.threshold <= 50.0);

    // Compact display: three badges, hardest first.
    let strip = top_n(&result.earned, 3, SortOrder::Descending);
    assert!(strip.len() <= 3);
    for pair in strip.windows(2) {
        assert!(pair[0].threshold >= pair[1].threshold);
    }
}

#[test]
fn unknown_fields_are_tolerated() {
    // Catalog variants in the wild carry extra display fields (kcal, wpm,
    // motivation). Loading must not reject them.
    let json = r#"{
        "distance": [
            {
                "name": "5K",
                "distance": 5,
                "badge": "🏃",
                "kcal": 300,
                "motivation": "Levanta da cadeira!",
                "item": "tênis"
            }
        ],
        "keydowns": []
    }"#;
    let catalog = BadgeCatalog::from_json(json).unwrap();
    assert_eq!(catalog.distance.len(), 1);
}

#[test]
fn threshold_field_from_the_other_track_is_rejected() {
    let json = r#"{ "keydowns": [ { "name": "Lost", "distance": 5 } ] }"#;
    match BadgeCatalog::from_json(json) {
        Err(CatalogError::MissingThreshold { track, name }) => {
            assert_eq!(track, Track::Keydowns);
            assert_eq!(name, "Lost");
        }
        other => panic!("expected MissingThreshold, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        BadgeCatalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn catalog_round_trips_through_serde() {
    let catalog = BadgeCatalog::from_json(BUNDLED_CATALOG).unwrap();
    let serialized = serde_json::to_string(&catalog).unwrap();
    let restored: BadgeCatalog = serde_json::from_str(&serialized).unwrap();
    assert_eq!(catalog, restored);
}
