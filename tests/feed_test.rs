//! Tests for the presentation feed and boundary atlas.

use border_trek::{
    BoundaryAtlas, CountryRegistry, FeedEvent, GameSession, GameStatus, GeoError, RawCountry,
    RawName,
};
use serde_json::json;

fn raw(name: &str, code: &str, borders: &[&str], lat: f64, lng: f64) -> RawCountry {
    RawCountry {
        name: RawName {
            common: name.to_string(),
        },
        cca3: code.to_string(),
        borders: Some(borders.iter().map(|s| s.to_string()).collect()),
        latlng: Some(vec![lat, lng]),
    }
}

fn triangle() -> CountryRegistry {
    CountryRegistry::from_records(vec![
        raw("Alpha", "AAA", &["BBB"], 10.0, 10.0),
        raw("Beta", "BBB", &["AAA", "CCC"], 20.0, 20.0),
        raw("Gamma", "CCC", &["BBB"], 30.0, 30.0),
    ])
    .unwrap()
}

#[test]
fn test_snapshot_resolves_display_names_and_coordinates() {
    let registry = triangle();
    let session = GameSession::with_route(&registry, "AAA", "CCC").unwrap();
    let snapshot = session.snapshot(&registry);

    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.lives, 5);
    assert_eq!(snapshot.start.name, "Alpha");
    assert_eq!(snapshot.end.name, "Gamma");
    assert_eq!(snapshot.current.name, "Alpha");
    assert_eq!(snapshot.path.len(), 1);
    assert_eq!(snapshot.path[0].coord.lat, 10.0);
}

#[test]
fn test_arcs_pair_consecutive_path_points() {
    let registry = triangle();
    let mut session = GameSession::with_route(&registry, "AAA", "CCC").unwrap();

    assert!(session.snapshot(&registry).arcs().is_empty());

    session.submit_guess(&registry, "Beta");
    let snapshot = session.snapshot(&registry);
    let arcs = snapshot.arcs();

    // Winning walk Alpha -> Beta -> Gamma yields two arcs.
    assert_eq!(arcs.len(), 2);
    assert_eq!((arcs[0].start_lat, arcs[0].start_lng), (10.0, 10.0));
    assert_eq!((arcs[0].end_lat, arcs[0].end_lng), (20.0, 20.0));
    assert_eq!((arcs[1].end_lat, arcs[1].end_lng), (30.0, 30.0));
}

#[test]
fn test_feed_event_carries_the_result_tag() {
    let registry = triangle();
    let mut session = GameSession::with_route(&registry, "AAA", "CCC").unwrap();

    let outcome = session.submit_guess(&registry, "ZZZ");
    let event = FeedEvent::new(&outcome, session.snapshot(&registry));
    assert_eq!(event.tag, "unrecognized");
    assert!(event.message.contains("ZZZ"));
    assert_eq!(event.snapshot.lives, 4);

    let outcome = session.submit_guess(&registry, "Beta");
    let event = FeedEvent::new(&outcome, session.snapshot(&registry));
    assert_eq!(event.tag, "victory");
    assert_eq!(event.snapshot.status, GameStatus::Won);
}

#[test]
fn test_boundary_atlas_indexes_features_by_iso_code() {
    let collection = json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ISO_A3": "AAA"}, "geometry": null},
            {"type": "Feature", "properties": {"ISO_A3": "bbb"}, "geometry": null},
            {"type": "Feature", "properties": {"ISO_A3": "-99"}, "geometry": null},
            {"type": "Feature", "properties": {}, "geometry": null}
        ]
    });

    let atlas = BoundaryAtlas::from_feature_collection(collection).unwrap();
    assert_eq!(atlas.len(), 2, "codes upper-cased, unusable ones skipped");
    assert!(atlas.feature("AAA").is_some());
    assert!(atlas.feature("BBB").is_some());
}

#[test]
fn test_boundary_atlas_rejects_non_feature_collections() {
    let result = BoundaryAtlas::from_feature_collection(json!([1, 2, 3]));
    assert_eq!(result.unwrap_err(), GeoError::NotAFeatureCollection);

    let result = BoundaryAtlas::from_feature_collection(json!({"type": "FeatureCollection"}));
    assert_eq!(result.unwrap_err(), GeoError::NotAFeatureCollection);
}
