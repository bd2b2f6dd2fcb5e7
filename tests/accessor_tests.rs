//! # Accessor Tests
//!
//! Public API tests against the advert fixture:
//! - raw resolution (terminal maps, leaves, misses, empty path)
//! - typed narrowing (string, integer, timestamp)
//! - subdocuments stored as JSON strings
//! - lenient vs strict resolution

use nested::{Map, Mode, NestedError, NestedValue, TimeLayout};
use serde_json::{json, Value};

// ============================================================================
// FIXTURES
// ============================================================================

/// Truncated JSON: a quote is missing after the first key
const EXTRAS_ERROR: &str =
    r#"{"lorem_ipsu:"www.lorem_bacon.com","id":"da9883jw32dl12j120un9sa87ds5asn"}}"#;

fn extras() -> Value {
    json!({
        "lorem_ipsum": {"url": "www.lorem-ipsum.com", "id": 12},
        "lorem_bacon": {"url": "www.lorem_bacon.com", "id": "da9883jw32dl12j120un9sa87ds5asn"}
    })
}

fn advert() -> Map {
    Map::from_value(json!({
        "advert": {
            "id": "12",
            "title": "Lorem Ipsum",
            "status": {"code": "active", "url": "www.loremipsum.com", "ttl": 123123},
            "contact": {"name": "daniel3", "phones": ["790123123", "790123546"]},
            "timer": {"date_time": "1987-01-29T19:00:00Z", "birth": "29/01/1987"},
            "extras": extras().to_string(),
            "extras_error": EXTRAS_ERROR
        }
    }))
    .unwrap()
}

// ============================================================================
// RAW RESOLUTION
// ============================================================================

#[test]
fn test_value_table() {
    let map = advert();
    let cases: Vec<(&str, Option<NestedValue>)> = vec![
        ("", None),
        ("advert.id", Some("12".into())),
        ("advert.status.code", Some("active".into())),
        ("advert.status.ttl", Some(NestedValue::Integer(123123))),
        ("advert.bananas", None),
    ];

    for (path, expected) in cases {
        assert_eq!(map.value(path).cloned(), expected, "path {path:?}");
    }
}

#[test]
fn test_terminal_map() {
    let map = advert();
    let expected = Map::from_value(json!({
        "name": "daniel3",
        "phones": ["790123123", "790123546"]
    }))
    .unwrap();
    assert_eq!(map.value("advert.contact"), Some(&NestedValue::Map(expected)));
}

#[test]
fn test_empty_path_on_empty_map() {
    assert_eq!(Map::new().value(""), None);
    assert_eq!(nested::value("", &Map::new()), None);
}

#[test]
fn test_value_from_free_function() {
    let data = Map::from_value(json!({
        "person": {"name": "Rodrigo", "level": 3},
        "session": {"token": "62vsy29v8y4v248v5y97v1e21v35ce97"}
    }))
    .unwrap();

    let session = nested::value("session", &data).and_then(NestedValue::as_map).unwrap();
    assert_eq!(session.string("token"), Some("62vsy29v8y4v248v5y97v1e21v35ce97"));
    assert_eq!(nested::get_int("person.level", &data), 3);
    assert_eq!(nested::get_string("person.name", &data), "Rodrigo");
}

// ============================================================================
// TYPED NARROWING
// ============================================================================

#[test]
fn test_int_and_string_are_exclusive() {
    let map = advert();
    for path in [
        "advert.id",
        "advert.title",
        "advert.status.ttl",
        "advert.status.code",
        "advert.contact",
        "advert.contact.phones",
        "advert.bananas",
        "advert.title.id",
    ] {
        assert!(
            !(map.int(path).is_some() && map.string(path).is_some()),
            "both accessors matched {path}"
        );
    }
}

#[test]
fn test_int_leaf() {
    let map = advert();
    assert_eq!(map.int("advert.status.ttl"), Some(123123));
    assert_eq!(map.string("advert.status.ttl"), None);
}

#[test]
fn test_int_misses() {
    let map = advert();
    assert_eq!(map.int("advert.id"), None);
    assert_eq!(map.int("advert.title.id"), None);
    assert_eq!(map.int("advert.bananas"), None);
    assert_eq!(map.get_int("advert.id"), 0);
}

#[test]
fn test_time_default_layout() {
    let map = advert();
    let expected = chrono::DateTime::parse_from_rfc3339("1987-01-29T19:00:00Z").unwrap();
    assert_eq!(map.time("advert.timer.date_time", ""), Some(expected));
    assert_eq!(nested::time("advert.timer.date_time", &map, TimeLayout::Rfc3339), Some(expected));
}

#[test]
fn test_time_wrong_layout() {
    let map = advert();
    assert_eq!(map.time("advert.timer.date_time", TimeLayout::AnsiC), None);
    assert_eq!(map.time("advert.timer.date_time", "ansic"), None);
    assert_eq!(map.time("advert.bananas", ""), None);
}

#[test]
fn test_time_custom_layout() {
    let map = advert();
    let birth = map.get_time("advert.timer.birth", "%d/%m/%Y");
    assert_eq!(birth.to_rfc3339(), "1987-01-29T00:00:00+00:00");
}

// ============================================================================
// SUBDOCUMENTS
// ============================================================================

#[test]
fn test_sub_from_string_round_trip() {
    let map = advert();
    let sub = map.sub_from_string("advert.extras").unwrap();
    assert_eq!(sub, Map::from_value(extras()).unwrap());
    assert_eq!(sub.string("lorem_bacon.id"), Some("da9883jw32dl12j120un9sa87ds5asn"));
}

#[test]
fn test_sub_from_string_malformed() {
    let map = advert();
    assert_eq!(map.sub_from_string("advert.extras_error"), None);
    assert!(nested::get_sub_from_string("advert.extras_error", &map).is_empty());
    assert_eq!(nested::sub_from_string("advert.status.ttl", &map), None);
}

// ============================================================================
// RESOLUTION MODES
// ============================================================================

// Lenient resolution returns the first leaf on the path even when segments
// remain unconsumed. Strict mode is the opt-in alternative.
#[test]
fn test_lenient_short_circuit_is_default() {
    let map = advert();
    assert_eq!(map.string("advert.title.id"), Some("Lorem Ipsum"));
    assert_eq!(map.value_with("advert.title.id", Mode::Strict), None);
    assert_eq!(
        map.value_with("advert.title", Mode::Strict),
        Some(&NestedValue::from("Lorem Ipsum"))
    );
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_construction_from_untyped_input() {
    assert!(Map::from_json("{}").unwrap().is_empty());
    assert!(matches!(
        Map::try_from(json!(["not", "a", "map"])),
        Err(NestedError::InvalidInput { found: "array" })
    ));
    assert!(matches!(Map::from_json("not json"), Err(NestedError::Json(_))));
}
