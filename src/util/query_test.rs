use super::*;

use proptest::prelude::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_leading_question_mark() {
    let with = QueryMap::parse("?page=2&sort=name");
    let without = QueryMap::parse("page=2&sort=name");
    assert_eq!(with, without);
    assert_eq!(with.get("page"), Some("2"));
    assert_eq!(with.get("sort"), Some("name"));
}

#[test]
fn parse_empty_search_is_empty_map() {
    assert!(QueryMap::parse("").is_empty());
    assert!(QueryMap::parse("?").is_empty());
}

#[test]
fn parse_drops_empty_values() {
    let map = QueryMap::parse("?a=&b=1&c");
    assert_eq!(map.len(), 1);
    assert!(!map.contains_key("a"));
    assert!(!map.contains_key("c"));
    assert_eq!(map.get("b"), Some("1"));
}

#[test]
fn parse_repeated_key_keeps_last_value_at_first_position() {
    let map = QueryMap::parse("tag=a&page=1&tag=b");
    let pairs: Vec<_> = map.iter().collect();
    assert_eq!(pairs, vec![("tag", "b"), ("page", "1")]);
}

#[test]
fn parse_decodes_form_encoding() {
    let map = QueryMap::parse("?q=hello+world&path=%2Fboards%2F1");
    assert_eq!(map.get("q"), Some("hello world"));
    assert_eq!(map.get("path"), Some("/boards/1"));
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn insert_replaces_in_place_and_appends_new_keys() {
    let mut map = QueryMap::parse("a=1&b=2");
    map.insert("a", "9");
    map.insert("c", "3");
    let pairs: Vec<_> = map.iter().collect();
    assert_eq!(pairs, vec![("a", "9"), ("b", "2"), ("c", "3")]);
}

#[test]
fn set_none_or_empty_removes_only_that_key() {
    let mut map = QueryMap::parse("a=1&b=2&c=3");
    map.set("a", None);
    map.set("c", Some(""));
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![("b", "2")]);
}

#[test]
fn remove_returns_previous_value() {
    let mut map = QueryMap::parse("a=1");
    assert_eq!(map.remove("a").as_deref(), Some("1"));
    assert_eq!(map.remove("a"), None);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn empty_map_serializes_without_question_mark() {
    let map = QueryMap::new();
    assert_eq!(map.to_query_string(), "");
    assert_eq!(map.to_search(), "");
}

#[test]
fn serialization_follows_insertion_order() {
    let map: QueryMap = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
    assert_eq!(map.to_query_string(), "z=1&a=2&m=3");
    assert_eq!(map.to_search(), "?z=1&a=2&m=3");
}

#[test]
fn from_iter_skips_empty_values() {
    let map: QueryMap = [("a", "1"), ("b", ""), ("c", "3")].into_iter().collect();
    assert_eq!(map.to_query_string(), "a=1&c=3");
}

#[test]
fn round_trip_preserves_entries_with_reserved_characters() {
    let map: QueryMap = [
        ("q", "hello world"),
        ("filter", "a&b=c"),
        ("path", "/boards/42?x"),
        ("emoji", "ünïcode ✓"),
        ("dropped", ""),
    ]
    .into_iter()
    .collect();

    let decoded = QueryMap::parse(&map.to_search());
    assert_eq!(decoded, map);
    assert_eq!(decoded.len(), 4);
}

proptest! {
    #[test]
    fn round_trip_holds_for_any_mapping(
        pairs in proptest::collection::vec((any::<String>(), any::<String>()), 0..8),
    ) {
        let map: QueryMap = pairs.into_iter().collect();
        prop_assert_eq!(QueryMap::parse(&map.to_search()), map.clone());
        prop_assert_eq!(QueryMap::parse(&map.to_query_string()), map);
    }
}
