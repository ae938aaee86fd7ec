use serde_json::json;

use super::*;

fn raw(value: Value) -> RawLead {
    serde_json::from_value(value).expect("any JSON value is a RawLead")
}

// -----------------------------------------------------------------------
// RawLead deserialization
// -----------------------------------------------------------------------

#[test]
fn array_deserializes_as_record() {
    let lead = raw(json!(["Acme", "1 Main St", "bakery"]));
    assert!(matches!(lead, RawLead::Record(ref slots) if slots.len() == 3));
}

#[test]
fn string_deserializes_as_bare() {
    let lead = raw(json!("Acme"));
    assert_eq!(lead, RawLead::Bare(json!("Acme")));
}

#[test]
fn object_deserializes_as_bare() {
    let lead = raw(json!({"title": "Acme"}));
    assert!(matches!(lead, RawLead::Bare(Value::Object(_))));
}

#[test]
fn from_value_splits_arrays_and_scalars() {
    assert!(matches!(RawLead::from(json!(["a"])), RawLead::Record(_)));
    assert!(matches!(RawLead::from(json!("a")), RawLead::Bare(_)));
}

// -----------------------------------------------------------------------
// normalize
// -----------------------------------------------------------------------

#[test]
fn normalize_full_record() {
    let lead = normalize(&raw(json!(["Acme", "1 Main St", "bakery"])));
    assert_eq!(
        lead,
        NormalizedLead {
            name: Some("Acme".to_owned()),
            address: Some("1 Main St".to_owned()),
            category: Some("bakery".to_owned()),
            name_length: 4,
        }
    );
}

#[test]
fn normalize_bare_value_is_name_only() {
    let lead = normalize(&raw(json!("Acme")));
    assert_eq!(lead.name.as_deref(), Some("Acme"));
    assert!(lead.address.is_none());
    assert!(lead.category.is_none());
}

#[test]
fn normalize_short_record_leaves_missing_slots_absent() {
    let lead = normalize(&raw(json!(["Acme"])));
    assert_eq!(lead.name.as_deref(), Some("Acme"));
    assert!(lead.address.is_none());
    assert!(lead.category.is_none());
}

#[test]
fn normalize_empty_record_is_all_absent() {
    assert_eq!(normalize(&raw(json!([]))), NormalizedLead::default());
}

#[test]
fn normalize_treats_null_and_empty_string_as_absent() {
    let lead = normalize(&raw(json!(["", null, "cafe"])));
    assert!(lead.name.is_none());
    assert!(lead.address.is_none());
    assert_eq!(lead.category.as_deref(), Some("cafe"));
}

#[test]
fn normalize_treats_false_and_zero_as_absent() {
    let lead = normalize(&raw(json!([false, 0, true])));
    assert!(lead.name.is_none());
    assert!(lead.address.is_none());
    assert_eq!(lead.category.as_deref(), Some("true"));
}

#[test]
fn normalize_renders_numbers_as_text() {
    let lead = normalize(&raw(json!([42, "2 Side St"])));
    assert_eq!(lead.name.as_deref(), Some("42"));
    assert_eq!(lead.name_length, 0);
}

#[test]
fn normalize_name_length_counts_utf16_units() {
    let lead = normalize(&raw(json!(["Café", null])));
    assert_eq!(lead.name_length, 4);
}

#[test]
fn normalize_array_name_length_is_element_count() {
    let lead = normalize(&raw(json!([["x", "y"], "addr"])));
    assert_eq!(lead.name.as_deref(), Some(r#"["x","y"]"#));
    assert_eq!(lead.name_length, 2);
}

#[test]
fn from_text_matches_normalized_string_record() {
    let built = NormalizedLead::from_text(Some("Acme"), Some(""), Some("bakery"));
    assert_eq!(built, normalize(&raw(json!(["Acme", "", "bakery"]))));
}

#[test]
fn normalize_ignores_slots_after_category() {
    let lead = normalize(&raw(json!(["Acme", "1 Main St", "bakery", "extra", 5])));
    assert_eq!(lead.category.as_deref(), Some("bakery"));
}

#[test]
fn normalize_bare_null_is_all_absent() {
    assert_eq!(normalize(&raw(json!(null))), NormalizedLead::default());
}

#[test]
fn record_constructor_matches_deserialized_shape() {
    let built = RawLead::record(Some("A"), Some("addr"), None);
    assert_eq!(built, raw(json!(["A", "addr", null])));
}

// -----------------------------------------------------------------------
// search_url
// -----------------------------------------------------------------------

#[test]
fn search_url_joins_name_and_address() {
    let lead = normalize(&raw(json!(["Acme", "1 Main St", "bakery"])));
    assert_eq!(
        lead.search_url(),
        "https://www.google.com/search?q=Acme%201%20Main%20St"
    );
}

#[test]
fn search_url_skips_absent_address() {
    let lead = normalize(&raw(json!("Joe's Diner")));
    assert_eq!(lead.search_url(), "https://www.google.com/search?q=Joe's%20Diner");
}

#[test]
fn search_url_escapes_reserved_characters() {
    let lead = normalize(&raw(json!(["A&B", "#5 / Elm"])));
    assert_eq!(
        lead.search_url(),
        "https://www.google.com/search?q=A%26B%20%235%20%2F%20Elm"
    );
}

// -----------------------------------------------------------------------
// SearchRequest
// -----------------------------------------------------------------------

#[test]
fn search_request_serializes_with_wire_field_names() {
    let request = SearchRequest::new("financial_services", "Austin");
    let encoded = serde_json::to_string(&request).unwrap();
    assert_eq!(
        encoded,
        r#"{"business_name":"financial_services","location":"Austin"}"#
    );
}
