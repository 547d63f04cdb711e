//! Unit tests for registrar-types

use proptest::prelude::*;
use test_case::test_case;

use crate::{
    BrandMismatchError, BrandTag, Credits, CreditsError, FieldKind, FieldName, Major, Minor,
    RowId, TaggedCredits, Value, format_teacher_name, major_credits, minor_credits, sum_credits,
    sum_major_credits, sum_minor_credits,
};

// ============================================================================
// Row IDs and field names
// ============================================================================

#[test]
fn row_id_round_trips_through_u64() {
    let id = RowId::from(42);
    assert_eq!(u64::from(id), 42);
    assert_eq!(id.as_u64(), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn field_name_borrows_as_str() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(FieldName::from("firstName"), 1);
    assert_eq!(map.get("firstName"), Some(&1));
    assert_eq!(format!("{:?}", FieldName::new("age")), "FieldName(\"age\")");
}

// ============================================================================
// Values
// ============================================================================

#[test_case(Value::from("Boston"), FieldKind::Text => true; "text is text")]
#[test_case(Value::from(5), FieldKind::Integer => true; "integer is integer")]
#[test_case(Value::from(5), FieldKind::Number => true; "integer is a number")]
#[test_case(Value::from(2.5), FieldKind::Number => true; "real is a number")]
#[test_case(Value::from(2.5), FieldKind::Integer => false; "real is not an integer")]
#[test_case(Value::from(true), FieldKind::Text => false; "boolean is not text")]
#[test_case(Value::from("5"), FieldKind::Integer => false; "numeric text is not an integer")]
#[test_case(Value::Null, FieldKind::Any => false; "null satisfies nothing")]
#[test_case(Value::from(serde_json::json!([1, 2])), FieldKind::Any => true; "json satisfies any")]
fn value_kind_compatibility(value: Value, kind: FieldKind) -> bool {
    value.is_compatible_with(kind)
}

#[test]
fn from_json_maps_scalars_to_their_variants() {
    assert_eq!(Value::from_json(serde_json::json!(null)), Value::Null);
    assert_eq!(Value::from_json(serde_json::json!(false)), Value::Boolean(false));
    assert_eq!(Value::from_json(serde_json::json!(50000)), Value::Integer(50000));
    assert_eq!(Value::from_json(serde_json::json!(1.5)), Value::Real(1.5));
    assert_eq!(Value::from_json(serde_json::json!("Math")), Value::Text("Math".into()));
    assert!(matches!(
        Value::from_json(serde_json::json!({"a": 1})),
        Value::Json(_)
    ));
}

#[test]
fn json_round_trip_preserves_scalars() {
    for value in [
        Value::Boolean(true),
        Value::Integer(-3),
        Value::Real(0.25),
        Value::Text("London".into()),
    ] {
        assert_eq!(Value::from_json(value.to_json()), value);
    }
}

#[test]
fn optional_values_convert_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(5)), Value::Integer(5));
}

#[test]
fn real_values_compare_by_bits() {
    assert_eq!(Value::Real(f64::NAN), Value::Real(f64::NAN));
    assert_ne!(Value::Integer(1), Value::Real(1.0));
}

// ============================================================================
// Name formatting
// ============================================================================

#[test_case("John", "Doe" => "J. Doe"; "simple")]
#[test_case("Sarah", "Johnson" => "S. Johnson"; "longer last name")]
#[test_case("Élodie", "Martin" => "É. Martin"; "non ascii initial")]
#[test_case("", "Doe" => "Doe"; "empty first name")]
fn teacher_name_formatting(first: &str, last: &str) -> String {
    format_teacher_name(first, last)
}

// ============================================================================
// Credits
// ============================================================================

#[test]
fn major_credits_sum() {
    let total = sum_major_credits(major_credits(4), major_credits(3));
    assert_eq!(total, major_credits(7));
    assert_eq!(total.brand(), BrandTag::Major);
}

#[test]
fn minor_credits_sum() {
    let total = sum_minor_credits(minor_credits(2), minor_credits(1));
    assert_eq!(total.credits(), 3);
    assert_eq!(total.to_string(), "3 minor credits");
}

#[test]
fn operands_are_unchanged_after_sum() {
    let math = major_credits(4);
    let science = major_credits(3);
    let _ = sum_credits(math, science);
    assert_eq!(math.credits(), 4);
    assert_eq!(science.credits(), 3);
}

#[test]
fn credits_sum_over_iterator() {
    let total: Credits<Minor> = [1, 2, 3].into_iter().map(minor_credits).sum();
    assert_eq!(total.credits(), 6);
}

#[test]
fn checked_add_reports_overflow() {
    let result = major_credits(u32::MAX).checked_add(major_credits(1));
    assert_eq!(
        result,
        Err(CreditsError::Overflow {
            brand: BrandTag::Major
        })
    );
}

#[test]
fn tagged_combine_same_brand() {
    let total = TaggedCredits::new(BrandTag::Major, 4)
        .combine(TaggedCredits::new(BrandTag::Major, 3))
        .unwrap();
    assert_eq!(total, TaggedCredits::new(BrandTag::Major, 7));
}

#[test]
fn tagged_combine_rejects_cross_brand() {
    let result = TaggedCredits::from(major_credits(4)).combine(minor_credits(2).into());
    assert_eq!(
        result,
        Err(CreditsError::BrandMismatch(BrandMismatchError {
            left: BrandTag::Major,
            right: BrandTag::Minor,
        }))
    );
}

#[test]
fn tagged_converts_back_only_to_its_own_brand() {
    let tagged = TaggedCredits::new(BrandTag::Minor, 2);
    assert_eq!(Credits::<Minor>::try_from(tagged), Ok(minor_credits(2)));
    assert!(Credits::<Major>::try_from(tagged).is_err());
}

#[test]
fn tagged_credits_serialize_brand_lowercase() {
    let json = serde_json::to_value(TaggedCredits::new(BrandTag::Major, 4)).unwrap();
    assert_eq!(json, serde_json::json!({"credits": 4, "brand": "major"}));
}

#[test]
fn tagged_credits_deserialize_through_the_factory() {
    let parsed: TaggedCredits =
        serde_json::from_value(serde_json::json!({"credits": 2, "brand": "minor"})).unwrap();
    assert_eq!(parsed, TaggedCredits::new(BrandTag::Minor, 2));
    assert_eq!(parsed.brand(), BrandTag::Minor);

    let unknown = serde_json::from_value::<TaggedCredits>(
        serde_json::json!({"credits": 2, "brand": "elective"}),
    );
    assert!(unknown.is_err());
}

#[test]
fn brand_tags_come_from_the_type() {
    assert_eq!(Credits::<Major>::new(0).brand(), BrandTag::Major);
    assert_eq!(Credits::<Minor>::new(0).brand(), BrandTag::Minor);
}

proptest! {
    /// Property: same-brand combination is addition of payloads
    #[test]
    fn prop_tagged_combine_adds(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let total = TaggedCredits::new(BrandTag::Minor, a)
            .combine(TaggedCredits::new(BrandTag::Minor, b))
            .unwrap();
        prop_assert_eq!(total.credits(), a + b);
        prop_assert_eq!(total.brand(), BrandTag::Minor);
    }

    /// Property: cross-brand combination never yields a value
    #[test]
    fn prop_cross_brand_always_rejected(a in any::<u32>(), b in any::<u32>()) {
        let result = TaggedCredits::new(BrandTag::Major, a)
            .combine(TaggedCredits::new(BrandTag::Minor, b));
        prop_assert!(
            matches!(result, Err(CreditsError::BrandMismatch(_))),
            "expected brand mismatch"
        );
    }

    /// Property: static and tagged sums agree
    #[test]
    fn prop_static_and_tagged_agree(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let static_total = TaggedCredits::from(sum_credits(major_credits(a), major_credits(b)));
        let tagged_total = TaggedCredits::from(major_credits(a))
            .combine(major_credits(b).into())
            .unwrap();
        prop_assert_eq!(static_total, tagged_total);
    }
}
