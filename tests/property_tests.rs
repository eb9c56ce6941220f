//! Property-based tests for the invariants each utility promises.

use desi_text::{mask_identifier, normalize_title, validate_form, FieldMap, Value, INVALID};
use proptest::prelude::*;

fn valid_form(name: String, phone: String, age: u32, pincode: String) -> Value {
    let mut map = FieldMap::new();
    map.insert("name".to_string(), Value::from(name));
    map.insert("email".to_string(), Value::from("someone@example.in"));
    map.insert("phone".to_string(), Value::from(phone));
    map.insert("age".to_string(), Value::from(age));
    map.insert("pincode".to_string(), Value::from(pincode));
    map.insert("state".to_string(), Value::from("Kerala"));
    map.insert("agreeTerms".to_string(), Value::from(true));
    Value::Object(map)
}

proptest! {
    #[test]
    fn prop_mask_keeps_last_four(digits in "[0-9]{12}") {
        let masked = mask_identifier(&digits);
        prop_assert_eq!(masked, format!("XXXX-XXXX-{}", &digits[8..]));
    }

    #[test]
    fn prop_mask_rejects_other_lengths(digits in "[0-9]{0,11}|[0-9]{13,20}") {
        prop_assert_eq!(mask_identifier(&digits), INVALID);
    }

    #[test]
    fn prop_mask_rejects_non_digits(
        prefix in "[0-9]{0,11}",
        bad in "[a-zA-Z/.-]",
        len in 0usize..12
    ) {
        let mut input: String = prefix.chars().take(len).collect();
        input.push_str(&bad);
        while input.len() < 12 {
            input.push('1');
        }
        prop_assert_eq!(mask_identifier(&input), INVALID);
    }

    #[test]
    fn prop_title_is_idempotent(title in "[a-zA-Zß-ÿſİıŉǅǆσςΣΐᾳ \t]{0,40}") {
        let once = normalize_title(&title);
        prop_assert_eq!(normalize_title(&once), once.clone());
    }

    #[test]
    fn prop_title_spacing_and_word_count(title in "[a-zA-Zß-ÿİŉσΣ \t\n]{0,40}") {
        let normalized = normalize_title(&title);
        prop_assert!(!normalized.contains("  "));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert_eq!(
            normalized.split_whitespace().count(),
            title.split_whitespace().count()
        );
    }

    #[test]
    fn prop_valid_forms_have_no_errors(
        name in "[A-Za-z][A-Za-z ]{0,40}[A-Za-z]",
        phone in "[6-9][0-9]{9}",
        age in 16u32..=100,
        pincode in "[1-9][0-9]{5}"
    ) {
        let result = validate_form(&valid_form(name, phone, age, pincode)).unwrap();
        prop_assert!(result.is_valid());
        prop_assert!(result.errors().is_empty());
    }

    #[test]
    fn prop_out_of_range_age_is_the_only_failure(age in prop_oneof![0u32..16, 101u32..1000]) {
        let form = valid_form(
            "Rahul Sharma".to_string(),
            "9876543210".to_string(),
            age,
            "400001".to_string(),
        );
        let result = validate_form(&form).unwrap();
        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.errors().len(), 1);
        prop_assert!(result.message(desi_text::Field::Age).is_some());
    }
}
