use desi_text::{record, validate_form, FieldMap, Number, Value};

#[test]
fn test_record_macro_null_and_booleans() {
    assert_eq!(record!(null), Value::Null);
    assert_eq!(record!(true), Value::Bool(true));
    assert_eq!(record!(false), Value::Bool(false));
}

#[test]
fn test_record_macro_numbers() {
    assert_eq!(record!(42), Value::Number(Number::Integer(42)));
    assert_eq!(record!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(record!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_record_macro_strings() {
    assert_eq!(record!("namaste"), Value::String("namaste".to_string()));
    assert_eq!(record!(""), Value::String(String::new()));
}

#[test]
fn test_record_macro_arrays() {
    assert_eq!(record!([]), Value::Array(vec![]));
    assert_eq!(
        record!([1, "do", true, null]),
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("do".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_record_macro_nested_object() {
    let value = record!({
        "name": "Priya",
        "address": {
            "state": "Goa",
            "pincode": "403001"
        }
    });

    let address = value.get("address").unwrap();
    assert_eq!(address.get("state").and_then(Value::as_str), Some("Goa"));
    assert_eq!(address.get("pincode").and_then(Value::as_str), Some("403001"));
}

#[test]
fn test_record_macro_variables() {
    let phone = String::from("7000000000");
    let age: Option<i64> = None;
    let value = record!({
        "phone": phone,
        "age": age
    });

    assert_eq!(value.get("phone").and_then(Value::as_str), Some("7000000000"));
    assert_eq!(value.get("age"), Some(&Value::Null));
}

#[test]
fn test_record_macro_feeds_validator() {
    let form = record!({
        "name": "Anjali Iyer",
        "email": "anjali@example.co.in",
        "phone": "8123456789",
        "age": "45",
        "pincode": " 560001 ",
        "state": "Karnataka",
        "agreeTerms": "yes"
    });
    assert!(validate_form(&form).unwrap().is_valid());
    assert_eq!(record!({}), Value::Object(FieldMap::new()));
}
