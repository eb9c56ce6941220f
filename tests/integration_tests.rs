use desi_text::{
    mask_identifier, mask_value, normalize_title, normalize_title_value, parse_log_line,
    parse_log_line_value, record, validate_form, Field, LogRecord, Number, Sentiment, Value,
    INVALID,
};
use serde_json::json;

fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_mask_identifier() {
    assert_eq!(mask_identifier("123456781234"), "XXXX-XXXX-1234");
    assert_eq!(mask_identifier("9876"), INVALID);
    assert_eq!(mask_value(&value(json!(123456781234_u64))), INVALID);
    assert_eq!(mask_value(&value(json!(null))), INVALID);
}

#[test]
fn test_normalize_title() {
    assert_eq!(
        normalize_title("  DILWALE   DULHANIA   LE   JAYENGE  "),
        "Dilwale Dulhania Le Jayenge"
    );
    assert_eq!(normalize_title("dil ka kya kare"), "Dil ka Kya Kare");
    assert_eq!(normalize_title_value(&value(json!(["sholay"]))), "");
}

#[test]
fn test_parse_funny_line() {
    let record = parse_log_line("25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂").unwrap();
    assert_eq!(
        record,
        LogRecord {
            date: "25/01/2025".to_string(),
            time: "14:30".to_string(),
            sender: "Rahul".to_string(),
            text: "Bhai party kab hai? 😂".to_string(),
            word_count: 5,
            sentiment: Sentiment::Funny,
        }
    );
}

#[test]
fn test_parse_love_line() {
    let record = parse_log_line("01/12/2024, 09:15 - Priya: I love this song").unwrap();
    assert_eq!(record.date, "01/12/2024");
    assert_eq!(record.time, "09:15");
    assert_eq!(record.sender, "Priya");
    assert_eq!(record.text, "I love this song");
    assert_eq!(record.word_count, 4);
    assert_eq!(record.sentiment, Sentiment::Love);
}

#[test]
fn test_parse_non_string() {
    assert_eq!(parse_log_line_value(&value(json!(42))), None);
}

#[test]
fn test_log_record_json_shape() {
    let record = parse_log_line("01/12/2024, 09:15 - Priya: I love this song").unwrap();
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "date": "01/12/2024",
            "time": "09:15",
            "sender": "Priya",
            "text": "I love this song",
            "wordCount": 4,
            "sentiment": "love"
        })
    );
}

#[test]
fn test_validate_valid_form() {
    let form = value(json!({
        "name": "Rahul Sharma",
        "email": "rahul@gmail.com",
        "phone": "9876543210",
        "age": 20,
        "pincode": "400001",
        "state": "Maharashtra",
        "agreeTerms": true
    }));

    let result = validate_form(&form).unwrap();
    assert!(result.is_valid());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "isValid": true, "errors": {} })
    );
}

#[test]
fn test_validate_invalid_form() {
    let form = value(json!({
        "name": "",
        "email": "bad-email",
        "phone": "12345",
        "age": 10,
        "pincode": "012345",
        "state": null,
        "agreeTerms": false
    }));

    let result = validate_form(&form).unwrap();
    assert!(!result.is_valid());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "isValid": false,
            "errors": {
                "name": "Name must be 2-50 characters",
                "email": "Invalid email format",
                "phone": "Invalid Indian phone number",
                "age": "Age must be an integer between 16 and 100",
                "pincode": "Invalid Indian pincode",
                "state": "State is required",
                "agreeTerms": "Must agree to terms"
            }
        })
    );
}

#[test]
fn test_validate_only_reports_failed_fields() {
    let form = value(json!({
        "name": "Rahul Sharma",
        "email": "rahul@gmail",
        "phone": "9876543210",
        "age": "22",
        "state": "Maharashtra",
        "agreeTerms": 1
    }));

    let result = validate_form(&form).unwrap();
    let failed: Vec<Field> = result.failed_fields().collect();
    assert_eq!(failed, vec![Field::Email, Field::Pincode]);
    assert_eq!(result.message(Field::Age), None);
}

#[test]
fn test_validate_non_object() {
    assert!(validate_form(&value(json!("form"))).is_none());
    assert!(validate_form(&value(json!(null))).is_none());
    assert!(validate_form(&value(json!([1, 2]))).is_none());
}

#[test]
fn test_record_json_roundtrip() {
    let form = record!({
        "name": "Rahul Sharma",
        "age": 20,
        "height": 1.75,
        "state": null,
        "agreeTerms": true,
        "tags": ["student", "hosteller"]
    });

    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(
        json,
        json!({
            "name": "Rahul Sharma",
            "age": 20,
            "height": 1.75,
            "state": null,
            "agreeTerms": true,
            "tags": ["student", "hosteller"]
        })
    );

    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back.get("age"), Some(&Value::Number(Number::Integer(20))));
    assert_eq!(back.get("height"), Some(&Value::Number(Number::Float(1.75))));
    assert_eq!(back, form);
}

#[test]
fn test_special_numbers_serialize_as_null() {
    let json = serde_json::to_value(Value::Number(Number::NaN)).unwrap();
    assert_eq!(json, json!(null));
}
